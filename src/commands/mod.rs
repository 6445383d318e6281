// App operations over the shared state
//
// Each function is one user action. The HTTP routes are thin wrappers
// around these.

pub mod catalog;
pub mod clipboard;
pub mod generate;

use crate::ai::TextGenerator;
use crate::catalog::Catalog;
use crate::clipboard::Clipboard;
use crate::session::SessionState;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

// Re-export commonly used items
pub use catalog::{GenreDetailDTO, GenreListItemDTO, SessionDTO, StatusDTO};
pub use clipboard::CopyOutcome;
pub use generate::GenerateOutcome;

/// Application state: the single session plus its external collaborators
pub struct AppState {
    pub session: Mutex<SessionState>,
    pub generator: Arc<dyn TextGenerator>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        generator: Arc<dyn TextGenerator>,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        AppState {
            session: Mutex::new(SessionState::new(catalog)),
            generator,
            clipboard,
        }
    }

    /// Lock the session. Never held across an `.await`.
    pub fn session(&self) -> MutexGuard<'_, SessionState> {
        // A panic mid-update leaves plain data behind; keep serving it
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
