// Copy a prompt to the host clipboard

use super::AppState;
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CopyOutcome {
    Copied,
    Failed { error: String },
}

/// Write `text` to the clipboard and show the toast on success.
/// Failures are logged only; no toast is shown.
pub async fn copy_text(state: &AppState, text: String) -> CopyOutcome {
    match state.clipboard.write_text(&text).await {
        Ok(()) => {
            state.session().show_toast();
            debug!(chars = text.chars().count(), "Copied prompt to clipboard");
            CopyOutcome::Copied
        }
        Err(e) => {
            warn!(error = %e, "Failed to copy text");
            CopyOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{GenerateError, TextGenerator};
    use crate::catalog::Catalog;
    use crate::clipboard::{Clipboard, ClipboardError, UnavailableClipboard};
    use crate::commands::catalog::get_session;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    struct NoGenerator;

    #[async_trait]
    impl TextGenerator for NoGenerator {
        async fn generate_json(&self, _instruction: &str) -> Result<String, GenerateError> {
            Err(GenerateError::EmptyResponse)
        }
    }

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Mutex<Option<String>>,
    }

    #[async_trait]
    impl Clipboard for MemoryClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.contents.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    fn state_with(clipboard: Arc<dyn Clipboard>) -> AppState {
        AppState::new(Catalog::embedded().unwrap(), Arc::new(NoGenerator), clipboard)
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_shows_toast_for_two_seconds() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let state = state_with(clipboard.clone());

        let outcome = copy_text(&state, "lofi, rainy".to_string()).await;
        assert_eq!(outcome, CopyOutcome::Copied);
        assert_eq!(clipboard.contents.lock().unwrap().as_deref(), Some("lofi, rainy"));
        assert!(get_session(&state).toast.visible);

        // Unrelated input does not extend the toast
        tokio::time::advance(Duration::from_millis(1500)).await;
        crate::commands::catalog::select_genre(&state, 2);
        assert!(get_session(&state).toast.visible);

        tokio::time::advance(Duration::from_millis(500)).await;
        assert!(!get_session(&state).toast.visible);
    }

    #[tokio::test]
    async fn test_failed_copy_shows_no_toast() {
        let state = state_with(Arc::new(UnavailableClipboard));
        let outcome = copy_text(&state, "lofi".to_string()).await;
        assert!(matches!(outcome, CopyOutcome::Failed { .. }));
        assert!(!get_session(&state).toast.visible);
    }
}
