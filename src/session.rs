// Session state for one running app
//
// Owns everything the catalog view derives from: search term, category
// filter, the single selected genre, the concept text, the generated preset,
// the in-flight generation and the copy toast. One value, passed around
// explicitly; the app wraps it in a mutex.

use crate::ai::{GenerateError, GeneratedPreset};
use crate::catalog::{filter_genres, Catalog, CategoryFilter, GenreRecord};
use crate::clipboard::Toast;
use tracing::{debug, info};

/// Identifies one submitted generation. Handed back on settle so a late
/// answer can be matched against the selection it was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub request_id: u64,
    pub genre_id: u32,
    pub genre_name: &'static str,
    pub concept: String,
    selection_epoch: u64,
}

/// Result of trying to start a generation
#[derive(Debug, PartialEq, Eq)]
pub enum Submission {
    /// Concept is blank; nothing to do
    Empty,
    /// Another generation is still in flight
    Busy,
    Started(GenerationTicket),
}

/// What happened to a settled generation
#[derive(Debug)]
pub enum Settled {
    Applied(GeneratedPreset),
    Failed(GenerateError),
    /// Selection changed while the request was in flight; result dropped
    Stale,
}

#[derive(Debug)]
pub struct SessionState {
    catalog: Catalog,
    search_term: String,
    category_filter: CategoryFilter,
    selected: &'static GenreRecord,
    concept: String,
    generated: Option<GeneratedPreset>,
    in_flight: Option<u64>,
    next_request_id: u64,
    /// Bumped on every `select`
    selection_epoch: u64,
    toast: Toast,
}

impl SessionState {
    pub fn new(catalog: Catalog) -> Self {
        SessionState {
            catalog,
            search_term: String::new(),
            category_filter: CategoryFilter::All,
            selected: catalog.first(),
            concept: String::new(),
            generated: None,
            in_flight: None,
            next_request_id: 1,
            selection_epoch: 0,
            toast: Toast::default(),
        }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    // --- Filter ---

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.category_filter
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    /// Sidebar list for the current search term and category filter
    pub fn visible_genres(&self) -> Vec<&'static GenreRecord> {
        let visible = filter_genres(
            self.catalog.genres(),
            &self.search_term,
            self.category_filter,
        );
        debug!(
            term = %self.search_term,
            category = %self.category_filter,
            count = visible.len(),
            "Filtered catalog"
        );
        visible
    }

    // --- Selection ---

    pub fn selected(&self) -> &'static GenreRecord {
        self.selected
    }

    /// Select a genre, falling back to the first one for unknown ids.
    /// Always drops the generated preset and the concept text.
    pub fn select(&mut self, genre_id: u32) -> &'static GenreRecord {
        let genre = self.catalog.resolve(genre_id);
        if genre.id != genre_id {
            debug!(requested = genre_id, fallback = genre.id, "Unknown genre id, using default");
        }

        self.selected = genre;
        self.generated = None;
        self.concept.clear();
        self.selection_epoch += 1;

        info!(genre_id = genre.id, name = genre.name, "Selected genre");
        genre
    }

    // --- Generation ---

    pub fn concept(&self) -> &str {
        &self.concept
    }

    pub fn set_concept(&mut self, concept: impl Into<String>) {
        self.concept = concept.into();
    }

    pub fn generated(&self) -> Option<&GeneratedPreset> {
        self.generated.as_ref()
    }

    pub fn is_generating(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a generation for the selected genre. Rejects blank concepts and
    /// overlapping submissions without touching any other state.
    pub fn begin_generation(&mut self, concept: &str) -> Submission {
        if concept.trim().is_empty() {
            return Submission::Empty;
        }
        if self.in_flight.is_some() {
            return Submission::Busy;
        }

        let request_id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(request_id);

        Submission::Started(GenerationTicket {
            request_id,
            genre_id: self.selected.id,
            genre_name: self.selected.name,
            concept: concept.to_string(),
            selection_epoch: self.selection_epoch,
        })
    }

    /// Settle a generation. The busy flag is released unconditionally; the
    /// result only lands if the selection is still the one it was asked for.
    pub fn finish_generation(
        &mut self,
        ticket: &GenerationTicket,
        result: Result<GeneratedPreset, GenerateError>,
    ) -> Settled {
        if self.in_flight == Some(ticket.request_id) {
            self.in_flight = None;
        }

        if ticket.genre_id != self.selected.id || ticket.selection_epoch != self.selection_epoch {
            debug!(
                request_id = ticket.request_id,
                requested_for = ticket.genre_id,
                current = self.selected.id,
                "Discarding stale generation result"
            );
            return Settled::Stale;
        }

        match result {
            Ok(preset) => {
                self.generated = Some(preset.clone());
                Settled::Applied(preset)
            }
            Err(e) => {
                self.generated = None;
                Settled::Failed(e)
            }
        }
    }

    /// Release the busy flag for a request that will never settle, e.g. the
    /// caller went away. No-op once the request has settled.
    pub fn abandon_generation(&mut self, request_id: u64) -> bool {
        if self.in_flight != Some(request_id) {
            return false;
        }
        self.in_flight = None;
        info!(request_id, "Generation abandoned before settling");
        true
    }

    // --- Copy acknowledgment ---

    pub fn toast(&self) -> Toast {
        self.toast
    }

    pub fn show_toast(&mut self) {
        self.toast.show();
    }
}
