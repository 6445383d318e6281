// Catalog browsing: status, filtered list, detail, selection, session view

use super::AppState;
use crate::ai::GeneratedPreset;
use crate::catalog::{radar_points, CatalogSummary, CategoryFilter, CategoryStyle, GenreRecord, RadarPoint};
use crate::clipboard::COPY_TOAST_MESSAGE;
use crate::session::SessionState;
use serde::Serialize;

/// Sidebar row
#[derive(Debug, Clone, Serialize)]
pub struct GenreListItemDTO {
    pub id: u32,
    pub name: &'static str,
    pub category: &'static str,
    pub selected: bool,
}

/// Detail card: the record plus everything the view derives from it
#[derive(Debug, Clone, Serialize)]
pub struct GenreDetailDTO {
    #[serde(flatten)]
    pub genre: &'static GenreRecord,
    pub style: CategoryStyle,
    pub radar: Vec<RadarPoint>,
    pub prompt_count: usize,
}

impl From<&'static GenreRecord> for GenreDetailDTO {
    fn from(genre: &'static GenreRecord) -> Self {
        GenreDetailDTO {
            genre,
            style: CategoryStyle::for_category(genre.category),
            radar: radar_points(genre),
            prompt_count: genre.prompts.len(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ToastDTO {
    pub visible: bool,
    pub message: &'static str,
}

/// Everything the front end needs to redraw
#[derive(Debug, Clone, Serialize)]
pub struct SessionDTO {
    pub search_term: String,
    pub category_filter: CategoryFilter,
    pub genres: Vec<GenreListItemDTO>,
    pub selected: GenreDetailDTO,
    pub concept: String,
    pub generated: Option<GeneratedPreset>,
    pub generating: bool,
    pub toast: ToastDTO,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusDTO {
    pub name: &'static str,
    pub version: &'static str,
    pub catalog: CatalogSummary,
    pub selected_prompt_count: usize,
}

fn list_items(session: &SessionState) -> Vec<GenreListItemDTO> {
    let selected_id = session.selected().id;
    session
        .visible_genres()
        .into_iter()
        .map(|genre| GenreListItemDTO {
            id: genre.id,
            name: genre.name,
            category: genre.category.label(),
            selected: genre.id == selected_id,
        })
        .collect()
}

fn session_view(session: &SessionState) -> SessionDTO {
    let toast = session.toast();
    SessionDTO {
        search_term: session.search_term().to_string(),
        category_filter: session.category_filter(),
        genres: list_items(session),
        selected: GenreDetailDTO::from(session.selected()),
        concept: session.concept().to_string(),
        generated: session.generated().cloned(),
        generating: session.is_generating(),
        toast: ToastDTO {
            visible: toast.is_visible(),
            message: COPY_TOAST_MESSAGE,
        },
    }
}

pub fn get_status(state: &AppState) -> StatusDTO {
    let session = state.session();
    StatusDTO {
        name: "Suno v5 Prompt Lab Pro",
        version: env!("CARGO_PKG_VERSION"),
        catalog: session.catalog().summary(),
        selected_prompt_count: session.selected().prompts.len(),
    }
}

/// Filter the sidebar. Omitted parameters keep the session's current value.
pub fn list_genres(
    state: &AppState,
    search_term: Option<String>,
    category_filter: Option<CategoryFilter>,
) -> Vec<GenreListItemDTO> {
    let mut session = state.session();
    if let Some(term) = search_term {
        session.set_search_term(term);
    }
    if let Some(filter) = category_filter {
        session.set_category_filter(filter);
    }
    list_items(&session)
}

/// Look up a genre without changing the selection
pub fn get_genre(state: &AppState, genre_id: u32) -> Option<GenreDetailDTO> {
    state
        .session()
        .catalog()
        .get(genre_id)
        .map(GenreDetailDTO::from)
}

pub fn select_genre(state: &AppState, genre_id: u32) -> SessionDTO {
    let mut session = state.session();
    session.select(genre_id);
    session_view(&session)
}

pub fn set_concept(state: &AppState, concept: String) -> SessionDTO {
    let mut session = state.session();
    session.set_concept(concept);
    session_view(&session)
}

pub fn get_session(state: &AppState) -> SessionDTO {
    session_view(&state.session())
}
