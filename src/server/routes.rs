// REST API routes for the browser front end
// Every handler delegates to a command; status codes carry the outcome class.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::catalog::CategoryFilter;
use crate::commands::{
    self, AppState, CopyOutcome, GenerateOutcome, GenreDetailDTO, GenreListItemDTO, SessionDTO,
    StatusDTO,
};

// ---- Request types ----

#[derive(Deserialize)]
pub struct GenreListParams {
    pub q: Option<String>,
    pub category: Option<CategoryFilter>,
}

#[derive(Deserialize)]
pub struct SelectRequest {
    pub genre_id: u32,
}

#[derive(Deserialize)]
pub struct ConceptRequest {
    pub concept: String,
}

#[derive(Deserialize, Default)]
pub struct GenerateRequest {
    #[serde(default)]
    pub concept: Option<String>,
}

#[derive(Deserialize)]
pub struct CopyRequest {
    pub text: String,
}

// ---- Route registration ----

pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/genres", get(list_genres))
        .route("/api/genres/{id}", get(get_genre))
        .route("/api/session", get(get_session))
        .route("/api/select", post(select_genre))
        .route("/api/concept", post(set_concept))
        .route("/api/generate", post(generate_preset))
        .route("/api/copy", post(copy_text))
}

// ---- Handlers ----

async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusDTO> {
    Json(commands::catalog::get_status(&state))
}

async fn list_genres(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GenreListParams>,
) -> Json<Vec<GenreListItemDTO>> {
    Json(commands::catalog::list_genres(&state, params.q, params.category))
}

async fn get_genre(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<GenreDetailDTO>, StatusCode> {
    commands::catalog::get_genre(&state, id)
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn get_session(State(state): State<Arc<AppState>>) -> Json<SessionDTO> {
    Json(commands::catalog::get_session(&state))
}

async fn select_genre(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectRequest>,
) -> Json<SessionDTO> {
    Json(commands::catalog::select_genre(&state, body.genre_id))
}

async fn set_concept(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ConceptRequest>,
) -> Json<SessionDTO> {
    Json(commands::catalog::set_concept(&state, body.concept))
}

async fn generate_preset(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Response {
    // An empty body means "use the stored concept"
    let body: GenerateRequest = if body.is_empty() {
        GenerateRequest::default()
    } else {
        match serde_json::from_slice(&body) {
            Ok(body) => body,
            Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
        }
    };
    let outcome = commands::generate::generate_preset(&state, body.concept).await;
    let status = match &outcome {
        GenerateOutcome::Skipped => return StatusCode::NO_CONTENT.into_response(),
        GenerateOutcome::Generated { .. } => StatusCode::OK,
        GenerateOutcome::Busy | GenerateOutcome::Discarded => StatusCode::CONFLICT,
        GenerateOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(outcome)).into_response()
}

async fn copy_text(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CopyRequest>,
) -> (StatusCode, Json<CopyOutcome>) {
    let outcome = commands::clipboard::copy_text(&state, body.text).await;
    let status = match outcome {
        CopyOutcome::Copied => StatusCode::OK,
        CopyOutcome::Failed { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(outcome))
}
