// AI preset generation for the selected genre
//
// One remote call per submission. The session lock is released while the
// call is outstanding so browsing keeps working; the busy flag blocks a
// second submission until this one settles or is dropped.

use super::AppState;
use crate::ai::{build_preset_instruction, parse_preset, GeneratedPreset};
use crate::session::{Settled, Submission};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GenerateOutcome {
    /// Blank concept, nothing sent
    Skipped,
    /// A generation is already in flight
    Busy,
    Generated { preset: GeneratedPreset },
    /// Selection changed before the answer arrived
    Discarded,
    Failed { error: String },
}

/// Releases the busy flag if the generation future is dropped before the
/// remote call settles (client disconnect, task abort).
struct InFlightGuard<'a> {
    state: &'a AppState,
    request_id: u64,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.state.session().abandon_generation(self.request_id);
    }
}

/// Generate a preset from `concept`, or from the stored concept when `None`
pub async fn generate_preset(state: &AppState, concept: Option<String>) -> GenerateOutcome {
    let submission = {
        let mut session = state.session();
        let submitted = concept.unwrap_or_else(|| session.concept().to_string());
        let submission = session.begin_generation(&submitted);
        // A rejected overlap must not rewrite the concept of the running request
        if submission != Submission::Busy {
            session.set_concept(submitted);
        }
        submission
    };

    let ticket = match submission {
        Submission::Empty => return GenerateOutcome::Skipped,
        Submission::Busy => {
            info!("Generation already in progress, ignoring submission");
            return GenerateOutcome::Busy;
        }
        Submission::Started(ticket) => ticket,
    };

    info!(
        request_id = ticket.request_id,
        genre = ticket.genre_name,
        "Requesting AI preset"
    );
    let _guard = InFlightGuard {
        state,
        request_id: ticket.request_id,
    };

    let instruction = build_preset_instruction(ticket.genre_name, &ticket.concept);
    let result = match state.generator.generate_json(&instruction).await {
        Ok(text) => parse_preset(&text),
        Err(e) => Err(e),
    };

    let settled = state.session().finish_generation(&ticket, result);
    match settled {
        Settled::Applied(preset) => GenerateOutcome::Generated { preset },
        Settled::Stale => {
            info!(request_id = ticket.request_id, "Selection changed, dropped AI preset");
            GenerateOutcome::Discarded
        }
        Settled::Failed(e) => {
            warn!(request_id = ticket.request_id, error = %e, "AI preset generation failed");
            GenerateOutcome::Failed {
                error: e.to_string(),
            }
        }
    }
}
