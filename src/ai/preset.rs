// Generated preset and strict parsing of the model's JSON answer

use super::GenerateError;
use serde::{Deserialize, Serialize};

/// A preset produced on demand. Same shape as a catalog prompt, but owned
/// and held only in session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPreset {
    pub text: String,
    pub description: String,
}

/// Wire schema: both keys required, both strings
#[derive(Debug, Deserialize)]
struct PresetResponse {
    prompt: String,
    description: String,
}

/// Parse response text into a preset, rejecting anything off-schema
pub fn parse_preset(text: &str) -> Result<GeneratedPreset, GenerateError> {
    let json_text = extract_json(text)?;

    let response: PresetResponse = serde_json::from_str(json_text)
        .map_err(|e| GenerateError::InvalidResponse(format!("Failed to parse preset: {}", e)))?;

    if response.prompt.trim().is_empty() {
        return Err(GenerateError::InvalidResponse(
            "\"prompt\" is empty".to_string(),
        ));
    }

    Ok(GeneratedPreset {
        text: response.prompt,
        description: response.description,
    })
}

/// The JSON document of the response text. JSON mode returns a bare
/// document; a body that is exactly one fenced block is also accepted.
/// Anything around the document is an error.
fn extract_json(text: &str) -> Result<&str, GenerateError> {
    let text = text.trim();
    let Some(fenced) = text.strip_prefix("```") else {
        return Ok(text);
    };

    let inner = fenced
        .strip_prefix("json")
        .unwrap_or(fenced)
        .strip_suffix("```")
        .filter(|inner| !inner.contains("```"))
        .ok_or_else(|| {
            GenerateError::InvalidResponse("Unterminated or repeated code fence".to_string())
        })?;
    Ok(inner.trim())
}
