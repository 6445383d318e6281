// AI module for Gemini preset generation
//
// This module provides:
// - Gemini `generateContent` client with JSON response mode
// - The instruction sent for a (genre, concept) pair
// - Strict parsing of the two-field preset JSON

pub mod gemini_client;
pub mod preset;
pub mod preset_prompt;

use async_trait::async_trait;
use thiserror::Error;

// Re-export commonly used types
pub use gemini_client::{GeminiClient, GeminiConfig};
pub use preset::{parse_preset, GeneratedPreset};
pub use preset_prompt::build_preset_instruction;

/// Anything that fails between sending the instruction and holding a
/// validated preset. Transport and schema failures share this type.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to create HTTP client: {0}")]
    Client(String),
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },
    #[error("response contained no text candidate")]
    EmptyResponse,
    #[error("invalid preset response: {0}")]
    InvalidResponse(String),
}

/// Remote text generation endpoint that answers with a JSON document
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send one instruction and return the raw response text
    async fn generate_json(&self, instruction: &str) -> Result<String, GenerateError>;
}
