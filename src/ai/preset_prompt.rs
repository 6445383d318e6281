// Instruction sent to Gemini for preset generation
//
// The genre name and the raw user concept are embedded verbatim. The
// response must be a bare JSON object so it can be parsed without prose.

/// Build the single instruction for a genre and concept
pub fn build_preset_instruction(genre_name: &str, concept: &str) -> String {
    format!(
        r#"You are an expert prompt writer for Suno v5, an AI music generation tool.

Selected genre: {genre_name}
User concept: {concept}

Write one Suno style prompt that blends the selected genre with the user's concept.

Rules:
- "prompt": comma-separated English style tags in Suno's vocabulary (genre, instruments, mood, tempo, production). No sentences, no artist names.
- "description": one short sentence in Korean explaining the musical intent.
- Respond with ONLY a JSON object, no markdown and no extra text:

{{"prompt": "...", "description": "..."}}
"#
    )
}
