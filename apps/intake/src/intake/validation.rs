use crate::models::intake::{IntakeInput, IntakeRequest, Tone};

/// Shown when the notes field is empty or whitespace-only.
pub const EMPTY_NOTES_MESSAGE: &str = "Drop in at least a few lines of notes.";

/// Checks the submitted fields and builds the outbound request.
///
/// Fields are forwarded as typed; only the emptiness check trims.
pub fn validate_input(input: &IntakeInput) -> Result<IntakeRequest, String> {
    if input.raw_input.trim().is_empty() {
        return Err(EMPTY_NOTES_MESSAGE.to_string());
    }

    let tone: Tone = input.tone.parse()?;

    Ok(IntakeRequest {
        raw_input: input.raw_input.clone(),
        product: input.product.clone(),
        audience: input.audience.clone(),
        tone,
    })
}
