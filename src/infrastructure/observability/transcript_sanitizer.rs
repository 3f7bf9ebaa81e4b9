const MAX_VISIBLE_LENGTH: usize = 80;

/// Sanitizes consultation text for safe logging.
///
/// Transcriptions contain patient-identifying speech, so logs only ever see
/// a short prefix and the total length.
pub fn sanitize_transcript(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    if total > MAX_VISIBLE_LENGTH {
        let head: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    }
}
