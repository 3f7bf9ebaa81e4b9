/// Build the single instruction prompt for clinical note synthesis.
///
/// One completion produces both records. Deterministic: the same
/// transcription always yields the same prompt.
pub fn build_notes_prompt(transcription: &str) -> String {
    format!(
        r#"You are a medical AI assistant. Based on the following medical consultation transcription, produce a structured clinical note and a patient-friendly summary.

Transcription:
{transcription}

Return exactly one JSON object with exactly two keys:

"doctorNotes": a SOAP-format clinical note with keys:
  "subjective": patient's reported symptoms and concerns (string)
  "objective": physical findings and observations (string)
  "assessment": medical diagnosis or impression (string)
  "plan": treatment plan and follow-up instructions (string)
  "medications": medications discussed (array of strings)
  "followUp": follow-up instructions (string)

"patientSummary": a plain-language summary for the patient, avoiding medical jargon, with keys:
  "summary": brief summary of what was discussed (string)
  "keyPoints": key points the patient should remember (array of strings)
  "nextSteps": next steps in simple terms (array of strings)
  "medications": medications in plain language (array of strings)

Respond with only the JSON object. No explanatory text, no markdown, no code fencing."#
    )
}
