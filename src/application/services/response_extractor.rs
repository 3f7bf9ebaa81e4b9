use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{ClinicalNarrative, DoctorNote, PatientSummary};

/// Recover both structured records from an arbitrary model completion.
///
/// Models reliably wrap JSON in prose or fence markup despite instructions
/// not to, so this is a total function: each record that cannot be recovered
/// degrades to its safe default independently, and a completion with a valid
/// `doctorNotes` but a broken `patientSummary` still yields the real
/// `doctorNotes`.
pub fn extract_narrative(raw: &str) -> ClinicalNarrative {
    let stripped = strip_fence_lines(raw);

    let value = serde_json::from_str::<Value>(stripped.trim())
        .ok()
        .or_else(|| {
            first_balanced_object(&stripped).and_then(|slice| serde_json::from_str(slice).ok())
        });

    let Some(value) = value else {
        tracing::warn!("No parseable JSON object in model completion, using default records");
        return ClinicalNarrative::default();
    };

    ClinicalNarrative {
        doctor_notes: record_or_default::<DoctorNote>(&value, "doctorNotes"),
        patient_summary: record_or_default::<PatientSummary>(&value, "patientSummary"),
    }
}

/// Drop every line carrying a code-fence marker, keeping the rest intact.
fn strip_fence_lines(raw: &str) -> String {
    raw.lines()
        .filter(|line| !line.contains("```"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Locate the first balanced top-level JSON object embedded in surrounding
/// text by tracking nested-brace depth from the first `{`. Braces inside
/// string literals are ignored.
fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}

fn record_or_default<T>(value: &Value, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match value.get(key) {
        Some(sub) => serde_json::from_value(sub.clone()).unwrap_or_else(|e| {
            tracing::warn!(key, error = %e, "Sub-record unparseable, using default");
            T::default()
        }),
        None => {
            tracing::warn!(key, "Sub-record missing from completion, using default");
            T::default()
        }
    }
}
