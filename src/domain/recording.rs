use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::{DoctorNote, PatientSummary};

fn default_date() -> String {
    Utc::now().to_rfc3339()
}

fn default_status() -> String {
    "completed".to_string()
}

/// One persisted consultation recording.
///
/// `id` is the caller-supplied unique key; saving an entry with an existing
/// id replaces that entry in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingEntry {
    pub id: String,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub doctor_name: String,
    #[serde(default = "default_date")]
    pub date: String,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub transcription: String,
    #[serde(default)]
    pub doctor_notes: DoctorNote,
    #[serde(default)]
    pub patient_summary: PatientSummary,
    #[serde(default = "default_status")]
    pub status: String,
}
