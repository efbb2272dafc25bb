use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::plan::PlanText;
use crate::error::CoreError;

/// The `soap_notes` object returned by the backend.
///
/// Only `plan_of_care` is interpreted here. Sections the backend leaves out
/// default to empty, and any fields this crate doesn't know about are kept
/// in `extra` so a note can be passed along untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SoapNotes {
    #[serde(default)]
    pub subjective: String,
    #[serde(default)]
    pub objective: String,
    #[serde(default)]
    pub assessment: String,
    #[serde(default)]
    pub plan_of_care: String,

    #[serde(flatten)]
    #[ts(skip)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl SoapNotes {
    pub fn plan_text(&self) -> PlanText {
        PlanText::new(self.plan_of_care.clone())
    }
}

/// Body of a `/submit-transcript` response.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TranscriptResponse {
    pub soap_notes: SoapNotes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights: Option<serde_json::Value>,
}

/// One visit from `/api/get-patient-history`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientHistoryEntry {
    pub visit_id: String,
    pub created_at: jiff::Timestamp,
    pub soap_notes: SoapNotes,
}

/// Pull the SOAP notes out of either a full transcript response or a bare
/// `soap_notes` object.
pub fn soap_notes_from_json(json: &str) -> Result<SoapNotes, CoreError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.get("soap_notes").is_some() {
        let response: TranscriptResponse = serde_json::from_value(value)?;
        Ok(response.soap_notes)
    } else {
        Ok(serde_json::from_value(value)?)
    }
}
