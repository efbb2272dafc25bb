use tracing::{debug, info};

use medora_core::models::patient::Patient;
use medora_core::models::soap::{PatientHistoryEntry, TranscriptResponse};
use medora_export::error::ExportError;
use medora_export::render::PlanRenderer;

use crate::config::MedoraConfig;
use crate::view::{PlanDocument, PlanViews};

/// Container the latest transcript's plan is drawn into.
pub const LATEST_PLAN_CONTAINER: &str = "plan-of-care";

/// Application state shared by the note UI's event handlers.
///
/// Holds the selected patient, the latest analysis, and the plan views
/// derived from it. Whenever the patient or the analysis changes, the
/// cached plan views are discarded.
pub struct AppStore {
    current_patient: Option<Patient>,
    latest_analysis: Option<TranscriptResponse>,
    plans: PlanViews,
}

impl AppStore {
    pub fn new(config: &MedoraConfig) -> Result<Self, ExportError> {
        Ok(Self {
            current_patient: None,
            latest_analysis: None,
            plans: PlanViews::new(PlanRenderer::new()?, config.default_mode),
        })
    }

    pub fn current_patient(&self) -> Option<&Patient> {
        self.current_patient.as_ref()
    }

    pub fn latest_analysis(&self) -> Option<&TranscriptResponse> {
        self.latest_analysis.as_ref()
    }

    pub fn plans(&self) -> &PlanViews {
        &self.plans
    }

    pub fn plans_mut(&mut self) -> &mut PlanViews {
        &mut self.plans
    }

    /// Select a patient. Re-selecting the current patient keeps their
    /// analysis and plan views.
    pub fn select_patient(&mut self, patient: Patient) {
        if self.current_patient.as_ref().map(|p| p.id) == Some(patient.id) {
            return;
        }
        info!(patient_id = %patient.id, "patient selected");
        self.current_patient = Some(patient);
        self.latest_analysis = None;
        self.plans.clear();
    }

    pub fn clear_patient(&mut self) {
        self.current_patient = None;
        self.latest_analysis = None;
        self.plans.clear();
    }

    /// Record a fresh `/submit-transcript` response and draw its plan.
    pub fn record_analysis(&mut self, doc: &mut dyn PlanDocument, response: TranscriptResponse) {
        debug!(visit_id = ?response.visit_id, "recording transcript analysis");
        self.plans.clear();
        let plan = response.soap_notes.plan_text();
        self.plans.show(doc, LATEST_PLAN_CONTAINER, &plan);
        self.latest_analysis = Some(response);
    }

    /// Draw the plans of a patient's past visits, one container per visit.
    ///
    /// Container ids are `plan-of-care-{visit_id}`.
    pub fn show_history(&mut self, doc: &mut dyn PlanDocument, entries: &[PatientHistoryEntry]) {
        for entry in entries {
            let container_id = history_container_id(&entry.visit_id);
            self.plans
                .show(doc, &container_id, &entry.soap_notes.plan_text());
        }
        debug!(visits = entries.len(), "rendered patient history plans");
    }
}

pub fn history_container_id(visit_id: &str) -> String {
    format!("{LATEST_PLAN_CONTAINER}-{visit_id}")
}
