use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Title of the synthetic section used when the narrative has no
/// recognizable "In regards to X:" markers.
pub const GENERAL_PLAN_TITLE: &str = "General Plan";

/// Sole item of the placeholder section emitted for an empty plan.
pub const EMPTY_PLAN_MESSAGE: &str =
    "No specific plan recommendations available. Please follow up with standard care protocols.";

/// Rendered in place of a section's items when it has none.
pub const NO_INSTRUCTIONS_MESSAGE: &str = "No specific plan instructions provided.";

/// The raw `plan_of_care` narrative from a SOAP note, exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlanText(String);

impl PlanText {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for PlanText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for PlanText {
    fn from(text: String) -> Self {
        Self(text)
    }
}

/// One condition's worth of recommendations.
///
/// `items` keeps the order of the source narrative; clinicians read the plan
/// top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PlanSection {
    pub title: String,
    pub items: Vec<String>,
}

impl PlanSection {
    pub fn new(title: impl Into<String>, items: Vec<String>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// The placeholder section for a plan with nothing to show.
    pub fn empty_plan() -> Self {
        Self::new(GENERAL_PLAN_TITLE, vec![EMPTY_PLAN_MESSAGE.to_string()])
    }

    /// Heading line shared by every render target.
    pub fn heading(&self) -> String {
        format!("In regards to {}:", self.title)
    }
}

/// How a parsed plan is presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RenderMode {
    /// Every item as its own list entry.
    #[default]
    Bullet,
    /// Only the first item of each section.
    Concise,
    /// All items of a section joined into one paragraph.
    Narrative,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Bullet => "bullet",
            RenderMode::Concise => "concise",
            RenderMode::Narrative => "narrative",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bullet" | "bullets" => Ok(RenderMode::Bullet),
            "concise" => Ok(RenderMode::Concise),
            "narrative" | "paragraph" => Ok(RenderMode::Narrative),
            other => Err(CoreError::InvalidRenderMode(other.to_string())),
        }
    }
}
