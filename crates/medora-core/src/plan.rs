//! Plan-of-Care parsing.
//!
//! Turns the freeform `plan_of_care` narrative into ordered
//! [`PlanSection`]s. Parsing never fails: empty or unrecognizable input
//! degrades to a single "General Plan" section.

pub mod extract;
pub mod split;

use crate::models::plan::{PlanSection, PlanText};

pub use extract::{extract_bullets, extract_items};
pub use split::split;

/// Parse a SOAP note's plan narrative into its titled sections.
pub fn parse_plan_of_care(plan: &PlanText) -> Vec<PlanSection> {
    split(plan.as_str())
}
