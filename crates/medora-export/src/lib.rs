//! medora-export
//!
//! Plan-of-Care rendering: HTML fragments for the note view, plain text for
//! the clipboard, and DOCX for note export.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod text;

pub use render::{PlanRenderer, items_from_html, render_plan_sections};
pub use text::render_plan_text;
