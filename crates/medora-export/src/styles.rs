use serde::{Deserialize, Serialize};

/// Document styling configuration for plan exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Title printed above the plan (e.g. "Plan of Care").
    pub document_title: String,

    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for the title and section headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Document title font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            document_title: "Plan of Care".to_string(),
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            title_size: 16,
            heading_size: 13,
        }
    }
}
