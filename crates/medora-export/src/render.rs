use serde::Serialize;
use tera::{Context, Tera};
use tracing::debug;

use medora_core::models::plan::{NO_INSTRUCTIONS_MESSAGE, PlanSection, RenderMode};

use crate::error::ExportError;

const PLAN_TEMPLATE_NAME: &str = "plan.html";
const PLAN_TEMPLATE: &str = include_str!("../templates/plan.html");

/// Per-section values handed to the HTML template.
#[derive(Serialize)]
struct SectionView<'a> {
    title: &'a str,
    items: &'a [String],
    narrative: String,
}

/// Renders parsed plan sections to HTML fragments.
///
/// Holds a compiled template so the toggle path can re-render without
/// re-parsing it. `.html` templates are autoescaped, so titles and items
/// coming from the model are always safe to insert.
pub struct PlanRenderer {
    tera: Tera,
}

impl PlanRenderer {
    pub fn new() -> Result<Self, ExportError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PLAN_TEMPLATE_NAME, PLAN_TEMPLATE)
            .map_err(|e| ExportError::TemplateParse(e.to_string()))?;
        Ok(Self { tera })
    }

    /// Render `sections` as HTML in the given mode.
    ///
    /// Each section becomes a `<div class="plan-section">` carrying its
    /// original items in `data-original-items`, whatever the mode.
    pub fn render(
        &self,
        sections: &[PlanSection],
        mode: RenderMode,
    ) -> Result<String, ExportError> {
        let views: Vec<SectionView<'_>> = sections
            .iter()
            .map(|section| SectionView {
                title: &section.title,
                items: &section.items,
                narrative: narrative_paragraph(&section.items),
            })
            .collect();

        let mut context = Context::new();
        context.insert("sections", &views);
        context.insert("mode", &mode);
        context.insert("empty_message", NO_INSTRUCTIONS_MESSAGE);

        let html = self.tera.render(PLAN_TEMPLATE_NAME, &context)?;
        debug!(sections = sections.len(), %mode, "rendered plan html");
        Ok(html)
    }
}

/// One-shot HTML render of a parsed plan.
pub fn render_plan_sections(
    sections: &[PlanSection],
    mode: RenderMode,
) -> Result<String, ExportError> {
    PlanRenderer::new()?.render(sections, mode)
}

/// The lines a section shows in the given mode.
///
/// Shared by the plain-text and DOCX targets. A section without items shows
/// the no-instructions sentence in every mode.
pub fn section_lines(section: &PlanSection, mode: RenderMode) -> Vec<String> {
    let Some(first) = section.items.first() else {
        return vec![NO_INSTRUCTIONS_MESSAGE.to_string()];
    };

    match mode {
        RenderMode::Bullet => section.items.clone(),
        RenderMode::Concise => vec![first.clone()],
        RenderMode::Narrative => vec![narrative_paragraph(&section.items)],
    }
}

/// Join items into a single paragraph, closing each with a full stop unless
/// it already ends in sentence punctuation.
pub fn narrative_paragraph(items: &[String]) -> String {
    items
        .iter()
        .map(|item| {
            let item = item.trim();
            if item.ends_with(['.', '!', '?']) {
                item.to_string()
            } else {
                format!("{item}.")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Recover each section's original items from rendered plan HTML.
///
/// Reads back the `data-original-items` attribute, so this works for HTML
/// rendered in any mode.
pub fn items_from_html(html: &str) -> Result<Vec<Vec<String>>, ExportError> {
    const ATTR: &str = "data-original-items=\"";

    let mut sections = Vec::new();
    let mut remaining = html;

    while let Some(start) = remaining.find(ATTR) {
        let value_start = &remaining[start + ATTR.len()..];
        let Some(end) = value_start.find('"') else {
            break;
        };
        let json = unescape_html(&value_start[..end]);
        sections.push(serde_json::from_str(&json)?);
        remaining = &value_start[end + 1..];
    }

    Ok(sections)
}

/// Reverse the entity escaping applied by the template engine.
fn unescape_html(escaped: &str) -> String {
    escaped
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&#x2F;", "/")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
