use medora_core::models::plan::{PlanSection, RenderMode};

use crate::render::section_lines;

/// Flatten a parsed plan to plain text for the clipboard.
///
/// Each section is its `In regards to {title}:` heading followed by one
/// line per shown item; sections are separated by a blank line. Bullet mode
/// prefixes items with `- ` so the text parses back into the same sections.
pub fn render_plan_text(sections: &[PlanSection], mode: RenderMode) -> String {
    sections
        .iter()
        .map(|section| {
            let mut block = section.heading();
            for line in section_lines(section, mode) {
                block.push('\n');
                if mode == RenderMode::Bullet && !section.items.is_empty() {
                    block.push_str("- ");
                }
                block.push_str(&line);
            }
            block
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
