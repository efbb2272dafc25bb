use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, Paragraph, Run, RunFonts, Style, StyleType};
use tracing::debug;

use medora_core::models::plan::{PlanSection, RenderMode};

use crate::error::ExportError;
use crate::render::section_lines;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from parsed plan sections.
///
/// Layout:
/// - document title → Title style
/// - `In regards to {title}:` → Heading 2 per section
/// - each shown line → bullet paragraph in Bullet mode, body paragraph
///   otherwise
/// - `**bold**` spans inside items → bold runs
pub fn generate_docx(
    sections: &[PlanSection],
    mode: RenderMode,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Title", "title", styles.title_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading_size))
        .add_paragraph(heading_paragraph(
            &styles.document_title,
            "Title",
            styles.title_size,
            styles,
        ));

    for section in sections {
        docx = docx.add_paragraph(heading_paragraph(
            &section.heading(),
            "Heading2",
            styles.heading_size,
            styles,
        ));

        for line in section_lines(section, mode) {
            let paragraph = if mode == RenderMode::Bullet && !section.items.is_empty() {
                bullet_paragraph(&line, styles)
            } else {
                body_paragraph(&line, styles)
            };
            docx = docx.add_paragraph(paragraph);
        }

        docx = docx.add_paragraph(Paragraph::new());
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    debug!(sections = sections.len(), %mode, bytes = bytes.len(), "generated plan docx");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(
    text: &str,
    style_id: &str,
    size_pt: usize,
    styles: &DocumentStyles,
) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .size(size_pt * 2)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` spans out of a plan item. An unclosed `**` is kept as
/// literal text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }
        runs.push(body_run(&after_start[..end], styles).bold());
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }

    runs
}
