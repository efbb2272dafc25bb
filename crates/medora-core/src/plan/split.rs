use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::plan::{GENERAL_PLAN_TITLE, PlanSection};
use crate::plan::extract::{extract_bullets, extract_items};

/// `In regards to <condition>:`. The condition stops at the first colon and
/// never spans lines, so a marker missing its colon is not a boundary.
static SECTION_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)in regards to[ \t]+([^:\n]+):").expect("section marker pattern is valid")
});

/// A recognized section boundary within the narrative.
struct Marker {
    start: usize,
    end: usize,
    title: String,
}

/// Break a plan narrative into ordered, titled sections.
///
/// - Blank input yields the single empty-plan placeholder section.
/// - Input without markers becomes one "General Plan" section.
/// - Text ahead of the first marker is kept as a leading "General Plan"
///   section.
/// - Sections whose body has no items are dropped; if none survive, the
///   empty-plan placeholder is returned instead.
pub fn split(plan_text: &str) -> Vec<PlanSection> {
    if plan_text.trim().is_empty() {
        debug!("plan of care is empty, using placeholder section");
        return vec![PlanSection::empty_plan()];
    }

    let markers = find_markers(plan_text);

    let Some(first) = markers.first() else {
        let items = extract_bullets(plan_text);
        debug!(items = items.len(), "plan of care has no section markers");
        return if items.is_empty() {
            vec![PlanSection::empty_plan()]
        } else {
            vec![PlanSection::new(GENERAL_PLAN_TITLE, items)]
        };
    };

    let mut sections = Vec::with_capacity(markers.len() + 1);

    let preamble = extract_items(&plan_text[..first.start]);
    if !preamble.is_empty() {
        sections.push(PlanSection::new(GENERAL_PLAN_TITLE, preamble));
    }

    for (idx, marker) in markers.iter().enumerate() {
        let body_end = markers
            .get(idx + 1)
            .map_or(plan_text.len(), |next| next.start);
        let items = extract_items(&plan_text[marker.end..body_end]);

        if items.is_empty() {
            debug!(title = %marker.title, "dropping plan section with no items");
            continue;
        }
        sections.push(PlanSection::new(marker.title.clone(), items));
    }

    if sections.is_empty() {
        debug!("no plan section had items, using placeholder section");
        return vec![PlanSection::empty_plan()];
    }

    debug!(sections = sections.len(), "parsed plan of care");
    sections
}

fn find_markers(plan_text: &str) -> Vec<Marker> {
    SECTION_MARKER
        .captures_iter(plan_text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let title = clean_title(caps.get(1)?.as_str());
            if title.is_empty() {
                return None;
            }
            Some(Marker {
                start: whole.start(),
                end: whole.end(),
                title,
            })
        })
        .collect()
}

/// Trim whitespace and emphasis markup (`**Asthma**` → `Asthma`).
fn clean_title(raw: &str) -> String {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '*' || c == '_')
        .to_string()
}
