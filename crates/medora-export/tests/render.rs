use medora_core::models::plan::{NO_INSTRUCTIONS_MESSAGE, PlanSection, RenderMode};
use medora_core::plan::split;
use medora_export::render::{PlanRenderer, narrative_paragraph, section_lines};
use medora_export::{items_from_html, render_plan_sections};

const ASTHMA_PLAN: &str = "In regards to Asthma:\n- Continue inhaler\n- Avoid triggers\nIn regards to Rhinitis:\n- Start nasal spray";

#[test]
fn bullet_html_lists_every_item() {
    let html = render_plan_sections(&split(ASTHMA_PLAN), RenderMode::Bullet).unwrap();

    assert_eq!(html.matches("<div class=\"plan-section plan-bullet\"").count(), 2);
    assert!(html.contains("<h4 class=\"plan-heading\">In regards to Asthma:</h4>"));
    assert!(html.contains("<h4 class=\"plan-heading\">In regards to Rhinitis:</h4>"));
    assert!(html.contains("<li>Continue inhaler</li>"));
    assert!(html.contains("<li>Avoid triggers</li>"));
    assert!(html.contains("<li>Start nasal spray</li>"));

    let asthma = html.find("Asthma").unwrap();
    let rhinitis = html.find("Rhinitis").unwrap();
    assert!(asthma < rhinitis);
}

#[test]
fn concise_html_shows_first_item_only() {
    let html = render_plan_sections(&split(ASTHMA_PLAN), RenderMode::Concise).unwrap();

    assert!(html.contains("<p class=\"plan-concise\">Continue inhaler</p>"));
    assert!(html.contains("<p class=\"plan-concise\">Start nasal spray</p>"));
    assert!(!html.contains("<li>"));
    assert!(!html.contains(">Avoid triggers<"));
}

#[test]
fn narrative_html_joins_items() {
    let html = render_plan_sections(&split(ASTHMA_PLAN), RenderMode::Narrative).unwrap();

    assert!(html.contains("<p class=\"plan-narrative\">Continue inhaler. Avoid triggers.</p>"));
    assert!(html.contains("<p class=\"plan-narrative\">Start nasal spray.</p>"));
}

#[test]
fn bullet_render_round_trips_items() {
    let sections = split(ASTHMA_PLAN);
    let html = render_plan_sections(&sections, RenderMode::Bullet).unwrap();

    let recovered = items_from_html(&html).unwrap();
    let expected: Vec<Vec<String>> = sections.into_iter().map(|s| s.items).collect();
    assert_eq!(recovered, expected);
}

#[test]
fn cached_items_survive_every_mode() {
    let sections = split(ASTHMA_PLAN);
    let renderer = PlanRenderer::new().unwrap();

    for mode in [RenderMode::Bullet, RenderMode::Concise, RenderMode::Narrative] {
        let html = renderer.render(&sections, mode).unwrap();
        assert_eq!(items_from_html(&html).unwrap().len(), 2, "mode {mode}");
        assert_eq!(
            items_from_html(&html).unwrap()[0],
            vec!["Continue inhaler", "Avoid triggers"],
        );
    }
}

#[test]
fn toggling_modes_is_lossless() {
    let sections = split(ASTHMA_PLAN);
    let snapshot = sections.clone();
    let renderer = PlanRenderer::new().unwrap();

    let first = renderer.render(&sections, RenderMode::Bullet).unwrap();
    let _concise = renderer.render(&sections, RenderMode::Concise).unwrap();
    let again = renderer.render(&sections, RenderMode::Bullet).unwrap();

    assert_eq!(first, again);
    assert_eq!(sections, snapshot);
}

#[test]
fn model_text_is_escaped() {
    let sections = vec![PlanSection::new(
        "<b>Asthma</b>",
        vec!["Use \"rescue\" inhaler & <script>alert(1)</script>".to_string()],
    )];
    let html = render_plan_sections(&sections, RenderMode::Bullet).unwrap();

    assert!(!html.contains("<script>"));
    assert!(!html.contains("<b>Asthma</b>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("&amp;"));

    let recovered = items_from_html(&html).unwrap();
    assert_eq!(recovered, vec![sections[0].items.clone()]);
}

#[test]
fn empty_section_renders_placeholder() {
    let sections = vec![PlanSection::new("Eczema", Vec::new())];

    for mode in [RenderMode::Bullet, RenderMode::Concise, RenderMode::Narrative] {
        let html = render_plan_sections(&sections, mode).unwrap();
        assert!(
            html.contains(&format!("<p class=\"plan-empty\">{NO_INSTRUCTIONS_MESSAGE}</p>")),
            "mode {mode}"
        );
        assert_eq!(section_lines(&sections[0], mode), vec![NO_INSTRUCTIONS_MESSAGE]);
    }
}

#[test]
fn no_sections_render_nothing() {
    assert_eq!(render_plan_sections(&[], RenderMode::Bullet).unwrap(), "");
    assert!(items_from_html("").unwrap().is_empty());
}

#[test]
fn narrative_keeps_existing_punctuation() {
    let items = vec![
        "Continue inhaler.".to_string(),
        "Any questions?".to_string(),
        "Return if worse".to_string(),
    ];
    assert_eq!(
        narrative_paragraph(&items),
        "Continue inhaler. Any questions? Return if worse."
    );
}
