use medora_core::models::plan::{PlanSection, RenderMode};
use medora_core::plan::split;
use medora_export::docx::generate_docx;
use medora_export::styles::DocumentStyles;

#[test]
fn docx_is_a_zip_package() {
    let sections = split("In regards to Asthma:\n- **Continue** inhaler\n- Avoid triggers");
    let styles = DocumentStyles::default();

    for mode in [RenderMode::Bullet, RenderMode::Concise, RenderMode::Narrative] {
        let bytes = generate_docx(&sections, mode, &styles).unwrap();
        assert!(bytes.starts_with(b"PK"), "mode {mode}");
    }
}

#[test]
fn docx_handles_empty_and_unclosed_markup() {
    let sections = vec![
        PlanSection::new("Eczema", Vec::new()),
        PlanSection::new("Urticaria", vec!["Start **cetirizine daily".to_string()]),
    ];
    let bytes = generate_docx(&sections, RenderMode::Bullet, &DocumentStyles::default()).unwrap();
    assert!(!bytes.is_empty());
}
