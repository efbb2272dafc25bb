use medora_core::error::CoreError;
use medora_core::models::plan::RenderMode;
use medora_core::models::soap::{SoapNotes, soap_notes_from_json};
use medora_core::plan::parse_plan_of_care;

#[test]
fn reads_plan_from_transcript_response() {
    let json = r#"{
        "soap_notes": {
            "subjective": "Wheezing at night.",
            "plan_of_care": "In regards to Asthma:\n- Continue inhaler",
            "allergen_profile": { "dust_mite": "positive" }
        },
        "visit_id": "visit-42",
        "insights": { "summary": "stable" }
    }"#;

    let notes = soap_notes_from_json(json).unwrap();
    assert_eq!(notes.subjective, "Wheezing at night.");
    assert_eq!(notes.objective, "");
    assert!(notes.extra.contains_key("allergen_profile"));

    let sections = parse_plan_of_care(&notes.plan_text());
    assert_eq!(sections[0].title, "Asthma");
}

#[test]
fn reads_bare_soap_notes() {
    let notes = soap_notes_from_json(r#"{ "plan_of_care": "Follow up in 6 weeks." }"#).unwrap();
    assert_eq!(notes.plan_of_care, "Follow up in 6 weeks.");
}

#[test]
fn missing_plan_is_empty() {
    let notes: SoapNotes = serde_json::from_str("{}").unwrap();
    assert!(notes.plan_text().is_blank());
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = soap_notes_from_json("{ not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn render_mode_names() {
    assert_eq!("Bullet".parse::<RenderMode>().unwrap(), RenderMode::Bullet);
    assert_eq!("paragraph".parse::<RenderMode>().unwrap(), RenderMode::Narrative);
    assert_eq!(RenderMode::Concise.to_string(), "concise");
    assert_eq!(
        serde_json::to_string(&RenderMode::Narrative).unwrap(),
        "\"narrative\""
    );
    assert!(matches!(
        "compact".parse::<RenderMode>(),
        Err(CoreError::InvalidRenderMode(_))
    ));
}
