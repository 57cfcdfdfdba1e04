//! Shape checks over the event-file wire format: required fields are
//! required, and attribute keys behave per strictness mode.

use glamquest_game::{EventData, EventDataError, EventStatus, resolve_event};

const WELL_FORMED: &str = r#"[
    {
        "primary_attribute": "Glamour Points",
        "secondary_attribute": "Intelligence",
        "prompt_text": "A velvet rope blocks the gala entrance.",
        "pass": { "message": "The bouncer waves you straight through." },
        "fail": { "message": "You wait in line with everyone else." },
        "partial_pass": { "message": "You talk your way in eventually." }
    },
    {
        "primary_attribute": "Strength",
        "secondary_attribute": "Glamour Points",
        "prompt_text": "A runaway parade float careens toward the crowd.",
        "pass": { "message": "You haul it to a stop single-handed." },
        "fail": { "message": "It flattens the snack table." },
        "partial_pass": { "message": "You wave the crowd clear in style." }
    }
]"#;

#[test]
fn well_formed_file_parses_and_validates() {
    let data = EventData::from_json(WELL_FORMED).expect("fixture parses");
    assert_eq!(data.events.len(), 2);
    assert!(data.validate_attributes().is_ok());
}

#[test]
fn each_missing_field_is_fatal() {
    let required = [
        "primary_attribute",
        "secondary_attribute",
        "prompt_text",
        "pass",
        "fail",
        "partial_pass",
    ];
    for field in required {
        let mut record: serde_json::Value =
            serde_json::from_str(WELL_FORMED).expect("fixture parses");
        record[0]
            .as_object_mut()
            .expect("record is an object")
            .remove(field);
        let json = record.to_string();
        assert!(
            matches!(EventData::from_json(&json), Err(EventDataError::Parse(_))),
            "dropping {field} should fail the load"
        );
    }
}

#[test]
fn outcome_records_require_their_message() {
    let mut record: serde_json::Value = serde_json::from_str(WELL_FORMED).expect("fixture parses");
    record[1]["partial_pass"] = serde_json::json!({});
    assert!(matches!(
        EventData::from_json(&record.to_string()),
        Err(EventDataError::Parse(_))
    ));
}

#[test]
fn lenient_load_keeps_typo_keys_playable() {
    let mut record: serde_json::Value = serde_json::from_str(WELL_FORMED).expect("fixture parses");
    record[0]["secondary_attribute"] = serde_json::json!("Inteligence");
    let data = EventData::from_json(&record.to_string()).expect("lenient load succeeds");

    // Strict validation names the offender...
    match data.validate_attributes() {
        Err(EventDataError::UnknownAttribute { index, attribute }) => {
            assert_eq!(index, 0);
            assert_eq!(attribute, "Inteligence");
        }
        other => panic!("expected unknown-attribute error, got {other:?}"),
    }

    // ...while lenient play degrades the typo to a plain fail.
    let resolution = resolve_event(&data.events[0], "Intelligence");
    assert_eq!(resolution.status, EventStatus::Fail);
}
