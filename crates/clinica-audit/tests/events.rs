use clinica_audit::AuditEvent;
use serde_json::json;

#[test]
fn event_serializes_with_details() {
    let event = AuditEvent::new("commit", "calculation", "abc", "person-1")
        .with_details(json!({"calculator_key": "energy"}));

    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["action"], "commit");
    assert_eq!(value["person_id"], "person-1");
    assert_eq!(value["details"]["calculator_key"], "energy");

    event.emit();
}

#[test]
fn details_default_to_none() {
    let event = AuditEvent::new("list", "calculation", "*", "person-2");
    assert!(event.details.is_none());
    assert_eq!(serde_json::to_value(&event).unwrap()["details"], json!(null));
}
