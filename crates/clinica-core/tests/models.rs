use clinica_core::error::CoreError;
use clinica_core::models::calculation::LogType;
use clinica_core::models::record::LabResult;
use clinica_core::models::result::{CalculatorResult, ClassificationBand, Severity};
use clinica_core::s3_keys;
use uuid::Uuid;

#[test]
fn log_type_parses_its_display_form() {
    for log_type in [
        LogType::EnergyRequirements,
        LogType::RenalFunction,
        LogType::PediatricGrowth,
    ] {
        assert_eq!(log_type.to_string().parse::<LogType>().unwrap(), log_type);
    }
    assert!(matches!(
        "vitals".parse::<LogType>(),
        Err(CoreError::InvalidLogType(s)) if s == "vitals"
    ));
}

#[test]
fn unknown_log_type_message_names_the_value() {
    let err = "vitals".parse::<LogType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log type: vitals");
}

#[test]
fn calculation_keys_nest_under_person() {
    let person = Uuid::nil();
    let id = Uuid::new_v4();
    let key = s3_keys::calculation(person, id);
    assert!(key.starts_with(&s3_keys::person_calculations_prefix(person)));
    assert!(key.starts_with(s3_keys::CALCULATIONS_PREFIX));
    assert!(key.ends_with(".json"));
}

#[test]
fn result_accessors() {
    let mut result = CalculatorResult::default();
    assert!(result.is_empty());

    result.set_number("bmi", 24.2);
    result.set_opt_number("waist", None);
    result.set_text("formula", "Mifflin-St Jeor");
    result.classify(
        "bmi",
        ClassificationBand {
            label: "Peso normal".to_string(),
            severity: Severity::Normal,
        },
    );

    assert_eq!(result.number("bmi"), Some(24.2));
    assert_eq!(result.number("formula"), None);
    assert_eq!(result.text("formula"), Some("Mifflin-St Jeor"));
    assert!(result.values.get("waist").is_none());
    assert_eq!(result.band("bmi").map(|b| b.severity), Some(Severity::Normal));
}

#[test]
fn result_values_serialize_untagged() {
    let mut result = CalculatorResult::default();
    result.set_number("tmb_kcal", 1452.0);
    result.set_text("formula", "OMS");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["values"]["tmb_kcal"], serde_json::json!(1452.0));
    assert_eq!(json["values"]["formula"], "OMS");
}

#[test]
fn severity_orders_by_concern() {
    assert!(Severity::Normal < Severity::Caution);
    assert!(Severity::Risk < Severity::Severe);
}

#[test]
fn lab_values_accept_text_and_decimal_commas() {
    let lab: LabResult = serde_json::from_value(serde_json::json!({
        "date": "2024-03-01",
        "hba1c": "6,8",
        "glucose_mg_dl": 126,
        "creatinine_mg_dl": "n/a"
    }))
    .unwrap();
    assert_eq!(lab.hba1c, Some(6.8));
    assert_eq!(lab.glucose_mg_dl, Some(126.0));
    assert_eq!(lab.creatinine_mg_dl, None);
    assert_eq!(lab.hdl_mg_dl, None);
}
