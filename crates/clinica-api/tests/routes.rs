use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use clinica_api::config::ApiConfig;
use clinica_api::router;
use clinica_api::state::AppState;
use clinica_storage::MemoryCalculationStore;

fn app() -> (Router, AppState<MemoryCalculationStore>) {
    let state = AppState::new(MemoryCalculationStore::new());
    (router(state.clone()), state)
}

fn vitals() -> Value {
    json!({
        "weight_kg": 70.0,
        "height_cm": 170.0,
        "age_years": 30.0,
        "sex": "female",
        "waist_cm": null,
        "hip_cm": null,
        "calf_cm": null,
        "blood_pressure": null,
        "birth_date": null,
        "measured_on": null
    })
}

async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = app();
    let (status, body) = send(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn lists_every_calculator() {
    let (app, _) = app();
    let (status, body) = send(app, "GET", "/calculators", None).await;
    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["key"].as_str().unwrap())
        .collect();
    assert!(keys.contains(&"energy"));
    assert!(keys.contains(&"must"));
    assert_eq!(keys.len(), 10);
}

#[tokio::test]
async fn unknown_calculator_is_not_found() {
    let (app, _) = app();
    let (status, body) = send(app, "GET", "/calculators/sofa", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("sofa"));
}

#[tokio::test]
async fn defaults_are_seeded_from_posted_vitals() {
    let (app, _) = app();
    let (status, body) = send(app, "POST", "/calculators/energy/defaults", Some(vitals())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weight_kg"], json!(70.0));
    assert_eq!(body["activity"], "sedentary");
}

#[tokio::test]
async fn evaluate_returns_result_and_description() {
    let (app, _) = app();
    let request = json!({"vitals": vitals(), "input": {"activity": "light"}});
    let (status, body) = send(app, "POST", "/calculators/energy/evaluate", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["result"]["values"]["tmb_kcal"], json!(1452.0));
    assert_eq!(body["inputs"]["activity"], "light");
    assert!(body["description"].as_str().unwrap().starts_with("Requerimiento"));
}

#[tokio::test]
async fn invalid_input_is_bad_request() {
    let (app, _) = app();
    let request = json!({"vitals": vitals(), "input": {"formula": "katch"}});
    let (status, _) = send(app, "POST", "/calculators/energy/evaluate", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn saved_calculations_are_listed_and_filtered() {
    let (app, _) = app();
    let person_id = Uuid::new_v4();
    let request = json!({"vitals": vitals()});

    for key in ["energy", "anthropometry"] {
        let uri = format!("/persons/{person_id}/calculations/{key}");
        let (status, body) = send(app.clone(), "POST", &uri, Some(request.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["person_id"], json!(person_id));
    }

    let uri = format!("/persons/{person_id}/calculations");
    let (_, all) = send(app.clone(), "GET", &uri, None).await;
    let all = all.as_array().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|r| r["person_id"] == json!(person_id)));

    let uri = format!("/persons/{person_id}/calculations?log_type=anthropometry");
    let (_, filtered) = send(app.clone(), "GET", &uri, None).await;
    let filtered = filtered.as_array().unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0]["calculator_key"], "anthropometry");

    let uri = format!("/persons/{person_id}/calculations?log_type=bogus");
    let (status, _) = send(app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn store_failure_is_internal_error() {
    let (app, state) = app();
    state.store.set_unavailable(true);
    let uri = format!("/persons/{}/calculations/energy", Uuid::new_v4());
    let (status, body) = send(app, "POST", &uri, Some(json!({"vitals": vitals()}))).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "internal server error");
}

#[tokio::test]
async fn snapshot_prefers_consultation_values() {
    let (app, _) = app();
    let person_id = Uuid::new_v4();
    let request = json!({
        "person": {
            "id": person_id,
            "gender": "mujer",
            "birth_date": "1990-05-20",
            "weight_kg": 68,
            "height_cm": "165",
            "ta": "120/80",
            "lab_results": []
        },
        "consultation": {
            "id": Uuid::new_v4(),
            "person_id": person_id,
            "date": "2024-07-01",
            "weight_kg": "66,5",
            "ta": "135/85"
        },
        "reference_date": "2025-01-01"
    });
    let (status, body) = send(app, "POST", "/vitals/snapshot", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["weight_kg"], json!(66.5));
    assert_eq!(body["height_cm"], json!(165.0));
    assert_eq!(body["age_years"], json!(34.0));
    assert_eq!(body["sex"], "female");
    assert_eq!(body["blood_pressure"]["systolic"], json!(135.0));
}

#[tokio::test]
async fn snapshot_rejects_foreign_consultation() {
    let (app, _) = app();
    let request = json!({
        "person": {"id": Uuid::new_v4(), "gender": null, "birth_date": null, "ta": null},
        "consultation": {"id": Uuid::new_v4(), "person_id": Uuid::new_v4(), "date": "2024-07-01", "ta": null}
    });
    let (status, _) = send(app, "POST", "/vitals/snapshot", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[test]
fn config_falls_back_to_defaults() {
    let config = ApiConfig::from_lookup(|name| match name {
        "AWS_REGION" => Some("eu-west-1".to_string()),
        "CLINICA_BUCKET" => Some("  ".to_string()),
        _ => None,
    });
    assert_eq!(config.bucket, "clinica");
    assert_eq!(config.region, "eu-west-1");
}
