use clinica_calculators::Orchestrator;
use clinica_calculators::calculators::energy::Energy;
use clinica_calculators::log::CalculationLog;
use clinica_calculators::CalculatorKind;
use clinica_core::models::calculation::LogType;
use clinica_core::models::vitals::{Sex, VitalsSnapshot};
use clinica_storage::error::StorageError;
use clinica_storage::{CalculationStore, MemoryCalculationStore};
use uuid::Uuid;

fn vitals() -> VitalsSnapshot {
    VitalsSnapshot {
        weight_kg: Some(70.0),
        height_cm: Some(170.0),
        age_years: Some(30.0),
        sex: Some(Sex::Female),
        ..VitalsSnapshot::default()
    }
}

#[tokio::test]
async fn orchestrator_commit_lands_in_person_log() {
    let store = MemoryCalculationStore::new();
    let person_id = Uuid::new_v4();
    let orchestrator = Orchestrator::new(Energy, vitals());

    let saved = orchestrator
        .commit(&store.for_person(person_id))
        .unwrap()
        .await
        .unwrap();

    let records = store.list(person_id).await.unwrap();
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, saved.id);
    assert_eq!(record.person_id, person_id);
    assert_eq!(record.calculator_key, "energy");
    assert_eq!(record.log_type, LogType::EnergyRequirements);
    assert_eq!(record.result.number("get_kcal"), Some(1742.0));
}

#[tokio::test]
async fn records_are_scoped_per_person() {
    let store = MemoryCalculationStore::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    for kind in [CalculatorKind::Energy, CalculatorKind::Anthropometry] {
        let request = kind.evaluate(&vitals(), None).unwrap().into_commit_request();
        store.save(alice, request).await.unwrap();
    }

    let alice_records = store.list(alice).await.unwrap();
    assert_eq!(alice_records.len(), 2);
    assert!(alice_records[0].timestamp <= alice_records[1].timestamp);
    assert!(store.list(bob).await.unwrap().is_empty());
}

#[tokio::test]
async fn saved_ids_are_unique() {
    let store = MemoryCalculationStore::new();
    let person_id = Uuid::new_v4();
    let request = CalculatorKind::Energy
        .evaluate(&vitals(), None)
        .unwrap()
        .into_commit_request();

    let first = store.save(person_id, request.clone()).await.unwrap();
    let second = store.save(person_id, request).await.unwrap();
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn unavailable_store_surfaces_the_error() {
    let store = MemoryCalculationStore::new();
    store.set_unavailable(true);
    let person_id = Uuid::new_v4();
    let request = CalculatorKind::Energy
        .evaluate(&vitals(), None)
        .unwrap()
        .into_commit_request();

    let outcome = store.for_person(person_id).commit(request).await;
    assert!(matches!(outcome, Err(StorageError::Unavailable(_))));

    store.set_unavailable(false);
    assert!(store.list(person_id).await.unwrap().is_empty());
}

#[test]
fn saved_record_round_trips_through_json() {
    let request = CalculatorKind::Renal
        .evaluate(&vitals(), None)
        .unwrap()
        .into_commit_request();
    let record = clinica_storage::store::new_record(Uuid::new_v4(), request);

    let json = serde_json::to_string(&record).unwrap();
    let back: clinica_core::models::calculation::SavedCalculationRecord =
        serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}
