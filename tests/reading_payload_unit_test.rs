//! Unit tests for reading payload validation and defaulting.
//!
//! Run with: cargo test --test reading_payload_unit_test

use loadbank_api::error::AppError;
use loadbank_api::routes::readings::ReadingPayload;

fn payload(json: serde_json::Value) -> ReadingPayload {
    serde_json::from_value(json).expect("payload should deserialize")
}

#[test]
fn complete_payload_passes_through() {
    let record = payload(serde_json::json!({
        "voltage": 231.4,
        "current": 1.2,
        "power": 277.7,
        "energy": 12.5,
        "temperature": 42.0,
        "is_started": true,
        "time_now": "00:12:34"
    }))
    .into_record()
    .expect("all fields present");

    assert_eq!(record.voltage, 231.4);
    assert_eq!(record.current, 1.2);
    assert_eq!(record.power, 277.7);
    assert_eq!(record.energy, 12.5);
    assert_eq!(record.temperature, 42.0);
    assert!(record.is_started);
    assert_eq!(record.time_now, "00:12:34");
}

#[test]
fn optional_fields_get_defaults() {
    let record = payload(serde_json::json!({
        "voltage": 230.0,
        "current": 1.0,
        "power": 230.0,
        "energy": 0.0
    }))
    .into_record()
    .expect("required fields present");

    assert_eq!(record.temperature, 30.0);
    assert!(!record.is_started);
    assert_eq!(record.time_now, "00:00:00");
}

#[test]
fn each_required_field_is_enforced() {
    for missing in ["voltage", "current", "power", "energy"] {
        let mut body = serde_json::json!({
            "voltage": 230.0,
            "current": 1.0,
            "power": 230.0,
            "energy": 0.0
        });
        body.as_object_mut().unwrap().remove(missing);

        let err = payload(body).into_record().unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Missing required fields"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}

#[test]
fn temperature_is_not_required_despite_having_a_default() {
    let result = payload(serde_json::json!({
        "voltage": 230.0,
        "current": 1.0,
        "power": 230.0,
        "energy": 0.0,
        "is_started": true
    }))
    .into_record();

    assert!(result.is_ok());
}

#[test]
fn client_timestamp_is_accepted_but_not_part_of_the_record() {
    // Old firmware sends a timestamp; the server ignores it and assigns
    // its own at insert time. The record type has no timestamp slot at all.
    let p = payload(serde_json::json!({
        "voltage": 230.0,
        "current": 1.0,
        "power": 230.0,
        "energy": 0.0,
        "timestamp": "2020-01-01T00:00:00Z",
        "source": "AC"
    }));
    assert_eq!(p.timestamp.as_deref(), Some("2020-01-01T00:00:00Z"));
    assert!(p.into_record().is_ok());
}
