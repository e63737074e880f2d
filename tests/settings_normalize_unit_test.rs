//! Unit tests for settings payload normalization: dual-naming resolution,
//! required-field checks, and field-level fallbacks.
//!
//! Run with: cargo test --test settings_normalize_unit_test

use loadbank_api::error::AppError;
use loadbank_api::repository::settings::Source;
use loadbank_api::routes::settings::SettingsPayload;

fn payload(json: serde_json::Value) -> SettingsPayload {
    serde_json::from_value(json).expect("payload should deserialize")
}

fn validation_message(err: AppError) -> String {
    match err {
        AppError::Validation(msg) => msg,
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn snake_case_is_preferred_over_camel_case() {
    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "AC",
        "cut_off_voltage": 68.0,
        "cutOffVoltage": 99.0,
        "setpoint_percent": 7.0,
        "setpointPercent": 1.0
    }))
    .normalize()
    .unwrap();

    assert_eq!(record.cut_off_voltage, 68.0);
    assert_eq!(record.setpoint_percent, 7.0);
}

#[test]
fn camel_case_fills_in_when_snake_case_is_absent() {
    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "DC",
        "cutOffVoltage": 72.5,
        "cutOffEnergy": 1800.0,
        "timerValue": "01:30:00",
        "setpointPercent": 8.0
    }))
    .normalize()
    .unwrap();

    assert_eq!(record.cut_off_voltage, 72.5);
    assert_eq!(record.cut_off_energy, 1800.0);
    assert_eq!(record.timer_value, "01:30:00");
    assert_eq!(record.setpoint_percent, 8.0);
}

#[test]
fn optional_fields_get_defaults() {
    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "NO"
    }))
    .normalize()
    .unwrap();

    assert_eq!(record.setpoint, 450.0);
    assert_eq!(record.setpoint_percent, 5.0);
    assert_eq!(record.cut_off_voltage, 70.5);
    assert_eq!(record.cut_off_energy, 2000.0);
    assert_eq!(record.timer_value, "00:00:00");
}

#[test]
fn missing_setpoint_is_rejected_by_name() {
    let err = payload(serde_json::json!({ "source": "AC" }))
        .normalize()
        .unwrap_err();

    assert_eq!(validation_message(err), "Missing required field: setpoint");
}

#[test]
fn missing_or_invalid_source_is_rejected() {
    for body in [
        serde_json::json!({ "setpoint": 450.0 }),
        serde_json::json!({ "setpoint": 450.0, "source": "XY" }),
        serde_json::json!({ "setpoint": 450.0, "source": "ac" }),
    ] {
        let err = payload(body).normalize().unwrap_err();
        assert_eq!(
            validation_message(err),
            "Invalid or missing source value. Must be AC, DC, or NO"
        );
    }
}

#[test]
fn zero_setpoint_falls_back_to_500() {
    // Present-but-zero setpoint passes validation and is stored as 500;
    // the firmware sends 0 to mean "unset".
    let record = payload(serde_json::json!({
        "setpoint": 0.0,
        "source": "DC"
    }))
    .normalize()
    .unwrap();

    assert_eq!(record.setpoint, 500.0);
}

#[test]
fn is_started_passes_through_the_shim() {
    // Snake case wins even when it is false
    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "AC",
        "is_started": false,
        "isStarted": true
    }))
    .normalize()
    .unwrap();
    assert_eq!(record.is_started, Some(false));

    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "AC",
        "isStarted": true
    }))
    .normalize()
    .unwrap();
    assert_eq!(record.is_started, Some(true));
}

#[test]
fn omitted_is_started_stays_out_of_the_echoed_data() {
    // The field is echoed when supplied but never invented; it is not a
    // column on the settings table.
    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "AC"
    }))
    .normalize()
    .unwrap();
    assert_eq!(record.is_started, None);

    let data = serde_json::to_value(&record).unwrap();
    assert!(data.get("is_started").is_none());

    let record = payload(serde_json::json!({
        "setpoint": 450.0,
        "source": "AC",
        "is_started": true
    }))
    .normalize()
    .unwrap();
    let data = serde_json::to_value(&record).unwrap();
    assert_eq!(data.get("is_started"), Some(&serde_json::json!(true)));
}

#[test]
fn source_parses_exactly_three_values() {
    assert_eq!(Source::parse("AC"), Some(Source::Ac));
    assert_eq!(Source::parse("DC"), Some(Source::Dc));
    assert_eq!(Source::parse("NO"), Some(Source::No));
    assert_eq!(Source::parse(""), None);
    assert_eq!(Source::parse("dc"), None);
    assert_eq!(Source::parse("ACDC"), None);

    assert_eq!(Source::Ac.as_str(), "AC");
    assert_eq!(Source::Dc.as_str(), "DC");
    assert_eq!(Source::No.as_str(), "NO");
}
