//! Unit tests for environment value parsing.
//!
//! Run with: cargo test --test config_unit_test

use loadbank_api::config::{ConfigError, parse_or};

#[test]
fn unset_variables_fall_back() {
    assert_eq!(parse_or::<u32>("DB_MAX_CONNECTIONS", None, 10).unwrap(), 10);
    assert_eq!(parse_or::<u16>("API_PORT", None, 5000).unwrap(), 5000);
}

#[test]
fn set_values_are_parsed() {
    assert_eq!(
        parse_or::<u16>("API_PORT", Some("8080".to_string()), 5000).unwrap(),
        8080
    );
}

#[test]
fn unparseable_values_are_rejected_by_name() {
    let err = parse_or::<u16>("API_PORT", Some("five thousand".to_string()), 5000).unwrap_err();
    let ConfigError::Invalid(name) = err;
    assert_eq!(name, "API_PORT");
}
