//! Tests for CLI output formatting

use std::collections::BTreeMap;

use diagpage::core::models::{Dependency, EnvEntry, HealthCheckResult, ValidationResult};
use diagpage::api::{EnvironmentData, MaskData};
use diagpage::output::HealthOutput;

#[test]
fn test_health_output_verdict() {
    let mut details = BTreeMap::new();
    details.insert("version".to_string(), "8.0.36".to_string());
    let ok = HealthCheckResult::success(Dependency::Database, details);
    let down = HealthCheckResult::failure(Dependency::Cache, "connection failed: refused");

    let output = HealthOutput::new(vec![ok.clone()]);
    assert!(output.healthy);
    let text = output.to_human();
    assert!(text.contains("MySQL: connection established"));
    assert!(text.contains("version: 8.0.36"));

    let output = HealthOutput::new(vec![ok, down]);
    assert!(!output.healthy);
    let text = output.to_human();
    assert!(text.contains("Redis: connection failed: refused"));
    assert!(text.contains("unreachable"));
}

#[test]
fn test_health_output_json_shape() {
    let output = HealthOutput::new(vec![HealthCheckResult::failure(Dependency::Cache, "boom")]);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["healthy"], false);
    assert_eq!(json["results"][0]["dependency"], "cache");
    assert_eq!(json["results"][0]["details"]["error"], "boom");
}

#[test]
fn test_environment_output() {
    let output = EnvironmentData {
        validation: ValidationResult::from_missing(vec!["REQUIRED_KEY".to_string()]),
        variables: vec![
            EnvEntry {
                name: "APP_ENV".to_string(),
                value: Some("production".to_string()),
                masked: false,
            },
            EnvEntry {
                name: "APP_NAME".to_string(),
                value: None,
                masked: false,
            },
        ],
    };
    let text = output.to_human();
    assert!(text.contains("production"));
    assert!(text.contains("(not set)"));
    assert!(text.contains("- REQUIRED_KEY"));

    let valid = EnvironmentData {
        validation: ValidationResult::from_missing(Vec::new()),
        variables: Vec::new(),
    };
    assert!(valid.to_human().contains("All required variables are set."));
}

#[test]
fn test_mask_data_json_matches_api_shape() {
    let data = MaskData {
        masked: "My***************23".to_string(),
        visible: 2,
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json, serde_json::json!({"masked": "My***************23", "visible": 2}));
}
