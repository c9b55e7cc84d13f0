//! Tests for the HTML status page

use std::collections::BTreeMap;

use diagpage::api::{EnvironmentData, StatusData};
use diagpage::core::models::{
    ComponentInfo, Dependency, EnvEntry, HealthCheckResult, HealthReport, RuntimeInfo,
    ValidationResult,
};
use diagpage::render::{escape_html, render_page};

fn runtime() -> RuntimeInfo {
    RuntimeInfo {
        app_name: "shop <prod>".to_string(),
        app_version: "1.2.3".to_string(),
        server_software: "tiny_http/0.12".to_string(),
        hostname: "web-1".to_string(),
        os: "linux".to_string(),
        arch: "x86_64".to_string(),
        pid: 4242,
    }
}

fn status(health: HealthReport, environment: EnvironmentData) -> StatusData {
    StatusData {
        runtime: runtime(),
        components: vec![
            ComponentInfo {
                name: "MySQL client".to_string(),
                loaded: true,
                version: "mysql 25".to_string(),
            },
            ComponentInfo {
                name: "Redis client".to_string(),
                loaded: false,
                version: "N/A".to_string(),
            },
        ],
        health,
        environment,
    }
}

fn healthy() -> HealthReport {
    let mut db = BTreeMap::new();
    db.insert("version".to_string(), "8.0.36".to_string());
    db.insert("server_time".to_string(), "2024-05-01 10:00:00".to_string());
    let mut cache = BTreeMap::new();
    cache.insert("version".to_string(), "7.2.4".to_string());
    HealthReport {
        database: HealthCheckResult::success(Dependency::Database, db),
        cache: HealthCheckResult::success(Dependency::Cache, cache),
    }
}

fn environment(missing: Vec<String>) -> EnvironmentData {
    EnvironmentData {
        validation: ValidationResult::from_missing(missing),
        variables: vec![
            EnvEntry {
                name: "APP_ENV".to_string(),
                value: Some("production".to_string()),
                masked: false,
            },
            EnvEntry {
                name: "APP_DEBUG".to_string(),
                value: None,
                masked: false,
            },
        ],
    }
}

#[test]
fn test_page_has_every_section() {
    let html = render_page(&status(healthy(), environment(vec![])));

    assert!(html.starts_with("<!DOCTYPE html>"));
    for heading in ["Runtime", "Probe drivers", "Database connection", "Cache connection", "Environment"] {
        assert!(html.contains(&format!("<h2>{heading}</h2>")), "missing section {heading}");
    }
    assert!(html.contains("<code>4242</code>"));
    assert!(html.contains("Server time: <code>2024-05-01 10:00:00</code>"));
    assert!(html.contains("badge-danger"));
    assert!(html.contains("<em>not set</em>"));
    assert!(!html.contains("Missing required variables"));
}

#[test]
fn test_title_is_escaped() {
    let html = render_page(&status(healthy(), environment(vec![])));
    assert!(html.contains("<title>shop &lt;prod&gt; - diagnostics</title>"));
    assert!(!html.contains("shop <prod>"));
}

#[test]
fn test_failures_are_escaped_error_panels() {
    let health = HealthReport {
        database: HealthCheckResult::failure(
            Dependency::Database,
            "connection failed: <script>alert('x')</script>",
        ),
        cache: HealthCheckResult::failure(Dependency::Cache, "connection failed: refused"),
    };
    let html = render_page(&status(health, environment(vec!["MYSQL_HOST".to_string()])));

    assert!(html.contains("MySQL connection failed: connection failed: &lt;script&gt;"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("Redis connection failed"));
    assert!(html.contains("Missing required variables: <code>MYSQL_HOST</code>"));
}

#[test]
fn test_escape_html_leaves_plain_text() {
    assert_eq!(escape_html("a & b"), "a &amp; b");
    assert_eq!(escape_html("zażółć"), "zażółć");
}
