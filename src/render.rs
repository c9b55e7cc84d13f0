//! HTML rendering for the status page
//!
//! The page is rendered server-side from [`StatusData`]. Every dynamic
//! string goes through [`escape_html`] before it is written out.

use crate::api::StatusData;
use crate::core::models::{
    ComponentInfo, EnvEntry, HealthCheckResult, RuntimeInfo, ValidationResult,
};

/// Escape the five HTML-significant characters
#[must_use]
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the full status page
#[must_use]
pub fn render_page(data: &StatusData) -> String {
    let title = escape_html(&data.runtime.app_name);
    let mut body = String::new();

    body.push_str(&runtime_section(&data.runtime));
    body.push_str(&components_section(&data.components));
    body.push_str(&health_section("Database connection", &data.health.database));
    body.push_str(&health_section("Cache connection", &data.health.cache));
    body.push_str(&environment_section(
        &data.environment.validation,
        &data.environment.variables,
    ));

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - diagnostics</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <p>Runtime, dependency and configuration diagnostics</p>
{body}    </div>
</body>
</html>
"#
    )
}

fn runtime_section(info: &RuntimeInfo) -> String {
    let rows = [
        ("Version", info.app_version.as_str()),
        ("Server", info.server_software.as_str()),
        ("Hostname", info.hostname.as_str()),
        ("OS", info.os.as_str()),
        ("Architecture", info.arch.as_str()),
    ];

    let mut html = String::from(
        "        <h2>Runtime</h2>\n        <table>\n            <tr><th>Parameter</th><th>Value</th></tr>\n",
    );
    for (name, value) in rows {
        html.push_str(&format!(
            "            <tr><td>{name}</td><td><code>{}</code></td></tr>\n",
            escape_html(value)
        ));
    }
    html.push_str(&format!(
        "            <tr><td>PID</td><td><code>{}</code></td></tr>\n",
        info.pid
    ));
    html.push_str("        </table>\n");
    html
}

fn components_section(components: &[ComponentInfo]) -> String {
    let mut html = String::from(
        "        <h2>Probe drivers</h2>\n        <table>\n            <tr><th>Driver</th><th>Status</th><th>Version</th></tr>\n",
    );
    for component in components {
        let (badge, status) = if component.loaded {
            ("badge-success", "&#10003; Loaded")
        } else {
            ("badge-danger", "&#10007; Missing")
        };
        html.push_str(&format!(
            "            <tr><td>{}</td><td><span class=\"badge {badge}\">{status}</span></td><td><code>{}</code></td></tr>\n",
            escape_html(&component.name),
            escape_html(&component.version)
        ));
    }
    html.push_str("        </table>\n");
    html
}

fn health_section(heading: &str, result: &HealthCheckResult) -> String {
    let name = result.dependency.display_name();
    let mut html = format!("        <h2>{heading}</h2>\n");

    if let Some(error) = result.error() {
        html.push_str(&format!(
            "        <div class=\"status error\">&#10007; {name} connection failed: {}</div>\n",
            escape_html(error)
        ));
        return html;
    }

    html.push_str(&format!(
        "        <div class=\"status success\">&#10003; {name} connection established<br>\n"
    ));
    for (key, value) in &result.details {
        html.push_str(&format!(
            "            {}: <code>{}</code><br>\n",
            escape_html(&detail_label(key)),
            escape_html(value)
        ));
    }
    html.push_str("        </div>\n");
    html
}

fn detail_label(key: &str) -> String {
    let mut label = key.replace('_', " ");
    if let Some(first) = label.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    label
}

fn environment_section(validation: &ValidationResult, variables: &[EnvEntry]) -> String {
    let mut html = String::from("        <h2>Environment</h2>\n");

    if !validation.valid {
        let missing: Vec<String> = validation.missing.iter().map(|k| escape_html(k)).collect();
        html.push_str(&format!(
            "        <div class=\"status error\">Missing required variables: <code>{}</code></div>\n",
            missing.join(", ")
        ));
    }

    html.push_str(
        "        <table>\n            <tr><th>Variable</th><th>Value</th></tr>\n",
    );
    for entry in variables {
        let value = entry.value.as_deref().map_or_else(
            || "<em>not set</em>".to_string(),
            |v| format!("<code>{}</code>", escape_html(v)),
        );
        html.push_str(&format!(
            "            <tr><td>{}</td><td>{value}</td></tr>\n",
            escape_html(&entry.name)
        ));
    }
    html.push_str("        </table>\n");
    html
}

/// Stylesheet served at `/style.css`
pub const STYLE_CSS: &str = r"body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    max-width: 1200px;
    margin: 0 auto;
    padding: 20px;
    background: #f5f5f5;
}
.container {
    background: white;
    padding: 30px;
    border-radius: 10px;
    box-shadow: 0 2px 10px rgba(0,0,0,0.1);
}
h1 { color: #333; border-bottom: 3px solid #4CAF50; padding-bottom: 10px; }
h2 { color: #555; margin-top: 30px; }
.status { padding: 10px; border-radius: 5px; margin: 10px 0; }
.success { background: #d4edda; color: #155724; border: 1px solid #c3e6cb; }
.error { background: #f8d7da; color: #721c24; border: 1px solid #f5c6cb; }
table { width: 100%; border-collapse: collapse; margin: 15px 0; }
table th { background: #4CAF50; color: white; padding: 12px; text-align: left; }
table td { padding: 10px; border-bottom: 1px solid #ddd; }
code { background: #f4f4f4; padding: 2px 6px; border-radius: 3px; font-family: 'Courier New', monospace; }
.badge { display: inline-block; padding: 5px 10px; border-radius: 3px; font-size: 12px; font-weight: bold; }
.badge-success { background: #28a745; color: white; }
.badge-danger { background: #dc3545; color: white; }
";
