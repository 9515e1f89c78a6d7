// ABOUTME: Command implementations for the sliceview CLI
// ABOUTME: Handles execution of the render and validate commands

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::config::Config;
use crate::template::{RelativeTimeHumanizer, TemplateEngine};

/// Render a template file against JSON data
pub async fn render_template(
    template_path: PathBuf,
    data_path: Option<PathBuf>,
    output: Option<PathBuf>,
    now: Option<String>,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let source = tokio::fs::read_to_string(&template_path).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to read template '{}': {}",
            template_path.display(),
            e
        )
    })?;

    let data = match data_path {
        Some(path) => load_data(&path).await?,
        None => JsonValue::Object(serde_json::Map::new()),
    };
    let data = merge_template_vars(data, &config.template_vars)?;

    let humanizer = match now {
        Some(ref instant) => RelativeTimeHumanizer::at(parse_instant(instant)?),
        None => RelativeTimeHumanizer::new(),
    };

    let name = template_name(&template_path);
    let mut engine = TemplateEngine::with_humanizer(&config.render, Arc::new(humanizer));
    engine
        .register_template_string(&name, &source)
        .map_err(|e| anyhow::anyhow!("Failed to compile template '{}': {}", name, e))?;

    let rendered = engine
        .render(&name, &data)
        .map_err(|e| anyhow::anyhow!("Failed to render template '{}': {}", name, e))?;

    if let Some(output_path) = output {
        tokio::fs::write(&output_path, &rendered).await.map_err(|e| {
            anyhow::anyhow!(
                "Failed to write output file '{}': {}",
                output_path.display(),
                e
            )
        })?;
        info!("Output written to: {}", output_path.display());
    } else {
        print!("{}", rendered);
    }

    info!("Template rendering completed");
    Ok(())
}

/// Validate a template file
pub async fn validate_template(template_path: PathBuf, config: &Config) -> Result<()> {
    info!("Validating template: {}", template_path.display());

    let source = tokio::fs::read_to_string(&template_path).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to read template '{}': {}",
            template_path.display(),
            e
        )
    })?;

    let engine = TemplateEngine::new(&config.render);
    engine
        .validate_template(&source)
        .map_err(|e| anyhow::anyhow!("Template validation failed: {}", e))?;

    println!("✓ Template '{}' is valid", template_path.display());
    if !engine.has_templates(&source) {
        println!("  No template expressions found");
    }

    info!("Template validation completed successfully");
    Ok(())
}

/// Read and parse a JSON data file
async fn load_data(path: &Path) -> Result<JsonValue> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read data file '{}': {}", path.display(), e))?;

    let data = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Invalid JSON in '{}': {}", path.display(), e))?;
    debug!("Loaded data from {}", path.display());

    Ok(data)
}

/// Insert template variables as top-level string values, overriding the data
fn merge_template_vars(data: JsonValue, vars: &HashMap<String, String>) -> Result<JsonValue> {
    if vars.is_empty() {
        return Ok(data);
    }

    match data {
        JsonValue::Object(mut map) => {
            for (key, value) in vars {
                map.insert(key.clone(), JsonValue::String(value.clone()));
            }
            Ok(JsonValue::Object(map))
        }
        _ => Err(anyhow::anyhow!(
            "Template variables require the data file to contain a JSON object"
        )),
    }
}

fn parse_instant(instant: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(instant)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| anyhow::anyhow!("Invalid --now value '{}': {}", instant, e))
}

/// Templates are registered under their file stem
fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "template".to_string())
}
