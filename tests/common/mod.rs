// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch directories plus template and listing data fixtures

#![allow(dead_code)]

use serde_json::{json, Value as JsonValue};
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::fs;

/// Instant every fixture timestamp is measured against
pub const NOW: &str = "2024-06-01T12:00:00Z";
pub const NOW_SECS: i64 = 1_717_243_200;

pub struct TestPizza {
    pub name: String,
    pub vendor: String,
    pub price: f64,
    pub diameter: f64,
    pub updated: i64,
}

pub struct ListingBuilder {
    title: String,
    pizzas: Vec<TestPizza>,
}

impl ListingBuilder {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            pizzas: Vec::new(),
        }
    }

    /// Add a pizza last scraped `minutes_ago` before [`NOW`]
    pub fn add_pizza(mut self, name: &str, vendor: &str, price: f64, minutes_ago: i64) -> Self {
        self.pizzas.push(TestPizza {
            name: name.to_string(),
            vendor: vendor.to_string(),
            price,
            diameter: 14.0,
            updated: NOW_SECS - minutes_ago * 60,
        });
        self
    }

    pub fn to_json(&self) -> JsonValue {
        let pizzas: Vec<JsonValue> = self
            .pizzas
            .iter()
            .map(|p| {
                json!({
                    "name": p.name,
                    "vendor": p.vendor,
                    "price": p.price,
                    "diameter": p.diameter,
                    "updated": p.updated,
                })
            })
            .collect();

        json!({ "title": self.title, "pizzas": pizzas })
    }
}

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.html", name))
    }

    pub async fn create_template(&self, name: &str, source: &str) -> PathBuf {
        let path = self.path().join(format!("{}.hbs", name));
        fs::write(&path, source)
            .await
            .expect("Failed to write template");
        path
    }

    pub async fn create_data_file(&self, name: &str, builder: &ListingBuilder) -> PathBuf {
        let path = self.path().join(format!("{}.json", name));
        let contents = serde_json::to_string_pretty(&builder.to_json()).expect("Invalid JSON");
        fs::write(&path, contents)
            .await
            .expect("Failed to write data file");
        path
    }

    pub async fn create_config_file(&self, contents: &str) -> PathBuf {
        let path = self.path().join("sliceview.yaml");
        fs::write(&path, contents)
            .await
            .expect("Failed to write config file");
        path
    }
}

pub const LISTING_TEMPLATE: &str = r#"<h1>{{title}}</h1>
<ul>
{{#each pizzas}}<li>{{name}} ({{vendor}}) ${{decimal price}} {{tip "right" "Price for a 14 inch pie"}} <small>{{elapsed updated}}</small></li>
{{/each}}</ul>
"#;
