// ABOUTME: Template engine implementation using Handlebars
// ABOUTME: Owns an HTML-escaping registry with the listing helpers installed and renders templates

use handlebars::Handlebars;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

use super::error::{Result, TemplateError};
use super::helpers::{self, TipPosition};
use super::humanize::{RelativeTimeHumanizer, TimeHumanizer};

/// Registry behaviour shared by the CLI config and library callers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub strict_mode: bool,

    #[serde(default)]
    pub dev_mode: bool,

    #[serde(default)]
    pub default_tip_position: TipPosition,
}

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine measuring elapsed time against the wall clock
    pub fn new(options: &RenderOptions) -> Self {
        Self::with_humanizer(options, Arc::new(RelativeTimeHumanizer::new()))
    }

    /// Create a template engine with a custom elapsed-time humanizer
    pub fn with_humanizer(options: &RenderOptions, humanizer: Arc<dyn TimeHumanizer>) -> Self {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(options.strict_mode);
        handlebars.set_dev_mode(options.dev_mode);

        // Output is HTML, so plain expressions keep the default escaping;
        // helper output is written raw.
        handlebars.register_escape_fn(handlebars::html_escape);

        helpers::register_helpers(&mut handlebars, humanizer, options.default_tip_position);
        debug!("Template engine ready: {:?}", options);

        Self { handlebars }
    }

    /// Render a template string with JSON data
    pub fn render_template(&self, template: &str, data: &JsonValue) -> Result<String> {
        self.handlebars
            .render_template(template, data)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Register a named template from a string
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars.register_template_string(name, template)?;
        Ok(())
    }

    /// Register a named template from a file on disk
    pub fn register_template_file<P: AsRef<Path>>(&mut self, name: &str, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Registering template '{}' from {}", name, path.display());
        self.handlebars.register_template_file(name, path)?;
        Ok(())
    }

    /// Render a previously registered template
    pub fn render(&self, name: &str, data: &JsonValue) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(TemplateError::RenderError(format!(
                "template '{}' is not registered",
                name
            )));
        }

        self.handlebars
            .render(name, data)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new(&RenderOptions::default())
    }
}
