// ABOUTME: Error types for template engine operations
// ABOUTME: Defines the errors raised while registering, validating and rendering templates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template render error: {0}")]
    RenderError(String),

    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Unknown tooltip position: {0}")]
    InvalidPosition(String),

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
