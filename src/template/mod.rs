// ABOUTME: Template module for sliceview
// ABOUTME: Provides the listing helpers, elapsed-time humanization and the Handlebars engine wrapper

pub mod engine;
pub mod error;
pub mod helpers;
pub mod humanize;

pub use engine::{RenderOptions, TemplateEngine};
pub use error::{Result, TemplateError};
pub use helpers::{format_decimal, register_helpers, tip_markup, TipPosition};
pub use humanize::{RelativeTimeHumanizer, TimeHumanizer};
