// ABOUTME: Main library module for sliceview
// ABOUTME: Exports the template helpers, the rendering engine and the CLI

pub mod cli;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use template::{
    register_helpers, RelativeTimeHumanizer, RenderOptions, TemplateEngine, TimeHumanizer,
    TipPosition,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
