// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for sliceview

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sliceview")]
#[command(about = "Render pizza listing templates with the sliceview Handlebars helpers")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a Handlebars template against JSON data
    Render {
        #[arg(help = "Path to the template file")]
        template: PathBuf,

        #[arg(short, long, help = "Path to a JSON data file")]
        data: Option<PathBuf>,

        #[arg(
            short = 'V',
            long = "var",
            help = "Extra top-level template values (key=value)"
        )]
        vars: Vec<String>,

        #[arg(short, long, help = "Write the rendered output to a file")]
        output: Option<PathBuf>,

        #[arg(long, help = "Measure elapsed times against this RFC 3339 instant")]
        now: Option<String>,
    },

    /// Check a template file for syntax errors without rendering
    Validate {
        #[arg(help = "Path to the template file")]
        template: PathBuf,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse variables from key=value format
    pub fn parse_variables(
        vars: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut variables = std::collections::HashMap::new();

        for var in vars {
            if let Some((key, value)) = var.split_once('=') {
                variables.insert(key.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid variable format '{}'. Expected 'key=value'",
                    var
                ));
            }
        }

        Ok(variables)
    }
}
