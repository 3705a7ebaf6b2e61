use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "guardrail")]
#[command(about = "Defensive value coercion and file reading that fails fast")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum Command {
    /// Convert a value to an integer
    Coerce {
        /// The raw value to convert (parsed as JSON first, then as a bare string)
        value: String,

        #[arg(long, help = "Inspect the value's shape before converting")]
        check_first: bool,
    },
    /// Read a text file and print its contents
    Read {
        /// Path of the file to read
        path: String,
    },
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Coerce { value, .. } => validate_non_empty_string("value", value),
            Command::Read { path } => validate_path("path", path),
        }
    }
}
