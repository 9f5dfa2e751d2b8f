pub mod fleet_file;

use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "showroom")]
#[command(about = "Render vehicle reports from a TOML fleet catalog")]
pub struct CliConfig {
    #[arg(long, default_value = "./fleet.toml")]
    pub fleet: String,

    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("fleet", &self.fleet)?;
        Ok(())
    }
}
