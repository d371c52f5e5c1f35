pub mod cli;

use crate::domain::schema::SortDirection;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_sort_key, Validate,
};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "promo-rules"))]
#[cfg_attr(
    feature = "cli",
    command(about = "CSV importer for category promotion thresholds")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(help = "Path to the thresholds CSV file"))]
    pub input: String,

    #[cfg_attr(feature = "cli", arg(long, default_value = "./output"))]
    pub output_path: String,

    #[cfg_attr(feature = "cli", arg(long, help = "Field key to sort the row preview by"))]
    pub sort_by: Option<String>,

    #[cfg_attr(
        feature = "cli",
        arg(long, value_enum, default_value_t = SortDirection::Asc)
    )]
    pub direction: SortDirection,

    #[cfg_attr(feature = "cli", arg(long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("input", &self.input)?;
        validate_file_extension("input", &self.input, &["csv", "txt"])?;
        validate_non_empty_string("output_path", &self.output_path)?;
        if let Some(key) = &self.sort_by {
            validate_sort_key("sort_by", key)?;
        }
        Ok(())
    }
}
