pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::core::aggregator::aggregate;
pub use crate::core::pipeline::run_import;
pub use crate::core::rows::build_rows;
pub use crate::core::sorter::sort_rows;
pub use crate::core::tokenizer::tokenize;
pub use crate::core::validator::validate;
pub use crate::domain::model::{ImportOutcome, Row, RuleMap, ValidationReport};
pub use crate::domain::schema::{FieldKey, FieldSpec, SortDirection, FIELD_SCHEMA};
pub use crate::utils::error::{ImportError, Result};
