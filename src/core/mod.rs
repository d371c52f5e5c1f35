pub mod aggregator;
pub mod pipeline;
pub mod rows;
pub mod sorter;
pub mod tokenizer;
pub mod validator;

pub use crate::domain::model::{ImportOutcome, Row, RuleMap, ValidationReport};
pub use crate::domain::ports::Storage;
pub use crate::domain::schema::{FieldKey, FieldSpec, SortDirection, FIELD_SCHEMA};
pub use crate::utils::error::Result;
