use crate::domain::schema::FieldKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One category threshold record: canonical field key to raw cell text.
/// Every row carries all nine canonical keys; absent cells stay `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    values: BTreeMap<FieldKey, String>,
}

impl Row {
    pub fn new() -> Self {
        let values = FieldKey::ALL
            .iter()
            .map(|key| (*key, String::new()))
            .collect();
        Self { values }
    }

    pub fn get(&self, key: FieldKey) -> &str {
        self.values.get(&key).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, key: FieldKey, value: String) {
        self.values.insert(key, value);
    }

    /// Trimmed category name, the row's identity.
    pub fn name(&self) -> &str {
        self.get(FieldKey::Name).trim()
    }
}

/// Validation output, indexed three ways: a flat message list for summary
/// banners, messages grouped by row, and the first message per row+field
/// for cell highlighting.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub row_errors: BTreeMap<usize, Vec<String>>,
    pub field_errors: BTreeMap<usize, BTreeMap<FieldKey, String>>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Records one message everywhere it is indexed. `field_errors` keeps
    /// only the first message per cell; the flat list keeps every one.
    pub(crate) fn record(&mut self, row: usize, field: FieldKey, message: String) {
        self.field_errors
            .entry(row)
            .or_default()
            .entry(field)
            .or_insert_with(|| message.clone());
        self.row_errors.entry(row).or_default().push(message.clone());
        self.errors.push(message);
    }
}

/// Aggregated category name → field → threshold value, the payload handed
/// to the settings-persistence collaborator.
pub type RuleMap = BTreeMap<String, BTreeMap<FieldKey, f64>>;

/// Product of one full import run over a CSV blob.
#[derive(Debug, Clone, Serialize)]
pub struct ImportOutcome {
    pub rows: Vec<Row>,
    pub report: ValidationReport,
    pub rules: RuleMap,
}
