use crate::domain::model::{Row, RuleMap};
use crate::domain::schema::FIELD_SCHEMA;
use std::collections::BTreeMap;

/// Folds rows into the category → field → threshold map submitted to the
/// settings endpoint.
///
/// Only cells that parse contribute; rows with a blank name or zero parsed
/// fields are left out entirely. A later row with the same name overwrites
/// the earlier entry (last-write-wins; duplicates are the validator's job).
pub fn aggregate(rows: &[Row]) -> RuleMap {
    let mut rules = RuleMap::new();
    for row in rows {
        let name = row.name();
        if name.is_empty() {
            continue;
        }
        let mut fields = BTreeMap::new();
        for spec in &FIELD_SCHEMA {
            let raw = row.get(spec.key).trim();
            if raw.is_empty() {
                continue;
            }
            if let Some(value) = spec.parse(raw) {
                fields.insert(spec.key, value);
            }
        }
        if !fields.is_empty() {
            rules.insert(name.to_string(), fields);
        }
    }
    rules
}
