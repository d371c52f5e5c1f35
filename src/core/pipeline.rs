use crate::core::aggregator::aggregate;
use crate::core::rows::build_rows;
use crate::core::validator::validate;
use crate::domain::model::ImportOutcome;

/// Runs the full import over one CSV blob: build rows, then validate and
/// aggregate the same row slice. The validator and aggregator are
/// independent consumers; neither sees the other's output. Sorting is a
/// separate call for callers that want a reordered preview.
pub fn run_import(csv_text: &str) -> ImportOutcome {
    let rows = build_rows(csv_text);
    tracing::debug!("Built {} rows from CSV input", rows.len());

    let report = validate(&rows);
    if !report.is_clean() {
        tracing::debug!("Validation produced {} error(s)", report.errors.len());
    }

    let rules = aggregate(&rows);
    tracing::debug!("Aggregated {} rule entries", rules.len());

    ImportOutcome { rows, report, rules }
}
