use crate::domain::model::Row;
use crate::domain::schema::{field_spec, FieldKey, SortDirection};
use std::cmp::Ordering;

/// Returns a new ordering of `rows` by `key`; the input is not mutated.
///
/// Numeric field keys compare as floats with unparsable values always
/// sorted last, whatever the direction; direction only reorders the valid
/// values. Any other key compares lexically on the raw cell text. Ties keep
/// input order (stable sort).
pub fn sort_rows(rows: &[Row], key: &str, direction: SortDirection) -> Vec<Row> {
    let mut sorted = rows.to_vec();
    let resolved = FieldKey::from_header(key);
    let numeric = resolved.and_then(field_spec);

    if let Some(spec) = numeric {
        sorted.sort_by(|a, b| {
            let left = parse_cell(a.get(spec.key));
            let right = parse_cell(b.get(spec.key));
            match (left, right) {
                (Some(x), Some(y)) => apply_direction(x.total_cmp(&y), direction),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        });
    } else {
        sorted.sort_by(|a, b| {
            let left = resolved.map_or("", |k| a.get(k));
            let right = resolved.map_or("", |k| b.get(k));
            apply_direction(left.cmp(right), direction)
        });
    }
    sorted
}

// Sort comparisons are float-typed for every numeric column, including the
// integer ones; NaN is rejected so total_cmp never sees one.
fn parse_cell(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

fn apply_direction(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}
