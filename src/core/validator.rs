use crate::domain::model::{Row, ValidationReport};
use crate::domain::schema::{FieldKey, FIELD_SCHEMA};
use std::collections::{HashMap, HashSet};

/// Checks every row against the field schema and the name rules.
///
/// Per row: the name must be non-empty and unique, then each non-empty
/// numeric cell must parse and sit inside its bounds. Messages accumulate
/// in encounter order, name checks first, fields in schema order. Duplicate
/// names flag both occurrences; the first one is flagged at most once no
/// matter how many duplicates follow. Empty cells are "not provided", never
/// an error.
pub fn validate(rows: &[Row]) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut flagged_firsts: HashSet<usize> = HashSet::new();

    for (i, row) in rows.iter().enumerate() {
        let name = row.name();
        if name.is_empty() {
            report.record(
                i,
                FieldKey::Name,
                format!("카테고리명이 비어 있습니다 (행 {})", i + 1),
            );
        } else if let Some(&first) = seen.get(name) {
            let message = format!("중복된 카테고리명입니다: {}", name);
            if flagged_firsts.insert(first) {
                report.record(first, FieldKey::Name, message.clone());
            }
            report.record(i, FieldKey::Name, message);
        } else {
            seen.insert(name.to_string(), i);
        }

        let label = if name.is_empty() {
            format!("행 {}", i + 1)
        } else {
            name.to_string()
        };

        for spec in &FIELD_SCHEMA {
            let raw = row.get(spec.key).trim();
            if raw.is_empty() {
                continue;
            }
            match spec.parse(raw) {
                None => report.record(
                    i,
                    spec.key,
                    format!("{}: {} 숫자 형식이 올바르지 않습니다.", label, spec.key),
                ),
                Some(value) if value < 0.0 => report.record(
                    i,
                    spec.key,
                    format!("{}: {}는 0 이상이어야 합니다.", label, spec.key),
                ),
                Some(value) => {
                    // Range checks are independent; both can fire in the
                    // flat list, field_errors keeps only the first.
                    if let Some(min) = spec.min {
                        if value < min {
                            report.record(
                                i,
                                spec.key,
                                format!("{}: {}는 {} 이상이어야 합니다.", label, spec.key, min),
                            );
                        }
                    }
                    if let Some(max) = spec.max {
                        if value > max {
                            report.record(
                                i,
                                spec.key,
                                format!("{}: {}는 {} 이하여야 합니다.", label, spec.key, max),
                            );
                        }
                    }
                }
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str, fields: &[(FieldKey, &str)]) -> Row {
        let mut row = Row::new();
        row.set(FieldKey::Name, name.to_string());
        for (key, value) in fields {
            row.set(*key, value.to_string());
        }
        row
    }

    #[test]
    fn test_clean_rows_produce_empty_report() {
        let rows = vec![
            row("Toys", &[(FieldKey::MinSales, "5"), (FieldKey::MinCtr, "0.03")]),
            row("Books", &[(FieldKey::MinRevenue, "1000")]),
        ];
        let report = validate(&rows);
        assert!(report.is_clean());
        assert!(report.row_errors.is_empty());
        assert!(report.field_errors.is_empty());
    }

    #[test]
    fn test_empty_name_is_flagged_with_row_number() {
        let rows = vec![row("  ", &[])];
        let report = validate(&rows);
        assert_eq!(report.errors, vec!["카테고리명이 비어 있습니다 (행 1)"]);
        assert_eq!(report.field_errors[&0][&FieldKey::Name], report.errors[0]);
    }

    #[test]
    fn test_duplicate_names_flag_both_rows() {
        let rows = vec![row("Toys", &[]), row("Books", &[]), row("Toys", &[])];
        let report = validate(&rows);
        assert!(report.errors.iter().any(|e| e.contains("중복된")));
        assert!(report.row_errors.contains_key(&0));
        assert!(report.row_errors.contains_key(&2));
        assert!(!report.row_errors.contains_key(&1));
    }

    #[test]
    fn test_first_occurrence_flagged_once_for_many_duplicates() {
        let rows = vec![row("Toys", &[]), row("Toys", &[]), row("Toys", &[])];
        let report = validate(&rows);
        assert_eq!(report.row_errors[&0].len(), 1);
        assert_eq!(report.row_errors[&1].len(), 1);
        assert_eq!(report.row_errors[&2].len(), 1);
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_non_numeric_value() {
        let rows = vec![row("Toys", &[(FieldKey::MinSales, "abc")])];
        let report = validate(&rows);
        assert_eq!(
            report.errors,
            vec!["Toys: min_sales 숫자 형식이 올바르지 않습니다."]
        );
    }

    #[test]
    fn test_negative_value() {
        let rows = vec![row("Toys", &[(FieldKey::MinCtr, "-0.1")])];
        let report = validate(&rows);
        assert_eq!(report.errors, vec!["Toys: min_ctr는 0 이상이어야 합니다."]);
    }

    #[test]
    fn test_over_max_value() {
        let rows = vec![row("Toys", &[(FieldKey::MinCtr, "1.5")])];
        let report = validate(&rows);
        assert_eq!(report.errors, vec!["Toys: min_ctr는 1 이하여야 합니다."]);
    }

    #[test]
    fn test_exactly_one_error_per_invalid_cell() {
        for bad in ["abc", "-0.1", "1.5"] {
            let rows = vec![row("Toys", &[(FieldKey::MinCtr, bad)])];
            let report = validate(&rows);
            assert_eq!(report.errors.len(), 1, "value {:?}", bad);
            assert_eq!(report.field_errors[&0].len(), 1);
        }
    }

    #[test]
    fn test_empty_fields_are_skipped() {
        let rows = vec![row("Toys", &[(FieldKey::MinSales, "  ")])];
        let report = validate(&rows);
        assert!(report.is_clean());
    }

    #[test]
    fn test_label_falls_back_to_row_number_when_name_empty() {
        let rows = vec![row("", &[(FieldKey::MinSales, "abc")])];
        let report = validate(&rows);
        assert!(report
            .errors
            .iter()
            .any(|e| e.starts_with("행 1: min_sales")));
    }

    #[test]
    fn test_name_error_comes_before_field_errors() {
        let rows = vec![row("Toys", &[]), row("Toys", &[(FieldKey::MinSales, "abc")])];
        let report = validate(&rows);
        let messages = &report.row_errors[&1];
        assert!(messages[0].contains("중복된"));
        assert!(messages[1].contains("숫자 형식"));
    }
}
