use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical column keys for a category threshold row. Declaration order is
/// schema-table order, so `Ord` keeps maps in the order the validator walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    Name,
    MinSales,
    MinCtr,
    MinViews,
    MinDaysListed,
    MinRepeatPurchase,
    MinCustomerRetention,
    MinRevenue,
    MinDaysInStep2,
}

impl FieldKey {
    pub const ALL: [FieldKey; 9] = [
        FieldKey::Name,
        FieldKey::MinSales,
        FieldKey::MinCtr,
        FieldKey::MinViews,
        FieldKey::MinDaysListed,
        FieldKey::MinRepeatPurchase,
        FieldKey::MinCustomerRetention,
        FieldKey::MinRevenue,
        FieldKey::MinDaysInStep2,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::MinSales => "min_sales",
            FieldKey::MinCtr => "min_ctr",
            FieldKey::MinViews => "min_views",
            FieldKey::MinDaysListed => "min_days_listed",
            FieldKey::MinRepeatPurchase => "min_repeat_purchase",
            FieldKey::MinCustomerRetention => "min_customer_retention",
            FieldKey::MinRevenue => "min_revenue",
            FieldKey::MinDaysInStep2 => "min_days_in_step2",
        }
    }

    /// Case-insensitive header alias resolution. `category` and `name` both
    /// map to `Name`; every `min_*` header maps to itself; anything else is
    /// an unknown column and is dropped by the row builder.
    pub fn from_header(cell: &str) -> Option<FieldKey> {
        match cell.trim().to_lowercase().as_str() {
            "category" | "name" => Some(FieldKey::Name),
            "min_sales" => Some(FieldKey::MinSales),
            "min_ctr" => Some(FieldKey::MinCtr),
            "min_views" => Some(FieldKey::MinViews),
            "min_days_listed" => Some(FieldKey::MinDaysListed),
            "min_repeat_purchase" => Some(FieldKey::MinRepeatPurchase),
            "min_customer_retention" => Some(FieldKey::MinCustomerRetention),
            "min_revenue" => Some(FieldKey::MinRevenue),
            "min_days_in_step2" => Some(FieldKey::MinDaysInStep2),
            _ => None,
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the fixed numeric field schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    pub is_float: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl FieldSpec {
    /// Type-aware fallible parse. Integer fields reject fractional input;
    /// float fields reject a literal NaN so the sorter never compares one.
    pub fn parse(&self, raw: &str) -> Option<f64> {
        let raw = raw.trim();
        if self.is_float {
            raw.parse::<f64>().ok().filter(|v| !v.is_nan())
        } else {
            raw.parse::<i64>().ok().map(|v| v as f64)
        }
    }
}

/// The eight validated numeric columns, in validation order. The two
/// fractional-rate fields are bounded to [0, 1]; the rest are open-ended
/// non-negative counts/amounts.
pub static FIELD_SCHEMA: [FieldSpec; 8] = [
    FieldSpec { key: FieldKey::MinSales, is_float: false, min: None, max: None },
    FieldSpec { key: FieldKey::MinCtr, is_float: true, min: Some(0.0), max: Some(1.0) },
    FieldSpec { key: FieldKey::MinViews, is_float: false, min: None, max: None },
    FieldSpec { key: FieldKey::MinDaysListed, is_float: false, min: None, max: None },
    FieldSpec { key: FieldKey::MinRepeatPurchase, is_float: false, min: None, max: None },
    FieldSpec { key: FieldKey::MinCustomerRetention, is_float: true, min: Some(0.0), max: Some(1.0) },
    FieldSpec { key: FieldKey::MinRevenue, is_float: false, min: None, max: None },
    FieldSpec { key: FieldKey::MinDaysInStep2, is_float: false, min: None, max: None },
];

pub fn field_spec(key: FieldKey) -> Option<&'static FieldSpec> {
    FIELD_SCHEMA.iter().find(|spec| spec.key == key)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SortDirection {
    Asc,
    Desc,
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => f.write_str("asc"),
            SortDirection::Desc => f.write_str("desc"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_aliases() {
        assert_eq!(FieldKey::from_header("CATEGORY"), Some(FieldKey::Name));
        assert_eq!(FieldKey::from_header("name"), Some(FieldKey::Name));
        assert_eq!(FieldKey::from_header("Min_Sales"), Some(FieldKey::MinSales));
        assert_eq!(FieldKey::from_header("unknown_column"), None);
    }

    #[test]
    fn test_integer_fields_reject_fractions() {
        let spec = field_spec(FieldKey::MinSales).unwrap();
        assert_eq!(spec.parse("10"), Some(10.0));
        assert_eq!(spec.parse(" 10 "), Some(10.0));
        assert_eq!(spec.parse("10.5"), None);
        assert_eq!(spec.parse("abc"), None);
    }

    #[test]
    fn test_float_fields_reject_nan() {
        let spec = field_spec(FieldKey::MinCtr).unwrap();
        assert_eq!(spec.parse("0.03"), Some(0.03));
        assert_eq!(spec.parse("NaN"), None);
        assert_eq!(spec.parse(""), None);
    }
}
