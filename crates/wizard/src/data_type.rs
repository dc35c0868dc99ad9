use crate::dtable::CellValue;
use serde::{Deserialize, Serialize};

pub const TYPE_STRING: &str = "String";
pub const TYPE_NUMERIC: &str = "Numeric";
pub const TYPE_BOOLEAN: &str = "Boolean";
pub const TYPE_DATE: &str = "Date";
pub const TYPE_COMPARABLE: &str = "Comparable";
pub const TYPE_COLLECTION: &str = "Collection";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataType {
    String,
    Numeric,
    Boolean,
    Date,
    Comparable,
    Collection,
    Object,
}

impl DataType {
    /// Maps an oracle field type name. `NumericInteger`, `NumericBigDecimal`
    /// and friends are all numeric.
    pub fn from_field_type(field_type: &str) -> Self {
        match field_type {
            TYPE_STRING => DataType::String,
            TYPE_BOOLEAN => DataType::Boolean,
            TYPE_DATE => DataType::Date,
            TYPE_COMPARABLE => DataType::Comparable,
            TYPE_COLLECTION => DataType::Collection,
            t if t.starts_with(TYPE_NUMERIC) => DataType::Numeric,
            _ => DataType::Object,
        }
    }

    /// Converts `value` to this type, or `Empty` when it has no
    /// representation in it.
    pub fn coerce(self, value: &CellValue) -> CellValue {
        match (self, value) {
            (_, CellValue::Empty) => CellValue::Empty,

            (DataType::Numeric, CellValue::Numeric(_))
            | (DataType::Boolean, CellValue::Boolean(_))
            | (DataType::Date, CellValue::Date(_)) => value.clone(),

            (DataType::Numeric, CellValue::Text(s)) => s
                .trim()
                .parse::<f64>()
                .map(CellValue::Numeric)
                .unwrap_or(CellValue::Empty),
            (DataType::Boolean, CellValue::Text(s)) => match s.trim() {
                "true" => CellValue::Boolean(true),
                "false" => CellValue::Boolean(false),
                _ => CellValue::Empty,
            },
            (DataType::Date, CellValue::Text(s)) => CellValue::Date(s.clone()),

            (DataType::Numeric | DataType::Boolean | DataType::Date, _) => CellValue::Empty,

            (
                DataType::String | DataType::Comparable | DataType::Collection | DataType::Object,
                _,
            ) => CellValue::Text(value.to_string()),
        }
    }
}

/// Display name shown to users for an oracle field type.
pub fn user_friendly_type_name(field_type: &str) -> String {
    match DataType::from_field_type(field_type) {
        DataType::String => "Text".to_string(),
        DataType::Numeric => "Number".to_string(),
        DataType::Boolean => "True/False".to_string(),
        DataType::Date => "Date".to_string(),
        DataType::Comparable => "Comparable".to_string(),
        DataType::Collection => "List".to_string(),
        DataType::Object => field_type.to_string(),
    }
}
