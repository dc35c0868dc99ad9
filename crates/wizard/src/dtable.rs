use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableFormat {
    #[default]
    ExtendedEntry,
    LimitedEntry,
}

/// How the value of a single field constraint is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstraintValueType {
    #[default]
    Literal,
    Formula,
    ReturnValue,
    Predicate,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Numeric(f64),
    Boolean(bool),
    Date(String),
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn clear(&mut self) {
        *self = CellValue::Empty;
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) | CellValue::Date(s) => write!(f, "{s}"),
            CellValue::Numeric(n) => write!(f, "{n}"),
            CellValue::Boolean(b) => write!(f, "{b}"),
        }
    }
}

/// A condition column of a fact pattern.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConditionColumn {
    pub header: String,
    pub fact_field: String,
    pub field_type: String,
    pub operator: String,
    pub constraint_value_type: ConstraintValueType,
    /// Comma-separated list of allowed values, `value=label` entries allowed.
    pub value_list: Option<String>,
    pub default_value: CellValue,
}

impl ConditionColumn {
    pub fn new(header: &str, fact_field: &str, operator: &str) -> Self {
        Self {
            header: header.to_string(),
            fact_field: fact_field.to_string(),
            operator: operator.to_string(),
            ..Default::default()
        }
    }

    /// Allowed values, with any `=label` suffix stripped.
    pub fn value_list(&self) -> Vec<String> {
        let Some(list) = self.value_list.as_deref() else {
            return Vec::new();
        };

        list.split(',')
            .map(|item| item.split('=').next().unwrap_or(item).trim())
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Pattern {
    pub fact_type: String,
    pub bound_name: String,
    pub conditions: Vec<ConditionColumn>,
}

impl Pattern {
    pub fn new(fact_type: &str, bound_name: &str) -> Self {
        Self {
            fact_type: fact_type.to_string(),
            bound_name: bound_name.to_string(),
            conditions: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DecisionTable {
    pub table_format: TableFormat,
    pub patterns: Vec<Pattern>,
}

impl DecisionTable {
    pub fn new(table_format: TableFormat) -> Self {
        Self {
            table_format,
            patterns: Vec::new(),
        }
    }

    /// Non-empty pattern bindings must be unique across the table.
    pub fn are_pattern_bindings_unique(&self) -> bool {
        let mut seen = HashSet::new();
        self.patterns
            .iter()
            .filter(|p| !p.bound_name.is_empty())
            .all(|p| seen.insert(p.bound_name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_list_strips_labels() {
        let mut column = ConditionColumn::new("Age", "age", "==");
        column.value_list = Some("18=Adult, 65=Senior,,  3 ".to_string());

        assert_eq!(column.value_list(), vec!["18", "65", "3"]);
    }

    #[test]
    fn test_value_list_absent() {
        assert!(ConditionColumn::new("Age", "age", "==").value_list().is_empty());
    }

    #[test]
    fn test_pattern_binding_uniqueness() {
        let mut table = DecisionTable::new(TableFormat::ExtendedEntry);
        table.patterns.push(Pattern::new("Person", "$p"));
        table.patterns.push(Pattern::new("Address", ""));
        table.patterns.push(Pattern::new("Car", ""));
        assert!(table.are_pattern_bindings_unique());

        table.patterns.push(Pattern::new("Person", "$p"));
        assert!(!table.are_pattern_bindings_unique());
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Numeric(42.0).to_string(), "42");
        assert_eq!(CellValue::Boolean(true).to_string(), "true");
        assert_eq!(CellValue::Text("abc".into()).to_string(), "abc");
    }
}
