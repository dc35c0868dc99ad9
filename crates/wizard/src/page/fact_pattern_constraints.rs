use crate::{
    data_type::{DataType, user_friendly_type_name},
    dtable::{ConditionColumn, ConstraintValueType, DecisionTable, Pattern, TableFormat},
    oracle::DataModelOracle,
    page::WizardPage,
    validator::ConditionValidator,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const PREDICATE_FIELD_NAME: &str = "Predicate";

/// A field that can be dragged into a pattern's condition list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableField {
    pub name: String,
    pub field_type: String,
    pub display_type: String,
    pub constraint_value_type: ConstraintValueType,
}

impl AvailableField {
    pub fn literal(name: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            field_type: field_type.to_string(),
            display_type: user_friendly_type_name(field_type),
            constraint_value_type: ConstraintValueType::Literal,
        }
    }

    pub fn predicate() -> Self {
        Self {
            name: PREDICATE_FIELD_NAME.to_string(),
            field_type: String::new(),
            display_type: String::new(),
            constraint_value_type: ConstraintValueType::Predicate,
        }
    }
}

/// Wizard page defining the condition columns of each fact pattern.
pub struct FactPatternConstraintsPage<O, V> {
    oracle: O,
    validator: V,
    available_patterns: Vec<Pattern>,
    pattern_bindings_unique: bool,
    conditions_defined: bool,
}

impl<O: DataModelOracle, V: ConditionValidator> FactPatternConstraintsPage<O, V> {
    pub fn new(oracle: O, validator: V) -> Self {
        Self {
            oracle,
            validator,
            available_patterns: Vec::new(),
            pattern_bindings_unique: true,
            conditions_defined: true,
        }
    }

    pub fn available_patterns(&self) -> &[Pattern] {
        &self.available_patterns
    }

    /// Fields offered for `pattern`: one literal field per data model field,
    /// plus a predicate for extended entry tables.
    pub fn select_pattern(
        &self,
        table_format: TableFormat,
        pattern: &Pattern,
    ) -> Vec<AvailableField> {
        let fact_type = pattern.fact_type.as_str();
        let mut fields: Vec<AvailableField> = self
            .oracle
            .field_completions(fact_type)
            .iter()
            .map(|name| {
                let field_type = self.oracle.field_type(fact_type, name).unwrap_or_default();
                AvailableField::literal(name, &field_type)
            })
            .collect();

        if table_format == TableFormat::ExtendedEntry {
            fields.push(AvailableField::predicate());
        }

        fields
    }

    pub fn set_chosen_conditions(&self, pattern: &mut Pattern, conditions: Vec<ConditionColumn>) {
        pattern.conditions = conditions;
    }

    /// Operators offered for `condition`. `in` is dropped for non-literal
    /// values and for enumerated fields.
    pub fn operator_completions(
        &self,
        pattern: &Pattern,
        condition: &ConditionColumn,
    ) -> Vec<String> {
        let mut ops = self
            .oracle
            .operator_completions(&pattern.fact_type, &condition.fact_field);

        if condition.constraint_value_type != ConstraintValueType::Literal
            || self.has_enum(pattern, condition)
        {
            ops.retain(|op| op != "in");
        }

        ops
    }

    pub fn has_enum(&self, pattern: &Pattern, condition: &ConditionColumn) -> bool {
        self.oracle.has_enums(&pattern.fact_type, &condition.fact_field)
    }

    pub fn requires_value_list(&self, pattern: &Pattern, condition: &ConditionColumn) -> bool {
        if pattern.fact_type.is_empty() || condition.fact_field.is_empty() {
            return false;
        }

        self.validator.does_operator_accept_value_list(condition)
            && !self.has_enum(pattern, condition)
    }

    pub fn data_type(
        &self,
        table_format: TableFormat,
        pattern: &Pattern,
        condition: &ConditionColumn,
    ) -> DataType {
        if table_format == TableFormat::LimitedEntry {
            return DataType::Boolean;
        }
        if condition.constraint_value_type != ConstraintValueType::Literal
            || matches!(condition.operator.as_str(), "in" | "not in")
        {
            return DataType::String;
        }

        let field_type = if condition.field_type.is_empty() {
            self.oracle
                .field_type(&pattern.fact_type, &condition.fact_field)
                .unwrap_or_default()
        } else {
            condition.field_type.clone()
        };
        DataType::from_field_type(&field_type)
    }

    /// Keep the default value consistent with the column: it must be one of
    /// the listed values when a value list exists, otherwise it is converted
    /// to the column's data type.
    pub fn assert_default_value(
        &self,
        table_format: TableFormat,
        pattern: &Pattern,
        condition: &mut ConditionColumn,
    ) {
        let values = condition.value_list();
        if !values.is_empty() {
            let default = condition.default_value.to_string();
            if !values.contains(&default) {
                debug!(
                    column = %condition.header,
                    "Default value '{}' not in value list, clearing it", default
                );
                condition.default_value.clear();
            }
            return;
        }

        let data_type = self.data_type(table_format, pattern, condition);
        condition.default_value = data_type.coerce(&condition.default_value);
    }

    pub fn are_conditions_defined(&self, table: &DecisionTable) -> bool {
        table
            .patterns
            .iter()
            .flat_map(|p| p.conditions.iter())
            .all(|c| self.validator.is_condition_valid(c))
    }

    pub fn on_duplicate_patterns(&mut self, are_pattern_bindings_unique: bool) {
        self.pattern_bindings_unique = are_pattern_bindings_unique;
    }

    pub fn on_conditions_defined(&mut self, are_conditions_defined: bool) {
        self.conditions_defined = are_conditions_defined;
    }

    pub fn pattern_bindings_unique(&self) -> bool {
        self.pattern_bindings_unique
    }

    pub fn conditions_defined(&self) -> bool {
        self.conditions_defined
    }
}

impl<O: DataModelOracle, V: ConditionValidator> WizardPage for FactPatternConstraintsPage<O, V> {
    fn title(&self) -> &str {
        "Add fact pattern constraints"
    }

    fn is_complete(&self, table: &DecisionTable) -> bool {
        let defined = self.are_conditions_defined(table);
        debug!(conditions_defined = defined, "Checked fact pattern constraints");
        defined
    }

    fn prepare_view(&mut self, table: &DecisionTable) {
        self.available_patterns = table.patterns.clone();
    }
}
