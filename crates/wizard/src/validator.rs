use crate::dtable::{ConditionColumn, ConstraintValueType};

pub trait ConditionValidator {
    fn is_condition_valid(&self, condition: &ConditionColumn) -> bool;

    fn does_operator_accept_value_list(&self, condition: &ConditionColumn) -> bool;
}

impl<T: ConditionValidator + ?Sized> ConditionValidator for &T {
    fn is_condition_valid(&self, condition: &ConditionColumn) -> bool {
        (**self).is_condition_valid(condition)
    }

    fn does_operator_accept_value_list(&self, condition: &ConditionColumn) -> bool {
        (**self).does_operator_accept_value_list(condition)
    }
}

/// Operators whose right-hand side is not a single value.
const NO_VALUE_LIST_OPERATORS: &[&str] = &["in", "not in", "== null", "!= null"];

/// Column checks that need nothing beyond the column itself: a header, and
/// either a predicate expression or a field with an operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicConditionValidator;

impl ConditionValidator for BasicConditionValidator {
    fn is_condition_valid(&self, condition: &ConditionColumn) -> bool {
        if condition.header.trim().is_empty() {
            return false;
        }

        match condition.constraint_value_type {
            ConstraintValueType::Predicate => !condition.fact_field.trim().is_empty(),
            _ => !condition.fact_field.is_empty() && !condition.operator.is_empty(),
        }
    }

    /// Value lists only apply to literal columns.
    fn does_operator_accept_value_list(&self, condition: &ConditionColumn) -> bool {
        condition.constraint_value_type == ConstraintValueType::Literal
            && !condition.operator.is_empty()
            && !NO_VALUE_LIST_OPERATORS.contains(&condition.operator.as_str())
    }
}
