/// Data model introspection used by the wizard pages.
///
/// Implementations are expected to answer from an already loaded data
/// model; all lookups are synchronous.
pub trait DataModelOracle {
    /// Field names of `fact_type`, in display order.
    fn field_completions(&self, fact_type: &str) -> Vec<String>;

    fn field_type(&self, fact_type: &str, field: &str) -> Option<String>;

    fn operator_completions(&self, fact_type: &str, field: &str) -> Vec<String>;

    /// Whether the field's values come from an enumeration.
    fn has_enums(&self, fact_type: &str, field: &str) -> bool;
}

impl<T: DataModelOracle + ?Sized> DataModelOracle for &T {
    fn field_completions(&self, fact_type: &str) -> Vec<String> {
        (**self).field_completions(fact_type)
    }

    fn field_type(&self, fact_type: &str, field: &str) -> Option<String> {
        (**self).field_type(fact_type, field)
    }

    fn operator_completions(&self, fact_type: &str, field: &str) -> Vec<String> {
        (**self).operator_completions(fact_type, field)
    }

    fn has_enums(&self, fact_type: &str, field: &str) -> bool {
        (**self).has_enums(fact_type, field)
    }
}
