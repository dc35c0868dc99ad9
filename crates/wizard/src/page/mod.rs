use crate::dtable::DecisionTable;

pub mod fact_pattern_constraints;
pub mod summary;

pub trait WizardPage {
    fn title(&self) -> &str;

    /// Whether the wizard may finish with the table in its current state.
    fn is_complete(&self, table: &DecisionTable) -> bool;

    /// Refresh page state each time the page is visited.
    fn prepare_view(&mut self, _table: &DecisionTable) {}
}
