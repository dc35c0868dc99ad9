use crate::{
    dtable::{DecisionTable, TableFormat},
    page::WizardPage,
};

pub struct SummaryPage {
    base_file_name: String,
    context_path: String,
    table_format: TableFormat,
}

impl SummaryPage {
    pub fn new(base_file_name: &str, context_path: &str, table_format: TableFormat) -> Self {
        Self {
            base_file_name: base_file_name.to_string(),
            context_path: context_path.to_string(),
            table_format,
        }
    }

    pub fn base_file_name(&self) -> &str {
        &self.base_file_name
    }

    pub fn set_base_file_name(&mut self, name: &str) {
        self.base_file_name = name.to_string();
    }

    pub fn context_path(&self) -> &str {
        &self.context_path
    }

    pub fn table_format(&self) -> TableFormat {
        self.table_format
    }

    pub fn has_invalid_asset_name(&self) -> bool {
        self.base_file_name.is_empty()
    }
}

impl WizardPage for SummaryPage {
    fn title(&self) -> &str {
        "Summary"
    }

    fn is_complete(&self, _table: &DecisionTable) -> bool {
        !self.has_invalid_asset_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_name_required() {
        let table = DecisionTable::default();
        let mut page = SummaryPage::new("", "default://project/src", TableFormat::LimitedEntry);

        assert!(!page.is_complete(&table));
        assert!(page.has_invalid_asset_name());

        page.set_base_file_name("pricing");
        assert!(page.is_complete(&table));
        assert_eq!(page.base_file_name(), "pricing");
        assert_eq!(page.table_format(), TableFormat::LimitedEntry);
    }
}
