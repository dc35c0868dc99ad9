//! Page logic for the guided decision table wizard.
//!
//! Pages only hold presentation state; data model lookups go through a
//! [`oracle::DataModelOracle`] and column checks through a
//! [`validator::ConditionValidator`].

pub mod data_type;
pub mod dtable;
pub mod oracle;
pub mod page;
pub mod validator;
