use crate::imports::Imports;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named binding of a type to an alias, e.g. `global java.util.List myList;`.
///
/// Neither field is validated; both are carried and emitted verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GlobalDeclaration {
    pub class_name: String,
    pub alias: String,
}

impl GlobalDeclaration {
    pub fn new(class_name: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            alias: alias.into(),
        }
    }
}

impl fmt::Display for GlobalDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "global {} {};", self.class_name, self.alias)
    }
}

/// Imports plus the ordered global declarations of a rule source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalsDocument {
    #[serde(default)]
    pub imports: Imports,
    #[serde(default)]
    pub globals: Vec<GlobalDeclaration>,
}

impl GlobalsDocument {
    pub fn new(imports: Imports, globals: Vec<GlobalDeclaration>) -> Self {
        Self { imports, globals }
    }
}
