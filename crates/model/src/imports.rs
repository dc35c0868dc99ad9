use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `import` statement, e.g. `import java.util.List;`
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Import {
    pub type_name: String,
}

impl Import {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl From<&str> for Import {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Import {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "import {};", self.type_name)
    }
}

/// Ordered list of imports made available to a rule source file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Imports {
    imports: Vec<Import>,
}

impl Imports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_import(&mut self, import: Import) {
        self.imports.push(import);
    }

    pub fn remove_import(&mut self, type_name: &str) -> Option<Import> {
        let idx = self.imports.iter().position(|i| i.type_name == type_name)?;
        Some(self.imports.remove(idx))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.imports.iter().any(|i| i.type_name == type_name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Import> {
        self.imports.iter()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

impl FromIterator<Import> for Imports {
    fn from_iter<T: IntoIterator<Item = Import>>(iter: T) -> Self {
        Self {
            imports: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Imports {
    type Item = &'a Import;
    type IntoIter = std::slice::Iter<'a, Import>;

    fn into_iter(self) -> Self::IntoIter {
        self.imports.iter()
    }
}
