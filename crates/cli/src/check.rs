use crate::error::CliError;
use drl_syntax::{parser::try_scan, statement::StatementKind};
use std::{collections::HashSet, fmt};

#[derive(Debug, Clone, PartialEq)]
pub struct Problem {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Lists incomplete `global` lines (which unmarshalling drops) and aliases
/// declared more than once.
pub fn check(source: &str) -> Result<Vec<Problem>, CliError> {
    let statements = try_scan(source)?;
    let mut problems = Vec::new();
    let mut aliases = HashSet::new();

    for statement in &statements {
        match &statement.kind {
            StatementKind::MalformedGlobal(text) => problems.push(Problem {
                line: statement.span.line,
                column: statement.span.column,
                message: format!("incomplete global declaration '{text}'"),
            }),
            StatementKind::Global(global) => {
                if !aliases.insert(global.alias.as_str()) {
                    problems.push(Problem {
                        line: statement.span.line,
                        column: statement.span.column,
                        message: format!("global '{}' is already declared", global.alias),
                    });
                }
            }
            StatementKind::Import(_) => {}
        }
    }

    Ok(problems)
}
