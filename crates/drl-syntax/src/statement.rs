use crate::parser::{Rule, StatementParser};
use model::{globals::GlobalDeclaration, imports::Import};
use pest::iterators::Pair;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Location of a statement in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    pub fn from_pair(pair: &Pair<Rule>) -> Self {
        let (line, column) = pair.line_col();
        let span = pair.as_span();
        Span::new(span.start(), span.end(), line, column)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub kind: StatementKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StatementKind {
    Import(Import),
    Global(GlobalDeclaration),
    /// A line starting with `global` that is not a complete declaration.
    MalformedGlobal(String),
}

impl Statement {
    pub fn as_import(&self) -> Option<&Import> {
        match &self.kind {
            StatementKind::Import(import) => Some(import),
            _ => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            StatementKind::Import(import) => write!(f, "{import}"),
            StatementKind::Global(global) => write!(f, "{global}"),
            StatementKind::MalformedGlobal(text) => write!(f, "{text}"),
        }
    }
}

impl StatementParser for GlobalDeclaration {
    fn parse(pair: Pair<Rule>) -> Self {
        let mut class_name = String::new();
        let mut alias = String::new();

        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::class_name => class_name = inner.as_str().to_string(),
                Rule::alias => alias = inner.as_str().to_string(),
                _ => {}
            }
        }

        GlobalDeclaration { class_name, alias }
    }
}

impl StatementParser for Import {
    fn parse(pair: Pair<Rule>) -> Self {
        let type_name = pair
            .into_inner()
            .find(|inner| inner.as_rule() == Rule::import_target)
            .map(|inner| inner.as_str().to_string())
            .unwrap_or_default();

        Import::new(type_name)
    }
}

impl Statement {
    /// Builds a statement from a top-level pair; `None` for `EOI`.
    pub fn from_pair(pair: Pair<Rule>) -> Option<Self> {
        let span = Span::from_pair(&pair);
        let kind = match pair.as_rule() {
            Rule::global_decl => StatementKind::Global(GlobalDeclaration::parse(pair)),
            Rule::import_decl => StatementKind::Import(Import::parse(pair)),
            Rule::malformed_global => {
                StatementKind::MalformedGlobal(pair.as_str().trim_end().to_string())
            }
            _ => return None,
        };

        Some(Statement { kind, span })
    }
}
