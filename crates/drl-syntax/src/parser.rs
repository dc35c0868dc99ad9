use crate::{error::SyntaxError, statement::Statement};
use pest::{Parser, iterators::Pair};
use pest_derive::Parser;
use tracing::{debug, warn};

#[derive(Parser)]
#[grammar = "grammar/drl.pest"]
pub struct DrlParser;

pub trait StatementParser {
    fn parse(pair: Pair<Rule>) -> Self;
}

/// Scan `source` for `import` and `global` statements, in source order.
pub fn try_scan(source: &str) -> Result<Vec<Statement>, SyntaxError> {
    let mut pairs =
        DrlParser::parse(Rule::program, source).map_err(SyntaxError::from_pest_error)?;

    let statements: Vec<Statement> = pairs
        .next()
        .map(|program| program.into_inner().filter_map(Statement::from_pair).collect())
        .unwrap_or_default();

    debug!(statements = statements.len(), "scanned rule source");
    Ok(statements)
}

/// Like [`try_scan`], but yields no statements instead of an error.
pub fn scan(source: &str) -> Vec<Statement> {
    match try_scan(source) {
        Ok(statements) => statements,
        Err(e) => {
            warn!("Failed to scan rule source, ignoring it: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::StatementKind;
    use model::{globals::GlobalDeclaration, imports::Import};

    fn kinds(source: &str) -> Vec<StatementKind> {
        try_scan(source)
            .unwrap()
            .into_iter()
            .map(|s| s.kind)
            .collect()
    }

    #[test]
    fn test_empty_source() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_global_declaration() {
        assert_eq!(
            kinds("global java.util.List myList;"),
            vec![StatementKind::Global(GlobalDeclaration::new(
                "java.util.List",
                "myList"
            ))]
        );
    }

    #[test]
    fn test_whitespace_tolerance() {
        assert_eq!(
            kinds("   global\tjava.util.List   myList ;   // trailing comment"),
            vec![StatementKind::Global(GlobalDeclaration::new(
                "java.util.List",
                "myList"
            ))]
        );
    }

    #[test]
    fn test_keyword_requires_separator() {
        assert!(kinds("globalFoo bar;").is_empty());
        assert!(kinds("imports.Foo;").is_empty());
    }

    #[test]
    fn test_import_with_and_without_semicolon() {
        assert_eq!(
            kinds("import java.util.List;\nimport java.util.Map\n"),
            vec![
                StatementKind::Import(Import::new("java.util.List")),
                StatementKind::Import(Import::new("java.util.Map")),
            ]
        );
    }

    #[test]
    fn test_function_import_is_not_a_type_import() {
        assert!(kinds("import function org.acme.Util.max;").is_empty());
    }

    #[test]
    fn test_malformed_globals_are_reported() {
        assert_eq!(
            kinds("global Foo\nglobal\nglobal A b c;"),
            vec![
                StatementKind::MalformedGlobal("global Foo".to_string()),
                StatementKind::MalformedGlobal("global".to_string()),
                StatementKind::MalformedGlobal("global A b c;".to_string()),
            ]
        );
    }

    #[test]
    fn test_statement_spans() {
        let statements = try_scan("package org.acme;\n\n  global A a;\n").unwrap();

        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].span.line, 3);
        assert_eq!(statements[0].span.column, 3);
        assert_eq!(statements[0].span.start, 21);
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(
            kinds("global A a;\r\nglobal B b;\r\n"),
            vec![
                StatementKind::Global(GlobalDeclaration::new("A", "a")),
                StatementKind::Global(GlobalDeclaration::new("B", "b")),
            ]
        );
    }
}
