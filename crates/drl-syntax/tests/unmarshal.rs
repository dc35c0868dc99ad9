//! Tests for extracting globals from complete rule source files

use drl_syntax::{GlobalsCodec, parser::try_scan, statement::StatementKind, unmarshal};
use model::globals::GlobalDeclaration;

#[test]
fn test_empty_input() {
    let doc = unmarshal("");
    assert!(doc.globals.is_empty());
    assert!(doc.imports.is_empty());
}

#[test]
fn test_order_is_preserved() {
    let doc = unmarshal("global C c;\nglobal A a;\nglobal B b;\n");
    let aliases: Vec<_> = doc.globals.iter().map(|g| g.alias.as_str()).collect();
    assert_eq!(aliases, vec!["c", "a", "b"]);
}

#[test]
fn test_malformed_line_is_dropped() {
    let doc = unmarshal("global A a;\nglobal Foo\nglobal B b;\n");
    assert_eq!(
        doc.globals,
        vec![GlobalDeclaration::new("A", "a"), GlobalDeclaration::new("B", "b")]
    );
}

#[test]
fn test_missing_semicolon_is_dropped() {
    assert!(unmarshal("global java.util.List myList").globals.is_empty());
}

#[test]
fn test_full_rule_file() {
    let source = r#"package org.acme.rules;

import org.acme.Person;
import java.util.List;

global java.util.List results;
global org.acme.Logger logger;

rule "Collect adults"
    when
        $p : Person( age >= 18 )
    then
        results.add( $p );
end
"#;

    let doc = GlobalsCodec::new().unmarshal(source).unwrap();

    let imports: Vec<_> = doc.imports.iter().map(|i| i.type_name.as_str()).collect();
    assert_eq!(imports, vec!["org.acme.Person", "java.util.List"]);
    assert_eq!(
        doc.globals,
        vec![
            GlobalDeclaration::new("java.util.List", "results"),
            GlobalDeclaration::new("org.acme.Logger", "logger"),
        ]
    );
}

#[test]
fn test_commented_out_global_is_ignored() {
    let doc = unmarshal("// global A a;\n# global B b;\nglobal C c;");
    assert_eq!(doc.globals, vec![GlobalDeclaration::new("C", "c")]);
}

#[test]
fn test_unmarshal_is_stateless() {
    let source = "import a.A;\nglobal A a;\n";
    assert_eq!(unmarshal(source), unmarshal(source));
}

#[test]
fn test_malformed_global_positions() {
    let statements = try_scan("global A a;\n  global Foo\n").unwrap();

    let malformed: Vec<_> = statements
        .iter()
        .filter(|s| matches!(s.kind, StatementKind::MalformedGlobal(_)))
        .collect();

    assert_eq!(malformed.len(), 1);
    assert_eq!(malformed[0].span.line, 2);
    assert_eq!(malformed[0].span.column, 3);
}

#[test]
fn test_shared_codec_across_threads() {
    let codec = &GlobalsCodec::new();
    let sources: Vec<String> = (0..8).map(|i| format!("global T{i} v{i};\n")).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || codec.unmarshal(source).unwrap()))
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let doc = handle.join().unwrap();
            let expected = GlobalDeclaration::new(format!("T{i}"), format!("v{i}"));
            assert_eq!(doc.globals, vec![expected]);
        }
    });
}
