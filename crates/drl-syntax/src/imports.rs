use crate::parser::scan;
use model::imports::Imports;
use std::convert::Infallible;

/// Renders and parses the imports block of a rule source file.
pub trait ImportsCodec {
    type Error: std::error::Error;

    fn render(&self, imports: &Imports) -> String;

    fn parse(&self, content: &str) -> Result<Imports, Self::Error>;
}

/// DRL imports: one `import <type>;` line per entry.
///
/// Parsing picks up every `import` line of the source and ignores the rest,
/// so it never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct DrlImports;

impl ImportsCodec for DrlImports {
    type Error = Infallible;

    fn render(&self, imports: &Imports) -> String {
        imports.iter().map(|import| format!("{import}\n")).collect()
    }

    fn parse(&self, content: &str) -> Result<Imports, Self::Error> {
        Ok(scan(content)
            .iter()
            .filter_map(|statement| statement.as_import().cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::imports::Import;

    #[test]
    fn test_render_empty() {
        assert_eq!(DrlImports.render(&Imports::new()), "");
    }

    #[test]
    fn test_render_imports() {
        let imports: Imports = vec![
            Import::new("java.util.List"),
            Import::new("org.acme.Person"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            DrlImports.render(&imports),
            "import java.util.List;\nimport org.acme.Person;\n"
        );
    }

    #[test]
    fn test_parse_ignores_other_content() {
        let source = r#"
package org.acme;

import org.acme.Person;

rule "adults"
when
    Person( age > 18 )
then
end
"#;

        let imports = DrlImports.parse(source).unwrap();
        assert_eq!(imports.len(), 1);
        assert!(imports.contains("org.acme.Person"));
    }
}
