use crate::{
    imports::{DrlImports, ImportsCodec},
    parser::scan,
    statement::StatementKind,
};
use model::globals::{GlobalDeclaration, GlobalsDocument};
use tracing::debug;

/// Converts a [`GlobalsDocument`] to a rule source fragment and back.
///
/// The imports block is delegated to an [`ImportsCodec`]; globals are written
/// one `global <Type> <alias>;` line each, in order, without escaping.
#[derive(Debug, Clone, Default)]
pub struct GlobalsCodec<I = DrlImports> {
    imports: I,
}

impl GlobalsCodec<DrlImports> {
    pub fn new() -> Self {
        Self {
            imports: DrlImports,
        }
    }
}

impl<I: ImportsCodec> GlobalsCodec<I> {
    pub fn with_imports(imports: I) -> Self {
        Self { imports }
    }

    pub fn marshal(&self, doc: &GlobalsDocument) -> String {
        let mut out = self.imports.render(&doc.imports);
        out.push('\n');
        for global in &doc.globals {
            out.push_str(&format!("{global}\n"));
        }
        out
    }

    /// Errors from the imports collaborator are returned unchanged; the
    /// globals scan itself never fails.
    pub fn unmarshal(&self, content: &str) -> Result<GlobalsDocument, I::Error> {
        let imports = self.imports.parse(content)?;
        let globals = parse_globals(content);

        Ok(GlobalsDocument { imports, globals })
    }
}

/// Every well-formed `global` declaration in `content`, in source order.
/// Incomplete declarations are skipped.
pub fn parse_globals(content: &str) -> Vec<GlobalDeclaration> {
    scan(content)
        .into_iter()
        .filter_map(|statement| match statement.kind {
            StatementKind::Global(global) => Some(global),
            StatementKind::MalformedGlobal(text) => {
                debug!(
                    line = statement.span.line,
                    "Skipping malformed global declaration: {}", text
                );
                None
            }
            StatementKind::Import(_) => None,
        })
        .collect()
}
