use model::globals::GlobalsDocument;

pub mod codec;
pub mod error;
pub mod imports;
pub mod parser;
pub mod statement;

pub use codec::GlobalsCodec;
pub use imports::{DrlImports, ImportsCodec};

/// Render `doc` as a rule source fragment using the DRL imports renderer.
pub fn marshal(doc: &GlobalsDocument) -> String {
    GlobalsCodec::new().marshal(doc)
}

/// Extract imports and globals from rule source text.
///
/// Never fails: unrecognised content is skipped and the worst case is an
/// empty document.
pub fn unmarshal(content: &str) -> GlobalsDocument {
    match GlobalsCodec::new().unmarshal(content) {
        Ok(doc) => doc,
        Err(never) => match never {},
    }
}
