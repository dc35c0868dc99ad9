use crate::parser::Rule;
use pest::error::Error as PestError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },
}

impl SyntaxError {
    pub fn from_pest_error(err: PestError<Rule>) -> Self {
        use pest::error::LineColLocation;

        let (line, column) = match err.line_col {
            LineColLocation::Pos((l, c)) => (l, c),
            LineColLocation::Span((l, c), _) => (l, c),
        };

        SyntaxError::Parse {
            message: err.variant.to_string(),
            line,
            column,
        }
    }
}
