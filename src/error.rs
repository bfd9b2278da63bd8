//! Error types for translation and processing

use thiserror::Error;

/// A document failed to translate
///
/// Translation is all-or-nothing: a single malformed directive anywhere in the
/// document produces this error and no output text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("syntax error at line {line}, column {column}: found {found}, expected {expected}")]
    Syntax {
        line: usize,
        column: usize,
        found: String,
        expected: String,
    },
}

impl TranslateError {
    /// 1-based source line of the offending token
    pub fn line(&self) -> usize {
        match self {
            TranslateError::Syntax { line, .. } => *line,
        }
    }
}

/// Errors that can occur while processing a file
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = TranslateError::Syntax {
            line: 3,
            column: 13,
            found: "'kernels'".to_string(),
            expected: "a construct".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "syntax error at line 3, column 13: found 'kernels', expected a construct"
        );
        assert_eq!(err.line(), 3);
    }

    #[test]
    fn test_processing_error_wraps_translate_error() {
        let err = ProcessingError::from(TranslateError::Syntax {
            line: 1,
            column: 1,
            found: "end of input".to_string(),
            expected: "'acc'".to_string(),
        });
        assert!(err.to_string().starts_with("syntax error at line 1"));
    }
}
