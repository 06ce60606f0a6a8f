use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::ast::Operator;

#[derive(Debug, Error)]
pub enum ExprError {
    // File and I/O errors
    #[error("input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // Parsing errors
    #[error("unexpected end of input at position {position}: expected {expected}")]
    UnexpectedEndOfInput { expected: String, position: usize },
    #[error("unexpected symbol '{found}' at position {position}: expected {expected}")]
    UnexpectedSymbol {
        expected: String,
        found: char,
        position: usize,
    },
    #[error("group opened at position {opened_at} is not closed: expected '}}', found {found} at position {position}")]
    MalformedGrouping {
        opened_at: usize,
        found: String,
        position: usize,
    },
    #[error("nesting deeper than {limit} levels at position {position}")]
    NestingTooDeep { limit: usize, position: usize },

    // Evaluation errors
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow in '{}'", op.symbol())]
    ArithmeticOverflow { op: Operator },
}

impl ExprError {
    /// Create an end-of-input error for a production that still needed `expected`.
    pub fn end_of_input(expected: impl Into<String>, position: usize) -> Self {
        ExprError::UnexpectedEndOfInput {
            expected: expected.into(),
            position,
        }
    }

    /// Create an unexpected symbol error
    pub fn unexpected_symbol(expected: impl Into<String>, found: char, position: usize) -> Self {
        ExprError::UnexpectedSymbol {
            expected: expected.into(),
            found,
            position,
        }
    }

    /// Stable class name of the error, printed by the driver.
    pub fn kind(&self) -> &'static str {
        match self {
            ExprError::InputNotFound { .. } => "InputNotFound",
            ExprError::Io(_) => "IOFailure",
            ExprError::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
            ExprError::UnexpectedSymbol { .. } => "UnexpectedSymbol",
            ExprError::MalformedGrouping { .. } => "MalformedGrouping",
            ExprError::NestingTooDeep { .. } => "NestingTooDeep",
            ExprError::DivisionByZero => "DivisionByZero",
            ExprError::ArithmeticOverflow { .. } => "ArithmeticOverflow",
        }
    }

    /// Input position the error refers to, when it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ExprError::UnexpectedEndOfInput { position, .. }
            | ExprError::UnexpectedSymbol { position, .. }
            | ExprError::MalformedGrouping { position, .. }
            | ExprError::NestingTooDeep { position, .. } => Some(*position),
            _ => None,
        }
    }
}

// Type alias for Result with ExprError
pub type ExprResult<T> = Result<T, ExprError>;
