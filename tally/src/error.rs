use thiserror::Error;

/// Error types for expression evaluation
///
/// Positions are zero-based character offsets into the original expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TallyError {
    /// A character (while scanning) or operator token (while evaluating)
    /// that is not part of the grammar
    #[error("Invalid character '{found}'{}", at(.position))]
    InvalidCharacter {
        found: String,
        position: Option<usize>,
    },

    /// A `)` without a matching `(`, or a `(` that is never closed
    #[error("Unbalanced parentheses at position {position}")]
    UnbalancedParentheses { position: usize },

    /// The postfix sequence does not reduce to exactly one value
    #[error("Invalid expression")]
    InvalidExpression,

    /// A division whose right operand is exactly zero
    #[error("Division by zero")]
    DivisionByZero,
}

fn at(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!(" at position {}", position),
        None => String::new(),
    }
}

/// The kind of a [`TallyError`], without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    UnbalancedParentheses,
    InvalidExpression,
    DivisionByZero,
}

/// How a failure is reported to remote callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The expression itself is malformed
    Client,
    /// Anything else, including division by zero
    Internal,
}

impl ErrorClass {
    /// The message shown to remote callers. The specific error kind is not
    /// exposed.
    pub fn public_message(self) -> &'static str {
        match self {
            ErrorClass::Client => "Expression is not valid",
            ErrorClass::Internal => "Internal server error",
        }
    }
}

impl TallyError {
    /// Create an invalid character error found while scanning
    pub fn invalid_character(found: char, position: usize) -> Self {
        Self::InvalidCharacter {
            found: found.to_string(),
            position: Some(position),
        }
    }

    /// Create an invalid character error for an unknown postfix token
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::InvalidCharacter {
            found: token.into(),
            position: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            TallyError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            TallyError::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
            TallyError::InvalidExpression => ErrorKind::InvalidExpression,
            TallyError::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }

    /// Classify the error for transports that distinguish client errors from
    /// server errors. Division by zero is internal.
    pub fn class(&self) -> ErrorClass {
        match self.kind() {
            ErrorKind::InvalidCharacter
            | ErrorKind::UnbalancedParentheses
            | ErrorKind::InvalidExpression => ErrorClass::Client,
            ErrorKind::DivisionByZero => ErrorClass::Internal,
        }
    }

    /// Character offset of the problem in the source expression, if known
    pub fn position(&self) -> Option<usize> {
        match self {
            TallyError::InvalidCharacter { position, .. } => *position,
            TallyError::UnbalancedParentheses { position } => Some(*position),
            TallyError::InvalidExpression | TallyError::DivisionByZero => None,
        }
    }
}
