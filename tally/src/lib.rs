//! # Tally Engine
//!
//! **Arithmetic expressions in, numbers out**
//!
//! Tally evaluates arithmetic expressions written as plain text: decimal
//! numbers, the four binary operators `+ - * /`, and parentheses.
//!
//! ## Quick Start
//!
//! ```rust
//! use tally::{Engine, TallyResult};
//!
//! fn main() -> TallyResult<()> {
//!     let engine = Engine::new();
//!
//!     assert_eq!(engine.evaluate("2+3*4")?, 14.0);
//!     assert_eq!(engine.evaluate("(2+3)*4")?, 20.0);
//!     assert_eq!(engine.compile("8-3-2")?.to_string(), "8 3 - 2 -");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! Every evaluation runs the same three stages:
//!
//! 1. [`parser::convert`] scans the text once and rewrites it into postfix
//!    (reverse Polish) order with the shunting-yard algorithm.
//! 2. [`evaluator::evaluate`] runs the postfix sequence on an operand stack.
//! 3. [`Engine`] and [`evaluate_expression`] chain the two and stop at the
//!    first error.
//!
//! Nothing is shared between calls, so an [`Engine`] can be used from any
//! number of threads at once.

pub mod engine;
pub mod error;
pub mod evaluator;
pub mod parser;
pub mod response;

pub use engine::Engine;
pub use error::{ErrorClass, ErrorKind, TallyError};
pub use evaluator::{evaluate, evaluate_traced};
pub use parser::convert;
pub use parser::tokens::{Operator, Postfix, Token};
pub use response::{format_result, CalcRequest, CalcResponse, Evaluation, Step, StepAction};

/// Result type for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Evaluate an infix expression.
///
/// Shorthand for `Engine::new().evaluate(text)`.
pub fn evaluate_expression(text: &str) -> TallyResult<f64> {
    Engine::new().evaluate(text)
}
