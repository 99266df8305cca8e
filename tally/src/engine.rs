use crate::evaluator;
use crate::parser;
use crate::{Evaluation, Postfix, TallyResult};

/// The Tally evaluation engine.
///
/// Holds no state: every call allocates its own scratch stacks, so one
/// engine can serve concurrent callers without locking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine;

impl Engine {
    pub fn new() -> Self {
        Self
    }

    /// Convert an infix expression to postfix without evaluating it
    pub fn compile(&self, expression: &str) -> TallyResult<Postfix> {
        parser::convert(expression)
    }

    /// Evaluate an infix expression, stopping at the first error
    pub fn evaluate(&self, expression: &str) -> TallyResult<f64> {
        let postfix = self.compile(expression)?;
        self.evaluate_postfix(&postfix)
    }

    pub fn evaluate_postfix(&self, postfix: &Postfix) -> TallyResult<f64> {
        evaluator::evaluate(postfix)
    }

    /// Evaluate an infix expression and keep every evaluator step
    pub fn evaluate_with_steps(&self, expression: &str) -> TallyResult<Evaluation> {
        let postfix = self.compile(expression)?;
        evaluator::evaluate_traced(postfix)
    }
}
