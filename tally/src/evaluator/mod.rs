//! Postfix evaluation
//!
//! Tokens are consumed left to right. Numbers are pushed onto an operand
//! stack; every other token is an operator that pops two operands and
//! pushes one result. A well formed sequence leaves exactly one value.

pub mod operations;

use crate::response::{Evaluation, Step, StepAction};
use crate::{Postfix, TallyError, TallyResult, Token};

use operations::{apply, parse_number};

/// Evaluate a postfix sequence.
pub fn evaluate(postfix: &Postfix) -> TallyResult<f64> {
    run(postfix, |_, _, _| {})
}

/// Evaluate a postfix sequence and record every stack transition.
pub fn evaluate_traced(postfix: Postfix) -> TallyResult<Evaluation> {
    let mut steps = Vec::with_capacity(postfix.len());
    let value = run(&postfix, |token, action, stack| {
        steps.push(Step {
            token: token.to_string(),
            action,
            stack: stack.to_vec(),
        })
    })?;

    Ok(Evaluation {
        value,
        postfix,
        steps,
    })
}

fn run<F>(postfix: &Postfix, mut record: F) -> TallyResult<f64>
where
    F: FnMut(&Token, StepAction, &[f64]),
{
    let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

    for token in postfix {
        let operator = match token {
            Token::Number(text) => match parse_number(text) {
                Some(value) => {
                    stack.push(value);
                    record(token, StepAction::Push { value }, &stack);
                    continue;
                }
                None => None,
            },
            Token::Operator(op) => Some(*op),
            Token::OpenParen | Token::CloseParen => None,
        };

        // Operand count is checked before the operator itself, so an
        // unknown token with nothing to apply to is a structural error.
        if stack.len() < 2 {
            return Err(TallyError::InvalidExpression);
        }
        let op = operator.ok_or_else(|| TallyError::unknown_token(token.to_string()))?;

        let (right, left) = match (stack.pop(), stack.pop()) {
            (Some(right), Some(left)) => (right, left),
            _ => return Err(TallyError::InvalidExpression),
        };
        let result = apply(left, op, right)?;
        stack.push(result);
        record(
            token,
            StepAction::Apply {
                operator: op,
                left,
                right,
                result,
            },
            &stack,
        );
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        _ => Err(TallyError::InvalidExpression),
    }
}
