//! Infix to postfix conversion
//!
//! A single left-to-right scan over the expression using the shunting-yard
//! algorithm. Pending operators and open parentheses wait on an operator
//! stack; numbers go straight to the output.

use crate::error::TallyError;
use crate::TallyResult;

pub mod tokens;

use tokens::{Operator, Postfix, Token};

/// An entry on the operator stack
#[derive(Debug, Clone, Copy)]
enum Pending {
    Operator(Operator),
    /// Character offset of the `(`
    OpenParen(usize),
}

/// Convert an infix expression into postfix order.
///
/// Whitespace is not part of the grammar and is rejected like any other
/// unknown character. Number text is copied verbatim: `1.2.3` is accepted
/// here and only fails once the evaluator tries to read it.
pub fn convert(expression: &str) -> TallyResult<Postfix> {
    let mut output = Postfix::new();
    let mut stack: Vec<Pending> = Vec::new();
    let mut chars = expression.chars().enumerate().peekable();

    while let Some((position, c)) = chars.next() {
        if is_number_char(c) {
            let mut number = String::from(c);
            while let Some((_, next)) = chars.next_if(|&(_, next)| is_number_char(next)) {
                number.push(next);
            }
            output.push(Token::Number(number));
            continue;
        }

        match c {
            '(' => stack.push(Pending::OpenParen(position)),
            ')' => close_group(&mut stack, &mut output, position)?,
            _ => match Operator::from_char(c) {
                Some(op) => push_operator(&mut stack, &mut output, op),
                None => return Err(TallyError::invalid_character(c, position)),
            },
        }
    }

    while let Some(pending) = stack.pop() {
        match pending {
            Pending::Operator(op) => output.push(Token::Operator(op)),
            Pending::OpenParen(position) => {
                return Err(TallyError::UnbalancedParentheses { position })
            }
        }
    }

    Ok(output)
}

fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Pop operators into the output until the matching `(` is found.
fn close_group(stack: &mut Vec<Pending>, output: &mut Postfix, position: usize) -> TallyResult<()> {
    while let Some(pending) = stack.pop() {
        match pending {
            Pending::OpenParen(_) => return Ok(()),
            Pending::Operator(op) => output.push(Token::Operator(op)),
        }
    }
    Err(TallyError::UnbalancedParentheses { position })
}

/// Emit every stacked operator that binds at least as tightly as `incoming`,
/// then stack `incoming`. Popping on equal precedence makes operators
/// left-associative.
fn push_operator(stack: &mut Vec<Pending>, output: &mut Postfix, incoming: Operator) {
    while let Some(&Pending::Operator(top)) = stack.last() {
        if top.precedence() < incoming.precedence() {
            break;
        }
        stack.pop();
        output.push(Token::Operator(top));
    }
    stack.push(Pending::Operator(incoming));
}
