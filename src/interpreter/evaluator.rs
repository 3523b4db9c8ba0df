use crate::{error::RuntimeError, interpreter::lexer::Token};

/// Result type used by the evaluation stages.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces a prefix token sequence to a single numeric result.
///
/// A prefix expression evaluates naturally right to left, so the scan runs
/// over the sequence reversed and a single operand stack suffices. Numbers
/// are pushed; an operator pops two operands — `a` first, then `b` — and
/// pushes `a OP b`. Popping `a` first after the reversal is what restores
/// the original left-to-right operand order, which matters for every
/// non-commutative operator.
///
/// # Errors
/// - [`RuntimeError::InsufficientOperands`] when an operator is reached with
///   fewer than two operands pending.
/// - [`RuntimeError::DivisionByZero`] / [`RuntimeError::ModuloByZero`] from
///   the operator application.
/// - [`RuntimeError::MalformedExpression`] when the scan finishes with an
///   operand stack size other than one, or for a token kind that cannot
///   appear in a valid prefix sequence.
///
/// # Example
/// ```
/// use prefixa::interpreter::{converter, evaluator, lexer::tokenize};
///
/// let prefix = converter::infix_to_prefix(tokenize("2 ^ 3 ^ 2").unwrap());
/// assert_eq!(evaluator::evaluate_prefix(&prefix).unwrap(), 512.0);
/// ```
pub fn evaluate_prefix(tokens: &[Token]) -> EvalResult<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in tokens.iter().rev() {
        match token {
            Token::Number(value) => operands.push(*value),
            Token::Operator(op) => {
                let Some(a) = operands.pop() else {
                    return Err(RuntimeError::InsufficientOperands { operator: *op });
                };
                let Some(b) = operands.pop() else {
                    return Err(RuntimeError::InsufficientOperands { operator: *op });
                };
                operands.push(op.apply(a, b)?);
            },
            Token::Identifier { .. } | Token::LeftParen | Token::RightParen => {
                return Err(RuntimeError::MalformedExpression { operands: operands.len() });
            },
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        _ => Err(RuntimeError::MalformedExpression { operands: operands.len() }),
    }
}
