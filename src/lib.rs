//! # prefixa
//!
//! prefixa is an interactive arithmetic calculator written in Rust.
//! It tokenizes infix expressions with variables and parentheses, rewrites
//! them into prefix notation with a reversal-based operator-precedence
//! conversion, and evaluates the prefix form with a stack machine.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{converter, evaluator, lexer, substitute};

/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised while tokenizing,
/// substituting, converting, or evaluating an expression. It standardizes
/// error reporting and carries enough context (offending character, variable
/// name) to render a one-line diagnostic.
///
/// # Responsibilities
/// - Defines error enums for the lexical and evaluation failure modes.
/// - Wraps both in a single [`error::EvalError`] for callers.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together the tokenizer, the substitution stage, the
/// infix-to-prefix converter, the prefix evaluator, and the variable
/// context. Each stage consumes one token sequence and produces a new one;
/// a failure at any stage short-circuits the rest.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, substitution, converter,
///   evaluator, and context.
/// - Manages the flow of tokens and errors between stages.
pub mod interpreter;

pub use crate::{error::EvalError, interpreter::context::Context};

/// The outcome of evaluating one expression line.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// The expression rendered in prefix notation.
    pub prefix: String,
    /// The numeric result.
    pub value:  f64,
}

/// Runs the full pipeline over one line of input.
///
/// The line is tokenized, variables are substituted from `context`, the
/// token sequence is rewritten into prefix order, and the prefix form is
/// evaluated. The rendered prefix string is returned alongside the result so
/// a session loop can display both.
///
/// # Errors
/// Returns the first [`EvalError`] any stage produces; later stages do not
/// run and no partial result is returned.
///
/// # Examples
/// ```
/// use prefixa::{evaluate, Context};
///
/// let context = Context::new();
///
/// let result = evaluate("2 + 3 * 4", &context).unwrap();
/// assert_eq!(result.prefix, "+ 2 * 3 4");
/// assert_eq!(result.value, 14.0);
///
/// // 'x' is not defined, so the pipeline fails before any evaluation.
/// assert!(evaluate("x + 1", &context).is_err());
/// ```
pub fn evaluate(line: &str, context: &Context) -> Result<Evaluation, EvalError> {
    let tokens = lexer::tokenize(line)?;
    let tokens = substitute::substitute(tokens, context)?;
    let prefix = converter::infix_to_prefix(tokens);
    let value = evaluator::evaluate_prefix(&prefix)?;

    Ok(Evaluation { prefix: converter::render(&prefix),
                    value })
}

/// Evaluates `expression` and stores the result under `name`.
///
/// The name is used verbatim and case-sensitively: `x` and `X` are distinct
/// bindings. Nothing is stored when the expression fails.
///
/// # Errors
/// Returns the [`EvalError`] of the underlying evaluation, if any.
///
/// # Examples
/// ```
/// use prefixa::{assign, evaluate, Context};
///
/// let mut context = Context::new();
///
/// assert_eq!(assign("x", "2 + 3", &mut context).unwrap(), 5.0);
/// assert_eq!(evaluate("x * 2", &context).unwrap().value, 10.0);
/// ```
pub fn assign(name: &str, expression: &str, context: &mut Context) -> Result<f64, EvalError> {
    let value = evaluate(expression, context)?.value;
    context.assign(name, value);
    Ok(value)
}
