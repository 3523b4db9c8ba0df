/// The context module owns the session's variable state.
///
/// A [`context::Context`] maps case-sensitive variable names to numeric
/// values. It is created by the session loop, read by the substitution
/// stage, and mutated by assignment and the clear command.
///
/// # Responsibilities
/// - Stores and looks up variable bindings by exact name.
/// - Supports assignment, clearing, and ordered listing for display.
pub mod context;
/// The converter module rewrites infix token sequences into prefix order.
///
/// The converter runs an operator-precedence scan over the reversed token
/// stream with parenthesis roles swapped, producing the prefix form without
/// ever failing.
///
/// # Responsibilities
/// - Applies operator precedence and associativity via the `>=` tie-break.
/// - Handles parenthesized groups, including degenerate nesting, totally.
/// - Renders prefix sequences for display.
pub mod converter;
/// The evaluator module reduces prefix sequences to numeric results.
///
/// A single-pass stack machine over the reversed prefix sequence. It is the
/// last pipeline stage and the only one that performs arithmetic.
///
/// # Responsibilities
/// - Applies operators in the source expression's operand order.
/// - Reports division and modulo by zero, missing operands, and structurally
///   malformed expressions.
pub mod evaluator;
/// The lexer module tokenizes an input line for the later stages.
///
/// The tokenizer reads the raw text and produces a stream of tokens:
/// numbers, identifiers, operators, and parentheses. This is the first
/// pipeline stage, and the only one that looks at characters.
///
/// # Responsibilities
/// - Converts the input character stream into tokens.
/// - Decides whether each `-` is a unary sign or the binary operator.
/// - Reports invalid characters and unbalanced parentheses.
pub mod lexer;
/// The substitute module resolves variables against the context.
///
/// Substitution runs between tokenization and conversion, replacing each
/// identifier token with a number token holding the variable's current
/// value.
///
/// # Responsibilities
/// - Copies variable values into the token sequence at substitution time.
/// - Reports unknown variables before any evaluation is attempted.
pub mod substitute;
