use crate::{
    error::RuntimeError,
    interpreter::{context::Context, lexer::Token},
};

/// Resolves every identifier token against the variable table.
///
/// Each identifier whose name is registered becomes a number token carrying a
/// copy of the variable's current value, with any unary sign applied; later
/// changes to the variable do not affect the substituted sequence. All other
/// tokens pass through unchanged.
///
/// # Errors
/// Returns [`RuntimeError::UnknownVariable`] for the first identifier whose
/// name is not registered, aborting the whole pipeline.
///
/// # Example
/// ```
/// use prefixa::{
///     interpreter::{lexer::tokenize, substitute::substitute},
///     Context,
/// };
///
/// let mut context = Context::new();
/// context.assign("x", 5.0);
///
/// let tokens = tokenize("x + 1").unwrap();
/// assert!(substitute(tokens, &context).is_ok());
///
/// let tokens = tokenize("y + 1").unwrap();
/// assert!(substitute(tokens, &context).is_err());
/// ```
pub fn substitute(tokens: Vec<Token>, context: &Context) -> Result<Vec<Token>, RuntimeError> {
    tokens.into_iter()
          .map(|token| match token {
              Token::Identifier { name, negated } => match context.get(&name) {
                  Some(value) => Ok(Token::Number(if negated { -value } else { value })),
                  None => Err(RuntimeError::UnknownVariable { name }),
              },
              other => Ok(other),
          })
          .collect()
}
