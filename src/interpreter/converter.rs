use crate::interpreter::lexer::Token;

/// Rewrites a substituted infix token sequence into prefix order.
///
/// The conversion runs the Shunting-Yard scan over the *reversed* input with
/// parenthesis roles swapped, and then reads the operand stack most-recent
/// first. Popping pending operators while their precedence is greater than
/// *or equal to* the incoming one, applied to the reversed stream, makes
/// every equal-precedence chain group rightward: `^` gets its conventional
/// right-associativity, and `10 - 3 - 2` reads as `10 - (3 - 2)`, exactly as
/// the original calculator groups it. A strict `>` here would flip the
/// grouping in both directions.
///
/// The function is total: it never fails and never panics. Identifiers are
/// assumed to have been substituted away; a stray one is passed through as an
/// operand and reported later by the evaluator. An unbalanced closing-role
/// token drains the operator stack and stops, which cannot occur when the
/// tokenizer's balance check has passed.
///
/// # Example
/// ```
/// use prefixa::interpreter::{converter, lexer::tokenize};
///
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// let prefix = converter::infix_to_prefix(tokens);
/// assert_eq!(converter::render(&prefix), "+ 2 * 3 4");
/// ```
#[must_use]
pub fn infix_to_prefix(mut tokens: Vec<Token>) -> Vec<Token> {
    tokens.reverse();
    for token in &mut tokens {
        // Parenthesis roles invert under reversal.
        match token {
            Token::LeftParen => *token = Token::RightParen,
            Token::RightParen => *token = Token::LeftParen,
            _ => {},
        }
    }

    let mut operands: Vec<Token> = Vec::new();
    let mut operators: Vec<Token> = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) | Token::Identifier { .. } => operands.push(token),
            Token::LeftParen => operators.push(token),
            Token::RightParen => {
                while let Some(top) = operators.pop() {
                    if top == Token::LeftParen {
                        break;
                    }
                    operands.push(top);
                }
            },
            Token::Operator(op) => {
                while let Some(Token::Operator(top)) = operators.last() {
                    if top.precedence() >= op.precedence() {
                        operands.push(Token::Operator(*top));
                        operators.pop();
                    } else {
                        break;
                    }
                }
                operators.push(token);
            },
        }
    }

    while let Some(top) = operators.pop() {
        operands.push(top);
    }

    // The operand stack read top-down already is the prefix sequence.
    operands.reverse();
    operands
}

/// Renders a token sequence as a space-separated string for display.
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter()
          .map(ToString::to_string)
          .collect::<Vec<_>>()
          .join(" ")
}
