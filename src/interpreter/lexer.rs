use logos::Logos;

use crate::error::{ParseError, RuntimeError};

/// Represents a binary arithmetic operator.
///
/// The `>=` precedence comparison in the converter makes every
/// equal-precedence chain group rightward, so `^` associates conventionally
/// while `- / %` chains bind from the right; [`Operator::apply`] then
/// preserves the source operand order within each pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Rem,
    /// `^`
    Pow,
}

impl Operator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Pow => 3,
            Self::Mul | Self::Div | Self::Rem => 2,
            Self::Add | Self::Sub => 1,
        }
    }

    /// Returns the source character the operator was written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Rem => '%',
            Self::Pow => '^',
        }
    }

    /// Applies the operator to two operands, in the order given.
    ///
    /// The operand order matters for `-`, `/`, `%` and `^`: `a` is always the
    /// operand that appeared first in the source expression. Modulo uses
    /// floating-point remainder semantics, and exponentiation is `f64::powf`,
    /// so a NaN result is a value rather than an error.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DivisionByZero`] or
    /// [`RuntimeError::ModuloByZero`] when `b` is zero for `/` or `%`.
    ///
    /// # Example
    /// ```
    /// use prefixa::interpreter::lexer::Operator;
    ///
    /// assert_eq!(Operator::Sub.apply(5.0, 3.0).unwrap(), 2.0);
    /// assert_eq!(Operator::Pow.apply(2.0, 9.0).unwrap(), 512.0);
    /// assert!(Operator::Div.apply(5.0, 0.0).is_err());
    /// ```
    pub fn apply(self, a: f64, b: f64) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Sub => Ok(a - b),
            Self::Mul => Ok(a * b),
            Self::Div => {
                if b == 0.0 {
                    Err(RuntimeError::DivisionByZero)
                } else {
                    Ok(a / b)
                }
            },
            Self::Rem => {
                if b == 0.0 {
                    Err(RuntimeError::ModuloByZero)
                } else {
                    Ok(a % b)
                }
            },
            Self::Pow => Ok(a.powf(b)),
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a lexical token in an input expression.
///
/// A token is a minimal but meaningful unit of text produced by the
/// tokenizer. Tokens are immutable once created; each pipeline stage consumes
/// a sequence of them and produces a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, with any unary sign already folded in.
    Number(f64),
    /// A variable reference, resolved later by the substitution stage.
    Identifier {
        /// The variable name, sign excluded. Names are case-sensitive.
        name:    String,
        /// Whether the reference was written with a unary `-` sign.
        negated: bool,
    },
    /// One of the six binary operators.
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Identifier { name, negated: false } => write!(f, "{name}"),
            Self::Identifier { name, negated: true } => write!(f, "-{name}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// The raw character classes recognized by the generated lexer.
///
/// Words are maximal alphanumeric runs; whether one is a number or an
/// identifier, and whether a `-` is a sign or an operator, is decided by
/// [`tokenize`] on top of this stream.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    /// Numbers and variable names, such as `42` or `rate`.
    #[regex(r"[0-9a-zA-Z]+")]
    Word,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Separators only; never part of the output.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Turns a raw input line into a sequence of tokens.
///
/// Maximal alphanumeric runs form one word each: a word starting with a
/// letter is an identifier, a word starting with a digit is a number. A `-`
/// is a unary sign exactly when it sits at the start of the input or
/// immediately after an operator, `(`, or whitespace, and a word follows with
/// no gap; every other `-` is the binary operator.
///
/// # Errors
/// Returns [`ParseError::InvalidCharacter`] for any character outside the
/// expression grammar, aborting immediately with no partial result, and
/// [`ParseError::MismatchedParentheses`] when the `(` and `)` counts differ
/// at the end of the input.
///
/// # Example
/// ```
/// use prefixa::interpreter::lexer::{tokenize, Operator, Token};
///
/// let tokens = tokenize("3 * -2").unwrap();
/// assert_eq!(tokens,
///            vec![Token::Number(3.0),
///                 Token::Operator(Operator::Mul),
///                 Token::Number(-2.0)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut open_parens = 0_usize;
    let mut close_parens = 0_usize;

    let mut lexer = RawToken::lexer(source);
    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        match raw {
            Ok(RawToken::Word) => tokens.push(classify_word(lexer.slice(), false)),
            Ok(RawToken::Minus) => {
                if in_sign_position(source, span.start) && word_follows(source, span.end) {
                    // The sign attaches to the word that starts at span.end.
                    match lexer.next() {
                        Some(Ok(RawToken::Word)) => {
                            tokens.push(classify_word(lexer.slice(), true));
                        },
                        _ => unreachable!(),
                    }
                } else {
                    tokens.push(Token::Operator(Operator::Sub));
                }
            },
            Ok(RawToken::Plus) => tokens.push(Token::Operator(Operator::Add)),
            Ok(RawToken::Star) => tokens.push(Token::Operator(Operator::Mul)),
            Ok(RawToken::Slash) => tokens.push(Token::Operator(Operator::Div)),
            Ok(RawToken::Percent) => tokens.push(Token::Operator(Operator::Rem)),
            Ok(RawToken::Caret) => tokens.push(Token::Operator(Operator::Pow)),
            Ok(RawToken::LParen) => {
                open_parens += 1;
                tokens.push(Token::LeftParen);
            },
            Ok(RawToken::RParen) => {
                close_parens += 1;
                tokens.push(Token::RightParen);
            },
            Ok(RawToken::Ignored) => {},
            Err(()) => {
                let found = lexer.slice()
                                 .chars()
                                 .next()
                                 .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(ParseError::InvalidCharacter { found,
                                                          position: span.start });
            },
        }
    }

    if open_parens != close_parens {
        return Err(ParseError::MismatchedParentheses);
    }

    Ok(tokens)
}

/// Decides whether a `-` at byte offset `at` reads as a unary sign.
///
/// True at the very start of the input, or when the byte strictly before it
/// is an operator, an opening parenthesis, or whitespace.
fn in_sign_position(source: &str, at: usize) -> bool {
    match source.as_bytes()[..at].last() {
        None => true,
        Some(&prev) => {
            matches!(prev, b'+' | b'-' | b'*' | b'/' | b'%' | b'^' | b'(')
            || prev.is_ascii_whitespace()
        },
    }
}

/// True when a word begins at byte offset `at` with no gap.
fn word_follows(source: &str, at: usize) -> bool {
    source.as_bytes().get(at).is_some_and(u8::is_ascii_alphanumeric)
}

/// Classifies a word as an identifier or a number and applies the sign.
///
/// A word starting with a letter is an identifier. A word starting with a
/// digit has its leading digit run taken as the value; trailing letters are
/// ignored, mirroring a `strtod`-style partial parse.
fn classify_word(word: &str, negated: bool) -> Token {
    if word.starts_with(|c: char| c.is_ascii_alphabetic()) {
        Token::Identifier { name: word.to_string(),
                            negated }
    } else {
        let magnitude = digit_prefix_value(word);
        Token::Number(if negated { -magnitude } else { magnitude })
    }
}

/// Parses the leading run of ASCII digits of `word` as an `f64`.
///
/// Total by construction: the fold never fails, so no parse error type is
/// needed for words the raw lexer already validated.
fn digit_prefix_value(word: &str) -> f64 {
    word.bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0.0, |value, digit| value * 10.0 + f64::from(digit - b'0'))
}
