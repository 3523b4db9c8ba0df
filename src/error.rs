/// Lexical errors.
///
/// Defines all error types that can occur while turning a raw input line into
/// tokens. Lexical errors include unrecognized characters and unbalanced
/// parentheses, and are detected before any evaluation is attempted.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while substituting variables
/// and reducing a prefix expression. Runtime errors include unknown variables,
/// division or modulo by zero, and structurally malformed expressions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Any failure the expression pipeline can produce.
///
/// Each stage of the pipeline returns its own error type; this enum is the
/// single type callers see, so a session loop can report any failure with one
/// `Display` call and keep accepting input.
pub enum EvalError {
    /// The input line could not be tokenized.
    Parse(ParseError),
    /// The expression could not be substituted or evaluated.
    Runtime(RuntimeError),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
