use crate::interpreter::lexer::Operator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during substitution and evaluation.
pub enum RuntimeError {
    /// Tried to use a variable that is not in the variable table.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// An operator was reached with fewer than two pending operands.
    InsufficientOperands {
        /// The operator that could not be applied.
        operator: Operator,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// Attempted modulo by zero.
    ModuloByZero,
    /// Evaluation finished with an operand stack size other than one.
    MalformedExpression {
        /// The number of operands left on the stack.
        operands: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name } => write!(f, "Unknown variable '{name}'."),

            Self::InsufficientOperands { operator } => {
                write!(f, "Operator '{operator}' found with fewer than two operands.")
            },

            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::ModuloByZero => write!(f, "Modulo by zero."),

            Self::MalformedExpression { operands } => {
                write!(f, "Malformed expression: {operands} operands remain after evaluation.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
