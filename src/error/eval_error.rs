use thiserror::Error;

/// Represents all errors that can occur during evaluation.
///
/// Every condition is checked before the offending operation is carried out,
/// so no infinity is ever produced by a division and no `NaN` by a square
/// root.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Attempted division by zero (positive or negative).
    #[error("Division by zero at position {position}.")]
    DivisionByZero {
        /// Byte offset of the `/` operator.
        position: usize,
    },
    /// Attempted the square root of a negative number.
    #[error("Invalid input for square root: {value} at position {position}.")]
    NegativeSqrtInput {
        /// The negative operand.
        value:    f64,
        /// Byte offset of the `sqrt` keyword.
        position: usize,
    },
    /// Tried to use a variable that was never assigned.
    #[error("Variable not defined: '{name}' at position {position}.")]
    UndefinedVariable {
        /// The name of the variable.
        name:     String,
        /// Byte offset of the identifier.
        position: usize,
    },
    /// A number literal is not a valid finite floating-point number, e.g.
    /// `1.2.3` or a literal too large for an `f64`.
    #[error("Malformed number literal '{literal}' at position {position}.")]
    MalformedNumberLiteral {
        /// The literal as written.
        literal:  String,
        /// Byte offset of the literal.
        position: usize,
    },
}
