/// Core evaluation logic and the variable environment.
///
/// Contains the environment that persists across evaluations, the node
/// dispatch, and statement execution with its assignment rules.
pub mod core;

/// Binary operator evaluation.
///
/// Implements `+ - * / ^`, including the zero-divisor check.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements negation and the square root with its domain check.
pub mod unary;

/// Utility functions for evaluation.
///
/// Variable lookup and binding, and conversion of number literals.
pub mod utils;

pub use self::core::{Environment, EvalResult};
