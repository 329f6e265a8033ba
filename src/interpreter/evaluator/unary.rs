use crate::{
    ast::UnaryOperator,
    error::EvalError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: numeric negation.
    /// - `Sqrt`: the principal (non-negative) square root.
    ///
    /// # Errors
    /// `NegativeSqrtInput` if `op` is `Sqrt` and `value` is below zero.
    ///
    /// # Example
    /// ```
    /// use scalc::{ast::UnaryOperator, interpreter::evaluator::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Sqrt, 16.0, 0).unwrap(), 4.0);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 3.0, 0).unwrap(), -3.0);
    /// assert!(Environment::eval_unary(UnaryOperator::Sqrt, -4.0, 0).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: f64, position: usize) -> EvalResult<f64> {
        match op {
            UnaryOperator::Negate => Ok(-value),
            UnaryOperator::Sqrt => {
                if value < 0.0 {
                    return Err(EvalError::NegativeSqrtInput { value, position });
                }
                Ok(value.sqrt())
            },
        }
    }
}
