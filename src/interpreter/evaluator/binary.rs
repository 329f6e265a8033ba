use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Evaluates both operands of a binary node and combines them.
    ///
    /// Operands are evaluated left to right, except for division: the divisor
    /// is evaluated and checked against zero before the dividend is touched.
    /// The values are then combined by [`Environment::eval_binary`].
    pub(crate) fn eval_binary_op(&self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 position: usize)
                                 -> EvalResult<f64> {
        let (left, right) = match op {
            BinaryOperator::Div => {
                let divisor = self.eval(right)?;
                Self::check_divisor(divisor, position)?;
                (self.eval(left)?, divisor)
            },
            _ => (self.eval(left)?, self.eval(right)?),
        };

        Self::eval_binary(op, left, right, position)
    }

    /// Applies a binary operator to two evaluated operands.
    ///
    /// `^` uses [`f64::powf`] unchanged: negative and fractional exponents
    /// work as usual, and a negative base with a fractional exponent
    /// yields `NaN`.
    ///
    /// # Errors
    /// `DivisionByZero` if `op` is `/` and `right` is `0.0` or `-0.0`.
    ///
    /// # Example
    /// ```
    /// use scalc::{ast::BinaryOperator, interpreter::evaluator::Environment};
    ///
    /// let v = Environment::eval_binary(BinaryOperator::Pow, 2.0, -1.0, 0).unwrap();
    /// assert_eq!(v, 0.5);
    ///
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0, 0).is_err());
    /// assert!(Environment::eval_binary(BinaryOperator::Pow, -8.0, 1.0 / 3.0, 0).unwrap()
    ///                                                                          .is_nan());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(left + right),
            BinaryOperator::Sub => Ok(left - right),
            BinaryOperator::Mul => Ok(left * right),
            BinaryOperator::Div => {
                Self::check_divisor(right, position)?;
                Ok(left / right)
            },
            BinaryOperator::Pow => Ok(left.powf(right)),
        }
    }

    /// Rejects `0.0` and `-0.0` as divisors.
    fn check_divisor(divisor: f64, position: usize) -> EvalResult<()> {
        if divisor == 0.0 {
            return Err(EvalError::DivisionByZero { position });
        }
        Ok(())
    }
}
