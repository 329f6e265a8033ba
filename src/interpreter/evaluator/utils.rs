use crate::{
    error::EvalError,
    interpreter::evaluator::core::{Environment, EvalResult},
};

impl Environment {
    /// Converts a number literal to its value.
    ///
    /// The lexer accepts any run of digits and dots, so this is where a
    /// literal like `1.2.3` is rejected. So is a literal too large to be
    /// represented, which would otherwise read as infinity.
    ///
    /// # Errors
    /// `MalformedNumberLiteral` if the text is not a valid, finite `f64`.
    pub(crate) fn eval_literal(literal: &str, position: usize) -> EvalResult<f64> {
        match literal.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => Err(EvalError::MalformedNumberLiteral { literal: literal.to_string(),
                                                         position }),
        }
    }

    /// Looks up a variable by its exact name.
    ///
    /// # Errors
    /// `UndefinedVariable` if the name has never been assigned.
    pub(crate) fn eval_variable(&self, name: &str, position: usize) -> EvalResult<f64> {
        self.get_variable(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string(),
                                                          position })
    }

    /// Retrieves a variable's current value.
    ///
    /// # Example
    /// ```
    /// use scalc::interpreter::evaluator::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.set_variable("x", 5.0);
    ///
    /// assert_eq!(env.get_variable("x"), Some(5.0));
    /// assert_eq!(env.get_variable("y"), None);
    /// ```
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `name` to `value`, overwriting any previous value.
    ///
    /// No validation happens here; names reaching this point came from
    /// identifier tokens.
    ///
    /// # Example
    /// ```
    /// use scalc::interpreter::evaluator::Environment;
    ///
    /// let mut env = Environment::new();
    ///
    /// env.set_variable("x", 10.0);
    /// env.set_variable("x", 20.0);
    /// assert_eq!(env.get_variable("x"), Some(20.0));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: f64) {
        tracing::debug!(name, value, "binding variable");
        self.variables.insert(name.to_string(), value);
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
