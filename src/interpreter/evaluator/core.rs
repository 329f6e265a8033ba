use std::collections::HashMap;

use crate::{ast::Expr, error::EvalError};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Stores the variables of an evaluation session.
///
/// An `Environment` is created once per session and passed to every
/// evaluation, so assignments made by one line are visible to the next. It
/// is not synchronized: a host that shares it between threads must
/// serialize access itself.
///
/// ## Usage
/// ```
/// use scalc::{
///     interpreter::{evaluator::Environment, lexer::tokenize, parser::parse},
/// };
///
/// let mut env = Environment::new();
/// for line in ["x = 5", "2x + 1"] {
///     for statement in parse(&tokenize(line).unwrap()).unwrap() {
///         env.execute(&statement).unwrap();
///     }
/// }
///
/// assert_eq!(env.get_variable("x"), Some(5.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    pub(crate) variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an environment with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and returns its value.
    ///
    /// Evaluation never touches the environment. An `Assignment` evaluates
    /// to the value of its right-hand side without binding anything; use
    /// [`Environment::execute`] to commit it.
    ///
    /// # Errors
    /// - `MalformedNumberLiteral` for literals such as `1.2.3`.
    /// - `UndefinedVariable` for names that were never assigned.
    /// - `DivisionByZero` when a divisor evaluates to zero.
    /// - `NegativeSqrtInput` when `sqrt` receives a negative number.
    pub fn eval(&self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number { literal, position } => Self::eval_literal(literal, *position),
            Expr::Variable { name, position } => self.eval_variable(name, *position),
            Expr::UnaryOp { op, expr, position } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *position)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             position, } => self.eval_binary_op(left, *op, right, *position),
            Expr::Assignment { value, .. } => self.eval(value),
        }
    }

    /// Executes a statement.
    ///
    /// Plain expressions are evaluated. An assignment evaluates its
    /// right-hand side first and binds the name only if that succeeded, so a
    /// failing assignment leaves any earlier value in place.
    ///
    /// # Example
    /// ```
    /// use scalc::{interpreter::evaluator::Environment, evaluate_line};
    ///
    /// let mut env = Environment::new();
    /// evaluate_line("x = 4", &mut env).unwrap();
    ///
    /// assert!(evaluate_line("x = 1 / 0", &mut env).is_err());
    /// assert_eq!(env.get_variable("x"), Some(4.0));
    /// ```
    pub fn execute(&mut self, statement: &Expr) -> EvalResult<f64> {
        match statement {
            Expr::Assignment { name, value, .. } => {
                let value = self.eval(value)?;
                self.set_variable(name, value);
                Ok(value)
            },
            expr => self.eval(expr),
        }
    }
}
