use crate::{
    ast::Expr,
    error::Error,
    execute_line,
    interpreter::{evaluator::Environment, lexer::tokenize, parser::parse},
    visualize,
};

/// Command that prints [`HELP`].
pub const HELP_COMMAND: &str = "help";
/// Command that ends the session.
pub const EXIT_COMMAND: &str = "exit";

/// Banner shown when an interactive session starts.
pub const WELCOME: &str = "\
---------------------------------
|  Welcome to the scalc shell   |
---------------------------------

Enter an expression to have it solved. Type 'help' for the help menu
or 'exit' to leave.";

/// Text printed for the `help` command.
pub const HELP: &str = "\
=================================
|        scalc - Help           |
=================================

1. BASIC OPERATIONS:
   Addition:        5 + 3
   Subtraction:     5 - 3
   Multiplication:  5 * 3
   Division:        5 / 3
   Power:           5 ^ 3
   Square root:     sqrt(25)

2. USING VARIABLES:
   Assign a value with:   x = 5
   Then use it:           2x + 3
   Values can build on each other: x = 2 + 5^2, then y = sqrt(x).
   Names ignore case: X and x are the same variable.

3. COMPLEX EXPRESSIONS:
   Group with parentheses:     (2 + 3) * 4
   Multiply by juxtaposition:  2(3 + 1), 2x, 3 sqrt(4)

4. NOTES:
   - Assign variables before using them.
   - Invalid syntax, undefined variables, division by zero and square
     roots of negative numbers are reported as errors.

5. EXITING:
   Type 'exit' to close the calculator.";

/// What a processed line amounted to.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The line was blank.
    Empty,
    /// The user asked for [`HELP`].
    Help,
    /// The user asked to leave.
    Exit,
    /// The last statement was an expression with this value.
    Value(f64),
    /// The last statement bound `name` to `value`.
    Assigned {
        /// The variable that was bound.
        name:  String,
        /// Its new value.
        value: f64,
    },
}

/// An interactive calculator session.
///
/// Owns the variable environment, so assignments persist from one line to
/// the next for as long as the session lives.
#[derive(Debug, Default)]
pub struct Repl {
    env: Environment,
}

impl Repl {
    /// Starts a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's variables.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Processes one line of user input.
    ///
    /// The line is trimmed and lowercased first, which makes commands and
    /// variable names case-insensitive. `help` and `exit` are recognized as
    /// commands; anything else is evaluated.
    ///
    /// # Errors
    /// Returns the lexing, parsing or evaluation error for the line. The
    /// session stays usable and the environment is unchanged by the failing
    /// statement.
    ///
    /// # Example
    /// ```
    /// use scalc::repl::{Outcome, Repl};
    ///
    /// let mut repl = Repl::new();
    ///
    /// assert_eq!(repl.process_line("X = 3").unwrap(),
    ///            Outcome::Assigned { name:  "x".to_string(),
    ///                                value: 3.0, });
    /// assert_eq!(repl.process_line("2x").unwrap(), Outcome::Value(6.0));
    /// assert_eq!(repl.process_line(" EXIT ").unwrap(), Outcome::Exit);
    /// ```
    pub fn process_line(&mut self, line: &str) -> Result<Outcome, Error> {
        let input = normalize(line);

        match input.as_str() {
            "" => Ok(Outcome::Empty),
            HELP_COMMAND => Ok(Outcome::Help),
            EXIT_COMMAND => Ok(Outcome::Exit),
            _ => self.evaluate(&input),
        }
    }

    fn evaluate(&mut self, input: &str) -> Result<Outcome, Error> {
        let outcome = match execute_line(input, &mut self.env)? {
            Some((Expr::Assignment { name, .. }, value)) => Outcome::Assigned { name, value },
            Some((_, value)) => Outcome::Value(value),
            None => Outcome::Empty,
        };

        Ok(outcome)
    }
}

/// Renders the tree of every statement on `line`, normalized the same way
/// [`Repl::process_line`] normalizes input.
///
/// # Errors
/// Returns the lexing or parsing error for the line.
///
/// # Example
/// ```
/// use scalc::repl::visualize_line;
///
/// assert_eq!(visualize_line("-2 ^ 2").unwrap(), ["- (^ (2, 2), )"]);
/// ```
pub fn visualize_line(line: &str) -> Result<Vec<String>, Error> {
    let tokens = tokenize(&normalize(line))?;
    Ok(parse(&tokens)?.iter().map(visualize).collect())
}

fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}
