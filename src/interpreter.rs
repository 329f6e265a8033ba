/// The evaluator module walks AST nodes and computes results.
///
/// The evaluator traverses the tree bottom-up, performs the arithmetic,
/// resolves variables from the session's [`evaluator::Environment`] and
/// commits assignments back into it.
///
/// # Responsibilities
/// - Evaluates every node kind to an `f64`.
/// - Binds variables only after an assignment's value was computed.
/// - Reports division by zero, negative square roots, unbound variables and
///   malformed literals before computing anything with them.
pub mod evaluator;
/// The lexer module tokenizes an expression for further parsing.
///
/// # Responsibilities
/// - Converts the input text into tokens with kind, literal text and source
///   position.
/// - Recognizes numbers, identifiers, the `sqrt` keyword, `+ - * / ^ =` and
///   parentheses.
/// - Reports the first character that starts no token.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Checks parenthesis balance before descending.
/// - Applies precedence and associativity, including implicit
///   multiplication.
/// - Detects assignments and validates their targets.
pub mod parser;
