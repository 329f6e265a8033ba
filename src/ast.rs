use std::fmt;

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every variant owns its children outright, and the variant fixes the
/// arity: leaves have no children, unary operators exactly one and binary
/// operators and assignments exactly two. A node with a missing operand
/// cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A number literal, kept as written.
    Number {
        /// The literal text, e.g. `3.14`.
        literal:  String,
        /// Byte offset in the source line.
        position: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name:     String,
        /// Byte offset in the source line.
        position: usize,
    },
    /// A unary operation (negation or square root).
    UnaryOp {
        /// The unary operator to apply.
        op:       UnaryOperator,
        /// The operand expression.
        expr:     Box<Self>,
        /// Byte offset of the operator.
        position: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Byte offset of the operator, or of the right operand for an
        /// implicit multiplication.
        position: usize,
    },
    /// Binding of a value to a variable, e.g. `x = 2 + 3`.
    Assignment {
        /// Name of the variable being assigned.
        name:     String,
        /// The value expression.
        value:    Box<Self>,
        /// Byte offset of the `=`.
        position: usize,
    },
}

impl Expr {
    /// Gets the source position from `self`.
    /// ## Example
    /// ```
    /// use scalc::ast::Expr;
    ///
    /// let expr = Expr::Variable { name:     "x".to_string(),
    ///                             position: 5, };
    ///
    /// assert_eq!(expr.position(), 5);
    /// ```
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Number { position, .. }
            | Self::Variable { position, .. }
            | Self::UnaryOp { position, .. }
            | Self::BinaryOp { position, .. }
            | Self::Assignment { position, .. } => *position,
        }
    }

    /// The token text this node stands for: the literal, the variable name
    /// or the operator symbol.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Number { literal, .. } => literal,
            Self::Variable { name, .. } => name,
            Self::UnaryOp { op, .. } => op.symbol(),
            Self::BinaryOp { op, .. } => op.symbol(),
            Self::Assignment { .. } => "=",
        }
    }

    /// Renders the tree as `value` for leaves and
    /// `value (left, right)` for inner nodes, recursively.
    ///
    /// Unary nodes have no right child, so that slot renders empty.
    ///
    /// # Example
    /// ```
    /// use scalc::{interpreter::lexer::tokenize, interpreter::parser::parse};
    ///
    /// let tree = parse(&tokenize("2 + 3 * x").unwrap()).unwrap();
    /// assert_eq!(tree[0].visualize(), "+ (2, * (3, x))");
    ///
    /// let tree = parse(&tokenize("sqrt(16)").unwrap()).unwrap();
    /// assert_eq!(tree[0].visualize(), "sqrt (16, )");
    /// ```
    #[must_use]
    pub fn visualize(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out);
        out
    }

    fn write_tree(&self, out: &mut String) {
        out.push_str(self.label());
        match self {
            Self::Number { .. } | Self::Variable { .. } => {},
            Self::UnaryOp { expr, .. } => {
                out.push_str(" (");
                expr.write_tree(out);
                out.push_str(", )");
            },
            Self::BinaryOp { left, right, .. } => {
                out.push_str(" (");
                left.write_tree(out);
                out.push_str(", ");
                right.write_tree(out);
                out.push(')');
            },
            Self::Assignment { name, value, .. } => {
                out.push_str(" (");
                out.push_str(name);
                out.push_str(", ");
                value.write_tree(out);
                out.push(')');
            },
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.visualize())
    }
}

/// Represents operators that take a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `-`
    Negate,
    /// `sqrt`
    Sqrt,
}

impl UnaryOperator {
    /// The symbol used for this operator in source text.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Sqrt => "sqrt",
        }
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Represents arithmetic operators taking two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`, explicit or implied by juxtaposition
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl BinaryOperator {
    /// The symbol used for this operator in source text.
    ///
    /// # Example
    /// ```
    /// use scalc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Pow.symbol(), "^");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
