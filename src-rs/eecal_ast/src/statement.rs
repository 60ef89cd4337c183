//! Statements, one per input line

use crate::{expression::ExprNode, naming::IdentifierNode, node::Node};

/// A single line of input
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `name = expression`
    Assign {
        name: IdentifierNode,
        value: ExprNode,
    },
    /// An expression whose result is displayed
    Expr(ExprNode),
}

/// A node containing a statement
pub type StatementNode = Node<Statement>;

impl Statement {
    /// Creates an assignment statement
    #[must_use]
    pub const fn assign(name: IdentifierNode, value: ExprNode) -> Self {
        Self::Assign { name, value }
    }

    /// Creates an expression statement
    #[must_use]
    pub const fn expr(expr: ExprNode) -> Self {
        Self::Expr(expr)
    }

    /// The expression evaluated by the statement
    #[must_use]
    pub const fn expression(&self) -> &ExprNode {
        match self {
            Self::Assign { value, .. } => value,
            Self::Expr(expr) => expr,
        }
    }
}
