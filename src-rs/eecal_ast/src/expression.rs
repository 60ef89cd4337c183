//! Expressions

use crate::{literal::LiteralNode, naming::IdentifierNode, node::Node};

/// An expression over quantities and variables
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Binary operation with left and right operands
    BinaryOp {
        op: BinaryOpNode,
        left: ExprNode,
        right: ExprNode,
    },

    /// `base ^ exponent`
    Power {
        base: ExprNode,
        exponent: Node<f64>,
    },

    /// `expr @ temperature`, shifting a resistance to a temperature in °C
    AtTemperature {
        expr: ExprNode,
        temperature: Node<f64>,
    },

    /// Parenthesized expression
    Parenthesized { expr: ExprNode },

    /// Variable reference
    Variable(IdentifierNode),

    /// Quantity literal
    Literal(LiteralNode),
}

/// A node containing an expression
pub type ExprNode = Node<Expr>;

impl Expr {
    #[must_use]
    pub const fn binary_op(op: BinaryOpNode, left: ExprNode, right: ExprNode) -> Self {
        Self::BinaryOp { op, left, right }
    }

    #[must_use]
    pub const fn power(base: ExprNode, exponent: Node<f64>) -> Self {
        Self::Power { base, exponent }
    }

    #[must_use]
    pub const fn at_temperature(expr: ExprNode, temperature: Node<f64>) -> Self {
        Self::AtTemperature { expr, temperature }
    }

    #[must_use]
    pub const fn parenthesized(expr: ExprNode) -> Self {
        Self::Parenthesized { expr }
    }

    #[must_use]
    pub const fn variable(name: IdentifierNode) -> Self {
        Self::Variable(name)
    }

    #[must_use]
    pub const fn literal(literal: LiteralNode) -> Self {
        Self::Literal(literal)
    }
}

/// Binary operators for expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition, or series connection of resistances (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Parallel connection of resistances (`|`)
    Parallel,
    /// Voltage divider ratio (`//`)
    VoltageDivider,
}

/// A node containing a binary operator
pub type BinaryOpNode = Node<BinaryOp>;

impl BinaryOp {
    #[must_use]
    pub const fn add() -> Self {
        Self::Add
    }

    #[must_use]
    pub const fn sub() -> Self {
        Self::Sub
    }

    #[must_use]
    pub const fn mul() -> Self {
        Self::Mul
    }

    #[must_use]
    pub const fn div() -> Self {
        Self::Div
    }

    #[must_use]
    pub const fn parallel() -> Self {
        Self::Parallel
    }

    #[must_use]
    pub const fn voltage_divider() -> Self {
        Self::VoltageDivider
    }
}
