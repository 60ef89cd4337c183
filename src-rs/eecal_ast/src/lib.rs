#![expect(missing_docs, reason = "syntax tree nodes are self-describing")]

//! Syntax tree for the eecal calculator language
//!
//! A line of input parses into a single [`Statement`]: either an assignment
//! or a bare expression. Every element carries the span of source it came
//! from, so evaluation errors can point back at the input.

pub mod expression;
pub mod literal;
pub mod naming;
pub mod node;
pub mod statement;

pub use expression::Expr;
pub use literal::Literal;
pub use node::Node;
pub use statement::Statement;
