//! AST Domain Models
//!
//! Closed node families for the toy source language. Nodes are immutable
//! once built and strictly tree-shaped; the mutable `State` is never stored
//! in a node, only passed down the traversal.

pub mod expression;
pub mod statement;

pub use expression::{BooleanExpression, IntegerExpression};
pub use statement::{Block, Program, Statement};
