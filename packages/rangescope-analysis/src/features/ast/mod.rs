//! AST Feature
//!
//! Node families for the toy imperative source language and their canonical
//! text form.
//!
//! ## Architecture
//!
//! ```text
//! ast
//! └── domain/
//!     ├── expression    # IntegerExpression, BooleanExpression
//!     └── statement     # Statement, Block, Program
//! ```
//!
//! The two traversal algorithms live on the nodes themselves:
//! `IntegerExpression::get_range` evaluates an expression to an interval,
//! and `Statement::analyse` threads an abstract state through a statement.

pub mod domain;

pub use domain::{Block, BooleanExpression, IntegerExpression, Program, Statement};
