//! Statement Node Family
//!
//! Statements thread one mutable `State` through the analysis. Every
//! statement both reads and writes the same store; there is no copy and no
//! fork across branches.
//!
//! ## Threading semantics
//!
//! - Declaration rebinds its name to the unbounded range, unconditionally.
//! - Assignment to an already-bound name *adds* the freshly computed range
//!   to the previous one rather than replacing it, so repeated writes to
//!   the same name accumulate uncertainty.
//! - Conditionals apply their branch bodies sequentially to the one
//!   threaded state. The predicate is never evaluated and never narrows
//!   the state; with both branches present, the then-body runs first and
//!   the else-body runs over its outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expression::{BooleanExpression, IntegerExpression};
use crate::features::range_analysis::domain::{Range, State, VarId};

/// Statement node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    /// `DEF x : INTEGER` — introduces a variable as unconstrained
    Definition { name: VarId },
    /// `LET x = <expr>` — updates a variable's interval from an expression
    Assignment {
        name: VarId,
        value: IntegerExpression,
    },
    /// Nested statement sequence
    Block(Block),
    /// Conditional with a then-branch only
    If {
        predicate: BooleanExpression,
        then_block: Block,
    },
    /// Conditional with both branches
    IfElse {
        predicate: BooleanExpression,
        then_block: Block,
        else_block: Block,
    },
}

impl Statement {
    /// Create a declaration statement
    pub fn definition(name: impl Into<VarId>) -> Self {
        Self::Definition { name: name.into() }
    }

    /// Create an assignment statement
    pub fn assignment(name: impl Into<VarId>, value: IntegerExpression) -> Self {
        Self::Assignment {
            name: name.into(),
            value,
        }
    }

    /// Create a conditional with a then-branch only
    pub fn if_then(predicate: BooleanExpression, then_block: Block) -> Self {
        Self::If {
            predicate,
            then_block,
        }
    }

    /// Create a conditional with both branches
    pub fn if_else(predicate: BooleanExpression, then_block: Block, else_block: Block) -> Self {
        Self::IfElse {
            predicate,
            then_block,
            else_block,
        }
    }

    /// Apply this statement's effect to `state` in place.
    ///
    /// Never fails: unknown variables and unreadable predicates degrade to
    /// the unbounded range rather than raising.
    pub fn analyse(&self, state: &mut State) {
        match self {
            Self::Definition { name } => {
                state.set(name.clone(), Range::unbounded());
            }
            Self::Assignment { name, value } => {
                let fresh = value.get_range(state);
                let bound = match state.get(name) {
                    Some(old) => fresh + old,
                    None => fresh,
                };
                state.set(name.clone(), bound);
            }
            Self::Block(block) => block.analyse(state),
            Self::If { then_block, .. } => {
                for statement in &then_block.statements {
                    statement.analyse(state);
                }
            }
            Self::IfElse {
                then_block,
                else_block,
                ..
            } => {
                for statement in &then_block.statements {
                    statement.analyse(state);
                }
                for statement in &else_block.statements {
                    statement.analyse(state);
                }
            }
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Definition { name } => write!(f, "DEF {} : INTEGER", name),
            Self::Assignment { name, value } => write!(f, "LET {} = {}", name, value),
            Self::Block(block) => write!(f, "{}", block),
            Self::If {
                predicate,
                then_block,
            } => write!(f, "IF {} THEN {}", predicate, then_block),
            Self::IfElse {
                predicate,
                then_block,
                else_block,
            } => write!(f, "IF {} THEN {}ELSE {}", predicate, then_block, else_block),
        }
    }
}

/// Ordered statement sequence, rendered with surrounding braces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl Block {
    /// Create a block from a statement sequence
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Thread `state` through each statement in declared order
    pub fn analyse(&self, state: &mut State) {
        for statement in &self.statements {
            statement.analyse(state);
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{{\n{}\n}}\n", body)
    }
}

/// A `Block` that is the analysis entry point; renders without braces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    /// Create a program from a statement sequence
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Thread `state` through the whole program. Entry point of a
    /// full-program analysis.
    pub fn analyse(&self, state: &mut State) {
        for statement in &self.statements {
            statement.analyse(state);
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = self
            .statements
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        write!(f, "{}", body)
    }
}
