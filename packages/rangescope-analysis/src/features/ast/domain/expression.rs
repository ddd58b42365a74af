//! Expression Node Families
//!
//! Two closed node families. Integer-valued expressions evaluate to a
//! `Range` during analysis. Boolean-valued comparison expressions are held
//! by conditionals as predicates but are carried for structure and rendering
//! only; no statement's analysis consults them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::features::range_analysis::domain::{Range, State, VarId};

/// Integer-valued expression node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegerExpression {
    /// Literal integer
    Constant(i64),
    /// Variable reference, resolved against the state at evaluation time
    Variable(VarId),
    /// Sum of two integer sub-expressions
    Plus(Box<IntegerExpression>, Box<IntegerExpression>),
}

impl IntegerExpression {
    /// Create a constant node
    pub fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    /// Create a variable reference node
    pub fn variable(name: impl Into<VarId>) -> Self {
        Self::Variable(name.into())
    }

    /// Create an addition node
    pub fn plus(left: IntegerExpression, right: IntegerExpression) -> Self {
        Self::Plus(Box::new(left), Box::new(right))
    }

    /// Evaluate this expression to the range of values it can take under
    /// `state`. Pure: the state is never mutated.
    ///
    /// An unknown variable is not an error; it evaluates to the unbounded
    /// range, the conservative default.
    pub fn get_range(&self, state: &State) -> Range {
        match self {
            Self::Constant(value) => Range::singleton(*value),
            Self::Variable(name) => state.get(name).unwrap_or_else(Range::unbounded),
            Self::Plus(left, right) => left.get_range(state) + right.get_range(state),
        }
    }
}

impl fmt::Display for IntegerExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(name) => write!(f, "{}", name),
            Self::Plus(left, right) => write!(f, "{} + {}", left, right),
        }
    }
}

/// Boolean-valued comparison node
///
/// Exposes only its operands and a textual rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanExpression {
    /// `left < right`
    LessThan(Box<IntegerExpression>, Box<IntegerExpression>),
    /// `left > right`
    GreaterThan(Box<IntegerExpression>, Box<IntegerExpression>),
    /// `left <= right`
    LessThanOrEquals(Box<IntegerExpression>, Box<IntegerExpression>),
    /// `left >= right`
    GreaterThanOrEquals(Box<IntegerExpression>, Box<IntegerExpression>),
}

impl BooleanExpression {
    /// Create a `<` comparison
    pub fn less_than(left: IntegerExpression, right: IntegerExpression) -> Self {
        Self::LessThan(Box::new(left), Box::new(right))
    }

    /// Create a `>` comparison
    pub fn greater_than(left: IntegerExpression, right: IntegerExpression) -> Self {
        Self::GreaterThan(Box::new(left), Box::new(right))
    }

    /// Create a `<=` comparison
    pub fn less_than_or_equals(left: IntegerExpression, right: IntegerExpression) -> Self {
        Self::LessThanOrEquals(Box::new(left), Box::new(right))
    }

    /// Create a `>=` comparison
    pub fn greater_than_or_equals(left: IntegerExpression, right: IntegerExpression) -> Self {
        Self::GreaterThanOrEquals(Box::new(left), Box::new(right))
    }

    /// Left operand
    pub fn left(&self) -> &IntegerExpression {
        match self {
            Self::LessThan(left, _)
            | Self::GreaterThan(left, _)
            | Self::LessThanOrEquals(left, _)
            | Self::GreaterThanOrEquals(left, _) => left,
        }
    }

    /// Right operand
    pub fn right(&self) -> &IntegerExpression {
        match self {
            Self::LessThan(_, right)
            | Self::GreaterThan(_, right)
            | Self::LessThanOrEquals(_, right)
            | Self::GreaterThanOrEquals(_, right) => right,
        }
    }

    /// Operator symbol used in the canonical text form
    fn symbol(&self) -> &'static str {
        match self {
            Self::LessThan(..) => "<",
            Self::GreaterThan(..) => ">",
            Self::LessThanOrEquals(..) => "<=",
            Self::GreaterThanOrEquals(..) => ">=",
        }
    }
}

impl fmt::Display for BooleanExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left(), self.symbol(), self.right())
    }
}
