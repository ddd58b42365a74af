//! Abstract State Store
//!
//! Maps variable names to their current `Range`. One logical `State` is
//! threaded through an entire analysis: the entry point owns it and passes a
//! mutable reference down the traversal. Absence of a binding means "never
//! declared / unknown" and every reader must treat it as the unbounded
//! range, not as an error.

use rustc_hash::FxHashMap;

use super::range::Range;

/// Variable identifier in programs and states
pub type VarId = String;

/// Mutable mapping from variable name to `Range`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    /// Variable bindings
    bindings: FxHashMap<VarId, Range>,
    /// Maximum distinct variables to track, `None` = unlimited
    max_tracked_vars: Option<usize>,
}

impl State {
    /// Create an empty state with no tracking limit
    pub fn new() -> Self {
        Self {
            bindings: FxHashMap::default(),
            max_tracked_vars: None,
        }
    }

    /// Create an empty state that tracks at most `limit` distinct variables.
    ///
    /// Once full, bindings for further names are dropped; reads of a missing
    /// name already degrade to the unbounded range, so the cap only loses
    /// precision.
    pub fn with_var_limit(limit: usize) -> Self {
        Self {
            bindings: FxHashMap::default(),
            max_tracked_vars: Some(limit),
        }
    }

    /// Look up the binding for `name`, if any
    pub fn get(&self, name: &str) -> Option<Range> {
        self.bindings.get(name).copied()
    }

    /// Bind `name` to `range` in place, creating the binding if absent
    pub fn set(&mut self, name: VarId, range: Range) {
        if let Some(limit) = self.max_tracked_vars {
            if !self.bindings.contains_key(&name) && self.bindings.len() >= limit {
                return; // At capacity: drop the binding, reads stay unbounded
            }
        }
        self.bindings.insert(name, range);
    }

    /// Number of tracked variables
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no variable is tracked
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over bindings (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = (&VarId, &Range)> {
        self.bindings.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_name_is_none() {
        let state = State::new();
        assert_eq!(state.get("x"), None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_set_and_get() {
        let mut state = State::new();
        state.set("x".to_string(), Range::singleton(5));
        assert_eq!(state.get("x"), Some(Range::singleton(5)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut state = State::new();
        state.set("x".to_string(), Range::singleton(5));
        state.set("x".to_string(), Range::unbounded());
        assert_eq!(state.get("x"), Some(Range::unbounded()));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_var_limit_drops_new_names() {
        let mut state = State::with_var_limit(1);
        state.set("x".to_string(), Range::singleton(1));
        state.set("y".to_string(), Range::singleton(2));

        assert_eq!(state.len(), 1);
        assert_eq!(state.get("x"), Some(Range::singleton(1)));
        assert_eq!(state.get("y"), None);
    }

    #[test]
    fn test_var_limit_still_updates_existing_names() {
        let mut state = State::with_var_limit(1);
        state.set("x".to_string(), Range::singleton(1));
        state.set("x".to_string(), Range::singleton(9));
        assert_eq!(state.get("x"), Some(Range::singleton(9)));
    }
}
