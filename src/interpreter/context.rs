use std::collections::HashMap;

/// Stores the session's variable table.
///
/// This struct holds the only mutable state of the calculator: a mapping from
/// case-sensitive variable names to their current values. A `Context` is
/// created once by the session loop, passed by reference into substitution,
/// and mutated only between evaluations — never during one.
///
/// ## Usage
///
/// ```
/// use prefixa::Context;
///
/// let mut context = Context::new();
/// context.assign("x", 5.0);
/// assert_eq!(context.get("x"), Some(5.0));
/// assert_eq!(context.get("X"), None);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Context {
    variables: HashMap<String, f64>,
}

impl Context {
    /// Creates a new context with no variables stored.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the current value of a variable, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, used verbatim and case-sensitively.
    /// An existing binding of the same name is overwritten.
    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Removes every stored variable.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// True when no variables are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings sorted by name, for stable display.
    #[must_use]
    pub fn variables(&self) -> Vec<(String, f64)> {
        let mut entries: Vec<_> = self.variables
                                      .iter()
                                      .map(|(name, value)| (name.clone(), *value))
                                      .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}
