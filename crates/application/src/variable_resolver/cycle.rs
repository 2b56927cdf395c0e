//! Cycle detection across substitution passes
//!
//! Records which names each pass substituted. A name that shows up again in
//! a later pass closes a cycle; the recorded passes, flattened in order,
//! form the reported path.

use indexmap::IndexSet;

/// Separator between names in a reported cycle path.
pub const PATH_SEPARATOR: &str = " → ";

/// Per-call history of substituted names, one ordered set per pass.
#[derive(Debug, Default)]
pub struct CycleDetector<'a> {
    completed: Vec<IndexSet<&'a str>>,
    current: IndexSet<&'a str>,
}

impl<'a> CycleDetector<'a> {
    /// Creates an empty detector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `name` was substituted in an earlier, completed pass.
    #[must_use]
    pub fn seen_in_prior_pass(&self, name: &str) -> bool {
        self.completed.iter().any(|pass| pass.contains(name))
    }

    /// Records `name` as substituted in the pass in progress.
    ///
    /// Recording the same name twice within one pass keeps a single entry.
    pub fn record(&mut self, name: &'a str) {
        self.current.insert(name);
    }

    /// Closes the pass in progress and starts a new one.
    pub fn finish_pass(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.completed.push(finished);
    }

    /// Number of completed passes.
    #[must_use]
    pub fn passes(&self) -> usize {
        self.completed.len()
    }

    /// Distinct names substituted so far, in pass order.
    #[must_use]
    pub fn substituted(&self) -> Vec<String> {
        self.completed
            .iter()
            .flatten()
            .chain(self.current.iter())
            .map(|name| (*name).to_owned())
            .collect()
    }

    /// Formats the path for a cycle closed by `repeated`.
    ///
    /// The path lists every completed pass in order, then `repeated`.
    #[must_use]
    pub fn cycle_path(&self, repeated: &str) -> String {
        let mut path: Vec<&str> = self.completed.iter().flatten().copied().collect();
        path.push(repeated);
        path.join(PATH_SEPARATOR)
    }
}
