use crate::edit::Edits;
use crate::naive::naive_edits_by;
use crate::wagner_fischer::{edits_by, raw_edits_by};

/// How the edits between two sequences are found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Minimal edits from the edit-distance matrix.
    #[default]
    EditDistance,
    /// Element lookups, see [`crate::naive::naive_edits`].
    Naive,
}

/// Options for computing a [`crate::Changeset`].
///
/// `detect_moves` only applies to [`Strategy::EditDistance`]; the naive
/// strategy always reports relocated elements as moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiffOptions {
    pub strategy: Strategy,
    pub detect_moves: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            strategy: Strategy::EditDistance,
            detect_moves: true,
        }
    }
}

impl DiffOptions {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_moves(mut self, detect_moves: bool) -> Self {
        self.detect_moves = detect_moves;
        self
    }

    /// Computes the edits from `source` to `destination` as configured.
    pub fn diff_by<T, F>(&self, source: &[T], destination: &[T], equals: F) -> Edits<T>
    where
        T: Clone,
        F: Fn(&T, &T) -> bool,
    {
        match (self.strategy, self.detect_moves) {
            (Strategy::EditDistance, true) => edits_by(source, destination, equals),
            (Strategy::EditDistance, false) => raw_edits_by(source, destination, equals),
            (Strategy::Naive, _) => naive_edits_by(source, destination, equals),
        }
    }

    pub fn diff<T: PartialEq + Clone>(&self, source: &[T], destination: &[T]) -> Edits<T> {
        self.diff_by(source, destination, |a, b| a == b)
    }
}
