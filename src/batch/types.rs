use crate::edit::Offset;

/// Position of a row or item in a sectioned view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexPath {
    pub section: usize,
    pub item: Offset,
}

impl IndexPath {
    pub fn new(section: usize, item: Offset) -> Self {
        IndexPath { section, item }
    }
}

/// Index operations for a view that applies changes in one atomic batch.
///
/// `deletions`, `reloads` and the first path of each move address rows
/// before the update; `insertions` and the second path of each move address
/// rows after it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatchUpdate {
    pub deletions: Vec<IndexPath>,
    pub insertions: Vec<IndexPath>,
    pub reloads: Vec<IndexPath>,
    pub moves: Vec<(IndexPath, IndexPath)>,
}
