/// Zero-based position of an element in a sequence.
pub type Offset = usize;

/// Ordered edits turning one sequence into another, in the order they were
/// found.
pub type Edits<T> = Vec<Edit<T>>;

/// Each edit can be
/// new (Insertion)
/// removed (Deletion)
/// replaced in place (Substitution)
/// relocated from `origin` (Move)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Operation {
    Insertion,
    Deletion,
    Substitution,
    Move { origin: Offset },
}

/// An atomic step needed to go from one sequence to another.
///
/// `destination` is a source offset for deletions and substitutions, and a
/// position in the resulting sequence for insertions and moves, matching the
/// way batch-update APIs expect their indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edit<T> {
    pub(crate) operation: Operation,
    pub(crate) value: T,
    pub(crate) destination: Offset,
}
