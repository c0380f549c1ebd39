use crate::edit::Offset;
use thiserror::Error;

/// Errors produced when applying edits to a sequence they weren't computed for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    #[error("source offset {offset} is out of bounds for a sequence of {len} elements")]
    OffsetOutOfBounds { offset: Offset, len: usize },

    #[error("source offset {offset} is addressed by more than one edit")]
    ConflictingOffset { offset: Offset },

    #[error("cannot insert at offset {offset} into a sequence of {len} elements")]
    InsertionOutOfBounds { offset: Offset, len: usize },

    #[error("more than one element is inserted at offset {offset}")]
    DuplicateInsertion { offset: Offset },
}
