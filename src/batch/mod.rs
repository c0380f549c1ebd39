mod types;
pub use types::*;

use crate::edit::{Edit, Offset, Operation};
use crate::error::ApplyError;
use std::collections::BTreeMap;
use tracing::debug;

/// Projects edits onto the index operations of one view section.
///
/// Each edit maps to exactly one entry: deletions, insertions and moves to
/// their namesakes, substitutions to reloads.
pub fn batch_update<T>(edits: &[Edit<T>], section: usize) -> BatchUpdate {
    let mut update = BatchUpdate::default();
    for edit in edits {
        let destination = IndexPath::new(section, edit.destination);
        match edit.operation {
            Operation::Deletion => update.deletions.push(destination),
            Operation::Insertion => update.insertions.push(destination),
            Operation::Substitution => update.reloads.push(destination),
            Operation::Move { origin } => update
                .moves
                .push((IndexPath::new(section, origin), destination)),
        }
    }
    update
}

impl BatchUpdate {
    pub fn is_empty(&self) -> bool {
        self.deletions.is_empty()
            && self.insertions.is_empty()
            && self.reloads.is_empty()
            && self.moves.is_empty()
    }

    /// Splits every move into a deletion at its origin and an insertion at
    /// its destination, for views that have no move operation of their own.
    pub fn flatten_moves(mut self) -> BatchUpdate {
        for (origin, destination) in self.moves.drain(..) {
            self.deletions.push(origin);
            self.insertions.push(destination);
        }
        self
    }
}

struct Application<'a, T> {
    source: &'a [T],
    claimed: Vec<bool>,
    substitutions: BTreeMap<Offset, T>,
    insertions: BTreeMap<Offset, T>,
}

impl<'a, T: Clone> Application<'a, T> {
    fn new(source: &'a [T]) -> Self {
        Application {
            source,
            claimed: vec![false; source.len()],
            substitutions: BTreeMap::new(),
            insertions: BTreeMap::new(),
        }
    }

    fn process(&mut self, edit: &Edit<T>) -> Result<(), ApplyError> {
        match edit.operation {
            Operation::Deletion => self.claim(edit.destination),
            Operation::Substitution => {
                self.claim(edit.destination)?;
                self.substitutions
                    .insert(edit.destination, edit.value.clone());
                Ok(())
            }
            Operation::Insertion => self.insert(edit.destination, edit.value.clone()),
            Operation::Move { origin } => {
                self.claim(origin)?;
                self.insert(edit.destination, edit.value.clone())
            }
        }
    }

    /// Marks a source offset as deleted, substituted or moved away.
    fn claim(&mut self, offset: Offset) -> Result<(), ApplyError> {
        match self.claimed.get_mut(offset) {
            None => Err(ApplyError::OffsetOutOfBounds {
                offset,
                len: self.source.len(),
            }),
            Some(true) => Err(ApplyError::ConflictingOffset { offset }),
            Some(claimed) => {
                *claimed = true;
                Ok(())
            }
        }
    }

    fn insert(&mut self, offset: Offset, value: T) -> Result<(), ApplyError> {
        if self.insertions.insert(offset, value).is_some() {
            return Err(ApplyError::DuplicateInsertion { offset });
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Vec<T>, ApplyError> {
        let mut result = Vec::with_capacity(self.source.len() + self.insertions.len());
        for (offset, element) in self.source.iter().enumerate() {
            if let Some(value) = self.substitutions.remove(&offset) {
                result.push(value);
            } else if !self.claimed[offset] {
                result.push(element.clone());
            }
        }

        // Ascending order, so every position is final once inserted.
        for (offset, value) in self.insertions {
            if offset > result.len() {
                return Err(ApplyError::InsertionOutOfBounds {
                    offset,
                    len: result.len(),
                });
            }
            result.insert(offset, value);
        }
        Ok(result)
    }
}

/// Applies `edits` to `source` the way a batch-updating view would.
///
/// Deletions, substitutions and move origins address `source`; insertions
/// and move destinations address the result. Edits computed from `source`
/// always produce their destination sequence.
///
/// # Examples
///
/// ```
/// use changeset::batch::apply;
/// use changeset::wagner_fischer::edits;
///
/// let old = vec!["a", "b", "c", "d"];
/// let new = vec!["b", "x", "d", "a"];
/// assert_eq!(apply(&old, &edits(&old, &new)), Ok(new));
/// ```
pub fn apply<T: Clone>(source: &[T], edits: &[Edit<T>]) -> Result<Vec<T>, ApplyError> {
    let mut application = Application::new(source);
    for edit in edits {
        application.process(edit)?;
    }
    let result = application.finish()?;
    debug!(
        source = source.len(),
        edits = edits.len(),
        result = result.len(),
        "applied edits"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive::naive_edits;
    use crate::wagner_fischer::{diff_chars, edits};
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    proptest! {
        #[test]
        fn test_apply_roundtrip(
            old in prop::collection::vec(0u8..6, 0..16),
            new in prop::collection::vec(0u8..6, 0..16),
        ) {
            let result = apply(&old, &edits(&old, &new));
            prop_assert_eq!(result, Ok(new));
        }

        #[test]
        fn test_naive_roundtrip_unique(
            old in prop::collection::hash_set(0u8..24, 0..12),
            new in prop::collection::hash_set(0u8..24, 0..12),
        ) {
            let old: Vec<u8> = old.into_iter().collect();
            let new: Vec<u8> = new.into_iter().collect();
            let result = apply(&old, &naive_edits(&old, &new));
            prop_assert_eq!(result, Ok(new));
        }

        #[test]
        fn test_one_entry_per_edit(
            old in prop::collection::vec(0u8..6, 0..16),
            new in prop::collection::vec(0u8..6, 0..16),
        ) {
            let edits = edits(&old, &new);
            let update = batch_update(&edits, 0);
            let total = update.deletions.len() + update.insertions.len()
                + update.reloads.len() + update.moves.len();
            prop_assert_eq!(total, edits.len());
        }
    }

    #[test]
    fn test_batch_update() {
        let edits = diff_chars("abcdefgh", "bacefxhi");
        let update = batch_update(&edits, 2);
        assert_eq!(
            update,
            BatchUpdate {
                deletions: vec![IndexPath::new(2, 3)],
                insertions: vec![IndexPath::new(2, 7)],
                reloads: vec![IndexPath::new(2, 6)],
                moves: vec![(IndexPath::new(2, 1), IndexPath::new(2, 0))],
            }
        );
    }

    #[test]
    fn test_flatten_moves() {
        let update = batch_update(&diff_chars("words", "tsword"), 0).flatten_moves();
        assert!(update.moves.is_empty());
        assert_eq!(update.deletions, vec![IndexPath::new(0, 4)]);
        let insertions: HashSet<_> = update.insertions.into_iter().collect();
        assert_eq!(
            insertions,
            HashSet::from([IndexPath::new(0, 0), IndexPath::new(0, 1)])
        );
    }

    #[test]
    fn test_empty_update() {
        assert!(batch_update::<char>(&[], 0).is_empty());
        assert!(!batch_update(&diff_chars("a", "b"), 0).is_empty());
    }

    #[test]
    fn test_apply_samples() {
        for (old, new) in [
            ("kitten", "sitting"),
            ("Sunday", "Saturday"),
            ("GARVEY", "AVERY"),
            ("AAAAaaaa", "aaaaAAAA"),
            ("abbcdefgh", "acdefgbbh"),
            ("", "abc"),
            ("abc", ""),
        ] {
            let result = apply(&chars(old), &diff_chars(old, new));
            assert_eq!(result, Ok(chars(new)), "{old} -> {new}");
        }
    }

    #[test]
    fn test_apply_nothing() {
        assert_eq!(apply(&[1, 2, 3], &[]), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let result = apply(&['a'], &[Edit::deletion('a', 3)]);
        assert_eq!(result, Err(ApplyError::OffsetOutOfBounds { offset: 3, len: 1 }));
    }

    #[test]
    fn test_conflicting_offset() {
        let result = apply(&['a', 'b'], &[Edit::deletion('a', 0), Edit::moved('a', 0, 1)]);
        assert_eq!(result, Err(ApplyError::ConflictingOffset { offset: 0 }));
    }

    #[test]
    fn test_insertion_out_of_bounds() {
        let result = apply(&['a'], &[Edit::insertion('b', 3)]);
        assert_eq!(
            result,
            Err(ApplyError::InsertionOutOfBounds { offset: 3, len: 1 })
        );
    }

    #[test]
    fn test_duplicate_insertion() {
        let result = apply(&['a'], &[Edit::insertion('x', 0), Edit::insertion('y', 0)]);
        assert_eq!(result, Err(ApplyError::DuplicateInsertion { offset: 0 }));
    }
}
