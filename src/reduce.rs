use crate::edit::{Edit, Edits, Operation};
use tracing::trace;

/// Replaces deletion/insertion pairs of equal values with `Operation::Move` edits.
///
/// Edits are folded in order. A deletion or insertion is paired with the first
/// earlier edit of the opposite kind carrying an equal value: that edit is
/// removed and the move is appended in its stead at the end of the result.
/// Substitutions and unpaired edits pass through unchanged.
///
/// # Examples
///
/// ```
/// use changeset::edit::Edit;
/// use changeset::reduce::reduce_to_moves;
///
/// let raw = vec![Edit::deletion('s', 0), Edit::insertion('s', 4)];
/// assert_eq!(reduce_to_moves(raw), vec![Edit::moved('s', 0, 4)]);
/// ```
pub fn reduce_to_moves<T: PartialEq>(edits: Edits<T>) -> Edits<T> {
    reduce_to_moves_by(edits, |a, b| a == b)
}

/// Same as [`reduce_to_moves`], pairing values with `equals`.
pub fn reduce_to_moves_by<T, F>(edits: Edits<T>, equals: F) -> Edits<T>
where
    F: Fn(&T, &T) -> bool,
{
    let raw = edits.len();
    let reduced = edits.into_iter().fold(Vec::with_capacity(raw), |mut acc, edit| {
        match paired_move(&edit, &acc, &equals) {
            Some((index, operation, destination)) => {
                acc.remove(index);
                acc.push(Edit::new(operation, edit.value, destination));
            }
            None => acc.push(edit),
        }
        acc
    });
    trace!(raw, reduced = reduced.len(), "reduced edits to moves");
    reduced
}

/// Looks for an earlier opposite edit matching `edit`.
///
/// Returns its index in `earlier` along with the operation and destination of
/// the move replacing the pair.
fn paired_move<T, F>(
    edit: &Edit<T>,
    earlier: &[Edit<T>],
    equals: &F,
) -> Option<(usize, Operation, usize)>
where
    F: Fn(&T, &T) -> bool,
{
    match edit.operation {
        Operation::Deletion => earlier
            .iter()
            .position(|e| e.is_insertion() && equals(&e.value, &edit.value))
            .map(|index| {
                let origin = edit.destination;
                (index, Operation::Move { origin }, earlier[index].destination)
            }),
        Operation::Insertion => earlier
            .iter()
            .position(|e| e.is_deletion() && equals(&e.value, &edit.value))
            .map(|index| {
                let origin = earlier[index].destination;
                (index, Operation::Move { origin }, edit.destination)
            }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deletion_after_insertion() {
        let raw = vec![
            Edit::insertion('t', 0),
            Edit::insertion('s', 1),
            Edit::deletion('s', 4),
        ];
        assert_eq!(
            reduce_to_moves(raw),
            vec![Edit::insertion('t', 0), Edit::moved('s', 4, 1)]
        );
    }

    #[test]
    fn test_move_is_appended_at_the_end() {
        let raw = vec![
            Edit::deletion('a', 0),
            Edit::substitution('x', 2),
            Edit::insertion('a', 5),
        ];
        assert_eq!(
            reduce_to_moves(raw),
            vec![Edit::substitution('x', 2), Edit::moved('a', 0, 5)]
        );
    }

    #[test]
    fn test_first_match_wins() {
        let raw = vec![
            Edit::deletion('b', 1),
            Edit::deletion('b', 2),
            Edit::insertion('b', 6),
            Edit::insertion('b', 7),
        ];
        assert_eq!(
            reduce_to_moves(raw),
            vec![Edit::moved('b', 1, 6), Edit::moved('b', 2, 7)]
        );
    }

    #[test]
    fn test_moves_are_not_paired_again() {
        let raw = vec![
            Edit::deletion('a', 0),
            Edit::insertion('a', 3),
            Edit::insertion('a', 4),
        ];
        assert_eq!(
            reduce_to_moves(raw),
            vec![Edit::moved('a', 0, 3), Edit::insertion('a', 4)]
        );
    }

    #[test]
    fn test_substitutions_untouched() {
        let raw = vec![Edit::substitution('a', 0), Edit::deletion('a', 1)];
        assert_eq!(reduce_to_moves(raw.clone()), raw);
    }

    #[test]
    fn test_custom_comparator() {
        let raw = vec![Edit::deletion('A', 0), Edit::insertion('a', 3)];
        let reduced = reduce_to_moves_by(raw, |a: &char, b: &char| {
            a.eq_ignore_ascii_case(b)
        });
        assert_eq!(reduced, vec![Edit::moved('a', 0, 3)]);
    }

    proptest! {
        #[test]
        fn test_never_grows(values in prop::collection::vec((any::<bool>(), 0u8..4), 0..20)) {
            let raw: Edits<u8> = values
                .into_iter()
                .enumerate()
                .map(|(i, (insert, v))| if insert { Edit::insertion(v, i) } else { Edit::deletion(v, i) })
                .collect();
            let reduced = reduce_to_moves(raw.clone());
            let moves = reduced.iter().filter(|e| e.is_move()).count();
            prop_assert_eq!(reduced.len() + moves, raw.len());
        }
    }
}
