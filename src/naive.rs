use crate::edit::{Edit, Edits};
use tracing::debug;

/// Computes edits by looking each element up in the other sequence instead
/// of computing an edit distance.
///
/// Every source element missing from `destination` is deleted, every source
/// element found at a different offset is moved to the offset of its first
/// occurrence, and every destination element missing from `source` is
/// inserted. Cheaper than [`crate::wagner_fischer::edits`] for long sequences
/// with few changes, but the result isn't minimal and sequences with
/// repeated elements may not round-trip.
///
/// # Examples
///
/// ```
/// use changeset::edit::Edit;
/// use changeset::naive::naive_edits;
///
/// let result = naive_edits(&["a", "b", "c"], &["c", "a", "d"]);
/// assert_eq!(result, vec![
///     Edit::moved("a", 0, 1),
///     Edit::deletion("b", 1),
///     Edit::moved("c", 2, 0),
///     Edit::insertion("d", 2),
/// ]);
/// ```
pub fn naive_edits<T: PartialEq + Clone>(source: &[T], destination: &[T]) -> Edits<T> {
    naive_edits_by(source, destination, |a, b| a == b)
}

/// Same as [`naive_edits`], comparing elements with `equals`.
pub fn naive_edits_by<T, F>(source: &[T], destination: &[T], equals: F) -> Edits<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let mut edits = Vec::new();

    for (origin, item) in source.iter().enumerate() {
        match destination.iter().position(|d| equals(item, d)) {
            None => edits.push(Edit::deletion(item.clone(), origin)),
            Some(offset) if offset != origin => {
                edits.push(Edit::moved(item.clone(), origin, offset))
            }
            Some(_) => {}
        }
    }

    for (offset, item) in destination.iter().enumerate() {
        if !source.iter().any(|s| equals(s, item)) {
            edits.push(Edit::insertion(item.clone(), offset));
        }
    }

    debug!(
        source = source.len(),
        destination = destination.len(),
        edits = edits.len(),
        "computed naive edits"
    );
    edits
}
