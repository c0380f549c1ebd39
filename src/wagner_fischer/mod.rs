mod trail;

use crate::edit::{Edit, Edits};
use crate::reduce::reduce_to_moves_by;
use tracing::debug;
use trail::{Step, Trail};

/// Computes the edits between two strings, one edit per `char`.
pub fn diff_chars(old: &str, new: &str) -> Edits<char> {
    let old: Vec<char> = old.chars().collect();
    let new: Vec<char> = new.chars().collect();
    edits(&old, &new)
}

/// Computes the edit steps required to go from `source` to `destination`,
/// with deletion/insertion pairs of equal elements reduced to moves.
///
/// # Examples
///
/// ```
/// use changeset::edit::Edit;
/// use changeset::wagner_fischer::edits;
///
/// let source: Vec<char> = "kitten".chars().collect();
/// let destination: Vec<char> = "sitting".chars().collect();
/// assert_eq!(edits(&source, &destination), vec![
///     Edit::substitution('s', 0),
///     Edit::substitution('i', 4),
///     Edit::insertion('g', 6),
/// ]);
/// ```
///
/// # Arguments
///
/// * `source` - The starting-point sequence
/// * `destination` - The ending-point sequence
pub fn edits<T: PartialEq + Clone>(source: &[T], destination: &[T]) -> Edits<T> {
    edits_by(source, destination, |a, b| a == b)
}

/// Same as [`edits`], comparing elements with `equals`.
///
/// The comparator decides both which elements need no edit and which
/// deletion/insertion pairs become moves.
pub fn edits_by<T, F>(source: &[T], destination: &[T], equals: F) -> Edits<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let raw = raw_edits_by(source, destination, &equals);
    reduce_to_moves_by(raw, equals)
}

/// Computes a minimal list of insertions, deletions and substitutions
/// without reducing them to moves.
///
/// Among equally short paths, a deletion is preferred over an insertion,
/// and an insertion over a substitution.
pub fn raw_edits_by<T, F>(source: &[T], destination: &[T], equals: F) -> Edits<T>
where
    T: Clone,
    F: Fn(&T, &T) -> bool,
{
    let path = shortest_path(source, destination, &equals);
    let edits: Edits<T> = path
        .steps()
        .into_iter()
        .map(|(step, row, column)| match step {
            Step::Deletion => Edit::deletion(source[row].clone(), row),
            Step::Insertion => Edit::insertion(destination[column].clone(), column),
            Step::Substitution => Edit::substitution(destination[column].clone(), row),
        })
        .collect();
    debug!(
        rows = source.len(),
        columns = destination.len(),
        edits = edits.len(),
        "computed edit path"
    );
    edits
}

/// The Levenshtein distance between the two sequences.
pub fn distance<T: PartialEq>(source: &[T], destination: &[T]) -> usize {
    distance_by(source, destination, |a, b| a == b)
}

/// Same as [`distance`], comparing elements with `equals`.
pub fn distance_by<T, F>(source: &[T], destination: &[T], equals: F) -> usize
where
    F: Fn(&T, &T) -> bool,
{
    shortest_path(source, destination, &equals).len()
}

/// Fills the edit matrix one row at a time, keeping only the previous and
/// current rows. Returns the trail of the bottom-right cell.
fn shortest_path<T, F>(source: &[T], destination: &[T], equals: &F) -> Trail
where
    F: Fn(&T, &T) -> bool,
{
    let columns = destination.len();

    // First row: insertions of every destination element.
    let mut previous: Vec<Trail> = Vec::with_capacity(columns + 1);
    previous.push(Trail::default());
    for column in 0..columns {
        let trail = previous[column].push(Step::Insertion, 0, column);
        previous.push(trail);
    }

    for (row, s) in source.iter().enumerate() {
        let mut current: Vec<Trail> = Vec::with_capacity(columns + 1);
        current.push(previous[0].push(Step::Deletion, row, 0));

        for (column, d) in destination.iter().enumerate() {
            let trail = if equals(s, d) {
                previous[column].clone()
            } else {
                let deletion = &previous[column + 1];
                let insertion = &current[column];
                let substitution = &previous[column];
                let minimum = deletion.len().min(insertion.len()).min(substitution.len());
                if deletion.len() == minimum {
                    deletion.push(Step::Deletion, row, column)
                } else if insertion.len() == minimum {
                    insertion.push(Step::Insertion, row, column)
                } else {
                    substitution.push(Step::Substitution, row, column)
                }
            };
            current.push(trail);
        }

        previous = current;
    }

    previous.swap_remove(columns)
}
