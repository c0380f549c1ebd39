use crate::batch::{self, BatchUpdate};
use crate::config::DiffOptions;
use crate::edit::{Edit, Edits};
use crate::error::ApplyError;
use std::fmt;

/// The edits required to go from one sequence to another, along with both
/// sequences.
///
/// Indexes in the edits follow the batch-update convention described on
/// [`Edit`], so they can be handed to a view as they are.
///
/// # Examples
///
/// ```
/// use changeset::{Changeset, Edit};
///
/// let changeset: Changeset<char> =
///     Changeset::new("sword".chars().collect(), "words".chars().collect());
/// assert_eq!(changeset.edits(), &[Edit::moved('s', 0, 4)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changeset<T> {
    origin: Vec<T>,
    destination: Vec<T>,
    edits: Edits<T>,
}

impl<T: PartialEq + Clone> Changeset<T> {
    pub fn new(origin: Vec<T>, destination: Vec<T>) -> Self {
        Changeset::with_options(origin, destination, &DiffOptions::default())
    }

    pub fn with_options(origin: Vec<T>, destination: Vec<T>, options: &DiffOptions) -> Self {
        let edits = options.diff(&origin, &destination);
        Changeset {
            origin,
            destination,
            edits,
        }
    }
}

impl<T: Clone> Changeset<T> {
    /// Computes the edits with `equals` in place of `==`.
    pub fn with_comparator<F>(origin: Vec<T>, destination: Vec<T>, equals: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        let edits = DiffOptions::default().diff_by(&origin, &destination, equals);
        Changeset {
            origin,
            destination,
            edits,
        }
    }

    /// Replays the edits on the origin sequence.
    pub fn apply(&self) -> Result<Vec<T>, ApplyError> {
        batch::apply(&self.origin, &self.edits)
    }
}

impl<T> Changeset<T> {
    pub fn origin(&self) -> &[T] {
        &self.origin
    }

    pub fn destination(&self) -> &[T] {
        &self.destination
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn into_edits(self) -> Edits<T> {
        self.edits
    }

    /// Number of edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn batch_update(&self, section: usize) -> BatchUpdate {
        batch::batch_update(&self.edits, section)
    }
}

impl<T: fmt::Display> fmt::Display for Changeset<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for element in &self.origin {
            write!(f, "{element}")?;
        }
        f.write_str("' -> '")?;
        for element in &self.destination {
            write!(f, "{element}")?;
        }
        f.write_str("':")?;
        for edit in &self.edits {
            write!(f, "\n\t{edit}")?;
        }
        Ok(())
    }
}
