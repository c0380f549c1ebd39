use std::rc::Rc;

/// The kind of step taken to reach a cell of the edit matrix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Step {
    Deletion,
    Insertion,
    Substitution,
}

struct Link {
    step: Step,
    row: usize,
    column: usize,
    previous: Trail,
}

/// Persistent list of steps leading to a matrix cell, newest first.
///
/// Cells extending the same predecessor share it, so pushing a step is O(1)
/// instead of copying the predecessor's whole path.
#[derive(Clone, Default)]
pub(crate) struct Trail {
    len: usize,
    head: Option<Rc<Link>>,
}

impl Trail {
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Returns a new trail with one more step, leaving `self` untouched.
    pub(crate) fn push(&self, step: Step, row: usize, column: usize) -> Trail {
        Trail {
            len: self.len + 1,
            head: Some(Rc::new(Link {
                step,
                row,
                column,
                previous: self.clone(),
            })),
        }
    }

    /// Steps from the first one taken to the last, with the row and column
    /// offsets of the elements they involve.
    pub(crate) fn steps(&self) -> Vec<(Step, usize, usize)> {
        let mut steps = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(link) = cursor {
            steps.push((link.step, link.row, link.column));
            cursor = link.previous.head.as_deref();
        }
        steps.reverse();
        steps
    }
}

// Unlinks iteratively so that dropping a long trail doesn't recurse once per step.
impl Drop for Trail {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(link) = head {
            match Rc::try_unwrap(link) {
                Ok(mut link) => head = link.previous.head.take(),
                Err(_) => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_shares_prefix() {
        let base = Trail::default().push(Step::Insertion, 0, 0);
        let left = base.push(Step::Deletion, 0, 1);
        let right = base.push(Step::Substitution, 1, 1);

        assert_eq!(base.len(), 1);
        assert_eq!(left.len(), 2);
        assert_eq!(
            left.steps(),
            vec![(Step::Insertion, 0, 0), (Step::Deletion, 0, 1)]
        );
        assert_eq!(
            right.steps(),
            vec![(Step::Insertion, 0, 0), (Step::Substitution, 1, 1)]
        );
    }

    #[test]
    fn test_long_trail_drops() {
        let mut trail = Trail::default();
        for i in 0..200_000 {
            trail = trail.push(Step::Insertion, 0, i);
        }
        assert_eq!(trail.len(), 200_000);
        drop(trail);
    }
}
