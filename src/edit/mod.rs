mod types;
pub use types::*;

use std::fmt;

impl<T> Edit<T> {
    pub fn new(operation: Operation, value: T, destination: Offset) -> Self {
        Edit {
            operation,
            value,
            destination,
        }
    }

    pub fn insertion(value: T, destination: Offset) -> Self {
        Edit::new(Operation::Insertion, value, destination)
    }

    pub fn deletion(value: T, destination: Offset) -> Self {
        Edit::new(Operation::Deletion, value, destination)
    }

    pub fn substitution(value: T, destination: Offset) -> Self {
        Edit::new(Operation::Substitution, value, destination)
    }

    /// A `value` relocated from `origin` in the source to `destination` in the result.
    pub fn moved(value: T, origin: Offset, destination: Offset) -> Self {
        Edit::new(Operation::Move { origin }, value, destination)
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn destination(&self) -> Offset {
        self.destination
    }

    /// The source offset a move comes from, `None` for every other operation.
    pub fn origin(&self) -> Option<Offset> {
        match self.operation {
            Operation::Move { origin } => Some(origin),
            _ => None,
        }
    }

    pub fn is_insertion(&self) -> bool {
        matches!(self.operation, Operation::Insertion)
    }

    pub fn is_deletion(&self) -> bool {
        matches!(self.operation, Operation::Deletion)
    }

    pub fn is_substitution(&self) -> bool {
        matches!(self.operation, Operation::Substitution)
    }

    pub fn is_move(&self) -> bool {
        matches!(self.operation, Operation::Move { .. })
    }

    /// Converts the carried value, keeping operation and offsets.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Edit<U> {
        Edit {
            operation: self.operation,
            value: f(self.value),
            destination: self.destination,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operation {
            Operation::Insertion => {
                write!(f, "insert {} at offset {}", self.value, self.destination)
            }
            Operation::Deletion => {
                write!(f, "delete {} at offset {}", self.value, self.destination)
            }
            Operation::Substitution => {
                write!(f, "replace with {} at offset {}", self.value, self.destination)
            }
            Operation::Move { origin } => write!(
                f,
                "move {} from offset {} to {}",
                self.value, origin, self.destination
            ),
        }
    }
}
