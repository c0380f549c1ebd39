//! Minimal edit steps between two sequences: insertions, deletions,
//! substitutions and moves, with offsets ready for batch-updating views.
//!
//! ```
//! use changeset::{diff_chars, Edit};
//!
//! assert_eq!(diff_chars("sword", "words"), vec![Edit::moved('s', 0, 4)]);
//! ```

pub mod batch;
pub mod changeset;
pub mod config;
pub mod edit;
pub mod error;
pub mod naive;
pub mod reduce;
pub mod wagner_fischer;

pub use batch::{apply, batch_update, BatchUpdate, IndexPath};
pub use changeset::Changeset;
pub use config::{DiffOptions, Strategy};
pub use edit::{Edit, Edits, Offset, Operation};
pub use error::ApplyError;
pub use naive::{naive_edits, naive_edits_by};
pub use reduce::{reduce_to_moves, reduce_to_moves_by};
pub use wagner_fischer::{diff_chars, distance, distance_by, edits, edits_by, raw_edits_by};
