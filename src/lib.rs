// model = "claude-opus-4-5"
// created = "2026-10-17"
// modified = "2026-10-17"
// driver = "Isaac Clayton"

//! Resegment - a segment tree that grows without rebuilding.
//!
//! [`AggTree`] keeps a sequence of values together with aggregates over
//! power-of-two runs of them. Point reads are O(1), point updates and range
//! folds are O(log n), and appending is amortized O(1), so the final length
//! never has to be known up front.
//!
//! The combine operator only needs to be associative. Anything implementing
//! [`Combine`] works, including plain closures.
//!
//! # Quick Start
//!
//! ```
//! use resegment::{AggTree, Concat, Sum};
//!
//! let mut sums = AggTree::from_values([1, 2, 3, 4, 5, 6], Sum);
//! assert_eq!(sums.query(2, 5), Ok(12));
//!
//! sums.append(7);
//! assert_eq!(sums.query(0, 7), Ok(28));
//!
//! sums.set(2, 15)?;
//! assert_eq!(sums.query(0, 3), Ok(18));
//!
//! // Operand order follows index order, so concatenation works too.
//! let words = AggTree::from_values(["to", "ge", "th", "er"].map(String::from), Concat);
//! assert_eq!(words.query(1, 4)?, "gether");
//! # Ok::<(), resegment::Error>(())
//! ```
//!
//! The tree does no locking. Share it across threads behind a lock that
//! excludes readers while a writer runs.

pub mod combine;
pub mod error;
pub mod index;
mod print;
pub mod tree;

pub use combine::Combine;
pub use combine::Concat;
pub use combine::Max;
pub use combine::Min;
pub use combine::Sum;
pub use error::Error;
pub use error::Result;
pub use tree::AggTree;
pub use tree::Iter;
