//! Lazy integer and cursor ranges for `for` loops.
//!
//! [`xrange`] and [`Xrange`] build counted arithmetic sequences with the
//! semantics of Python 2's `xrange`: half-open, ascending or descending,
//! with the element count derived once at construction so termination never
//! depends on the step landing exactly on `stop`.
//!
//! ```
//! use xrange::{xrange, xrange_between};
//!
//! let mut sum = 0;
//! for value in xrange(10) {
//!     sum += value;
//! }
//! assert_eq!(sum, 45);
//!
//! let countdown: Vec<i32> = xrange_between(10, 0, -3)?.into_iter().collect();
//! assert_eq!(countdown, vec![10, 7, 4, 1]);
//! # Ok::<(), xrange::RangeError>(())
//! ```
//!
//! [`cursor_range`] pairs two externally supplied cursors (possibly of
//! different types) so a span over an existing sequence can be consumed the
//! same way:
//!
//! ```
//! use xrange::{cursor_range, Bound, SliceCursor};
//!
//! let data = [5, 10, 15, 20, 25];
//! let first_three: Vec<i32> = cursor_range(SliceCursor::new(&data, 0), Bound(3))
//!     .into_iter()
//!     .copied()
//!     .collect();
//! assert_eq!(first_three, vec![5, 10, 15]);
//! ```

pub mod cursor;
pub mod error;
pub mod range;
pub mod span;

pub use crate::cursor::{Advance, Bound, Cursor, SliceCursor};
pub use crate::error::RangeError;
pub use crate::range::{xrange, xrange_between, Xrange, XrangeIter};
pub use crate::span::{cursor_range, CursorIter, CursorRange};
