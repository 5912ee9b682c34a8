use derive_more::Display;
use derive_more::Error;

/// Error type for fallible [`TextVec`](crate::TextVec) operations.
///
/// Only genuinely invalid operations produce an error. A search that finds
/// nothing returns `None`, and an out-of-range `substring`/`slice` start
/// returns an empty value; neither is an error.
///
/// # Example
///
/// ```rust
/// # use btext::{TextVec, TextError};
/// let mut sv = TextVec::new();
/// assert_eq!(sv.pop(), Err(TextError::EmptyVector));
///
/// sv.append("one");
/// assert_eq!(
///   sv.get(3),
///   Err(TextError::IndexOutOfBounds { index: 3, len: 1 }),
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TextError {
  /// An index-based access fell outside the vector's current length.
  #[display("index {index} out of bounds for vector of length {len}")]
  IndexOutOfBounds {
    /// The offending index.
    index: usize,
    /// The vector's length at the time of the access.
    len: usize,
  },
  /// `pop` or `join` was called on a vector with no elements.
  #[display("operation requires a non-empty vector")]
  EmptyVector,
}
