//! A growable vector of [`Text`] values.
//!
//! `TextVec` is a thin wrapper over contiguous storage with an explicit,
//! fixed growth policy: no allocation until the first `append`, which
//! reserves [`INITIAL_CAPACITY`] slots; a full vector doubles its capacity;
//! capacity never shrinks. `pop` only shortens the length, leaving the
//! allocation in place.
//!
//! ## Examples
//!
//! ```
//! use btext::TextVec;
//!
//! let mut sv = TextVec::new();
//! assert_eq!(sv.capacity(), 0);
//!
//! sv.append("one");
//! sv.append("two");
//! assert_eq!(sv.len(), 2);
//! assert_eq!(sv.capacity(), 128);
//! assert_eq!(sv.join("-").unwrap(), "one-two");
//! ```
//!
//! ### Serde
//!
//! If compiled with the `serde` feature, `TextVec` implements
//! [`serde::Serialize`] and [`serde::Deserialize`], serializing as a
//! regular sequence of byte strings.

use alloc::vec::Vec;
use core::fmt;
use core::iter::FromIterator;
use core::iter::IntoIterator;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ops::Index;
use core::ops::IndexMut;

use crate::error::TextError;
use crate::text::Text;

/// Number of slots reserved by the first `append` into an empty vector.
pub const INITIAL_CAPACITY: usize = 128;

/// A growable vector of [`Text`] values with an explicit growth policy.
///
/// The vector owns its entries array, but entries themselves may still
/// borrow foreign memory ([`Text::Borrowed`]); dropping the vector drops
/// the entries, which reclaims owned buffers and leaves borrowed ones
/// untouched.
///
/// Fallible element access goes through [`get`](TextVec::get) and
/// [`pop`](TextVec::pop), which return a typed [`TextError`] instead of
/// aborting. Slice-style panicking indexing remains available through
/// `Deref<Target = [Text]>`.
pub struct TextVec<'i> {
  values: Vec<Text<'i>>,
}

impl<'i> TextVec<'i> {
  /// Creates a new empty `TextVec`. No allocation occurs until the first
  /// [`append`](TextVec::append).
  pub const fn new() -> Self {
    Self { values: Vec::new() }
  }

  /// Returns the number of elements in the vector.
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// Returns `true` if the vector contains no elements.
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  /// Returns the number of allocated slots. Capacity never shrinks.
  pub fn capacity(&self) -> usize {
    self.values.capacity()
  }

  /// Provides an immutable slice of all elements in the vector.
  pub fn as_slice(&self) -> &[Text<'i>] {
    self.values.as_slice()
  }

  /// Provides a mutable slice of all elements in the vector.
  pub fn as_mut_slice(&mut self) -> &mut [Text<'i>] {
    self.values.as_mut_slice()
  }

  /// Appends a value in amortized O(1).
  ///
  /// The first insertion into an empty vector reserves
  /// [`INITIAL_CAPACITY`] slots; a full vector doubles its capacity
  /// before inserting. Accepts anything convertible into [`Text`], so
  /// `&str`, `&[u8]`, and byte-string literals append as borrowed values
  /// without copying.
  pub fn append(&mut self, value: impl Into<Text<'i>>) {
    if self.values.capacity() == 0 {
      self.values.reserve_exact(INITIAL_CAPACITY);
    } else if self.values.len() == self.values.capacity() {
      self.values.reserve_exact(self.values.len());
    }
    self.values.push(value.into());
  }

  /// Removes the last element and returns it.
  ///
  /// Fails with [`TextError::EmptyVector`] when the vector is empty. The
  /// popped slot's storage stays allocated.
  pub fn pop(&mut self) -> Result<Text<'i>, TextError> {
    self.values.pop().ok_or(TextError::EmptyVector)
  }

  /// Bounds-checked element access.
  ///
  /// Fails with [`TextError::IndexOutOfBounds`] when `index >= len`.
  pub fn get(&self, index: usize) -> Result<&Text<'i>, TextError> {
    self.values.get(index).ok_or(TextError::IndexOutOfBounds {
      index,
      len: self.values.len(),
    })
  }

  /// Copies the elements for `i` in `[start, stop)` into a new vector.
  ///
  /// A `start` that is negative or at/past the end yields an empty
  /// vector. `stop` is compared inline against both itself and the
  /// length, so a negative or nonsensical `stop` simply yields zero
  /// iterations rather than erroring. Element copies are clones:
  /// borrowed entries stay borrowed.
  pub fn slice(&self, start: isize, stop: isize) -> TextVec<'i> {
    let mut out = TextVec::new();
    if start >= 0 && (start as usize) < self.values.len() {
      let mut i = start as usize;
      while (i as isize) < stop && i < self.values.len() {
        out.append(self.values[i].clone());
        i += 1;
      }
    }
    out
  }

  /// Concatenates all elements with `delimiter` inserted between
  /// consecutive elements, in a single owned allocation.
  ///
  /// Fails with [`TextError::EmptyVector`] when the vector has no
  /// elements.
  pub fn join(
    &self,
    delimiter: &(impl AsRef<[u8]> + ?Sized),
  ) -> Result<Text<'static>, TextError> {
    let (last, init) =
      self.values.split_last().ok_or(TextError::EmptyVector)?;
    let delimiter = delimiter.as_ref();
    let total = self.values.iter().map(|value| value.len()).sum::<usize>()
      + (self.values.len() - 1) * delimiter.len();
    let mut out = Vec::with_capacity(total);
    for value in init {
      out.extend_from_slice(value.as_bytes());
      out.extend_from_slice(delimiter);
    }
    out.extend_from_slice(last.as_bytes());
    Ok(Text::owned_from_vec(out))
  }

  /// Returns an iterator over the elements.
  pub fn iter(&self) -> core::slice::Iter<'_, Text<'i>> {
    self.values.iter()
  }

  /// Returns a mutable iterator over the elements.
  pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Text<'i>> {
    self.values.iter_mut()
  }

  /// Appends the contents of an iterator, one element at a time, under
  /// the usual growth policy.
  pub fn extend<T, I>(&mut self, iter: I)
  where
    T: Into<Text<'i>>,
    I: IntoIterator<Item = T>,
  {
    for item in iter {
      self.append(item);
    }
  }

  /// Consumes the `TextVec` and returns its elements as a standard
  /// `Vec<Text>`.
  pub fn into_vec(self) -> Vec<Text<'i>> {
    self.values
  }
}

impl<'i> Default for TextVec<'i> {
  fn default() -> Self {
    Self::new()
  }
}

impl<'i> fmt::Debug for TextVec<'i> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "TextVec {values:?}", values = self.as_slice())
  }
}

impl<'i> Clone for TextVec<'i> {
  fn clone(&self) -> Self {
    Self {
      values: self.values.clone(),
    }
  }
}

impl<'a, 'b> PartialEq<TextVec<'b>> for TextVec<'a> {
  fn eq(&self, other: &TextVec<'b>) -> bool {
    self.as_slice() == other.as_slice()
  }
}

impl<'i> Eq for TextVec<'i> {}

impl<'i> Index<usize> for TextVec<'i> {
  type Output = Text<'i>;
  fn index(&self, index: usize) -> &Self::Output {
    &self.values[index]
  }
}

impl<'i> IndexMut<usize> for TextVec<'i> {
  fn index_mut(&mut self, index: usize) -> &mut Self::Output {
    &mut self.values[index]
  }
}

impl<'i> Deref for TextVec<'i> {
  type Target = [Text<'i>];
  fn deref(&self) -> &Self::Target {
    self.as_slice()
  }
}

impl<'i> DerefMut for TextVec<'i> {
  fn deref_mut(&mut self) -> &mut Self::Target {
    self.as_mut_slice()
  }
}

impl<'i, T: Into<Text<'i>>> FromIterator<T> for TextVec<'i> {
  fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
    let mut vec = Self::new();
    vec.extend(iter);
    vec
  }
}

impl<'i> IntoIterator for TextVec<'i> {
  type Item = Text<'i>;
  type IntoIter = alloc::vec::IntoIter<Text<'i>>;
  fn into_iter(self) -> Self::IntoIter {
    self.values.into_iter()
  }
}

impl<'a, 'i> IntoIterator for &'a TextVec<'i> {
  type Item = &'a Text<'i>;
  type IntoIter = core::slice::Iter<'a, Text<'i>>;
  fn into_iter(self) -> Self::IntoIter {
    self.as_slice().iter()
  }
}

impl<'a, 'i> IntoIterator for &'a mut TextVec<'i> {
  type Item = &'a mut Text<'i>;
  type IntoIter = core::slice::IterMut<'a, Text<'i>>;
  fn into_iter(self) -> Self::IntoIter {
    self.as_mut_slice().iter_mut()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl<'i> serde::Serialize for TextVec<'i> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      for elem in self.as_slice() {
        seq.serialize_element(elem)?;
      }
      seq.end()
    }
  }

  impl<'i, 'de: 'i> serde::Deserialize<'de> for TextVec<'i> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::SeqAccess;
      use serde::de::Visitor;
      struct TextVecVisitor;
      impl<'de> Visitor<'de> for TextVecVisitor {
        type Value = TextVec<'de>;
        fn expecting(
          &self,
          formatter: &mut core::fmt::Formatter,
        ) -> core::fmt::Result {
          formatter.write_str("a sequence of byte strings")
        }
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let mut vec = TextVec::new();
          while let Some(value) = seq.next_element::<Text<'de>>()? {
            vec.append(value);
          }
          Ok(vec)
        }
      }
      deserializer.deserialize_seq(TextVecVisitor)
    }
  }
}
