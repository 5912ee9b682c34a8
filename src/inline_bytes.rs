use alloc::vec::Vec;
use core::cmp::Ordering;
use core::convert::AsMut;
use core::convert::AsRef;
use core::convert::From;
use core::convert::TryFrom;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Formatter;
use core::hash::Hash;
use core::hash::Hasher;
use core::mem::size_of;
use core::ops::Deref;
use core::ops::DerefMut;

/// Maximum length of an inline byte string. On 64-bit systems this is
/// typically 23 bytes, while on 32-bit systems it's usually only 11 bytes.
///
/// This value is calculated as 3 times the size of a `usize`, **minus 1
/// byte** to reserve space for a `u8` length byte. Unlike C-style strings,
/// no terminator is stored or implied: the length byte alone is
/// authoritative.
pub const MAX_INLINE_LEN: usize = 3 * size_of::<usize>() - 1;

/// Error type returned when attempting to create an `InlineBytes` from a
/// slice that exceeds the maximum allowed length determined by the
/// [`MAX_INLINE_LEN`] constant.
///
/// # Example
///
/// ```rust
/// # use btext::inline_bytes::*;
/// # use core::convert::TryFrom;
/// # fn main() {
/// let long = [0u8; 64];
/// let result = InlineBytes::try_from(&long[..]);
///
/// assert!(result.is_err());
/// assert!(matches!(result, Err(BytesTooLongError)));
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BytesTooLongError;

#[derive(Clone, Copy)]
#[cfg_attr(feature = "constructors", derive(derive_more::Constructor))]
#[cfg_attr(
  feature = "index",
  derive(derive_more::Index, derive_more::IndexMut)
)]
/// A short byte string stored on the stack in a fixed-size buffer.
///
/// Designed to hold very small byte strings (up to [`MAX_INLINE_LEN`]
/// bytes), this type lets short owned [`Text`](crate::Text) results avoid
/// heap allocations entirely.
///
/// Attempting to store a slice longer than the maximum length results in a
/// [`BytesTooLongError`] being returned.
///
/// # Example
///
/// ```rust
/// # use btext::inline_bytes::*;
/// # use core::convert::TryFrom;
/// # fn main() -> Result<(), BytesTooLongError> {
/// let inline = InlineBytes::try_from(&b"hello"[..])?;
/// assert_eq!(inline.as_bytes(), b"hello");
/// assert_eq!(inline.len(), 5);
/// # Ok(())
/// # }
/// ```
pub struct InlineBytes {
  #[cfg_attr(feature = "index", index)]
  #[cfg_attr(feature = "index", index_mut)]
  pub(crate) buf: [u8; MAX_INLINE_LEN],
  pub(crate) len: u8,
}

impl InlineBytes {
  /// Creates a new `InlineBytes`.
  #[cfg(not(feature = "constructors"))]
  pub const fn new(buf: [u8; MAX_INLINE_LEN], len: u8) -> Self {
    Self { buf, len }
  }

  /// Returns the length of the byte string.
  #[inline]
  pub const fn len(&self) -> usize {
    self.len as usize
  }

  /// Returns whether the byte string is empty.
  #[inline]
  pub const fn is_empty(&self) -> bool {
    self.len == 0
  }

  /// Returns a reference to the meaningful bytes.
  #[inline]
  pub fn as_bytes(&self) -> &[u8] {
    &self.buf[..self.len as usize]
  }

  /// Returns a mutable reference to the meaningful bytes.
  #[inline]
  pub fn as_bytes_mut(&mut self) -> &mut [u8] {
    &mut self.buf[..self.len as usize]
  }
}

impl Default for InlineBytes {
  #[inline(always)]
  fn default() -> Self {
    Self {
      buf: [0u8; MAX_INLINE_LEN],
      len: 0,
    }
  }
}

impl Debug for InlineBytes {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "InlineBytes({bytes:?})", bytes = self.as_bytes())
  }
}

impl Deref for InlineBytes {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl DerefMut for InlineBytes {
  #[inline(always)]
  fn deref_mut(&mut self) -> &mut [u8] {
    self.as_bytes_mut()
  }
}

impl AsRef<[u8]> for InlineBytes {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.deref()
  }
}

impl AsMut<[u8]> for InlineBytes {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [u8] {
    self.deref_mut()
  }
}

impl From<InlineBytes> for Vec<u8> {
  #[inline(always)]
  fn from(b: InlineBytes) -> Self {
    b.as_bytes().to_vec()
  }
}

impl From<u8> for InlineBytes {
  #[inline(always)]
  fn from(byte: u8) -> Self {
    let mut buf = [0u8; MAX_INLINE_LEN];
    buf[0] = byte;
    Self { buf, len: 1 }
  }
}

impl TryFrom<&[u8]> for InlineBytes {
  type Error = BytesTooLongError;

  #[inline(always)]
  fn try_from(bytes: &[u8]) -> Result<InlineBytes, BytesTooLongError> {
    let len = bytes.len();
    if len > MAX_INLINE_LEN {
      return Err(BytesTooLongError);
    }
    let mut buf = [0u8; MAX_INLINE_LEN];
    buf[..len].copy_from_slice(bytes);
    let len = len as u8;
    Ok(Self { buf, len })
  }
}

impl Hash for InlineBytes {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl PartialEq for InlineBytes {
  #[inline(always)]
  fn eq(&self, other: &Self) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl Eq for InlineBytes {}

impl PartialEq<[u8]> for InlineBytes {
  #[inline(always)]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<InlineBytes> for [u8] {
  #[inline(always)]
  fn eq(&self, other: &InlineBytes) -> bool {
    self == other.as_bytes()
  }
}

impl PartialEq<&[u8]> for InlineBytes {
  #[inline(always)]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for InlineBytes {
  #[inline(always)]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialOrd for InlineBytes {
  #[inline(always)]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for InlineBytes {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn max_inline_len_is_at_least_4_bytes() {
    assert!(MAX_INLINE_LEN >= 4);
  }

  #[test]
  fn inline_bytes_from_single_byte() {
    let b: InlineBytes = b'a'.into();
    assert_eq!(b.as_bytes(), b"a");
    assert_eq!(b.len(), 1);
  }

  #[test]
  #[cfg(target_pointer_width = "64")]
  fn inline_bytes_fits_twentythree() {
    let s = b"0123456789abcdefghijklm";
    let inline = InlineBytes::try_from(&s[..]);
    assert!(inline.is_ok());
    let inline = inline.unwrap();
    assert_eq!(inline.len(), 23);
    assert_eq!(inline.as_bytes(), s);
  }

  #[test]
  #[cfg(target_pointer_width = "64")]
  fn inline_bytes_not_fits_twentyfour() {
    let s = b"0123456789abcdefghijklmn";
    let err = InlineBytes::try_from(&s[..]);
    assert!(err.is_err());
    assert!(matches!(err, Err(BytesTooLongError)));
  }

  #[test]
  fn try_inline_bytes_from_long_slice() {
    let s = [7u8; 64];
    let err = InlineBytes::try_from(&s[..]);
    assert!(err.is_err());
    assert!(matches!(err, Err(BytesTooLongError)));
  }

  #[test]
  fn inline_bytes_equality_and_ordering() {
    let b1 = InlineBytes::try_from(&b"hello"[..]).unwrap();
    let b2 = InlineBytes::try_from(&b"hello"[..]).unwrap();
    let b3 = InlineBytes::try_from(&b"world"[..]).unwrap();
    assert_eq!(b1, b2);
    assert_ne!(b1, b3);
    assert!(b1 < b3);
    assert_eq!(b1, *b"hello");
  }

  #[test]
  fn inline_bytes_as_bytes_mut() {
    let mut b = InlineBytes::try_from(&b"hello"[..]).unwrap();
    b.as_bytes_mut().make_ascii_uppercase();
    assert_eq!(b.as_bytes(), b"HELLO");
    assert_eq!(b.len(), 5);
  }

  #[test]
  fn inline_bytes_default_is_empty() {
    let b = InlineBytes::default();
    assert!(b.is_empty());
    assert_eq!(b.as_bytes(), b"");
  }
}
