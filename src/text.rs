use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::convert::AsRef;
use core::convert::From;
use core::fmt;
use core::fmt::Display;
use core::hash::Hash;
use core::hash::Hasher;
use core::ops::Deref;

use crate::error::TextError;
use crate::inline_bytes::InlineBytes;
use crate::text_vec::TextVec;

/// A length-explicit byte string that can be owned, borrowed, or inlined.
///
/// The length is always authoritative; no terminator byte exists or is
/// implied. Every operation documents whether its result owns fresh storage
/// or aliases an input, so callers never hold an ambiguous buffer.
///
/// # Variants
///
/// 1. [`Owned`](Text::Owned): Boxed byte slice that owns the data. No
///    lifetime parameter is needed here, since the data is owned by the
///    `Text` instance itself.
/// 2. [`Inlined`](Text::Inlined): Short byte string stored on the stack
///    using the [`InlineBytes`] type. Must be
///    [`MAX_INLINE_LEN`](crate::inline_bytes::MAX_INLINE_LEN) bytes or less
///    in length (typically 23 bytes on 64-bit systems). Owned storage, no
///    heap allocation.
/// 3. [`Borrowed`](Text::Borrowed): Borrowed byte slice. Does not own the
///    data, so it must specify the lifetime parameter `'i` to indicate how
///    long the data will live for.
///
/// # Examples
///
/// ```rust
/// # use btext::Text;
/// let borrowed = Text::from("hello world");
/// let owned = borrowed.substring(0, 5);
///
/// assert_eq!(owned, "hello");
/// assert_eq!(borrowed.first_index_of("world"), Some(6));
/// ```
///
/// # Case transforms
///
/// `to_upper`, `to_lower`, and `to_title` are byte-oriented and ASCII-only:
/// only bytes in `b'a'..=b'z'` / `b'A'..=b'Z'` are shifted, everything
/// else passes through untouched. Multi-byte encodings are out of scope.
#[derive(Debug, Eq)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum Text<'i> {
  /// An immutable boxed byte slice that owns the data. This is the
  /// variant produced for transform results too large to inline.
  Owned(Box<[u8]>),
  /// A short byte string stored on the stack using [`InlineBytes`].
  ///
  /// Owned storage without a heap allocation; transform results at most
  /// [`MAX_INLINE_LEN`](crate::inline_bytes::MAX_INLINE_LEN) bytes long
  /// use this variant.
  Inlined(InlineBytes),
  /// A borrowed byte slice that does not own the data. This is the
  /// variant produced when constructing a `Text` from a literal or an
  /// existing buffer: no copy is made, and the lifetime parameter `'i`
  /// ties the value to the borrowed storage.
  Borrowed(&'i [u8]),
}

impl<'i> Text<'i> {
  /// Returns the zero-length text. Aliases a static empty slice; no
  /// allocation.
  #[inline(always)]
  pub const fn empty() -> Text<'static> {
    Text::Borrowed(&[])
  }

  /// Creates a text from an optional buffer, aliasing it when present.
  /// `None` behaves like [`Text::empty`].
  #[inline]
  pub fn from_opt(bytes: Option<&'i [u8]>) -> Text<'i> {
    match bytes {
      Some(bytes) => Text::Borrowed(bytes),
      None => Text::empty(),
    }
  }

  #[inline(always)]
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Text::Owned(b) => b,
      Text::Borrowed(b) => b,
      Text::Inlined(b) => b.as_bytes(),
    }
  }

  /// Returns the number of meaningful bytes.
  #[inline(always)]
  pub fn len(&self) -> usize {
    self.as_bytes().len()
  }

  #[inline(always)]
  pub fn is_empty(&self) -> bool {
    self.as_bytes().is_empty()
  }

  /// Cheap re-borrow of this text's bytes. The result aliases `self` and
  /// never allocates, regardless of the variant `self` is in.
  #[inline(always)]
  pub fn as_borrowed(&self) -> Text<'_> {
    Text::Borrowed(self.as_bytes())
  }

  /// Consumes the text and returns its bytes as a `Vec<u8>`, copying only
  /// when the value did not already own a heap buffer.
  #[inline]
  pub fn into_bytes(self) -> Vec<u8> {
    match self {
      Text::Owned(b) => b.into_vec(),
      Text::Borrowed(b) => b.to_vec(),
      Text::Inlined(b) => b.as_bytes().to_vec(),
    }
  }

  /// Owned storage for the given bytes: inline when small enough, boxed
  /// otherwise.
  fn owned(bytes: &[u8]) -> Text<'static> {
    match InlineBytes::try_from(bytes) {
      Ok(inline) => Text::Inlined(inline),
      Err(_) => Text::Owned(bytes.into()),
    }
  }

  pub(crate) fn owned_from_vec(bytes: Vec<u8>) -> Text<'static> {
    match InlineBytes::try_from(bytes.as_slice()) {
      Ok(inline) => Text::Inlined(inline),
      Err(_) => Text::Owned(bytes.into_boxed_slice()),
    }
  }

  /// Deep copy. The result is value-equal to `self` but holds distinct
  /// owned storage; mutating or dropping either side never affects the
  /// other.
  #[inline]
  pub fn copy(&self) -> Text<'static> {
    Text::owned(self.as_bytes())
  }

  /// Concatenates `self` with any byte source (`&Text`, `&str`, `&[u8]`,
  /// or a byte-string literal). Neither input is mutated; the result is a
  /// fresh owned buffer of length `self.len() + other.len()`.
  pub fn concat(&self, other: &(impl AsRef<[u8]> + ?Sized)) -> Text<'static> {
    let a = self.as_bytes();
    let b = other.as_ref();
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    Text::owned_from_vec(out)
  }

  /// Extracts the bytes in `[start, stop)` into a fresh owned buffer.
  ///
  /// If `start` is negative or at/past the end, the result is
  /// [`Text::empty`] (the static alias). Otherwise `stop` is clamped to
  /// the length, and a `stop` at or before `start` yields a zero-length
  /// owned buffer rather than the static alias.
  pub fn substring(&self, start: isize, stop: isize) -> Text<'static> {
    let bytes = self.as_bytes();
    if start < 0 || start as usize >= bytes.len() {
      return Text::empty();
    }
    let start = start as usize;
    let stop = if stop > bytes.len() as isize {
      bytes.len()
    } else if stop <= start as isize {
      start
    } else {
      stop as usize
    };
    Text::owned(&bytes[start..stop])
  }

  /// Returns an owned copy with the bytes in reverse order.
  pub fn reverse(&self) -> Text<'static> {
    let mut out = self.as_bytes().to_vec();
    out.reverse();
    Text::owned_from_vec(out)
  }

  /// Returns an owned copy with ASCII lowercase bytes (`b'a'..=b'z'`)
  /// shifted to uppercase; all other bytes pass through unchanged.
  pub fn to_upper(&self) -> Text<'static> {
    let mut out = self.as_bytes().to_vec();
    out.make_ascii_uppercase();
    Text::owned_from_vec(out)
  }

  /// Returns an owned copy with ASCII uppercase bytes (`b'A'..=b'Z'`)
  /// shifted to lowercase; all other bytes pass through unchanged.
  pub fn to_lower(&self) -> Text<'static> {
    let mut out = self.as_bytes().to_vec();
    out.make_ascii_lowercase();
    Text::owned_from_vec(out)
  }

  /// Returns an owned title-cased copy.
  ///
  /// The scan starts in capitalize mode. In capitalize mode, the first
  /// ASCII lowercase byte is uppercased and the mode is disarmed; bytes
  /// that are not ASCII lowercase (including uppercase letters) leave the
  /// mode armed. Once disarmed, a punctuation byte (space, `.`, `!`, `?`)
  /// re-arms it.
  pub fn to_title(&self) -> Text<'static> {
    let mut out = self.as_bytes().to_vec();
    let mut should_capitalize = true;
    for byte in &mut out {
      if should_capitalize {
        if byte.is_ascii_lowercase() {
          *byte = byte.to_ascii_uppercase();
          should_capitalize = false;
        }
      } else if is_punctuation(*byte) {
        should_capitalize = true;
      }
    }
    Text::owned_from_vec(out)
  }

  /// Returns `true` if `needle` occurs at some offset of `self`.
  ///
  /// A needle longer than the haystack is never contained. The scan never
  /// runs over an empty haystack, so `contains` of an empty needle in an
  /// empty haystack is `false`.
  pub fn contains(&self, needle: &(impl AsRef<[u8]> + ?Sized)) -> bool {
    let haystack = self.as_bytes();
    let needle = needle.as_ref();
    if haystack.len() < needle.len() {
      return false;
    }
    (0..haystack.len()).any(|i| {
      haystack.len() - i >= needle.len()
        && haystack[i..i + needle.len()] == *needle
    })
  }

  /// Returns the smallest offset where `needle` matches, or `None`.
  ///
  /// Only searches when `needle.len() < self.len()` (strict): a needle of
  /// equal length is never found, even when identical. This boundary is
  /// preserved from the upstream contract for compatibility.
  pub fn first_index_of(
    &self,
    needle: &(impl AsRef<[u8]> + ?Sized),
  ) -> Option<usize> {
    let haystack = self.as_bytes();
    let needle = needle.as_ref();
    if needle.len() >= haystack.len() {
      return None;
    }
    (0..haystack.len()).find(|&i| {
      haystack.len() - i >= needle.len()
        && haystack[i..i + needle.len()] == *needle
    })
  }

  /// Returns the largest offset where `needle` matches, or `None`. Shares
  /// [`first_index_of`](Text::first_index_of)'s strict length
  /// precondition.
  pub fn last_index_of(
    &self,
    needle: &(impl AsRef<[u8]> + ?Sized),
  ) -> Option<usize> {
    let haystack = self.as_bytes();
    let needle = needle.as_ref();
    if needle.len() >= haystack.len() {
      return None;
    }
    (0..haystack.len())
      .filter(|&i| {
        haystack.len() - i >= needle.len()
          && haystack[i..i + needle.len()] == *needle
      })
      .last()
  }

  /// Returns `true` if `self` begins with `needle`. A needle longer than
  /// `self` never matches.
  pub fn starts_with(&self, needle: &(impl AsRef<[u8]> + ?Sized)) -> bool {
    let bytes = self.as_bytes();
    let needle = needle.as_ref();
    needle.len() <= bytes.len() && bytes[..needle.len()] == *needle
  }

  /// Returns `true` if `self` ends with `needle`. A needle longer than
  /// `self` never matches.
  pub fn ends_with(&self, needle: &(impl AsRef<[u8]> + ?Sized)) -> bool {
    let bytes = self.as_bytes();
    let needle = needle.as_ref();
    needle.len() <= bytes.len() && bytes[bytes.len() - needle.len()..] == *needle
  }

  /// Splits `self` on non-overlapping, leftmost-first occurrences of
  /// `sep`, returning owned segments.
  ///
  /// The scan only runs when `sep.len() < self.len()`: a separator as
  /// long as or longer than the input yields an EMPTY vector, so
  /// `split("ab", "ab")` produces no segments rather than `["", ""]`. A
  /// separator occurrence at the very start contributes a leading empty
  /// segment; one at the very end contributes no trailing empty segment.
  /// An empty separator never matches, yielding a single owned copy of
  /// the whole input.
  pub fn split(&self, sep: &(impl AsRef<[u8]> + ?Sized)) -> TextVec<'static> {
    let bytes = self.as_bytes();
    let sep = sep.as_ref();
    let mut segments = TextVec::new();
    if sep.len() >= bytes.len() {
      return segments;
    }
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
      if !sep.is_empty()
        && bytes.len() - i >= sep.len()
        && bytes[i..i + sep.len()] == *sep
      {
        segments.append(Text::owned(&bytes[start..i]));
        i += sep.len();
        start = i;
      } else {
        i += 1;
      }
    }
    if start < i {
      segments.append(Text::owned(&bytes[start..i]));
    }
    segments
  }

  /// Replaces every occurrence of `search` with `replacement`.
  ///
  /// When `search` is longer than `self`, the input is returned unchanged
  /// as a re-borrow (aliased, not copied). Otherwise this is
  /// [`split`](Text::split) followed by [`TextVec::join`], and it inherits
  /// both boundary policies: a `search` exactly as long as `self` makes
  /// the split empty, so the join fails with
  /// [`TextError::EmptyVector`].
  pub fn replace(
    &self,
    search: &(impl AsRef<[u8]> + ?Sized),
    replacement: &(impl AsRef<[u8]> + ?Sized),
  ) -> Result<Text<'_>, TextError> {
    let search = search.as_ref();
    if search.len() > self.len() {
      return Ok(self.as_borrowed());
    }
    self.split(search).join(replacement)
  }
}

const fn is_punctuation(byte: u8) -> bool {
  byte == b' ' || byte == b'.' || byte == b'!' || byte == b'?'
}

impl Display for Text<'_> {
  /// Lossy UTF-8 rendering; non-UTF-8 bytes display as replacement
  /// characters.
  #[inline(always)]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", String::from_utf8_lossy(self.as_bytes()))
  }
}

impl Default for Text<'_> {
  #[inline(always)]
  fn default() -> Self {
    Text::Borrowed(&[])
  }
}

impl Hash for Text<'_> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_bytes().hash(state);
  }
}

impl<'i> Clone for Text<'i> {
  #[inline]
  fn clone(&self) -> Self {
    match self {
      Text::Owned(b) => match InlineBytes::try_from(&**b) {
        Ok(inline) => Text::Inlined(inline),
        Err(_) => Text::Owned(b.clone()),
      },
      Text::Borrowed(b) => Text::Borrowed(b),
      Text::Inlined(b) => Text::Inlined(*b),
    }
  }
}

impl Deref for Text<'_> {
  type Target = [u8];

  #[inline(always)]
  fn deref(&self) -> &Self::Target {
    self.as_bytes()
  }
}

impl AsRef<[u8]> for Text<'_> {
  #[inline(always)]
  fn as_ref(&self) -> &[u8] {
    self.as_bytes()
  }
}

impl<'a, 'b> PartialEq<Text<'b>> for Text<'a> {
  #[inline(always)]
  fn eq(&self, other: &Text<'b>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<[u8]> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &[u8]) -> bool {
    self.as_bytes() == other
  }
}

impl PartialEq<&[u8]> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &&[u8]) -> bool {
    self.as_bytes() == *other
  }
}

impl<const N: usize> PartialEq<[u8; N]> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &[u8; N]) -> bool {
    self.as_bytes() == other
  }
}

impl<const N: usize> PartialEq<&[u8; N]> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &&[u8; N]) -> bool {
    self.as_bytes() == *other
  }
}

impl PartialEq<str> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<&str> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<Text<'_>> for [u8] {
  #[inline(always)]
  fn eq(&self, other: &Text<'_>) -> bool {
    self == other.as_bytes()
  }
}

impl PartialEq<Text<'_>> for str {
  #[inline(always)]
  fn eq(&self, other: &Text<'_>) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl PartialEq<Vec<u8>> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &Vec<u8>) -> bool {
    self.as_bytes() == other.as_slice()
  }
}

impl PartialEq<String> for Text<'_> {
  #[inline(always)]
  fn eq(&self, other: &String) -> bool {
    self.as_bytes() == other.as_bytes()
  }
}

impl<'a, 'b> PartialOrd<Text<'b>> for Text<'a> {
  #[inline(always)]
  fn partial_cmp(&self, other: &Text<'b>) -> Option<Ordering> {
    self.as_bytes().partial_cmp(other.as_bytes())
  }
}

impl Ord for Text<'_> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_bytes().cmp(other.as_bytes())
  }
}

impl<'i> From<&'i [u8]> for Text<'i> {
  /// Aliases the given buffer; no copy is made.
  #[inline(always)]
  fn from(bytes: &'i [u8]) -> Self {
    Text::Borrowed(bytes)
  }
}

impl<'i, const N: usize> From<&'i [u8; N]> for Text<'i> {
  /// Aliases the given buffer; no copy is made.
  #[inline(always)]
  fn from(bytes: &'i [u8; N]) -> Self {
    Text::Borrowed(bytes)
  }
}

impl<'i> From<&'i str> for Text<'i> {
  /// Aliases the given string's bytes; no copy is made.
  #[inline(always)]
  fn from(s: &'i str) -> Self {
    Text::Borrowed(s.as_bytes())
  }
}

impl From<Vec<u8>> for Text<'_> {
  #[inline(always)]
  fn from(bytes: Vec<u8>) -> Self {
    Text::Owned(bytes.into_boxed_slice())
  }
}

impl From<String> for Text<'_> {
  #[inline(always)]
  fn from(s: String) -> Self {
    Text::Owned(s.into_bytes().into_boxed_slice())
  }
}

impl From<InlineBytes> for Text<'_> {
  #[inline(always)]
  fn from(bytes: InlineBytes) -> Self {
    Text::Inlined(bytes)
  }
}

impl From<Text<'_>> for Vec<u8> {
  #[inline(always)]
  fn from(text: Text<'_>) -> Self {
    text.into_bytes()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use core::fmt;

  use serde::Deserialize;
  use serde::Deserializer;
  use serde::Serialize;
  use serde::Serializer;
  use serde::de;

  use super::*;

  impl Serialize for Text<'_> {
    #[inline(always)]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: Serializer,
    {
      serializer.serialize_bytes(self.as_bytes())
    }
  }

  struct TextVisitor;

  impl<'de> de::Visitor<'de> for TextVisitor {
    type Value = Text<'de>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
      formatter.write_str("a byte string")
    }

    fn visit_borrowed_bytes<E>(self, v: &'de [u8]) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::Borrowed(v))
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::owned(v))
    }

    fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::from(v))
    }

    fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::Borrowed(v.as_bytes()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::owned(v.as_bytes()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
      E: de::Error,
    {
      Ok(Text::from(v))
    }

    // formats without a native byte type (e.g. JSON) hand bytes over as a
    // sequence of integers
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
      A: de::SeqAccess<'de>,
    {
      let mut bytes = Vec::with_capacity(seq.size_hint().unwrap_or(0));
      while let Some(byte) = seq.next_element::<u8>()? {
        bytes.push(byte);
      }
      Ok(Text::from(bytes))
    }
  }

  impl<'i, 'de: 'i> Deserialize<'de> for Text<'i> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: Deserializer<'de>,
    {
      deserializer.deserialize_bytes(TextVisitor)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_is_a_static_alias() {
    let e = Text::empty();
    assert_eq!(e.len(), 0);
    assert!(e.is_empty());
    assert!(matches!(e, Text::Borrowed(_)));
  }

  #[test]
  fn from_opt_none_is_empty() {
    assert_eq!(Text::from_opt(None), Text::empty());
    assert_eq!(Text::from_opt(Some(b"abc")), "abc");
  }

  #[test]
  fn copy_is_value_equal_but_owned() {
    let borrowed = Text::from("hello world, this is long enough to box");
    let copy = borrowed.copy();
    assert_eq!(copy, borrowed);
    assert!(matches!(copy, Text::Owned(_)));

    let short = Text::from("hi");
    let copy = short.copy();
    assert_eq!(copy, short);
    assert!(matches!(copy, Text::Inlined(_)));
  }

  #[test]
  fn concat_length_is_additive() {
    let a = Text::from("foo");
    let b = Text::from("barbaz");
    let joined = a.concat(&b);
    assert_eq!(joined.len(), a.len() + b.len());
    assert_eq!(joined, "foobarbaz");
    // inputs untouched
    assert_eq!(a, "foo");
    assert_eq!(b, "barbaz");
  }

  #[test]
  fn concat_accepts_literals() {
    let a = Text::from("foo");
    assert_eq!(a.concat("bar"), "foobar");
    assert_eq!(a.concat(b"bar"), "foobar");
    assert_eq!(Text::empty().concat(&a), "foo");
  }

  #[test]
  fn substring_of_concat_recovers_prefix() {
    let a = Text::from("hello");
    let b = Text::from(" world");
    let joined = a.concat(&b);
    assert_eq!(joined.substring(0, a.len() as isize), a);
  }

  #[test]
  fn substring_basic_and_clamped() {
    let s = Text::from("hello world");
    assert_eq!(s.substring(0, 5), "hello");
    assert_eq!(s.substring(6, 100), "world");
    assert_eq!(s.substring(6, 11), "world");
  }

  #[test]
  fn substring_out_of_range_start_is_empty() {
    let s = Text::from("hi");
    assert_eq!(s.substring(5, 10), "");
    assert_eq!(s.substring(-1, 1), "");
    assert_eq!(s.substring(2, 3), "");
    // out-of-range start aliases the static empty slice
    assert!(matches!(s.substring(5, 10), Text::Borrowed(_)));
  }

  #[test]
  fn substring_stop_before_start_is_owned_empty() {
    let s = Text::from("hello");
    let sub = s.substring(2, 1);
    assert_eq!(sub, "");
    assert!(matches!(sub, Text::Inlined(_)));
  }

  #[test]
  fn reverse_is_an_involution() {
    let s = Text::from("abcdef");
    assert_eq!(s.reverse(), "fedcba");
    assert_eq!(s.reverse().reverse(), s);
    assert_eq!(Text::empty().reverse(), "");
  }

  #[test]
  fn case_transforms_are_ascii_only() {
    let s = Text::from("Hello, World! 123");
    assert_eq!(s.to_upper(), "HELLO, WORLD! 123");
    assert_eq!(s.to_lower(), "hello, world! 123");

    let mixed = Text::from(&[b'a', 0xFF, b'Z'][..]);
    assert_eq!(mixed.to_upper(), [b'A', 0xFF, b'Z']);
    assert_eq!(mixed.to_lower(), [b'a', 0xFF, b'z']);
  }

  #[test]
  fn title_case_capitalizes_after_punctuation() {
    let s = Text::from("hello. world!");
    assert_eq!(s.to_title(), "Hello. World!");

    // space is itself a re-arming punctuation byte
    let s = Text::from("one two? three. four");
    assert_eq!(s.to_title(), "One Two? Three. Four");

    // only the listed punctuation bytes re-arm; others do not
    let s = Text::from("a,b c");
    assert_eq!(s.to_title(), "A,b C");
  }

  #[test]
  fn title_case_skips_non_lowercase_while_armed() {
    // uppercase bytes do not disarm capitalize mode
    let s = Text::from("Ello");
    assert_eq!(s.to_title(), "ELlo");
  }

  #[test]
  fn equality_is_byte_for_byte() {
    let a = Text::from("same");
    let b = a.copy();
    let c = Text::from("Same");
    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_eq!(a, *b"same");
    assert_eq!(a, "same");
  }

  #[test]
  fn contains_basic() {
    let s = Text::from("hello world");
    assert!(s.contains("lo wo"));
    assert!(s.contains("hello world"));
    assert!(!s.contains("worlds!"));
    assert!(!s.contains("hello world plus more"));
  }

  #[test]
  fn contains_empty_haystack_never_matches() {
    assert!(!Text::empty().contains(""));
    assert!(!Text::empty().contains("x"));
    assert!(Text::from("x").contains(""));
  }

  #[test]
  fn first_and_last_index_of() {
    let s = Text::from("banana");
    assert_eq!(s.first_index_of("ana"), Some(1));
    assert_eq!(s.last_index_of("ana"), Some(3));
    assert_eq!(s.first_index_of("x"), None);
    assert_eq!(s.last_index_of("x"), None);
  }

  #[test]
  fn index_of_excludes_exact_length_needles() {
    // strict needle.len() < haystack.len() precondition, kept verbatim
    let s = Text::from("abc");
    assert_eq!(s.first_index_of("abc"), None);
    assert_eq!(s.last_index_of("abc"), None);
    assert_eq!(s.first_index_of("abcd"), None);
  }

  #[test]
  fn starts_with_and_ends_with() {
    let s = Text::from("prefix-body-suffix");
    assert!(s.starts_with("prefix"));
    assert!(s.ends_with("suffix"));
    assert!(s.starts_with(""));
    assert!(s.ends_with(""));
    assert!(s.starts_with("prefix-body-suffix"));
    assert!(!s.starts_with("body"));
    assert!(!s.ends_with("body"));
    assert!(!s.starts_with("prefix-body-suffix-and-more"));
  }

  #[test]
  fn split_on_interior_separator() {
    let parts = Text::from("a,b,c").split(",");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "a");
    assert_eq!(parts[1], "b");
    assert_eq!(parts[2], "c");
  }

  #[test]
  fn split_multi_byte_separator() {
    let parts = Text::from("one::two::three").split("::");
    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "one");
    assert_eq!(parts[1], "two");
    assert_eq!(parts[2], "three");
  }

  #[test]
  fn split_leading_separator_keeps_empty_segment() {
    let parts = Text::from(",a").split(",");
    assert_eq!(parts.len(), 2);
    assert_eq!(parts[0], "");
    assert_eq!(parts[1], "a");
  }

  #[test]
  fn split_trailing_separator_drops_empty_segment() {
    let parts = Text::from("a,").split(",");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], "a");
  }

  #[test]
  fn split_separator_not_strictly_shorter_is_empty() {
    assert!(Text::from("ab").split("ab").is_empty());
    assert!(Text::from("ab").split("abc").is_empty());
    assert!(Text::empty().split("").is_empty());
  }

  #[test]
  fn split_empty_separator_never_matches() {
    let parts = Text::from("abc").split("");
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0], "abc");
  }

  #[test]
  fn split_join_round_trip() {
    let s = Text::from("alpha,beta,gamma");
    let rejoined = s.split(",").join(",").unwrap();
    assert_eq!(rejoined, s);
  }

  #[test]
  fn split_join_round_trip_loses_trailing_separator() {
    let s = Text::from("alpha,beta,");
    let rejoined = s.split(",").join(",").unwrap();
    assert_eq!(rejoined, "alpha,beta");
  }

  #[test]
  fn replace_basic() {
    let s = Text::from("a-b-c");
    assert_eq!(s.replace("-", "+").unwrap(), "a+b+c");
    assert_eq!(s.replace("-", "").unwrap(), "abc");
    assert_eq!(s.replace("-", "<->").unwrap(), "a<->b<->c");
  }

  #[test]
  fn replace_longer_search_aliases_input() {
    let s = Text::from("ab");
    let unchanged = s.replace("abcdef", "x").unwrap();
    assert_eq!(unchanged, s);
    assert!(matches!(unchanged, Text::Borrowed(_)));
  }

  #[test]
  fn replace_exact_length_search_is_an_error() {
    let s = Text::from("ab");
    assert_eq!(s.replace("ab", "x"), Err(TextError::EmptyVector));
    assert_eq!(s.replace("xy", "z"), Err(TextError::EmptyVector));
  }

  #[test]
  fn clone_reborrows_and_reinlines() {
    let borrowed = Text::from("borrowed");
    assert!(matches!(borrowed.clone(), Text::Borrowed(_)));

    let owned: Text = Text::from("short".as_bytes().to_vec());
    assert!(matches!(owned, Text::Owned(_)));
    assert!(matches!(owned.clone(), Text::Inlined(_)));
  }

  #[test]
  fn display_is_lossy_utf8() {
    let s = Text::from("hello");
    assert_eq!(std::format!("{s}"), "hello");
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;

    #[test]
    fn serialize_and_deserialize() {
      let text = Text::from("hi");
      let json = serde_json::to_string(&text).unwrap();
      // serde_json renders bytes as an array of numbers
      assert_eq!(json, "[104,105]");
      let de: Text = serde_json::from_str(&json).unwrap();
      assert_eq!(de, text);
    }
  }
}
