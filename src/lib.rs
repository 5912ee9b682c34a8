//! # BTEXT
//!
//! ### Byte-oriented Text values and growable text vectors
//!
//! This crate is a small length-explicit byte-string library built around 2
//! main types: [`Text`] and [`TextVec`], which are described in detail
//! below. All operations are byte-oriented; case logic assumes single-byte
//! ASCII and everything else passes through untouched.
//!
//! ---
//!
//! ## [`Text`]
//!
//! A byte buffer paired with its explicit length; no terminator exists or
//! is implied. The ownership of the buffer is an explicit part of the type:
//! a `Text` is either `Owned` (boxed), `Inlined` (small, on the stack via
//! [`InlineBytes`]), or `Borrowed` (aliasing caller-owned memory). Every
//! operation documents which of these its result is.
//!
//! ### Example
//!
//! ```rust
//! use btext::Text;
//!
//! let s = Text::from("hello. world!");
//! assert_eq!(s.to_title(), "Hello. World!");
//! assert_eq!(s.substring(0, 5), "hello");
//! assert_eq!(s.first_index_of("world"), Some(7));
//! ```
//!
//! ## [`TextVec`]
//!
//! A growable vector of [`Text`] values with a fixed growth policy: the
//! first append reserves 128 slots, a full vector doubles, and capacity
//! never shrinks. Split and join bridge the two types:
//!
//! ```rust
//! use btext::Text;
//!
//! let parts = Text::from("a,b,c").split(",");
//! assert_eq!(parts.len(), 3);
//! assert_eq!(parts.join("+").unwrap(), "a+b+c");
//! ```
//!
//! Operations that would otherwise be undefined (popping or joining an
//! empty vector, out-of-bounds access) return a typed [`TextError`]
//! instead. A search that finds nothing is not an error: it is `None`.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! These types are designed to be used in `no_std` environments (with
//! `alloc`), making them suitable for embedded systems and other
//! resource-constrained applications.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When
//!   disabled, which is the default, the crate operates in `no_std` mode.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod error;
pub mod inline_bytes;
pub mod text;
pub mod text_vec;

pub use error::*;
pub use inline_bytes::*;
pub use text::*;
pub use text_vec::*;
