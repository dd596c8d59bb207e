//! # inplace-string
//!
//! Fixed-capacity strings stored entirely in place: no heap, no pointer,
//! just `N + 1` units of the element type.
//!
//! The length has no field of its own. The last unit holds `N - len`,
//! which doubles as the NUL terminator once the string is full, so
//! [`c_str`](BasicInplaceString::c_str) is terminated at every length.
//!
//! ---
//!
//! ## [`BasicInplaceString`]
//!
//! Generic over the unit type ([`CharUnit`]: `u8`, `u16` or `u32`) and the
//! capacity. The unit type also decides the largest capacity the size slot
//! can encode; going past it is a compile error.
//!
//! ```rust
//! use inplace_string::{InplaceString, NPOS};
//!
//! # fn main() -> Result<(), inplace_string::Error> {
//! let mut s = InplaceString::<16>::from_units(b"test");
//! assert_eq!(s.len(), 4);
//! assert_eq!(s.c_str(), b"test\0");
//!
//! let src = InplaceString::<8>::from_units(b"abcdefgh");
//! s.try_assign_substr(&src, 2, 2)?;
//! assert_eq!(s, "cd");
//!
//! s.resize(5, b'$');
//! assert_eq!(s, "cd$$$");
//! assert!(s.at(5).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ### Errors
//!
//! Out-of-range positions and substring offsets are reported as
//! [`Error::OutOfRange`] and never modify the string. Exceeding the
//! capacity is a programmer error that panics; the `try_*` methods and the
//! `TryFrom` impls report it as [`Error::CapacityExceeded`] instead.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! The crate is `no_std` unless the `std` feature is enabled. It links
//! `alloc` only for the conversions into `Vec` and `String`.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library.
//! - `is_variant`†: Derives `is_*` predicates on [`Error`].
//! - `log`: Reports every returned [`Error`] at debug level through the
//!   `log` facade.
//!
//! > † enabled by default

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

pub mod char_unit;
pub mod error;
pub mod inplace_string;

mod cmp;
mod convert;
mod macros;

pub use char_unit::*;
pub use error::Error;
pub use inplace_string::*;
