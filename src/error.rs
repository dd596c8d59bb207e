//! The recoverable failures of inplace strings.
//!
//! Capacity overflow through the panicking API (`from_units`, `append`,
//! `resize`, ...) is a programmer error and never shows up here. The `try_*`
//! twins and the `TryFrom` conversions report it as
//! [`Error::CapacityExceeded`] instead.

/// Error returned by the checked operations of
/// [`BasicInplaceString`](crate::BasicInplaceString).
///
/// An operation returning `Err` leaves its target unmodified.
///
/// # Example
///
/// ```rust
/// use inplace_string::{Error, InplaceString};
///
/// let s = InplaceString::<8>::from_units(b"abc");
/// assert!(matches!(s.at(3), Err(Error::OutOfRange { pos: 3, len: 3 })));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(derive_more::Display, derive_more::Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum Error {
  /// A position or substring offset lies past the end of the content.
  #[display("position {pos} is out of range for length {len}")]
  OutOfRange { pos: usize, len: usize },
  /// The resulting length would not fit the fixed capacity.
  #[display("length {len} exceeds capacity {capacity}")]
  CapacityExceeded { len: usize, capacity: usize },
  /// Raw units are not a valid encoding of an inplace string.
  #[display("{len} raw units do not encode a string of capacity {capacity}")]
  InvalidLayout { len: usize, capacity: usize },
}

/// Result alias defaulting to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

impl Error {
  #[inline]
  pub(crate) fn out_of_range(pos: usize, len: usize) -> Self {
    #[cfg(feature = "log")]
    log::debug!("inplace string: position {pos} out of range for length {len}");
    Error::OutOfRange { pos, len }
  }

  #[inline]
  pub(crate) fn capacity_exceeded(len: usize, capacity: usize) -> Self {
    #[cfg(feature = "log")]
    log::debug!("inplace string: length {len} exceeds capacity {capacity}");
    Error::CapacityExceeded { len, capacity }
  }

  #[inline]
  pub(crate) fn invalid_layout(len: usize, capacity: usize) -> Self {
    #[cfg(feature = "log")]
    log::debug!("inplace string: {len} raw units do not encode capacity {capacity}");
    Error::InvalidLayout { len, capacity }
  }
}
