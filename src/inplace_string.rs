//! The fixed-capacity string type.
//!
//! `BasicInplaceString<C, N>` occupies exactly `N + 1` units of `C`. The
//! first `N` hold the content; the last one holds `N - len`, so the length
//! needs no field of its own. A full string stores `0` there, which is the
//! NUL unit, so the content is followed by a terminator at every length.
//!
//! ```rust
//! use inplace_string::InplaceString;
//!
//! let mut s = InplaceString::<8>::from_units(b"abc");
//! s.append(b"de");
//! assert_eq!(s, "abcde");
//! assert_eq!(s.c_str(), b"abcde\0");
//! assert_eq!(s.as_raw().last(), Some(&3));
//! ```

use core::ffi::CStr;
use core::ops::Deref;
use core::ops::DerefMut;
use core::ptr;
use core::slice;
use core::str;

use alloc::borrow::Cow;
use alloc::string::String;

use crate::char_unit::CharUnit;
use crate::error::Error;
use crate::error::Result;

/// Count meaning "up to the end of the source" for substring operations.
pub const NPOS: usize = usize::MAX;

/// A string of at most `N` units of `C`, stored in place.
///
/// See the [module documentation](self) for the layout. Copying the value
/// copies the whole buffer; there is no heap storage and nothing to drop.
#[repr(C)]
#[derive(Clone, Copy)]
pub struct BasicInplaceString<C: CharUnit, const N: usize> {
  chars: [C; N],
  /// Size-encoding slot: `N - len`.
  tail:  C,
}

/// Inplace string of UTF-8 code units.
pub type InplaceString<const N: usize> = BasicInplaceString<u8, N>;
/// Inplace string of UTF-16 code units.
pub type InplaceU16String<const N: usize> = BasicInplaceString<u16, N>;
/// Inplace string of UTF-32 code units.
pub type InplaceU32String<const N: usize> = BasicInplaceString<u32, N>;

/// Resolves `src[pos..pos + count]`, clamping `count` to what is available.
fn substr<C: CharUnit>(src: &[C], pos: usize, count: usize) -> Result<&[C]> {
  let rest = src
    .get(pos..)
    .ok_or_else(|| Error::out_of_range(pos, src.len()))?;
  Ok(&rest[..count.min(rest.len())])
}

impl<C: CharUnit, const N: usize> BasicInplaceString<C, N> {
  const CAPACITY_FITS: () = assert!(
    N <= C::MAX_CAPACITY,
    "capacity does not fit the size-encoding slot of this unit type"
  );

  /// Creates an empty string.
  ///
  /// ```rust
  /// use inplace_string::InplaceString;
  ///
  /// let s = InplaceString::<16>::new();
  /// assert!(s.is_empty());
  /// assert_eq!(s.c_str(), b"\0");
  /// ```
  ///
  /// A capacity the size slot cannot encode does not compile:
  ///
  /// ```compile_fail
  /// use inplace_string::InplaceString;
  ///
  /// let s = InplaceString::<256>::new();
  /// ```
  pub fn new() -> Self {
    let () = Self::CAPACITY_FITS;
    Self {
      chars: [C::NUL; N],
      tail:  C::encode_len(N),
    }
  }

  /// Creates a string holding a copy of `units`. Embedded NUL units are
  /// kept; the length is `units.len()`.
  ///
  /// # Panics
  ///
  /// Panics if `units.len() > N`.
  #[inline]
  pub fn from_units(units: &[C]) -> Self {
    let mut s = Self::new();
    s.assign(units);
    s
  }

  /// Fallible twin of [`Self::from_units`].
  pub fn try_from_units(units: &[C]) -> Result<Self> {
    let mut s = Self::new();
    s.try_assign(units)?;
    Ok(s)
  }

  /// Creates a string from a null-terminated source: the content stops
  /// before the first NUL unit, or at the end of `units` if there is none.
  ///
  /// # Panics
  ///
  /// Panics if the content is longer than `N`.
  #[inline]
  pub fn from_nul_terminated(units: &[C]) -> Self {
    let mut s = Self::new();
    s.assign_nul_terminated(units);
    s
  }

  /// Creates a string from `count` units of `src` starting at `pos`.
  ///
  /// `count` is clamped to the units available after `pos`; pass [`NPOS`]
  /// to take everything. Any source viewable as `[C]` works, including
  /// inplace strings of another capacity.
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if `pos > src.len()`, and
  /// [`Error::CapacityExceeded`] if the resulting substring is longer than
  /// `N`.
  ///
  /// ```rust
  /// use inplace_string::{InplaceString, NPOS};
  ///
  /// let src = InplaceString::<8>::from_units(b"abcdefgh");
  /// let s = InplaceString::<16>::try_from_substr(&src, 6, NPOS).unwrap();
  /// assert_eq!(s, "gh");
  /// assert!(InplaceString::<16>::try_from_substr(&src, 9, NPOS).is_err());
  /// ```
  pub fn try_from_substr<S>(src: &S, pos: usize, count: usize) -> Result<Self>
  where
    S: AsRef<[C]> + ?Sized,
  {
    let units = substr(src.as_ref(), pos, count)?;
    Self::try_from_units(units)
  }

  /// Creates a string of `count` copies of `unit`.
  ///
  /// # Panics
  ///
  /// Panics if `count > N`.
  #[inline]
  pub fn from_fill(count: usize, unit: C) -> Self {
    let mut s = Self::new();
    s.assign_fill(count, unit);
    s
  }

  /// Rebuilds a string from the `N + 1` units returned by
  /// [`Self::as_raw`].
  ///
  /// # Errors
  ///
  /// [`Error::InvalidLayout`] if `raw` does not have `N + 1` units or its
  /// last unit does not encode a length within the capacity.
  pub fn try_from_raw(raw: &[C]) -> Result<Self> {
    let invalid = || Error::invalid_layout(raw.len(), N);
    if raw.len() != N + 1 {
      return Err(invalid());
    }
    let (&tail, chars) = raw.split_last().ok_or_else(invalid)?;
    let free = tail.decode_len();
    if free > N {
      return Err(invalid());
    }
    let mut s = Self::new();
    s.chars.copy_from_slice(chars);
    s.set_len(N - free);
    Ok(s)
  }

  // capacity

  /// Returns the number of units in the string.
  #[inline]
  pub fn len(&self) -> usize {
    N - self.tail.decode_len()
  }

  /// Same as [`Self::len`].
  #[inline]
  pub fn size(&self) -> usize {
    self.len()
  }

  /// Returns `true` if the string holds no units.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns the fixed capacity `N`.
  #[inline(always)]
  pub const fn max_size(&self) -> usize {
    N
  }

  /// Same as [`Self::max_size`].
  #[inline(always)]
  pub const fn capacity(&self) -> usize {
    N
  }

  /// Returns how many more units fit.
  #[inline]
  pub fn remaining_capacity(&self) -> usize {
    self.tail.decode_len()
  }

  /// Returns `true` if no more units fit.
  #[inline]
  pub fn is_full(&self) -> bool {
    self.remaining_capacity() == 0
  }

  // element access

  /// Returns the content as a slice.
  #[inline]
  pub fn as_units(&self) -> &[C] {
    let len = self.len();
    &self.chars[..len]
  }

  /// Returns the content as a mutable slice.
  #[inline]
  pub fn as_mut_units(&mut self) -> &mut [C] {
    let len = self.len();
    &mut self.chars[..len]
  }

  /// Returns the content followed by its NUL terminator.
  ///
  /// The terminator is present at every length, including a full string,
  /// whose size-encoding slot reads as NUL.
  #[inline]
  pub fn c_str(&self) -> &[C] {
    let len = self.len();
    &self.as_raw()[..=len]
  }

  /// Returns all `N + 1` units, size-encoding slot included.
  ///
  /// Only the first `len()` units are content; the last unit is the size
  /// slot. A value rebuilt from these units with [`Self::try_from_raw`] is
  /// equal to this one.
  #[inline]
  pub fn as_raw(&self) -> &[C] {
    // SAFETY: `#[repr(C)]` places `tail` right after `chars`; both have the
    // size and alignment of `C`, so the struct is `N + 1` contiguous units.
    unsafe { slice::from_raw_parts(ptr::from_ref(self).cast::<C>(), N + 1) }
  }

  /// Returns the unit at `pos`.
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if `pos >= len()`.
  pub fn at(&self, pos: usize) -> Result<&C> {
    let len = self.len();
    self.as_units().get(pos).ok_or_else(|| Error::out_of_range(pos, len))
  }

  /// Mutable variant of [`Self::at`].
  pub fn at_mut(&mut self, pos: usize) -> Result<&mut C> {
    let len = self.len();
    self
      .as_mut_units()
      .get_mut(pos)
      .ok_or_else(|| Error::out_of_range(pos, len))
  }

  /// Returns the first unit.
  ///
  /// # Panics
  ///
  /// Panics if the string is empty.
  pub fn front(&self) -> &C {
    match self.as_units().first() {
      Some(unit) => unit,
      None => panic!("front() called on an empty inplace string"),
    }
  }

  /// Returns the first unit mutably.
  ///
  /// # Panics
  ///
  /// Panics if the string is empty.
  pub fn front_mut(&mut self) -> &mut C {
    match self.as_mut_units().first_mut() {
      Some(unit) => unit,
      None => panic!("front_mut() called on an empty inplace string"),
    }
  }

  /// Returns the last unit.
  ///
  /// # Panics
  ///
  /// Panics if the string is empty.
  pub fn back(&self) -> &C {
    match self.as_units().last() {
      Some(unit) => unit,
      None => panic!("back() called on an empty inplace string"),
    }
  }

  /// Returns the last unit mutably.
  ///
  /// # Panics
  ///
  /// Panics if the string is empty.
  pub fn back_mut(&mut self) -> &mut C {
    match self.as_mut_units().last_mut() {
      Some(unit) => unit,
      None => panic!("back_mut() called on an empty inplace string"),
    }
  }

  // assignment

  /// Replaces the content with a copy of `units`.
  ///
  /// # Panics
  ///
  /// Panics if `units.len() > N`.
  pub fn assign(&mut self, units: &[C]) {
    let len = units.len();
    assert!(len <= N, "assign: length {len} exceeds capacity {N}");
    self.chars[..len].copy_from_slice(units);
    self.set_len(len);
  }

  /// Fallible twin of [`Self::assign`].
  pub fn try_assign(&mut self, units: &[C]) -> Result<()> {
    if units.len() > N {
      return Err(Error::capacity_exceeded(units.len(), N));
    }
    self.assign(units);
    Ok(())
  }

  /// Replaces the content with the null-terminated prefix of `units`.
  ///
  /// # Panics
  ///
  /// Panics if the prefix is longer than `N`.
  pub fn assign_nul_terminated(&mut self, units: &[C]) {
    let end = units
      .iter()
      .position(|&u| u == C::NUL)
      .unwrap_or(units.len());
    self.assign(&units[..end]);
  }

  /// Replaces the content with the single unit `unit`.
  ///
  /// # Panics
  ///
  /// Panics if `N == 0`.
  #[inline]
  pub fn assign_unit(&mut self, unit: C) {
    self.assign_fill(1, unit);
  }

  /// Replaces the content with `count` copies of `unit`.
  ///
  /// # Panics
  ///
  /// Panics if `count > N`.
  pub fn assign_fill(&mut self, count: usize, unit: C) {
    assert!(count <= N, "assign_fill: length {count} exceeds capacity {N}");
    self.chars[..count].fill(unit);
    self.set_len(count);
  }

  /// Replaces the content with the units yielded by `iter`.
  ///
  /// # Panics
  ///
  /// Panics if `iter` yields more than `N` units. The string is left
  /// unchanged in that case.
  pub fn assign_iter<I>(&mut self, iter: I)
  where
    I: IntoIterator<Item = C>,
  {
    let mut next = Self::new();
    for unit in iter {
      next.push(unit);
    }
    *self = next;
  }

  /// Replaces the content with `count` units of `src` starting at `pos`,
  /// with the same clamping as [`Self::try_from_substr`].
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if `pos > src.len()`, and
  /// [`Error::CapacityExceeded`] if the resulting substring is longer than
  /// `N`. The string is unchanged in both cases.
  ///
  /// ```rust
  /// use inplace_string::InplaceString;
  ///
  /// let mut s = InplaceString::<16>::new();
  /// s.try_assign_substr(&InplaceString::<8>::from_units(b"abcdefgh"), 2, 2)
  ///   .unwrap();
  /// assert_eq!(s, "cd");
  /// ```
  pub fn try_assign_substr<S>(
    &mut self,
    src: &S,
    pos: usize,
    count: usize,
  ) -> Result<()>
  where
    S: AsRef<[C]> + ?Sized,
  {
    let units = substr(src.as_ref(), pos, count)?;
    self.try_assign(units)
  }

  /// Replaces the content with its own substring `[pos, pos + count)`,
  /// clamping `count` like [`Self::try_assign_substr`].
  ///
  /// # Errors
  ///
  /// [`Error::OutOfRange`] if `pos > len()`; the string is unchanged.
  pub fn try_keep_substr(&mut self, pos: usize, count: usize) -> Result<()> {
    let len = self.len();
    if pos > len {
      return Err(Error::out_of_range(pos, len));
    }
    let count = count.min(len - pos);
    self.chars.copy_within(pos..pos + count, 0);
    self.set_len(count);
    Ok(())
  }

  // modifiers

  /// Appends a copy of `units`.
  ///
  /// # Panics
  ///
  /// Panics if the new length would exceed `N`.
  pub fn append(&mut self, units: &[C]) {
    let len = self.len();
    let new_len = len + units.len();
    assert!(new_len <= N, "append: length {new_len} exceeds capacity {N}");
    self.chars[len..new_len].copy_from_slice(units);
    self.set_len(new_len);
  }

  /// Fallible twin of [`Self::append`].
  pub fn try_append(&mut self, units: &[C]) -> Result<()> {
    let new_len = self.len() + units.len();
    if new_len > N {
      return Err(Error::capacity_exceeded(new_len, N));
    }
    self.append(units);
    Ok(())
  }

  /// Appends one unit.
  ///
  /// # Panics
  ///
  /// Panics if the string is full.
  pub fn push(&mut self, unit: C) {
    let len = self.len();
    assert!(len < N, "push: inplace string of capacity {N} is full");
    self.chars[len] = unit;
    self.set_len(len + 1);
  }

  /// Fallible twin of [`Self::push`].
  pub fn try_push(&mut self, unit: C) -> Result<()> {
    if self.is_full() {
      return Err(Error::capacity_exceeded(N + 1, N));
    }
    self.push(unit);
    Ok(())
  }

  /// Removes and returns the last unit.
  pub fn pop(&mut self) -> Option<C> {
    let len = self.len();
    let unit = *self.as_units().last()?;
    self.set_len(len - 1);
    Some(unit)
  }

  /// Sets the length to `n`, truncating or extending with copies of
  /// `fill`.
  ///
  /// # Panics
  ///
  /// Panics if `n > N`.
  ///
  /// ```rust
  /// use inplace_string::InplaceString;
  ///
  /// let mut s = InplaceString::<8>::from_units(b"ab");
  /// s.resize(5, b'$');
  /// assert_eq!(s, "ab$$$");
  /// s.resize(1, b'$');
  /// assert_eq!(s, "a");
  /// ```
  pub fn resize(&mut self, n: usize, fill: C) {
    assert!(n <= N, "resize: length {n} exceeds capacity {N}");
    let len = self.len();
    if n > len {
      self.chars[len..n].fill(fill);
    }
    self.set_len(n);
  }

  /// Sets the length to `n`, extending with NUL units.
  ///
  /// # Panics
  ///
  /// Panics if `n > N`.
  #[inline]
  pub fn resize_nul(&mut self, n: usize) {
    self.resize(n, C::NUL);
  }

  /// Shortens the string to `n` units. Does nothing if `n >= len()`.
  pub fn truncate(&mut self, n: usize) {
    if n < self.len() {
      self.set_len(n);
    }
  }

  /// Removes all content.
  #[inline]
  pub fn clear(&mut self) {
    self.set_len(0);
  }

  /// Exchanges the whole buffers of `self` and `other`, size slots
  /// included.
  #[inline]
  pub fn swap_with(&mut self, other: &mut Self) {
    core::mem::swap(self, other);
  }

  /// Writes the terminator after the content and encodes `len` into the
  /// size slot.
  #[inline]
  fn set_len(&mut self, len: usize) {
    debug_assert!(len <= N);
    if let Some(slot) = self.chars.get_mut(len) {
      *slot = C::NUL;
    }
    self.tail = C::encode_len(N - len);
  }
}

impl<const N: usize> BasicInplaceString<u8, N> {
  /// Creates a string from the bytes of a C string, terminator excluded.
  ///
  /// # Panics
  ///
  /// Panics if the C string is longer than `N` bytes.
  #[inline]
  pub fn from_c_str(s: &CStr) -> Self {
    Self::from_units(s.to_bytes())
  }

  /// Returns the content up to the first NUL byte as a C string.
  pub fn as_c_str(&self) -> &CStr {
    CStr::from_bytes_until_nul(self.c_str()).unwrap_or(c"")
  }

  /// Returns the content as `&str` if it is valid UTF-8.
  #[inline]
  pub fn as_str(&self) -> Result<&str, str::Utf8Error> {
    str::from_utf8(self.as_units())
  }

  /// Returns the content as text, replacing invalid UTF-8 with U+FFFD.
  #[inline]
  pub fn to_string_lossy(&self) -> Cow<'_, str> {
    String::from_utf8_lossy(self.as_units())
  }

  /// Appends the bytes of `s`.
  ///
  /// # Panics
  ///
  /// Panics if the new length would exceed `N`.
  #[inline]
  pub fn push_str(&mut self, s: &str) {
    self.append(s.as_bytes());
  }

  /// Fallible twin of [`Self::push_str`].
  #[inline]
  pub fn try_push_str(&mut self, s: &str) -> Result<()> {
    self.try_append(s.as_bytes())
  }
}

impl<C: CharUnit, const N: usize> Default for BasicInplaceString<C, N> {
  #[inline(always)]
  fn default() -> Self {
    Self::new()
  }
}

impl<C: CharUnit, const N: usize> Deref for BasicInplaceString<C, N> {
  type Target = [C];

  #[inline(always)]
  fn deref(&self) -> &[C] {
    self.as_units()
  }
}

impl<C: CharUnit, const N: usize> DerefMut for BasicInplaceString<C, N> {
  #[inline(always)]
  fn deref_mut(&mut self) -> &mut [C] {
    self.as_mut_units()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use core::mem::size_of;

  type S16 = InplaceString<16>;

  /// Checks the packed-size and terminator invariants.
  fn assert_layout<C: CharUnit, const N: usize>(s: &BasicInplaceString<C, N>) {
    let raw = s.as_raw();
    assert_eq!(raw.len(), N + 1);
    assert!(s.len() <= N);
    assert_eq!(raw[N].decode_len(), N - s.len());
    assert_eq!(raw[s.len()], C::NUL);
  }

  #[test]
  fn layout_is_capacity_plus_one_unit() {
    assert_eq!(size_of::<InplaceString<16>>(), 17);
    assert_eq!(size_of::<InplaceString<0>>(), 1);
    assert_eq!(size_of::<InplaceU16String<7>>(), 16);
    assert_eq!(size_of::<InplaceU32String<3>>(), 16);
  }

  #[test]
  fn default_is_empty_and_terminated() {
    let s = S16::default();
    assert!(s.is_empty());
    assert_eq!(s.len(), 0);
    assert_eq!(s.size(), 0);
    assert_eq!(s.c_str(), b"\0");
    assert_eq!(s.iter().count(), 0);
    assert_eq!(s.as_raw()[16], 16);
    assert_layout(&s);
  }

  #[test]
  fn from_units_copies_exactly() {
    let s = S16::from_units(b"test");
    assert!(!s.is_empty());
    assert_eq!(s.len(), 4);
    assert_eq!(s.c_str(), b"test\0");
    assert_eq!(s.iter().count(), 4);
    assert_layout(&s);

    let empty = S16::from_units(b"");
    assert!(empty.is_empty());
    assert_layout(&empty);
  }

  #[test]
  fn from_units_at_exact_capacity() {
    let s = InplaceString::<4>::from_units(b"test");
    assert_eq!(s.len(), 4);
    assert_eq!(s.max_size(), 4);
    assert!(s.is_full());
    assert_eq!(s.as_units(), b"test");
    assert_eq!(s.c_str(), b"test\0");
    assert_eq!(s.as_raw(), b"test\0");
    assert_layout(&s);
  }

  #[test]
  fn embedded_nuls_are_kept() {
    let src = [b't', 0, b'e', 0, b's', 0, b't', 0];
    let s = S16::from_units(&src);
    assert_eq!(s.len(), 8);
    assert_eq!(s.as_units(), &src);
    assert_eq!(s.as_c_str(), c"t");
    assert_layout(&s);
  }

  #[test]
  fn from_nul_terminated_stops_at_first_nul() {
    let src = [b't', 0, b'e', 0, b's', 0, b't', 0];
    let s = S16::from_nul_terminated(&src);
    assert_eq!(s.len(), 1);
    assert_eq!(s, "t");

    let unterminated = S16::from_nul_terminated(b"test");
    assert_eq!(unterminated, "test");

    let exact = InplaceString::<4>::from_nul_terminated(b"test\0");
    assert_eq!(exact.len(), 4);
  }

  #[test]
  #[should_panic(expected = "exceeds capacity")]
  fn from_units_over_capacity_panics() {
    let _ = InplaceString::<3>::from_units(b"test");
  }

  #[test]
  fn try_from_units_reports_capacity() {
    let err = InplaceString::<3>::try_from_units(b"test").unwrap_err();
    assert_eq!(err, Error::CapacityExceeded { len: 4, capacity: 3 });
  }

  #[test]
  fn from_fill_repeats_unit() {
    let s = S16::from_fill(7, b'$');
    assert_eq!(s.len(), 7);
    assert_eq!(s, "$$$$$$$");
    assert_layout(&s);
  }

  #[test]
  fn substr_offsets() {
    let src = InplaceString::<8>::from_units(b"abcdefgh");

    let s = S16::try_from_substr(&src, 0, NPOS).unwrap();
    assert_eq!(s, "abcdefgh");

    let s = S16::try_from_substr(&src, 3, 2).unwrap();
    assert_eq!(s, "de");

    // offset at the end is an empty result
    let s = S16::try_from_substr(&src, 8, NPOS).unwrap();
    assert!(s.is_empty());

    // count is clamped
    let s = S16::try_from_substr(&src, 6, 10).unwrap();
    assert_eq!(s, "gh");

    let err = S16::try_from_substr(&src, 9, NPOS).unwrap_err();
    assert_eq!(err, Error::OutOfRange { pos: 9, len: 8 });
  }

  #[test]
  fn substr_of_plain_slices() {
    let s = S16::try_from_substr(b"hello world".as_slice(), 6, 3).unwrap();
    assert_eq!(s, "wor");
    let s = S16::try_from_substr("hello".as_bytes(), 1, NPOS).unwrap();
    assert_eq!(s, "ello");
  }

  #[test]
  fn assign_substr_from_other_capacity() {
    let mut a = S16::new();
    a.try_assign_substr(&InplaceString::<8>::from_units(b"abcdefgh"), 2, 2)
      .unwrap();
    assert_eq!(a.len(), 2);
    assert_eq!(a, "cd");
    assert_layout(&a);
  }

  #[test]
  fn failed_assign_substr_leaves_target_unchanged() {
    let mut a = S16::from_units(b"keep");
    let src = InplaceString::<8>::from_units(b"abcdefgh");
    assert!(a.try_assign_substr(&src, 9, 1).is_err());
    assert_eq!(a, "keep");
    assert_layout(&a);
  }

  #[test]
  fn substr_longer_than_capacity_is_an_error() {
    let src = InplaceString::<8>::from_units(b"abcdefgh");
    assert_eq!(
      InplaceString::<4>::try_from_substr(&src, 0, NPOS),
      Err(Error::CapacityExceeded { len: 8, capacity: 4 })
    );
    assert_eq!(
      InplaceString::<4>::try_from_substr(&src, 4, NPOS).unwrap(),
      "efgh"
    );

    let mut target = InplaceString::<4>::from_units(b"keep");
    assert_eq!(
      target.try_assign_substr(&src, 1, NPOS),
      Err(Error::CapacityExceeded { len: 7, capacity: 4 })
    );
    assert_eq!(target, "keep");
    assert_layout(&target);
  }

  #[test]
  fn keep_substr_of_self() {
    let mut s = S16::from_units(b"abcdefgh");
    s.try_keep_substr(2, 3).unwrap();
    assert_eq!(s, "cde");
    assert_layout(&s);

    s.try_keep_substr(1, NPOS).unwrap();
    assert_eq!(s, "de");

    assert!(s.try_keep_substr(3, 0).is_err());
    assert_eq!(s, "de");

    s.try_keep_substr(2, 0).unwrap();
    assert!(s.is_empty());
  }

  #[test]
  fn assignment_replaces_everything() {
    let mut s = S16::from_units(b"a long string");
    s.assign(b"abc");
    assert_eq!(s, "abc");
    assert_layout(&s);

    s.assign_nul_terminated(b"xy\0z");
    assert_eq!(s, "xy");

    s.assign_unit(b'q');
    assert_eq!(s, "q");

    s.assign_fill(3, b'-');
    assert_eq!(s, "---");

    s.assign_iter(b"iter".iter().copied());
    assert_eq!(s, "iter");
    assert_layout(&s);

    let copy = s;
    s.assign(b"");
    assert!(s.is_empty());
    assert_eq!(copy, "iter");
  }

  #[test]
  fn assign_iter_overflow_leaves_target_unchanged() {
    use std::panic::AssertUnwindSafe;

    let mut s = InplaceString::<3>::from_units(b"abc");
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
      s.assign_iter(b"toolong".iter().copied());
    }));
    assert!(result.is_err());
    assert_eq!(s, "abc");
    assert_layout(&s);

    s.assign_iter(b"xyz".iter().copied());
    assert_eq!(s, "xyz");
  }

  #[test]
  fn element_access() {
    let mut s = S16::from_units(b"hello");
    assert_eq!(s[1], b'e');
    assert_eq!(*s.front(), b'h');
    assert_eq!(*s.back(), b'o');
    assert_eq!(s.at(4), Ok(&b'o'));
    assert_eq!(s.at(5), Err(Error::OutOfRange { pos: 5, len: 5 }));

    *s.at_mut(0).unwrap() = b'j';
    *s.back_mut() = b'y';
    *s.front_mut() = b'J';
    s[2] = b'L';
    assert_eq!(s, "JeLly");
    assert!(s.at_mut(16).is_err());
  }

  #[test]
  #[should_panic(expected = "empty")]
  fn front_of_empty_panics() {
    let s = S16::new();
    let _ = s.front();
  }

  #[test]
  fn resize_truncates_and_extends() {
    let mut s = S16::from_units(b"abcdefgh");
    s.resize_nul(5);
    assert_eq!(s.len(), 5);
    assert_eq!(s[3], b'd');
    assert_eq!(s.as_raw()[5], 0);

    s.truncate(3);
    s.resize_nul(5);
    assert_eq!(s.len(), 5);
    assert_eq!(s[3], 0);
    assert_eq!(s[4], 0);
    assert_layout(&s);

    s.resize(8, b'x');
    assert_eq!(s.as_units(), b"abc\0\0xxx");
    assert_layout(&s);

    s.resize(16, b'y');
    assert!(s.is_full());
    assert_layout(&s);
  }

  #[test]
  #[should_panic(expected = "resize")]
  fn resize_over_capacity_panics() {
    let mut s = InplaceString::<4>::new();
    s.resize(5, b' ');
  }

  #[test]
  fn append_push_pop() {
    let mut s = InplaceString::<6>::from_units(b"ab");
    s.append(b"cd");
    s.push(b'e');
    s.push_str("f");
    assert!(s.is_full());
    assert_eq!(s, "abcdef");
    assert_layout(&s);

    assert_eq!(s.try_push(b'g'), Err(Error::CapacityExceeded { len: 7, capacity: 6 }));
    assert!(s.try_append(b"gh").is_err());
    assert!(s.try_push_str("g").is_err());
    assert_eq!(s, "abcdef");

    assert_eq!(s.pop(), Some(b'f'));
    assert_eq!(s.remaining_capacity(), 1);
    assert_layout(&s);
    s.clear();
    assert_eq!(s.pop(), None);
  }

  #[test]
  fn clear_is_idempotent() {
    let mut s = S16::from_units(b"abc");
    s.clear();
    let once = s;
    s.clear();
    assert_eq!(s.as_raw(), once.as_raw());
    assert!(s.is_empty());
    assert_eq!(s.c_str(), b"\0");
  }

  #[test]
  fn swap_exchanges_whole_buffers() {
    let mut a = S16::from_units(b"first");
    let mut b = S16::from_units(b"second one");
    let (raw_a, raw_b) = (a, b);
    a.swap_with(&mut b);
    assert_eq!(a.as_raw(), raw_b.as_raw());
    assert_eq!(b.as_raw(), raw_a.as_raw());
  }

  #[test]
  fn raw_layout_rebuilds_the_value() {
    let s = S16::from_units(b"a\0b");
    let copy = S16::try_from_raw(s.as_raw()).unwrap();
    assert_eq!(copy.as_raw(), s.as_raw());
    assert_eq!(copy.len(), 3);

    assert_eq!(
      S16::try_from_raw(&s.as_raw()[..16]),
      Err(Error::InvalidLayout { len: 16, capacity: 16 })
    );

    let mut bad = [0u8; 17];
    bad[16] = 17;
    assert!(S16::try_from_raw(&bad).is_err());
  }

  #[test]
  fn wide_units() {
    let units: [u16; 3] = [0x68, 0x20AC, 0x69];
    let mut s = InplaceU16String::<300>::from_units(&units);
    assert_eq!(s.len(), 3);
    assert_eq!(s.as_raw()[300], 297);
    s.resize(299, 0x2E);
    assert_eq!(s.len(), 299);
    assert_layout(&s);

    let w = InplaceU32String::<4>::from_fill(4, 0x1F600);
    assert!(w.is_full());
    assert_eq!(w.c_str().last(), Some(&0));
    assert_layout(&w);
  }

  #[test]
  fn zero_capacity() {
    let mut s = InplaceString::<0>::new();
    assert!(s.is_empty());
    assert!(s.is_full());
    assert_eq!(s.c_str(), b"\0");
    assert!(s.try_push(b'a').is_err());
    s.clear();
    assert_eq!(s.len(), 0);
  }

  #[test]
  fn c_string_interop() {
    let s = S16::from_c_str(c"hello");
    assert_eq!(s, "hello");
    assert_eq!(s.as_c_str(), c"hello");
    assert_eq!(s.as_str(), Ok("hello"));

    let bad = S16::from_units(&[0x66, 0xFF]);
    assert!(bad.as_str().is_err());
    assert_eq!(bad.to_string_lossy(), "f\u{FFFD}");
  }
}
