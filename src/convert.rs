//! Formatting, iteration and conversions.

use alloc::borrow::Borrow;
use alloc::borrow::BorrowMut;
use alloc::string::String;
use alloc::vec::Vec;
use core::array;
use core::convert::AsMut;
use core::convert::AsRef;
use core::convert::From;
use core::convert::TryFrom;
use core::ffi::CStr;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::fmt::Formatter;
use core::iter::FromIterator;
use core::iter::Take;
use core::slice;
use core::str;
use core::str::FromStr;

use crate::char_unit::CharUnit;
use crate::error::Error;
use crate::inplace_string::BasicInplaceString;

impl<C: CharUnit, const N: usize> Display for BasicInplaceString<C, N> {
  /// Writes the content up to the first NUL unit, the way a
  /// null-terminated consumer of [`c_str`](BasicInplaceString::c_str)
  /// would see it.
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let units = self.as_units();
    let end = units
      .iter()
      .position(|&u| u == C::NUL)
      .unwrap_or(units.len());
    C::fmt_display(&units[..end], f)
  }
}

impl<C: CharUnit, const N: usize> Debug for BasicInplaceString<C, N> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    C::fmt_debug(self.as_units(), f)
  }
}

impl<C: CharUnit, const N: usize> AsRef<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn as_ref(&self) -> &[C] {
    self.as_units()
  }
}

impl<C: CharUnit, const N: usize> AsMut<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn as_mut(&mut self) -> &mut [C] {
    self.as_mut_units()
  }
}

impl<C: CharUnit, const N: usize> Borrow<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn borrow(&self) -> &[C] {
    self.as_units()
  }
}

impl<C: CharUnit, const N: usize> BorrowMut<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn borrow_mut(&mut self) -> &mut [C] {
    self.as_mut_units()
  }
}

// heap copies

impl<C: CharUnit, const N: usize> From<BasicInplaceString<C, N>> for Vec<C> {
  #[inline(always)]
  fn from(s: BasicInplaceString<C, N>) -> Self {
    s.as_units().to_vec()
  }
}

impl<C: CharUnit, const N: usize> From<&BasicInplaceString<C, N>> for Vec<C> {
  #[inline(always)]
  fn from(s: &BasicInplaceString<C, N>) -> Self {
    s.as_units().to_vec()
  }
}

impl<const N: usize> TryFrom<&BasicInplaceString<u8, N>> for String {
  type Error = str::Utf8Error;

  #[inline]
  fn try_from(s: &BasicInplaceString<u8, N>) -> Result<Self, Self::Error> {
    s.as_str().map(String::from)
  }
}

impl<const N: usize> TryFrom<BasicInplaceString<u8, N>> for String {
  type Error = str::Utf8Error;

  #[inline]
  fn try_from(s: BasicInplaceString<u8, N>) -> Result<Self, Self::Error> {
    String::try_from(&s)
  }
}

// construction

impl<C: CharUnit, const N: usize, const M: usize> From<[C; M]>
  for BasicInplaceString<C, N>
{
  /// Builds a string from a literal list of units; `M <= N` is checked at
  /// compile time.
  #[inline]
  fn from(units: [C; M]) -> Self {
    const { assert!(M <= N, "literal list is longer than the capacity") };
    Self::from_units(&units)
  }
}

impl<C: CharUnit, const N: usize> TryFrom<&[C]> for BasicInplaceString<C, N> {
  type Error = Error;

  #[inline(always)]
  fn try_from(units: &[C]) -> Result<Self, Error> {
    Self::try_from_units(units)
  }
}

impl<const N: usize> TryFrom<&str> for BasicInplaceString<u8, N> {
  type Error = Error;

  #[inline(always)]
  fn try_from(s: &str) -> Result<Self, Error> {
    Self::try_from_units(s.as_bytes())
  }
}

impl<const N: usize> TryFrom<&CStr> for BasicInplaceString<u8, N> {
  type Error = Error;

  #[inline(always)]
  fn try_from(s: &CStr) -> Result<Self, Error> {
    Self::try_from_units(s.to_bytes())
  }
}

impl<const N: usize> FromStr for BasicInplaceString<u8, N> {
  type Err = Error;

  #[inline(always)]
  fn from_str(s: &str) -> Result<Self, Error> {
    Self::try_from(s)
  }
}

impl<const N: usize> fmt::Write for BasicInplaceString<u8, N> {
  /// Appends `s`, failing without writing anything if it does not fit.
  #[inline]
  fn write_str(&mut self, s: &str) -> fmt::Result {
    self.try_push_str(s).map_err(|_| fmt::Error)
  }
}

impl<C: CharUnit, const N: usize> FromIterator<C> for BasicInplaceString<C, N> {
  /// # Panics
  ///
  /// Panics if the iterator yields more than `N` units.
  fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
    let mut s = Self::new();
    s.assign_iter(iter);
    s
  }
}

impl<C: CharUnit, const N: usize> Extend<C> for BasicInplaceString<C, N> {
  /// # Panics
  ///
  /// Panics once the string is full.
  fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
    for unit in iter {
      self.push(unit);
    }
  }
}

impl<'a, C: CharUnit, const N: usize> Extend<&'a C>
  for BasicInplaceString<C, N>
{
  fn extend<I: IntoIterator<Item = &'a C>>(&mut self, iter: I) {
    self.extend(iter.into_iter().copied());
  }
}

// iteration

impl<C: CharUnit, const N: usize> IntoIterator for BasicInplaceString<C, N> {
  type Item = C;
  type IntoIter = Take<array::IntoIter<C, N>>;

  /// Iterates the content by value; the units past the end and the size
  /// slot are never yielded.
  fn into_iter(self) -> Self::IntoIter {
    let len = self.len();
    let mut units = [C::NUL; N];
    units.copy_from_slice(&self.as_raw()[..N]);
    units.into_iter().take(len)
  }
}

impl<'a, C: CharUnit, const N: usize> IntoIterator
  for &'a BasicInplaceString<C, N>
{
  type Item = &'a C;
  type IntoIter = slice::Iter<'a, C>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.as_units().iter()
  }
}

impl<'a, C: CharUnit, const N: usize> IntoIterator
  for &'a mut BasicInplaceString<C, N>
{
  type Item = &'a mut C;
  type IntoIter = slice::IterMut<'a, C>;

  #[inline(always)]
  fn into_iter(self) -> Self::IntoIter {
    self.as_mut_units().iter_mut()
  }
}
