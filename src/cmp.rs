//! Equality, ordering and hashing.
//!
//! Every comparison looks at the logical content only: two strings are
//! equal when they hold the same units, whatever their capacities or the
//! stale units past their ends. Ordering is lexicographic, so a proper
//! prefix orders first.

use core::cmp::Ordering;
use core::ffi::CStr;
use core::hash::Hash;
use core::hash::Hasher;

use crate::char_unit::CharUnit;
use crate::inplace_string::BasicInplaceString;

impl<C: CharUnit, const N: usize, const M: usize>
  PartialEq<BasicInplaceString<C, M>> for BasicInplaceString<C, N>
{
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<C, M>) -> bool {
    self.as_units() == other.as_units()
  }
}

impl<C: CharUnit, const N: usize> Eq for BasicInplaceString<C, N> {}

impl<C: CharUnit, const N: usize, const M: usize>
  PartialOrd<BasicInplaceString<C, M>> for BasicInplaceString<C, N>
{
  #[inline(always)]
  fn partial_cmp(&self, other: &BasicInplaceString<C, M>) -> Option<Ordering> {
    Some(self.as_units().cmp(other.as_units()))
  }
}

impl<C: CharUnit, const N: usize> Ord for BasicInplaceString<C, N> {
  #[inline(always)]
  fn cmp(&self, other: &Self) -> Ordering {
    self.as_units().cmp(other.as_units())
  }
}

impl<C: CharUnit, const N: usize> Hash for BasicInplaceString<C, N> {
  #[inline(always)]
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.as_units().hash(state);
  }
}

// unit slices

impl<C: CharUnit, const N: usize> PartialEq<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn eq(&self, other: &[C]) -> bool {
    self.as_units() == other
  }
}

impl<C: CharUnit, const N: usize> PartialEq<&[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn eq(&self, other: &&[C]) -> bool {
    self.as_units() == *other
  }
}

impl<C: CharUnit, const N: usize, const K: usize> PartialEq<[C; K]>
  for BasicInplaceString<C, N>
{
  #[inline(always)]
  fn eq(&self, other: &[C; K]) -> bool {
    self.as_units() == other.as_slice()
  }
}

impl<C: CharUnit, const N: usize, const K: usize> PartialEq<&[C; K]>
  for BasicInplaceString<C, N>
{
  #[inline(always)]
  fn eq(&self, other: &&[C; K]) -> bool {
    self.as_units() == other.as_slice()
  }
}

impl<C: CharUnit, const N: usize> PartialEq<BasicInplaceString<C, N>> for [C] {
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<C, N>) -> bool {
    self == other.as_units()
  }
}

impl<C: CharUnit, const N: usize> PartialEq<BasicInplaceString<C, N>> for &[C] {
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<C, N>) -> bool {
    *self == other.as_units()
  }
}

impl<C: CharUnit, const N: usize> PartialOrd<[C]> for BasicInplaceString<C, N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &[C]) -> Option<Ordering> {
    Some(self.as_units().cmp(other))
  }
}

impl<C: CharUnit, const N: usize> PartialOrd<BasicInplaceString<C, N>> for [C] {
  #[inline(always)]
  fn partial_cmp(&self, other: &BasicInplaceString<C, N>) -> Option<Ordering> {
    Some(self.cmp(other.as_units()))
  }
}

// text, for byte strings

impl<const N: usize> PartialEq<str> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn eq(&self, other: &str) -> bool {
    self.as_units() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<&str> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn eq(&self, other: &&str) -> bool {
    self.as_units() == other.as_bytes()
  }
}

impl<const N: usize> PartialEq<BasicInplaceString<u8, N>> for str {
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<u8, N>) -> bool {
    self.as_bytes() == other.as_units()
  }
}

impl<const N: usize> PartialEq<BasicInplaceString<u8, N>> for &str {
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<u8, N>) -> bool {
    self.as_bytes() == other.as_units()
  }
}

impl<const N: usize> PartialOrd<str> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &str) -> Option<Ordering> {
    Some(self.as_units().cmp(other.as_bytes()))
  }
}

impl<const N: usize> PartialOrd<&str> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &&str) -> Option<Ordering> {
    Some(self.as_units().cmp(other.as_bytes()))
  }
}

impl<const N: usize> PartialOrd<BasicInplaceString<u8, N>> for str {
  #[inline(always)]
  fn partial_cmp(&self, other: &BasicInplaceString<u8, N>) -> Option<Ordering> {
    Some(self.as_bytes().cmp(other.as_units()))
  }
}

impl<const N: usize> PartialOrd<BasicInplaceString<u8, N>> for &str {
  #[inline(always)]
  fn partial_cmp(&self, other: &BasicInplaceString<u8, N>) -> Option<Ordering> {
    Some(self.as_bytes().cmp(other.as_units()))
  }
}

// null-terminated sources

impl<const N: usize> PartialEq<CStr> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn eq(&self, other: &CStr) -> bool {
    self.as_units() == other.to_bytes()
  }
}

impl<const N: usize> PartialEq<&CStr> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn eq(&self, other: &&CStr) -> bool {
    self.as_units() == other.to_bytes()
  }
}

impl<const N: usize> PartialEq<BasicInplaceString<u8, N>> for CStr {
  #[inline(always)]
  fn eq(&self, other: &BasicInplaceString<u8, N>) -> bool {
    self.to_bytes() == other.as_units()
  }
}

impl<const N: usize> PartialOrd<CStr> for BasicInplaceString<u8, N> {
  #[inline(always)]
  fn partial_cmp(&self, other: &CStr) -> Option<Ordering> {
    Some(self.as_units().cmp(other.to_bytes()))
  }
}

impl<const N: usize> PartialOrd<BasicInplaceString<u8, N>> for CStr {
  #[inline(always)]
  fn partial_cmp(&self, other: &BasicInplaceString<u8, N>) -> Option<Ordering> {
    Some(self.to_bytes().cmp(other.as_units()))
  }
}
