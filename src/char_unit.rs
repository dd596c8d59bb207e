//! Character units and the width of the size-encoding slot.
//!
//! A [`BasicInplaceString`](crate::BasicInplaceString) keeps its length in
//! its last unit, so the unit type itself decides how large a capacity can
//! be encoded: one byte for `u8`, two for `u16`, four for `u32`.

use core::char;
use core::fmt;
use core::fmt::Formatter;
use core::fmt::Write;
use core::hash::Hash;

mod sealed {
  pub trait Sealed {}

  impl Sealed for u8 {}
  impl Sealed for u16 {}
  impl Sealed for u32 {}
}

/// Element type of an inplace string.
///
/// This trait is sealed; it is implemented for `u8` (UTF-8 code units),
/// `u16` (UTF-16 code units) and `u32` (UTF-32 code units).
pub trait CharUnit:
  Copy + Eq + Ord + Hash + Default + fmt::Debug + sealed::Sealed + 'static
{
  /// The null terminator.
  const NUL: Self;

  /// Largest capacity the size-encoding slot can represent.
  const MAX_CAPACITY: usize;

  /// Encodes `n` into a unit. `n` must not exceed [`Self::MAX_CAPACITY`].
  fn encode_len(n: usize) -> Self;

  /// Decodes a unit written by [`Self::encode_len`].
  fn decode_len(self) -> usize;

  /// Writes `units` as text, replacing invalid sequences with U+FFFD.
  fn fmt_display(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result;

  /// Writes `units` as a quoted, escaped literal.
  fn fmt_debug(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result;
}

/// `min(MAX, usize::MAX)` without truncating on narrow targets.
const fn max_capacity(max: u64) -> usize {
  if max > usize::MAX as u64 {
    usize::MAX
  } else {
    max as usize
  }
}

fn write_escaped(
  chars: impl Iterator<Item = char>,
  f: &mut Formatter<'_>,
) -> fmt::Result {
  f.write_char('"')?;
  for c in chars {
    for e in c.escape_debug() {
      f.write_char(e)?;
    }
  }
  f.write_char('"')
}

impl CharUnit for u8 {
  const NUL: Self = 0;
  const MAX_CAPACITY: usize = max_capacity(u8::MAX as u64);

  #[inline(always)]
  fn encode_len(n: usize) -> Self {
    debug_assert!(n <= Self::MAX_CAPACITY);
    n as u8
  }

  #[inline(always)]
  fn decode_len(self) -> usize {
    self as usize
  }

  fn fmt_display(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    for chunk in units.utf8_chunks() {
      f.write_str(chunk.valid())?;
      if !chunk.invalid().is_empty() {
        f.write_char(char::REPLACEMENT_CHARACTER)?;
      }
    }
    Ok(())
  }

  /// Valid UTF-8 is shown as escaped text; invalid bytes as `\xNN`.
  fn fmt_debug(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for chunk in units.utf8_chunks() {
      for c in chunk.valid().chars() {
        for e in c.escape_debug() {
          f.write_char(e)?;
        }
      }
      for b in chunk.invalid() {
        write!(f, "\\x{b:02x}")?;
      }
    }
    f.write_char('"')
  }
}

impl CharUnit for u16 {
  const NUL: Self = 0;
  const MAX_CAPACITY: usize = max_capacity(u16::MAX as u64);

  #[inline(always)]
  fn encode_len(n: usize) -> Self {
    debug_assert!(n <= Self::MAX_CAPACITY);
    n as u16
  }

  #[inline(always)]
  fn decode_len(self) -> usize {
    self as usize
  }

  fn fmt_display(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    for c in char::decode_utf16(units.iter().copied()) {
      f.write_char(c.unwrap_or(char::REPLACEMENT_CHARACTER))?;
    }
    Ok(())
  }

  fn fmt_debug(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    write_escaped(
      char::decode_utf16(units.iter().copied())
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)),
      f,
    )
  }
}

impl CharUnit for u32 {
  const NUL: Self = 0;
  const MAX_CAPACITY: usize = max_capacity(u32::MAX as u64);

  #[inline(always)]
  fn encode_len(n: usize) -> Self {
    debug_assert!(n <= Self::MAX_CAPACITY);
    n as u32
  }

  #[inline(always)]
  fn decode_len(self) -> usize {
    self as usize
  }

  fn fmt_display(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    for &u in units {
      f.write_char(char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))?;
    }
    Ok(())
  }

  fn fmt_debug(units: &[Self], f: &mut Formatter<'_>) -> fmt::Result {
    write_escaped(
      units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER)),
      f,
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn size_slot_width_follows_unit_width() {
    assert_eq!(<u8 as CharUnit>::MAX_CAPACITY, 255);
    assert_eq!(<u16 as CharUnit>::MAX_CAPACITY, 65_535);
    #[cfg(target_pointer_width = "64")]
    assert_eq!(<u32 as CharUnit>::MAX_CAPACITY, u32::MAX as usize);
  }

  #[test]
  fn encode_then_decode_len() {
    assert_eq!(u8::encode_len(200).decode_len(), 200);
    assert_eq!(u16::encode_len(40_000).decode_len(), 40_000);
    assert_eq!(u32::encode_len(0).decode_len(), 0);
  }

  struct Debugged<'a, C: CharUnit>(&'a [C]);

  impl<C: CharUnit> fmt::Debug for Debugged<'_, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
      C::fmt_debug(self.0, f)
    }
  }

  #[test]
  fn byte_debug_shows_utf8_as_text() {
    use alloc::format;

    let units = "é\n\"".as_bytes();
    assert_eq!(format!("{:?}", Debugged(units)), r#""é\n\"""#);
    assert_eq!(
      format!("{:?}", Debugged(&[b'a', 0xFF, 0xC3, b'b'][..])),
      r#""a\xff\xc3b""#
    );
  }

  #[test]
  fn encoded_zero_is_the_terminator() {
    assert_eq!(u8::encode_len(0), u8::NUL);
    assert_eq!(u16::encode_len(0), u16::NUL);
    assert_eq!(u32::encode_len(0), u32::NUL);
  }
}
