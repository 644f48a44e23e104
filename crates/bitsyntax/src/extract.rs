use tracing::*;

use crate::error::ExtractError;
use crate::flags::{BitstringFlags, Signedness};
use crate::generic::try_extract_any_integer;
use crate::read::{read_u16, read_u32, read_u64, read_u8};
use crate::term::BinaryTerm;
use crate::value::{reinterpret_u16, reinterpret_u32, reinterpret_u64, reinterpret_u8, TaggedInt};

/// Extracts the integer field of `width` bits found `bit_offset` bits into `term`.
///
/// This is the `bs_get_integer` primitive: a `None` simply means the clause
/// does not match. Only byte aligned offsets are supported, an unaligned
/// offset never matches regardless of width. Signed 64 bit fields only match
/// when the value is non-negative.
#[inline]
pub fn extract_integer<T: BinaryTerm + ?Sized>(
	term: &T,
	bit_offset: u64,
	width: u32,
	flags: BitstringFlags,
) -> Option<TaggedInt> {
	match try_extract_integer(term, bit_offset, width, flags) {
		Ok(val) => Some(val),
		Err(err) => {
			trace!("no match: {err}");
			None
		}
	}
}

/// Same as [extract_integer] but reports why nothing was extracted.
pub fn try_extract_integer<T: BinaryTerm + ?Sized>(
	term: &T,
	bit_offset: u64,
	width: u32,
	flags: BitstringFlags,
) -> Result<TaggedInt, ExtractError> {
	if width == 0 || width > u64::BITS {
		return Err(ExtractError::InvalidWidth(width));
	}

	let total_bits = (term.byte_len() as u64).saturating_mul(8);
	// offset is compared on its own first, the subtraction below can't wrap
	if bit_offset > total_bits {
		return Err(ExtractError::OutOfBounds {
			bit_offset,
			width,
			available: 0,
		});
	}
	let available = total_bits - bit_offset;
	if available < u64::from(width) {
		return Err(ExtractError::OutOfBounds {
			bit_offset,
			width,
			available,
		});
	}

	if bit_offset % 8 != 0 {
		return Err(ExtractError::Unaligned(bit_offset));
	}

	// INVARIANT: bit_offset <= total_bits, so the byte offset fits the slice
	let byte_offset = (bit_offset / 8) as usize;
	let src = &term.data()[byte_offset..];
	extract_aligned(src, width, flags)
}

fn extract_aligned(src: &[u8], width: u32, flags: BitstringFlags) -> Result<TaggedInt, ExtractError> {
	let short = || ExtractError::OutOfBounds {
		bit_offset: 0,
		width,
		available: src.len() as u64 * 8,
	};
	let signed = flags.signedness() == Signedness::Signed;
	let endianness = flags.endianness();

	let val = match width {
		8 => {
			let raw = read_u8(src).ok_or_else(short)?;
			if signed {
				TaggedInt::Signed(reinterpret_u8(raw).into())
			} else {
				TaggedInt::Unsigned(raw.into())
			}
		}
		16 => {
			let raw = read_u16(src, endianness).ok_or_else(short)?;
			if signed {
				TaggedInt::Signed(reinterpret_u16(raw).into())
			} else {
				TaggedInt::Unsigned(raw.into())
			}
		}
		32 => {
			let raw = read_u32(src, endianness).ok_or_else(short)?;
			if signed {
				TaggedInt::Signed(reinterpret_u32(raw).into())
			} else {
				TaggedInt::Unsigned(raw.into())
			}
		}
		64 => {
			let raw = read_u64(src, endianness).ok_or_else(short)?;
			if signed {
				// negative 64 bit values are not representable here
				if raw & (1 << 63) != 0 {
					debug!("rejecting signed 64 bit field {raw:#018X}");
					return Err(ExtractError::NegativeInt64);
				}
				TaggedInt::Signed(reinterpret_u64(raw))
			} else {
				TaggedInt::Unsigned(raw)
			}
		}
		_ => return try_extract_any_integer(src, 0, width, flags),
	};

	trace!("aligned extract of {width} bits: {val:?}");
	Ok(val)
}
