//! Arbitrary width integer extraction.
//!
//! Bits are numbered most significant first within each byte, matching the
//! bit-syntax view of a binary as one long bit string.

use tracing::*;

use crate::error::ExtractError;
use crate::flags::{BitstringFlags, Endianness, Signedness};
use crate::value::{sign_extend, TaggedInt};

/// Extracts a `width` bit integer starting `bit_offset` bits into `src`.
///
/// Big endian fields are read as a single run of bits. Little endian fields are
/// cut into 8 bit chunks from the start of the range, the first chunk holding
/// the least significant byte; when `width` is not a multiple of 8 the final,
/// shorter chunk holds the most significant bits.
pub fn try_extract_any_integer(
	src: &[u8],
	bit_offset: usize,
	width: u32,
	flags: BitstringFlags,
) -> Result<TaggedInt, ExtractError> {
	if width == 0 || width > u64::BITS {
		return Err(ExtractError::InvalidWidth(width));
	}

	let total_bits = (src.len() as u64).saturating_mul(8);
	let bit_offset_u64 = bit_offset as u64;
	if bit_offset_u64 > total_bits || total_bits - bit_offset_u64 < u64::from(width) {
		return Err(ExtractError::OutOfBounds {
			bit_offset: bit_offset_u64,
			width,
			available: total_bits.saturating_sub(bit_offset_u64),
		});
	}

	let raw = match flags.endianness() {
		Endianness::Big => take_bits(src, bit_offset, width),
		Endianness::Little => {
			let mut raw = 0_u64;
			let mut pos = bit_offset;
			let mut shift = 0_u32;
			let mut remaining = width;
			while remaining > 0 {
				let chunk_width = remaining.min(8);
				raw |= take_bits(src, pos, chunk_width) << shift;
				pos += chunk_width as usize;
				shift += 8;
				remaining -= chunk_width;
			}
			raw
		}
	};

	trace!("generic extract of {width} bits @ bit {bit_offset}: {raw:#018X}");

	Ok(match flags.signedness() {
		Signedness::Unsigned => TaggedInt::Unsigned(raw),
		Signedness::Signed => TaggedInt::Signed(sign_extend(raw, width)),
	})
}

pub fn extract_any_integer(src: &[u8], bit_offset: usize, width: u32, flags: BitstringFlags) -> Option<TaggedInt> {
	try_extract_any_integer(src, bit_offset, width, flags).ok()
}

/// reads `count` (<= 64) bits MSB first, the caller has checked the range
fn take_bits(src: &[u8], mut pos: usize, mut count: u32) -> u64 {
	let mut acc = 0_u64;
	while count > 0 {
		let byte = src[pos / 8];
		// bits of this byte that are still ahead of pos
		let avail = 8 - (pos % 8) as u32;
		let take = avail.min(count);
		let chunk = (byte >> (avail - take)) & (0xFF_u8 >> (8 - take));
		acc = (acc << take) | u64::from(chunk);
		pos += take as usize;
		count -= take;
	}
	acc
}

#[cfg(test)]
mod tests {
	use super::*;

	const BE_UNSIGNED: BitstringFlags = BitstringFlags::empty();
	const BE_SIGNED: BitstringFlags = BitstringFlags::SIGNED_INTEGER;
	const LE_UNSIGNED: BitstringFlags = BitstringFlags::LITTLE_ENDIAN_INTEGER;

	#[test]
	fn test_take_bits() {
		let buf = [0b1010_1100, 0b0101_0011];
		assert_eq!(take_bits(&buf, 0, 1), 1);
		assert_eq!(take_bits(&buf, 1, 3), 0b010);
		assert_eq!(take_bits(&buf, 4, 8), 0b1100_0101);
		assert_eq!(take_bits(&buf, 0, 16), 0b1010_1100_0101_0011);
		assert_eq!(take_bits(&buf, 15, 1), 1);
	}

	#[test]
	fn test_odd_widths_big_endian() {
		let buf = [0xAB, 0xCD, 0xEF];
		assert_eq!(extract_any_integer(&buf, 0, 12, BE_UNSIGNED), Some(TaggedInt::Unsigned(0xABC)));
		assert_eq!(extract_any_integer(&buf, 0, 24, BE_UNSIGNED), Some(TaggedInt::Unsigned(0xABCDEF)));
		assert_eq!(extract_any_integer(&buf, 0, 4, BE_UNSIGNED), Some(TaggedInt::Unsigned(0xA)));
		assert_eq!(extract_any_integer(&buf, 0, 4, BE_SIGNED), Some(TaggedInt::Signed(-6)));
		assert_eq!(extract_any_integer(&buf, 0, 12, BE_SIGNED), Some(TaggedInt::Signed(0xABC - 0x1000)));
	}

	#[test]
	fn test_sub_byte_offset() {
		let buf = [0x0F, 0xF0];
		assert_eq!(extract_any_integer(&buf, 4, 8, BE_UNSIGNED), Some(TaggedInt::Unsigned(0xFF)));
		assert_eq!(extract_any_integer(&buf, 4, 8, BE_SIGNED), Some(TaggedInt::Signed(-1)));
		assert_eq!(extract_any_integer(&buf, 3, 2, BE_UNSIGNED), Some(TaggedInt::Unsigned(0b01)));
	}

	#[test]
	fn test_little_endian_chunks() {
		// 24 bit little endian
		let buf = [0x01, 0x02, 0x03];
		assert_eq!(extract_any_integer(&buf, 0, 24, LE_UNSIGNED), Some(TaggedInt::Unsigned(0x030201)));

		// 12 bits: a full low byte followed by the 4 high bits
		let buf = [0x12, 0x30];
		assert_eq!(extract_any_integer(&buf, 0, 12, LE_UNSIGNED), Some(TaggedInt::Unsigned(0x312)));

		let flags = LE_UNSIGNED | BitstringFlags::SIGNED_INTEGER;
		let buf = [0xFE, 0xFF, 0xFF];
		assert_eq!(extract_any_integer(&buf, 0, 24, flags), Some(TaggedInt::Signed(-2)));
	}

	#[test]
	fn test_agrees_with_fixed_widths() {
		let buf = [0x80, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07];
		let signed_be = BitstringFlags::SIGNED_INTEGER;
		assert_eq!(extract_any_integer(&buf, 0, 16, signed_be), Some(TaggedInt::Signed(i16::MIN as i64 + 1)));
		assert_eq!(
			extract_any_integer(&buf, 0, 32, LE_UNSIGNED),
			Some(TaggedInt::Unsigned(u32::from_le_bytes([0x80, 0x01, 0x02, 0x03]) as u64))
		);
		assert_eq!(
			extract_any_integer(&buf, 0, 64, BE_UNSIGNED),
			Some(TaggedInt::Unsigned(u64::from_be_bytes(buf)))
		);
		assert_eq!(
			extract_any_integer(&buf, 0, 64, signed_be),
			Some(TaggedInt::Signed(i64::from_be_bytes(buf)))
		);
	}

	#[test]
	fn test_failures() {
		let buf = [0xFF, 0xFF];
		assert_eq!(
			try_extract_any_integer(&buf, 4, 13, BE_UNSIGNED),
			Err(ExtractError::OutOfBounds {
				bit_offset: 4,
				width: 13,
				available: 12
			})
		);
		assert_eq!(
			try_extract_any_integer(&buf, 100, 1, BE_UNSIGNED),
			Err(ExtractError::OutOfBounds {
				bit_offset: 100,
				width: 1,
				available: 0
			})
		);
		assert_eq!(try_extract_any_integer(&buf, 0, 0, BE_UNSIGNED), Err(ExtractError::InvalidWidth(0)));
		assert_eq!(try_extract_any_integer(&[0; 16], 0, 65, BE_UNSIGNED), Err(ExtractError::InvalidWidth(65)));
		assert_eq!(extract_any_integer(&[], 0, 1, BE_UNSIGNED), None);
	}
}
