//! Unaligned fixed-width reads out of a byte slice.
//!
//! Bytes are always taken in buffer order and then assembled according to the
//! requested [Endianness], so the host byte order never leaks into a result.

use crate::flags::Endianness;

pub fn read_u8(src: &[u8]) -> Option<u8> {
	src.first().copied()
}

macro_rules! impl_unaligned_read {
	($($ty:ident),*) => {
		$(paste::paste! {
			#[doc = "reads a `" $ty "` from the start of `src`, which need not be aligned"]
			#[inline(always)]
			pub fn [<read_ $ty>](src: &[u8], endianness: Endianness) -> Option<$ty> {
				let bytes = *src.first_chunk::<{ std::mem::size_of::<$ty>() }>()?;
				Some(match endianness {
					Endianness::Big => <$ty>::from_be_bytes(bytes),
					Endianness::Little => <$ty>::from_le_bytes(bytes),
				})
			}
		})*
	};
}

impl_unaligned_read!(u16, u32, u64);
