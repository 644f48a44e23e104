use std::fmt::Display;

/// Why an integer could not be extracted.
///
/// On the pattern matching path every one of these is an ordinary "clause does
/// not match" outcome, see [crate::extract_integer].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
	/// width outside of 1..=64
	InvalidWidth(u32),
	OutOfBounds {
		bit_offset: u64,
		width: u32,
		available: u64,
	},
	/// the bit offset is not a multiple of 8
	Unaligned(u64),
	/// 64 bit signed extraction with the sign bit set
	NegativeInt64,
}

impl Display for ExtractError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::InvalidWidth(width) => write!(f, "unsupported integer width {width}, expected 1..=64"),
			Self::OutOfBounds {
				bit_offset,
				width,
				available,
			} => write!(
				f,
				"{width} bits at offset {bit_offset} exceed the binary ({available} bits available)"
			),
			Self::Unaligned(bit_offset) => write!(f, "bit offset {bit_offset} is not byte aligned"),
			Self::NegativeInt64 => write!(f, "signed 64 bit integer has its sign bit set"),
		}
	}
}

impl std::error::Error for ExtractError {}
