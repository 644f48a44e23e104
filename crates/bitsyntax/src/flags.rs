use std::fmt::Debug;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Byte order used when assembling a multi-byte integer
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endianness {
	/// lowest address is the most significant byte (buffer order)
	#[default]
	Big,
	/// lowest address is the least significant byte
	Little,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
	#[default]
	Unsigned,
	/// two's-complement, sign extended from the highest extracted bit
	Signed,
}

/// The flag word carried by the bit-syntax opcodes.
///
/// Only two bits are meaningful, anything else in the word is ignored so that
/// the two choices stay independent of each other.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitstringFlags(u32);

impl BitstringFlags {
	pub const LITTLE_ENDIAN_INTEGER: Self = Self(0x2);
	pub const SIGNED_INTEGER: Self = Self(0x4);

	const KNOWN_MASK: u32 = Self::LITTLE_ENDIAN_INTEGER.0 | Self::SIGNED_INTEGER.0;

	pub const fn empty() -> Self {
		BitstringFlags(0)
	}

	pub const fn new(endianness: Endianness, signedness: Signedness) -> Self {
		let mut bits = 0;
		if let Endianness::Little = endianness {
			bits |= Self::LITTLE_ENDIAN_INTEGER.0;
		}
		if let Signedness::Signed = signedness {
			bits |= Self::SIGNED_INTEGER.0;
		}
		BitstringFlags(bits)
	}

	pub const fn from_bits(bits: u32) -> Self {
		BitstringFlags(bits & Self::KNOWN_MASK)
	}

	pub const fn bits(self) -> u32 {
		self.0
	}

	pub const fn has(self, other: Self) -> bool {
		(self.0 & other.0) == other.0
	}

	pub const fn insert(&mut self, other: Self) -> &mut Self {
		self.0 |= other.0;
		self
	}

	pub const fn remove(&mut self, other: Self) -> &mut Self {
		self.0 &= !other.0;
		self
	}

	pub const fn endianness(self) -> Endianness {
		if self.has(Self::LITTLE_ENDIAN_INTEGER) {
			Endianness::Little
		} else {
			Endianness::Big
		}
	}

	pub const fn signedness(self) -> Signedness {
		if self.has(Self::SIGNED_INTEGER) {
			Signedness::Signed
		} else {
			Signedness::Unsigned
		}
	}

	pub const fn is_signed(self) -> bool {
		self.has(Self::SIGNED_INTEGER)
	}
}

impl Default for BitstringFlags {
	fn default() -> Self {
		Self::empty()
	}
}

impl From<Endianness> for BitstringFlags {
	fn from(value: Endianness) -> Self {
		Self::new(value, Signedness::Unsigned)
	}
}

impl From<Signedness> for BitstringFlags {
	fn from(value: Signedness) -> Self {
		Self::new(Endianness::Big, value)
	}
}

impl BitOr for BitstringFlags {
	type Output = Self;
	fn bitor(self, rhs: Self) -> Self::Output {
		BitstringFlags(self.0 | rhs.0)
	}
}

impl BitOrAssign for BitstringFlags {
	fn bitor_assign(&mut self, rhs: Self) {
		self.0 |= rhs.0;
	}
}

impl BitAnd for BitstringFlags {
	type Output = Self;
	fn bitand(self, rhs: Self) -> Self::Output {
		BitstringFlags(self.0 & rhs.0)
	}
}

impl BitAndAssign for BitstringFlags {
	fn bitand_assign(&mut self, rhs: Self) {
		self.0 &= rhs.0;
	}
}

impl Not for BitstringFlags {
	type Output = Self;
	fn not(self) -> Self::Output {
		BitstringFlags(!self.0 & Self::KNOWN_MASK)
	}
}

impl Debug for BitstringFlags {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BitstringFlags")
			.field("endianness", &self.endianness())
			.field("signedness", &self.signedness())
			.finish()
	}
}
