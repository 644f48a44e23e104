use std::fmt::Display;

/// An extracted integer, tagged with the signedness it was requested with.
///
/// For widths below 64 the value lives in the low bits, and signed values are
/// already sign extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggedInt {
	Unsigned(u64),
	Signed(i64),
}

impl TaggedInt {
	pub const fn is_signed(self) -> bool {
		matches!(self, Self::Signed(_))
	}

	/// raw 64 bit pattern of the value
	pub const fn as_u64(self) -> u64 {
		match self {
			Self::Unsigned(val) => val,
			Self::Signed(val) => val as u64,
		}
	}

	/// raw 64 bit pattern of the value, read as two's-complement
	pub const fn as_i64(self) -> i64 {
		match self {
			Self::Unsigned(val) => val as i64,
			Self::Signed(val) => val,
		}
	}
}

impl Display for TaggedInt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Unsigned(val) => Display::fmt(val, f),
			Self::Signed(val) => Display::fmt(val, f),
		}
	}
}

macro_rules! impl_reinterpret {
	($($uty:ident => $ity:ident),*) => {
		$(paste::paste! {
			/// reinterprets the raw bit pattern as two's-complement
			#[inline(always)]
			pub const fn [<reinterpret_ $uty>](raw: $uty) -> $ity {
				<$ity>::from_ne_bytes(raw.to_ne_bytes())
			}
		})*
	};
}

impl_reinterpret!(u8 => i8, u16 => i16, u32 => i32, u64 => i64);

/// sign extends the low `width` bits of `raw` to 64 bits
pub const fn sign_extend(raw: u64, width: u32) -> i64 {
	debug_assert!(width >= 1 && width <= u64::BITS);
	let shift = u64::BITS - width;
	reinterpret_u64(raw << shift) >> shift
}
