use std::fmt::Debug;

use tracing::*;

use crate::extract::extract_integer;
use crate::flags::BitstringFlags;
use crate::term::BinaryTerm;
use crate::value::TaggedInt;

/// A cursor walking a binary field by field during a match.
///
/// Failed reads leave the position untouched, so the caller can try the next
/// alternative from the same place.
pub struct MatchState<'a, T: BinaryTerm + ?Sized> {
	term: &'a T,
	offset: u64,
}

impl<'a, T: BinaryTerm + ?Sized> MatchState<'a, T> {
	pub fn new(term: &'a T) -> Self {
		Self { term, offset: 0 }
	}

	pub fn term(&self) -> &'a T {
		self.term
	}

	/// current position in bits
	pub fn offset(&self) -> u64 {
		self.offset
	}

	pub fn bit_len(&self) -> u64 {
		(self.term.byte_len() as u64).saturating_mul(8)
	}

	pub fn remaining_bits(&self) -> u64 {
		self.bit_len() - self.offset
	}

	pub fn is_at_end(&self) -> bool {
		self.remaining_bits() == 0
	}

	pub fn get_integer(&mut self, width: u32, flags: BitstringFlags) -> Option<TaggedInt> {
		let val = extract_integer(self.term, self.offset, width, flags)?;
		self.offset += u64::from(width);
		Some(val)
	}

	pub fn skip_bits(&mut self, count: u64) -> Option<()> {
		if count > self.remaining_bits() {
			trace!("cannot skip {count} bits, {} left", self.remaining_bits());
			return None;
		}
		self.offset += count;
		Some(())
	}

	/// moves back (or forward) to a previously saved offset
	pub fn restore(&mut self, offset: u64) -> Option<()> {
		if offset > self.bit_len() {
			return None;
		}
		self.offset = offset;
		Some(())
	}
}

impl<T: BinaryTerm + ?Sized> Debug for MatchState<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("MatchState")
			.field("offset", &self.offset)
			.field("bit_len", &self.bit_len())
			.finish_non_exhaustive()
	}
}
