use std::fmt::Debug;
use std::ops::Deref;
use std::sync::Arc;

/// Accessors the decoder needs from a binary term.
///
/// Both are expected to be O(1) and infallible for a valid binary.
pub trait BinaryTerm {
	fn byte_len(&self) -> usize {
		self.data().len()
	}

	fn data(&self) -> &[u8];
}

impl BinaryTerm for [u8] {
	fn data(&self) -> &[u8] {
		self
	}
}

impl<const N: usize> BinaryTerm for [u8; N] {
	fn data(&self) -> &[u8] {
		self
	}
}

impl BinaryTerm for Vec<u8> {
	fn data(&self) -> &[u8] {
		self
	}
}

/// An immutable, reference counted binary.
///
/// Clones share the same bytes, the contents never change after construction
/// so any number of threads may decode from it at once.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Binary(Arc<[u8]>);

impl Binary {
	pub fn new(bytes: impl Into<Arc<[u8]>>) -> Self {
		Self(bytes.into())
	}

	/// copies out `len` bytes starting at `byte_offset`
	pub fn sub_binary(&self, byte_offset: usize, len: usize) -> Option<Binary> {
		let end = byte_offset.checked_add(len)?;
		self.0.get(byte_offset..end).map(Binary::from)
	}

	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	pub fn bit_len(&self) -> u64 {
		self.0.len() as u64 * 8
	}
}

impl BinaryTerm for Binary {
	fn byte_len(&self) -> usize {
		self.0.len()
	}

	fn data(&self) -> &[u8] {
		&self.0
	}
}

impl Default for Binary {
	fn default() -> Self {
		Self(Arc::from(&[][..]))
	}
}

impl Deref for Binary {
	type Target = [u8];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl From<Vec<u8>> for Binary {
	fn from(value: Vec<u8>) -> Self {
		Self(value.into())
	}
}

impl From<&[u8]> for Binary {
	fn from(value: &[u8]) -> Self {
		Self(value.into())
	}
}

impl From<&str> for Binary {
	fn from(value: &str) -> Self {
		Self(value.as_bytes().into())
	}
}

impl Debug for Binary {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "<<")?;
		for (idx, byte) in self.0.iter().enumerate() {
			if idx != 0 {
				write!(f, ",")?;
			}
			write!(f, "{byte}")?;
		}
		write!(f, ">>")
	}
}
