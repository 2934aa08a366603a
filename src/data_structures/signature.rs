use std::ops::{BitAnd, BitOr, BitOrAssign};
use crate::components::ComponentId;
use std::fmt;

type Word = u32;

/// The maximum number of distinct component types a single store can track.
pub const MAX_COMPONENT_COUNT: usize = Word::BITS as usize;

/// A fixed-width bit-field with one bit per [ComponentId].
///
/// Signatures record which components an entity currently holds, and double as the
/// masks used to filter entities: an entity matches a mask when its signature
/// [contains](Signature::contains) every bit of the mask.
#[repr(transparent)]
#[derive(Default, Copy, Clone, Hash, Eq, PartialEq)]
pub struct Signature {
	bits: Word,
}

impl Signature {
	/// A signature with no bits set.
	pub const EMPTY: Signature = Signature { bits: 0 };

	/// Create a new, empty [Signature].
	pub const fn new() -> Self {
		Self::EMPTY
	}

	/// Create a [Signature] from its raw bit representation.
	/// Bit `i` corresponds to the [ComponentId] with value `i`.
	pub const fn from_bits(bits: u32) -> Self {
		Self { bits }
	}

	/// The raw bit representation.
	pub const fn bits(&self) -> u32 {
		self.bits
	}

	/// Get the value of the bit for `id`.
	#[inline(always)]
	pub const fn get(&self, id: ComponentId) -> bool {
		self.bits & Self::bit(id) != 0
	}

	/// Set the value of the bit for `id`.
	#[inline(always)]
	pub fn set(&mut self, id: ComponentId, value: bool) {
		match value {
			true => self.bits |= Self::bit(id),
			false => self.bits &= !Self::bit(id),
		}
	}

	/// Returns a copy of the signature with the bit for `id` set.
	#[inline(always)]
	pub const fn with(self, id: ComponentId) -> Self {
		Self { bits: self.bits | Self::bit(id) }
	}

	/// Set all bits to 0.
	#[inline(always)]
	pub fn clear(&mut self) {
		self.bits = 0;
	}

	/// Check whether every bit set in `mask` is also set in `self`.
	/// An empty mask is contained by every signature.
	#[inline(always)]
	pub const fn contains(&self, mask: Signature) -> bool {
		self.bits & mask.bits == mask.bits
	}

	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}

	/// The number of bits set.
	pub const fn len(&self) -> usize {
		self.bits.count_ones() as usize
	}

	/// Iterate over the ids of the set bits, in ascending order.
	pub fn iter(&self) -> SignatureIterator {
		SignatureIterator { remaining: self.bits }
	}

	// Ids only come from an IdentityRegistry, which stops at MAX_COMPONENT_COUNT,
	// so the shift never reaches the width of Word.
	#[inline(always)]
	const fn bit(id: ComponentId) -> Word {
		debug_assert!(id.value() < MAX_COMPONENT_COUNT);
		1 << id.value()
	}
}

impl From<&[ComponentId]> for Signature {
	fn from(ids: &[ComponentId]) -> Self {
		let mut signature = Signature::new();
		for id in ids {
			signature.set(*id, true);
		}

		signature
	}
}

impl FromIterator<ComponentId> for Signature {
	fn from_iter<I: IntoIterator<Item = ComponentId>>(iter: I) -> Self {
		iter.into_iter().fold(Signature::new(), Signature::with)
	}
}

impl BitOr for Signature {
	type Output = Signature;

	fn bitor(self, rhs: Self) -> Self::Output {
		Signature { bits: self.bits | rhs.bits }
	}
}

impl BitOrAssign for Signature {
	fn bitor_assign(&mut self, rhs: Self) {
		self.bits |= rhs.bits;
	}
}

impl BitAnd for Signature {
	type Output = Signature;

	fn bitand(self, rhs: Self) -> Self::Output {
		Signature { bits: self.bits & rhs.bits }
	}
}

impl fmt::Debug for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Signature({:#034b})", self.bits)
	}
}

/// Iterates over the [component ids](ComponentId) of the bits set in a [Signature].
pub struct SignatureIterator {
	remaining: Word,
}

impl Iterator for SignatureIterator {
	type Item = ComponentId;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 {
			return None;
		}

		let index = self.remaining.trailing_zeros() as usize;
		self.remaining &= self.remaining - 1;
		Some(ComponentId::from_index(index))
	}
}
