use crate::data_structures::Signature;
use crate::components::ComponentId;
use crate::entities::EntityIndex;

/// One [Signature] per allocated entity index, kept index-parallel with the component containers.
#[derive(Default, Clone, Debug)]
pub struct SignatureTable {
	signatures: Vec<Signature>,
}

impl SignatureTable {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { signatures: Vec::with_capacity(capacity) }
	}

	/// Append an empty signature for a newly allocated index.
	#[inline]
	pub fn push_empty(&mut self) {
		self.signatures.push(Signature::EMPTY);
	}

	#[inline]
	pub fn clear(&mut self, index: EntityIndex) {
		self.signatures[index].clear();
	}

	#[inline]
	pub fn set_bit(&mut self, index: EntityIndex, id: ComponentId) {
		self.signatures[index].set(id, true);
	}

	#[inline]
	pub fn test_bit(&self, index: EntityIndex, id: ComponentId) -> bool {
		self.signatures[index].get(id)
	}

	#[inline]
	pub fn get(&self, index: EntityIndex) -> Signature {
		self.signatures[index]
	}

	pub fn as_slice(&self) -> &[Signature] {
		&self.signatures
	}

	/// Iterate over the indices whose signature contains `mask`, in ascending order.
	pub fn matching(&self, mask: Signature) -> impl Iterator<Item = EntityIndex> + '_ {
		self.signatures
			.iter()
			.enumerate()
			.filter_map(move |(i, signature)| signature.contains(mask).then_some(i))
	}

	pub fn reserve(&mut self, additional: usize) {
		self.signatures.reserve(additional);
	}

	pub fn len(&self) -> usize {
		self.signatures.len()
	}

	pub fn is_empty(&self) -> bool {
		self.signatures.is_empty()
	}
}
