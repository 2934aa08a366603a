use crate::data_structures::Signature;
use crate::components::ComponentId;

/// The [ComponentId] of [EntityState](crate::components::EntityState) in every store.
pub(crate) const LIFECYCLE_ID: ComponentId = ComponentId::from_index(0);

/// Selects entities by the components they hold.
///
/// An entity matches when its signature contains every bit of the filter's mask.
/// Unless [including_freed](EntityFilter::including_freed) is used, the
/// [EntityState](crate::components::EntityState) bit is required as well, so destroyed indices never match.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EntityFilter {
	mask: Signature,
	include_freed: bool,
}

impl EntityFilter {
	/// A filter matching every live entity.
	pub const fn all() -> Self {
		Self::new(Signature::EMPTY)
	}

	/// A filter requiring every component in `mask`.
	pub const fn new(mask: Signature) -> Self {
		Self { mask, include_freed: false }
	}

	/// Also match indices that are currently in the free pool.
	/// With an empty mask this matches every allocated index.
	pub const fn including_freed(self) -> Self {
		Self { include_freed: true, ..self }
	}

	/// Additionally require the component with the given id.
	pub const fn with(self, id: ComponentId) -> Self {
		Self { mask: self.mask.with(id), ..self }
	}

	/// The components explicitly required by the filter.
	pub const fn mask(&self) -> Signature {
		self.mask
	}

	pub const fn includes_freed(&self) -> bool {
		self.include_freed
	}

	/// The mask actually tested against entity signatures.
	#[inline]
	pub fn effective_mask(&self) -> Signature {
		match self.include_freed {
			true => self.mask,
			false => self.mask.with(LIFECYCLE_ID),
		}
	}
}

impl From<Signature> for EntityFilter {
	fn from(mask: Signature) -> Self {
		Self::new(mask)
	}
}

