//! A small, dense identifier tied to a [Component] type.
//!
//! [Component ids](ComponentId) are assigned by an [IdentityRegistry], which every
//! [EntityManager](crate::entities::EntityManager) owns. They are only meaningful
//! within the store that assigned them and are used to index the fixed-size
//! container table and the [signatures](crate::data_structures::Signature)
//! used in entity filters.
//!
//! Ids are assigned sequentially from 0 in registration order. The store registers
//! [EntityState](crate::components::EntityState) first, so it always receives id 0,
//! followed by the declared component types in declaration order.

use crate::data_structures::MAX_COMPONENT_COUNT;
use crate::components::Component;
use std::hash::BuildHasherDefault;
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::error::EcsError;
use std::any::{type_name, TypeId};

type Hasher = BuildHasherDefault<NoHashHasher<u64>>;

/// An identifier for a [Component] type, unique within one [IdentityRegistry].
#[derive(Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}

	#[inline(always)]
	pub(crate) const fn from_index(value: usize) -> Self {
		Self { value }
	}
}

/// Assigns [component ids](ComponentId) to [Component] types.
///
/// Registering a type is idempotent: the first registration of `T` takes the next
/// free id, every later one returns the same id. The id space is bounded by
/// [MAX_COMPONENT_COUNT], and running out of it is reported as an error rather than
/// wrapping around.
#[derive(Default, Clone)]
pub struct IdentityRegistry {
	ids: HashMap<TypeId, ComponentId, Hasher>,
	names: Vec<&'static str>,
}

impl IdentityRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Get the [ComponentId] of `T`, assigning the next free one if `T` is new.
	pub fn register<T: Component>(&mut self) -> Result<ComponentId, EcsError> {
		let key = TypeId::of::<T>();
		if let Some(id) = self.ids.get(&key) {
			return Ok(*id);
		}

		let value = self.names.len();
		if value >= MAX_COMPONENT_COUNT {
			return Err(EcsError::TooManyComponents {
				declared: value + 1,
				max: MAX_COMPONENT_COUNT,
			});
		}

		let id = ComponentId::from_index(value);
		self.ids.insert(key, id);
		self.names.push(type_name::<T>());
		Ok(id)
	}

	/// Get the [ComponentId] of `T`, if it was registered.
	#[inline]
	pub fn get<T: Component>(&self) -> Option<ComponentId> {
		self.ids.get(&TypeId::of::<T>()).copied()
	}

	/// Get the [ComponentId] of `T`.
	/// Fails with [EcsError::UnregisteredComponent] if `T` was never registered.
	#[inline]
	pub fn require<T: Component>(&self) -> Result<ComponentId, EcsError> {
		self.get::<T>().ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
	}

	pub fn contains<T: Component>(&self) -> bool {
		self.ids.contains_key(&TypeId::of::<T>())
	}

	/// The type name registered under `id`.
	pub fn name_of(&self, id: ComponentId) -> Option<&'static str> {
		self.names.get(id.value()).copied()
	}

	/// The number of registered types.
	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}
}
