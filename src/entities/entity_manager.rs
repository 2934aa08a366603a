use crate::components::{Component, ComponentBundle, ComponentSet, ContainerRegistry, EntityState};
use crate::data_structures::{ComponentContainer, Signature};
use crate::entities::{EntityManagerBuilder, SignatureTable};
use super::entity_filter::LIFECYCLE_ID;
use crate::error::{fail_fast, EcsError};
use log::{trace, warn};

/// The handle of an entity: an index into the signature table and every component container.
///
/// Indices are recycled. Once an entity is destroyed, the next call to
/// [create_entity](EntityManager::create_entity) hands the same index out again.
pub type EntityIndex = usize;

/// Stores [entities](EntityIndex) and the [components](Component) attached to them.
///
/// The set of component types is fixed when the manager is built. Each type gets one dense
/// container with a slot for every index ever allocated, and each index gets a
/// [Signature] recording which of those slots are meaningful.
///
/// Accessors come in two flavours: the plain ones panic on misuse (an index that was never
/// allocated, an undeclared component type), their `try_` twins return an [EcsError].
pub struct EntityManager {
	first_usable_index: usize,
	free_indices: Vec<EntityIndex>,
	pub(crate) signatures: SignatureTable,
	pub(crate) containers: ContainerRegistry,
}

impl EntityManager {
	/// Creates an [EntityManager] for the component types in `S`.
	///
	/// ```
	/// use dense_ecs::prelude::*;
	///
	/// let mut manager = EntityManager::new::<(i32, String)>().unwrap();
	/// let entity = manager.create_entity_with_components((42, String::from("answer")));
	/// assert_eq!(*manager.get_component::<i32>(entity), 42);
	/// ```
	pub fn new<S: ComponentSet>() -> Result<Self, EcsError> {
		EntityManagerBuilder::new().register_set::<S>().build()
	}

	pub fn builder() -> EntityManagerBuilder {
		EntityManagerBuilder::new()
	}

	pub(crate) fn from_parts(mut containers: ContainerRegistry, capacity: usize) -> Self {
		containers.reserve(capacity);
		Self {
			first_usable_index: 0,
			free_indices: Vec::new(),
			signatures: SignatureTable::with_capacity(capacity),
			containers,
		}
	}

	/// The number of active entities.
	#[inline]
	pub fn entity_count(&self) -> usize {
		self.first_usable_index - self.free_indices.len()
	}

	/// One past the highest index ever allocated.
	/// Every container and the signature table have exactly this many slots.
	#[inline]
	pub fn first_usable_index(&self) -> usize {
		self.first_usable_index
	}

	/// The number of destroyed indices waiting to be reused.
	#[inline]
	pub fn free_count(&self) -> usize {
		self.free_indices.len()
	}

	/// Check whether `entity` is allocated and has not been destroyed since.
	pub fn is_alive(&self, entity: EntityIndex) -> bool {
		entity < self.first_usable_index && self.signatures.test_bit(entity, LIFECYCLE_ID)
	}

	/// Creates a single [`entity`](EntityIndex) with no components attached.
	///
	/// The most recently destroyed index is reused if there is one. Otherwise the index
	/// range grows by one and every container gets a new default slot.
	pub fn create_entity(&mut self) -> EntityIndex {
		let entity = match self.free_indices.pop() {
			Some(entity) => {
				trace!("Reusing entity index {}", entity);
				entity
			},
			None => {
				let entity = self.first_usable_index;
				self.containers.add_new();
				self.signatures.push_empty();
				self.first_usable_index += 1;
				trace!("Allocated entity index {}", entity);
				entity
			},
		};

		self.signatures.clear(entity);
		self.lifecycle_mut().set(entity, EntityState::Active);
		self.signatures.set_bit(entity, LIFECYCLE_ID);
		entity
	}

	/// Creates a single [`entity`](EntityIndex) and attaches every component of `components` to it.
	/// # Panics
	/// If any of the component types was not declared.
	#[track_caller]
	pub fn create_entity_with_components<B: ComponentBundle>(&mut self, components: B) -> EntityIndex {
		fail_fast(self.try_create_entity_with_components(components))
	}

	/// Creates a single [`entity`](EntityIndex) and attaches every component of `components` to it.
	///
	/// Every component type is checked before the entity is created,
	/// so a failure leaves the manager untouched.
	pub fn try_create_entity_with_components<B: ComponentBundle>(
		&mut self, components: B,
	) -> Result<EntityIndex, EcsError> {
		<B as ComponentBundle>::signature(self.containers.identities())?;
		let entity = self.create_entity();
		components.write(self, entity);
		Ok(entity)
	}

	/// Destroys the provided [`entity`](EntityIndex) and makes its index available for reuse.
	///
	/// Component values are left in their containers; they stay hidden behind the cleared
	/// signature until the next owner of the index overwrites them.
	/// # Panics
	/// If `entity` is out of range or not active.
	/// With `debug_only_assertions`, release builds ignore an inactive `entity` instead.
	#[track_caller]
	pub fn destroy_entity(&mut self, entity: EntityIndex) {
		fail_fast(self.check_index(entity));
		let active = self.signatures.test_bit(entity, LIFECYCLE_ID);
		assert_active(active, entity);
		if !active {
			warn!("Attempted to destroy entity {} which is not active", entity);
			return;
		}

		self.release(entity);
	}

	/// Destroys the provided [`entity`](EntityIndex) and makes its index available for reuse.
	pub fn try_destroy_entity(&mut self, entity: EntityIndex) -> Result<(), EcsError> {
		self.check_index(entity)?;
		if !self.signatures.test_bit(entity, LIFECYCLE_ID) {
			warn!("Attempted to destroy entity {} which is not active", entity);
			return Err(EcsError::EntityNotActive(entity));
		}

		self.release(entity);
		Ok(())
	}

	/// Check whether `entity` currently holds a `T`.
	/// # Panics
	/// If `entity` is out of range or `T` was not declared.
	#[track_caller]
	pub fn has_component<T: Component>(&self, entity: EntityIndex) -> bool {
		fail_fast(self.try_has_component::<T>(entity))
	}

	pub fn try_has_component<T: Component>(&self, entity: EntityIndex) -> Result<bool, EcsError> {
		self.check_index(entity)?;
		let id = self.containers.id_of::<T>()?;
		Ok(self.signatures.test_bit(entity, id))
	}

	/// Stores `value` in the `T` slot of `entity` and marks the component as present.
	/// # Panics
	/// If `entity` is out of range or `T` was not declared.
	#[track_caller]
	pub fn set_component<T: Component>(&mut self, entity: EntityIndex, value: T) {
		fail_fast(self.try_set_component(entity, value))
	}

	pub fn try_set_component<T: Component>(&mut self, entity: EntityIndex, value: T) -> Result<(), EcsError> {
		self.check_index(entity)?;
		let id = self.containers.id_of::<T>()?;
		self.containers.container_mut::<T>()?.set(entity, value);
		self.signatures.set_bit(entity, id);
		Ok(())
	}

	/// Stores every component of `components` on `entity`.
	/// # Panics
	/// If `entity` is out of range or any of the component types was not declared.
	#[track_caller]
	pub fn set_components<B: ComponentBundle>(&mut self, entity: EntityIndex, components: B) {
		fail_fast(self.try_set_components(entity, components))
	}

	/// Stores every component of `components` on `entity`.
	/// Nothing is written unless every component type is declared.
	pub fn try_set_components<B: ComponentBundle>(
		&mut self, entity: EntityIndex, components: B,
	) -> Result<(), EcsError> {
		self.check_index(entity)?;
		<B as ComponentBundle>::signature(self.containers.identities())?;
		components.write(self, entity);
		Ok(())
	}

	/// Gets a reference to the `T` slot of `entity`.
	///
	/// The signature is not consulted: if `entity` never set a `T`, this returns the
	/// default value or whatever a previous owner of the index left behind.
	/// Guard with [has_component](EntityManager::has_component) when that matters.
	/// # Panics
	/// If `entity` is out of range or `T` was not declared.
	#[track_caller]
	pub fn get_component<T: Component>(&self, entity: EntityIndex) -> &T {
		fail_fast(self.try_get_component(entity))
	}

	pub fn try_get_component<T: Component>(&self, entity: EntityIndex) -> Result<&T, EcsError> {
		self.check_index(entity)?;
		Ok(self.containers.container::<T>()?.get(entity))
	}

	/// Gets a mutable reference to the `T` slot of `entity`.
	/// Writing through it does not mark the component as present.
	/// # Panics
	/// If `entity` is out of range or `T` was not declared.
	#[track_caller]
	pub fn get_component_mut<T: Component>(&mut self, entity: EntityIndex) -> &mut T {
		fail_fast(self.try_get_component_mut(entity))
	}

	pub fn try_get_component_mut<T: Component>(&mut self, entity: EntityIndex) -> Result<&mut T, EcsError> {
		self.check_index(entity)?;
		Ok(self.containers.container_mut::<T>()?.get_mut(entity))
	}

	/// The [Signature] of `entity`.
	/// # Panics
	/// If `entity` is out of range.
	#[track_caller]
	pub fn signature(&self, entity: EntityIndex) -> Signature {
		fail_fast(self.check_index(entity));
		self.signatures.get(entity)
	}

	/// The component containers, for introspection.
	pub fn containers(&self) -> &ContainerRegistry {
		&self.containers
	}

	pub fn signatures(&self) -> &SignatureTable {
		&self.signatures
	}

	#[inline]
	fn check_index(&self, entity: EntityIndex) -> Result<(), EcsError> {
		match entity < self.first_usable_index {
			true => Ok(()),
			false => Err(EcsError::IndexOutOfRange {
				index: entity,
				len: self.first_usable_index,
			}),
		}
	}

	fn release(&mut self, entity: EntityIndex) {
		self.signatures.clear(entity);
		self.lifecycle_mut().set(entity, EntityState::Destroyed);
		self.free_indices.push(entity);
		trace!("Destroyed entity {}", entity);
	}

	#[inline]
	fn lifecycle_mut(&mut self) -> &mut ComponentContainer<EntityState> {
		// EntityState is registered by every builder.
		fail_fast(self.containers.container_mut::<EntityState>())
	}
}

#[inline(always)]
#[track_caller]
fn assert_active(active: bool, entity: EntityIndex) {
	#[cfg(not(feature = "debug_only_assertions"))]
	assert!(active, "Entity {} has already been destroyed", entity);

	#[cfg(feature = "debug_only_assertions")]
	debug_assert!(active, "Entity {} has already been destroyed", entity);
}
