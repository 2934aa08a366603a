use crate::components::{Component, ComponentId, ComponentType, IdentityRegistry};
use crate::data_structures::{AnyContainer, ComponentContainer, MAX_COMPONENT_COUNT};
use crate::error::EcsError;
use std::any::type_name;

/// The fixed-size table of component containers owned by an
/// [EntityManager](crate::entities::EntityManager).
///
/// Slot `i` holds the container of the component type with [ComponentId] `i`.
/// The table is filled once, while the store is being built, and every container
/// is dropped together with the registry.
pub struct ContainerRegistry {
	identities: IdentityRegistry,
	containers: [Option<Box<dyn AnyContainer>>; MAX_COMPONENT_COUNT],
}

impl ContainerRegistry {
	pub(crate) fn new() -> Self {
		Self {
			identities: IdentityRegistry::new(),
			containers: std::array::from_fn(|_| None),
		}
	}

	/// Register `component` and create its container.
	///
	/// # Arguments
	/// * `component` - The type to declare
	/// * `capacity` - The number of entity slots to pre-reserve in the new container
	pub(crate) fn declare(&mut self, component: &ComponentType, capacity: usize) -> Result<ComponentId, EcsError> {
		let id = component.register(&mut self.identities)?;
		let slot = &mut self.containers[id.value()];
		if slot.is_some() {
			return Err(EcsError::DuplicateComponent(component.name()));
		}

		*slot = Some(component.make_container(capacity));
		Ok(id)
	}

	pub fn identities(&self) -> &IdentityRegistry {
		&self.identities
	}

	/// Get the [ComponentId] of `T`, failing if `T` has no container.
	#[inline]
	pub fn id_of<T: Component>(&self) -> Result<ComponentId, EcsError> {
		self.identities.require::<T>()
	}

	/// Get the container of `T`.
	pub fn container<T: Component>(&self) -> Result<&ComponentContainer<T>, EcsError> {
		let id = self.id_of::<T>()?;
		self.containers[id.value()]
			.as_deref()
			.and_then(|container| container.downcast_ref::<T>())
			.ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
	}

	/// Get the container of `T` mutably.
	pub fn container_mut<T: Component>(&mut self) -> Result<&mut ComponentContainer<T>, EcsError> {
		let id = self.id_of::<T>()?;
		self.containers[id.value()]
			.as_deref_mut()
			.and_then(|container| container.downcast_mut::<T>())
			.ok_or(EcsError::UnregisteredComponent(type_name::<T>()))
	}

	/// Get the type-erased container stored under `id`.
	pub fn get(&self, id: ComponentId) -> Option<&dyn AnyContainer> {
		self.containers.get(id.value())?.as_deref()
	}

	/// Iterate over every registered container, in [ComponentId] order.
	pub fn iter(&self) -> impl Iterator<Item = (ComponentId, &dyn AnyContainer)> + '_ {
		self.containers
			.iter()
			.enumerate()
			.filter_map(|(i, slot)| slot.as_deref().map(|c| (ComponentId::from_index(i), c)))
	}

	/// Append one default slot to every container.
	pub(crate) fn add_new(&mut self) {
		for container in self.containers.iter_mut().flatten() {
			container.add_new();
		}
	}

	/// Reserve room for `additional` more slots in every container.
	pub(crate) fn reserve(&mut self, additional: usize) {
		for container in self.containers.iter_mut().flatten() {
			container.reserve(additional);
		}
	}

	/// The number of registered containers.
	pub fn len(&self) -> usize {
		self.identities.len()
	}

	pub fn is_empty(&self) -> bool {
		self.identities.is_empty()
	}
}
