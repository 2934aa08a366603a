use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, IntoParallelRefMutIterator, ParallelIterator};
use crate::entities::{EntityFilter, EntityIndex, EntityManager};
use crate::components::{Component, ComponentSet};
use crate::error::{fail_fast, EcsError};

/// Filtered enumeration and bulk iteration.
///
/// Every scan walks the whole allocated index range in ascending order and tests each
/// signature against the filter's mask, so results come back sorted by index.
///
/// The parallel variants split that range between rayon workers. Each index is visited by
/// exactly one worker, and the borrow on the manager rules out structural changes while
/// the workers run.
impl EntityManager {
	/// Creates an [EntityFilter] requiring every component type in `S`.
	/// # Panics
	/// If any of the types was not declared.
	#[track_caller]
	pub fn filter<S: ComponentSet>(&self) -> EntityFilter {
		fail_fast(self.try_filter::<S>())
	}

	pub fn try_filter<S: ComponentSet>(&self) -> Result<EntityFilter, EcsError> {
		<S as ComponentSet>::signature(self.containers.identities()).map(EntityFilter::new)
	}

	/// Returns the indices matching `filter`, in ascending order.
	pub fn get_entities(&self, filter: &EntityFilter) -> Vec<EntityIndex> {
		let mut entities = Vec::new();
		self.get_entities_into(filter, &mut entities);
		entities
	}

	/// Appends the indices matching `filter` to `entities`, in ascending order.
	pub fn get_entities_into(&self, filter: &EntityFilter, entities: &mut Vec<EntityIndex>) {
		entities.extend(self.signatures.matching(filter.effective_mask()));
	}

	/// Like [get_entities](EntityManager::get_entities), with the scan split between rayon workers.
	pub fn par_get_entities(&self, filter: &EntityFilter) -> Vec<EntityIndex> {
		let mask = filter.effective_mask();
		self.signatures
			.as_slice()
			.par_iter()
			.enumerate()
			.filter(|(_, signature)| signature.contains(mask))
			.map(|(i, _)| i)
			.collect()
	}

	/// The number of indices matching `filter`.
	pub fn count_matching(&self, filter: &EntityFilter) -> usize {
		self.signatures.matching(filter.effective_mask()).count()
	}

	/// Calls `func` with every entity matching `filter` and its `T` value.
	/// `T` does not have to be part of the filter.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn for_each<T: Component>(&self, filter: &EntityFilter, func: impl FnMut(EntityIndex, &T)) {
		fail_fast(self.try_for_each(filter, func))
	}

	pub fn try_for_each<T: Component>(
		&self, filter: &EntityFilter, mut func: impl FnMut(EntityIndex, &T),
	) -> Result<(), EcsError> {
		let values = self.containers.container::<T>()?.as_slice();
		for entity in self.signatures.matching(filter.effective_mask()) {
			func(entity, &values[entity]);
		}

		Ok(())
	}

	/// Calls `func` with every entity matching `filter` and a mutable reference to its `T` value.
	/// Writing through the reference does not mark the component as present.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn for_each_mut<T: Component>(&mut self, filter: &EntityFilter, func: impl FnMut(EntityIndex, &mut T)) {
		fail_fast(self.try_for_each_mut(filter, func))
	}

	pub fn try_for_each_mut<T: Component>(
		&mut self, filter: &EntityFilter, mut func: impl FnMut(EntityIndex, &mut T),
	) -> Result<(), EcsError> {
		let mask = filter.effective_mask();
		let signatures = self.signatures.as_slice();
		let values = self.containers.container_mut::<T>()?.as_mut_slice();

		for (entity, (signature, value)) in signatures.iter().zip(values.iter_mut()).enumerate() {
			if signature.contains(mask) {
				func(entity, value);
			}
		}

		Ok(())
	}

	/// Calls `func` in parallel with every entity matching `filter` and its `T` value.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn par_for_each<T: Component>(&self, filter: &EntityFilter, func: impl Fn(EntityIndex, &T) + Send + Sync) {
		fail_fast(self.try_par_for_each(filter, func))
	}

	pub fn try_par_for_each<T: Component>(
		&self, filter: &EntityFilter, func: impl Fn(EntityIndex, &T) + Send + Sync,
	) -> Result<(), EcsError> {
		let mask = filter.effective_mask();
		let values = self.containers.container::<T>()?.as_slice();

		self.signatures
			.as_slice()
			.par_iter()
			.zip(values.par_iter())
			.enumerate()
			.filter(|(_, (signature, _))| signature.contains(mask))
			.for_each(|(entity, (_, value))| func(entity, value));

		Ok(())
	}

	/// Calls `func` in parallel with every entity matching `filter` and a mutable reference to its `T` value.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn par_for_each_mut<T: Component>(
		&mut self, filter: &EntityFilter, func: impl Fn(EntityIndex, &mut T) + Send + Sync,
	) {
		fail_fast(self.try_par_for_each_mut(filter, func))
	}

	pub fn try_par_for_each_mut<T: Component>(
		&mut self, filter: &EntityFilter, func: impl Fn(EntityIndex, &mut T) + Send + Sync,
	) -> Result<(), EcsError> {
		let mask = filter.effective_mask();
		let signatures = self.signatures.as_slice();
		let values = self.containers.container_mut::<T>()?.as_mut_slice();

		signatures
			.par_iter()
			.zip(values.par_iter_mut())
			.enumerate()
			.filter(|(_, (signature, _))| signature.contains(mask))
			.for_each(|(entity, (_, value))| func(entity, value));

		Ok(())
	}

	/// The dense column of `T` values, one per allocated index.
	///
	/// Meant for callers that partition work themselves; pair it with
	/// [get_entities](EntityManager::get_entities) to know which slots are meaningful.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn component_slice<T: Component>(&self) -> &[T] {
		fail_fast(self.containers.container::<T>()).as_slice()
	}

	/// The dense column of `T` values, one per allocated index.
	/// # Panics
	/// If `T` was not declared.
	#[track_caller]
	pub fn component_slice_mut<T: Component>(&mut self) -> &mut [T] {
		fail_fast(self.containers.container_mut::<T>()).as_mut_slice()
	}
}
