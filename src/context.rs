use crate::systems::System;
use crate::entities::EntityManager;
use crate::error::{fail_fast, EcsError};
use nohash_hasher::NoHashHasher;
use std::any::{type_name, TypeId};
use std::collections::HashSet;
use std::hash::BuildHasherDefault;
use std::ops::{Deref, DerefMut};
use log::debug;

/// A container for [`entities`](crate::entities::EntityIndex) and systems.
///
/// The context owns an [EntityManager] and the [systems](System) that operate on it,
/// and dereferences to the manager for direct entity and component access.
///
/// Systems go through three phases, in order: they are registered, set up once,
/// then run any number of times. Registering after setup, setting up twice or running
/// before setup is an error.
pub struct EcsContext {
	entity_manager: EntityManager,
	systems: Vec<Box<dyn System>>,
	system_types: HashSet<TypeId, BuildHasherDefault<NoHashHasher<u64>>>,
	set_up: bool,
}

impl EcsContext {
	pub fn new(entity_manager: EntityManager) -> Self {
		Self {
			entity_manager,
			systems: Vec::new(),
			system_types: HashSet::default(),
			set_up: false,
		}
	}

	/// Add a new [system](System) to the [EcsContext].
	/// # Panics
	/// If a system of the same type was already added, or if the systems were already set up.
	#[track_caller]
	pub fn register_system<T: 'static + System>(&mut self, system: T) {
		fail_fast(self.try_register_system(system))
	}

	pub fn try_register_system<T: 'static + System>(&mut self, system: T) -> Result<(), EcsError> {
		if self.set_up {
			return Err(EcsError::SystemsAlreadySetUp);
		}

		if !self.system_types.insert(TypeId::of::<T>()) {
			return Err(EcsError::DuplicateSystem(type_name::<T>()));
		}

		self.systems.push(Box::new(system));
		Ok(())
	}

	/// Initialize all [systems](System), in registration order.
	/// Must be called before any system can be run.
	/// # Panics
	/// If the systems were already set up.
	#[track_caller]
	pub fn setup_systems(&mut self) {
		fail_fast(self.try_setup_systems())
	}

	pub fn try_setup_systems(&mut self) -> Result<(), EcsError> {
		if self.set_up {
			return Err(EcsError::SystemsAlreadySetUp);
		}

		for system in &mut self.systems {
			system.setup(&mut self.entity_manager);
		}

		self.set_up = true;
		debug!(
			"Set up {} systems against {} entities",
			self.systems.len(),
			self.entity_manager.entity_count()
		);
		Ok(())
	}

	/// Execute all [systems](System), in registration order.
	/// # Panics
	/// If the systems were not set up yet.
	#[track_caller]
	pub fn run_systems(&mut self) {
		fail_fast(self.try_run_systems())
	}

	pub fn try_run_systems(&mut self) -> Result<(), EcsError> {
		if !self.set_up {
			return Err(EcsError::SystemsNotSetUp);
		}

		for system in &mut self.systems {
			system.run(&mut self.entity_manager);
		}

		Ok(())
	}

	/// The number of registered [systems](System).
	pub fn system_count(&self) -> usize {
		self.systems.len()
	}

	/// Consume the context, returning its [EntityManager].
	pub fn into_entity_manager(self) -> EntityManager {
		self.entity_manager
	}
}

impl Deref for EcsContext {
	type Target = EntityManager;

	#[inline(always)]
	fn deref(&self) -> &Self::Target {
		&self.entity_manager
	}
}

impl DerefMut for EcsContext {
	#[inline(always)]
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.entity_manager
	}
}
