use crate::components::{Component, ComponentSet, ComponentType, ContainerRegistry, EntityState};
use crate::data_structures::MAX_COMPONENT_COUNT;
use crate::entities::EntityManager;
use crate::error::EcsError;
use log::debug;

/// Declares the component universe of an [EntityManager] before building it.
///
/// ```
/// use dense_ecs::prelude::*;
///
/// #[derive(Default, Component)]
/// struct Health(u32);
///
/// let manager = EntityManager::builder()
/// 	.register::<Health>()
/// 	.register::<f32>()
/// 	.with_capacity(1024)
/// 	.build()
/// 	.unwrap();
///
/// assert_eq!(manager.entity_count(), 0);
/// ```
#[derive(Default, Debug)]
pub struct EntityManagerBuilder {
	components: Vec<ComponentType>,
	capacity: usize,
}

impl EntityManagerBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Declare the component type `T`.
	pub fn register<T: Component>(mut self) -> Self {
		self.components.push(ComponentType::of::<T>());
		self
	}

	/// Declare every component type in the set `S`, in order.
	pub fn register_set<S: ComponentSet>(mut self) -> Self {
		self.components.extend(S::component_types());
		self
	}

	/// Pre-reserve room for `capacity` entities in the signature table and every container.
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self
	}

	/// Build the [EntityManager].
	///
	/// [EntityState] is always registered first, so declaring it explicitly has no effect.
	/// Fails if a type is declared twice or if the declared types, together with
	/// [EntityState], do not fit in a [Signature](crate::data_structures::Signature).
	pub fn build(self) -> Result<EntityManager, EcsError> {
		let lifecycle = ComponentType::of::<EntityState>();
		let declared: Vec<ComponentType> = self.components.into_iter().filter(|ty| *ty != lifecycle).collect();

		for (i, ty) in declared.iter().enumerate() {
			if declared[..i].contains(ty) {
				return Err(EcsError::DuplicateComponent(ty.name()));
			}
		}

		let total = declared.len() + 1;
		if total > MAX_COMPONENT_COUNT {
			return Err(EcsError::TooManyComponents {
				declared: total,
				max: MAX_COMPONENT_COUNT,
			});
		}

		let mut containers = ContainerRegistry::new();
		containers.declare(&lifecycle, self.capacity)?;
		for ty in &declared {
			containers.declare(ty, self.capacity)?;
		}

		debug!(
			"Built EntityManager with {} component types {:?} (capacity: {})",
			total, declared, self.capacity
		);

		Ok(EntityManager::from_parts(containers, self.capacity))
	}
}
