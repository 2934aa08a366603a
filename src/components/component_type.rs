use crate::data_structures::{AnyContainer, ComponentContainer};
use crate::components::{ComponentId, IdentityRegistry};
use std::hash::{Hash, Hasher};
use std::any::{type_name, TypeId};
use crate::error::EcsError;

/// A plain piece of data that can be attached to an entity.
///
/// Implement it with `#[derive(Component)]`. The [Default] value is what a container
/// slot holds for entities that never set the component.
pub trait Component
where
	Self: 'static + Default + Send + Sync,
{
}

/// A runtime representation of a type implementing the [`Component`] trait.
///
/// It carries everything a store needs to declare the type without knowing it statically:
/// how to register its identity and how to build an empty container for it.
#[derive(Clone, Copy)]
pub struct ComponentType {
	type_id: TypeId,
	name: &'static str,
	register: fn(&mut IdentityRegistry) -> Result<ComponentId, EcsError>,
	make_container: fn(usize) -> Box<dyn AnyContainer>,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			type_id: TypeId::of::<T>(),
			name: type_name::<T>(),
			register: IdentityRegistry::register::<T>,
			make_container: make_container::<T>,
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.type_id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Register the type with `identities`, returning its [ComponentId].
	pub fn register(&self, identities: &mut IdentityRegistry) -> Result<ComponentId, EcsError> {
		(self.register)(identities)
	}

	/// Create an empty container for the type with room for `capacity` entities.
	pub fn make_container(&self, capacity: usize) -> Box<dyn AnyContainer> {
		(self.make_container)(capacity)
	}
}

fn make_container<T: Component>(capacity: usize) -> Box<dyn AnyContainer> {
	Box::new(ComponentContainer::<T>::with_capacity(capacity))
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.type_id == other.type_id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.type_id.hash(state)
	}
}

impl std::fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("ComponentType").field(&self.name).finish()
	}
}

macro_rules! impl_component {
	($($t: ty),*) => {
		$(impl Component for $t {})*
	};
}

impl_component!(bool, char, String);
impl_component!(i8, i16, i32, i64, i128, isize);
impl_component!(u8, u16, u32, u64, u128, usize);
impl_component!(f32, f64);

impl<T: 'static + Send + Sync> Component for Vec<T> {}
impl<T: 'static + Send + Sync> Component for Option<T> {}
