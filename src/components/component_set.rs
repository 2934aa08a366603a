use crate::components::{Component, ComponentType, IdentityRegistry};
use crate::entities::{EntityIndex, EntityManager};
use crate::data_structures::Signature;
use crate::error::EcsError;
use paste::paste;

/// A statically known, ordered set of [Component] types, written as a tuple.
///
/// Component sets declare the component universe of a store
/// (`EntityManager::new::<(Position, Velocity)>()`) and describe filters
/// (`manager.filter::<(Position, Velocity)>()`).
pub trait ComponentSet: 'static {
	/// The runtime descriptors of the types in the set, in declaration order.
	fn component_types() -> Vec<ComponentType>;

	/// The [Signature] with one bit set for every type in the set.
	/// Fails if any of the types is unknown to `identities`.
	fn signature(identities: &IdentityRegistry) -> Result<Signature, EcsError>;
}

/// A tuple of [Component] values that can be written to an entity in one go.
pub trait ComponentBundle {
	/// The [Signature] of the bundle's types. Fails if any of them is unknown to `identities`.
	fn signature(identities: &IdentityRegistry) -> Result<Signature, EcsError>;

	/// Write every value to `entity`.
	/// The bundle must have been validated against the manager with [ComponentBundle::signature].
	fn write(self, manager: &mut EntityManager, entity: EntityIndex);
}

impl ComponentSet for () {
	fn component_types() -> Vec<ComponentType> {
		Vec::new()
	}

	fn signature(_: &IdentityRegistry) -> Result<Signature, EcsError> {
		Ok(Signature::EMPTY)
	}
}

impl ComponentBundle for () {
	fn signature(_: &IdentityRegistry) -> Result<Signature, EcsError> {
		Ok(Signature::EMPTY)
	}

	fn write(self, _: &mut EntityManager, _: EntityIndex) {}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        paste! {
            impl<$($t: Component),*> ComponentSet for ($($t,)*) {
                fn component_types() -> Vec<ComponentType> {
                    vec![$(ComponentType::of::<$t>()),*]
                }

                fn signature(identities: &IdentityRegistry) -> Result<Signature, EcsError> {
                    Ok(Signature::EMPTY $(.with(identities.require::<$t>()?))*)
                }
            }

            impl<$($t: Component),*> ComponentBundle for ($($t,)*) {
                fn signature(identities: &IdentityRegistry) -> Result<Signature, EcsError> {
                    <($($t,)*) as ComponentSet>::signature(identities)
                }

                fn write(self, manager: &mut EntityManager, entity: EntityIndex) {
                    let ($([<$t:lower>],)*) = self;
                    $(manager.set_component(entity, [<$t:lower>]);)*
                }
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
