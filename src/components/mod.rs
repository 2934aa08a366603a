//! [Components](Component) are the plain data attached to [entities](crate::entities::EntityIndex).
//!
//! Every component type gets a [ComponentId] from the store it is declared in and a
//! dense [container](crate::data_structures::ComponentContainer) in that store's
//! [ContainerRegistry].

mod entity_state;
mod component_id;
mod component_set;
mod component_type;
mod container_registry;

pub use entity_state::*;
pub use component_id::*;
pub use component_set::*;
pub use component_type::*;
pub use container_registry::*;
pub use dense_ecs_derive::Component;
