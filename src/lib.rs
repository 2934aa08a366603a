//! A dense entity/component store with signature-based queries.
//!
//! Every component type declared on an [EntityManager](entities::EntityManager) gets one
//! container with a slot per allocated entity index, and every index gets a
//! [Signature](data_structures::Signature) with one bit per component type.
//! Queries are a linear scan over those signatures.

extern crate self as dense_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
pub mod systems;
pub mod error;
mod context;

pub mod prelude {
	pub use crate::systems::*;
	pub use crate::components::*;
	pub use crate::error::EcsError;
	pub use crate::context::EcsContext;
	pub use crate::data_structures::{Signature, MAX_COMPONENT_COUNT};
	pub use crate::entities::{EntityFilter, EntityIndex, EntityManager, EntityManagerBuilder};
}

#[cfg(test)]
mod tests;
