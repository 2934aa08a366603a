//! [Entities](EntityIndex) represent the individual "things" in your game or application.
//!
//! An entity doesn't store any data and has no associated behaviour;
//! instead, it identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! The [EntityManager] owns those pieces of data and answers which entities hold a given
//! combination of them.

mod entity_query;
mod entity_filter;
mod entity_builder;
mod entity_manager;
mod signature_table;

pub use entity_filter::*;
pub use entity_builder::*;
pub use entity_manager::*;
pub use signature_table::*;
