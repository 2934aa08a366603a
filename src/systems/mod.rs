//! [Systems](System) provide the logic for modifying the state of [entities](crate::entities::EntityIndex)
//! and their associated [components](crate::components::Component).
//!
//! A [System] must be manually added to an [EcsContext](crate::prelude::EcsContext)
//! for it to become active during the execution of the program.

mod system;

pub use system::*;
