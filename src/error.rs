//! Errors reported by the [EntityManager](crate::entities::EntityManager), its builder and the
//! [EcsContext](crate::prelude::EcsContext) that runs systems against it.
//!
//! Construction errors are always returned. Errors raised by the entity and component
//! accessors are returned by their `try_` variants and turned into panics by the plain ones.

use crate::entities::EntityIndex;
use thiserror::Error;

/// Errors that can occur while building or using an [EntityManager](crate::entities::EntityManager).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EcsError {
	/// More distinct component types were declared than a signature has bits.
	#[error("too many component types: {declared} declared, at most {max} are supported")]
	TooManyComponents {
		/// Number of component types the store would need, reserved ones included.
		declared: usize,
		/// Width of the identity space.
		max: usize,
	},

	/// The same component type was declared twice.
	#[error("component type `{0}` was declared more than once")]
	DuplicateComponent(&'static str),

	/// A component type was used that was not declared when the store was built.
	#[error("component type `{0}` was not registered with this EntityManager")]
	UnregisteredComponent(&'static str),

	/// An entity index outside of the allocated range was used.
	#[error("entity index {index} is out of range (allocated: {len})")]
	IndexOutOfRange {
		/// The offending index.
		index: EntityIndex,
		/// One past the highest index ever allocated.
		len: usize,
	},

	/// A structural operation required an active entity.
	#[error("entity {0} is not active (already destroyed or never created)")]
	EntityNotActive(EntityIndex),

	/// A second system of the same type was added to an [EcsContext](crate::prelude::EcsContext).
	#[error("system `{0}` was already added to this context")]
	DuplicateSystem(&'static str),

	/// Systems were added or set up after the context's systems had been set up.
	#[error("the systems of this context have already been set up")]
	SystemsAlreadySetUp,

	/// Systems were run before being set up.
	#[error("systems must be set up before they can run")]
	SystemsNotSetUp,
}

/// Unwraps the result of a `try_` operation, panicking with the error's message.
#[inline]
#[track_caller]
pub(crate) fn fail_fast<T>(result: Result<T, EcsError>) -> T {
	match result {
		Ok(value) => value,
		Err(err) => panic!("{}", err),
	}
}
