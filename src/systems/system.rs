use crate::entities::EntityManager;

/// It provides the logic for modifying the state of [entities](crate::entities::EntityIndex)
/// and their associated [components](crate::components::Component).
///
/// A typical system builds its [filters](crate::entities::EntityFilter) once in
/// [setup](System::setup), then queries and updates matching entities on every
/// [run](System::run).
pub trait System {
	/// Initialises the [System].
	/// **This function should not be called by user code.**
	fn setup(&mut self, _entities: &mut EntityManager) {}

	/// Executes the system.
	fn run(&mut self, entities: &mut EntityManager);
}
