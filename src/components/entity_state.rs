use crate::components::Component;

/// The lifecycle state of an entity index.
///
/// Every [EntityManager](crate::entities::EntityManager) registers this component first,
/// so it always owns [ComponentId](crate::components::ComponentId) 0.
/// Creating an entity sets it to [Active](EntityState::Active), which also sets its
/// signature bit; destroying it stores [Destroyed](EntityState::Destroyed) with the bit
/// cleared. Filters require the bit by default, which keeps freed indices out of queries.
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq, Hash, Component)]
pub enum EntityState {
	/// The slot was allocated but never handed out.
	#[default]
	Unknown,
	Active,
	Destroyed,
}
