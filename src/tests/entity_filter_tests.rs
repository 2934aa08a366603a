use crate::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default, Component)]
struct Marker;

#[derive(Default, Debug, Clone, Copy, PartialEq, Component)]
struct Velocity(f32);

fn populate(manager: &mut EntityManager, count: i32) -> Vec<EntityIndex> {
	(0..count)
		.map(|i| match i % 2 {
			0 => manager.create_entity_with_components((Marker, i)),
			_ => manager.create_entity_with_components((i,)),
		})
		.collect()
}

#[test]
pub fn get_entities_for_components() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	let created = populate(&mut manager, 1000);
	assert_eq!(manager.entity_count(), 1000);

	let both = manager.filter::<(Marker, i32)>();
	let entities = manager.get_entities(&both);
	assert_eq!(entities.len(), 500);
	for entity in &entities {
		let position = created.iter().position(|c| c == entity).unwrap();
		assert_eq!(position % 2, 0);
	}

	for entity in created.iter().step_by(3) {
		manager.destroy_entity(*entity);
	}
	assert_eq!(manager.entity_count(), 666);

	let ints = manager.filter::<(i32,)>();
	assert_eq!(manager.get_entities(&ints).len(), 666);
	assert_eq!(manager.get_entities(&both).len(), 333);
	assert!(manager.get_entities(&ints).iter().all(|e| manager.is_alive(*e)));
}

#[test]
pub fn results_are_in_ascending_index_order() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	populate(&mut manager, 64);

	manager.destroy_entity(10);
	manager.destroy_entity(40);
	manager.create_entity_with_components((Marker, -1));
	manager.create_entity_with_components((Marker, -2));

	let entities = manager.get_entities(&manager.filter::<(Marker,)>());
	assert!(entities.windows(2).all(|w| w[0] < w[1]));
	assert!(entities.contains(&10) && entities.contains(&40));
}

#[test]
pub fn empty_filter_including_freed_returns_every_index() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	let created = populate(&mut manager, 10);
	manager.destroy_entity(created[2]);
	manager.destroy_entity(created[7]);

	let everything = manager.get_entities(&EntityFilter::all().including_freed());
	assert_eq!(everything, (0..10).collect::<Vec<_>>());

	let live = manager.get_entities(&EntityFilter::all());
	assert_eq!(live, [0, 1, 3, 4, 5, 6, 8, 9]);
}

#[test]
pub fn filters_match_signature_supersets() {
	let mut manager = EntityManager::new::<(Marker, i32, Velocity)>().unwrap();
	let mut rng = StdRng::seed_from_u64(42);

	for _ in 0..500 {
		let entity = manager.create_entity();
		if rng.gen_bool(0.5) {
			manager.set_component(entity, Marker);
		}
		if rng.gen_bool(0.5) {
			manager.set_component(entity, rng.gen::<i32>());
		}
		if rng.gen_bool(0.5) {
			manager.set_component(entity, Velocity(rng.gen()));
		}
		if rng.gen_bool(0.2) {
			manager.destroy_entity(entity);
		}
	}

	let filters = [
		manager.filter::<()>(),
		manager.filter::<(Marker,)>(),
		manager.filter::<(i32, Velocity)>(),
		manager.filter::<(Marker, i32, Velocity)>(),
		manager.filter::<(Marker, Velocity)>().including_freed(),
	];

	for filter in &filters {
		let mask = filter.effective_mask();
		let expected: Vec<_> = (0..manager.first_usable_index())
			.filter(|e| manager.signature(*e).contains(mask))
			.collect();

		assert_eq!(manager.get_entities(filter), expected);
		assert_eq!(manager.par_get_entities(filter), expected);
		assert_eq!(manager.count_matching(filter), expected.len());
	}
}

#[test]
pub fn get_entities_into_appends() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	populate(&mut manager, 6);

	let mut entities = vec![99];
	manager.get_entities_into(&manager.filter::<(Marker,)>(), &mut entities);
	assert_eq!(entities, [99, 0, 2, 4]);
}

#[test]
pub fn filters_can_be_built_from_signatures() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	populate(&mut manager, 4);

	let marker = manager.containers().id_of::<Marker>().unwrap();
	let filter = EntityFilter::from(Signature::EMPTY.with(marker));
	assert_eq!(filter, manager.filter::<(Marker,)>());
	assert_eq!(manager.get_entities(&filter), [0, 2]);
	assert_eq!(manager.try_filter::<(Velocity,)>(), Err(EcsError::UnregisteredComponent(
		std::any::type_name::<Velocity>()
	)));
}

#[test]
pub fn for_each_visits_matching_entities() {
	let mut manager = EntityManager::new::<(Marker, i32)>().unwrap();
	populate(&mut manager, 100);
	manager.destroy_entity(0);

	let mut sum = 0;
	manager.for_each::<i32>(&manager.filter::<(Marker,)>(), |_, value| sum += *value);
	assert_eq!(sum, (2..100).step_by(2).sum::<i32>());

	let filter = manager.filter::<(i32,)>();
	manager.for_each_mut::<i32>(&filter, |entity, value| *value = entity as i32 * 10);
	assert_eq!(*manager.get_component::<i32>(7), 70);
	assert_eq!(*manager.get_component::<i32>(0), 0);
}

#[test]
pub fn parallel_iteration_touches_each_match_once() {
	let mut manager = EntityManager::new::<(Marker, i32, Velocity)>().unwrap();
	for i in 0..10_000 {
		let entity = manager.create_entity_with_components((i,));
		if i % 5 == 0 {
			manager.set_component(entity, Velocity(1.0));
		}
	}

	let moving = manager.filter::<(Velocity,)>();
	manager.par_for_each_mut::<Velocity>(&moving, |_, velocity| velocity.0 *= 2.0);
	manager.par_for_each_mut::<i32>(&moving, |_, value| *value = -*value);

	let visited = AtomicUsize::new(0);
	manager.par_for_each::<Velocity>(&moving, |_, velocity| {
		assert_eq!(velocity.0, 2.0);
		visited.fetch_add(1, Ordering::Relaxed);
	});
	assert_eq!(visited.into_inner(), 2000);

	assert_eq!(*manager.get_component::<i32>(5), -5);
	assert_eq!(*manager.get_component::<i32>(6), 6);
	assert_eq!(manager.component_slice::<Velocity>().len(), 10_000);
}
