use criterion::*;
use dense_ecs::prelude::*;
use nalgebra_glm::{Mat4, Vec3};

const COUNT: usize = 10000;

#[derive(Default, Component)]
struct Transform(Mat4);

#[derive(Default, Component)]
struct Translation(Vec3);

#[derive(Default, Component)]
struct Rotation(Vec3);

#[derive(Default, Component)]
struct Velocity(Vec3);

#[derive(Default, Component)]
struct Frozen;

fn make_manager() -> EntityManager {
    EntityManager::builder()
        .register_set::<(Transform, Translation, Rotation, Velocity, Frozen)>()
        .with_capacity(COUNT)
        .build()
        .unwrap()
}

fn populate(manager: &mut EntityManager) -> Vec<EntityIndex> {
    (0..COUNT)
        .map(|i| {
            let entity = manager.create_entity_with_components((
                Transform::default(),
                Translation::default(),
                Rotation(Vec3::new(0.0, 0.1, 0.0)),
                Velocity(Vec3::new(1.0, 0.0, 0.0)),
            ));
            if i % 4 == 0 {
                manager.set_component(entity, Frozen);
            }
            entity
        })
        .collect()
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        b.iter_batched(
            make_manager,
            |mut manager| {
                populate(&mut manager);
                manager
            },
            BatchSize::PerIteration,
        );
    });
}

fn destroy_entities(c: &mut Criterion) {
    c.bench_function("Destroy entities", |b| {
        b.iter_batched(
            || {
                let mut manager = make_manager();
                let entities = populate(&mut manager);
                (manager, entities)
            },
            |(mut manager, entities)| {
                for entity in entities {
                    manager.destroy_entity(entity);
                }
                manager
            },
            BatchSize::PerIteration,
        );
    });
}

fn filter_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter entities");
    let mut manager = make_manager();
    populate(&mut manager);
    let filter = manager.filter::<(Translation, Velocity, Frozen)>();

    group.bench_function("Single-threaded", |b| b.iter(|| black_box(manager.get_entities(&filter))));
    group.bench_function("Multi-threaded", |b| b.iter(|| black_box(manager.par_get_entities(&filter))));
}

fn iterate_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("Iterate entities");
    group.bench_function("Query then write", |b| {
        let mut manager = make_manager();
        populate(&mut manager);
        let filter = manager.filter::<(Transform, Translation, Velocity, Rotation)>();
        let mut entities = Vec::with_capacity(COUNT);

        b.iter(|| {
            entities.clear();
            manager.get_entities_into(&filter, &mut entities);
            for &entity in &entities {
                let velocity = manager.get_component::<Velocity>(entity).0;
                let rotation = manager.get_component::<Rotation>(entity).0;
                let translation = {
                    let translation = manager.get_component_mut::<Translation>(entity);
                    translation.0 += velocity;
                    translation.0
                };
                manager.get_component_mut::<Transform>(entity).0 =
                    Mat4::new_translation(&translation) * Mat4::new_rotation(rotation);
            }
        });
    });

    group.bench_function("Multi-threaded", |b| {
        let mut manager = make_manager();
        populate(&mut manager);
        let filter = manager.filter::<(Translation, Velocity)>();

        b.iter(|| {
            manager.par_for_each_mut::<Translation>(&filter, |_, t| t.0 += Vec3::new(1.0, 0.0, 0.0));
        });
    });
}

criterion_group!(
    benchmarks,
    create_entities,
    destroy_entities,
    filter_entities,
    iterate_entities,
);
criterion_main!(benchmarks);
