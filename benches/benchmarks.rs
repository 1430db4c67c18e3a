use criterion::*;
use rand::prelude::*;
use mask_ecs::prelude::*;
use nalgebra_glm::Vec3;

const COUNT: usize = 10000;

#[derive(Default, Component)]
struct Position(Vec3);

#[derive(Default, Component)]
struct Velocity(Vec3);

#[derive(Default, Component)]
struct Acceleration(Vec3);

#[derive(Default, Component)]
struct Health(i32);

#[derive(Default, Component)]
struct Damage(i32);

fn random_vec(rng: &mut StdRng) -> Vec3 {
    Vec3::new(rng.gen_range(1.0..10.0), rng.gen_range(1.0..10.0), rng.gen_range(1.0..10.0))
}

/// Every entity moves; health, damage and acceleration are each attached to roughly half of them.
fn populate(rng: &mut StdRng) -> EntityStore {
    let mut ecs = create_store!([Position, Velocity, Health, Damage, Acceleration], COUNT).unwrap();
    for _ in 0..COUNT {
        let entity = ecs.create_entity();
        ecs.add_component(entity, Position(random_vec(rng)));
        ecs.add_component(entity, Velocity(random_vec(rng)));
        if rng.gen_bool(0.5) {
            ecs.add_component(entity, Health(100));
        }
        if rng.gen_bool(0.5) {
            ecs.add_component(entity, Damage(rng.gen_range(1..10)));
        }
        if rng.gen_bool(0.5) {
            ecs.add_component(entity, Acceleration(random_vec(rng)));
        }
    }
    ecs
}

fn create_entities(c: &mut Criterion) {
    c.bench_function("Create entities", |b| {
        b.iter_batched(
            || StdRng::seed_from_u64(42),
            |mut rng| populate(&mut rng),
            BatchSize::PerIteration,
        );
    });
}

fn iterate_entities(c: &mut Criterion) {
    let mut group = c.benchmark_group("Iterate entities");
    let mut ecs = populate(&mut StdRng::seed_from_u64(42));

    group.bench_function("Movement", |b| {
        b.iter(|| {
            ecs.for_each_entity::<(Position, Velocity), _>(|p: &mut Position, v: &mut Velocity| p.0 += v.0)
        });
    });

    group.bench_function("All systems", |b| {
        b.iter(|| {
            ecs.for_each_entity::<(Position, Velocity), _>(|p: &mut Position, v: &mut Velocity| p.0 += v.0);
            ecs.for_each_entity::<(Health, Damage), _>(|h: &mut Health, d: &mut Damage| h.0 -= d.0);
            ecs.for_each_entity::<(Velocity, Acceleration), _>(|v: &mut Velocity, a: &mut Acceleration| {
                v.0 += a.0
            });
            ecs.for_each_entity::<Health, _>(|h: &mut Health| h.0 -= 1);
            ecs.for_each_entity::<Position, _>(|p: &mut Position| p.0 *= 2.0);
        });
    });

    group.bench_function("With entity ids", |b| {
        b.iter(|| {
            let mut sum = 0;
            ecs.for_each_entity::<Health, _>(|entity: EntityId, _: &mut Health| sum += entity);
            black_box(sum)
        });
    });
}

fn random_access(c: &mut Criterion) {
    let mut ecs = populate(&mut StdRng::seed_from_u64(42));
    c.bench_function("Random access", |b| {
        let mut rng = StdRng::seed_from_u64(7);
        b.iter(|| {
            let entity = rng.gen_range(0..COUNT);
            if let Some((h, d)) = ecs.try_get_components::<(Health, Damage)>(entity) {
                h.0 -= d.0;
            }
            black_box(ecs.has_component::<Acceleration>(entity))
        });
    });
}

criterion_group!(benchmarks, create_entities, iterate_entities, random_access);
criterion_main!(benchmarks);
