use crate::tests::{store, Damage, Health, Position, Unlisted, Velocity};
use crate::prelude::*;

/// Entities 0 and 2 move, entity 1 only has a position.
fn moving_entities() -> EntityStore {
	let mut store = store();
	let (a, b, c) = (store.create_entity(), store.create_entity(), store.create_entity());

	store.add_component(a, Position { x: 0, y: 0 });
	store.add_component(a, Velocity { x: 1, y: 1 });
	store.add_component(b, Position { x: 5, y: 5 });
	store.add_component(c, Position { x: 2, y: 2 });
	store.add_component(c, Velocity { x: 0, y: 0 });
	store.add_component(c, Health(100));
	store
}

#[test]
pub fn visits_matching_entities_in_ascending_order() {
	let mut store = moving_entities();
	let mut visited = vec![];

	store.for_each_entity::<(Position, Velocity), _>(|entity: EntityId, _: &mut Position, _: &mut Velocity| {
		visited.push(entity);
	});

	assert_eq!(visited, [0, 2]);
}

#[test]
pub fn mutations_are_visible_afterwards() {
	let mut store = moving_entities();

	store.for_each_entity::<(Position, Velocity), _>(|position: &mut Position, velocity: &mut Velocity| {
		position.x += velocity.x;
		position.y += velocity.y;
	});

	assert_eq!(store.try_get_component::<Position>(0), Some(&mut Position { x: 1, y: 1 }));
	assert_eq!(store.try_get_component::<Position>(1), Some(&mut Position { x: 5, y: 5 }));
	assert_eq!(store.try_get_component::<Position>(2), Some(&mut Position { x: 2, y: 2 }));
}

#[test]
pub fn single_component_queries() {
	let mut store = moving_entities();
	let mut total = 0;

	store.for_each_entity::<Position, _>(|position: &mut Position| total += position.x);
	assert_eq!(total, 7);

	let mut ids = vec![];
	store.for_each_entity::<(Health,), _>(|entity: EntityId, health: &mut Health| {
		health.0 -= 1;
		ids.push(entity);
	});
	assert_eq!(ids, [2]);
	assert_eq!(store.try_get_component::<Health>(2), Some(&mut Health(99)));
}

#[test]
pub fn argument_order_follows_the_query() {
	let mut store = moving_entities();
	let mut seen = vec![];

	store.for_each_entity::<(Health, Velocity, Position), _>(
		|health: &mut Health, velocity: &mut Velocity, position: &mut Position| {
			seen.push((health.0, velocity.x, position.x));
		},
	);

	assert_eq!(seen, [(100, 0, 2)]);
}

#[test]
pub fn removed_components_are_skipped() {
	let mut store = moving_entities();
	store.remove_component::<Velocity>(0);

	let mut visited = vec![];
	store.for_each_entity::<(Position, Velocity), _>(|entity: EntityId, _: &mut Position, _: &mut Velocity| {
		visited.push(entity)
	});
	assert_eq!(visited, [2]);

	store.add_component(0, Velocity { x: 7, y: 7 });
	visited.clear();
	store.for_each_entity::<(Velocity, Position), _>(|entity: EntityId, _: &mut Velocity, _: &mut Position| {
		visited.push(entity)
	});
	assert_eq!(visited, [0, 2]);
}

#[test]
pub fn empty_store_visits_nothing() {
	let mut store = store();
	let mut calls = 0;
	store.for_each_entity::<Position, _>(|_: &mut Position| calls += 1);
	assert_eq!(calls, 0);
}

#[test]
#[should_panic(expected = "invalid entity query")]
pub fn unregistered_query_components_panic_before_visiting() {
	let mut store = moving_entities();
	store.for_each_entity::<(Position, Unlisted), _>(|_: &mut Position, _: &mut Unlisted| {
		unreachable!("no entity may be visited")
	});
}

#[test]
#[should_panic(expected = "appears more than once in the query")]
pub fn repeated_query_components_panic_before_visiting() {
	let mut store = moving_entities();
	store.for_each_entity::<(Position, Position), _>(|_: &mut Position, _: &mut Position| {
		unreachable!("no entity may be visited")
	});
}

#[test]
pub fn runs_a_chain_of_systems() {
	let mut store = create_store!(Position, Velocity, Health, Damage).unwrap();
	for i in 0..10 {
		let entity = store.create_entity();
		store.add_component(entity, Position { x: i, y: 0 });
		store.add_component(entity, Velocity { x: 1, y: 2 });
		if i % 2 == 0 {
			store.add_component(entity, Health(100));
			store.add_component(entity, Damage(i));
		}
	}

	store.for_each_entity::<(Position, Velocity), _>(|p: &mut Position, v: &mut Velocity| {
		p.x += v.x;
		p.y += v.y;
	});
	store.for_each_entity::<(Health, Damage), _>(|h: &mut Health, d: &mut Damage| h.0 -= d.0);

	for i in 0..10 {
		let entity = i as EntityId;
		assert_eq!(store.try_get_component::<Position>(entity), Some(&mut Position { x: i + 1, y: 2 }));
		match i % 2 {
			0 => assert_eq!(store.try_get_component::<Health>(entity), Some(&mut Health(100 - i))),
			_ => assert!(!store.has_component::<Health>(entity)),
		}
	}
}
