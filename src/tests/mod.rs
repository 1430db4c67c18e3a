use crate::prelude::*;

mod for_each_tests;

#[derive(Default, Component, Debug, Clone, Copy, PartialEq)]
pub struct Position {
	pub x: i32,
	pub y: i32,
}

#[derive(Default, Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
	pub x: i32,
	pub y: i32,
}

#[derive(Default, Component, Debug, Clone, Copy, PartialEq)]
pub struct Health(pub i32);

#[derive(Default, Component, Debug, Clone, Copy, PartialEq)]
pub struct Damage(pub i32);

/// Never part of a store configuration.
#[derive(Default, Component, Debug, Clone, Copy, PartialEq)]
pub struct Unlisted;

/// Routes store logs to the test output when `RUST_LOG` is set.
pub fn init_tracing() {
	let _ = tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_test_writer()
		.try_init();
}

/// Position, Velocity and Health, in that order.
pub fn store() -> EntityStore {
	init_tracing();
	create_store!(Position, Velocity, Health).expect("valid configuration")
}
