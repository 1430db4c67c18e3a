//! Entities are the individual "things" of a simulation.
//!
//! An entity doesn't store any data and has no associated behaviour;
//! it is an [EntityId] that identifies which pieces of data ([Components](crate::components::Component)) belong together.
//! All entities and their components live in an [EntityStore].

mod entity_fn;
mod entity_store;
mod entity_macros;

pub use entity_fn::*;
pub use entity_store::*;
