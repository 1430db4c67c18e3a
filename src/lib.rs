//! An entity-component store that tracks component membership with a per-entity bitmask.
//!
//! Component types are fixed when an [EntityStore](entities::EntityStore) is created;
//! each one owns a bit of every entity's [ComponentMask](data_structures::ComponentMask)
//! and a growable column of values indexed by entity id.

extern crate self as mask_ecs;

pub mod data_structures;
pub mod components;
pub mod entities;
mod error;

pub use error::StoreError;
pub use lazy_static::lazy_static;

pub mod prelude {
	pub use crate::create_store;
	pub use crate::StoreError;
	pub use crate::components::{Component, ComponentId, ComponentSet, ComponentType};
	pub use crate::data_structures::{ComponentMask, MAX_COMPONENTS};
	pub use crate::entities::{EntityFn, EntityId, EntityStore, WithEntity, WithoutEntity};
}

#[cfg(test)]
mod tests;
