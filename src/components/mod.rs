//! [Components](Component) are plain data records attached to [entities](crate::entities::EntityId).
//!
//! A type becomes a component through `#[derive(Component)]`; it must also implement `Default`,
//! which fills the storage slots of entities that never received a value of that type.

pub mod component_id;
mod component_set;
mod component_type;

pub use component_set::*;
pub use component_type::*;
pub use component_id::ComponentId;
pub use mask_ecs_derive::Component;
