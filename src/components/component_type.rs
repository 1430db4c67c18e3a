use crate::data_structures::AnyVec;
use crate::components::ComponentId;
use std::hash::{Hash, Hasher};
use std::any::type_name;
use std::fmt;

/// A plain data record that can be attached to an [entity](crate::entities::EntityId).
///
/// Implement it with #\[derive([`Component`](mask_ecs_derive::Component))].
/// `Default` is required because storage grows by default-filling the slots of
/// entities that have not received a value of this type yet.
///
/// # Safety
/// [`component_id`](Component::component_id) must always return the same id,
/// and no other type may return that id. Stores locate the storage of a type
/// through its id; a type claiming a foreign id is denied that storage at runtime
/// and none of its values can be stored or read. The derive upholds this by allocating a fresh id per type.
///
/// A hand-written implementation must be `unsafe`:
/// ```compile_fail,E0200
/// use mask_ecs::components::{Component, ComponentId};
///
/// #[derive(Default)]
/// struct Impostor(String);
///
/// impl Component for Impostor {
///     fn component_id() -> ComponentId {
///         unimplemented!()
///     }
/// }
/// ```
pub unsafe trait Component
where
	Self: 'static + Default,
{
	fn component_id() -> ComponentId;
}

/// A runtime representation of a type implementing the [`Component`] trait.
///
/// An ordered list of [`ComponentType`]s is the configuration of an
/// [`EntityStore`](crate::entities::EntityStore).
#[derive(Clone)]
pub struct ComponentType {
	id: ComponentId,
	name: &'static str,
	make_vec: fn() -> AnyVec,
}

impl ComponentType {
	/// Returns the [`ComponentType`] of T.
	pub fn of<T: Component>() -> Self {
		Self {
			id: ComponentId::of::<T>(),
			name: type_name::<T>(),
			make_vec: AnyVec::new::<T>,
		}
	}

	pub const fn id(&self) -> ComponentId {
		self.id
	}

	/// The fully qualified name of the underlying Rust type.
	pub const fn name(&self) -> &'static str {
		self.name
	}

	pub(crate) fn make_vec(&self) -> AnyVec {
		(self.make_vec)()
	}
}

impl Eq for ComponentType {}

impl PartialEq<Self> for ComponentType {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Hash for ComponentType {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.id.hash(state)
	}
}

impl fmt::Debug for ComponentType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ComponentType").field(&self.name).finish()
	}
}
