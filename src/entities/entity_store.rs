use crate::data_structures::{AnyVec, ComponentMask, MAX_COMPONENTS};
use crate::components::{Component, ComponentId, ComponentSet, ComponentType};
use crate::entities::EntityFn;
use std::hash::BuildHasherDefault;
use tracing::{debug, trace, warn};
use nohash_hasher::NoHashHasher;
use std::collections::HashMap;
use crate::StoreError;
use std::any::type_name;
use std::fmt;

type Hasher = BuildHasherDefault<NoHashHasher<usize>>;

/// A unique handle to an entity: its position in creation order.
pub type EntityId = usize;

/// A container for entities and their associated [components](Component).
///
/// The set of component types is fixed when the store is created; the position of a type
/// in that configuration is the bit it owns in every entity's [ComponentMask].
///
/// Entities are never destroyed and their ids are never reused.
/// Removing a component only clears its mask bit: the stored value stays in place,
/// logically absent, until a later [`add_component`](EntityStore::add_component) overwrites it.
/// Components owning external resources keep holding them until then.
pub struct EntityStore {
	masks: Vec<ComponentMask>,
	columns: Vec<AnyVec>,
	components: Vec<ComponentType>,
	slots: HashMap<ComponentId, usize, Hasher>,
}

impl EntityStore {
	/// Creates a store for the given component types.
	///
	/// # Errors
	/// Fails if a type is listed twice or more than [MAX_COMPONENTS] types are listed.
	pub fn new(components: &[ComponentType]) -> Result<Self, StoreError> {
		Self::with_capacity(components, 0)
	}

	/// Creates a store for the given component types with room for `capacity` entities.
	///
	/// # Errors
	/// Fails if a type is listed twice or more than [MAX_COMPONENTS] types are listed.
	pub fn with_capacity(components: &[ComponentType], capacity: usize) -> Result<Self, StoreError> {
		if components.len() > MAX_COMPONENTS {
			return Err(StoreError::TooManyComponents {
				count: components.len(),
				max: MAX_COMPONENTS,
			});
		}

		let mut slots = HashMap::with_capacity_and_hasher(components.len(), Hasher::default());
		for (slot, component) in components.iter().enumerate() {
			if slots.insert(component.id(), slot).is_some() {
				return Err(StoreError::DuplicateComponent { name: component.name() });
			}
		}

		debug!(components = components.len(), capacity, "created entity store");
		Ok(Self {
			slots,
			masks: Vec::with_capacity(capacity),
			columns: components.iter().map(ComponentType::make_vec).collect(),
			components: components.to_vec(),
		})
	}

	/// Creates a single entity with no [components](Component) attached.
	pub fn create_entity(&mut self) -> EntityId {
		let entity = self.masks.len();
		self.masks.push(ComponentMask::new());
		entity
	}

	/// The number of entities created so far.
	pub fn entity_count(&self) -> usize {
		self.masks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.masks.is_empty()
	}

	/// Whether `entity` was created by this store.
	pub fn contains_entity(&self, entity: EntityId) -> bool {
		entity < self.masks.len()
	}

	/// Reserves room for at least `additional` more entities.
	pub fn reserve(&mut self, additional: usize) {
		self.masks.reserve(additional);
	}

	/// The configured component types, in slot order.
	pub fn component_types(&self) -> &[ComponentType] {
		&self.components
	}

	/// The membership mask of `entity`, or [None] if it doesn't exist.
	pub fn component_mask(&self, entity: EntityId) -> Option<ComponentMask> {
		self.masks.get(entity).copied()
	}

	/// The mask bit owned by `T`, or [None] if `T` is not configured.
	pub fn slot_of<T: Component>(&self) -> Option<usize> {
		self.slots.get(&T::component_id()).copied()
	}

	/// Combines the mask bits of every member of `Q`.
	///
	/// # Errors
	/// Fails if a member is not configured or appears more than once.
	pub fn query_mask<Q: ComponentSet>(&self) -> Result<ComponentMask, StoreError> {
		let mut mask = ComponentMask::new();
		Q::try_visit_types(&mut |id, name| match self.slots.get(&id).copied() {
			None => Err(StoreError::UnregisteredComponent { name }),
			Some(slot) if mask.get(slot) => Err(StoreError::RepeatedQueryComponent { name }),
			Some(slot) => {
				mask.set(slot, true);
				Ok(())
			},
		})?;
		Ok(mask)
	}

	/// Attaches `value` to `entity`, overwriting any previous value of the same type,
	/// including one that was removed.
	///
	/// Returns `false` without modifying the store if `entity` doesn't exist
	/// or `T` is not configured.
	pub fn add_component<T: Component>(&mut self, entity: EntityId, value: T) -> bool {
		if entity >= self.masks.len() {
			return false;
		}
		let Some(slot) = self.registered_slot::<T>() else {
			return false;
		};

		let Some(column) = self.column_mut::<T>(slot) else {
			return false;
		};
		if column.len() <= entity {
			column.resize_with(entity + 1, T::default);
		}

		column[entity] = value;
		self.masks[entity].set(slot, true);
		true
	}

	/// Hides the `T` component of `entity`. The stored value is left untouched.
	///
	/// Returns `true` for any well-formed request, including when the component was already absent.
	/// Returns `false` if `entity` doesn't exist, `T` is not configured,
	/// or no `T` value was ever stored for `entity`.
	pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> bool {
		if entity >= self.masks.len() {
			return false;
		}
		let Some(slot) = self.registered_slot::<T>() else {
			return false;
		};

		match self.columns[slot].get_vec::<T>() {
			Some(column) if entity < column.len() => {},
			_ => return false,
		}

		self.masks[entity].set(slot, false);
		true
	}

	/// Whether `entity` exists and currently has a `T` component.
	pub fn has_component<T: Component>(&self, entity: EntityId) -> bool {
		match (self.masks.get(entity), self.registered_slot::<T>()) {
			(Some(mask), Some(slot)) => mask.get(slot),
			_ => false,
		}
	}

	/// Whether `entity` exists and currently has every component of `Q`.
	pub fn has_components<Q: ComponentSet>(&self, entity: EntityId) -> bool {
		match (self.masks.get(entity), self.registered_query::<Q>()) {
			(Some(mask), Some(query)) => mask.contains(query),
			_ => false,
		}
	}

	/// Gets a mutable reference to the `T` component of `entity`, if present.
	pub fn try_get_component<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
		let slot = self.registered_slot::<T>()?;
		if !self.masks.get(entity)?.get(slot) {
			return None;
		}

		// A set bit means the column covers `entity`.
		let column = self.column_mut::<T>(slot)?;
		unsafe { Some(column.get_unchecked_mut(entity)) }
	}

	/// Gets mutable references to every component of `Q` for `entity`,
	/// or [None] unless all of them are present.
	pub fn try_get_components<Q: ComponentSet>(&mut self, entity: EntityId) -> Option<Q::Refs<'_>> {
		let query = self.registered_query::<Q>()?;
		if !self.masks.get(entity)?.contains(query) {
			return None;
		}

		let ptrs = Q::column_ptrs(self)?;
		unsafe { Some(Q::refs(ptrs, entity)) }
	}

	/// Calls `func` for every entity that has all components of `Q`, in ascending id order.
	///
	/// `func` receives mutable references to the components, optionally preceded by the [EntityId]:
	/// ```
	/// use mask_ecs::prelude::*;
	///
	/// #[derive(Default, Component)]
	/// struct Position(i32);
	/// #[derive(Default, Component)]
	/// struct Velocity(i32);
	///
	/// let mut store = create_store!(Position, Velocity).unwrap();
	/// for speed in 1..=3 {
	///     let entity = store.create_entity();
	///     store.add_component(entity, Position(0));
	///     store.add_component(entity, Velocity(speed));
	/// }
	///
	/// store.for_each_entity::<(Position, Velocity), _>(|p: &mut Position, v: &mut Velocity| p.0 += v.0);
	///
	/// let mut seen = Vec::new();
	/// store.for_each_entity::<Position, _>(|id: EntityId, p: &mut Position| seen.push((id, p.0)));
	/// assert_eq!(seen, [(0, 1), (1, 2), (2, 3)]);
	/// ```
	/// The store stays mutably borrowed for the whole scan, so `func` cannot create entities
	/// or add and remove components while it runs:
	/// ```compile_fail,E0499
	/// # use mask_ecs::prelude::*;
	/// # #[derive(Default, Component)]
	/// # struct Position(i32);
	/// let mut store = create_store!(Position).unwrap();
	/// store.for_each_entity::<Position, _>(|_: &mut Position| {
	///     store.create_entity();
	/// });
	/// ```
	/// A callback whose arguments don't match the query is rejected as well:
	/// ```compile_fail
	/// # use mask_ecs::prelude::*;
	/// # #[derive(Default, Component)]
	/// # struct Position(i32);
	/// # #[derive(Default, Component)]
	/// # struct Velocity(i32);
	/// let mut store = create_store!(Position, Velocity).unwrap();
	/// store.for_each_entity::<(Position,), _>(|v: &mut Velocity| v.0 += 1);
	/// ```
	///
	/// # Panics
	/// Panics before visiting any entity if a member of `Q` is not configured or appears more than once.
	pub fn for_each_entity<Q: ComponentSet, M>(&mut self, mut func: impl EntityFn<Q, M>) {
		let query = match self.query_mask::<Q>() {
			Ok(query) => query,
			Err(error) => panic!("invalid entity query: {error}"),
		};

		let Some(ptrs) = Q::column_ptrs(self) else {
			panic!("invalid entity query: a column of {} holds another type", type_name::<Q>());
		};

		trace!(?query, entities = self.masks.len(), "scanning entities");
		unsafe {
			for (entity, mask) in self.masks.iter().enumerate() {
				if mask.contains(query) {
					func.call(entity, Q::refs(ptrs, entity));
				}
			}
		}
	}

	/// Base pointer of the column of `T`, or [None] if `T` is not configured.
	#[inline(always)]
	pub(crate) fn column_ptr<T: Component>(&mut self) -> Option<*mut T> {
		let slot = self.slot_of::<T>()?;
		Some(self.column_mut::<T>(slot)?.as_mut_ptr())
	}

	fn column_mut<T: Component>(&mut self, slot: usize) -> Option<&mut Vec<T>> {
		let column = self.columns[slot].get_vec_mut::<T>();
		if column.is_none() {
			warn!(component = type_name::<T>(), "component id belongs to another type");
		}
		column
	}

	fn registered_slot<T: Component>(&self) -> Option<usize> {
		let slot = self.slot_of::<T>();
		if slot.is_none() {
			warn!(component = type_name::<T>(), "component is not part of the store configuration");
		}
		slot
	}

	fn registered_query<Q: ComponentSet>(&self) -> Option<ComponentMask> {
		self.query_mask::<Q>()
			.map_err(|error| warn!(%error, "invalid component query"))
			.ok()
	}
}

impl fmt::Debug for EntityStore {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let columns: Vec<_> = self.columns.iter().map(|c| (c.type_name(), c.len())).collect();
		f.debug_struct("EntityStore")
			.field("entities", &self.masks.len())
			.field("columns", &columns)
			.finish()
	}
}
