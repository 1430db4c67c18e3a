/// Create a new [EntityStore](crate::entities::EntityStore) configured with the listed component types.
///
/// Component types receive their mask bits in the order they are listed.
/// An optional capacity may follow a bracketed type list.
///
/// ```
/// use mask_ecs::prelude::*;
///
/// #[derive(Default, Component)]
/// struct Position(f32, f32);
/// #[derive(Default, Component)]
/// struct Velocity(f32, f32);
/// #[derive(Default, Component)]
/// struct Health(u32);
///
/// let store = create_store!(Position, Velocity, Health)?;
/// assert_eq!(store.slot_of::<Health>(), Some(2));
///
/// let store = create_store!([Position, Velocity], 10_000)?;
/// assert_eq!(store.slot_of::<Health>(), None);
///
/// let duplicate = create_store!(Position, Position);
/// assert!(matches!(duplicate, Err(StoreError::DuplicateComponent { .. })));
/// # Ok::<(), StoreError>(())
/// ```
#[macro_export]
macro_rules! create_store {
    ([$($t: ty),* $(,)?], $capacity: expr) => {
		$crate::entities::EntityStore::with_capacity(
			&[$($crate::components::ComponentType::of::<$t>()),*],
			$capacity,
		)
	};
    ([$($t: ty),* $(,)?]) => {
		$crate::create_store!([$($t),*], 0)
	};
    ($($t: ty),* $(,)?) => {
		$crate::entities::EntityStore::new(&[$($crate::components::ComponentType::of::<$t>()),*])
	};
}
