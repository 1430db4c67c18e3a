use crate::components::{Component, ComponentId};
use crate::entities::EntityStore;
use std::any::type_name;
use paste::paste;

/// A set of [Component] types addressed together by a query:
/// either a single component type `T` or a tuple `(T0, T1, ...)` of up to eight of them.
///
/// It is implemented by the library for every [Component] and every tuple of [Components](Component).
pub trait ComponentSet: 'static {
	/// Mutable references to one entity's components, in declaration order.
	type Refs<'a>;

	#[doc(hidden)]
	type Ptrs: Copy;

	/// Calls `visit` with the id and type name of every member, in declaration order,
	/// stopping at the first error.
	fn try_visit_types<E>(visit: &mut impl FnMut(ComponentId, &'static str) -> Result<(), E>) -> Result<(), E>;

	/// Base pointers of the storage columns of every member,
	/// or [None] if a member is not registered in `store`.
	#[doc(hidden)]
	fn column_ptrs(store: &mut EntityStore) -> Option<Self::Ptrs>;

	/// # Safety
	/// - `ptrs` must come from [`column_ptrs`](ComponentSet::column_ptrs) with no structural change to the store since.
	/// - Every column must be longer than `index`.
	/// - Members must be pairwise distinct types, so the references never alias.
	#[doc(hidden)]
	unsafe fn refs<'a>(ptrs: Self::Ptrs, index: usize) -> Self::Refs<'a>;
}

impl<T: Component> ComponentSet for T {
	type Refs<'a> = &'a mut T;
	type Ptrs = *mut T;

	fn try_visit_types<E>(visit: &mut impl FnMut(ComponentId, &'static str) -> Result<(), E>) -> Result<(), E> {
		visit(T::component_id(), type_name::<T>())
	}

	#[inline(always)]
	fn column_ptrs(store: &mut EntityStore) -> Option<Self::Ptrs> {
		store.column_ptr::<T>()
	}

	#[inline(always)]
	unsafe fn refs<'a>(ptrs: Self::Ptrs, index: usize) -> Self::Refs<'a> {
		&mut *ptrs.add(index)
	}
}

macro_rules! impl_component_set {
    ($($t: ident),*) => {
        paste! {
            impl<$($t: Component),*> ComponentSet for ($($t,)*) {
                type Refs<'a> = ($(&'a mut $t,)*);
                type Ptrs = ($(*mut $t,)*);

                fn try_visit_types<E>(
                    visit: &mut impl FnMut(ComponentId, &'static str) -> Result<(), E>,
                ) -> Result<(), E> {
                    $(visit(<$t>::component_id(), type_name::<$t>())?;)*
                    Ok(())
                }

                #[inline(always)]
                fn column_ptrs(store: &mut EntityStore) -> Option<Self::Ptrs> {
                    Some(($(store.column_ptr::<$t>()?,)*))
                }

                #[inline(always)]
                unsafe fn refs<'a>(ptrs: Self::Ptrs, index: usize) -> Self::Refs<'a> {
                    let ($([<$t:lower>],)*) = ptrs;
                    ($(&mut *[<$t:lower>].add(index),)*)
                }
            }
        }
    };
}

impl_component_set!(T0);
impl_component_set!(T0, T1);
impl_component_set!(T0, T1, T2);
impl_component_set!(T0, T1, T2, T3);
impl_component_set!(T0, T1, T2, T3, T4);
impl_component_set!(T0, T1, T2, T3, T4, T5);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6);
impl_component_set!(T0, T1, T2, T3, T4, T5, T6, T7);
