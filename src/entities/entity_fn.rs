use crate::components::{Component, ComponentSet};
use crate::entities::EntityId;
use paste::paste;

/// Calling convention of callbacks that receive the [EntityId] before the components.
pub struct WithEntity;

/// Calling convention of callbacks that receive only the components.
pub struct WithoutEntity;

/// A callback accepted by [`EntityStore::for_each_entity`](crate::entities::EntityStore::for_each_entity).
///
/// It is implemented for every `FnMut(&mut T0, &mut T1, ...)` and every
/// `FnMut(EntityId, &mut T0, &mut T1, ...)` whose component arguments match the query `Q`.
/// `Marker` tells the two calling conventions apart, so it is always inferred:
/// a callback matching neither convention is rejected at compile time.
pub trait EntityFn<Q: ComponentSet, Marker> {
	fn call(&mut self, entity: EntityId, components: Q::Refs<'_>);
}

impl<T: Component, F: FnMut(&mut T)> EntityFn<T, WithoutEntity> for F {
	#[inline(always)]
	fn call(&mut self, _: EntityId, component: <T as ComponentSet>::Refs<'_>) {
		self(component)
	}
}

impl<T: Component, F: FnMut(EntityId, &mut T)> EntityFn<T, WithEntity> for F {
	#[inline(always)]
	fn call(&mut self, entity: EntityId, component: <T as ComponentSet>::Refs<'_>) {
		self(entity, component)
	}
}

macro_rules! impl_entity_fn {
    ($($t: ident),*) => {
        paste! {
            impl<$($t: Component,)* F: FnMut($(&mut $t),*)> EntityFn<($($t,)*), WithoutEntity> for F {
                #[inline(always)]
                fn call(&mut self, _: EntityId, components: <($($t,)*) as ComponentSet>::Refs<'_>) {
                    let ($([<$t:lower>],)*) = components;
                    self($([<$t:lower>]),*)
                }
            }

            impl<$($t: Component,)* F: FnMut(EntityId, $(&mut $t),*)> EntityFn<($($t,)*), WithEntity> for F {
                #[inline(always)]
                fn call(&mut self, entity: EntityId, components: <($($t,)*) as ComponentSet>::Refs<'_>) {
                    let ($([<$t:lower>],)*) = components;
                    self(entity, $([<$t:lower>]),*)
                }
            }
        }
    };
}

impl_entity_fn!(T0);
impl_entity_fn!(T0, T1);
impl_entity_fn!(T0, T1, T2);
impl_entity_fn!(T0, T1, T2, T3);
impl_entity_fn!(T0, T1, T2, T3, T4);
impl_entity_fn!(T0, T1, T2, T3, T4, T5);
impl_entity_fn!(T0, T1, T2, T3, T4, T5, T6);
impl_entity_fn!(T0, T1, T2, T3, T4, T5, T6, T7);
