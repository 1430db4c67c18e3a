//! A unique runtime identifier tied to a [Component] type.
//!
//! Developers shouldn't rely on [component ids](ComponentId), as they are not stable between program re-runs.
//! They are only used to look up the slot a type was given when an
//! [EntityStore](crate::entities::EntityStore) was configured; the slot, not the id,
//! decides which bit of a [ComponentMask](crate::data_structures::ComponentMask) the type owns.

use std::sync::atomic::Ordering::Relaxed;
use std::sync::atomic::AtomicUsize;
use crate::components::Component;
use std::hash::Hash;

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// A process-wide identifier for a type implementing the [`Component`] trait.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct ComponentId {
	value: usize,
}

impl ComponentId {
	/// Get the [ComponentId] of the type `T`.
	#[inline(always)]
	pub fn of<T: Component>() -> ComponentId {
		T::component_id()
	}

	#[inline(always)]
	pub const fn value(&self) -> usize {
		self.value
	}
}

/// Generates a new [ComponentId]. **Should not be called from user code.**
///
/// # Safety
/// The returned id must be handed to exactly one [Component] type.
/// Called once per type from the code generated by #\[derive([Component])].
#[doc(hidden)]
pub unsafe fn next_component_id() -> ComponentId {
	let value = NEXT_ID.fetch_add(1, Relaxed);
	debug_assert!(
		value <= u32::MAX as usize,
		"This is an insane number of components. Please seek help."
	);
	ComponentId { value }
}
