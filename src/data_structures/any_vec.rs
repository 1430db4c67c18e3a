use std::any::{type_name, Any};

/// A polymorphic growable container for items of a single [Component](crate::components::Component) type.
///
/// Slots are never removed: the container only grows, default-filling the gap
/// between its old length and the requested one.
pub(crate) struct AnyVec {
	vec: Box<dyn Any>,
	type_name: &'static str,
	len: fn(&dyn Any) -> usize,
}

impl AnyVec {
	pub fn new<T: 'static + Default>() -> Self {
		Self {
			vec: Box::new(Vec::<T>::new()),
			type_name: type_name::<T>(),
			len: |vec| vec.downcast_ref::<Vec<T>>().map_or(0, Vec::len),
		}
	}

	pub fn len(&self) -> usize {
		(self.len)(self.vec.as_ref())
	}

	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// The underlying `Vec<T>`, or [None] if the container holds another type.
	#[inline(always)]
	pub fn get_vec<T: 'static>(&self) -> Option<&Vec<T>> {
		self.vec.downcast_ref()
	}

	/// The underlying `Vec<T>`, or [None] if the container holds another type.
	#[inline(always)]
	pub fn get_vec_mut<T: 'static>(&mut self) -> Option<&mut Vec<T>> {
		self.vec.downcast_mut()
	}
}
