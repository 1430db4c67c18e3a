use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::iter::FusedIterator;
use std::fmt;

/// The width of a [ComponentMask] in bits, and so the maximum number of
/// component types a single store can be configured with.
pub const MAX_COMPONENTS: usize = u64::BITS as usize;

/// A fixed-width bit-field recording which component slots are set.
///
/// Bit `i` corresponds to the `i`-th component type of a store's configuration.
#[derive(Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ComponentMask {
	bits: u64,
}

impl ComponentMask {
	/// Create an empty [ComponentMask].
	pub const fn new() -> Self {
		Self { bits: 0 }
	}

	/// Create a [ComponentMask] from its raw representation.
	pub const fn from_bits(bits: u64) -> Self {
		Self { bits }
	}

	/// The raw representation of the mask.
	pub const fn bits(&self) -> u64 {
		self.bits
	}

	/// Get the value of the bit at index `i`.
	/// Indices outside of the mask are never set.
	///
	/// # Arguments
	/// * `i` - The index of the bit to retrieve
	#[inline(always)]
	pub const fn get(&self, i: usize) -> bool {
		i < MAX_COMPONENTS && (self.bits & (1 << i)) != 0
	}

	/// Set the value of the bit at index `i`.
	///
	/// # Arguments
	/// * `i` - The index of the bit to modify, in range from 0 to [MAX_COMPONENTS]
	#[inline(always)]
	pub fn set(&mut self, i: usize, value: bool) {
		debug_assert!(i < MAX_COMPONENTS, "bit {i} is outside of the mask");
		match value {
			true => self.bits |= 1 << i,
			false => self.bits &= !(1 << i),
		}
	}

	/// Returns a copy of the mask with bit `i` set.
	#[must_use]
	pub fn with(mut self, i: usize) -> Self {
		self.set(i, true);
		self
	}

	/// Check whether every bit set in `other` is also set in `self`.
	///
	/// # Arguments
	/// * `other` - The required bits
	#[inline(always)]
	pub const fn contains(&self, other: ComponentMask) -> bool {
		(self.bits & other.bits) == other.bits
	}

	pub const fn union(&self, other: ComponentMask) -> Self {
		Self { bits: self.bits | other.bits }
	}

	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}

	/// The number of set bits.
	pub const fn count(&self) -> usize {
		self.bits.count_ones() as usize
	}

	/// Set all bits to 0.
	pub fn clear(&mut self) {
		self.bits = 0;
	}

	/// Iterate over the indices of the set bits, in ascending order.
	pub fn iter(&self) -> ComponentMaskIterator {
		ComponentMaskIterator { bits: self.bits }
	}
}

impl BitOr for ComponentMask {
	type Output = Self;

	fn bitor(self, rhs: Self) -> Self::Output {
		self.union(rhs)
	}
}

impl BitOrAssign for ComponentMask {
	fn bitor_assign(&mut self, rhs: Self) {
		self.bits |= rhs.bits;
	}
}

impl BitAnd for ComponentMask {
	type Output = Self;

	fn bitand(self, rhs: Self) -> Self::Output {
		Self { bits: self.bits & rhs.bits }
	}
}

impl FromIterator<usize> for ComponentMask {
	fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
		iter.into_iter().fold(Self::new(), Self::with)
	}
}

impl IntoIterator for ComponentMask {
	type Item = usize;
	type IntoIter = ComponentMaskIterator;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Debug for ComponentMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

/// Iterates over the indices of the set bits of a [ComponentMask].
#[derive(Clone)]
pub struct ComponentMaskIterator {
	bits: u64,
}

impl Iterator for ComponentMaskIterator {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		if self.bits == 0 {
			return None;
		}

		let index = self.bits.trailing_zeros() as usize;
		self.bits &= self.bits - 1;
		Some(index)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let count = self.bits.count_ones() as usize;
		(count, Some(count))
	}
}

impl ExactSizeIterator for ComponentMaskIterator {}

impl FusedIterator for ComponentMaskIterator {}
