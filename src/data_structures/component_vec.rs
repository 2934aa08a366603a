use std::any::{type_name, Any};

/// A dense, index-addressable column of components of a single type.
///
/// The column holds one slot per entity index ever allocated by its owning store,
/// whether or not the entity at that index actually uses the component.
/// The container does not know which slots are meaningful; that is tracked by the
/// [signatures](crate::data_structures::Signature) of the owning store.
pub struct ComponentContainer<T> {
	vec: Vec<T>,
}

impl<T: Default> ComponentContainer<T> {
	pub fn new() -> Self {
		Self { vec: Vec::new() }
	}

	pub fn with_capacity(capacity: usize) -> Self {
		Self { vec: Vec::with_capacity(capacity) }
	}

	/// Append a single default-valued slot.
	#[inline]
	pub fn add_new(&mut self) {
		self.vec.push(T::default());
	}

	/// Overwrite the value at `index`.
	/// # Panics
	/// If `index` is out of bounds.
	#[inline]
	#[track_caller]
	pub fn set(&mut self, index: usize, value: T) {
		*self.get_mut(index) = value;
	}

	/// Get a reference to the value at `index`.
	/// # Panics
	/// If `index` is out of bounds.
	#[inline]
	#[track_caller]
	pub fn get(&self, index: usize) -> &T {
		let len = self.vec.len();
		match self.vec.get(index) {
			Some(value) => value,
			None => out_of_bounds::<T>(index, len),
		}
	}

	/// Get a mutable reference to the value at `index`.
	/// # Panics
	/// If `index` is out of bounds.
	#[inline]
	#[track_caller]
	pub fn get_mut(&mut self, index: usize) -> &mut T {
		let len = self.vec.len();
		match self.vec.get_mut(index) {
			Some(value) => value,
			None => out_of_bounds::<T>(index, len),
		}
	}

	pub fn as_slice(&self) -> &[T] {
		&self.vec
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.vec
	}

	pub fn len(&self) -> usize {
		self.vec.len()
	}

	pub fn is_empty(&self) -> bool {
		self.vec.is_empty()
	}
}

impl<T: Default> Default for ComponentContainer<T> {
	fn default() -> Self {
		Self::new()
	}
}

#[cold]
#[track_caller]
fn out_of_bounds<T>(index: usize, len: usize) -> ! {
	panic!(
		"Index {} is out of bounds for the `{}` container (len: {})",
		index,
		type_name::<T>(),
		len
	)
}

/// The type-erased face of a [ComponentContainer].
///
/// It covers the operations a store performs on every container at once;
/// typed access goes through [downcast_ref](dyn AnyContainer::downcast_ref),
/// which checks the element type instead of trusting the caller.
pub trait AnyContainer: Any + Send + Sync {
	/// Append a single default-valued slot.
	fn add_new(&mut self);

	/// Reserve space for at least `additional` more slots.
	fn reserve(&mut self, additional: usize);

	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The name of the element type, for diagnostics.
	fn type_name(&self) -> &'static str;

	fn as_any(&self) -> &dyn Any;

	fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static + Default + Send + Sync> AnyContainer for ComponentContainer<T> {
	fn add_new(&mut self) {
		ComponentContainer::add_new(self)
	}

	fn reserve(&mut self, additional: usize) {
		self.vec.reserve(additional)
	}

	fn len(&self) -> usize {
		self.vec.len()
	}

	fn type_name(&self) -> &'static str {
		type_name::<T>()
	}

	fn as_any(&self) -> &dyn Any {
		self
	}

	fn as_any_mut(&mut self) -> &mut dyn Any {
		self
	}
}

impl dyn AnyContainer {
	/// Recover the typed container, or `None` if it does not hold elements of type `T`.
	pub fn downcast_ref<T: 'static>(&self) -> Option<&ComponentContainer<T>> {
		self.as_any().downcast_ref()
	}

	/// Recover the typed container, or `None` if it does not hold elements of type `T`.
	pub fn downcast_mut<T: 'static>(&mut self) -> Option<&mut ComponentContainer<T>> {
		self.as_any_mut().downcast_mut()
	}
}
