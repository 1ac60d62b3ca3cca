use alloc::vec::Vec;
use core::num::NonZero;

type RawHandle = u32;

/// Index of a slot in an [`Arena`].
///
/// Stored off-by-one in a `NonZero` so that `Option<Handle>` is the same size
/// as `Handle` (the leaf chain stores one `Option<Handle>` per leaf).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawHandle>);

impl Handle {
    pub(crate) const MAX: usize = (RawHandle::MAX - 1) as usize;

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        Self(NonZero::new((index + 1) as RawHandle).unwrap())
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

/// Append-only slot store.
///
/// The tree never destroys a node or a value, so there is no free list and no
/// tombstone state: a `Handle` stays valid for the lifetime of the arena.
pub(crate) struct Arena<T> {
    slots: Vec<T>,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than keeps the last representable index available for
        // the slot being pushed.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(element);
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        &self.slots[handle.to_index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        &mut self.slots[handle.to_index()]
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // Verify our assumptions about `Handle` and the niche optimization.
    assert_eq_size!(Handle, Option<Handle>);
    assert_eq_size!(Handle, RawHandle);

    #[test]
    #[should_panic(expected = "`Handle::from_index()` - `index` > `Handle::MAX`!")]
    fn invalid_handle() {
        let _ = Handle::from_index(Handle::MAX + 1);
    }

    proptest! {
        #[test]
        fn handle_round_trip(index in 0..=0xFFFF_usize) {
            let handle = Handle::from_index(index);
            prop_assert_eq!(handle.to_index(), index);
        }

        #[test]
        fn arena_behaves_like_vec(values in prop::collection::vec(any::<u32>(), 0..256)) {
            let mut model: Vec<(Handle, u32)> = Vec::new();
            let mut arena: Arena<u32> = Arena::with_capacity(values.len());

            for (i, value) in values.iter().enumerate() {
                let handle = arena.alloc(*value);
                // Append-only: the i-th allocation lands in slot i.
                prop_assert_eq!(handle.to_index(), i);
                model.push((handle, *value));
            }

            for &(handle, value) in &model {
                prop_assert_eq!(*arena.get(handle), value);
            }

            // Handles stay valid across later allocations and mutation.
            for &(handle, value) in &model {
                *arena.get_mut(handle) = value.wrapping_add(1);
            }
            for &(handle, value) in &model {
                prop_assert_eq!(*arena.get(handle), value.wrapping_add(1));
            }
        }
    }
}
