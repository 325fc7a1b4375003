//! Scoped mutable access to a segment's item collection.

use std::any::TypeId;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

use crate::registry::SegmentRegistry;

/// Mutable borrow of one segment's `Vec<T>`, scoped to a single edit block.
///
/// Derefs to the collection the segment owns, so edits land directly in the
/// registry. Dropping the guard recomputes the position index, which keeps
/// the ranges in step with whatever the edit did; the borrow rules keep the
/// alias from surviving any other registry mutation.
pub struct ItemsGuard<'a, T: 'static, R: 'static> {
    registry: &'a mut SegmentRegistry<R>,
    segment: usize,
    _items: PhantomData<T>,
}

impl<'a, T: 'static, R: 'static> ItemsGuard<'a, T, R> {
    pub(crate) fn new(registry: &'a mut SegmentRegistry<R>, segment: usize) -> Self {
        debug_assert_eq!(
            registry.segments[segment].items.item_type(),
            TypeId::of::<T>()
        );
        Self {
            registry,
            segment,
            _items: PhantomData,
        }
    }

    /// Index of the segment being edited, in declaration order.
    pub fn segment(&self) -> usize {
        self.segment
    }
}

impl<T: 'static, R: 'static> std::fmt::Debug for ItemsGuard<'_, T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemsGuard")
            .field("segment", &self.segment)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

impl<T: 'static, R: 'static> Deref for ItemsGuard<'_, T, R> {
    type Target = Vec<T>;

    fn deref(&self) -> &Vec<T> {
        self.registry.segments[self.segment]
            .items
            .as_any()
            .downcast_ref()
            .expect("guard constructed for a segment of a different item type")
    }
}

impl<T: 'static, R: 'static> DerefMut for ItemsGuard<'_, T, R> {
    fn deref_mut(&mut self) -> &mut Vec<T> {
        self.registry.segments[self.segment]
            .items
            .as_any_mut()
            .downcast_mut()
            .expect("guard constructed for a segment of a different item type")
    }
}

impl<T: 'static, R: 'static> Drop for ItemsGuard<'_, T, R> {
    fn drop(&mut self) {
        self.registry.recompute();
    }
}
