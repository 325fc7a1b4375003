//! Segment: one typed item group within the flat list.

use std::any::{Any, TypeId};
use std::fmt;
use std::ops::Range;
use std::rc::Rc;

use crate::layout::LayoutId;

/// Type-erased view over a segment's owned `Vec<T>`.
///
/// The item type is recorded here as a static tag at declaration time, so
/// type-directed lookups compare tags instead of probing stored values.
pub(crate) trait ErasedItems {
    fn len(&self) -> usize;
    fn get(&self, index: usize) -> Option<&dyn Any>;
    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_>;
    fn item_type(&self) -> TypeId;
    fn item_type_name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: 'static> ErasedItems for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn get(&self, index: usize) -> Option<&dyn Any> {
        self.as_slice().get(index).map(|item| item as &dyn Any)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &dyn Any> + '_> {
        Box::new(self.as_slice().iter().map(|item| item as &dyn Any))
    }

    fn item_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn item_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

pub(crate) type ErasedBinder<R> = Rc<dyn Fn(&dyn Any, usize) -> R>;

/// One typed, independently bound group of items within the flat list.
///
/// Created only by declaration; lives as long as its registry. The flat
/// range is derived state, written exclusively by
/// [`SegmentRegistry::recompute`](crate::SegmentRegistry::recompute).
pub struct Segment<R: 'static> {
    pub(crate) tag: Option<String>,
    pub(crate) items: Box<dyn ErasedItems>,
    pub(crate) binder: ErasedBinder<R>,
    pub(crate) layout: Option<LayoutId>,
    pub(crate) range: Option<Range<usize>>,
}

impl<R: 'static> Segment<R> {
    /// The tag this segment was declared under, if any.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The layout template, once declared.
    pub fn layout(&self) -> Option<LayoutId> {
        self.layout
    }

    /// Declare or replace the layout template.
    pub fn set_layout(&mut self, layout: LayoutId) {
        self.layout = Some(layout);
    }

    /// Flat positions this segment owned as of the last recompute.
    ///
    /// `None` until the first recompute; possibly stale after a mutation
    /// until the next one.
    pub fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// Number of items currently in the segment.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.len() == 0
    }

    /// Name of the segment's item type, as declared.
    pub fn item_type_name(&self) -> &'static str {
        self.items.item_type_name()
    }

    /// Apply the binder to the item at `local_index`.
    ///
    /// Returns `None` when no item backs the index, which is the case for
    /// the reserved placeholder slot of an empty segment.
    pub fn bind(&self, local_index: usize) -> Option<R> {
        let item = self.items.get(local_index)?;
        Some((self.binder)(item, local_index))
    }
}

impl<R: 'static> fmt::Debug for Segment<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Segment")
            .field("tag", &self.tag)
            .field("item_type", &self.items.item_type_name())
            .field("len", &self.items.len())
            .field("layout", &self.layout)
            .field("range", &self.range)
            .finish_non_exhaustive()
    }
}

/// Declaration builder for one segment.
///
/// Construction starts from the binder, so every declared segment has one;
/// the layout template stays optional here and is enforced by
/// [`SegmentRegistry::validate`](crate::SegmentRegistry::validate).
pub struct SegmentSpec<T: 'static, R: 'static> {
    pub(crate) items: Vec<T>,
    pub(crate) binder: Rc<dyn Fn(&T, usize) -> R>,
    pub(crate) layout: Option<LayoutId>,
}

impl<T: 'static, R: 'static> SegmentSpec<T, R> {
    /// Start a declaration from the pure binder `(item, local index) ->
    /// render instruction`.
    pub fn bind(binder: impl Fn(&T, usize) -> R + 'static) -> Self {
        Self {
            items: Vec::new(),
            binder: Rc::new(binder),
            layout: None,
        }
    }

    /// Initial items for the segment. Defaults to none.
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Layout template the renderer should inflate for this segment.
    pub fn layout(mut self, layout: LayoutId) -> Self {
        self.layout = Some(layout);
        self
    }

    pub(crate) fn into_segment(self, tag: Option<String>) -> Segment<R> {
        let binder = self.binder;
        let erased: ErasedBinder<R> = Rc::new(move |item, local_index| {
            let item = item
                .downcast_ref::<T>()
                .expect("segment binder invoked with an item of a foreign type");
            binder(item, local_index)
        });
        Segment {
            tag,
            items: Box::new(self.items),
            binder: erased,
            layout: self.layout,
            range: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_passes_local_index() {
        let segment = SegmentSpec::bind(|value: &u32, local| format!("{local}:{value}"))
            .items(vec![10, 20, 30])
            .layout(LayoutId(7))
            .into_segment(None);

        assert_eq!(segment.bind(0).as_deref(), Some("0:10"));
        assert_eq!(segment.bind(2).as_deref(), Some("2:30"));
    }

    #[test]
    fn test_bind_without_item_is_none() {
        let segment = SegmentSpec::bind(|value: &u32, _| *value)
            .items(vec![1])
            .into_segment(None);

        assert_eq!(segment.bind(0), Some(1));
        assert_eq!(segment.bind(1), None);
    }

    #[test]
    fn test_segment_records_item_type() {
        let segment = SegmentSpec::bind(|value: &String, _| value.clone())
            .into_segment(Some("empty".to_owned()));

        assert!(segment.is_empty());
        assert_eq!(segment.items.item_type(), TypeId::of::<String>());
        assert_eq!(segment.tag(), Some("empty"));
        assert_eq!(segment.range(), None);
    }
}
