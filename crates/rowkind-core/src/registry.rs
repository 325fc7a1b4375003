//! Ordered segment declarations plus tag and type lookup.

use std::any::{Any, TypeId};
use std::fmt;

use rustc_hash::FxHashMap;

use crate::edit::ItemsGuard;
use crate::error::AdapterError;
use crate::layout::{LayoutStrategy, RegistryOptions};
use crate::segment::{Segment, SegmentSpec};
use crate::single::SingleListSpec;

/// The segment registry: an ordered sequence of [`Segment`]s exposed through
/// one flat position address space.
///
/// Declaration order is flattening order. The registry exclusively owns its
/// segments, and each segment exclusively owns its items; the only mutable
/// alias ever handed out is the scoped [`ItemsGuard`].
///
/// `R` is the render instruction type produced by every segment's binder.
pub struct SegmentRegistry<R: 'static> {
    pub(crate) segments: Vec<Segment<R>>,
    tags: FxHashMap<String, usize>,
    pub(crate) options: RegistryOptions,
}

impl<R: 'static> SegmentRegistry<R> {
    pub fn new() -> Self {
        Self::with_options(RegistryOptions::default())
    }

    pub fn with_options(options: RegistryOptions) -> Self {
        Self {
            segments: Vec::new(),
            tags: FxHashMap::default(),
            options,
        }
    }

    /// Build a registry containing exactly one segment carrying a
    /// single-collection configuration: its items, binder, layout template,
    /// and layout strategy preference.
    pub fn from_single<T: 'static>(spec: SingleListSpec<T, R>) -> Self {
        let (items, binder, layout, strategy) = spec.into_parts();
        let mut registry = Self::with_options(RegistryOptions::default().strategy(strategy));
        let mut spec = SegmentSpec::bind(move |item: &T, local| binder(item, local)).items(items);
        spec.layout = layout;
        registry.declare(None, spec);
        registry
    }

    /// Append a new segment at the end of the flat order.
    ///
    /// A duplicate tag silently remaps to the new segment: the last
    /// declaration with a given tag wins. Layout presence is not checked
    /// here; that is [`validate`](Self::validate)'s job.
    pub fn declare<T: 'static>(&mut self, tag: Option<&str>, spec: SegmentSpec<T, R>) {
        let index = self.segments.len();
        let segment = spec.into_segment(tag.map(str::to_owned));
        log::debug!(
            "declared segment {index} ({} items of {})",
            segment.len(),
            segment.item_type_name()
        );
        self.segments.push(segment);
        if let Some(tag) = tag {
            self.tags.insert(tag.to_owned(), index);
        }
    }

    /// Segments in declaration order.
    pub fn segments(&self) -> &[Segment<R>] {
        &self.segments
    }

    /// Number of declared segments (not items).
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn options(&self) -> RegistryOptions {
        self.options
    }

    /// The layout strategy handed to the renderer at attach time.
    pub fn strategy(&self) -> LayoutStrategy {
        self.options.strategy
    }

    /// Every segment's items concatenated in declaration order.
    ///
    /// An empty registry is an error state, not an empty result: a renderer
    /// must always have at least one addressable segment.
    pub fn all_items(&self) -> Result<Vec<&dyn Any>, AdapterError> {
        if self.segments.is_empty() {
            return Err(AdapterError::ZeroSegments);
        }
        let total = self.segments.iter().map(Segment::len).sum();
        let mut flat = Vec::with_capacity(total);
        for segment in &self.segments {
            flat.extend(segment.items.iter());
        }
        Ok(flat)
    }

    /// Items of the first segment declared with item type `T`.
    pub fn items_of<T: 'static>(&self) -> Result<&[T], AdapterError> {
        self.segments
            .iter()
            .find_map(|segment| segment.items.as_any().downcast_ref::<Vec<T>>())
            .map(Vec::as_slice)
            .ok_or_else(|| AdapterError::TypeNotFound(std::any::type_name::<T>()))
    }

    /// Scoped mutable access to the first segment declared with item type
    /// `T`.
    ///
    /// The guard is the intentional escape of exclusive ownership: it derefs
    /// to the segment's own `Vec<T>` and recomputes the position index when
    /// dropped, so the alias cannot outlive one edit block with stale
    /// ranges.
    pub fn items_of_mut<T: 'static>(&mut self) -> Result<ItemsGuard<'_, T, R>, AdapterError> {
        let segment = self
            .segments
            .iter()
            .position(|segment| segment.items.item_type() == TypeId::of::<T>())
            .ok_or(AdapterError::TypeNotFound(std::any::type_name::<T>()))?;
        Ok(ItemsGuard::new(self, segment))
    }

    /// The segment declared under `tag`.
    pub fn by_tag(&self, tag: &str) -> Result<&Segment<R>, AdapterError> {
        self.tags
            .get(tag)
            .map(|&index| &self.segments[index])
            .ok_or_else(|| AdapterError::UndeclaredTag(tag.to_owned()))
    }

    /// Mutable counterpart of [`by_tag`](Self::by_tag), for declaration
    /// fixes such as setting a missing layout template.
    pub fn by_tag_mut(&mut self, tag: &str) -> Result<&mut Segment<R>, AdapterError> {
        match self.tags.get(tag) {
            Some(&index) => Ok(&mut self.segments[index]),
            None => Err(AdapterError::UndeclaredTag(tag.to_owned())),
        }
    }

    /// Scoped mutable access to the items of the segment declared under
    /// `tag`, checked against the requested item type.
    pub fn edit_by_tag<T: 'static>(
        &mut self,
        tag: &str,
    ) -> Result<ItemsGuard<'_, T, R>, AdapterError> {
        let segment = *self
            .tags
            .get(tag)
            .ok_or_else(|| AdapterError::UndeclaredTag(tag.to_owned()))?;
        if self.segments[segment].items.item_type() != TypeId::of::<T>() {
            return Err(AdapterError::TypeNotFound(std::any::type_name::<T>()));
        }
        Ok(ItemsGuard::new(self, segment))
    }

    /// Check the structural preconditions for attaching to a renderer: at
    /// least one segment exists and every segment declares a layout
    /// template. The first offending segment is reported.
    ///
    /// Item counts and tag uniqueness are deliberately not checked here.
    pub fn validate(&self) -> Result<(), AdapterError> {
        if self.segments.is_empty() {
            return Err(AdapterError::ZeroSegments);
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if segment.layout.is_none() {
                return Err(AdapterError::UndefinedLayout {
                    segment: index,
                    tag: segment.tag.clone(),
                });
            }
        }
        Ok(())
    }
}

impl<R: 'static> Default for SegmentRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: 'static> fmt::Debug for SegmentRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentRegistry")
            .field("segments", &self.segments)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
