//! The facade a renderer drives: counts, bound items, change notices.

use rowkind_core::{
    AdapterError, LayoutId, SegmentRegistry, SingleListSpec,
};

use crate::renderer::ListRenderer;

/// Facade over a [`SegmentRegistry`] wired to one hosting renderer.
///
/// Attaching validates the registry and computes the position index, so
/// every query the renderer makes afterwards sees consistent state. All
/// post-attach mutation goes through [`update`](Self::update), which
/// recomputes and notifies the renderer in one step.
pub struct MultiTypeAdapter<R: 'static> {
    registry: SegmentRegistry<R>,
    renderer: Box<dyn ListRenderer>,
}

impl<R: 'static> MultiTypeAdapter<R> {
    /// Attach a configured registry to its renderer.
    ///
    /// Fails with [`AdapterError::UndefinedLayout`] when any segment lacks a
    /// layout template, and with [`AdapterError::ZeroSegments`] when nothing
    /// was declared; a renderer is never attached to a registry it cannot
    /// bind.
    pub fn attach(
        mut registry: SegmentRegistry<R>,
        renderer: Box<dyn ListRenderer>,
    ) -> Result<Self, AdapterError> {
        registry.validate()?;
        registry.recompute();
        let mut adapter = Self { registry, renderer };
        let total = adapter.registry.flat_len();
        adapter
            .renderer
            .attached(adapter.registry.strategy(), total);
        log::debug!(
            "attached adapter: {} segments, flat length {total}",
            adapter.registry.segment_count()
        );
        Ok(adapter)
    }

    /// Declare segments through `configure` on a fresh registry, then
    /// attach it.
    pub fn set_up(
        renderer: Box<dyn ListRenderer>,
        configure: impl FnOnce(&mut SegmentRegistry<R>),
    ) -> Result<Self, AdapterError> {
        let mut registry = SegmentRegistry::new();
        configure(&mut registry);
        Self::attach(registry, renderer)
    }

    /// Build a one-segment registry from a single-collection configuration
    /// and attach it.
    pub fn from_single<T: 'static>(
        spec: SingleListSpec<T, R>,
        renderer: Box<dyn ListRenderer>,
    ) -> Result<Self, AdapterError> {
        Self::attach(SegmentRegistry::from_single(spec), renderer)
    }

    /// Total number of flat positions, including any reserved placeholder
    /// slots of empty segments.
    pub fn total_count(&self) -> usize {
        self.registry.flat_len()
    }

    /// The render instruction for the item at `position`.
    ///
    /// A reserved placeholder slot is addressable but holds no item, so
    /// binding it reports the position as out of range.
    pub fn item_at(&self, position: usize) -> Result<R, AdapterError> {
        let location = self.registry.locate(position)?;
        let segment = &self.registry.segments()[location.segment];
        match segment.bind(location.local_index) {
            Some(instruction) => Ok(instruction),
            None => {
                log::warn!(
                    "position {position} addresses the placeholder slot of empty segment {}",
                    location.segment
                );
                Err(AdapterError::PositionOutOfRange {
                    position,
                    len: self.registry.flat_len(),
                })
            }
        }
    }

    /// The layout template owning `position`.
    ///
    /// Valid for placeholder slots too: the renderer still needs a template
    /// to inflate for a reserved slot.
    pub fn template_at(&self, position: usize) -> Result<LayoutId, AdapterError> {
        let location = self.registry.locate(position)?;
        let segment = &self.registry.segments()[location.segment];
        segment.layout().ok_or(AdapterError::UndefinedLayout {
            segment: location.segment,
            tag: segment.tag().map(str::to_owned),
        })
    }

    /// Run a batch of mutations, recompute the position index, and notify
    /// the renderer.
    ///
    /// The notice is coarse: the shared prefix of the old and new address
    /// space is reported changed, and the tail difference as an insertion or
    /// removal. Total count stays consistent with the flattened items
    /// either way.
    pub fn update(&mut self, mutate: impl FnOnce(&mut SegmentRegistry<R>)) {
        let old_total = self.registry.flat_len();
        mutate(&mut self.registry);
        self.registry.recompute();
        let new_total = self.registry.flat_len();
        log::debug!("update: flat length {old_total} -> {new_total}");

        let shared = old_total.min(new_total);
        if shared > 0 {
            self.renderer.items_changed(0, shared);
        }
        if new_total > old_total {
            self.renderer.items_inserted(old_total, new_total - old_total);
        } else if old_total > new_total {
            self.renderer.items_removed(new_total, old_total - new_total);
        }
    }

    /// Read access to the attached registry.
    pub fn registry(&self) -> &SegmentRegistry<R> {
        &self.registry
    }
}

impl<R: 'static> std::fmt::Debug for MultiTypeAdapter<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiTypeAdapter")
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
