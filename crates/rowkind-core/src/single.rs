//! Single-collection configuration, for lists with just one item type.

use std::rc::Rc;

use crate::layout::{LayoutId, LayoutStrategy};

/// Configuration of a one-segment list: items, binder, layout template, and
/// the layout strategy preference to carry over.
///
/// Consumed by [`SegmentRegistry::from_single`](crate::SegmentRegistry::from_single),
/// which turns it into a registry holding exactly one segment.
pub struct SingleListSpec<T: 'static, R: 'static> {
    items: Vec<T>,
    binder: Rc<dyn Fn(&T, usize) -> R>,
    layout: Option<LayoutId>,
    strategy: LayoutStrategy,
}

impl<T: 'static, R: 'static> SingleListSpec<T, R> {
    /// Start from the pure binder `(item, local index) -> render
    /// instruction`.
    pub fn bind(binder: impl Fn(&T, usize) -> R + 'static) -> Self {
        Self {
            items: Vec::new(),
            binder: Rc::new(binder),
            layout: None,
            strategy: LayoutStrategy::default(),
        }
    }

    /// The full contents of the list. Defaults to none.
    pub fn items(mut self, items: Vec<T>) -> Self {
        self.items = items;
        self
    }

    /// Layout template for every item.
    pub fn layout(mut self, layout: LayoutId) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Layout strategy preference handed to the renderer.
    pub fn strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[allow(clippy::type_complexity)]
    pub(crate) fn into_parts(
        self,
    ) -> (
        Vec<T>,
        Rc<dyn Fn(&T, usize) -> R>,
        Option<LayoutId>,
        LayoutStrategy,
    ) {
        (self.items, self.binder, self.layout, self.strategy)
    }
}
