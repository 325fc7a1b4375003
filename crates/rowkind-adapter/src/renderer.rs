//! The renderer-facing seam of the engine.

use rowkind_core::LayoutStrategy;

/// Hosting renderer for a segmented list.
///
/// Pull model: the renderer queries the adapter for
/// [`total_count`](crate::MultiTypeAdapter::total_count) and
/// [`item_at`](crate::MultiTypeAdapter::item_at) on demand, and only
/// receives structural change notices here. The engine guarantees the total
/// count is consistent with the flattened items after each recompute; it
/// does not promise fine-grained diffs.
pub trait ListRenderer {
    /// Called once when an adapter attaches, with the pass-through layout
    /// strategy and the initial flat item count.
    fn attached(&mut self, strategy: LayoutStrategy, total: usize) {
        let _ = (strategy, total);
    }

    /// Items in `[from, to)` may now render differently.
    fn items_changed(&mut self, from: usize, to: usize);

    /// `count` items now exist starting at flat position `at`.
    fn items_inserted(&mut self, at: usize, count: usize);

    /// `count` items were removed starting at flat position `at`.
    fn items_removed(&mut self, at: usize, count: usize);
}
