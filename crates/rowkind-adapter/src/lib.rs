//! Renderer facade for rowkind segmented lists.
//!
//! Composes the core registry and position index for a hosting renderer:
//! [`MultiTypeAdapter`] answers `total_count` / `item_at` / `template_at`
//! queries, and pushes structural change notices through [`ListRenderer`]
//! after every batched mutation.
//!
//! # Example
//!
//! ```
//! use rowkind_adapter::{ListRenderer, MultiTypeAdapter};
//! use rowkind_core::{LayoutId, SegmentSpec};
//!
//! struct NullRenderer;
//! impl ListRenderer for NullRenderer {
//!     fn items_changed(&mut self, _from: usize, _to: usize) {}
//!     fn items_inserted(&mut self, _at: usize, _count: usize) {}
//!     fn items_removed(&mut self, _at: usize, _count: usize) {}
//! }
//!
//! let adapter = MultiTypeAdapter::set_up(Box::new(NullRenderer), |registry| {
//!     registry.declare(
//!         Some("greetings"),
//!         SegmentSpec::bind(|text: &String, _| text.to_uppercase())
//!             .items(vec!["hello".to_owned()])
//!             .layout(LayoutId(1)),
//!     );
//! })
//! .unwrap();
//!
//! assert_eq!(adapter.total_count(), 1);
//! assert_eq!(adapter.item_at(0).unwrap(), "HELLO");
//! ```

mod adapter;
mod renderer;

pub use adapter::MultiTypeAdapter;
pub use renderer::ListRenderer;

// Single source of truth for the core types renderers touch.
pub use rowkind_core::{
    AdapterError, ItemsGuard, LayoutId, LayoutStrategy, Location, RegistryOptions, Segment,
    SegmentRegistry, SegmentSpec, SingleListSpec,
};
