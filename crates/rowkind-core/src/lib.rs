//! Segmented multi-type list engine.
//!
//! Describes one flat, ordered list as a sequence of independently typed
//! segments. Each segment owns its item collection, a pure binder that turns
//! an item into a render instruction, and a layout template; the engine
//! maintains the mapping from flat position to (segment, local index) and
//! keeps it consistent across mutation.
//!
//! # Architecture
//!
//! - [`SegmentRegistry`] - ordered segment declarations plus tag lookup
//! - [`SegmentSpec`] - per-segment declaration builder
//! - [`SegmentRegistry::recompute`] / [`SegmentRegistry::locate`] - the
//!   position index over the flat address space
//! - [`ItemsGuard`] - scoped mutable access to one segment's items,
//!   recomputing the index on release
//! - [`AdapterError`] - the failure surface; every error is synchronous and
//!   reported to the immediate caller
//!
//! Reads flow facade -> position index -> segment. Writes are the caller's
//! batching discipline: mutate, then recompute, then query again.
//!
//! # Example
//!
//! ```
//! use rowkind_core::{LayoutId, SegmentRegistry, SegmentSpec};
//!
//! let mut registry: SegmentRegistry<String> = SegmentRegistry::new();
//! registry.declare(
//!     Some("names"),
//!     SegmentSpec::bind(|name: &String, _| name.clone())
//!         .items(vec!["ada".to_owned(), "grace".to_owned()])
//!         .layout(LayoutId(1)),
//! );
//! registry.recompute();
//!
//! assert_eq!(registry.flat_len(), 2);
//! let location = registry.locate(1).unwrap();
//! assert_eq!((location.segment, location.local_index), (0, 1));
//! ```

mod edit;
mod error;
mod layout;
mod position;
mod registry;
mod segment;
mod single;

pub use edit::ItemsGuard;
pub use error::AdapterError;
pub use layout::{LayoutId, LayoutStrategy, RegistryOptions};
pub use position::Location;
pub use registry::SegmentRegistry;
pub use segment::{Segment, SegmentSpec};
pub use single::SingleListSpec;
