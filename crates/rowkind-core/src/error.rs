//! Error types for registry configuration and position lookup.

use thiserror::Error;

/// Errors reported by the registry and the position index.
///
/// None of these are transient: each one is a configuration or addressing
/// mistake detected synchronously, so nothing is retried or recovered.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The registry has no segments, so there is nothing to flatten or bind.
    #[error("registry has no declared segments")]
    ZeroSegments,

    /// A tag lookup found no segment declared under that tag.
    #[error("no segment declared with tag '{0}'")]
    UndeclaredTag(String),

    /// A segment reached validation without a layout template.
    #[error("segment {segment}{} has no layout template; set one with SegmentSpec::layout before attaching", tag.as_ref().map(|t| format!(" (tag '{t}')")).unwrap_or_default())]
    UndefinedLayout {
        /// Index of the first offending segment in declaration order.
        segment: usize,
        /// The segment's tag, when it has one.
        tag: Option<String>,
    },

    /// No segment was declared with the requested item type.
    #[error("no segment holds items of type {0}")]
    TypeNotFound(&'static str),

    /// A flat position fell outside the computed address space.
    #[error("position {position} is outside the flat range 0..{len}")]
    PositionOutOfRange {
        /// The rejected flat position.
        position: usize,
        /// Flat length at the time of the lookup.
        len: usize,
    },
}
