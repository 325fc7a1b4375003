//! Layout templates, layout strategy pass-through, and registry options.

/// Identifier of a layout template registered with the hosting renderer.
///
/// The engine never interprets the value; it only requires every segment to
/// carry one before the registry can be attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayoutId(pub u32);

/// How the hosting renderer should arrange the flat list.
///
/// Carried through unexamined: the engine hands it to the renderer at attach
/// time and otherwise ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutStrategy {
    /// One vertical column, top to bottom.
    #[default]
    VerticalList,
    /// One horizontal row, leading to trailing.
    HorizontalList,
    /// A fixed-column grid filled in flat order.
    Grid {
        /// Number of columns.
        columns: u16,
    },
}

/// Registry-wide configuration.
#[derive(Clone, Copy, Debug)]
pub struct RegistryOptions {
    /// Whether an empty segment keeps one placeholder slot in the flat
    /// address space (width 1) instead of collapsing to width 0.
    ///
    /// With the slot reserved, the position is addressable and carries the
    /// segment's layout template, but holds no item.
    pub reserve_slot_for_empty_segments: bool,
    /// Layout strategy handed to the renderer at attach time.
    pub strategy: LayoutStrategy,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            reserve_slot_for_empty_segments: true,
            strategy: LayoutStrategy::default(),
        }
    }
}

impl RegistryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserve_slot_for_empty_segments(mut self, reserve: bool) -> Self {
        self.reserve_slot_for_empty_segments = reserve;
        self
    }

    pub fn strategy(mut self, strategy: LayoutStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}
