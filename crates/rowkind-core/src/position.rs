//! The position index: derives flat ranges and answers ownership queries.

use crate::error::AdapterError;
use crate::registry::SegmentRegistry;

/// Resolved owner of a flat position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// Index of the owning segment in declaration order.
    pub segment: usize,
    /// Zero-based index into the owning segment's own items.
    pub local_index: usize,
}

impl<R: 'static> SegmentRegistry<R> {
    /// Rebuild every segment's flat range from current item counts.
    ///
    /// This is the only writer of ranges after declaration. Walks segments
    /// in order with a running offset; a segment's width is its item count,
    /// except that an empty segment keeps a width-1 placeholder slot when
    /// [`RegistryOptions::reserve_slot_for_empty_segments`](crate::RegistryOptions)
    /// is set.
    ///
    /// Item mutation does not update ranges by itself: batch the edits, then
    /// call this once before querying again.
    pub fn recompute(&mut self) {
        let reserve = self.options.reserve_slot_for_empty_segments;
        let mut offset = 0;
        for segment in &mut self.segments {
            let mut width = segment.items.len();
            if width == 0 && reserve {
                width = 1;
            }
            segment.range = Some(offset..offset + width);
            offset += width;
        }
        log::trace!(
            "recomputed {} segment ranges, flat length {offset}",
            self.segments.len()
        );
    }

    /// Flat length of the address space as of the last recompute.
    ///
    /// 0 for an empty registry and before the first recompute; a segment
    /// declared after the last recompute also reads as 0 until the index is
    /// rebuilt, since its range is not yet part of the address space.
    pub fn flat_len(&self) -> usize {
        self.segments
            .last()
            .and_then(|segment| segment.range.as_ref())
            .map_or(0, |range| range.end)
    }

    /// The segment and local index owning `flat_position`.
    ///
    /// Ranges are sorted and disjoint after a recompute, so this is a binary
    /// search. Positions outside `[0, flat_len())` fail with
    /// [`AdapterError::PositionOutOfRange`], as does any call before the
    /// first recompute; nothing is silently clamped.
    pub fn locate(&self, flat_position: usize) -> Result<Location, AdapterError> {
        let len = self.flat_len();
        if flat_position >= len {
            return Err(AdapterError::PositionOutOfRange {
                position: flat_position,
                len,
            });
        }
        let segment = self.segments.partition_point(|segment| {
            segment
                .range
                .as_ref()
                .is_some_and(|range| range.end <= flat_position)
        });
        match self.segments.get(segment).and_then(|s| s.range.as_ref()) {
            Some(range) if range.contains(&flat_position) => Ok(Location {
                segment,
                local_index: flat_position - range.start,
            }),
            _ => Err(AdapterError::PositionOutOfRange {
                position: flat_position,
                len,
            }),
        }
    }
}
