//! Scan cursor that tolerates removals behind it

/// Position within a range of entry offsets `[offset, end)`
///
/// Removing the entry under the cursor shifts every later entry one slot
/// to the left. [`EntryCursor::retire`] accounts for that: the offset stays
/// put, since it now holds the next entry, and the end moves one slot down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EntryCursor {
    offset: usize,
    end: usize,
}

impl EntryCursor {
    pub(crate) const fn new(start: usize, end: usize) -> Self {
        Self { offset: start, end }
    }

    /// Offset of the entry under the cursor, if any remain
    #[inline]
    pub(crate) fn current(&self) -> Option<usize> {
        (self.remaining() > 0).then_some(self.offset)
    }

    /// Entries left to visit, including the current one
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.end.saturating_sub(self.offset)
    }

    /// Move past the current entry, which was kept
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.offset += 1;
    }

    /// Record that the current entry was removed
    #[inline]
    pub(crate) fn retire(&mut self) {
        debug_assert!(self.offset < self.end);
        self.end -= 1;
    }
}
