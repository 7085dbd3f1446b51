//! Free-block statistics.

use super::frame::ORDER_COUNT;

/// Snapshot of the free-area table, computed on demand from the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuddyStats {
    /// Page frames in the managed window.
    pub total_frames: usize,
    /// Page frames currently free, summed across all orders.
    pub free_frames: usize,
    /// Free block count per order.
    pub free_blocks_by_order: [usize; ORDER_COUNT],
    /// Cumulative operation totals.
    #[cfg(feature = "tracking")]
    pub counters: AllocCounters,
}

impl BuddyStats {
    pub const fn new() -> Self {
        Self {
            total_frames: 0,
            free_frames: 0,
            free_blocks_by_order: [0; ORDER_COUNT],
            #[cfg(feature = "tracking")]
            counters: AllocCounters::new(),
        }
    }

    /// Page frames currently handed out or reserved.
    pub fn used_frames(&self) -> usize {
        self.total_frames.saturating_sub(self.free_frames)
    }
}

impl Default for BuddyStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Running operation totals, kept while the `tracking` feature is on.
#[cfg(feature = "tracking")]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllocCounters {
    /// Completed `allocate_pages` calls.
    pub allocations: usize,
    /// Completed `free_pages` calls.
    pub frees: usize,
    /// Frames made available through `insert_page_range`.
    pub inserted_frames: usize,
    /// Frames reserved through `remove_page_range`.
    pub removed_frames: usize,
}

#[cfg(feature = "tracking")]
impl AllocCounters {
    pub const fn new() -> Self {
        Self {
            allocations: 0,
            frees: 0,
            inserted_frames: 0,
            removed_frames: 0,
        }
    }
}
