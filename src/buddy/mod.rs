//! Buddy page-frame allocator module
//!
//! This module provides a complete buddy system implementation with:
//! - Address-sorted free lists per order for cheap membership scans
//! - Alignment-derived buddy pairing (valid for any window base)
//! - Greedy decomposition of arbitrary page ranges into aligned blocks
//! - On-demand statistics and a free-list state dump

pub mod buddy_allocator;
pub mod frame;
pub(crate) mod free_area;
pub mod stats;

pub use buddy_allocator::BuddyAllocator;
pub use frame::{
    block_size, is_aligned, LinearTranslator, PageDescriptor, MAX_ORDER, ORDER_COUNT,
};
#[cfg(feature = "tracking")]
pub use stats::AllocCounters;
pub use stats::BuddyStats;
