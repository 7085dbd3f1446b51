//! Buddy page-frame allocator.
//!
//! This crate implements the page-frame side of a kernel memory manager:
//! - Buddy allocation over a caller-supplied page-descriptor table
//! - Address-sorted per-order free lists with O(log N) split/merge cost
//! - Bulk insertion and reservation of arbitrary page-frame ranges
//! - An optional spinlocked wrapper for a shared global instance
//!
//! The allocator never touches page contents. It classifies frames as
//! free or used, working purely on frame numbers recovered through the
//! [`FrameTranslator`] capability, so the physical layout strategy stays
//! with the caller.

#![no_std]

extern crate alloc;

use alloc::string::String;

// Logging support - conditionally import log crate
#[cfg(feature = "log")]
extern crate log;

// Stub macros when log is disabled - these become no-ops
#[cfg(not(feature = "log"))]
macro_rules! error {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
macro_rules! warn {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
macro_rules! info {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}
#[cfg(not(feature = "log"))]
#[allow(unused_macros)]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// The error type used for page-frame allocation.
///
/// Precondition violations are reported here instead of aborting, so the
/// memory manager above can pick a different strategy. Free-list
/// corruption is not represented: it is unrecoverable and panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocError {
    /// Requested order exceeds [`MAX_ORDER`](crate::buddy::MAX_ORDER).
    OrderTooLarge,
    /// Frame number is not aligned to the requested order.
    Misaligned,
    /// Frame range lies outside the managed descriptor window.
    OutOfRange,
    /// No free block large enough to satisfy the request.
    NoMemory,
    /// The allocator has not been initialised yet.
    Uninitialized,
}

/// A [`Result`] type with [`AllocError`] as the error type.
pub type AllocResult<T = ()> = Result<T, AllocError>;

/// Bidirectional mapping between page-frame numbers and slots of the
/// page-descriptor table.
///
/// Implementations must be total and inverse over the managed window:
/// `slot_of(pfn_of(s)) == Some(s)` for every slot `s` of the table.
pub trait FrameTranslator {
    /// Page-frame number of the descriptor stored at `slot`.
    fn pfn_of(&self, slot: usize) -> usize;

    /// Descriptor slot holding `pfn`, or `None` if the frame lies before
    /// the managed window. The allocator bound-checks the result against
    /// the table length.
    fn slot_of(&self, pfn: usize) -> Option<usize>;
}

/// Page-frame allocation algorithm, selectable by name.
pub trait FrameAllocator {
    /// Friendly name of the algorithm, for registration and debugging.
    fn name(&self) -> &'static str;

    /// Allocate `2^order` contiguous page frames and return the head
    /// frame number.
    fn allocate_pages(&mut self, order: usize) -> AllocResult<usize>;

    /// Free the `2^order` contiguous page frames headed at `pfn`.
    fn free_pages(&mut self, pfn: usize, order: usize) -> AllocResult;

    /// Mark `count` page frames starting at `start` as available.
    fn insert_page_range(&mut self, start: usize, count: usize) -> AllocResult;

    /// Mark `count` currently-free page frames starting at `start` as
    /// unavailable.
    fn remove_page_range(&mut self, start: usize, count: usize) -> AllocResult;

    /// Render the current free-list state for diagnostics.
    fn dump_state(&self) -> String;
}

pub mod buddy;
pub use buddy::buddy_allocator::BuddyAllocator;
pub use buddy::frame::{
    block_size, is_aligned, LinearTranslator, PageDescriptor, MAX_ORDER, ORDER_COUNT,
};
pub use buddy::stats::BuddyStats;

pub mod global_allocator;
pub use global_allocator::GlobalFrameAllocator;
