//! Spinlocked wrapper for a shared allocator instance.
//!
//! The core allocator takes `&mut self` and performs no locking of its
//! own; this wrapper supplies the external critical section for callers
//! that register one instance kernel-wide.

use alloc::string::String;

use kspin::SpinNoIrq;

#[cfg(feature = "log")]
use log::warn;

use crate::buddy::{BuddyAllocator, BuddyStats, PageDescriptor};
use crate::{AllocError, AllocResult, FrameTranslator};

/// Shared-instance wrapper: every operation takes `&self` and runs under
/// an IRQ-disabling spinlock.
pub struct GlobalFrameAllocator<'a, T: FrameTranslator> {
    inner: SpinNoIrq<Option<BuddyAllocator<'a, T>>>,
}

impl<'a, T: FrameTranslator> GlobalFrameAllocator<'a, T> {
    pub const fn new() -> Self {
        Self {
            inner: SpinNoIrq::new(None),
        }
    }

    /// Install an allocator over `frames`, replacing any previous
    /// instance. Nothing is marked free; follow up with
    /// [`insert_page_range`](Self::insert_page_range) per usable region.
    pub fn init(&self, frames: &'a mut [PageDescriptor], translator: T) {
        let mut inner = self.inner.lock();
        if inner.is_some() {
            warn!("buddy: reinitialising the shared allocator");
        }
        *inner = Some(BuddyAllocator::new(frames, translator));
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_some()
    }

    fn with<R>(
        &self,
        op: impl FnOnce(&mut BuddyAllocator<'a, T>) -> AllocResult<R>,
    ) -> AllocResult<R> {
        match self.inner.lock().as_mut() {
            Some(allocator) => op(allocator),
            None => Err(AllocError::Uninitialized),
        }
    }

    /// Allocate `2^order` contiguous page frames.
    pub fn allocate_pages(&self, order: usize) -> AllocResult<usize> {
        self.with(|a| a.allocate_pages(order))
    }

    /// Free the `2^order` page frames headed at `pfn`.
    pub fn free_pages(&self, pfn: usize, order: usize) -> AllocResult {
        self.with(|a| a.free_pages(pfn, order))
    }

    /// Mark `count` page frames starting at `start` as available.
    pub fn insert_page_range(&self, start: usize, count: usize) -> AllocResult {
        self.with(|a| a.insert_page_range(start, count))
    }

    /// Reserve `count` currently-free page frames starting at `start`.
    pub fn remove_page_range(&self, start: usize, count: usize) -> AllocResult {
        self.with(|a| a.remove_page_range(start, count))
    }

    /// Name of the wrapped algorithm.
    pub fn name(&self) -> &'static str {
        "buddy"
    }

    /// Render the wrapped allocator's free-list state.
    pub fn dump_state(&self) -> AllocResult<String> {
        self.with(|a| Ok(a.dump_state()))
    }

    /// Free-block statistics of the wrapped allocator.
    pub fn stats(&self) -> AllocResult<BuddyStats> {
        self.with(|a| Ok(a.stats()))
    }
}

impl<'a, T: FrameTranslator> Default for GlobalFrameAllocator<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}
