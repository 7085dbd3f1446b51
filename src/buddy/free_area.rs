//! Address-sorted singly linked free lists.
//!
//! One list per order. Each node is the head page of a free block of
//! exactly `2^order` pages; the links live in the page descriptors
//! themselves, so the list only stores the head frame number and borrows
//! the descriptor table per call.

use super::frame::FrameTable;
use crate::FrameTranslator;

/// Head of one order's free list, sorted by ascending frame number.
pub(crate) struct FreeArea {
    head: Option<usize>,
    count: usize,
}

impl FreeArea {
    pub(crate) const fn new() -> Self {
        Self {
            head: None,
            count: 0,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub(crate) fn len(&self) -> usize {
        self.count
    }

    pub(crate) fn head(&self) -> Option<usize> {
        self.head
    }

    /// Splice `pfn` in before the first node with a larger frame number.
    ///
    /// The caller guarantees the new block is disjoint from every
    /// currently-free range; an equal head already on the list is a
    /// broken invariant.
    pub(crate) fn insert_sorted<T: FrameTranslator>(
        &mut self,
        table: &mut FrameTable<'_, T>,
        pfn: usize,
    ) {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            if node >= pfn {
                break;
            }
            prev = Some(node);
            cur = table.next_of(node);
        }
        debug_assert!(cur != Some(pfn), "block {:#x} inserted twice", pfn);

        table.set_next(pfn, cur);
        match prev {
            Some(prev) => table.set_next(prev, Some(pfn)),
            None => self.head = Some(pfn),
        }
        self.count += 1;
    }

    /// Unlink the block headed exactly at `pfn`.
    ///
    /// Returns whether the block was found; the sorted order allows the
    /// scan to stop at the first larger head.
    pub(crate) fn remove<T: FrameTranslator>(
        &mut self,
        table: &mut FrameTable<'_, T>,
        pfn: usize,
    ) -> bool {
        let mut prev: Option<usize> = None;
        let mut cur = self.head;
        while let Some(node) = cur {
            if node > pfn {
                break;
            }
            if node == pfn {
                let next = table.next_of(node);
                match prev {
                    Some(prev) => table.set_next(prev, next),
                    None => self.head = next,
                }
                table.set_next(node, None);
                self.count -= 1;
                return true;
            }
            prev = Some(node);
            cur = table.next_of(node);
        }
        false
    }

    /// Whether `pfn` currently heads a free block on this list.
    pub(crate) fn contains<T: FrameTranslator>(
        &self,
        table: &FrameTable<'_, T>,
        pfn: usize,
    ) -> bool {
        let mut cur = self.head;
        while let Some(node) = cur {
            if node > pfn {
                return false;
            }
            if node == pfn {
                return true;
            }
            cur = table.next_of(node);
        }
        false
    }

    /// Iterator over the block-head frame numbers, in ascending order.
    pub(crate) fn iter<'s, 'a, T: FrameTranslator>(
        &'s self,
        table: &'s FrameTable<'a, T>,
    ) -> FreeAreaIter<'s, 'a, T> {
        FreeAreaIter {
            table,
            cur: self.head,
        }
    }
}

pub(crate) struct FreeAreaIter<'s, 'a, T> {
    table: &'s FrameTable<'a, T>,
    cur: Option<usize>,
}

impl<T: FrameTranslator> Iterator for FreeAreaIter<'_, '_, T> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let pfn = self.cur?;
        self.cur = self.table.next_of(pfn);
        Some(pfn)
    }
}
