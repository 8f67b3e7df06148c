// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-thread allocation accounting for leak tests.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

thread_local! {
    // `const` initialisers without `Drop` never allocate, which keeps the
    // allocator from recursing into itself.
    static LIVE_BYTES: Cell<isize> = const { Cell::new(0) };
    static LIVE_ALLOCATIONS: Cell<isize> = const { Cell::new(0) };
}

#[inline(always)]
fn record(bytes: isize, allocations: isize) {
    let _ = LIVE_BYTES.try_with(|live| live.set(live.get() + bytes));
    let _ = LIVE_ALLOCATIONS.try_with(|live| live.set(live.get() + allocations));
}

/// `GlobalAlloc` wrapper over [`System`] that counts live bytes and live
/// allocations per thread.
///
/// Counters are per thread so that tests running in parallel do not see each
/// other. Memory freed on a different thread than the one that allocated it
/// shows up as a negative count on the freeing thread.
///
/// Install it in an integration test binary:
///
/// ```rust,ignore
/// use recbox_test_utils::TrackingAllocator;
///
/// #[global_allocator]
/// static GLOBAL: TrackingAllocator = TrackingAllocator;
/// ```
pub struct TrackingAllocator;

// SAFETY: every method forwards to `System` unchanged; the bookkeeping only
// touches thread-local counters.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY (PRECONDITIONS ARE MET): caller upholds `GlobalAlloc::alloc` contract
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize, 1);
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY (PRECONDITIONS ARE MET): caller upholds `GlobalAlloc::alloc_zeroed` contract
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            record(layout.size() as isize, 1);
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY (PRECONDITIONS ARE MET): `ptr` was allocated by this allocator with `layout`
        unsafe { System.dealloc(ptr, layout) };
        record(-(layout.size() as isize), -1);
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY (PRECONDITIONS ARE MET): `ptr` was allocated by this allocator with `layout`
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            record(new_size as isize - layout.size() as isize, 0);
        }
        new_ptr
    }
}

/// Bytes currently allocated by this thread.
///
/// Always `0` unless [`TrackingAllocator`] is the global allocator.
pub fn live_bytes() -> isize {
    LIVE_BYTES.with(Cell::get)
}

/// Allocations currently held by this thread.
pub fn live_allocations() -> isize {
    LIVE_ALLOCATIONS.with(Cell::get)
}

/// Change in live bytes and allocations across a closure.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocationDelta {
    /// Net bytes allocated.
    pub bytes: isize,
    /// Net allocations made.
    pub allocations: isize,
}

impl AllocationDelta {
    /// No net change.
    pub const ZERO: Self = Self {
        bytes: 0,
        allocations: 0,
    };

    /// Returns `true` if everything allocated was freed again.
    pub fn is_balanced(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Runs `f` and returns the net allocation change it caused on this thread.
pub fn measure<F>(f: F) -> AllocationDelta
where
    F: FnOnce(),
{
    let bytes = live_bytes();
    let allocations = live_allocations();

    f();

    AllocationDelta {
        bytes: live_bytes() - bytes,
        allocations: live_allocations() - allocations,
    }
}
