// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem::size_of;

use recbox::{Container, MAX_CAPACITY, Record};
use recbox_test_utils::{AllocationDelta, TrackingAllocator, measure};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

const RECORD_SIZE: isize = size_of::<Record>() as isize;

#[test]
fn test_create_reserves_exactly_initial_capacity() {
    let mut kept = None;

    let delta = measure(|| {
        kept = Some(Container::create(10).expect("Failed to create(10)"));
    });

    assert_eq!(
        delta,
        AllocationDelta {
            bytes: 10 * RECORD_SIZE,
            allocations: 1
        }
    );

    let delta = measure(|| {
        if let Some(container) = kept.take() {
            container.release();
        }
    });

    assert_eq!(
        delta,
        AllocationDelta {
            bytes: -10 * RECORD_SIZE,
            allocations: -1
        }
    );
}

#[test]
fn test_release_after_growth_leaves_nothing_behind() {
    let delta = measure(|| {
        let mut container = Container::create(1).expect("Failed to create(1)");
        for i in 0..MAX_CAPACITY {
            container
                .insert(i as i32, "record", i as f64)
                .expect("Failed to insert(..)");
        }
        assert_eq!(container.capacity(), MAX_CAPACITY);
        container.release();
    });

    assert!(delta.is_balanced(), "leaked: {delta:?}");
}

#[test]
fn test_growth_allocates_doubled_buffer() {
    let mut container = Container::create(4).expect("Failed to create(4)");
    for i in 0..4 {
        container.insert(i, "x", 1.0).expect("Failed to insert(..)");
    }

    let delta = measure(|| {
        container.insert(4, "x", 1.0).expect("Failed to insert(4)");
    });

    assert_eq!(delta.bytes, 4 * RECORD_SIZE);
    assert_eq!(delta.allocations, 0);
}

#[test]
fn test_failed_operations_do_not_allocate() {
    let delta = measure(|| {
        assert!(Container::create(0).is_err());
        assert!(Container::create(MAX_CAPACITY + 1).is_err());
    });
    assert!(delta.is_balanced());

    let mut container = Container::create(1).expect("Failed to create(1)");
    container.insert(1, "A", 1.0).expect("Failed to insert(1)");

    let delta = measure(|| {
        assert!(container.insert(2, "", 1.0).is_err());
        assert!(container.insert(2, "B", -1.0).is_err());
    });
    assert_eq!(delta, AllocationDelta::ZERO);
}

#[test]
fn test_drop_without_release_frees_buffer() {
    let delta = measure(|| {
        let mut container = Container::create(8).expect("Failed to create(8)");
        container.insert(1, "A", 1.0).expect("Failed to insert(1)");
    });

    assert!(delta.is_balanced());
}
