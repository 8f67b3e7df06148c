// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for recbox crates.
//!
//! ## License
//!
//! GPL-3.0-only

mod tracking_alloc;

pub use tracking_alloc::{AllocationDelta, TrackingAllocator, live_allocations, live_bytes, measure};
