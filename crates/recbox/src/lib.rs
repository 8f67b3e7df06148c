// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable record container with validated inserts and a hard capacity ceiling.
//!
//! [`Container`] owns a contiguous buffer of fixed-shape [`Record`]s. It tracks
//! the logical size separately from the reserved capacity, doubles capacity
//! when full, and never grows past [`MAX_CAPACITY`].
//!
//! # Core Guarantees
//!
//! - **Validated inserts**: empty names and values outside `[0.0, 1000.0]` are
//!   rejected before anything is touched.
//! - **Bounded growth**: capacity follows `min(2 * capacity, MAX_CAPACITY)`. A
//!   full container at the ceiling fails with
//!   [`ContainerError::CapacityExceeded`] instead of growing.
//! - **Fallible allocation**: allocation failures surface as
//!   [`ContainerError::AllocationFailure`] and leave the container unchanged.
//! - **Single owner**: [`Container::release`] takes `self`, so a released
//!   container cannot be used or released again.
//!
//! # Example
//!
//! ```rust
//! use recbox::{Container, ContainerError};
//!
//! fn example() -> Result<(), ContainerError> {
//!     let mut container = Container::create(1)?;
//!
//!     container.insert(1, "A", 5.0)?;
//!     assert_eq!(container.capacity(), 1);
//!
//!     // Full: the next insert doubles the capacity.
//!     let insertion = container.insert(2, "B", 5.0)?;
//!     assert!(insertion.grew);
//!     assert_eq!(container.capacity(), 2);
//!
//!     assert_eq!(
//!         container.render(),
//!         "Container contents (2 items):\nID\tName\tValue\n--\t----\t-----\n1\tA\t5.00\n2\tB\t5.00\n"
//!     );
//!
//!     container.release();
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject allocation failures:
//!
//! ```toml
//! [dev-dependencies]
//! recbox = { version = "*", features = ["test_utils"] }
//! ```
//!
//! Then use [`ContainerBehaviour`] to exercise the error paths of your code.

#![warn(missing_docs)]

mod bounded_str;
mod config;
mod container;
mod error;
mod record;

#[cfg(test)]
mod sentinel;

#[cfg(test)]
mod tests;

pub use bounded_str::BoundedStr;
pub use config::{ContainerConfig, MAX_CAPACITY, MAX_VALUE, MIN_VALUE, NAME_MAX_LEN, VERSION};
pub use container::{Container, Insertion, Iter};
pub use error::{ConfigError, ContainerError, InputError};
pub use record::{Record, RecordName};

#[cfg(any(test, feature = "test_utils"))]
pub use container::ContainerBehaviour;
