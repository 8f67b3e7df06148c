// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for recbox.

use thiserror::Error;

/// Reason a record was rejected by validation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum InputError {
    /// The record name was empty.
    #[error("name must not be empty")]
    EmptyName,

    /// The record value was outside the configured range (or NaN).
    #[error("value is outside the accepted range")]
    ValueOutOfRange,
}

/// Reason a [`ContainerConfig`](crate::ContainerConfig) was refused.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ConfigError {
    /// The growth ceiling was zero or above the hard limit.
    #[error("growth ceiling {requested} is outside 1..={max}")]
    CeilingOutOfRange {
        /// Ceiling the configuration asked for.
        requested: usize,
        /// Hard limit ([`MAX_CAPACITY`](crate::MAX_CAPACITY)).
        max: usize,
    },

    /// The value bounds were inverted, NaN, or wider than the accepted range.
    #[error("value bounds must be ordered and lie within the accepted range")]
    ValueBoundsOutOfRange,
}

/// Error type for `Container` operations.
///
/// Every variant is recoverable by the caller. Failed operations leave the
/// container exactly as it was.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ContainerError {
    /// Initial capacity was zero or above the growth ceiling.
    #[error("invalid capacity {requested}: must be in 1..={max}")]
    InvalidCapacity {
        /// Capacity the caller asked for.
        requested: usize,
        /// Growth ceiling of the configuration.
        max: usize,
    },

    /// The record buffer could not be allocated or resized.
    #[error("allocation failed for {requested} record slots")]
    AllocationFailure {
        /// Total number of slots that were requested.
        requested: usize,
    },

    /// The configuration breaks the hard limits.
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// The record failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// The container is full and already at its growth ceiling.
    #[error("capacity exceeded: container is full at {max} records")]
    CapacityExceeded {
        /// Growth ceiling of the configuration.
        max: usize,
    },
}
