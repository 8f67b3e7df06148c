// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Container limits and validation ranges.

use crate::error::{ConfigError, ContainerError, InputError};

/// Crate version, printed by the demo banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling on the number of record slots a container may reserve.
pub const MAX_CAPACITY: usize = 100;

/// Maximum length of a record name in bytes. Longer names are truncated.
pub const NAME_MAX_LEN: usize = 49;

/// Lower bound (inclusive) for a record value.
pub const MIN_VALUE: f64 = 0.0;

/// Upper bound (inclusive) for a record value.
pub const MAX_VALUE: f64 = 1000.0;

/// Limits a [`Container`](crate::Container) is created with.
///
/// The configuration is copied into the container at construction and never
/// changes afterwards. A configuration may only tighten the defaults: the
/// ceiling stays within `1..=MAX_CAPACITY` and the value bounds within
/// `[MIN_VALUE, MAX_VALUE]`. See [`ContainerConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContainerConfig {
    /// Growth ceiling. Default: [`MAX_CAPACITY`].
    pub max_capacity: usize,
    /// Smallest accepted value. Default: [`MIN_VALUE`].
    pub min_value: f64,
    /// Largest accepted value. Default: [`MAX_VALUE`].
    pub max_value: f64,
}

impl ContainerConfig {
    /// Checks the configuration against the hard limits.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::CeilingOutOfRange`] if `max_capacity` is `0` or above
    ///   [`MAX_CAPACITY`].
    /// - [`ConfigError::ValueBoundsOutOfRange`] unless
    ///   `MIN_VALUE <= min_value <= max_value <= MAX_VALUE`. NaN bounds fail
    ///   this check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity == 0 || self.max_capacity > MAX_CAPACITY {
            return Err(ConfigError::CeilingOutOfRange {
                requested: self.max_capacity,
                max: MAX_CAPACITY,
            });
        }

        let ordered = MIN_VALUE <= self.min_value
            && self.min_value <= self.max_value
            && self.max_value <= MAX_VALUE;
        if !ordered {
            return Err(ConfigError::ValueBoundsOutOfRange);
        }

        Ok(())
    }

    /// Returns `Ok(())` if `capacity` lies in `1..=max_capacity`.
    pub fn validate_capacity(&self, capacity: usize) -> Result<(), ContainerError> {
        if capacity == 0 || capacity > self.max_capacity {
            return Err(ContainerError::InvalidCapacity {
                requested: capacity,
                max: self.max_capacity,
            });
        }

        Ok(())
    }

    /// Returns `true` if `value` lies in `[min_value, max_value]`.
    ///
    /// NaN is never in range.
    #[inline]
    pub fn value_in_range(&self, value: f64) -> bool {
        (self.min_value..=self.max_value).contains(&value)
    }

    pub(crate) fn validate_input(&self, name: &str, value: f64) -> Result<(), InputError> {
        if name.is_empty() {
            return Err(InputError::EmptyName);
        }

        if !self.value_in_range(value) {
            return Err(InputError::ValueOutOfRange);
        }

        Ok(())
    }

    /// Next capacity on the doubling schedule, clamped to `max_capacity`.
    #[inline]
    pub(crate) fn grown_capacity(&self, capacity: usize) -> usize {
        capacity.saturating_mul(2).min(self.max_capacity)
    }
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            max_capacity: MAX_CAPACITY,
            min_value: MIN_VALUE,
            max_value: MAX_VALUE,
        }
    }
}
