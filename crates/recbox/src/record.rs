// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::bounded_str::BoundedStr;
use crate::config::NAME_MAX_LEN;

/// Name stored in a [`Record`].
pub type RecordName = BoundedStr<NAME_MAX_LEN>;

/// One entry of a [`Container`](crate::Container).
///
/// Records are only built by `Container::insert`, so every record held by a
/// container has passed validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    id: i32,
    name: RecordName,
    value: f64,
}

impl Record {
    pub(crate) fn new(id: i32, name: RecordName, value: f64) -> Self {
        Self { id, name, value }
    }

    /// Caller-supplied identifier.
    #[inline]
    pub fn id(&self) -> i32 {
        self.id
    }

    /// Name, truncated to [`NAME_MAX_LEN`] bytes.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Value, within the container's configured range.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}
