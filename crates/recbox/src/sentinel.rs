// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Runtime verification that a container freed its storage on drop.
///
/// Wraps a shared flag (`Arc<AtomicBool>`) that starts out unset and is set
/// once the owning container has given its buffer back. Clones share the
/// flag, so a test can keep a clone and observe the drop from outside.
#[derive(Clone, Debug, Default)]
pub struct ReleaseSentinel(Arc<AtomicBool>);

impl ReleaseSentinel {
    /// Marks the storage as released.
    pub fn mark_released(&mut self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Returns `true` once the storage has been released.
    pub fn is_released(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Resets the sentinel to the live state.
    pub fn reset(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Types whose drop can be checked through a [`ReleaseSentinel`].
pub trait AssertReleaseOnDrop: Sized {
    /// Clones the internal [`ReleaseSentinel`].
    fn clone_sentinel(&self) -> ReleaseSentinel;

    /// Drops `self` and asserts that its storage was released.
    ///
    /// # Panics
    ///
    /// Panics if the sentinel was not marked during drop.
    fn assert_release_on_drop(self) {
        let mut sentinel = self.clone_sentinel();
        sentinel.reset();

        assert!(!sentinel.is_released());
        drop(self);
        assert!(sentinel.is_released());
    }
}
