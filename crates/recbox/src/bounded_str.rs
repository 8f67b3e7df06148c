// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::ops::Deref;

/// A fixed-size inline string holding at most `N` bytes of UTF-8.
///
/// Unlike `String`, this type never allocates: the text lives in a `[u8; N]`
/// buffer next to its length, so it is `Copy` and has the same size whatever
/// it contains. Longer input is cut at the last character boundary that fits.
///
/// # Example
///
/// ```rust
/// use recbox::BoundedStr;
///
/// let (name, truncated) = BoundedStr::<4>::truncate_from("crab🦀");
///
/// // The crab emoji is 4 bytes and does not fit after "crab".
/// assert!(truncated);
/// assert_eq!(name.as_str(), "crab");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoundedStr<const N: usize> {
    // Bytes at `len..` are always zero, so derived equality is exact.
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BoundedStr<N> {
    /// Maximum number of bytes this string can hold.
    pub const CAPACITY: usize = N;

    /// Creates an empty `BoundedStr`.
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Copies the longest prefix of `src` that fits in `N` bytes.
    ///
    /// The prefix always ends on a `char` boundary. The returned flag is
    /// `true` if any part of `src` was dropped.
    pub fn truncate_from(src: &str) -> (Self, bool) {
        let mut end = src.len().min(N);
        while !src.is_char_boundary(end) {
            end -= 1;
        }

        let mut bytes = [0u8; N];
        bytes[..end].copy_from_slice(&src.as_bytes()[..end]);

        (Self { bytes, len: end }, end < src.len())
    }

    /// Returns the length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the stored text.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY (PRECONDITIONS ARE MET): `bytes[..len]` was copied from a `&str`
        // and cut on a char boundary by `truncate_from`, the only writer.
        unsafe { core::str::from_utf8_unchecked(&self.bytes[..self.len]) }
    }
}

impl<const N: usize> Default for BoundedStr<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for BoundedStr<N> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.as_str()
    }
}

impl<const N: usize> fmt::Debug for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for BoundedStr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<const N: usize> PartialEq<str> for BoundedStr<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for BoundedStr<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
