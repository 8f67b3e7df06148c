// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;

use log::{debug, warn};

use crate::config::ContainerConfig;
use crate::error::ContainerError;
use crate::record::{Record, RecordName};
#[cfg(test)]
use crate::sentinel::{AssertReleaseOnDrop, ReleaseSentinel};

/// Test behaviour for injecting allocation failures in `Container` operations.
///
/// This is only available with the `test_utils` feature and lets users test
/// the error handling paths of their code.
///
/// The behaviour is sticky: once set, it remains active until changed.
///
/// # Example
///
/// ```rust,ignore
/// // test_utils feature required in dev-dependencies
/// use recbox::{Container, ContainerBehaviour, ContainerError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_grow_failure() -> Result<(), ContainerError> {
///         let mut container = Container::create(1)?;
///         container.insert(1, "A", 1.0)?;
///
///         container.change_behaviour(ContainerBehaviour::FailAtGrow);
///         assert!(container.insert(2, "B", 1.0).is_err());
///
///         container.change_behaviour(ContainerBehaviour::None);
///         container.insert(2, "B", 1.0)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test_utils"))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ContainerBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Construction fails with `AllocationFailure`.
    FailAtCreate,
    /// Every growth step fails with `AllocationFailure`.
    FailAtGrow,
}

/// Outcome of a successful [`Container::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insertion {
    /// Index the record was stored at.
    pub index: usize,
    /// `true` if the insert had to grow the container first.
    pub grew: bool,
    /// `true` if the name was cut to fit.
    pub truncated: bool,
}

/// Growable, append-only container of validated [`Record`]s.
///
/// The logical capacity is tracked explicitly and grows on the doubling
/// schedule `1 → 2 → 4 → ...`, clamped to the configured ceiling. The
/// underlying buffer is reserved with fallible allocation, so running out of
/// memory is reported as [`ContainerError::AllocationFailure`] rather than
/// aborting.
///
/// # Example
///
/// ```rust
/// use recbox::{Container, ContainerError};
///
/// fn example() -> Result<(), ContainerError> {
///     let mut container = Container::create(2)?;
///     container.insert(7, "seven", 7.0)?;
///
///     assert_eq!(container.len(), 1);
///     assert_eq!(container.capacity(), 2);
///     assert_eq!(container.get(0).map(|r| r.name()), Some("seven"));
///     Ok(())
/// }
/// # example().unwrap();
/// ```
///
/// A released container cannot be touched again:
///
/// ```compile_fail
/// use recbox::Container;
///
/// let container = Container::create(1).unwrap();
/// container.release();
/// let _ = container.len();
/// ```
pub struct Container {
    items: Vec<Record>,
    capacity: usize,
    config: ContainerConfig,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: ContainerBehaviour,
    #[cfg(test)]
    __sentinel: ReleaseSentinel,
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("max_capacity", &self.config.max_capacity)
            .finish()
    }
}

impl Container {
    /// Creates an empty container with exactly `initial_capacity` slots,
    /// using the default limits.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::InvalidCapacity`] if `initial_capacity` is `0` or
    ///   above [`MAX_CAPACITY`](crate::MAX_CAPACITY).
    /// - [`ContainerError::AllocationFailure`] if the buffer cannot be reserved.
    pub fn create(initial_capacity: usize) -> Result<Self, ContainerError> {
        Self::with_config(ContainerConfig::default(), initial_capacity)
    }

    /// Creates an empty container governed by `config`.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::InvalidConfig`] if `config` fails
    ///   [`ContainerConfig::validate`].
    /// - Otherwise the same as [`Container::create`], checked against
    ///   `config.max_capacity`.
    pub fn with_config(
        config: ContainerConfig,
        initial_capacity: usize,
    ) -> Result<Self, ContainerError> {
        config.validate()?;
        config.validate_capacity(initial_capacity)?;

        let mut items = Vec::new();
        items
            .try_reserve_exact(initial_capacity)
            .map_err(|_| ContainerError::AllocationFailure {
                requested: initial_capacity,
            })?;

        debug!("created container with {initial_capacity} record slots");

        Ok(Self {
            items,
            capacity: initial_capacity,
            config,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: ContainerBehaviour::default(),
            #[cfg(test)]
            __sentinel: ReleaseSentinel::default(),
        })
    }

    /// Creates a container with an injected failure behaviour.
    ///
    /// [`ContainerBehaviour::FailAtCreate`] makes construction fail with
    /// [`ContainerError::AllocationFailure`] after the capacity check passed.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_behaviour(
        config: ContainerConfig,
        initial_capacity: usize,
        behaviour: ContainerBehaviour,
    ) -> Result<Self, ContainerError> {
        config.validate()?;
        config.validate_capacity(initial_capacity)?;

        if matches!(behaviour, ContainerBehaviour::FailAtCreate) {
            return Err(ContainerError::AllocationFailure {
                requested: initial_capacity,
            });
        }

        let mut container = Self::with_config(config, initial_capacity)?;
        container.behaviour = behaviour;

        Ok(container)
    }

    /// Changes the test behaviour for this container.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: ContainerBehaviour) {
        self.behaviour = behaviour;
    }

    /// Validates and appends a record.
    ///
    /// Names longer than [`NAME_MAX_LEN`](crate::NAME_MAX_LEN) bytes are
    /// truncated silently; [`Insertion::truncated`] reports it.
    ///
    /// # Errors
    ///
    /// - [`ContainerError::InvalidInput`] if `name` is empty or `value` is
    ///   outside the configured range. Checked before anything else.
    /// - [`ContainerError::CapacityExceeded`] if the container is full at its
    ///   ceiling.
    /// - [`ContainerError::AllocationFailure`] if growing the buffer failed.
    ///
    /// The container is unchanged whenever an error is returned.
    pub fn insert(&mut self, id: i32, name: &str, value: f64) -> Result<Insertion, ContainerError> {
        if let Err(reason) = self.config.validate_input(name, value) {
            warn!("rejected record {id}: {reason}");
            return Err(reason.into());
        }

        let grew = self.maybe_grow()?;

        let (name, truncated) = RecordName::truncate_from(name);
        if truncated {
            debug!("truncated name of record {id} to {} bytes", name.len());
        }

        let index = self.items.len();
        self.items.push(Record::new(id, name, value));

        debug_assert!(self.items.len() <= self.capacity);

        Ok(Insertion {
            index,
            grew,
            truncated,
        })
    }

    #[inline(always)]
    fn maybe_grow(&mut self) -> Result<bool, ContainerError> {
        if self.items.len() < self.capacity {
            return Ok(false);
        }

        self.grow()?;
        Ok(true)
    }

    /// Doubles the capacity, clamped to the ceiling.
    ///
    /// Leaves `self` untouched on error.
    #[cold]
    #[inline(never)]
    fn grow(&mut self) -> Result<(), ContainerError> {
        let new_capacity = self.config.grown_capacity(self.capacity);

        if new_capacity <= self.capacity {
            warn!(
                "container is full at its ceiling of {} records",
                self.config.max_capacity
            );
            return Err(ContainerError::CapacityExceeded {
                max: self.config.max_capacity,
            });
        }

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, ContainerBehaviour::FailAtGrow) {
            return Err(ContainerError::AllocationFailure {
                requested: new_capacity,
            });
        }

        self.items
            .try_reserve_exact(new_capacity - self.items.len())
            .map_err(|_| ContainerError::AllocationFailure {
                requested: new_capacity,
            })?;

        debug!(
            "grew container from {} to {new_capacity} record slots",
            self.capacity
        );
        self.capacity = new_capacity;

        Ok(())
    }

    /// Returns the number of stored records.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no records are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of reserved record slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the growth ceiling.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.config.max_capacity
    }

    /// Returns the limits this container was created with.
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    /// Returns the record at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.items.get(index)
    }

    /// Returns all records in insertion order.
    pub fn as_slice(&self) -> &[Record] {
        &self.items
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.items.iter())
    }

    /// Writes the tabular listing into `out`.
    ///
    /// ```text
    /// Container contents (1 items):
    /// ID	Name	Value
    /// --	----	-----
    /// 1	A	5.00
    /// ```
    pub fn render_to<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "Container contents ({} items):", self.len())?;
        writeln!(out, "ID\tName\tValue")?;
        writeln!(out, "--\t----\t-----")?;

        for record in self {
            writeln!(
                out,
                "{}\t{}\t{:.2}",
                record.id(),
                record.name(),
                record.value()
            )?;
        }

        Ok(())
    }

    /// Returns the tabular listing as a `String`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Frees the record buffer and consumes the container.
    pub fn release(self) {
        debug!("releasing container holding {} records", self.len());
        drop(self);
    }
}

impl Drop for Container {
    fn drop(&mut self) {
        drop(core::mem::take(&mut self.items));

        #[cfg(test)]
        self.__sentinel.mark_released();
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render_to(f)
    }
}

#[cfg(test)]
impl AssertReleaseOnDrop for Container {
    fn clone_sentinel(&self) -> ReleaseSentinel {
        self.__sentinel.clone()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = &'a Record;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the records of a [`Container`].
#[derive(Clone, Debug)]
pub struct Iter<'a>(slice::Iter<'a, Record>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Record;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
