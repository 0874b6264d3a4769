// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style storage.
//!
//! This module provides [`StyleSlot`], the cell a view embeds to hold its
//! current style value.

use core::fmt;

/// Storage for a view's current style value.
///
/// A slot starts empty and holds at most one value of the view's style type.
/// It is inert: reading and replacing the value never triggers any behavior.
/// The update contract, invoking the apply hook when a new value lands,
/// belongs to [`Styled::set_style`](crate::Styled::set_style), which is the
/// only way the slot is meant to be written once a view adopts the
/// capability.
///
/// # Example
///
/// ```rust
/// use canopy_styled::StyleSlot;
///
/// let slot: StyleSlot<u32> = StyleSlot::new();
/// assert!(!slot.is_set());
/// assert_eq!(slot.get(), None);
///
/// let slot = StyleSlot::from(Some(7_u32));
/// assert_eq!(slot.get(), Some(&7));
/// ```
pub struct StyleSlot<S> {
    pub(crate) value: Option<S>,
}

impl<S> StyleSlot<S> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Returns the held style value, if any.
    #[must_use]
    #[inline]
    pub fn get(&self) -> Option<&S> {
        self.value.as_ref()
    }

    /// Returns `true` if the slot holds a value.
    #[must_use]
    #[inline]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }
}

impl<S> Default for StyleSlot<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> From<Option<S>> for StyleSlot<S> {
    fn from(value: Option<S>) -> Self {
        Self { value }
    }
}

impl<S> fmt::Debug for StyleSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSlot")
            .field("set", &self.value.is_some())
            .finish()
    }
}
