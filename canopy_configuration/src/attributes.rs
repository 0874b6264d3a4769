// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The text attribute mapping.
//!
//! This module provides [`TextAttributes`], a keyed collection of rendering
//! directives (paragraph layout, spacing, font, colors) consumed by a
//! rich-text rendering API, together with its key type [`AttributeKey`] and
//! the type-erased [`AttributeValue`] entries it stores.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::any::Any;
use core::fmt;

/// A key for entries in a [`TextAttributes`] mapping.
///
/// Attribute keys are simple `u16` identifiers. Indices `0..=15` are
/// reserved for the well-known keys defined as associated constants here;
/// hosts that carry additional rich-text directives define their own keys
/// from `16` upward.
///
/// A host targeting a concrete rich-text API re-maps the well-known keys to
/// that API's attribute names at the boundary; the mapping's skip-if-absent
/// shape is the portable part.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::AttributeKey;
///
/// // Host-defined keys start after the reserved range.
/// const UNDERLINE: AttributeKey = AttributeKey::new(16);
/// assert_ne!(UNDERLINE, AttributeKey::FOREGROUND);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttributeKey(u16);

impl AttributeKey {
    /// Paragraph layout directives; value type [`ParagraphStyle`].
    ///
    /// [`ParagraphStyle`]: crate::ParagraphStyle
    pub const PARAGRAPH: Self = Self(0);
    /// Additional spacing between characters, in points; value type `f64`.
    pub const LETTER_SPACING: Self = Self(1);
    /// The font to render with; value type [`FontSpec`].
    ///
    /// [`FontSpec`]: crate::FontSpec
    pub const FONT: Self = Self(2);
    /// Glyph foreground color; value type [`Color`](peniko::Color).
    pub const FOREGROUND: Self = Self(3);
    /// Color drawn behind the glyphs; value type [`Color`](peniko::Color).
    pub const BACKGROUND: Self = Self(4);

    /// Creates a key with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AttributeKey").field(&self.0).finish()
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AttributeKey({})", self.0)
    }
}

/// A type-erased attribute value.
///
/// Entries in a [`TextAttributes`] mapping have heterogeneous types (a
/// paragraph style here, a color there), so the mapping stores them erased
/// and hands them back through a typed [`downcast_ref`]. Any
/// `'static + Clone` type can be stored, which keeps the key space open for
/// host-defined attributes.
///
/// [`downcast_ref`]: AttributeValue::downcast_ref
pub struct AttributeValue {
    inner: Box<dyn AnyClone>,
}

impl AttributeValue {
    /// Erases a concrete value.
    #[must_use]
    pub fn new<T: Clone + 'static>(value: T) -> Self {
        Self {
            inner: Box::new(value),
        }
    }

    /// Returns `true` if the contained value is of type `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.inner.as_any().is::<T>()
    }

    /// Attempts to downcast to a reference of type `T`.
    ///
    /// Returns `None` if the contained value is not of type `T`.
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref()
    }
}

impl Clone for AttributeValue {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone_boxed(),
        }
    }
}

impl fmt::Debug for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeValue")
            .field("type_id", &self.inner.as_any().type_id())
            .finish_non_exhaustive()
    }
}

/// Trait object for erased values that can be cloned.
trait AnyClone: Any {
    fn as_any(&self) -> &dyn Any;
    fn clone_boxed(&self) -> Box<dyn AnyClone>;
}

impl<T: Clone + 'static> AnyClone for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn clone_boxed(&self) -> Box<dyn AnyClone> {
        Box::new(self.clone())
    }
}

/// A keyed collection of rich-text rendering directives.
///
/// The mapping is plain owned data: [`LabelConfig::text_attributes`] builds
/// a fresh one from the label's live field values on every call, and callers
/// may add or replace entries before handing the mapping to a renderer.
/// Entries are kept sorted by key for binary-search lookup.
///
/// Absent entries mean "no directive": a mapping derived from a label with
/// no font simply has no [`FONT`](AttributeKey::FONT) entry, never a
/// placeholder.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::{AttributeKey, TextAttributes};
/// use peniko::Color;
///
/// let mut attributes = TextAttributes::new();
/// attributes.insert(AttributeKey::FOREGROUND, Color::BLACK);
/// attributes.insert(AttributeKey::LETTER_SPACING, 0.5_f64);
///
/// assert_eq!(attributes.get::<Color>(AttributeKey::FOREGROUND), Some(&Color::BLACK));
/// assert_eq!(attributes.get::<f64>(AttributeKey::LETTER_SPACING), Some(&0.5));
/// assert!(!attributes.contains(AttributeKey::FONT));
/// ```
///
/// [`LabelConfig::text_attributes`]: crate::LabelConfig::text_attributes
#[derive(Clone, Debug, Default)]
pub struct TextAttributes {
    /// Sorted by `AttributeKey` for binary search lookup.
    entries: Vec<(AttributeKey, AttributeValue)>,
}

impl TextAttributes {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns `true` if the mapping has no entries.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries in the mapping.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Sets the value for a key.
    ///
    /// If the key was already present, the value is replaced.
    pub fn insert<T: Clone + 'static>(&mut self, key: AttributeKey, value: T) {
        let erased = AttributeValue::new(value);

        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => {
                self.entries[idx].1 = erased;
            }
            Err(idx) => {
                self.entries.insert(idx, (key, erased));
            }
        }
    }

    /// Gets the value for a key, if present and of type `T`.
    #[must_use]
    #[inline]
    pub fn get<T: Clone + 'static>(&self, key: AttributeKey) -> Option<&T> {
        self.entries
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .and_then(|idx| self.entries[idx].1.downcast_ref())
    }

    /// Returns `true` if the mapping has an entry for the key.
    #[must_use]
    #[inline]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.entries
            .binary_search_by_key(&key, |(k, _)| *k)
            .is_ok()
    }

    /// Removes the entry for a key.
    ///
    /// Returns `true` if an entry was removed.
    pub fn remove(&mut self, key: AttributeKey) -> bool {
        match self.entries.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => {
                self.entries.remove(idx);
                true
            }
            Err(_) => false,
        }
    }

    /// Returns an iterator over the keys in the mapping, in key order.
    pub fn keys(&self) -> impl Iterator<Item = AttributeKey> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }
}
