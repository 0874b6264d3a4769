// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style-holder capability trait.
//!
//! This module provides [`Styled`], which gives adopting view types a
//! settable optional style with a synchronous apply hook.

use crate::slot::StyleSlot;

/// A capability for view types that hold an optional style value.
///
/// Adopters supply three things: read and write access to an embedded
/// [`StyleSlot`], and an [`apply_style`](Styled::apply_style) hook that
/// pushes a style value into the view's own presentation. The trait supplies
/// the rest: [`style`](Styled::style) reads the held value, and
/// [`set_style`](Styled::set_style) replaces it, running the hook exactly
/// once (synchronously, before the setter returns) whenever the new value
/// is non-empty.
///
/// The style type is opaque to this trait. Nothing is validated and nothing
/// can fail; the hook is trusted (by convention, not enforcement) to leave
/// the view's visible state matching the value it was handed.
///
/// # Example
///
/// ```rust
/// use canopy_styled::{StyleSlot, Styled};
///
/// struct DotStyle {
///     radius: f64,
/// }
///
/// struct Dot {
///     radius: f64,
///     style: StyleSlot<DotStyle>,
/// }
///
/// impl Styled for Dot {
///     type Style = DotStyle;
///
///     fn style_slot(&self) -> &StyleSlot<DotStyle> {
///         &self.style
///     }
///
///     fn style_slot_mut(&mut self) -> &mut StyleSlot<DotStyle> {
///         &mut self.style
///     }
///
///     fn apply_style(&mut self, style: &DotStyle) {
///         self.radius = style.radius;
///     }
/// }
///
/// let mut dot = Dot {
///     radius: 1.0,
///     style: StyleSlot::new(),
/// };
///
/// dot.set_style(Some(DotStyle { radius: 4.0 }));
/// assert_eq!(dot.radius, 4.0);
/// assert_eq!(dot.style().map(|s| s.radius), Some(4.0));
/// ```
pub trait Styled {
    /// The style value this view accepts.
    type Style;

    /// Returns a reference to the view's style slot.
    fn style_slot(&self) -> &StyleSlot<Self::Style>;

    /// Returns a mutable reference to the view's style slot.
    fn style_slot_mut(&mut self) -> &mut StyleSlot<Self::Style>;

    /// Applies a style value to the view's own presentation.
    ///
    /// [`set_style`](Styled::set_style) invokes this exactly once per
    /// non-empty assignment. Implementations should read the fields they
    /// care about from `style` and mutate the view accordingly; they should
    /// not call `set_style` from inside the hook.
    fn apply_style(&mut self, style: &Self::Style);

    /// Returns the most recently set style value, or `None` if the style
    /// has never been set or was last cleared.
    #[inline]
    fn style(&self) -> Option<&Self::Style> {
        self.style_slot().value.as_ref()
    }

    /// Replaces the view's style value.
    ///
    /// Setting `Some(value)` invokes [`apply_style`](Styled::apply_style)
    /// with the new value exactly once, synchronously, before this method
    /// returns; afterwards [`style`](Styled::style) returns the value.
    /// Setting `None` clears the slot without invoking the hook.
    ///
    /// The hook runs before the value lands in the slot, so it can take
    /// `&mut self` without aliasing the stored value. While the hook runs,
    /// [`style`](Styled::style) still reports the previous assignment; the
    /// hook must read the new value from its argument.
    fn set_style(&mut self, style: Option<Self::Style>) {
        match style {
            Some(value) => {
                self.apply_style(&value);
                self.style_slot_mut().value = Some(value);
            }
            None => self.style_slot_mut().value = None,
        }
    }
}
