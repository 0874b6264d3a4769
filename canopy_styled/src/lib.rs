// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_styled --heading-base-level=0

//! Canopy Styled: a style-holder capability for view types.
//!
//! This crate provides the small contract that lets any view type hold an
//! optional style value and re-apply it whenever the value is set:
//!
//! - [`StyleSlot`]: the storage cell a view embeds for its current style
//! - [`Styled`]: the capability trait that turns slot access plus an apply
//!   hook into the `style`/`set_style` surface
//!
//! ## Design Philosophy
//!
//! The capability deliberately separates two things that are easy to
//! conflate:
//!
//! - **Storing** a style value: owned by [`StyleSlot`], which is inert data
//!   with no behavior of its own
//! - **Applying** a style value: owned by the adopting view, which supplies
//!   [`Styled::apply_style`] to push the value into its own presentation
//!
//! Many view types can then share the storage mechanism and the setter
//! semantics while keeping their apply logic local. The trait does not
//! inspect or validate what the hook does; a style value is opaque,
//! caller-defined data.
//!
//! There is no side table keyed by object identity and no global state: the
//! adopting type holds a real [`StyleSlot`] field, and the trait's required
//! methods simply hand out access to it.
//!
//! ## Usage
//!
//! ```rust
//! use canopy_styled::{StyleSlot, Styled};
//!
//! #[derive(Clone)]
//! struct BadgeStyle {
//!     uppercase: bool,
//! }
//!
//! struct Badge {
//!     text: String,
//!     style: StyleSlot<BadgeStyle>,
//! }
//!
//! impl Styled for Badge {
//!     type Style = BadgeStyle;
//!
//!     fn style_slot(&self) -> &StyleSlot<BadgeStyle> {
//!         &self.style
//!     }
//!
//!     fn style_slot_mut(&mut self) -> &mut StyleSlot<BadgeStyle> {
//!         &mut self.style
//!     }
//!
//!     fn apply_style(&mut self, style: &BadgeStyle) {
//!         if style.uppercase {
//!             self.text = self.text.to_uppercase();
//!         }
//!     }
//! }
//!
//! let mut badge = Badge {
//!     text: "new".to_string(),
//!     style: StyleSlot::new(),
//! };
//! assert!(badge.style().is_none());
//!
//! // The hook runs synchronously, before `set_style` returns.
//! badge.set_style(Some(BadgeStyle { uppercase: true }));
//! assert_eq!(badge.text, "NEW");
//! assert!(badge.style().is_some());
//!
//! // Clearing never invokes the hook.
//! badge.set_style(None);
//! assert!(badge.style().is_none());
//! ```
//!
//! ## Threading
//!
//! Everything here is single-threaded and synchronous. The apply hook runs
//! on the caller's thread before the setter returns, so a caller that sets a
//! style and immediately reads the resulting presentation observes the
//! applied state. Views shared across threads must be serialized externally.
//!
//! This crate is `no_std` and does not allocate.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod slot;
mod styled;

pub use slot::StyleSlot;
pub use styled::Styled;
