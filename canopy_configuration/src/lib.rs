// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_configuration --heading-base-level=0

//! Canopy Configuration: plain configuration value objects for UI views.
//!
//! This crate bundles the visual properties an application commonly assigns
//! to a view (colors, borders, fonts, insets, per-state title and image
//! variants) into inert data records with documented defaults, one record
//! per element kind:
//!
//! - [`ViewConfig`]: background, border, corner radius, clipping, content
//!   mode, padding, and fixed size for any view
//! - [`LabelConfig`]: text color, font, alignment, line handling, and a
//!   derived [`TextAttributes`] mapping for rich-text rendering
//! - [`ButtonConfig`]: per-state titles, title colors, images, and
//!   background images, plus edge insets
//! - [`ImageConfig`]: an optional image resource
//!
//! ## Core Concepts
//!
//! ### Configurations are inert data
//!
//! A configuration is owned by whichever application code constructs it. It
//! holds no back-reference to any view, emits no notification when a field
//! is reassigned, and is never observed: it does nothing until something
//! reads its fields and hands them to the host framework. (The companion
//! `canopy_styled` crate is the piece designed to notify: its setter runs an
//! apply hook, which is typically where a configuration gets read.)
//!
//! ```rust
//! use canopy_configuration::{ContentMode, ViewConfig};
//! use kurbo::{Insets, Size};
//!
//! let mut config = ViewConfig::new();
//! assert_eq!(config.corner_radius, 0.0);
//!
//! config.corner_radius = 8.0;
//! config.clips_to_bounds = true;
//! config.content_mode = ContentMode::AspectFit;
//! config.padding = Insets::uniform(12.0);
//! config.size = Size::new(44.0, 44.0);
//! ```
//!
//! Nothing is validated: a negative border width or an out-of-range inset is
//! stored as given. The worst case is a visually incorrect render, which is
//! the host framework's concern, not this crate's.
//!
//! ### Per-state bundles
//!
//! Buttons hold independent values per interaction state. Each of the four
//! states is its own optional slot with no fallback between states: setting
//! the normal title says nothing about the highlighted one.
//!
//! ```rust
//! use canopy_configuration::{ButtonConfig, ControlState};
//!
//! let mut config = ButtonConfig::new();
//! config.title.normal = Some("OK".to_string());
//!
//! assert_eq!(config.title.get(ControlState::Normal).map(String::as_str), Some("OK"));
//! assert_eq!(config.title.highlighted, None);
//! assert_eq!(config.title.disabled, None);
//! ```
//!
//! ### The derived attribute mapping
//!
//! [`LabelConfig::text_attributes`] assembles the label's current text
//! fields into a [`TextAttributes`] mapping suitable for a rich-text
//! renderer. The mapping is recomputed from the live field values on every
//! call, and fields that are `None` are omitted rather than emitted as
//! placeholders:
//!
//! ```rust
//! use canopy_configuration::{AttributeKey, LabelConfig};
//! use peniko::Color;
//!
//! let mut label = LabelConfig::new();
//! label.font = None;
//!
//! let attributes = label.text_attributes();
//! assert!(attributes.contains(AttributeKey::PARAGRAPH));
//! assert_eq!(attributes.get::<Color>(AttributeKey::FOREGROUND), Some(&Color::BLACK));
//! assert!(!attributes.contains(AttributeKey::FONT));
//! ```
//!
//! Keys live in a small `u16` space owned by this crate ([`AttributeKey`]);
//! a host targeting a concrete rich-text API re-maps the well-known keys to
//! that API's attribute names at the boundary.
//!
//! ## Threading
//!
//! Configurations are not designed for concurrent mutation. Callers that
//! share one across threads must serialize access externally.
//!
//! This crate is `no_std` and uses `alloc`. It does not depend on `std`.

#![no_std]

extern crate alloc;

mod attributes;
mod button;
mod font;
mod image;
mod label;
mod state;
mod text;
mod view;

pub use attributes::{AttributeKey, AttributeValue, TextAttributes};
pub use button::ButtonConfig;
pub use font::{FontFamily, FontSpec, FontWeight};
pub use image::{ImageConfig, ImageId};
pub use label::LabelConfig;
pub use state::{ControlState, ControlStates, StateValues};
pub use text::{LineBreakMode, ParagraphStyle, TextAlignment};
pub use view::{ContentMode, ViewConfig};
