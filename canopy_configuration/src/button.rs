// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Button configuration.

use alloc::string::String;

use kurbo::Insets;
use peniko::Color;

use crate::font::FontSpec;
use crate::image::ImageId;
use crate::state::StateValues;
use crate::view::ViewConfig;

/// Visual configuration for a button.
///
/// Embeds a [`ViewConfig`] for the base view fields and adds per-state
/// title, title color, image, and background image bundles, plus the edge
/// insets a button lays its parts out with. Each [`StateValues`] bundle is
/// independent: no state falls back to another, so every state a caller
/// wants rendered distinctly must be configured explicitly.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::{ButtonConfig, ControlState};
/// use kurbo::Insets;
/// use peniko::Color;
///
/// let mut button = ButtonConfig::new();
/// button.title.normal = Some("Save".to_string());
/// button.title_color.normal = Some(Color::BLACK);
/// button.title_color.disabled = Some(Color::TRANSPARENT);
/// button.content_insets = Insets::uniform(6.0);
///
/// assert_eq!(button.title.get(ControlState::Normal).map(String::as_str), Some("Save"));
/// assert_eq!(button.title.get(ControlState::Disabled), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonConfig {
    /// Base view fields.
    pub view: ViewConfig,
    /// Font for the title in every state. Default: system font at 14 points.
    pub title_font: FontSpec,
    /// Title text per state.
    pub title: StateValues<String>,
    /// Title color per state.
    pub title_color: StateValues<Color>,
    /// Foreground image per state.
    pub image: StateValues<ImageId>,
    /// Background image per state.
    pub background_image: StateValues<ImageId>,
    /// Insets between the button's bounds and its content. Default: zero.
    pub content_insets: Insets,
    /// Insets applied around the image. Default: zero.
    pub image_insets: Insets,
    /// Insets applied around the title. Default: zero.
    pub title_insets: Insets,
}

impl ButtonConfig {
    /// Creates a configuration with every field at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: ViewConfig::new(),
            title_font: FontSpec::system(FontSpec::DEFAULT_SIZE),
            title: StateValues::new(),
            title_color: StateValues::new(),
            image: StateValues::new(),
            background_image: StateValues::new(),
            content_insets: Insets::ZERO,
            image_insets: Insets::ZERO,
            title_insets: Insets::ZERO,
        }
    }
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self::new()
    }
}
