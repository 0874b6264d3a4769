// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Base configuration shared by every view kind.

use kurbo::{Insets, Size};
use peniko::Color;

/// How a view scales or positions its content within its bounds.
///
/// This mirrors the content-mode vocabulary of mainstream view toolkits.
/// The scaling modes resize the content; the positional modes keep the
/// content at its natural size and pin it to an edge or the center.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ContentMode {
    /// Stretch the content to fill the bounds, ignoring aspect ratio.
    #[default]
    ScaleToFill,
    /// Scale the content to fit within the bounds, preserving aspect ratio.
    AspectFit,
    /// Scale the content to cover the bounds, preserving aspect ratio.
    AspectFill,
    /// Center the content at its natural size.
    Center,
    /// Pin the content to the top edge at its natural size.
    Top,
    /// Pin the content to the bottom edge at its natural size.
    Bottom,
    /// Pin the content to the left edge at its natural size.
    Left,
    /// Pin the content to the right edge at its natural size.
    Right,
}

/// Visual configuration for a generic view.
///
/// This is the base record the element-specific configurations embed in
/// their `view` field. Every field has a documented default, every field is
/// independently reassignable, and there are no cross-field invariants.
/// Mutation emits no notification; a configuration is inert until something
/// reads it.
///
/// Color fields are optional where absence is meaningful ("no border color"
/// is `None`); geometry uses [`kurbo`]'s `f64`-based types.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::ViewConfig;
/// use peniko::Color;
///
/// let mut config = ViewConfig::new();
/// assert_eq!(config.background_color, Some(Color::TRANSPARENT));
/// assert_eq!(config.border_width, 0.0);
///
/// config.border_width = 1.0;
/// config.border_color = Some(Color::BLACK);
/// config.corner_radius = 4.0;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ViewConfig {
    /// Fill color behind the view's content. Default: transparent.
    pub background_color: Option<Color>,
    /// Width of the view's border stroke. Default: `0.0` (no border).
    pub border_width: f64,
    /// Color of the view's border stroke. Default: transparent.
    pub border_color: Option<Color>,
    /// Corner rounding radius applied to the view's bounds. Default: `0.0`.
    pub corner_radius: f64,
    /// Whether content drawn outside the bounds is clipped. Default: `false`.
    pub clips_to_bounds: bool,
    /// How content is scaled or positioned within the bounds.
    /// Default: [`ContentMode::ScaleToFill`].
    pub content_mode: ContentMode,
    /// Insets between the view's bounds and its content. Default: zero.
    pub padding: Insets,
    /// Fixed size for the view. Default: zero (no fixed size).
    pub size: Size,
}

impl ViewConfig {
    /// Creates a configuration with every field at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            background_color: Some(Color::TRANSPARENT),
            border_width: 0.0,
            border_color: Some(Color::TRANSPARENT),
            corner_radius: 0.0,
            clips_to_bounds: false,
            content_mode: ContentMode::ScaleToFill,
            padding: Insets::ZERO,
            size: Size::ZERO,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_defaults() {
        let config = ViewConfig::new();

        assert_eq!(config.background_color, Some(Color::TRANSPARENT));
        assert_eq!(config.border_width, 0.0);
        assert_eq!(config.border_color, Some(Color::TRANSPARENT));
        assert_eq!(config.corner_radius, 0.0);
        assert!(!config.clips_to_bounds);
        assert_eq!(config.content_mode, ContentMode::ScaleToFill);
        assert_eq!(config.padding, Insets::ZERO);
        assert_eq!(config.size, Size::ZERO);
    }

    #[test]
    fn view_default_trait_matches_new() {
        assert_eq!(ViewConfig::default(), ViewConfig::new());
    }

    #[test]
    fn mutation_is_visible_on_next_read() {
        let mut config = ViewConfig::new();

        config.border_width = 2.0;
        config.clips_to_bounds = true;
        config.padding = Insets::uniform(8.0);

        assert_eq!(config.border_width, 2.0);
        assert!(config.clips_to_bounds);
        assert_eq!(config.padding, Insets::uniform(8.0));
    }

    #[test]
    fn no_validation_of_field_values() {
        let mut config = ViewConfig::new();

        // Nonsense values are stored as given.
        config.border_width = -3.0;
        config.size = Size::new(-10.0, -10.0);

        assert_eq!(config.border_width, -3.0);
        assert_eq!(config.size, Size::new(-10.0, -10.0));
    }

    #[test]
    fn content_mode_default() {
        assert_eq!(ContentMode::default(), ContentMode::ScaleToFill);
    }
}
