// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label configuration and the derived text attribute mapping.

use peniko::Color;

use crate::attributes::{AttributeKey, TextAttributes};
use crate::font::FontSpec;
use crate::text::{LineBreakMode, ParagraphStyle, TextAlignment};
use crate::view::ViewConfig;

/// Visual configuration for a text label.
///
/// Embeds a [`ViewConfig`] for the base view fields and adds everything a
/// label needs to lay out and color its text. Like every configuration,
/// this is inert data with documented defaults and no mutation
/// notifications.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::{LabelConfig, TextAlignment};
/// use peniko::Color;
///
/// let mut label = LabelConfig::new();
/// assert_eq!(label.max_lines, 1);
/// assert_eq!(label.text_color, Some(Color::BLACK));
///
/// label.max_lines = 0; // unlimited
/// label.alignment = TextAlignment::Center;
/// label.view.corner_radius = 4.0;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LabelConfig {
    /// Base view fields.
    pub view: ViewConfig,
    /// Maximum number of lines; `0` means unlimited. Default: `1`.
    pub max_lines: u32,
    /// Glyph foreground color. Default: black.
    pub text_color: Option<Color>,
    /// Color drawn behind the glyphs. Default: transparent.
    pub text_background_color: Option<Color>,
    /// Font descriptor. Default: system font at 14 points.
    pub font: Option<FontSpec>,
    /// Horizontal alignment. Default: [`TextAlignment::Left`].
    pub alignment: TextAlignment,
    /// Overflow handling. Default: [`LineBreakMode::TruncateTail`].
    pub line_break: LineBreakMode,
    /// Extra space between lines, in points. Default: `0.0`.
    pub line_spacing: f64,
    /// Extra space between characters, in points. Default: `0.0`.
    pub letter_spacing: f64,
}

impl LabelConfig {
    /// Creates a configuration with every field at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: ViewConfig::new(),
            max_lines: 1,
            text_color: Some(Color::BLACK),
            text_background_color: Some(Color::TRANSPARENT),
            font: Some(FontSpec::system(FontSpec::DEFAULT_SIZE)),
            alignment: TextAlignment::Left,
            line_break: LineBreakMode::TruncateTail,
            line_spacing: 0.0,
            letter_spacing: 0.0,
        }
    }

    /// Derives the attribute mapping for rendering this label's text.
    ///
    /// The mapping is rebuilt from the live field values on every call;
    /// nothing is cached, so a field assigned after a derivation shows up in
    /// the next one. It always carries a [`PARAGRAPH`] entry (assembled from
    /// `line_spacing`, `line_break`, and `alignment`) and a
    /// [`LETTER_SPACING`] entry; [`FONT`], [`FOREGROUND`], and
    /// [`BACKGROUND`] entries are present only when the corresponding field
    /// is `Some`.
    ///
    /// [`PARAGRAPH`]: AttributeKey::PARAGRAPH
    /// [`LETTER_SPACING`]: AttributeKey::LETTER_SPACING
    /// [`FONT`]: AttributeKey::FONT
    /// [`FOREGROUND`]: AttributeKey::FOREGROUND
    /// [`BACKGROUND`]: AttributeKey::BACKGROUND
    #[must_use]
    pub fn text_attributes(&self) -> TextAttributes {
        let paragraph = ParagraphStyle {
            line_spacing: self.line_spacing,
            line_break: self.line_break,
            alignment: self.alignment,
        };

        let mut attributes = TextAttributes::new();
        attributes.insert(AttributeKey::PARAGRAPH, paragraph);
        attributes.insert(AttributeKey::LETTER_SPACING, self.letter_spacing);
        if let Some(font) = &self.font {
            attributes.insert(AttributeKey::FONT, font.clone());
        }
        if let Some(color) = self.text_color {
            attributes.insert(AttributeKey::FOREGROUND, color);
        }
        if let Some(color) = self.text_background_color {
            attributes.insert(AttributeKey::BACKGROUND, color);
        }
        attributes
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::new()
    }
}
