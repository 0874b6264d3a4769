// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for applying configuration objects through the style-holder
//! capability.
//!
//! These exercise the two crates together the way application code uses
//! them: a view embeds a `StyleSlot`, adopts `Styled` with a configuration
//! record as its style type, and reads configuration fields in its apply
//! hook.

use canopy_configuration::{
    AttributeKey, ButtonConfig, ControlState, LabelConfig, LineBreakMode, ParagraphStyle,
};
use canopy_styled::{StyleSlot, Styled};
use peniko::Color;

/// A toy label view whose presentation is a handful of plain fields.
struct LabelView {
    visible_color: Color,
    corner_radius: f64,
    wraps: bool,
    applies: usize,
    style: StyleSlot<LabelConfig>,
}

impl LabelView {
    fn new() -> Self {
        Self {
            visible_color: Color::BLACK,
            corner_radius: 0.0,
            wraps: false,
            applies: 0,
            style: StyleSlot::new(),
        }
    }
}

impl Styled for LabelView {
    type Style = LabelConfig;

    fn style_slot(&self) -> &StyleSlot<LabelConfig> {
        &self.style
    }

    fn style_slot_mut(&mut self) -> &mut StyleSlot<LabelConfig> {
        &mut self.style
    }

    fn apply_style(&mut self, style: &LabelConfig) {
        self.applies += 1;
        self.corner_radius = style.view.corner_radius;
        if let Some(color) = style.text_color {
            self.visible_color = color;
        }

        // Views consume label text layout through the derived mapping.
        let attributes = style.text_attributes();
        let paragraph = attributes
            .get::<ParagraphStyle>(AttributeKey::PARAGRAPH)
            .expect("derived mapping always carries a paragraph entry");
        self.wraps = paragraph.line_break == LineBreakMode::WordWrap;
    }
}

#[test]
fn applying_a_label_config_updates_presentation() {
    let mut view = LabelView::new();

    let mut config = LabelConfig::new();
    config.view.corner_radius = 6.0;
    config.text_color = Some(Color::WHITE);
    config.line_break = LineBreakMode::WordWrap;

    view.set_style(Some(config));

    // The hook ran synchronously; the presentation is already updated.
    assert_eq!(view.applies, 1);
    assert_eq!(view.corner_radius, 6.0);
    assert_eq!(view.visible_color, Color::WHITE);
    assert!(view.wraps);
    assert!(view.style().is_some());
}

#[test]
fn restyling_overwrites_previous_presentation() {
    let mut view = LabelView::new();

    let mut first = LabelConfig::new();
    first.view.corner_radius = 6.0;
    view.set_style(Some(first));

    let mut second = LabelConfig::new();
    second.view.corner_radius = 2.0;
    second.line_break = LineBreakMode::WordWrap;
    view.set_style(Some(second));

    assert_eq!(view.applies, 2);
    assert_eq!(view.corner_radius, 2.0);
    assert!(view.wraps);
    assert_eq!(view.style().map(|s| s.view.corner_radius), Some(2.0));
}

#[test]
fn clearing_the_style_leaves_presentation_as_applied() {
    let mut view = LabelView::new();

    let mut config = LabelConfig::new();
    config.view.corner_radius = 6.0;
    view.set_style(Some(config));
    view.set_style(None);

    // The slot is empty, but nothing un-applies a style.
    assert!(view.style().is_none());
    assert_eq!(view.applies, 1);
    assert_eq!(view.corner_radius, 6.0);
}

#[test]
fn mutating_an_owned_config_does_not_touch_the_view() {
    let mut view = LabelView::new();

    let mut config = LabelConfig::new();
    config.view.corner_radius = 6.0;
    view.set_style(Some(config.clone()));

    // Configurations are inert: the owner's later edits go nowhere until
    // the owner hands the object over again.
    config.view.corner_radius = 99.0;
    assert_eq!(view.corner_radius, 6.0);
    assert_eq!(view.style().map(|s| s.view.corner_radius), Some(6.0));
}

/// A toy button view that picks its title from the per-state bundle.
struct ButtonView {
    state: ControlState,
    style: StyleSlot<ButtonConfig>,
}

impl Styled for ButtonView {
    type Style = ButtonConfig;

    fn style_slot(&self) -> &StyleSlot<ButtonConfig> {
        &self.style
    }

    fn style_slot_mut(&mut self) -> &mut StyleSlot<ButtonConfig> {
        &mut self.style
    }

    fn apply_style(&mut self, _style: &ButtonConfig) {}
}

impl ButtonView {
    fn rendered_title(&self) -> Option<&str> {
        self.style()
            .and_then(|config| config.title.get(self.state))
            .map(String::as_str)
    }
}

#[test]
fn button_title_follows_the_current_state_with_no_fallback() {
    let mut config = ButtonConfig::new();
    config.title.normal = Some("Buy".to_string());
    config.title.disabled = Some("Sold out".to_string());

    let mut button = ButtonView {
        state: ControlState::Normal,
        style: StyleSlot::new(),
    };
    button.set_style(Some(config));

    assert_eq!(button.rendered_title(), Some("Buy"));

    button.state = ControlState::Disabled;
    assert_eq!(button.rendered_title(), Some("Sold out"));

    // Highlighted was never configured; nothing inherits from normal.
    button.state = ControlState::Highlighted;
    assert_eq!(button.rendered_title(), None);
}
