// Copyright 2026 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Image configuration.

use crate::view::ViewConfig;

/// Identifier for an image resource.
///
/// Configurations reference images by this small, opaque handle; the pixel
/// data lives with whatever resource backend the host framework manages.
/// The handle is stable for the lifetime of the resource.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ImageId(pub u32);

/// Visual configuration for an image view.
///
/// Embeds a [`ViewConfig`] for the base view fields and adds the image to
/// display, if any.
///
/// # Example
///
/// ```rust
/// use canopy_configuration::{ContentMode, ImageConfig, ImageId};
///
/// let mut config = ImageConfig::new();
/// assert_eq!(config.image, None);
///
/// config.image = Some(ImageId(7));
/// config.view.content_mode = ContentMode::AspectFill;
/// config.view.clips_to_bounds = true;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ImageConfig {
    /// Base view fields.
    pub view: ViewConfig,
    /// The image to display. Default: `None`.
    pub image: Option<ImageId>,
}

impl ImageConfig {
    /// Creates a configuration with every field at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            view: ViewConfig::new(),
            image: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_defaults() {
        let config = ImageConfig::new();

        assert_eq!(config.view, ViewConfig::new());
        assert_eq!(config.image, None);
    }

    #[test]
    fn image_handle_round_trip() {
        let mut config = ImageConfig::new();
        config.image = Some(ImageId(42));

        assert_eq!(config.image, Some(ImageId(42)));
        assert_ne!(ImageId(42), ImageId(43));
    }
}
