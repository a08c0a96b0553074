// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual configuration for the sheet surface.

use peniko::Color;

/// Builds an opaque color from a `0xRRGGBB` literal.
///
/// Bits above the low 24 are ignored, so `0xFFC7C7C7` and `0xC7C7C7` are the
/// same color.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    reason = "each channel keeps only its low byte"
)]
pub const fn hex_rgb(hex: u32) -> Color {
    Color::from_rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Colors used by the default sheet style.
pub mod palette {
    use peniko::Color;

    use super::hex_rgb;

    /// `#C7C7C7`, the default grabber color.
    pub const GRAY: Color = hex_rgb(0xC7C7C7);

    /// `#F7F7F7`, the default sheet background.
    pub const LIGHT_GRAY: Color = hex_rgb(0xF7F7F7);

    /// `#8E8E93`, the backdrop tint before opacity is applied.
    pub const SYSTEM_GRAY: Color = hex_rgb(0x8E8E93);

    /// `#FFFFFF`, the default content panel fill.
    pub const WHITE: Color = hex_rgb(0xFFFFFF);

    /// Shadow color under the sheet surface.
    pub const SHADOW: Color = Color::from_rgba8(0, 0, 0, 0x55);
}

/// An inset panel the sheet content is placed in.
///
/// With a panel configured, the content no longer fills the sheet: it is laid
/// out inside a narrower rounded card and scrolls vertically.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentPanel {
    /// Panel fill.
    pub color: Color,
}

impl ContentPanel {
    /// Panel width as a fraction of the viewport width.
    pub const WIDTH_FRACTION: f64 = 0.92;
    /// Panel height as a fraction of the sheet height.
    pub const HEIGHT_FRACTION: f64 = 0.79;
    /// Vertical padding around scrolling content inside the panel.
    pub const CONTENT_PADDING: f64 = 40.0;
}

impl Default for ContentPanel {
    fn default() -> Self {
        Self {
            color: palette::WHITE,
        }
    }
}

/// Style of the sheet and its backdrop.
///
/// Values are passed through as given. A negative corner radius or an opacity
/// outside `0..=1` is left to the renderer to interpret.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetStyle {
    /// Fill of the sheet surface.
    pub background_color: Color,
    /// Fill of the grabber at the top of the sheet.
    pub indicator_color: Color,
    /// Corner radius of the surface, the grabber and the content panel.
    pub corner_radius: f64,
    /// Opacity of the dimming backdrop.
    pub backdrop_opacity: f32,
    /// Optional inset panel for the content.
    pub content_panel: Option<ContentPanel>,
}

impl SheetStyle {
    /// Default corner radius in logical units.
    pub const DEFAULT_CORNER_RADIUS: f64 = 30.0;
    /// Default backdrop opacity.
    pub const DEFAULT_BACKDROP_OPACITY: f32 = 0.4;

    /// Returns a copy with a different surface fill.
    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Returns a copy with a different grabber fill.
    #[must_use]
    pub fn with_indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = color;
        self
    }

    /// Returns a copy with a different corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Returns a copy with a different backdrop opacity.
    #[must_use]
    pub fn with_backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = opacity;
        self
    }

    /// Returns a copy that places content in an inset panel.
    #[must_use]
    pub fn with_content_panel(mut self, panel: ContentPanel) -> Self {
        self.content_panel = Some(panel);
        self
    }
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            background_color: palette::LIGHT_GRAY,
            indicator_color: palette::GRAY,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            backdrop_opacity: Self::DEFAULT_BACKDROP_OPACITY,
            content_panel: None,
        }
    }
}
