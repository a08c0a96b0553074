// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render output: what to paint over the host, in paint order.
//!
//! A [`SheetScene`] is derived from the sheet's current state each frame and
//! borrows the content; nothing stays mounted while the sheet is hidden.

use alloc::vec::Vec;

use kurbo::{Rect, RoundedRect};
use peniko::Color;

use crate::binding::VisibilityBinding;
use crate::controller::BottomSheet;
use crate::layout::SheetLayout;
use crate::style::palette;
use crate::viewport::ViewportProvider;

/// Blur radius of the shadow under the sheet surface.
pub const SHADOW_BLUR: f64 = 1.0;

/// One paint step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Layer<'a, C> {
    /// Translucent full-viewport fill.
    Backdrop {
        /// Area to fill.
        rect: Rect,
        /// Fill, opacity already applied.
        color: Color,
    },
    /// Blurred shadow under the surface.
    Shadow {
        /// Shape casting the shadow.
        shape: RoundedRect,
        /// Shadow color.
        color: Color,
        /// Blur radius.
        blur: f64,
    },
    /// A filled rounded shape: the surface, the grabber or the content panel.
    Fill {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// Caller content.
    Content {
        /// Where the content goes.
        bounds: Rect,
        /// `true` when the content scrolls vertically inside a panel.
        scrolls: bool,
        /// The payload.
        content: &'a C,
    },
}

/// Everything to paint for a presented sheet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetScene<'a, C> {
    /// Resolved geometry.
    pub layout: SheetLayout,
    /// Backdrop fill.
    pub backdrop_color: Color,
    /// Surface fill.
    pub background_color: Color,
    /// Grabber fill.
    pub indicator_color: Color,
    /// Panel fill, when a panel is configured.
    pub panel_color: Option<Color>,
    /// The payload.
    pub content: &'a C,
}

impl<'a, C> SheetScene<'a, C> {
    /// Returns the layers back to front.
    #[must_use]
    pub fn layers(&self) -> Vec<Layer<'a, C>> {
        let layout = &self.layout;
        let mut layers = Vec::with_capacity(6);
        layers.push(Layer::Backdrop {
            rect: layout.backdrop,
            color: self.backdrop_color,
        });
        layers.push(Layer::Shadow {
            shape: layout.surface,
            color: palette::SHADOW,
            blur: SHADOW_BLUR,
        });
        layers.push(Layer::Fill {
            shape: layout.surface,
            color: self.background_color,
        });
        layers.push(Layer::Fill {
            shape: layout.indicator,
            color: self.indicator_color,
        });
        if let (Some(panel), Some(color)) = (layout.panel, self.panel_color) {
            layers.push(Layer::Fill {
                shape: panel,
                color,
            });
        }
        layers.push(Layer::Content {
            bounds: layout.content,
            scrolls: layout.panel.is_some(),
            content: self.content,
        });
        layers
    }
}

/// A host paired with the overlay drawn on top of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation<'a, H, C> {
    /// The host, untouched.
    pub host: H,
    /// The overlay; `None` while the sheet is hidden.
    pub overlay: Option<SheetScene<'a, C>>,
}

impl<H, C> Presentation<'_, H, C> {
    /// Returns `true` if an overlay is attached.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.overlay.is_some()
    }
}

impl<C, B, V> BottomSheet<C, B, V>
where
    B: VisibilityBinding,
    V: ViewportProvider,
{
    /// Describes what to paint for the current state.
    ///
    /// Returns `None` while hidden. This is a pure function of the flag, the
    /// drag offset, the viewport and the configuration.
    pub fn scene(&self) -> Option<SheetScene<'_, C>> {
        let layout = self.layout()?;
        let style = self.style();
        Some(SheetScene {
            layout,
            backdrop_color: self.backdrop().fill(),
            background_color: style.background_color,
            indicator_color: style.indicator_color,
            panel_color: style.content_panel.map(|panel| panel.color),
            content: self.content(),
        })
    }

    /// Attaches the sheet to `host`, overlaying it while the sheet is visible.
    pub fn attach<H>(&self, host: H) -> Presentation<'_, H, C> {
        Presentation {
            host,
            overlay: self.scene(),
        }
    }
}
