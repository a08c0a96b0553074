// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use core::fmt;

use peniko::Color;

use crate::style::palette;

/// The dimming layer behind the sheet.
///
/// It covers the whole viewport, tints it with a translucent gray, and
/// forwards taps to an optional callback. It holds no state of its own.
pub struct Backdrop {
    opacity: f32,
    on_tap: Option<Box<dyn FnMut()>>,
}

impl Backdrop {
    /// Creates a backdrop with the given opacity and no tap callback.
    #[must_use]
    pub fn new(opacity: f32) -> Self {
        Self {
            opacity,
            on_tap: None,
        }
    }

    /// Sets the callback invoked on every tap.
    pub fn set_on_tap(&mut self, on_tap: impl FnMut() + 'static) {
        self.on_tap = Some(Box::new(on_tap));
    }

    /// Changes the opacity, keeping any tap callback.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    /// Returns the configured opacity.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Returns the tint with opacity applied.
    #[must_use]
    pub fn fill(&self) -> Color {
        palette::SYSTEM_GRAY.with_alpha(self.opacity)
    }

    /// Invokes the tap callback, if any.
    pub fn tap(&mut self) {
        if let Some(on_tap) = self.on_tap.as_mut() {
            on_tap();
        }
    }
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::new(crate::SheetStyle::DEFAULT_BACKDROP_OPACITY)
    }
}

impl fmt::Debug for Backdrop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Backdrop")
            .field("opacity", &self.opacity)
            .field("on_tap", &self.on_tap.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::Cell;

    #[test]
    fn default_opacity() {
        let backdrop = Backdrop::default();
        assert_eq!(backdrop.opacity(), 0.4);
        assert_eq!(backdrop.fill().components[3], 0.4);
    }

    #[test]
    fn fill_keeps_tint_channels() {
        let backdrop = Backdrop::new(0.25);
        let fill = backdrop.fill();
        let tint = palette::SYSTEM_GRAY;
        assert_eq!(fill.components[0], tint.components[0]);
        assert_eq!(fill.components[1], tint.components[1]);
        assert_eq!(fill.components[2], tint.components[2]);
        assert_eq!(fill.components[3], 0.25);
    }

    #[test]
    fn tap_without_callback_is_noop() {
        let mut backdrop = Backdrop::new(0.4);
        backdrop.tap();
    }

    #[test]
    fn tap_invokes_callback_each_time() {
        let taps = Rc::new(Cell::new(0_u32));
        let mut backdrop = Backdrop::new(0.4);
        let counter = Rc::clone(&taps);
        backdrop.set_on_tap(move || counter.set(counter.get() + 1));

        backdrop.tap();
        backdrop.tap();
        assert_eq!(taps.get(), 2);
    }
}
