// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Named height presets, expressed as a fraction of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub enum SheetSize {
    /// A third of the viewport.
    Small,
    /// Half of the viewport.
    #[default]
    Medium,
    /// Three quarters of the viewport.
    Large,
}

impl SheetSize {
    /// Returns the fraction of the viewport height this preset covers.
    #[must_use]
    pub const fn fraction(self) -> f64 {
        match self {
            Self::Small => 0.33,
            Self::Medium => 0.5,
            Self::Large => 0.75,
        }
    }

    /// Returns the sheet height for a viewport of the given height.
    #[must_use]
    pub fn height(self, viewport_height: f64) -> f64 {
        self.fraction() * viewport_height
    }
}

/// How tall the sheet should be.
///
/// Presets track the viewport; [`SheetHeight::Fixed`] keeps the same height in
/// logical units whatever the viewport is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SheetHeight {
    /// A viewport-relative preset.
    Size(SheetSize),
    /// An explicit height in logical units.
    Fixed(f64),
}

impl SheetHeight {
    /// Height used by fixed-height sheets when none is given.
    pub const DEFAULT_FIXED: f64 = 300.0;

    /// Resolves the target height for a viewport of the given height.
    #[must_use]
    pub fn resolve(self, viewport_height: f64) -> f64 {
        match self {
            Self::Size(size) => size.height(viewport_height),
            Self::Fixed(height) => height,
        }
    }
}

impl Default for SheetHeight {
    fn default() -> Self {
        Self::Size(SheetSize::default())
    }
}

impl From<SheetSize> for SheetHeight {
    fn from(size: SheetSize) -> Self {
        Self::Size(size)
    }
}

impl From<f64> for SheetHeight {
    fn from(height: f64) -> Self {
        Self::Fixed(height)
    }
}
