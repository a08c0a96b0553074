// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport providers: where the sheet learns how big the screen is.
//!
//! The sheet never caches the viewport. Every layout pass asks the provider
//! again, so rotation or window resizes show up on the next frame.

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::{Point, Rect, Size};

/// Supplies the current viewport size in logical units.
pub trait ViewportProvider {
    /// Returns the current viewport size.
    fn viewport_size(&self) -> Size;

    /// Returns the viewport as a rectangle anchored at the origin.
    fn viewport_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.viewport_size())
    }
}

/// A fixed viewport.
impl ViewportProvider for Size {
    fn viewport_size(&self) -> Size {
        *self
    }
}

/// A viewport the host updates in place, for example on rotation.
impl ViewportProvider for Cell<Size> {
    fn viewport_size(&self) -> Size {
        self.get()
    }
}

impl<T: ViewportProvider + ?Sized> ViewportProvider for &T {
    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }
}

impl<T: ViewportProvider + ?Sized> ViewportProvider for Rc<T> {
    fn viewport_size(&self) -> Size {
        (**self).viewport_size()
    }
}

/// Adapts a closure into a [`ViewportProvider`].
///
/// ```
/// use kurbo::Size;
/// use understory_bottom_sheet::{FnViewport, ViewportProvider};
///
/// let viewport = FnViewport(|| Size::new(390.0, 844.0));
/// assert_eq!(viewport.viewport_size().height, 844.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct FnViewport<F>(pub F);

impl<F: Fn() -> Size> ViewportProvider for FnViewport<F> {
    fn viewport_size(&self) -> Size {
        (self.0)()
    }
}
