// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture tracking: turn raw pointer positions into drag translations.
//!
//! Hosts with their own gesture recognizer can skip this and call
//! [`BottomSheet::on_drag_changed`](crate::BottomSheet::on_drag_changed) and
//! [`BottomSheet::on_drag_ended`](crate::BottomSheet::on_drag_ended) directly.
//! Hosts that only see pointer down/move/up use [`DragTracker`] (through
//! [`BottomSheet::on_pointer_down`](crate::BottomSheet::on_pointer_down) and
//! friends) to get the same translations.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_bottom_sheet::DragTracker;
//!
//! let mut tracker = DragTracker::default();
//! tracker.press(Point::new(100.0, 500.0));
//! assert_eq!(tracker.translation(Point::new(104.0, 530.0)), Some(Vec2::new(4.0, 30.0)));
//! assert_eq!(tracker.release(Point::new(104.0, 560.0)), Some(Vec2::new(4.0, 60.0)));
//! assert!(!tracker.is_pressed());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer press and reports translation from where it started.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<Point>,
}

impl DragTracker {
    /// Begins tracking a press at `pos`, replacing any press in progress.
    pub fn press(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// Returns the translation from the press origin to `pos`.
    ///
    /// `None` when no press is being tracked.
    #[must_use]
    pub fn translation(&self, pos: Point) -> Option<Vec2> {
        self.origin.map(|origin| pos - origin)
    }

    /// Ends the press and returns the final translation.
    pub fn release(&mut self, pos: Point) -> Option<Vec2> {
        self.origin.take().map(|origin| pos - origin)
    }

    /// Returns `true` while a press is being tracked.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.origin.is_some()
    }
}
