// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sheet controller: visibility, drag offset, and dismissal.
//!
//! ## Usage
//!
//! 1) Create a [`BottomSheet`] with a [`VisibilityBinding`], a
//!    [`ViewportProvider`] and the content to present.
//! 2) Open it by setting the caller-owned flag to `true`. The sheet never
//!    opens itself.
//! 3) Feed drag translations through [`BottomSheet::on_drag_changed`] /
//!    [`BottomSheet::on_drag_ended`] (or raw pointers through
//!    [`BottomSheet::on_pointer_down`] and friends).
//! 4) Each frame, paint [`BottomSheet::scene`] over the host.
//!
//! ## Dismissal rules
//!
//! - The sheet only follows downward motion. A translation with a
//!   non-positive `y` leaves the offset where it was, so dragging back up
//!   freezes the sheet at its lowest point instead of lifting it.
//! - On release, a vertical translation greater than [`DISMISS_THRESHOLD`]
//!   dismisses. Either way the offset snaps back to zero.
//! - A backdrop tap always dismisses.

use kurbo::{Point, Vec2};

use crate::backdrop::Backdrop;
use crate::binding::VisibilityBinding;
use crate::gesture::DragTracker;
use crate::layout::SheetLayout;
use crate::size::SheetHeight;
use crate::style::SheetStyle;
use crate::viewport::ViewportProvider;

/// Vertical release translation, in logical units, past which a drag dismisses.
pub const DISMISS_THRESHOLD: f64 = 50.0;

/// Coarse state of a sheet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetState {
    /// The visibility flag is `false`.
    Hidden,
    /// Presented and at rest.
    Idle,
    /// Presented and following a downward drag.
    Dragging,
}

/// What a drag release did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragOutcome {
    /// The release passed the threshold and the sheet dismissed itself.
    Dismissed,
    /// The sheet stayed open and snapped back to rest.
    Settled,
    /// The sheet was hidden; nothing changed beyond resetting the offset.
    Ignored,
}

/// What a pointer position lands on while the sheet is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SheetHit {
    /// The sheet surface (drag target).
    Sheet,
    /// The backdrop around the sheet (tap target).
    Backdrop,
}

/// A pointer sequence in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Press {
    #[default]
    None,
    /// Pressed on the sheet; moves are drag translations.
    Sheet(DragTracker),
    /// Pressed on the backdrop; a release on the backdrop is a tap.
    Backdrop,
}

/// A bottom sheet presenting `C` over a host view.
///
/// `B` is the caller's visibility flag and `V` supplies the viewport size.
///
/// The sheet only follows downward motion, and only a release more than
/// [`DISMISS_THRESHOLD`] below the press dismisses it. A backdrop tap always
/// dismisses. The sheet writes `false` to the flag when it dismisses and never
/// writes `true`.
pub struct BottomSheet<C, B, V> {
    content: C,
    visible: B,
    viewport: V,
    height: SheetHeight,
    style: SheetStyle,
    backdrop: Backdrop,
    offset: Vec2,
    dragging: bool,
    press: Press,
}

impl<C, B, V> BottomSheet<C, B, V>
where
    B: VisibilityBinding,
    V: ViewportProvider,
{
    /// Creates a sheet with the default height preset and style.
    pub fn new(content: C, visible: B, viewport: V) -> Self {
        let style = SheetStyle::default();
        Self {
            content,
            visible,
            viewport,
            height: SheetHeight::default(),
            backdrop: Backdrop::new(style.backdrop_opacity),
            style,
            offset: Vec2::ZERO,
            dragging: false,
            press: Press::None,
        }
    }

    /// Sets the target height, either a preset or a fixed value.
    #[must_use]
    pub fn with_height(mut self, height: impl Into<SheetHeight>) -> Self {
        self.height = height.into();
        self
    }

    /// Sets the style.
    #[must_use]
    pub fn with_style(mut self, style: SheetStyle) -> Self {
        self.backdrop.set_opacity(style.backdrop_opacity);
        self.style = style;
        self
    }

    /// Sets a callback invoked after every backdrop tap.
    ///
    /// The sheet dismisses itself before the callback runs.
    #[must_use]
    pub fn with_backdrop_tap(mut self, on_tap: impl FnMut() + 'static) -> Self {
        self.backdrop.set_on_tap(on_tap);
        self
    }

    /// Returns the presented content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Returns the presented content mutably.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Returns the visibility binding.
    pub fn binding(&self) -> &B {
        &self.visible
    }

    /// Returns the viewport provider.
    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Returns the configured height.
    pub fn height(&self) -> SheetHeight {
        self.height
    }

    /// Returns the configured style.
    pub fn style(&self) -> &SheetStyle {
        &self.style
    }

    /// Returns the backdrop.
    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    /// Returns `true` if the caller's flag says the sheet is presented.
    pub fn is_visible(&self) -> bool {
        self.visible.is_visible()
    }

    /// Returns the current drag offset. Zero unless a drag is in progress.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the current state.
    pub fn state(&self) -> SheetState {
        if !self.is_visible() {
            SheetState::Hidden
        } else if self.dragging {
            SheetState::Dragging
        } else {
            SheetState::Idle
        }
    }

    /// Resolves the sheet's height against the current viewport.
    pub fn target_height(&self) -> f64 {
        self.height.resolve(self.viewport.viewport_size().height)
    }

    /// Lays the sheet out against the current viewport.
    ///
    /// Returns `None` while hidden. The viewport is queried on every call.
    pub fn layout(&self) -> Option<SheetLayout> {
        if !self.is_visible() {
            return None;
        }
        Some(SheetLayout::compute(
            self.viewport.viewport_size(),
            self.height,
            &self.style,
            self.offset,
        ))
    }

    /// Classifies `pt` against the current layout.
    ///
    /// Returns `None` while hidden or when `pt` is outside the viewport.
    pub fn hit_test(&self, pt: Point) -> Option<SheetHit> {
        let layout = self.layout()?;
        if layout.sheet_contains(pt) {
            Some(SheetHit::Sheet)
        } else if layout.backdrop_contains(pt) {
            Some(SheetHit::Backdrop)
        } else {
            None
        }
    }

    /// Handles a drag-changed event with the translation since the drag began.
    ///
    /// Only positive vertical translations move the sheet. Ignored while hidden.
    pub fn on_drag_changed(&mut self, translation: Vec2) {
        if !self.is_visible() {
            return;
        }
        if translation.y > 0.0 {
            if !self.dragging {
                log::debug!("bottom sheet: drag started at {:.1}", translation.y);
            }
            self.dragging = true;
            self.offset.y = translation.y;
        } else {
            log::trace!(
                "bottom sheet: ignoring non-downward translation {:.1}",
                translation.y
            );
        }
    }

    /// Handles the end of a drag with its total translation.
    ///
    /// The offset is reset whatever the outcome.
    pub fn on_drag_ended(&mut self, translation: Vec2) -> DragOutcome {
        self.offset = Vec2::ZERO;
        self.dragging = false;

        if !self.is_visible() {
            return DragOutcome::Ignored;
        }
        if translation.y > DISMISS_THRESHOLD {
            log::debug!("bottom sheet: dismissed by drag of {:.1}", translation.y);
            self.visible.set_visible(false);
            DragOutcome::Dismissed
        } else {
            log::debug!("bottom sheet: settled after drag of {:.1}", translation.y);
            DragOutcome::Settled
        }
    }

    /// Handles a tap on the backdrop.
    ///
    /// Dismisses the sheet, then runs the backdrop callback. Any drag offset
    /// is left for the drag's own end event to reset.
    pub fn on_backdrop_tap(&mut self) {
        if !self.is_visible() {
            return;
        }
        log::debug!("bottom sheet: dismissed by backdrop tap");
        self.visible.set_visible(false);
        self.backdrop.tap();
    }

    /// Handles a pointer press at `pos`, in viewport coordinates.
    ///
    /// Returns what the press landed on; `None` means the sheet did not take
    /// the press and the host should route it elsewhere.
    pub fn on_pointer_down(&mut self, pos: Point) -> Option<SheetHit> {
        self.on_pointer_cancel();
        let hit = self.hit_test(pos);
        self.press = match hit {
            Some(SheetHit::Sheet) => {
                let mut tracker = DragTracker::default();
                tracker.press(pos);
                Press::Sheet(tracker)
            }
            Some(SheetHit::Backdrop) => Press::Backdrop,
            None => Press::None,
        };
        hit
    }

    /// Handles a pointer move to `pos`.
    pub fn on_pointer_move(&mut self, pos: Point) {
        if let Press::Sheet(tracker) = self.press
            && let Some(translation) = tracker.translation(pos)
        {
            self.on_drag_changed(translation);
        }
    }

    /// Handles a pointer release at `pos`.
    ///
    /// Returns the drag outcome when the press started on the sheet.
    pub fn on_pointer_up(&mut self, pos: Point) -> Option<DragOutcome> {
        match core::mem::take(&mut self.press) {
            Press::Sheet(mut tracker) => {
                let translation = tracker.release(pos)?;
                Some(self.on_drag_ended(translation))
            }
            Press::Backdrop => {
                if self.hit_test(pos) == Some(SheetHit::Backdrop) {
                    self.on_backdrop_tap();
                }
                None
            }
            Press::None => None,
        }
    }

    /// Abandons any pointer sequence in progress without dismissing.
    ///
    /// A new press does this implicitly, so a missed release cannot leave the
    /// sheet displaced.
    pub fn on_pointer_cancel(&mut self) {
        if let Press::Sheet(_) = core::mem::take(&mut self.press) {
            log::trace!("bottom sheet: pointer drag abandoned");
            self.offset = Vec2::ZERO;
            self.dragging = false;
        }
    }
}

impl<C, B, V> core::fmt::Debug for BottomSheet<C, B, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BottomSheet")
            .field("height", &self.height)
            .field("style", &self.style)
            .field("backdrop", &self.backdrop)
            .field("offset", &self.offset)
            .field("dragging", &self.dragging)
            .field("press", &self.press)
            .finish_non_exhaustive()
    }
}
