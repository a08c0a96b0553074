// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_bottom_sheet --heading-base-level=0

//! Understory Bottom Sheet: a headless modal sheet anchored to the bottom edge.
//!
//! A bottom sheet is a panel that slides up over the host view, with a dimming
//! backdrop behind it. It closes when the user drags it down far enough or
//! taps the backdrop.
//!
//! This crate owns the interaction state and the geometry, and nothing else:
//!
//! - [`BottomSheet`]: the drag/dismiss state machine, fed with drag
//!   translations or raw pointer positions.
//! - [`SheetSize`] / [`SheetHeight`]: viewport-relative presets or a fixed
//!   height.
//! - [`SheetLayout`]: backdrop, sheet frame, grabber and content rectangles.
//! - [`SheetScene`]: paint-ordered [`Layer`]s for the current frame.
//! - [`VisibilityBinding`] and [`ViewportProvider`]: the two things the
//!   host supplies.
//! - [`DragTracker`]: pointer press to drag translation, for hosts without
//!   their own gesture recognizer.
//!
//! It does **not** render, animate, or own a widget tree. Hosts paint the
//! layers with their own backend and place their own content in the content
//! rectangle.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Size, Vec2};
//! use understory_bottom_sheet::{BottomSheet, DragOutcome, SheetSize, SheetState};
//!
//! // The caller owns the flag.
//! let show = Rc::new(Cell::new(false));
//! let mut sheet = BottomSheet::new("Sheet body", Rc::clone(&show), Size::new(390.0, 844.0))
//!     .with_height(SheetSize::Small);
//! assert_eq!(sheet.state(), SheetState::Hidden);
//!
//! // Open it.
//! show.set(true);
//! assert!(sheet.attach("host").is_presenting());
//!
//! // A short drag springs back.
//! sheet.on_drag_changed(Vec2::new(0.0, 30.0));
//! assert_eq!(sheet.offset(), Vec2::new(0.0, 30.0));
//! assert_eq!(sheet.on_drag_ended(Vec2::new(0.0, 30.0)), DragOutcome::Settled);
//! assert_eq!(sheet.offset(), Vec2::ZERO);
//!
//! // A long one dismisses.
//! sheet.on_drag_changed(Vec2::new(0.0, 80.0));
//! assert_eq!(sheet.on_drag_ended(Vec2::new(0.0, 80.0)), DragOutcome::Dismissed);
//! assert!(!show.get());
//! ```
//!
//! ## Painting
//!
//! ```rust
//! use std::cell::Cell;
//!
//! use kurbo::Size;
//! use understory_bottom_sheet::{BottomSheet, Layer};
//!
//! let show = Cell::new(true);
//! let sheet = BottomSheet::new((), &show, Size::new(400.0, 800.0));
//!
//! let scene = sheet.scene().expect("sheet is visible");
//! for layer in scene.layers() {
//!     match layer {
//!         Layer::Backdrop { rect, color } => { /* fill rect */ }
//!         Layer::Shadow { shape, color, blur } => { /* blurred shadow */ }
//!         Layer::Fill { shape, color } => { /* fill rounded rect */ }
//!         Layer::Content { bounds, scrolls, content } => { /* place content */ }
//!     }
//! }
//! ```
//!
//! ## Logging
//!
//! State transitions are reported through the [`log`] facade at `debug`
//! level, with ignored input at `trace`. Nothing is emitted unless the host
//! installs a logger.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo and Peniko against the standard library.
//! - `libm`: use `libm` for float math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod backdrop;
mod binding;
mod controller;
mod gesture;
mod layout;
mod scene;
mod size;
mod style;
mod viewport;

pub use backdrop::Backdrop;
pub use binding::{FnBinding, VisibilityBinding};
pub use controller::{BottomSheet, DISMISS_THRESHOLD, DragOutcome, SheetHit, SheetState};
pub use gesture::DragTracker;
pub use layout::{INDICATOR_SIZE, INDICATOR_TOP_PADDING, REST_DROP_FRACTION, SheetLayout};
pub use scene::{Layer, Presentation, SHADOW_BLUR, SheetScene};
pub use size::{SheetHeight, SheetSize};
pub use style::{ContentPanel, SheetStyle, hex_rgb, palette};
pub use viewport::{FnViewport, ViewportProvider};
