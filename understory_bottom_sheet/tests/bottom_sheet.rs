// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_bottom_sheet` crate.
//!
//! These drive a sheet end to end the way a host would: toggling the
//! caller-owned flag, feeding gestures, and reading back the scene.

use std::cell::Cell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use understory_bottom_sheet::{
    BottomSheet, DISMISS_THRESHOLD, DragOutcome, FnViewport, Layer, SheetHeight, SheetSize,
    SheetState, SheetStyle,
};

const VIEWPORT: Size = Size::new(390.0, 844.0);

fn down(y: f64) -> Vec2 {
    Vec2::new(0.0, y)
}

#[test]
fn short_drag_keeps_sheet_open() {
    let show = Rc::new(Cell::new(false));
    let mut sheet = BottomSheet::new("content", Rc::clone(&show), VIEWPORT);
    assert_eq!(sheet.state(), SheetState::Hidden);
    assert!(sheet.scene().is_none());

    show.set(true);
    let scene = sheet.scene().expect("sheet opened");
    assert!(matches!(scene.layers()[0], Layer::Backdrop { .. }));

    sheet.on_drag_changed(down(30.0));
    assert_eq!(sheet.offset(), down(30.0));
    assert_eq!(sheet.state(), SheetState::Dragging);

    assert_eq!(sheet.on_drag_ended(down(30.0)), DragOutcome::Settled);
    assert!(show.get());
    assert_eq!(sheet.offset(), Vec2::ZERO);
    assert_eq!(sheet.state(), SheetState::Idle);
}

#[test]
fn long_drag_dismisses() {
    let show = Rc::new(Cell::new(true));
    let mut sheet = BottomSheet::new((), Rc::clone(&show), VIEWPORT);

    sheet.on_drag_changed(down(80.0));
    assert_eq!(sheet.on_drag_ended(down(80.0)), DragOutcome::Dismissed);
    assert!(!show.get());
    assert_eq!(sheet.offset(), Vec2::ZERO);
    assert!(sheet.scene().is_none());
}

#[test]
fn backdrop_tap_dismisses_immediately() {
    let show = Rc::new(Cell::new(true));
    let mut sheet = BottomSheet::new((), Rc::clone(&show), VIEWPORT);

    sheet.on_backdrop_tap();
    assert!(!show.get());
    assert_eq!(sheet.state(), SheetState::Hidden);
}

#[test]
fn threshold_holds_across_drag_paths() {
    let paths: &[&[f64]] = &[
        &[10.0, 20.0, 30.0],
        &[60.0, 40.0, 50.0],
        &[5.0, -10.0, 0.0],
        &[49.0, 50.0],
        &[50.0, 51.0],
        &[120.0, 90.0, 70.0],
    ];

    for path in paths {
        let show = Rc::new(Cell::new(true));
        let mut sheet = BottomSheet::new((), Rc::clone(&show), VIEWPORT);
        for &y in *path {
            sheet.on_drag_changed(down(y));
            assert!(sheet.offset().y >= 0.0, "offset never goes negative");
        }
        let last = *path.last().expect("non-empty path");
        sheet.on_drag_ended(down(last));

        assert_eq!(sheet.offset(), Vec2::ZERO, "offset resets for {path:?}");
        assert_eq!(
            show.get(),
            last <= DISMISS_THRESHOLD,
            "visibility after {path:?}"
        );
    }
}

#[test]
fn sheet_reopens_after_dismissal() {
    let show = Rc::new(Cell::new(true));
    let mut sheet = BottomSheet::new((), Rc::clone(&show), VIEWPORT);
    sheet.on_backdrop_tap();
    assert_eq!(sheet.state(), SheetState::Hidden);

    show.set(true);
    assert_eq!(sheet.state(), SheetState::Idle);
    sheet.on_drag_changed(down(20.0));
    assert_eq!(sheet.on_drag_ended(down(20.0)), DragOutcome::Settled);
}

#[test]
fn external_close_hides_sheet() {
    let show = Rc::new(Cell::new(true));
    let sheet = BottomSheet::new((), Rc::clone(&show), VIEWPORT);
    assert!(sheet.attach(()).is_presenting());

    show.set(false);
    assert!(!sheet.attach(()).is_presenting());
}

#[test]
fn layout_follows_rotation() {
    let viewport = Rc::new(Cell::new(Size::new(400.0, 800.0)));
    let provider = {
        let viewport = Rc::clone(&viewport);
        FnViewport(move || viewport.get())
    };
    let show = Cell::new(true);
    let sheet = BottomSheet::new((), &show, provider).with_height(SheetSize::Medium);

    let portrait = sheet.layout().expect("visible");
    assert_eq!(portrait.frame.height(), 400.0);
    assert_eq!(portrait.frame.width(), 400.0);

    viewport.set(Size::new(800.0, 400.0));
    let landscape = sheet.layout().expect("visible");
    assert_eq!(landscape.frame.height(), 200.0);
    assert_eq!(landscape.frame.width(), 800.0);
}

#[test]
fn fixed_height_sheet_with_panel() {
    let show = Cell::new(true);
    let sheet = BottomSheet::new((), &show, Size::new(400.0, 800.0))
        .with_height(SheetHeight::Fixed(SheetHeight::DEFAULT_FIXED))
        .with_style(
            SheetStyle::default()
                .with_content_panel(understory_bottom_sheet::ContentPanel::default()),
        );

    let layout = sheet.layout().expect("visible");
    assert_eq!(layout.frame.height(), 300.0);
    assert!(layout.panel.is_some());
    assert!(layout.frame.contains(layout.content.center()));
}

#[test]
fn pointer_session_matches_gesture_session() {
    let show = Rc::new(Cell::new(true));
    let taps = Rc::new(Cell::new(0_u32));
    let counter = Rc::clone(&taps);
    let mut sheet = BottomSheet::new((), Rc::clone(&show), Size::new(400.0, 800.0))
        .with_backdrop_tap(move || counter.set(counter.get() + 1));

    // Drag the sheet a little: it follows, then springs back.
    sheet.on_pointer_down(Point::new(200.0, 600.0));
    sheet.on_pointer_move(Point::new(200.0, 640.0));
    assert_eq!(sheet.offset(), down(40.0));
    sheet.on_pointer_move(Point::new(200.0, 590.0));
    assert_eq!(sheet.offset(), down(40.0));
    assert_eq!(
        sheet.on_pointer_up(Point::new(200.0, 620.0)),
        Some(DragOutcome::Settled)
    );
    assert!(show.get());
    assert_eq!(taps.get(), 0);

    // Tap the backdrop.
    sheet.on_pointer_down(Point::new(200.0, 100.0));
    sheet.on_pointer_up(Point::new(200.0, 100.0));
    assert!(!show.get());
    assert_eq!(taps.get(), 1);
}
