// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sheet geometry.
//!
//! All rectangles are in viewport coordinates, origin at the top-left, `y`
//! growing downward. The sheet spans the full viewport width and sits on the
//! bottom edge, pushed a little below it so the bottom rounded corners stay
//! off screen.

use kurbo::{Point, Rect, RoundedRect, Size, Vec2};

use crate::size::SheetHeight;
use crate::style::{ContentPanel, SheetStyle};

/// Fraction of the viewport height the resting sheet is pushed below the
/// bottom edge.
pub const REST_DROP_FRACTION: f64 = 0.05;

/// Size of the grabber drawn at the top of the sheet.
pub const INDICATOR_SIZE: Size = Size::new(35.0, 5.0);

/// Gap between the sheet's top edge and the grabber.
pub const INDICATOR_TOP_PADDING: f64 = 15.0;

/// Resolved geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetLayout {
    /// Full-bleed backdrop.
    pub backdrop: Rect,
    /// The sheet's frame, including the drag offset.
    pub frame: Rect,
    /// Rounded sheet surface; also the outline its shadow is cast from.
    pub surface: RoundedRect,
    /// Rounded grabber.
    pub indicator: RoundedRect,
    /// Inset content panel, when the style asks for one.
    pub panel: Option<RoundedRect>,
    /// Where caller content is placed.
    pub content: Rect,
}

impl SheetLayout {
    /// Lays the sheet out in a viewport of the given size.
    ///
    /// `offset` is the current drag offset; it moves everything except the
    /// backdrop.
    #[must_use]
    pub fn compute(viewport: Size, height: SheetHeight, style: &SheetStyle, offset: Vec2) -> Self {
        let backdrop = Rect::from_origin_size(Point::ORIGIN, viewport);

        let sheet_height = height.resolve(viewport.height);
        let bottom = viewport.height * (1.0 + REST_DROP_FRACTION);
        let frame = Rect::new(0.0, bottom - sheet_height, viewport.width, bottom) + offset;

        let surface = RoundedRect::from_rect(frame, style.corner_radius);

        let indicator_origin = Point::new(
            frame.center().x - INDICATOR_SIZE.width * 0.5,
            frame.y0 + INDICATOR_TOP_PADDING,
        );
        let indicator = RoundedRect::from_rect(
            Rect::from_origin_size(indicator_origin, INDICATOR_SIZE),
            style.corner_radius,
        );

        let panel = style.content_panel.map(|_| {
            let size = Size::new(
                viewport.width * ContentPanel::WIDTH_FRACTION,
                sheet_height * ContentPanel::HEIGHT_FRACTION,
            );
            RoundedRect::from_rect(
                Rect::from_center_size(frame.center(), size),
                style.corner_radius,
            )
        });

        let content = match panel {
            Some(panel) => {
                let rect = panel.rect();
                Rect::new(
                    rect.x0,
                    rect.y0 + ContentPanel::CONTENT_PADDING,
                    rect.x1,
                    rect.y1 - ContentPanel::CONTENT_PADDING,
                )
            }
            None => frame,
        };

        Self {
            backdrop,
            frame,
            surface,
            indicator,
            panel,
            content,
        }
    }

    /// Returns `true` if `pt` falls on the visible part of the sheet frame.
    ///
    /// The frame extends below the viewport; points there are not on screen
    /// and never count as the sheet.
    #[must_use]
    pub fn sheet_contains(&self, pt: Point) -> bool {
        self.backdrop.contains(pt) && self.frame.contains(pt)
    }

    /// Returns `true` if `pt` falls on the part of the backdrop the sheet
    /// does not cover.
    #[must_use]
    pub fn backdrop_contains(&self, pt: Point) -> bool {
        self.backdrop.contains(pt) && !self.sheet_contains(pt)
    }
}
