/// Popover placement arithmetic for Selection Search

/// Gap kept between the popover and the selection rectangle, and between the
/// popover and the viewport edges, in CSS pixels.
pub const MARGIN: f64 = 8.0;

/// Snapshot of the selection's bounding box, in viewport coordinates.
///
/// Taken once from the selection's first range at the moment the popover is
/// created and consumed once to compute placement. It is not kept live:
/// scroll and resize dismiss the popover instead of repositioning it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect {
            top,
            left,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }
}

/// Measured dimensions of the rendered popover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Viewport dimensions plus current scroll offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

/// Final popover position, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: f64,
    pub left: f64,
}

/// Compute where the popover goes relative to the selection rectangle.
///
/// Policy:
/// 1. Bottom edge sits `MARGIN` above the rectangle's top edge.
/// 2. If that would push the top edge above the viewport origin, flip to
///    below the rectangle's bottom edge plus `MARGIN`.
/// 3. Horizontally centered on the rectangle, clamped so the popover stays
///    `MARGIN` inside the viewport's left and right edges. The left bound
///    wins when the viewport is narrower than the popover.
/// 4. The result is shifted by the scroll offsets: the popover is absolutely
///    positioned in the document and never repositioned afterwards.
pub fn place_popover(anchor: &Rect, popover: Size, viewport: &Viewport) -> Placement {
    let mut top = anchor.top - popover.height - MARGIN;
    if top < 0.0 {
        top = anchor.bottom() + MARGIN;
    }

    let max_left = viewport.width - popover.width - MARGIN;
    let left = (anchor.center_x() - popover.width / 2.0)
        .min(max_left)
        .max(MARGIN);

    Placement {
        top: top + viewport.scroll_y,
        left: left + viewport.scroll_x,
    }
}
