use crate::constants::{
    CURSOR_PARALLAX_X_PX, CURSOR_PARALLAX_Y_PX, DEFAULT_PARALLAX_SPEED, TILT_MAX_DEG,
    TILT_PERSPECTIVE_PX,
};

/// Pointer position normalized to the viewport, both axes in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl CursorPosition {
    pub const CENTER: CursorPosition = CursorPosition { x: 0.5, y: 0.5 };

    pub fn from_client(client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) -> Self {
        if viewport_w > 0.0 && viewport_h > 0.0 {
            Self {
                x: (client_x / viewport_w).clamp(0.0, 1.0),
                y: (client_y / viewport_h).clamp(0.0, 1.0),
            }
        } else {
            Self::CENTER
        }
    }
}

/// Axis-aligned client rect, the subset of `DOMRect` the effects need.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Any part of the rect lies within `[0, viewport_h]` vertically.
    #[inline]
    pub fn overlaps_viewport(&self, viewport_h: f64) -> bool {
        !(self.bottom() < 0.0 || self.top > viewport_h)
    }
}

/// Parse a `data-speed` / `data-parallax` attribute. Missing, unparsable
/// and zero values fall back to the default speed.
pub fn parse_speed(attr: Option<&str>) -> f64 {
    attr.and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v != 0.0)
        .unwrap_or(DEFAULT_PARALLAX_SPEED)
}

#[inline]
pub fn cursor_offset(cursor: CursorPosition, speed: f64) -> (f64, f64) {
    (
        (cursor.x - 0.5) * speed * CURSOR_PARALLAX_X_PX,
        (cursor.y - 0.5) * speed * CURSOR_PARALLAX_Y_PX,
    )
}

#[inline]
pub fn scroll_offset(scrolled: f64, speed: f64) -> f64 {
    -(scrolled * speed)
}

pub fn translate3d(x: f64, y: f64) -> String {
    format!("translate3d({}px, {}px, 0)", x, y)
}

/// Fill fraction of the timeline bar, or `None` while the timeline is
/// entirely outside the viewport.
pub fn timeline_progress(timeline: Rect, viewport_h: f64) -> Option<f64> {
    if timeline.top < viewport_h && timeline.bottom() > 0.0 {
        let span = viewport_h + timeline.height;
        if span <= 0.0 {
            return Some(0.0);
        }
        Some(((viewport_h - timeline.top) / span).clamp(0.0, 1.0))
    } else {
        None
    }
}

/// `(rotate_x, rotate_y)` in degrees for a pointer at client coordinates
/// over `rect`. Zero-sized rects stay flat.
pub fn tilt_angles(client_x: f64, client_y: f64, rect: Rect) -> (f64, f64) {
    let cx = rect.width / 2.0;
    let cy = rect.height / 2.0;
    if cx <= 0.0 || cy <= 0.0 {
        return (0.0, 0.0);
    }
    let x = client_x - rect.left;
    let y = client_y - rect.top;
    ((y - cy) / cy * -TILT_MAX_DEG, (x - cx) / cx * TILT_MAX_DEG)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ(0)",
        TILT_PERSPECTIVE_PX, rotate_x, rotate_y
    )
}
