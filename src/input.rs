use crate::constants::{
    CURSOR_DRAGGING, CURSOR_HOVER, CURSOR_IDLE, MAX_DEVICE_PIXEL_RATIO, MAX_SURFACE_DIM,
    MAX_TEXTURE_DIM, PRIMARY_BUTTON,
};
use glam::Vec2;

/// Device pixel ratio used for the backing store: capped, and 1.0 for
/// nonsense values.
#[inline]
pub fn capped_dpr(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr.min(MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

/// Backing store size in device pixels for a canvas of the given CSS size.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, dpr: f64) -> (u32, u32) {
    let dpr = capped_dpr(dpr);
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr).round() as u32).clamp(1, MAX_SURFACE_DIM)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}

/// Only the primary button starts a drag; touch and pen report 0 as well.
#[inline]
pub fn is_primary_button(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Pointer position in NDC from client coordinates and the canvas bounding
/// rect `(left, top, width, height)`.
#[inline]
pub fn pointer_ndc(client_x: f64, client_y: f64, rect: [f64; 4]) -> Option<Vec2> {
    let rect = rect.map(|v| v as f32);
    pose_core::ndc_from_client(Vec2::new(client_x as f32, client_y as f32), rect)
}

/// While a drag is active only its own pointer may move, release or cancel
/// it. With no drag every pointer may move (hover).
#[inline]
pub fn accepts_move(active: Option<i32>, pointer_id: i32) -> bool {
    active.map_or(true, |id| id == pointer_id)
}

#[inline]
pub fn ends_drag(active: Option<i32>, pointer_id: i32) -> bool {
    active == Some(pointer_id)
}

#[inline]
pub fn cursor_for(dragging: bool, hovered: bool) -> &'static str {
    if dragging {
        CURSOR_DRAGGING
    } else if hovered {
        CURSOR_HOVER
    } else {
        CURSOR_IDLE
    }
}

/// Size a decoded image is drawn at before upload: aspect kept, longest side
/// at most `MAX_TEXTURE_DIM`, never zero.
pub fn texture_size(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_TEXTURE_DIM {
        return (width.max(1), height.max(1));
    }
    let scale = MAX_TEXTURE_DIM as f64 / longest as f64;
    let fit = |v: u32| ((v as f64 * scale).round() as u32).clamp(1, MAX_TEXTURE_DIM);
    (fit(width), fit(height))
}
