//! Screen geometry used by hit-testing and the drag overlay.
//!
//! All values are client (viewport) coordinates.

pub use kurbo::{Point, Rect};

pub fn rect_from_dom(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom())
}

pub fn point_from_mouse(ev: &web_sys::MouseEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// True when `active`'s top edge sits below `over`'s vertical center
pub fn is_below_center(active: &Rect, over: &Rect) -> bool {
    active.y0 > over.center().y
}
