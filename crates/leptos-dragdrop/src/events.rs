//! Drag lifecycle events and the state they are derived from.

use leptos::prelude::*;

use crate::geometry::{is_below_center, Point, Rect};

/// Movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Input that drives a drag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sensor {
    /// Mouse, touch or pen via pointer events
    Pointer,
    /// Space/Enter picks up, arrows move, Space/Enter drops
    Keyboard,
}

/// A drag that has been armed by pointerdown or promoted to active
#[derive(Clone, Debug, PartialEq)]
pub struct ActiveDrag {
    pub id: String,
    pub sensor: Sensor,
    /// Pointer position when the drag was armed
    pub origin: Point,
    /// Bounding rect of the dragged element at pointerdown.
    /// `None` for keyboard drags, which have no overlay.
    pub rect: Option<Rect>,
}

impl ActiveDrag {
    pub fn exceeds_threshold(&self, pointer: Point) -> bool {
        (pointer.x - self.origin.x).abs() > DRAG_THRESHOLD_PX
            || (pointer.y - self.origin.y).abs() > DRAG_THRESHOLD_PX
    }

    /// Where the dragged element would be if it followed the pointer
    pub fn translated_rect(&self, pointer: Point) -> Option<Rect> {
        self.rect.map(|r| r + (pointer - self.origin))
    }
}

/// The droppable element currently under the pointer
#[derive(Clone, Debug, PartialEq)]
pub struct OverTarget {
    pub id: String,
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragStart {
    pub active_id: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragOver {
    pub active_id: String,
    pub over_id: Option<String>,
    pub active_rect: Option<Rect>,
    pub over_rect: Option<Rect>,
}

impl DragOver {
    pub fn new(active: &ActiveDrag, over: Option<&OverTarget>, pointer: Point) -> Self {
        Self {
            active_id: active.id.clone(),
            over_id: over.map(|o| o.id.clone()),
            active_rect: active.translated_rect(pointer),
            over_rect: over.map(|o| o.rect),
        }
    }

    /// Whether the dragged rect sits below the hovered rect's center.
    /// False when either rect is unknown.
    pub fn is_below_over(&self) -> bool {
        match (self.active_rect, self.over_rect) {
            (Some(active), Some(over)) => is_below_center(&active, &over),
            _ => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragEnd {
    pub active_id: String,
    pub over_id: Option<String>,
}

/// Lifecycle callbacks fired by the global handlers
#[derive(Clone, Copy)]
pub struct DndCallbacks {
    pub on_start: Callback<DragStart>,
    pub on_over: Callback<DragOver>,
    pub on_end: Callback<DragEnd>,
}

/// Over-events only fire when the hovered id actually changes
pub fn over_changed(prev: Option<&OverTarget>, next: Option<&OverTarget>) -> bool {
    prev.map(|o| o.id.as_str()) != next.map(|o| o.id.as_str())
}

/// Direction of one keyboard move
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

impl Step {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "ArrowRight" => Some(Step::Next),
            "ArrowUp" | "ArrowLeft" => Some(Step::Prev),
            _ => None,
        }
    }
}

/// Index of the next keyboard drop target among `ids` (document order),
/// never the dragged id itself.
///
/// Stepping starts from the hovered id, or from the dragged item's own slot
/// before anything is hovered. Returns `None` at either end.
pub fn step_target(ids: &[String], active_id: &str, current: Option<&str>, step: Step) -> Option<usize> {
    let from = current
        .and_then(|c| ids.iter().position(|id| id == c))
        .or_else(|| ids.iter().position(|id| id == active_id));
    let eligible = |i: &usize| ids[*i] != active_id;
    match (step, from) {
        (Step::Next, Some(i)) => (i + 1..ids.len()).find(eligible),
        (Step::Next, None) => (0..ids.len()).find(eligible),
        (Step::Prev, Some(i)) => (0..i).rev().find(eligible),
        (Step::Prev, None) => (0..ids.len()).rev().find(eligible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> ActiveDrag {
        ActiveDrag {
            id: "item-1".to_string(),
            sensor: Sensor::Pointer,
            origin: Point::new(100.0, 100.0),
            rect: Some(Rect::new(90.0, 90.0, 170.0, 170.0)),
        }
    }

    #[test]
    fn test_threshold() {
        let drag = armed();
        assert!(!drag.exceeds_threshold(Point::new(104.0, 95.0)));
        assert!(drag.exceeds_threshold(Point::new(106.0, 100.0)));
        assert!(drag.exceeds_threshold(Point::new(100.0, 94.0)));
    }

    #[test]
    fn test_translated_rect_follows_pointer() {
        let rect = armed().translated_rect(Point::new(130.0, 80.0)).unwrap();
        assert_eq!(rect, Rect::new(120.0, 70.0, 200.0, 150.0));

        let no_rect = ActiveDrag { rect: None, ..armed() };
        assert_eq!(no_rect.translated_rect(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_drag_over_bias() {
        let over = OverTarget { id: "b".to_string(), rect: Rect::new(0.0, 200.0, 80.0, 280.0) };
        // Dragged rect top = 90 + (pointer.y - 100)
        let below = DragOver::new(&armed(), Some(&over), Point::new(100.0, 260.0));
        assert!(below.is_below_over());
        let above = DragOver::new(&armed(), Some(&over), Point::new(100.0, 200.0));
        assert!(!above.is_below_over());

        let nowhere = DragOver::new(&armed(), None, Point::new(100.0, 260.0));
        assert_eq!(nowhere.over_id, None);
        assert!(!nowhere.is_below_over());
    }

    #[test]
    fn test_over_changed() {
        let a = OverTarget { id: "a".to_string(), rect: Rect::default() };
        let a_moved = OverTarget { id: "a".to_string(), rect: Rect::new(1.0, 1.0, 2.0, 2.0) };
        let b = OverTarget { id: "b".to_string(), rect: Rect::default() };
        assert!(!over_changed(Some(&a), Some(&a_moved)));
        assert!(over_changed(Some(&a), Some(&b)));
        assert!(over_changed(None, Some(&a)));
        assert!(over_changed(Some(&a), None));
        assert!(!over_changed(None, None));
    }

    fn board_ids() -> Vec<String> {
        ["tier-s", "a", "tier-a", "b", "c", "pool", "x"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_step_from_key() {
        assert_eq!(Step::from_key("ArrowDown"), Some(Step::Next));
        assert_eq!(Step::from_key("ArrowRight"), Some(Step::Next));
        assert_eq!(Step::from_key("ArrowUp"), Some(Step::Prev));
        assert_eq!(Step::from_key("ArrowLeft"), Some(Step::Prev));
        assert_eq!(Step::from_key("Tab"), None);
    }

    #[test]
    fn test_step_target_starts_at_own_slot() {
        let ids = board_ids();
        assert_eq!(step_target(&ids, "b", None, Step::Next), Some(4)); // c
        assert_eq!(step_target(&ids, "b", None, Step::Prev), Some(2)); // tier-a
    }

    #[test]
    fn test_step_target_skips_dragged_item() {
        let ids = board_ids();
        assert_eq!(step_target(&ids, "b", Some("tier-a"), Step::Next), Some(4));
        assert_eq!(step_target(&ids, "b", Some("c"), Step::Prev), Some(2));
        assert_eq!(step_target(&ids, "b", Some("c"), Step::Next), Some(5)); // pool
    }

    #[test]
    fn test_step_target_stops_at_ends() {
        let ids = board_ids();
        assert_eq!(step_target(&ids, "b", Some("x"), Step::Next), None);
        assert_eq!(step_target(&ids, "b", Some("tier-s"), Step::Prev), None);
        assert_eq!(step_target(&ids, "x", None, Step::Next), None);
        assert_eq!(step_target(&ids, "tier-s", Some("a"), Step::Prev), None);
    }

    #[test]
    fn test_step_target_unknown_start() {
        let ids = board_ids();
        assert_eq!(step_target(&ids, "gone", None, Step::Next), Some(0));
        assert_eq!(step_target(&ids, "gone", Some("also-gone"), Step::Prev), Some(6));
        assert_eq!(step_target(&[], "b", None, Step::Next), None);
    }
}
