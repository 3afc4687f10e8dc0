//! Leptos DragDrop Utilities
//!
//! Simple sortable drag-and-drop for Leptos.
//!
//! Pointer events cover mouse, touch and pen. A movement threshold tells a
//! tap from a drag, and the element under the pointer is hit-tested against
//! `data-dnd-id`. Focusable draggables can also be picked up with Space or
//! Enter, moved between drop targets with the arrow keys and dropped again.

mod events;
mod geometry;
mod sortable;

pub use events::*;
pub use geometry::{is_below_center, point_from_mouse, rect_from_dom, Point, Rect};
pub use sortable::{array_move, DND_ID_ATTR};

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Armed by pointerdown, not yet dragging
    pub pending_read: ReadSignal<Option<ActiveDrag>>,
    pub pending_write: WriteSignal<Option<ActiveDrag>>,
    pub active_read: ReadSignal<Option<ActiveDrag>>,
    pub active_write: WriteSignal<Option<ActiveDrag>>,
    pub over_read: ReadSignal<Option<OverTarget>>,
    pub over_write: WriteSignal<Option<OverTarget>>,
    /// Last known pointer position
    pub pointer_read: ReadSignal<Point>,
    pub pointer_write: WriteSignal<Point>,
}

impl DndSignals {
    pub fn is_active(&self, id: &str) -> bool {
        self.active_read.with(|a| a.as_ref().is_some_and(|a| a.id == id))
    }

    pub fn is_over(&self, id: &str) -> bool {
        self.over_read.with(|o| o.as_ref().is_some_and(|o| o.id == id))
    }

    /// Current rect of the dragged element following the pointer
    pub fn overlay_rect(&self) -> Option<Rect> {
        let pointer = self.pointer_read.get();
        self.active_read
            .with(|a| a.as_ref().and_then(|a| a.translated_rect(pointer)))
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (pending_read, pending_write) = signal(None::<ActiveDrag>);
    let (active_read, active_write) = signal(None::<ActiveDrag>);
    let (over_read, over_write) = signal(None::<OverTarget>);
    let (pointer_read, pointer_write) = signal(Point::default());
    DndSignals {
        pending_read,
        pending_write,
        active_read,
        active_write,
        over_read,
        over_write,
        pointer_read,
        pointer_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.pending_write.set(None);
    dnd.active_write.set(None);
    dnd.over_write.set(None);
}

/// Create pointerdown handler for draggable items.
/// Records a pending drag with start position and element rect, and
/// captures the pointer so the release is seen wherever it happens.
pub fn make_on_pointerdown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::PointerEvent) + Clone + 'static {
    move |ev: web_sys::PointerEvent| {
        if !ev.is_primary() || ev.button() != 0 {
            return;
        }
        if dnd.active_read.get_untracked().is_some() {
            return;
        }
        // Ignore if target is input or button
        if let Some(target) = ev.target() {
            if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
            if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
        }
        // Suppress native image drag and text selection
        ev.prevent_default();

        let element = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
        if let Some(el) = &element {
            let _ = el.set_pointer_capture(ev.pointer_id());
        }
        dnd.pending_write.set(Some(ActiveDrag {
            id: item_id.clone(),
            sensor: Sensor::Pointer,
            origin: point_from_mouse(&ev),
            rect: element.map(|el| rect_from_dom(&el.get_bounding_client_rect())),
        }));
    }
}

fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

fn over_target(element: &web_sys::Element) -> Option<OverTarget> {
    let id = element.get_attribute(DND_ID_ATTR)?;
    Some(OverTarget { id, rect: rect_from_dom(&element.get_bounding_client_rect()) })
}

/// Find the innermost drop target under the pointer
fn hit_test(point: Point) -> Option<OverTarget> {
    let hit = document()?.element_from_point(point.x as f32, point.y as f32)?;
    let target = hit.closest(&format!("[{}]", DND_ID_ATTR)).ok()??;
    over_target(&target)
}

/// Every drop target in document order
fn drop_targets() -> Vec<web_sys::Element> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(&format!("[{}]", DND_ID_ATTR)).ok()) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .collect()
}

fn focus_draggable(id: &str) {
    let selector = format!("[{}=\"{}\"]", DND_ID_ATTR, id);
    if let Some(el) = document()
        .and_then(|d| d.query_selector(&selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
    {
        let _ = el.focus();
    }
}

fn on_global_pointermove(dnd: DndSignals, callbacks: DndCallbacks, ev: &web_sys::PointerEvent) {
    let pointer = point_from_mouse(ev);

    // Promote a pending drag once moved beyond the threshold
    if dnd.active_read.get_untracked().is_none() {
        let Some(pending) = dnd.pending_read.get_untracked() else { return };
        if !pending.exceeds_threshold(pointer) {
            return;
        }
        dnd.pending_write.set(None);
        dnd.pointer_write.set(pointer);
        dnd.active_write.set(Some(pending.clone()));
        callbacks.on_start.run(DragStart { active_id: pending.id });
    }

    dnd.pointer_write.set(pointer);

    let Some(active) = dnd.active_read.get_untracked() else { return };
    if active.sensor != Sensor::Pointer {
        return;
    }
    let over = hit_test(pointer);
    if over_changed(dnd.over_read.get_untracked().as_ref(), over.as_ref()) {
        dnd.over_write.set(over.clone());
        callbacks.on_over.run(DragOver::new(&active, over.as_ref(), pointer));
    }
}

fn finish(dnd: DndSignals, callbacks: DndCallbacks, over_id: Option<String>) {
    let active = dnd.active_read.get_untracked();
    end_drag(&dnd);
    if let Some(active) = active {
        callbacks.on_end.run(DragEnd { active_id: active.id, over_id });
    }
}

/// Space or Enter on a focused draggable
fn pick_up(dnd: DndSignals, callbacks: DndCallbacks) -> bool {
    let Some(id) = document()
        .and_then(|d| d.active_element())
        .and_then(|el| el.get_attribute(DND_ID_ATTR))
    else {
        return false;
    };
    log::debug!("keyboard pick up `{}`", id);
    dnd.pending_write.set(None);
    dnd.over_write.set(None);
    dnd.active_write.set(Some(ActiveDrag {
        id: id.clone(),
        sensor: Sensor::Keyboard,
        origin: dnd.pointer_read.get_untracked(),
        rect: None,
    }));
    callbacks.on_start.run(DragStart { active_id: id });
    true
}

fn step_over(dnd: DndSignals, callbacks: DndCallbacks, active: &ActiveDrag, step: Step) {
    let targets = drop_targets();
    let ids: Vec<String> = targets
        .iter()
        .map(|el| el.get_attribute(DND_ID_ATTR).unwrap_or_default())
        .collect();
    let current = dnd.over_read.get_untracked().map(|o| o.id);
    let Some(index) = step_target(&ids, &active.id, current.as_deref(), step) else { return };
    let Some(over) = over_target(&targets[index]) else { return };

    dnd.over_write.set(Some(over.clone()));
    callbacks.on_over.run(DragOver::new(active, Some(&over), dnd.pointer_read.get_untracked()));
}

fn on_global_keydown(dnd: DndSignals, callbacks: DndCallbacks, ev: &web_sys::KeyboardEvent) {
    let key = ev.key();
    let is_toggle = key == " " || key == "Enter";
    if is_toggle && ev.repeat() {
        return;
    }

    let Some(active) = dnd.active_read.get_untracked() else {
        if is_toggle && pick_up(dnd, callbacks) {
            ev.prevent_default();
        }
        return;
    };

    if key == "Escape" {
        ev.prevent_default();
        finish(dnd, callbacks, None);
        return;
    }
    // Pointer drags only listen for Escape
    if active.sensor != Sensor::Keyboard {
        return;
    }

    if is_toggle {
        ev.prevent_default();
        let over_id = dnd.over_read.get_untracked().map(|o| o.id);
        finish(dnd, callbacks, over_id);
        // Cross-container moves re-render the tile
        request_animation_frame(move || focus_draggable(&active.id));
    } else if let Some(step) = Step::from_key(&key) {
        ev.prevent_default();
        step_over(dnd, callbacks, &active, step);
    }
}

/// Bind document-level handlers that drive the drag lifecycle:
/// pointermove (start/over), pointerup (end), pointercancel (cancel)
/// and keydown (keyboard drags, Escape cancels any drag).
pub fn bind_global_handlers(dnd: DndSignals, callbacks: DndCallbacks) {
    let Some(doc) = document() else { return };

    let on_pointermove = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |ev: web_sys::PointerEvent| {
        on_global_pointermove(dnd, callbacks, &ev);
    });
    let _ = doc.add_event_listener_with_callback("pointermove", on_pointermove.as_ref().unchecked_ref());
    on_pointermove.forget();

    let on_pointerup = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        if dnd.active_read.get_untracked().is_some_and(|a| a.sensor == Sensor::Keyboard) {
            return;
        }
        let over_id = dnd.over_read.get_untracked().map(|o| o.id);
        finish(dnd, callbacks, over_id);
    });
    let _ = doc.add_event_listener_with_callback("pointerup", on_pointerup.as_ref().unchecked_ref());
    on_pointerup.forget();

    let on_pointercancel = Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |_ev: web_sys::PointerEvent| {
        if dnd.active_read.get_untracked().is_some_and(|a| a.sensor == Sensor::Keyboard) {
            return;
        }
        finish(dnd, callbacks, None);
    });
    let _ = doc.add_event_listener_with_callback("pointercancel", on_pointercancel.as_ref().unchecked_ref());
    on_pointercancel.forget();

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        on_global_keydown(dnd, callbacks, &ev);
    });
    let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
    on_keydown.forget();
}
