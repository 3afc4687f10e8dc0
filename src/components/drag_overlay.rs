//! Drag Overlay Component
//!
//! Copy of the active item that follows the pointer. It never receives
//! pointer events, so hit-testing sees what is underneath.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::SortableItem;
use crate::context::use_board;

#[component]
pub fn DragOverlay() -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let active_item = use_board().active_item();

    let style = move || match dnd.overlay_rect() {
        Some(r) => format!(
            "left: {}px; top: {}px; width: {}px; height: {}px;",
            r.x0,
            r.y0,
            r.width(),
            r.height()
        ),
        None => "display: none;".to_string(),
    };

    move || {
        active_item.get().map(|item| {
            view! {
                <div class="drag-overlay" style=style>
                    <SortableItem item=item overlay=true />
                </div>
            }
        })
    }
}
