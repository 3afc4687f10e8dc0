//! Sortable Item Component
//!
//! One draggable tile: an image for URL/blob content, text otherwise.
//! Tiles are focusable so the keyboard sensor can pick them up.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_pointerdown, DndSignals};

use crate::models::{ContentKind, Item};

#[component]
pub fn SortableItem(
    item: Item,
    /// Render the floating copy that follows the pointer (no handlers)
    #[prop(optional)]
    overlay: bool,
) -> impl IntoView {
    let body = match item.kind() {
        ContentKind::Image => view! {
            <img class="item-image" src=item.content.clone() alt="" draggable="false" />
        }
        .into_any(),
        ContentKind::Text => view! { <span class="item-text">{item.content.clone()}</span> }.into_any(),
    };

    if overlay {
        return view! { <div class="sortable-item overlay">{body}</div> }.into_any();
    }

    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let id = item.id;
    let on_pointerdown = make_on_pointerdown(dnd, id.clone());

    // Visual state
    let is_dragging = {
        let id = id.clone();
        move || dnd.is_active(&id)
    };
    let is_drop_target = {
        let id = id.clone();
        move || dnd.is_over(&id)
    };

    view! {
        <div
            class="sortable-item"
            class:dragging=is_dragging
            class:drop-target=is_drop_target
            tabindex="0"
            role="button"
            aria-roledescription="sortable"
            data-dnd-id=id
            on:pointerdown=on_pointerdown
        >
            {body}
        </div>
    }
    .into_any()
}
