//! Tier Row Component
//!
//! Colored label plus the ranked items of one tier.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use crate::components::SortableItem;
use crate::models::Item;

#[component]
pub fn TierRow(
    tier_id: String,
    label: String,
    color: String,
    #[prop(into)] items: Signal<Vec<Item>>,
) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");
    let is_drop_target = {
        let tier_id = tier_id.clone();
        move || dnd.is_over(&tier_id)
    };

    view! {
        <div class="tier-row">
            <div class="tier-label" style=format!("background-color: {};", color)>
                <span>{label}</span>
            </div>

            <div class="tier-items" class:drop-target=is_drop_target data-dnd-id=tier_id>
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <SortableItem item=item /> }
                />
            </div>
        </div>
    }
}
