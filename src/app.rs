//! Tier Maker App
//!
//! Wires the drag lifecycle into the board and lays out the tiers,
//! the pool and the drag overlay.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, DndCallbacks, DragEnd, DragOver, DragStart};

use crate::components::{DragOverlay, ItemPool, LogPanel, TierRow};
use crate::config;
use crate::context::BoardContext;

#[component]
pub fn App() -> impl IntoView {
    let config = config::load();
    log::info!("board ready: {} tiers, {} seed items", config.tiers.len(), config.seed.len());

    // Provide context to all children
    let ctx = BoardContext::new(&config);
    provide_context(ctx);
    let dnd = create_dnd_signals();
    provide_context(dnd);

    bind_global_handlers(dnd, DndCallbacks {
        on_start: Callback::new(move |ev: DragStart| ctx.drag_start(&ev.active_id)),
        on_over: Callback::new(move |ev: DragOver| ctx.drag_over(&ev)),
        on_end: Callback::new(move |ev: DragEnd| ctx.drag_end(&ev)),
    });

    let on_add = Callback::new(move |contents: Vec<String>| ctx.add_to_pool(contents));

    view! {
        <div class="app-layout">
            <h1>"从夯到拉"</h1>

            <div class="tier-board">
                {config.tiers.into_iter().map(|tier| {
                    let items = ctx.tier_items(tier.id.clone());
                    view! {
                        <TierRow tier_id=tier.id label=tier.label color=tier.color items=items />
                    }
                }).collect_view()}
            </div>

            <ItemPool items=ctx.pool_items() on_add=on_add />

            <DragOverlay />

            <LogPanel />
        </div>
    }
}
