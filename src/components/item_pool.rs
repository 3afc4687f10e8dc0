//! Item Pool Component
//!
//! Unranked holding area with the upload control.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use wasm_bindgen::JsCast;

use crate::components::{SortableItem, TextItemForm};
use crate::models::{Item, POOL_ID};
use crate::upload;

#[component]
pub fn ItemPool(
    #[prop(into)] items: Signal<Vec<Item>>,
    /// Receives new contents: object URLs from uploads, or a text label
    on_add: Callback<Vec<String>>,
) -> impl IntoView {
    let dnd = use_context::<DndSignals>().expect("DndSignals should be provided");

    let on_upload = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let urls = upload::object_urls(&input);
        if !urls.is_empty() {
            on_add.run(urls);
        }
    };

    view! {
        <section class="item-pool">
            <div class="pool-controls">
                <label class="upload-btn">
                    <span>"上传图片"</span>
                    <input type="file" multiple=true accept="image/*" class="hidden" on:change=on_upload />
                </label>
                <TextItemForm on_add=on_add />
            </div>

            <div
                class="pool-items"
                class:drop-target=move || dnd.is_over(POOL_ID)
                data-dnd-id=POOL_ID
            >
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item| view! { <SortableItem item=item /> }
                />
            </div>
        </section>
    }
}
