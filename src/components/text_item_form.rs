//! Text Item Form Component
//!
//! Adds a plain text label to the pool.

use leptos::prelude::*;

#[component]
pub fn TextItemForm(on_add: Callback<Vec<String>>) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get().trim().to_string();
        if text.is_empty() { return; }

        on_add.run(vec![text]);
        set_new_text.set(String::new());
    };

    view! {
        <form class="text-item-form" on:submit=add_item>
            <input
                type="text"
                placeholder="添加文字..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"+"</button>
        </form>
    }
}
