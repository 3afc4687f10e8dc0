//! UI Components
//!
//! Presentational Leptos components. None of them own board state.

mod drag_overlay;
mod item_pool;
mod log_panel;
mod sortable_item;
mod text_item_form;
mod tier_row;

pub use drag_overlay::DragOverlay;
pub use item_pool::ItemPool;
pub use log_panel::LogPanel;
pub use sortable_item::SortableItem;
pub use text_item_form::TextItemForm;
pub use tier_row::TierRow;
