//! Board Context
//!
//! Owns the `Board` for the running app and is the only path that
//! mutates it. Provided to components via the Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{DragEnd, DragOver};
use reactive_stores::Store;

use crate::board::{Board, BoardResult};
use crate::config::BoardConfig;
use crate::models::Item;
use crate::store::{store_publish, tier_items, BoardStore, BoardView, BoardViewStoreFields};

#[derive(Clone, Copy)]
pub struct BoardContext {
    board: StoredValue<Board>,
    store: BoardStore,
}

impl BoardContext {
    pub fn new(config: &BoardConfig) -> Self {
        let board = Board::from_config(config);
        let store = Store::new(BoardView::from_board(&board));
        Self { board: StoredValue::new(board), store }
    }

    /// Apply one operation, then publish if it changed anything
    fn apply<T>(&self, op: &str, f: impl FnOnce(&mut Board) -> BoardResult<T>) -> Option<T> {
        let result = self.board.try_update_value(f)?;
        self.board.with_value(|board| store_publish(&self.store, board));
        match result {
            Ok(value) => Some(value),
            Err(reason) => {
                log::debug!("{} skipped: {}", op, reason);
                None
            }
        }
    }

    pub fn drag_start(&self, active_id: &str) {
        log::debug!("drag start `{}`", active_id);
        self.apply("drag start", |board| {
            board.drag_start(active_id);
            Ok(())
        });
    }

    pub fn drag_over(&self, ev: &DragOver) {
        self.apply("drag over", |board| board.drag_over(ev));
    }

    pub fn drag_end(&self, ev: &DragEnd) {
        if ev.over_id.is_none() {
            log::debug!("drag cancelled `{}`", ev.active_id);
            self.apply("drag cancel", |board| {
                board.cancel_drag();
                Ok(())
            });
            return;
        }
        self.apply("drag end", |board| board.drag_end(ev));
    }

    pub fn add_to_pool(&self, contents: Vec<String>) {
        if let Some(ids) = self.apply("add to pool", |board| board.add_to_pool(contents)) {
            log::info!("added {} item(s) to the pool", ids.len());
        }
    }

    // ========================
    // Read-only views
    // ========================

    pub fn pool_items(&self) -> Memo<Vec<Item>> {
        let store = self.store;
        Memo::new(move |_| store.pool().get())
    }

    pub fn tier_items(&self, tier_id: String) -> Memo<Vec<Item>> {
        let store = self.store;
        Memo::new(move |_| store.tiers().with(|tiers| tier_items(tiers, &tier_id)))
    }

    pub fn active_item(&self) -> Memo<Option<Item>> {
        let store = self.store;
        Memo::new(move |_| store.active_item().get())
    }
}

pub fn use_board() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
