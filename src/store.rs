//! Board View Store
//!
//! Render-side copy of the board, using Leptos reactive_stores for
//! fine-grained reactivity. Only `BoardContext` writes to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::models::{Item, Tier};

/// What the presentational layer observes after every board change
#[derive(Clone, Debug, Default, Store)]
pub struct BoardView {
    pub tiers: Vec<Tier>,
    pub pool: Vec<Item>,
    /// Item under the pointer during a drag
    pub active_item: Option<Item>,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        Self {
            tiers: board.tiers().to_vec(),
            pool: board.pool().to_vec(),
            active_item: board.active_item().cloned(),
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardView>;

/// Copy changed collections from the board into the store.
/// Unchanged fields are not written, so their subscribers stay quiet.
pub fn store_publish(store: &BoardStore, board: &Board) {
    if store.tiers().with_untracked(|tiers| tiers.as_slice() != board.tiers()) {
        *store.tiers().write() = board.tiers().to_vec();
    }
    if store.pool().with_untracked(|pool| pool.as_slice() != board.pool()) {
        *store.pool().write() = board.pool().to_vec();
    }
    let active = board.active_item().cloned();
    if store.active_item().with_untracked(|current| *current != active) {
        *store.active_item().write() = active;
    }
}

/// Items of one tier, empty if the id is unknown
pub fn tier_items(tiers: &[Tier], tier_id: &str) -> Vec<Item> {
    tiers
        .iter()
        .find(|t| t.id == tier_id)
        .map(|t| t.items.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoardConfig;

    #[test]
    fn test_view_mirrors_board() {
        let mut config = BoardConfig::default();
        config.seed = vec!["Ferris".to_string()];
        let board = Board::from_config(&config);
        let view = BoardView::from_board(&board);

        assert_eq!(view.tiers.len(), 5);
        assert_eq!(view.pool, board.pool());
        assert_eq!(view.active_item, None);
    }

    #[test]
    fn test_tier_items() {
        let mut tier = Tier::new("s", "S", "#f00");
        tier.items.push(Item::new("x", "X"));
        let tiers = vec![tier];

        assert_eq!(tier_items(&tiers, "s"), vec![Item::new("x", "X")]);
        assert!(tier_items(&tiers, "missing").is_empty());
    }
}
