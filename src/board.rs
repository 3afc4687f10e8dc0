//! Board Controller
//!
//! Owns the pool and tier collections and reconciles them on every drag
//! lifecycle event. All mutation goes through `Board`; every item id lives
//! in exactly one collection between calls.

use std::collections::HashSet;

use leptos_dragdrop::{array_move, DragEnd, DragOver};
use thiserror::Error;

use crate::config::BoardConfig;
use crate::models::{ContainerId, Item, Placement, Tier};

/// Why an operation left the board untouched
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Abort {
    #[error("no drag in progress")]
    NotDragging,
    #[error("no drop target")]
    NoTarget,
    #[error("hovering the dragged item itself")]
    SelfTarget,
    #[error("unknown id `{0}`")]
    UnknownId(String),
    #[error("already in container `{0}`")]
    SameContainer(ContainerId),
    #[error("`{0}` already present in target")]
    AlreadyPresent(String),
    #[error("nothing to add")]
    NothingToAdd,
}

pub type BoardResult<T> = Result<T, Abort>;

/// Drag lifecycle
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    /// `active` is `None` when the start event named an unknown id
    Dragging { active: Option<Item> },
}

#[derive(Debug, Clone, Default)]
pub struct Board {
    tiers: Vec<Tier>,
    pool: Vec<Item>,
    phase: DragPhase,
    next_item: u64,
}

impl Board {
    pub fn new(tiers: Vec<Tier>) -> Self {
        Self { tiers, ..Default::default() }
    }

    pub fn from_config(config: &BoardConfig) -> Self {
        let tiers = config
            .tiers
            .iter()
            .map(|t| Tier::new(&t.id, &t.label, &t.color))
            .collect();
        let mut board = Self::new(tiers);
        let seeds = config.seed.len();
        match board.add_to_pool(config.seed.iter().cloned()) {
            Ok(ids) if ids.len() < seeds => {
                log::debug!("skipped {} blank seed items", seeds - ids.len());
            }
            Ok(_) => {}
            // An empty seed is the common case
            Err(_) if seeds == 0 => {}
            Err(reason) => log::debug!("no seed items added: {}", reason),
        }
        board
    }

    // ========================
    // Read access
    // ========================

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn pool(&self) -> &[Item] {
        &self.pool
    }

    pub fn tier(&self, id: &str) -> Option<&Tier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    pub fn items_in(&self, container: &ContainerId) -> Option<&[Item]> {
        match container {
            ContainerId::Pool => Some(self.pool.as_slice()),
            ContainerId::Tier(id) => self.tier(id).map(|t| t.items.as_slice()),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn active_item(&self) -> Option<&Item> {
        match &self.phase {
            DragPhase::Dragging { active } => active.as_ref(),
            DragPhase::Idle => None,
        }
    }

    /// Every item id, pool first then tiers in order
    pub fn item_ids(&self) -> Vec<&str> {
        self.pool
            .iter()
            .chain(self.tiers.iter().flat_map(|t| t.items.iter()))
            .map(|i| i.id.as_str())
            .collect()
    }

    /// No id appears in more than one place
    pub fn is_partitioned(&self) -> bool {
        let ids = self.item_ids();
        ids.iter().collect::<HashSet<_>>().len() == ids.len()
    }

    // ========================
    // Lookup
    // ========================

    pub fn locate(&self, item_id: &str) -> Option<Placement> {
        if let Some(index) = position_of(&self.pool, item_id) {
            return Some(Placement { container: ContainerId::Pool, index });
        }
        self.tiers.iter().find_map(|t| {
            position_of(&t.items, item_id).map(|index| Placement {
                container: ContainerId::Tier(t.id.clone()),
                index,
            })
        })
    }

    /// Container holding `id`, or the container `id` names
    pub fn find_container(&self, id: &str) -> Option<ContainerId> {
        if let Some(placement) = self.locate(id) {
            return Some(placement.container);
        }
        let container = ContainerId::parse(id);
        self.items_in(&container)?;
        Some(container)
    }

    fn find_item(&self, item_id: &str) -> Option<&Item> {
        let placement = self.locate(item_id)?;
        self.items_in(&placement.container)?.get(placement.index)
    }

    fn items_mut(&mut self, container: &ContainerId) -> Option<&mut Vec<Item>> {
        match container {
            ContainerId::Pool => Some(&mut self.pool),
            ContainerId::Tier(id) => self.tiers.iter_mut().find(|t| t.id == *id).map(|t| &mut t.items),
        }
    }

    // ========================
    // Drag lifecycle
    // ========================

    pub fn drag_start(&mut self, active_id: &str) {
        let active = self.find_item(active_id).cloned();
        if active.is_none() {
            log::debug!("drag started on unknown id `{}`", active_id);
        }
        self.phase = DragPhase::Dragging { active };
    }

    /// Move the dragged item into the hovered container.
    /// Reordering inside one container waits for `drag_end`.
    pub fn drag_over(&mut self, ev: &DragOver) -> BoardResult<Placement> {
        if !self.is_dragging() {
            return Err(Abort::NotDragging);
        }
        let over_id = ev.over_id.as_deref().ok_or(Abort::NoTarget)?;
        if over_id == ev.active_id {
            return Err(Abort::SelfTarget);
        }

        let source = self
            .find_container(&ev.active_id)
            .ok_or_else(|| Abort::UnknownId(ev.active_id.clone()))?;
        let target = self
            .find_container(over_id)
            .ok_or_else(|| Abort::UnknownId(over_id.to_string()))?;
        if source == target {
            return Err(Abort::SameContainer(source));
        }

        let target_items = self
            .items_in(&target)
            .ok_or_else(|| Abort::UnknownId(target.to_string()))?;
        // Only reachable if an id was duplicated across containers
        if position_of(target_items, &ev.active_id).is_some() {
            return Err(Abort::AlreadyPresent(ev.active_id.clone()));
        }
        let index = if over_id == target.as_str() {
            target_items.len()
        } else {
            match position_of(target_items, over_id) {
                Some(i) if ev.is_below_over() => i + 1,
                Some(i) => i,
                None => target_items.len(),
            }
        };

        let source_items = self
            .items_mut(&source)
            .ok_or_else(|| Abort::UnknownId(source.to_string()))?;
        let from = position_of(source_items, &ev.active_id)
            .ok_or_else(|| Abort::UnknownId(ev.active_id.clone()))?;
        let item = source_items.remove(from);

        let Some(target_items) = self.items_mut(&target) else {
            if let Some(items) = self.items_mut(&source) {
                items.insert(from, item);
            }
            return Err(Abort::UnknownId(target.to_string()));
        };
        let index = index.min(target_items.len());
        target_items.insert(index, item);

        log::debug!("moved `{}` from {} to {}[{}]", ev.active_id, source, target, index);
        debug_assert!(self.is_partitioned());
        Ok(Placement { container: target, index })
    }

    /// Finish the drag, reordering within a shared container if needed.
    /// The board always returns to `Idle`.
    pub fn drag_end(&mut self, ev: &DragEnd) -> BoardResult<()> {
        if !self.is_dragging() {
            return Err(Abort::NotDragging);
        }
        let result = self.reorder_on_drop(ev);
        self.phase = DragPhase::Idle;
        debug_assert!(self.is_partitioned());
        result
    }

    pub fn cancel_drag(&mut self) {
        self.phase = DragPhase::Idle;
    }

    fn reorder_on_drop(&mut self, ev: &DragEnd) -> BoardResult<()> {
        let over_id = ev.over_id.as_deref().ok_or(Abort::NoTarget)?;
        let source = self
            .find_container(&ev.active_id)
            .ok_or_else(|| Abort::UnknownId(ev.active_id.clone()))?;
        let target = self
            .find_container(over_id)
            .ok_or_else(|| Abort::UnknownId(over_id.to_string()))?;
        if source != target {
            // Cross-container moves were applied while hovering
            return Ok(());
        }

        let items = self
            .items_mut(&source)
            .ok_or_else(|| Abort::UnknownId(source.to_string()))?;
        let from = position_of(items, &ev.active_id)
            .ok_or_else(|| Abort::UnknownId(ev.active_id.clone()))?;
        // Dropping on the container's empty space keeps the order
        let Some(to) = position_of(items, over_id) else {
            return Ok(());
        };
        if from != to {
            array_move(items, from, to);
            log::debug!("reordered `{}` in {}: {} -> {}", ev.active_id, source, from, to);
        }
        Ok(())
    }

    // ========================
    // Item creation
    // ========================

    /// Append one item per non-blank content to the end of the pool.
    /// Returns the new ids in order.
    pub fn add_to_pool<I>(&mut self, contents: I) -> BoardResult<Vec<String>>
    where
        I: IntoIterator<Item = String>,
    {
        let mut ids = Vec::new();
        for content in contents {
            if content.trim().is_empty() {
                continue;
            }
            let id = self.fresh_id();
            self.pool.push(Item::new(id.clone(), content));
            ids.push(id);
        }
        if ids.is_empty() {
            return Err(Abort::NothingToAdd);
        }
        debug_assert!(self.is_partitioned());
        Ok(ids)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            self.next_item += 1;
            let id = format!("item-{}", self.next_item);
            if self.find_container(&id).is_none() {
                return id;
            }
        }
    }
}

fn position_of(items: &[Item], id: &str) -> Option<usize> {
    items.iter().position(|i| i.id == id)
}
