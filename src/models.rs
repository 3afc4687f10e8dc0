//! Frontend Models
//!
//! Items, tiers and the container ids that locate them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved id of the unranked pool container
pub const POOL_ID: &str = "pool";

/// How an item's content should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Image,
    Text,
}

/// A draggable unit: an uploaded image reference or a text label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub content: String,
}

impl Item {
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self { id: id.into(), content: content.into() }
    }

    pub fn kind(&self) -> ContentKind {
        const IMAGE_PREFIXES: &[&str] = &["http://", "https://", "blob:", "data:image/"];
        if IMAGE_PREFIXES.iter().any(|p| self.content.starts_with(p)) {
            ContentKind::Image
        } else {
            ContentKind::Text
        }
    }
}

/// A named, colored bucket; item order is rank within the tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    pub id: String,
    pub label: String,
    pub color: String,
    pub items: Vec<Item>,
}

impl Tier {
    pub fn new(id: impl Into<String>, label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            color: color.into(),
            items: Vec::new(),
        }
    }
}

/// Where an item can live
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContainerId {
    Pool,
    Tier(String),
}

impl ContainerId {
    pub fn parse(id: &str) -> Self {
        if id == POOL_ID {
            ContainerId::Pool
        } else {
            ContainerId::Tier(id.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ContainerId::Pool => POOL_ID,
            ContainerId::Tier(id) => id,
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolved location of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub container: ContainerId,
    pub index: usize,
}
