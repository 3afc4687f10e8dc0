//! Board Configuration
//!
//! The fixed tier set and optional seed items, read from an inline JSON
//! `<script id="tier-config">` block when the page provides one.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::POOL_ID;

/// Id of the optional config element in `index.html`
pub const CONFIG_ELEMENT_ID: &str = "tier-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("at least one tier is required")]
    NoTiers,
    #[error("duplicate tier id `{0}`")]
    DuplicateTier(String),
    #[error("tier id `{0}` is reserved")]
    ReservedId(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    pub id: String,
    pub label: String,
    pub color: String,
}

impl TierConfig {
    fn new(id: &str, label: &str, color: &str) -> Self {
        Self { id: id.to_string(), label: label.to_string(), color: color.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub tiers: Vec<TierConfig>,
    /// Contents placed in the pool at startup (image URLs or text)
    #[serde(default)]
    pub seed: Vec<String>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tiers: vec![
                TierConfig::new("tier-s", "夯", "#ff7f7f"),
                TierConfig::new("tier-a", "顶级", "#ffbf7f"),
                TierConfig::new("tier-b", "人上人", "#ffdf7f"),
                TierConfig::new("tier-c", "NPC", "#ffff7f"),
                TierConfig::new("tier-d", "拉完了", "#bfff7f"),
            ],
            seed: Vec::new(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tiers.is_empty() {
            return Err(ConfigError::NoTiers);
        }
        let mut seen = HashSet::new();
        for tier in &self.tiers {
            if tier.id == POOL_ID {
                return Err(ConfigError::ReservedId(tier.id.clone()));
            }
            if !seen.insert(tier.id.as_str()) {
                return Err(ConfigError::DuplicateTier(tier.id.clone()));
            }
        }
        Ok(())
    }
}

/// Read the page's config block, falling back to the defaults
pub fn load() -> BoardConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(json) = json else {
        return BoardConfig::default();
    };
    match BoardConfig::from_json(&json) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            BoardConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let config = BoardConfig::default();
        let ids: Vec<_> = config.tiers.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["tier-s", "tier-a", "tier-b", "tier-c", "tier-d"]);
        assert!(config.seed.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json() {
        let config = BoardConfig::from_json(
            r##"{"tiers":[{"id":"top","label":"Top","color":"#f00"}],"seed":["Ferris"]}"##,
        )
        .unwrap();
        assert_eq!(config.tiers[0].label, "Top");
        assert_eq!(config.seed, ["Ferris"]);
    }

    #[test]
    fn test_seed_is_optional() {
        let config = BoardConfig::from_json(r##"{"tiers":[{"id":"top","label":"Top","color":"#f00"}]}"##).unwrap();
        assert!(config.seed.is_empty());
    }

    #[test]
    fn test_rejects_bad_configs() {
        assert!(matches!(BoardConfig::from_json("{"), Err(ConfigError::Json(_))));
        assert!(matches!(BoardConfig::from_json(r#"{"tiers":[]}"#), Err(ConfigError::NoTiers)));
        assert!(matches!(
            BoardConfig::from_json(r##"{"tiers":[{"id":"pool","label":"P","color":"#000"}]}"##),
            Err(ConfigError::ReservedId(id)) if id == "pool"
        ));
        assert!(matches!(
            BoardConfig::from_json(
                r##"{"tiers":[{"id":"a","label":"A","color":"#000"},{"id":"a","label":"B","color":"#111"}]}"##
            ),
            Err(ConfigError::DuplicateTier(id)) if id == "a"
        ));
    }
}
