use std::{fs, path::Path};

use serde::Deserialize;

/// Target total; a two-card hand at this value is a natural.
pub const BLACKJACK: u16 = 21;
/// Dealer keeps drawing while below this value.
pub const DEALER_STANDS_ON: u16 = 16;
/// An ace counts 11 only while the running total is at or below this.
pub const ACE_HIGH_LIMIT: u16 = 10;
pub const DECK_SIZE: usize = 52;

pub const DEFAULT_PLAYER_NAME: &str = "Player";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    /// Seed for the shuffle and draws. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub player_name: Option<String>,
}

impl TableConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("cannot read {}: {err}", path.display()))?;
        Self::from_json(&text).map_err(|err| format!("invalid config {}: {err}", path.display()))
    }

    pub fn with_seed_override(mut self, seed: Option<&str>) -> Result<Self, String> {
        if let Some(raw) = seed {
            let parsed = raw
                .trim()
                .parse::<u64>()
                .map_err(|err| format!("invalid seed {raw:?}: {err}"))?;
            self.seed = Some(parsed);
        }
        Ok(self)
    }

    /// Configured name, ignoring blank entries.
    pub fn player_name(&self) -> Option<&str> {
        self.player_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = TableConfig::from_json("{}").unwrap();
        assert_eq!(config.seed, None);
        assert_eq!(config.player_name(), None);
    }

    #[test]
    fn reads_seed_and_name() {
        let config = TableConfig::from_json(r#"{"seed": 7, "player_name": " Ada "}"#).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.player_name(), Some("Ada"));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(TableConfig::from_json(r#"{"bet_size": 100}"#).is_err());
    }

    #[test]
    fn seed_override_replaces_configured_seed() {
        let config = TableConfig { seed: Some(1), player_name: None }
            .with_seed_override(Some("42"))
            .unwrap();
        assert_eq!(config.seed, Some(42));

        let err = TableConfig::default().with_seed_override(Some("abc"));
        assert!(err.is_err());
    }
}
