//! # Console Configuration
//!
//! Currency rule sets per game, loaded at startup.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --game tibia   --config ./tradedesk.toml                           │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     TRADEDESK_CONFIG=/etc/tradedesk.toml                               │
//! │     TRADEDESK_DEFAULT_GAME=tibia                                       │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ~/.config/tradedesk/tradedesk.toml (Linux)                         │
//! │     ~/Library/Application Support/gg.tradedesk.tradedesk/... (macOS)   │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     Tibia Coins: multiples of 25, 25..=100000                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! default_game = "tibia"
//!
//! [[currencies]]
//! game = "tibia"
//! name = "Tibia Coins"
//! denomination = 25
//! min_amount = 25
//! max_amount = 100000
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tradedesk_core::{
    CoreError, DenominationRules, TIBIA_COIN_DENOMINATION, TIBIA_COIN_MAX_AMOUNT,
    TIBIA_COIN_MIN_AMOUNT,
};

use crate::error::{ConsoleError, ConsoleResult};

// =============================================================================
// Currency Rules
// =============================================================================

/// One `[[currencies]]` entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRulesConfig {
    /// Game slug the rules apply to.
    pub game: String,

    /// Currency display name.
    #[serde(default)]
    pub name: String,

    pub denomination: u32,
    pub min_amount: f64,
    pub max_amount: f64,
}

impl CurrencyRulesConfig {
    /// Builds the validated rule set.
    pub fn rules(&self) -> ConsoleResult<DenominationRules> {
        Ok(DenominationRules::new(
            self.denomination,
            self.min_amount,
            self.max_amount,
        )?)
    }
}

fn default_game() -> String {
    "tibia".to_string()
}

fn default_currencies() -> Vec<CurrencyRulesConfig> {
    vec![CurrencyRulesConfig {
        game: default_game(),
        name: "Tibia Coins".to_string(),
        denomination: TIBIA_COIN_DENOMINATION,
        min_amount: TIBIA_COIN_MIN_AMOUNT,
        max_amount: TIBIA_COIN_MAX_AMOUNT,
    }]
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Game used when `--game` is not given.
    #[serde(default = "default_game")]
    pub default_game: String,

    /// Rule sets, one per game.
    #[serde(default = "default_currencies")]
    pub currencies: Vec<CurrencyRulesConfig>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            default_game: default_game(),
            currencies: default_currencies(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`path`, else the platform config dir)
    /// 3. Environment variables
    ///
    /// An explicit `path` that does not exist is an error; a missing
    /// default file is not.
    pub fn load(path: Option<&Path>) -> ConsoleResult<Self> {
        let mut config = match path {
            Some(path) => {
                info!(?path, "Loading config from file");
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => {
                    info!(?path, "Loading config from file");
                    Self::from_file(&path)?
                }
                other => {
                    debug!(path = ?other, "Config file not found, using defaults");
                    Self::default()
                }
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML file (not validated).
    pub fn from_file(path: &Path) -> ConsoleResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses TOML text (not validated).
    pub fn from_toml_str(contents: &str) -> ConsoleResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `TRADEDESK_*` environment overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from a key lookup (the environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(game) = lookup("TRADEDESK_DEFAULT_GAME") {
            let game = game.trim().to_string();
            if !game.is_empty() {
                debug!(game = %game, "Overriding default game from environment");
                self.default_game = game;
            }
        }
    }

    /// Validates the configuration.
    ///
    /// ## Rules
    /// - At least one rule set
    /// - Game slugs are unique (case-insensitive)
    /// - Every rule set is satisfiable
    /// - `default_game` has a rule set
    pub fn validate(&self) -> ConsoleResult<()> {
        if self.currencies.is_empty() {
            return Err(ConsoleError::InvalidConfig(
                "at least one [[currencies]] entry is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.currencies {
            if entry.game.trim().is_empty() {
                return Err(ConsoleError::InvalidConfig(
                    "currency entry without a game slug".into(),
                ));
            }

            if !seen.insert(entry.game.to_lowercase()) {
                return Err(tradedesk_core::ValidationError::Duplicate {
                    field: "game".to_string(),
                    value: entry.game.clone(),
                }
                .into());
            }

            entry.rules()?;
        }

        self.find(&self.default_game)
            .map(|_| ())
            .ok_or_else(|| CoreError::UnknownGame(self.default_game.clone()).into())
    }

    fn find(&self, game: &str) -> Option<&CurrencyRulesConfig> {
        let game = game.trim();
        self.currencies
            .iter()
            .find(|entry| entry.game.eq_ignore_ascii_case(game))
    }

    /// Rule set for `game`, or for the default game when `None`.
    pub fn rules_for(&self, game: Option<&str>) -> ConsoleResult<(&CurrencyRulesConfig, DenominationRules)> {
        let game = game.unwrap_or(self.default_game.as_str());
        let entry = self
            .find(game)
            .ok_or_else(|| CoreError::UnknownGame(game.to_string()))?;
        Ok((entry, entry.rules()?))
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("gg", "tradedesk", "tradedesk")
            .map(|dirs| dirs.config_dir().join("tradedesk.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_game = "tibia"

[[currencies]]
game = "tibia"
name = "Tibia Coins"
denomination = 25
min_amount = 25
max_amount = 100000

[[currencies]]
game = "rs3"
name = "Bonds"
denomination = 1
min_amount = 1
max_amount = 500
"#;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert!(config.validate().is_ok());
        let (entry, rules) = config.rules_for(None).unwrap();
        assert_eq!(entry.name, "Tibia Coins");
        assert_eq!(rules, DenominationRules::tibia_coins());
    }

    #[test]
    fn test_parse_sample() {
        let config = ConsoleConfig::from_toml_str(SAMPLE).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.currencies.len(), 2);

        let (_, rules) = config.rules_for(Some("RS3")).unwrap();
        assert_eq!(rules.denomination(), 1);
        assert_eq!(rules.max_amount(), 500.0);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ConsoleConfig::from_toml_str("").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn test_unknown_game() {
        let config = ConsoleConfig::default();
        assert!(matches!(
            config.rules_for(Some("runescape")),
            Err(ConsoleError::Core(CoreError::UnknownGame(_)))
        ));

        let mut config = ConsoleConfig::default();
        config.default_game = "runescape".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_bad_rules() {
        let mut config = ConsoleConfig::default();
        config.currencies[0].denomination = 0;
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.currencies[0].min_amount = 500_000.0;
        assert!(config.validate().is_err());

        let mut config = ConsoleConfig::default();
        config.currencies.clear();
        assert!(matches!(config.validate(), Err(ConsoleError::InvalidConfig(_))));
    }

    #[test]
    fn test_duplicate_games_rejected() {
        let mut config = ConsoleConfig::default();
        let mut dup = config.currencies[0].clone();
        dup.game = "TIBIA".to_string();
        config.currencies.push(dup);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_override() {
        let mut config = ConsoleConfig::from_toml_str(SAMPLE).unwrap();
        config.apply_overrides(|key| match key {
            "TRADEDESK_DEFAULT_GAME" => Some(" rs3 ".to_string()),
            _ => None,
        });
        assert_eq!(config.default_game, "rs3");
        assert_eq!(config.rules_for(None).unwrap().0.name, "Bonds");

        config.apply_overrides(|_| Some(String::new()));
        assert_eq!(config.default_game, "rs3");
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ConsoleConfig::from_toml_str("currencies = 5"),
            Err(ConsoleError::Toml(_))
        ));
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&ConsoleConfig::default()).unwrap();
        assert!(toml_str.contains("[[currencies]]"));
        assert!(toml_str.contains("default_game"));
    }
}
