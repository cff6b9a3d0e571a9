use serde::{Deserialize, Serialize};

use crate::config::{ConfigManager, FileContentConfigProvider, Validate};
use crate::engine::{BotType, Mark};

const CONFIG_FILE_NAME: &str = "tictactoe_engine_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, TicTacToeConfig> {
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    pub bot_type: BotType,
    pub bot_mark: Mark,
    /// Fixed RNG seed for the random bot; `None` seeds from entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            bot_type: BotType::Minimax,
            bot_mark: Mark::O,
            seed: None,
        }
    }
}

impl Validate for TicTacToeConfig {
    fn validate(&self) -> Result<(), String> {
        if self.bot_mark == Mark::Empty {
            return Err("Bot mark must be X or O".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = TicTacToeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bot_type, BotType::Minimax);
        assert_eq!(config.bot_mark, Mark::O);
    }

    #[test]
    fn test_empty_bot_mark_is_rejected() {
        let config = TicTacToeConfig {
            bot_mark: Mark::Empty,
            ..TicTacToeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = TicTacToeConfig {
            bot_type: BotType::Random,
            bot_mark: Mark::X,
            seed: Some(42),
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: TicTacToeConfig = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_seed_defaults_to_none() {
        let parsed: TicTacToeConfig =
            serde_yaml_ng::from_str("bot_type: Minimax\nbot_mark: O\n").unwrap();
        assert_eq!(parsed.seed, None);
    }
}
