use serde::{Deserialize, Serialize};
use std::sync::Mutex;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigContentProvider {
    fn get_config_content(&self) -> Result<Option<String>, String>;
    fn set_config_content(&self, content: &str) -> Result<(), String>;
}

pub struct FileContentConfigProvider {
    file_path: String,
}

impl FileContentConfigProvider {
    pub fn new(file_path: String) -> Self {
        Self { file_path }
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, String> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!(
                "Failed to read config file {}: {}",
                self.file_path, e
            )),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), String> {
        std::fs::write(&self.file_path, content).map_err(|e| {
            format!("Failed to write config file {}: {}", self.file_path, e)
        })
    }
}

/// Caching YAML config loader. A missing backing file yields the config's
/// `Default`, so first runs work without any setup.
pub struct ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    content_provider: TProvider,
    config: Mutex<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self::new(FileContentConfigProvider::new(file_path.to_string()))
    }
}

impl<TProvider, TConfig> ConfigManager<TProvider, TConfig>
where
    TProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn new(content_provider: TProvider) -> Self {
        Self {
            content_provider,
            config: Mutex::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        let mut current = self.config.lock().unwrap();

        if let Some(config) = current.as_ref() {
            return Ok(config.clone());
        }

        if let Some(content) = self.content_provider.get_config_content()? {
            let config: TConfig = serde_yaml_ng::from_str(&content)
                .map_err(|e| format!("Failed to deserialize config: {}", e))?;

            config
                .validate()
                .map_err(|e| format!("Config validation error: {}", e))?;

            *current = Some(config.clone());
            return Ok(config);
        }

        crate::log!("Config file not found, using defaults");
        Ok(TConfig::default())
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        self.content_provider.set_config_content(&content)?;

        let mut current = self.config.lock().unwrap();
        *current = Some(config.clone());
        Ok(())
    }
}
