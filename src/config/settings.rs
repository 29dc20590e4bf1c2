use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::WeightConfig;
use crate::config::weights::{StoredWeights, merge_config};

fn default_daily_target() -> i64 {
    15000
}
fn default_hijri_offset() -> i32 {
    0
}
fn default_true() -> bool {
    true
}
fn default_weights() -> WeightConfig {
    merge_config(StoredWeights::default(), &WeightConfig::default())
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days to add/subtract from Hijri date for local moon sighting.
    /// 0 = default (Saudi), -1 = one day behind, +1 = one day ahead
    #[serde(default = "default_hijri_offset")]
    pub hijri_offset: i32,
    #[serde(default = "default_true")]
    pub show_hijri: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            hijri_offset: default_hijri_offset(),
            show_hijri: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Points a day should reach.
    #[serde(default = "default_daily_target")]
    pub daily_target: i64,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default = "default_weights")]
    pub weights: WeightConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            daily_target: default_daily_target(),
            display: DisplayConfig::default(),
            weights: WeightConfig::default(),
        }
    }
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "ibadah").context("Could not determine project directories")
    }

    pub fn default_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load and validate the config at `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {:?}, using built-in defaults", path);
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config = Self::from_toml(&content).with_context(|| format!("Loading {:?}", path))?;
        log::debug!(
            "loaded config from {:?} ({} custom deeds)",
            path,
            config.weights.custom_deeds.len()
        );
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).context("Parsing config.toml")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.daily_target <= 0 {
            anyhow::bail!("daily_target must be positive, got {}", self.daily_target);
        }
        self.weights.validate().context("Invalid weights")?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Serializing config")
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        log::debug!("saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CustomDeed;
    use tempfile::TempDir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let config = AppConfig::load(&dir.path().join("config.toml")).expect("load should succeed");
        assert_eq!(config.daily_target, 15000);
        assert_eq!(config.weights, WeightConfig::default());
    }

    #[test]
    fn save_then_load_keeps_custom_deeds() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.daily_target = 9000;
        config
            .weights
            .add_custom_deed(CustomDeed {
                id: "visit_sick".to_string(),
                label: "Visited the sick".to_string(),
                points: 400.0,
            })
            .unwrap();
        config.save(&path).expect("save should succeed");

        let loaded = AppConfig::load(&path).expect("load should succeed");
        assert_eq!(loaded.daily_target, 9000);
        assert_eq!(loaded.weights, config.weights);
    }

    #[test]
    fn partial_file_is_merged_with_defaults() {
        let config = AppConfig::from_toml(
            r#"
daily_target = 5000

[weights]
burden_deduction_percent = 50
"#,
        )
        .expect("partial config should load");
        assert_eq!(config.daily_target, 5000);
        assert_eq!(config.weights.burden_deduction_percent, 50.0);
        assert_eq!(config.weights.fard_congregation, 2700.0);
        assert!(config.display.show_hijri);
    }

    #[test]
    fn absent_and_empty_weights_sections_agree() {
        let absent = AppConfig::from_toml("daily_target = 5000\n").expect("config should load");
        let empty =
            AppConfig::from_toml("daily_target = 5000\n[weights]\n").expect("config should load");
        assert_eq!(absent.weights, empty.weights);
        assert!(absent.weights.surrounding_deed_weights.is_empty());
        assert_eq!(absent.weights.surrounding_weight("first_row"), 50.0);
    }

    #[test]
    fn invalid_weights_are_rejected() {
        let err = AppConfig::from_toml(
            r#"
[weights]
presence_multipliers = [-0.5, -0.25, 0.1, 0.25, 0.5, 1.0]
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("level 2 must be 0"));
    }
}
