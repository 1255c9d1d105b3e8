use crate::core::Gender;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub defaults: DefaultsConfig,
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub min_score: u8,
    pub json: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            // 0 disables the score gate
            min_score: 0,
            json: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub sleep_hours: f64,
    pub stress_level: f64,
    pub activity_minutes: f64,
    pub gender: Gender,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            sleep_hours: 7.0,
            stress_level: 5.0,
            activity_minutes: 30.0,
            gender: Gender::Male,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub sleep_max: f64,
    pub stress_max: f64,
    pub activity_max: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            sleep_max: 12.0,
            stress_max: 10.0,
            activity_max: 120.0,
        }
    }
}

pub fn load_config(cli_config_path: Option<&Path>, cwd: &Path) -> Result<LoadedConfig> {
    if let Some(path) = cli_config_path {
        if !path.exists() {
            bail!(
                "config file not found at {} (passed with --config)",
                path.display()
            );
        }

        return Ok(LoadedConfig {
            config: read_config(path)?,
        });
    }

    let local_path = cwd.join("wellscore.toml");
    if local_path.exists() {
        return Ok(LoadedConfig {
            config: read_config(&local_path)?,
        });
    }

    Ok(LoadedConfig {
        config: Config::default(),
    })
}

pub fn write_default_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!(
            "refusing to overwrite existing config file: {}",
            path.display()
        );
    }

    let content = default_config_toml()?;
    fs::write(path, content).with_context(|| format!("failed writing {}", path.display()))?;
    Ok(())
}

pub fn default_config_toml() -> Result<String> {
    toml::to_string_pretty(&Config::default()).context("failed to serialize default config")
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file {}", path.display()))?;
    let config = toml::from_str::<Config>(&content)
        .with_context(|| format!("failed parsing config file {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_round_trips_through_toml() {
        let rendered = default_config_toml().unwrap();
        let parsed = toml::from_str::<Config>(&rendered).unwrap();

        assert_eq!(parsed.general.min_score, 0);
        assert_eq!(parsed.defaults.sleep_hours, 7.0);
        assert_eq!(parsed.defaults.gender, Gender::Male);
        assert_eq!(parsed.limits.activity_max, 120.0);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let parsed = toml::from_str::<Config>("[general]\nmin_score = 40\n").unwrap();
        assert_eq!(parsed.general.min_score, 40);
        assert_eq!(parsed.limits.sleep_max, 12.0);
        assert_eq!(parsed.defaults.activity_minutes, 30.0);
    }
}
