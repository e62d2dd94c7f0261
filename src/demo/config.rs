use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::game::orc::{DEFAULT_ATTACK_POWER, DEFAULT_DEFENSE_POWER};
use crate::game::Orc;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub weapon: String,
    pub attack_power: Option<u32>,
    pub defense_power: Option<u32>,
    pub clones: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            weapon: "Axe".to_string(),
            attack_power: None,
            defense_power: None,
            clones: 2,
        }
    }
}

impl DemoConfig {
    pub fn from_ron_str(source: &str) -> Result<Self> {
        ron::from_str(source).context("invalid demo config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_ron_str(&source)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "loaded demo config");
        Ok(config)
    }

    /// The orc every clone in the demo is copied from.
    pub fn prototype(&self) -> Orc {
        Orc::with_stats(
            self.weapon.as_str(),
            self.attack_power.unwrap_or(DEFAULT_ATTACK_POWER),
            self.defense_power.unwrap_or(DEFAULT_DEFENSE_POWER),
        )
    }
}
