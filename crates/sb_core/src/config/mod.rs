//! # Game Configuration
//!
//! Every tuning constant of the fight lives here so scene scale, timings and
//! gesture thresholds can be changed without touching the engine.
//!
//! ## Presets
//! - `classic` - 800x600, ground 400, 60 fps, single attack channel
//! - `arena` - 800x600, ground 450, 30 fps, dual attack channels (default)
//! - `wide` - 1200x800, ground 550, 30 fps, dual attack channels
//!
//! ## Usage
//! ```rust
//! use sb_core::config::GameConfig;
//!
//! let config = GameConfig::default();
//! let wide = GameConfig::preset("wide").unwrap();
//! assert_eq!(wide.scene.ground_y, 550.0);
//! ```

mod classifier_config;
mod fighter_config;
mod scene_config;

pub use classifier_config::{BoundaryAttack, ChestZone, ClassifierConfig, DefenseMode, MovementMode};
pub use fighter_config::{ChannelLayout, CombatConfig, FighterConfig, HEALTH_CAP};
pub use scene_config::SceneConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Names accepted by [`GameConfig::preset`]
pub const PRESET_NAMES: [&str; 3] = ["classic", "arena", "wide"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GameConfig {
    #[serde(default)]
    pub scene: SceneConfig,
    #[serde(default)]
    pub fighter: FighterConfig,
    #[serde(default)]
    pub combat: CombatConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl GameConfig {
    /// Small window, single punching arm
    pub fn classic() -> Self {
        let mut cfg = Self::default();
        cfg.scene.ground_y = 400.0;
        cfg.scene.floor_line_y = 450.0;
        cfg.scene.fps = 60;
        cfg.fighter.channels = ChannelLayout::Single;
        cfg
    }

    pub fn arena() -> Self {
        Self::default()
    }

    /// Large canvas for two-camera play
    pub fn wide() -> Self {
        let mut cfg = Self::default();
        cfg.scene.width = 1200.0;
        cfg.scene.height = 800.0;
        cfg.scene.ground_y = 550.0;
        cfg.scene.floor_line_y = 550.0;
        cfg.scene.camera_width = 1280.0;
        cfg
    }

    pub fn preset(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::classic()),
            "arena" | "default" => Ok(Self::arena()),
            "wide" => Ok(Self::wide()),
            other => Err(CoreError::UnknownPreset(other.to_string())),
        }
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a `.yaml`/`.yml`/`.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let cfg = match ext.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&text)?,
            "json" => Self::from_json_str(&text)?,
            other => return Err(CoreError::UnsupportedFormat(other.to_string())),
        };
        log::info!("Loaded game config from {:?}", path);
        Ok(cfg)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<()> {
        let scene = &self.scene;
        if !(scene.width > 0.0 && scene.height > 0.0) {
            return Err(CoreError::invalid("scene", "width and height must be positive"));
        }
        if !(scene.ground_y > 0.0 && scene.ground_y <= scene.height) {
            return Err(CoreError::invalid(
                "scene.ground_y",
                format!("{} is outside the screen (height {})", scene.ground_y, scene.height),
            ));
        }
        if scene.margin < 0.0 || scene.margin * 2.0 >= scene.width {
            return Err(CoreError::invalid("scene.margin", "must leave a playable strip"));
        }
        if scene.fps == 0 {
            return Err(CoreError::invalid("scene.fps", "must be positive"));
        }

        let fighter = &self.fighter;
        if fighter.attack_duration < 2 {
            return Err(CoreError::invalid("fighter.attack_duration", "must be at least 2"));
        }
        if fighter.defense_duration < 2 {
            return Err(CoreError::invalid("fighter.defense_duration", "must be at least 2"));
        }
        if fighter.max_reach < fighter.rest_arm_length {
            return Err(CoreError::invalid(
                "fighter.max_reach",
                "must not be below rest_arm_length",
            ));
        }
        if fighter.max_health == 0 || fighter.max_health > HEALTH_CAP {
            return Err(CoreError::invalid("fighter.max_health", "must be within 1..=100"));
        }
        if fighter.gravity <= 0.0 {
            return Err(CoreError::invalid("fighter.gravity", "must be positive"));
        }

        let classifier = &self.classifier;
        if classifier.hand_window == 0 || classifier.head_window == 0 {
            return Err(CoreError::invalid("classifier", "window lengths must be positive"));
        }
        if classifier.region_left >= classifier.region_right {
            return Err(CoreError::invalid("classifier.region_left", "must be below region_right"));
        }

        if fighter.attack_duration % 2 == 1 {
            log::warn!(
                "odd attack_duration {} - full extension falls between ticks",
                fighter.attack_duration
            );
        }
        Ok(())
    }
}

// ========== Tests ==========
