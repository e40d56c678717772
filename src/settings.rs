//! View settings and the on-disk config envelope
//!
//! Loaded from a JSON file by the native driver; every field falls back to
//! its default so partial files are fine.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::raycast::{RayConfig, RayMethod};
use crate::tuning::Tuning;

/// How the frame is projected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Canvas width in pixels
    pub screen_width: u32,
    /// Canvas height in pixels
    pub screen_height: u32,
    /// Total angular spread of the ray fan (radians)
    pub fov: f32,
    /// Rays per frame; each owns a `screen_width / num_rays` wide column
    pub num_rays: u32,
    /// Ray march limit (world units)
    pub max_depth: u32,
    /// Perspective falloff `k` in `h / (d * k + 1)`
    pub wall_falloff: f32,
    /// Wall search strategy
    pub ray_method: RayMethod,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            fov: FOV,
            num_rays: NUM_RAYS,
            max_depth: MAX_DEPTH,
            wall_falloff: WALL_FALLOFF,
            ray_method: RayMethod::default(),
        }
    }
}

impl Settings {
    /// Ray caster parameters derived from these settings
    pub fn ray_config(&self) -> RayConfig {
        RayConfig {
            fov: self.fov,
            num_rays: self.num_rays,
            max_depth: self.max_depth,
            method: self.ray_method,
        }
    }

    /// Pixel width of one wall column (integer division, like the blitter)
    pub fn column_width(&self) -> u32 {
        self.screen_width / self.num_rays.max(1)
    }

    /// Reject values the renderer cannot work with
    pub fn validate(&self) -> Result<(), String> {
        if self.num_rays == 0 {
            return Err("num_rays must be at least 1".to_string());
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err("screen dimensions must be non-zero".to_string());
        }
        if self.max_depth < 2 {
            return Err(format!("max_depth must be at least 2, got {}", self.max_depth));
        }
        if !self.fov.is_finite() || self.fov <= 0.0 {
            return Err(format!("fov must be positive, got {}", self.fov));
        }
        if !self.wall_falloff.is_finite() || self.wall_falloff < 0.0 {
            return Err(format!(
                "wall_falloff must be finite and not negative, got {}",
                self.wall_falloff
            ));
        }
        Ok(())
    }
}

/// Complete config file: level selection, view settings and gameplay tuning
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in level index
    pub level: usize,
    pub settings: Settings,
    pub tuning: Tuning,
}

impl Config {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file if one is given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                log::info!("Using default config");
                Ok(Self::default())
            }
        }
    }

    /// Serialize to pretty JSON (for writing a starter config)
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate().map_err(ConfigError::Invalid)?;
        self.tuning.validate().map_err(ConfigError::Invalid)?;
        Ok(())
    }
}
