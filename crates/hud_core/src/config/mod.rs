//! Configuration system

use std::path::{Path, PathBuf};

pub use serde::{Serialize, Deserialize};

use crate::resources::FontRole;
use crate::{HudError, HudResult};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| HudError::new(format!("failed to read config {}: {e}", path.display())))?;

        // Try different formats
        match extension(path) {
            Some("toml") => toml::from_str(&contents)
                .map_err(|e| HudError::new(format!("failed to parse {}: {e}", path.display()))),
            Some("ron") => ron::from_str(&contents)
                .map_err(|e| HudError::new(format!("failed to parse {}: {e}", path.display()))),
            _ => Err(HudError::new(format!("unsupported config format: {}", path.display()))),
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: impl AsRef<Path>) -> HudResult<()> {
        let path = path.as_ref();
        let contents = match extension(path) {
            Some("toml") => toml::to_string_pretty(self)
                .map_err(|e| HudError::new(format!("failed to serialize config: {e}")))?,
            Some("ron") => ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| HudError::new(format!("failed to serialize config: {e}")))?,
            _ => return Err(HudError::new(format!("unsupported config format: {}", path.display()))),
        };

        std::fs::write(path, contents)
            .map_err(|e| HudError::new(format!("failed to write config {}: {e}", path.display())))
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}

/// Top-level HUD configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudConfig {
    /// Multiplier applied to every GUI position and font size
    pub gui_scale: f32,
    /// Asset locations
    pub resources: ResourceConfig,
}

impl Default for HudConfig {
    fn default() -> Self {
        Self {
            gui_scale: 1.0,
            resources: ResourceConfig::default(),
        }
    }
}

impl HudConfig {
    /// Check values that serde cannot constrain
    pub fn validate(&self) -> HudResult<()> {
        if !(self.gui_scale.is_finite() && self.gui_scale > 0.0) {
            return Err(HudError::new(format!("gui_scale must be positive, got {}", self.gui_scale)));
        }
        Ok(())
    }

    /// Load and validate in one step
    pub fn load_validated(path: impl AsRef<Path>) -> HudResult<Self> {
        let config = Self::load_from_file(path)?;
        config.validate()?;
        Ok(config)
    }
}

impl Config for HudConfig {}

/// Locations of the assets the resource manager loads up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Textures that must be present before any page is built
    pub core_textures: Vec<PathBuf>,
    /// Texture lent out in place of ones that fail to load
    pub missing_texture: Option<PathBuf>,
    /// One font file per role
    pub fonts: FontPaths,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            core_textures: vec![PathBuf::from("res/hud/pipbuck.png")],
            missing_texture: Some(PathBuf::from("res/textures/missing.png")),
            fonts: FontPaths::default(),
        }
    }
}

/// Font file per [`FontRole`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPaths {
    /// Body text
    pub normal: PathBuf,
    /// Headings
    pub medium: PathBuf,
    /// Fixed-width text
    pub fixed: PathBuf,
}

impl Default for FontPaths {
    fn default() -> Self {
        Self {
            normal: PathBuf::from("res/fonts/OpenSans-Regular.ttf"),
            medium: PathBuf::from("res/fonts/OpenSans-Medium.ttf"),
            fixed: PathBuf::from("res/fonts/Inconsolata-Regular.ttf"),
        }
    }
}

impl FontPaths {
    /// File for the given role
    pub fn path(&self, role: FontRole) -> &Path {
        match role {
            FontRole::Normal => &self.normal,
            FontRole::Medium => &self.medium,
            FontRole::Fixed => &self.fixed,
        }
    }
}
