//! Configuration for island generation.
//!
//! Loaded from `island_config.json` with support for an environment variable
//! override.

use std::{
    collections::HashSet,
    env, fs, io,
    path::{Path, PathBuf},
    sync::Arc,
};

use bevy::prelude::Resource;
use serde::Deserialize;
use thiserror::Error;

use crate::GenerationError;

pub const BUILTIN_ISLAND_CONFIG: &str = include_str!("data/island_config.json");

/// Root configuration for a single generation pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IslandConfig {
    /// Grid dimension; the map is `size × size` cells.
    pub size: u32,
    /// Terrain noise frequency.
    pub scale: f32,
    /// Cells whose `noise - falloff` falls below this become water.
    pub water_level: f32,
    /// Fixed seed for reproducible islands. `None` draws from entropy.
    pub seed: Option<u64>,
    pub palette: PaletteConfig,
    pub props: Vec<PropLayerConfig>,
}

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            size: 100,
            scale: 0.1,
            water_level: 0.4,
            seed: None,
            palette: PaletteConfig::default(),
            props: default_prop_layers(),
        }
    }
}

fn default_prop_layers() -> Vec<PropLayerConfig> {
    vec![
        PropLayerConfig {
            name: "trees".to_string(),
            scale: 0.05,
            density: 0.5,
            variants: vec!["pine".to_string(), "oak".to_string(), "birch".to_string()],
        },
        PropLayerConfig {
            name: "plants".to_string(),
            scale: 0.05,
            density: 0.5,
            variants: vec!["fern".to_string(), "bush".to_string()],
        },
    ]
}

impl IslandConfig {
    pub fn builtin() -> Arc<Self> {
        Arc::new(
            serde_json::from_str(BUILTIN_ISLAND_CONFIG)
                .expect("builtin island config should parse"),
        )
    }

    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_file(path: &Path) -> Result<Self, IslandConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| IslandConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = IslandConfig::from_json_str(&contents)?;
        Ok(config)
    }

    pub fn prop_layer(&self, name: &str) -> Option<&PropLayerConfig> {
        self.props.iter().find(|layer| layer.name == name)
    }

    /// Reject degenerate configurations before any generation work starts.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.size == 0 {
            return Err(GenerationError::EmptyGrid);
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GenerationError::InvalidScale {
                layer: "terrain".to_string(),
                scale: self.scale,
            });
        }
        if !self.water_level.is_finite() {
            return Err(GenerationError::InvalidWaterLevel(self.water_level));
        }

        let mut seen = HashSet::new();
        for layer in &self.props {
            if !seen.insert(layer.name.as_str()) {
                return Err(GenerationError::DuplicateLayer(layer.name.clone()));
            }
            if !layer.scale.is_finite() || layer.scale <= 0.0 {
                return Err(GenerationError::InvalidScale {
                    layer: layer.name.clone(),
                    scale: layer.scale,
                });
            }
            if !layer.density.is_finite() || layer.density < 0.0 {
                return Err(GenerationError::InvalidDensity {
                    layer: layer.name.clone(),
                    density: layer.density,
                });
            }
            if layer.variants.is_empty() {
                return Err(GenerationError::NoVariants(layer.name.clone()));
            }
        }
        Ok(())
    }
}

/// RGBA8 colours painted into the terrain texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub water: [u8; 4],
    pub land: [u8; 4],
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            water: [0, 0, 255, 255],
            land: [242, 202, 107, 255],
        }
    }
}

/// One scatter category, e.g. trees or plants.
#[derive(Debug, Clone, Deserialize)]
pub struct PropLayerConfig {
    pub name: String,
    /// Frequency of the layer's own noise field.
    pub scale: f32,
    /// Upper bound of the per-cell random threshold.
    pub density: f32,
    /// Prefab variant handles; placements index into this list.
    pub variants: Vec<String>,
}

#[derive(Debug, Error)]
pub enum IslandConfigError {
    #[error("failed to parse island config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read island config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle for sharing the active configuration with the Bevy app.
#[derive(Resource, Debug, Clone)]
pub struct IslandConfigHandle(pub Arc<IslandConfig>);

impl IslandConfigHandle {
    pub fn new(config: Arc<IslandConfig>) -> Self {
        Self(config)
    }

    pub fn get(&self) -> Arc<IslandConfig> {
        Arc::clone(&self.0)
    }
}

/// Load the island configuration from `ISLAND_CONFIG_PATH`, falling back to
/// the builtin file.
pub fn load_island_config_from_env() -> Arc<IslandConfig> {
    let Some(path) = env::var("ISLAND_CONFIG_PATH").ok().map(PathBuf::from) else {
        tracing::info!(target: "island::config", "island_config.loaded=builtin");
        return IslandConfig::builtin();
    };

    match IslandConfig::from_file(&path) {
        Ok(config) => {
            tracing::info!(
                target: "island::config",
                path = %path.display(),
                "island_config.loaded=file"
            );
            Arc::new(config)
        }
        Err(err) => {
            tracing::warn!(
                target: "island::config",
                path = %path.display(),
                error = %err,
                "island_config.load_failed"
            );
            IslandConfig::builtin()
        }
    }
}
