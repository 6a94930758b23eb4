use outline::{TileBatch, TileColor, TileNaming};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;


pub const DEFAULT_ASSET_DIR: &str = "assets/tiles";


#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),
    #[error(transparent)]
    TomlDeError(#[from] toml::de::Error),
    #[error(transparent)]
    TomlSerError(#[from] toml::ser::Error),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("Unsupported file format. Please use .toml or .json files")]
    UnsupportedFileFormat,
}


/// Where the tiles live and which outlines to generate
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct AssetConfig {
    /// Directory holding the source tiles
    pub asset_dir: PathBuf,
    /// Directory for generated outlines; defaults to `asset_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    /// Colors to process, in order
    pub colors: Vec<TileColor>,
    pub naming: TileNaming,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from(DEFAULT_ASSET_DIR),
            output_dir: None,
            colors: TileColor::all(),
            naming: TileNaming::default(),
        }
    }
}

impl AssetConfig {
    /// Load AssetConfig from a TOML file
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load AssetConfig from TOML string
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        Ok(toml::from_str(content)?)
    }

    /// Load AssetConfig from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Load AssetConfig from JSON string
    pub fn from_json(content: &str) -> Result<Self, CliError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Auto-detect file format and load configuration
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CliError> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(CliError::UnsupportedFileFormat),
        }
    }

    /// Convert AssetConfig to TOML string
    pub fn to_toml(&self) -> Result<String, CliError> {
        Ok(toml::to_string_pretty(&self)?)
    }

    /// Convert AssetConfig to JSON string
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    /// JSON schema of the configuration file
    pub fn schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(AssetConfig)
    }

    pub fn into_batch(self) -> TileBatch {
        let output_dir = self.output_dir.unwrap_or_else(|| self.asset_dir.clone());
        TileBatch::new(&self.asset_dir)
            .with_output_dir(output_dir)
            .with_colors(self.colors)
            .with_naming(self.naming)
    }
}
