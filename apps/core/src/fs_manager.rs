use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::config::LabConfig;

/// Resolves the on-disk layout under the configured data directory.
#[derive(Debug, Clone)]
pub struct LabPaths {
    data_dir: PathBuf,
}

impl LabPaths {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &LabConfig) -> Self {
        Self::new(config.data_dir.clone())
    }

    /// Root data directory (`<data_dir>`).
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Key-value store directory (`<data_dir>/store`).
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    /// Creates the data and store directories if they do not exist.
    pub fn init(&self) -> Result<(), std::io::Error> {
        let store_path = self.store_dir();

        if !self.data_dir.exists() {
            info!("Creating data directory: {:?}", self.data_dir);
            fs::create_dir_all(&self.data_dir)?;
        }

        if !store_path.exists() {
            info!("Creating store directory: {:?}", store_path);
            fs::create_dir_all(&store_path)?;
        }

        Ok(())
    }
}
