use std::path::Path;

use image::RgbaImage;
use tracing::debug;
use crate::{
    error::{OutlineError, Result},
    traits::ImageStore,
};

/// Filesystem-backed image store using the `image` codecs
#[derive(Debug, Clone, Default)]
pub struct FsImageStore {
    /// Create missing parent directories before saving
    pub create_dirs: bool,
}

impl FsImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_create_dirs(mut self, create_dirs: bool) -> Self {
        self.create_dirs = create_dirs;
        self
    }
}

impl ImageStore for FsImageStore {
    fn load(&self, path: &Path) -> Result<RgbaImage> {
        let image = image::open(path).map_err(|source| OutlineError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded {:?} ({}x{})", path, image.width(), image.height());

        Ok(image.to_rgba8())
    }

    fn save(&self, image: &RgbaImage, path: &Path) -> Result<()> {
        if self.create_dirs {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
        }

        // Encoder is chosen from the extension
        image.save(path).map_err(|source| OutlineError::Save {
            path: path.to_path_buf(),
            source,
        })
    }
}
