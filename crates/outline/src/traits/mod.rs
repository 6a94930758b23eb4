use std::path::Path;

use image::RgbaImage;
use crate::error::Result;

/// Trait for outline extraction algorithms
pub trait OutlineExtractor: Send + Sync {
    /// Build an image of the same size that keeps only the boundary pixels of `source`
    fn extract(&self, source: &RgbaImage) -> RgbaImage;
}

/// Trait for loading and persisting images by path
pub trait ImageStore: Send + Sync {
    /// Decode the image at `path` into RGBA8
    fn load(&self, path: &Path) -> Result<RgbaImage>;

    /// Encode `image` to `path`
    fn save(&self, image: &RgbaImage, path: &Path) -> Result<()>;
}
