use image::RgbaImage;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// Colors of the tile set, in processing order
#[derive(
    Debug, Clone, Copy,
    Serialize, Deserialize, JsonSchema,
    Display, EnumString, EnumIter, VariantNames, IntoStaticStr,
    PartialEq, Eq, Hash
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TileColor {
    Blue,
    Green,
    Orange,
    Pink,
    Purple,
    Red,
    Yellow,
}

impl TileColor {
    /// Every tile color, in processing order
    pub fn all() -> Vec<TileColor> {
        use strum::IntoEnumIterator;
        Self::iter().collect()
    }

    /// Get a list of all color names
    pub fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }
}

/// File naming scheme for source tiles and generated outlines
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct TileNaming {
    /// Prefix of the source tile file, e.g. `tile_`
    pub input_prefix: String,
    /// Prefix of the generated outline file, e.g. `outline_`
    pub output_prefix: String,
    /// File extension without the dot; also selects the encoder
    pub extension: String,
}

impl Default for TileNaming {
    fn default() -> Self {
        Self {
            input_prefix: "tile_".to_string(),
            output_prefix: "outline_".to_string(),
            extension: "png".to_string(),
        }
    }
}

impl TileNaming {
    pub fn input_file_name(&self, color: TileColor) -> String {
        format!("{}{}.{}", self.input_prefix, color, self.extension)
    }

    pub fn output_file_name(&self, color: TileColor) -> String {
        format!("{}{}.{}", self.output_prefix, color, self.extension)
    }
}

/// Pixel counts for a source image and its outline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OutlineStats {
    pub width: u32,
    pub height: u32,
    /// Pixels with non-zero alpha in the source
    pub opaque_pixels: usize,
    /// Pixels kept in the outline
    pub boundary_pixels: usize,
}

impl OutlineStats {
    pub fn measure(source: &RgbaImage, outline: &RgbaImage) -> Self {
        let count_opaque = |image: &RgbaImage| image.pixels().filter(|p| p.0[3] != 0).count();

        Self {
            width: source.width(),
            height: source.height(),
            opaque_pixels: count_opaque(source),
            boundary_pixels: count_opaque(outline),
        }
    }

    /// Opaque pixels that were dropped as interior
    pub fn interior_pixels(&self) -> usize {
        self.opaque_pixels.saturating_sub(self.boundary_pixels)
    }
}
