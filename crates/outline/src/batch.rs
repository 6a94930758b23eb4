use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};
use crate::{
    error::Result,
    traits::{ImageStore, OutlineExtractor},
    types::{OutlineStats, TileColor, TileNaming},
};

/// Result of outlining one tile color
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BatchEntry {
    pub color: TileColor,
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: OutlineStats,
}

/// Outline generation over a set of tile colors in one asset directory
#[derive(Debug, Clone, PartialEq)]
pub struct TileBatch {
    input_dir: PathBuf,
    output_dir: PathBuf,
    colors: Vec<TileColor>,
    naming: TileNaming,
}

impl TileBatch {
    /// All colors, default naming, outlines written next to the sources
    pub fn new<P: AsRef<Path>>(asset_dir: P) -> Self {
        let dir = asset_dir.as_ref().to_path_buf();
        Self {
            input_dir: dir.clone(),
            output_dir: dir,
            colors: TileColor::all(),
            naming: TileNaming::default(),
        }
    }

    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn with_colors(mut self, colors: Vec<TileColor>) -> Self {
        self.colors = colors;
        self
    }

    pub fn with_naming(mut self, naming: TileNaming) -> Self {
        self.naming = naming;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn colors(&self) -> &[TileColor] {
        &self.colors
    }

    pub fn input_path(&self, color: TileColor) -> PathBuf {
        self.input_dir.join(self.naming.input_file_name(color))
    }

    pub fn output_path(&self, color: TileColor) -> PathBuf {
        self.output_dir.join(self.naming.output_file_name(color))
    }

    /// Outline every color in order. The first load or save failure aborts the run.
    pub fn run<S, E>(&self, store: &S, extractor: &E) -> Result<Vec<BatchEntry>>
    where
        S: ImageStore + ?Sized,
        E: OutlineExtractor + ?Sized,
    {
        let mut entries = Vec::with_capacity(self.colors.len());

        for &color in &self.colors {
            let input = self.input_path(color);
            let output = self.output_path(color);

            let stats = process_file(store, extractor, &input, &output)?;
            info!("Saved outline for {} to {:?}", color, output);

            entries.push(BatchEntry {
                color,
                input,
                output,
                stats,
            });
        }

        Ok(entries)
    }

    /// Get information about the batch configuration
    pub fn info(&self) -> String {
        format!(
            "Batch: {} colors, {:?} -> {:?}",
            self.colors.len(),
            self.input_dir,
            self.output_dir
        )
    }
}

/// Load `input`, extract its outline and save it to `output`
pub fn process_file<S, E>(store: &S, extractor: &E, input: &Path, output: &Path) -> Result<OutlineStats>
where
    S: ImageStore + ?Sized,
    E: OutlineExtractor + ?Sized,
{
    let source = store.load(input)?;
    let outline = extractor.extract(&source);
    let stats = OutlineStats::measure(&source, &outline);
    debug!(
        "{:?}: {}x{}, kept {} of {} opaque pixels",
        input, stats.width, stats.height, stats.boundary_pixels, stats.opaque_pixels
    );

    store.save(&outline, output)?;
    Ok(stats)
}
