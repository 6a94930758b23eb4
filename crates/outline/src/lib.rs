//! # Tile Outline Library
//!
//! Generates outline variants of RGBA tile images. An opaque pixel is part of the
//! outline when one of its four axis-aligned neighbours is transparent or lies
//! outside the image; outline pixels keep their exact source colour and everything
//! else becomes fully transparent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use outline::{extract_outline, FsImageStore, ImageStore};
//! use std::path::Path;
//!
//! let store = FsImageStore::new();
//! let tile = store.load(Path::new("assets/tiles/tile_blue.png"))?;
//! let border = extract_outline(&tile);
//! store.save(&border, Path::new("assets/tiles/outline_blue.png"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Whole Tile Set
//!
//! ```rust,no_run
//! use outline::{FourNeighbourExtractor, FsImageStore, TileBatch};
//!
//! let entries = TileBatch::new("assets/tiles").run(&FsImageStore::new(), &FourNeighbourExtractor)?;
//! for entry in entries {
//!     println!("{} -> {:?}", entry.color, entry.output);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod types;
pub mod traits;
pub mod algorithms;
pub mod io;
pub mod batch;

// Re-exports for convenience
pub use error::{OutlineError, Result};
pub use types::{OutlineStats, TileColor, TileNaming};
pub use traits::*;
pub use algorithms::*;
pub use io::FsImageStore;
pub use batch::{BatchEntry, TileBatch, process_file};
