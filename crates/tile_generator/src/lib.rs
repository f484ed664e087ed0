//! Generates the solid colour test tiles used by Tilr.
//!
//! Every colour of the [`tile_palette`] is rendered to a square PNG named
//! after its palette index, e.g. `images/tiles/tile-2.png` is the red tile.
//! Running the generator again overwrites the previous tiles.

mod error;
mod settings;
pub mod verify;

use std::path::PathBuf;

pub use error::{GenerateError, VerifyError};
use image::{Rgb, RgbImage};
use log::{debug, info};
pub use settings::TileSettings;
use tile_palette::{palette, TileColor, PALETTE_LEN};

/// Writes one tile per palette colour into [`TileSettings::output_dir`].
#[derive(Debug, Clone, Default)]
pub struct TileGenerator {
    settings: TileSettings,
}

impl TileGenerator {
    pub const fn new(settings: TileSettings) -> Self {
        Self { settings }
    }

    pub const fn settings(&self) -> &TileSettings {
        &self.settings
    }

    /// Create the output directory and any missing parents.
    /// An already existing directory is not an error.
    ///
    /// # Errors
    ///
    /// Will return [`GenerateError::Filesystem`] if the directory cannot be
    /// created, e.g. because a component of the path is a regular file.
    pub fn ensure_output_dir(&self) -> Result<(), GenerateError> {
        let dir = self.settings.output_dir();
        debug!("ensuring output directory {} exists", dir.display());
        std::fs::create_dir_all(dir).map_err(|source| GenerateError::Filesystem {
            path: dir.to_path_buf(),
            source,
        })
    }

    /// Render `color` as a uniform image, without touching the disk.
    pub fn render(&self, color: TileColor) -> RgbImage {
        RgbImage::from_pixel(
            self.settings.width.get(),
            self.settings.height.get(),
            Rgb(color.rgb().into()),
        )
    }

    /// Path of the tile at palette position `index`.
    pub fn tile_path(&self, index: usize) -> PathBuf {
        self.settings
            .output_dir()
            .join(self.settings.file_name(index))
    }

    /// Render `color` and write it to its tile path, replacing any file
    /// already there.
    ///
    /// # Errors
    ///
    /// Will return [`GenerateError::Io`] if the image cannot be encoded or
    /// written.
    pub fn write_tile(&self, color: TileColor) -> Result<PathBuf, GenerateError> {
        let path = self.tile_path(color.index());
        self.render(color)
            .save(&path)
            .map_err(|source| GenerateError::Io {
                path: path.clone(),
                source,
            })?;
        info!("wrote {} tile to {}", color, path.display());
        Ok(path)
    }

    /// Write every tile of the palette, in palette order.
    ///
    /// Stops at the first failure, so tiles after the failing one are not
    /// written. Returns the written paths in palette order.
    ///
    /// # Errors
    ///
    /// Will return `Err` if:
    /// 1. The output directory cannot be created, before any tile is written
    /// 2. A tile cannot be encoded or written
    pub fn run(&self) -> Result<Vec<PathBuf>, GenerateError> {
        self.ensure_output_dir()?;

        let written = palette()
            .map(|(_, color)| self.write_tile(color))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "wrote {}/{} tiles to {}",
            written.len(),
            PALETTE_LEN,
            self.settings.output_dir().display()
        );

        Ok(written)
    }

    /// Check the tiles on disk against the palette.
    ///
    /// # Errors
    ///
    /// Will return the first [`VerifyError`] found.
    pub fn verify(&self) -> Result<(), VerifyError> {
        verify::verify_tiles(&self.settings)
    }
}
