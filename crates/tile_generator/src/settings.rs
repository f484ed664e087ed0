use std::{
    num::NonZeroU32,
    path::{Path, PathBuf},
};

/// Where the tiles are written and how large they are.
///
/// [`TileSettings::default`] is the layout the Tilr tests expect:
/// `images/tiles/tile-{i}.png`, 250 x 250 pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSettings {
    /// Directory the tiles are written to. Relative paths resolve against
    /// the working directory of the process.
    pub output_dir: PathBuf,
    /// Width of a tile in pixels
    pub width:      NonZeroU32,
    /// Height of a tile in pixels
    pub height:     NonZeroU32,
}

impl TileSettings {
    /// Directory used by [`TileSettings::default`].
    pub const DEFAULT_OUTPUT_DIR: &'static str = "images/tiles";
    /// Side length of the square tiles used by [`TileSettings::default`].
    pub const DEFAULT_SIDE: NonZeroU32 = match NonZeroU32::new(250) {
        Some(side) => side,
        None => unreachable!(),
    };

    /// Prefix of every tile filename, followed by the palette index.
    const FILE_STEM: &'static str = "tile-";
    /// Tiles are always PNG, the only encoder enabled for `image`.
    const EXTENSION: &'static str = "png";

    /// Default settings, but writing into `output_dir`.
    pub fn in_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Default::default()
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Filename of the tile at palette position `index`, e.g. `tile-3.png`.
    pub fn file_name(&self, index: usize) -> String {
        format!("{}{index}.{}", Self::FILE_STEM, Self::EXTENSION)
    }
}

impl Default for TileSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(Self::DEFAULT_OUTPUT_DIR),
            width:      Self::DEFAULT_SIDE,
            height:     Self::DEFAULT_SIDE,
        }
    }
}
