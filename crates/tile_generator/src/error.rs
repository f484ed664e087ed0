use std::path::PathBuf;

use tile_palette::Rgb;

/// Errors that abort a tile generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to create output directory {}", path.display())]
    Filesystem {
        path:   PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write tile {}", path.display())]
    Io {
        path:   PathBuf,
        source: image::ImageError,
    },
}

/// Reasons a tile on disk does not match the palette colour it should have.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("failed to decode tile {}", path.display())]
    Decode {
        path:   PathBuf,
        source: image::ImageError,
    },
    #[error("tile {} is {actual:?} pixels, expected {expected:?}", path.display())]
    Dimensions {
        path:     PathBuf,
        expected: (u32, u32),
        actual:   (u32, u32),
    },
    #[error("tile {} has pixel format {actual:?}, expected 8-bit RGB", path.display())]
    PixelFormat {
        path:   PathBuf,
        actual: image::ColorType,
    },
    #[error("tile {} has colour {actual} at ({x}, {y}), expected {expected}", path.display())]
    Pixel {
        path:     PathBuf,
        x:        u32,
        y:        u32,
        expected: Rgb,
        actual:   Rgb,
    },
    #[error("no palette colour at index {0}")]
    UnknownIndex(usize),
}
