//! Reads generated tiles back and checks them against the palette.

use std::path::Path;

use tile_palette::{palette, Rgb, TileColor};

use crate::{TileSettings, VerifyError};

/// Decode the tile at `path` and check that it is an 8-bit RGB image of
/// the configured size, filled entirely with `expected`.
///
/// # Errors
///
/// Will return `Err` if:
/// 1. `path` cannot be read or decoded
/// 2. The image is not `settings.width` x `settings.height` pixels
/// 3. The image is not 8-bit RGB
/// 4. Any pixel differs from `expected`, reporting the first one found
pub fn verify_tile(path: &Path, expected: Rgb, settings: &TileSettings) -> Result<(), VerifyError> {
    let image = image::open(path).map_err(|source| VerifyError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let wanted = (settings.width.get(), settings.height.get());
    let actual = (image.width(), image.height());
    if actual != wanted {
        return Err(VerifyError::Dimensions {
            path: path.to_path_buf(),
            expected: wanted,
            actual,
        });
    }

    let Some(image) = image.as_rgb8() else {
        return Err(VerifyError::PixelFormat {
            path:   path.to_path_buf(),
            actual: image.color(),
        });
    };

    let expected_channels: [u8; 3] = expected.into();
    match image
        .enumerate_pixels()
        .find(|(_, _, pixel)| pixel.0 != expected_channels)
    {
        Some((x, y, pixel)) => Err(VerifyError::Pixel {
            path: path.to_path_buf(),
            x,
            y,
            expected,
            actual: Rgb::from(pixel.0),
        }),
        None => Ok(()),
    }
}

/// Verify the tile for the palette colour at `index`.
///
/// # Errors
///
/// Will return [`VerifyError::UnknownIndex`] if the palette has no colour at
/// `index`, otherwise whatever [`verify_tile`] reports.
pub fn verify_index(settings: &TileSettings, index: usize) -> Result<(), VerifyError> {
    let color = TileColor::from_index(index).ok_or(VerifyError::UnknownIndex(index))?;
    let path = settings.output_dir().join(settings.file_name(index));
    verify_tile(&path, color.rgb(), settings)
}

/// Verify every tile of the palette, in palette order.
///
/// # Errors
///
/// Will return the first [`VerifyError`] found.
pub fn verify_tiles(settings: &TileSettings) -> Result<(), VerifyError> {
    palette().try_for_each(|(index, _)| verify_index(settings, index))
}
