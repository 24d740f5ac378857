//! derma-io - Image load/save collaborator
//!
//! Thin wrapper over the `image` codec crate. The segmentation core
//! treats decode and encode as opaque: it only requires per-pixel,
//! per-channel access and known dimensions, which [`derma_core::Image`]
//! provides. File formats are chosen by path extension.

pub mod error;

pub use error::{IoError, IoResult};

use derma_core::{BinaryMask, Image};
use image::DynamicImage;
use std::path::Path;

/// Read an image from a file path.
///
/// RGBA sources keep their 4 channels; everything else is converted to
/// 3-channel RGB.
///
/// # Errors
///
/// Returns [`IoError::Decode`] if the file cannot be opened or decoded.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image<u8>> {
    let decoded = image::open(path).map_err(IoError::Decode)?;

    let img = match decoded {
        DynamicImage::ImageRgba8(buf) => {
            let (w, h) = buf.dimensions();
            Image::from_raw(w, h, 4, buf.into_raw())?
        }
        other => {
            let buf = other.to_rgb8();
            let (w, h) = buf.dimensions();
            Image::from_raw(w, h, 3, buf.into_raw())?
        }
    };

    Ok(img)
}

/// Write a 1-, 3-, or 4-channel image to a file path.
///
/// The format is selected from the path extension.
///
/// # Errors
///
/// Returns [`IoError::Encode`] if encoding or writing fails.
pub fn write_image<P: AsRef<Path>>(img: &Image<u8>, path: P) -> IoResult<()> {
    let (w, h) = img.dimensions();
    let data = img.data().to_vec();

    let result = match img.channels() {
        1 => image::GrayImage::from_raw(w, h, data)
            .ok_or(IoError::BufferGeometry)?
            .save(path),
        3 => image::RgbImage::from_raw(w, h, data)
            .ok_or(IoError::BufferGeometry)?
            .save(path),
        4 => image::RgbaImage::from_raw(w, h, data)
            .ok_or(IoError::BufferGeometry)?
            .save(path),
        n => return Err(derma_core::Error::UnsupportedChannels(n).into()),
    };

    result.map_err(IoError::Encode)
}

/// Write a binary mask as an 8-bit grayscale file (255 foreground,
/// 0 background).
///
/// # Errors
///
/// Returns [`IoError::Encode`] if encoding or writing fails.
pub fn write_mask<P: AsRef<Path>>(mask: &BinaryMask, path: P) -> IoResult<()> {
    let (w, h) = mask.dimensions();
    let data: Vec<u8> = mask.data().iter().map(|&v| if v { 255 } else { 0 }).collect();
    let gray = Image::from_raw(w, h, 1, data)?;
    write_image(&gray, path)
}
