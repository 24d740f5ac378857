//! Color space conversion
//!
//! Per-pixel conversions from RGB to the three color spaces used for
//! skin classification, plus image-level transforms producing 3-channel
//! f64 images.
//!
//! Channel conventions (the matching classifiers in [`crate::threshold`]
//! expect exactly these ranges):
//!
//! - HSI: h in degrees [0, 360], s as chroma magnitude in [0, ~0.66],
//!   i as mean intensity in [0, 1]
//! - HSV: h in signed degrees (-180, 180] centered on red, s and v
//!   in [0, 1]
//! - YCbCr: ITU-R BT.601 studio swing, all channels in byte range

use crate::error::ColorResult;
use derma_core::{ChannelImage, Image};

/// HSI color representation.
///
/// - `h`: hue angle in degrees, [0.0, 360.0]; defined as 0.0 for
///   achromatic pixels
/// - `s`: chroma magnitude
/// - `i`: mean intensity in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsi {
    pub h: f64,
    pub s: f64,
    pub i: f64,
}

/// HSV color representation.
///
/// - `h`: hue in signed degrees (-180.0, 180.0], 0.0 at pure red
/// - `s`: saturation in [0.0, 1.0]
/// - `v`: value in [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

/// YCbCr color representation (BT.601 studio swing, byte range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YCbCr {
    pub y: f64,
    pub cb: f64,
    pub cr: f64,
}

/// Convert an RGB pixel to HSI.
///
/// The chroma pair is derived from (r-b)/2 and (2g-r-b)/4 on normalized
/// channels; hue is the angle of that pair mapped into [0, 360]. An
/// achromatic pixel (both chroma terms zero) gets hue 0.0 rather than
/// NaN.
pub fn rgb_to_hsi(r: u8, g: u8, b: u8) -> Hsi {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let i = (r + g + b) / 3.0;
    let i2 = (r - b) / 2.0;
    let i3 = (2.0 * g - r - b) / 4.0;

    let s = (i2 * i2 + i3 * i3).sqrt();

    let h = if s == 0.0 {
        0.0
    } else {
        // atan of +/-inf is well defined, so i2 == 0 alone is fine
        (i3 / i2).atan() * 360.0 / std::f64::consts::PI + 180.0
    };

    Hsi { h, s, i }
}

/// Convert an RGB pixel to HSV.
///
/// Hue is wrapped into (-180, 180] so the red-centered skin locus is
/// continuous; an achromatic pixel gets hue 0.0.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let rf = f64::from(r) / 255.0;
    let gf = f64::from(g) / 255.0;
    let bf = f64::from(b) / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let v = max;
    let s = if max == 0.0 { 0.0 } else { delta / max };

    let mut h = if delta == 0.0 {
        0.0
    } else if max == rf {
        60.0 * ((gf - bf) / delta)
    } else if max == gf {
        60.0 * ((bf - rf) / delta) + 120.0
    } else {
        60.0 * ((rf - gf) / delta) + 240.0
    };

    if h > 180.0 {
        h -= 360.0;
    } else if h <= -180.0 {
        h += 360.0;
    }

    Hsv { h, s, v }
}

/// Convert an RGB pixel to YCbCr (BT.601 studio swing).
pub fn rgb_to_ycbcr(r: u8, g: u8, b: u8) -> YCbCr {
    let r = f64::from(r);
    let g = f64::from(g);
    let b = f64::from(b);

    let y = 16.0 + (65.738 * r + 129.057 * g + 25.064 * b) / 256.0;
    let cb = 128.0 + (-37.945 * r - 74.494 * g + 112.439 * b) / 256.0;
    let cr = 128.0 + (112.439 * r - 94.154 * g - 18.285 * b) / 256.0;

    YCbCr { y, cb, cr }
}

fn check_rgb(image: &Image<u8>) -> ColorResult<()> {
    if image.channels() != 3 {
        return Err(derma_core::Error::UnsupportedChannels(image.channels()).into());
    }
    Ok(())
}

/// Transform a 3-channel RGB image to a 3-channel HSI image.
///
/// # Errors
///
/// Fails fast with an unsupported-channels error if the input is not
/// exactly 3-channel.
pub fn transform_rgb_to_hsi(image: &Image<u8>) -> ColorResult<ChannelImage> {
    check_rgb(image)?;
    let (w, h) = image.dimensions();
    let mut out = ChannelImage::new(w, h, 3)?;

    for y in 0..h {
        for x in 0..w {
            let hsi = rgb_to_hsi(
                image.get_pixel_unchecked(x, y, 0),
                image.get_pixel_unchecked(x, y, 1),
                image.get_pixel_unchecked(x, y, 2),
            );
            out.set_pixel_unchecked(x, y, 0, hsi.h);
            out.set_pixel_unchecked(x, y, 1, hsi.s);
            out.set_pixel_unchecked(x, y, 2, hsi.i);
        }
    }

    Ok(out)
}

/// Transform a 3-channel RGB image to a 3-channel HSV image.
pub fn transform_rgb_to_hsv(image: &Image<u8>) -> ColorResult<ChannelImage> {
    check_rgb(image)?;
    let (w, h) = image.dimensions();
    let mut out = ChannelImage::new(w, h, 3)?;

    for y in 0..h {
        for x in 0..w {
            let hsv = rgb_to_hsv(
                image.get_pixel_unchecked(x, y, 0),
                image.get_pixel_unchecked(x, y, 1),
                image.get_pixel_unchecked(x, y, 2),
            );
            out.set_pixel_unchecked(x, y, 0, hsv.h);
            out.set_pixel_unchecked(x, y, 1, hsv.s);
            out.set_pixel_unchecked(x, y, 2, hsv.v);
        }
    }

    Ok(out)
}

/// Transform a 3-channel RGB image to a 3-channel YCbCr image.
pub fn transform_rgb_to_ycbcr(image: &Image<u8>) -> ColorResult<ChannelImage> {
    check_rgb(image)?;
    let (w, h) = image.dimensions();
    let mut out = ChannelImage::new(w, h, 3)?;

    for y in 0..h {
        for x in 0..w {
            let ycbcr = rgb_to_ycbcr(
                image.get_pixel_unchecked(x, y, 0),
                image.get_pixel_unchecked(x, y, 1),
                image.get_pixel_unchecked(x, y, 2),
            );
            out.set_pixel_unchecked(x, y, 0, ycbcr.y);
            out.set_pixel_unchecked(x, y, 1, ycbcr.cb);
            out.set_pixel_unchecked(x, y, 2, ycbcr.cr);
        }
    }

    Ok(out)
}
