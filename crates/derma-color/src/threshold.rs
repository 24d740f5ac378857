//! Skin threshold classifiers
//!
//! One hand-tuned parameter set per color space, each with a pure
//! `classify` decision function. Parameter sets are validated once at
//! configuration time; the per-pixel decision functions never fail.
//!
//! The decision regions are empirical: two red-adjacent hue bands
//! conditioned on saturation for HSI, a polygon of linear inequalities
//! for HSV, and independent chroma ranges for YCbCr.

use crate::error::{ColorError, ColorResult};

/// Thresholds for the HSI classifier.
///
/// Hue bounds are degrees in [0, 360] (matching
/// [`crate::colorspace::rgb_to_hsi`]); saturation bounds are chroma
/// magnitudes; `i_min` is a normalized intensity floor.
#[derive(Debug, Clone, PartialEq)]
pub struct HsiThresholds {
    /// Minimum intensity; darker pixels are never skin.
    pub i_min: f64,
    /// Lower saturation bound shared by both hue tests.
    pub s_min: f64,
    /// Upper saturation bound for the primary hue bands.
    pub s_max_wide: f64,
    /// Upper saturation bound for the narrow magenta-side band.
    pub s_max_narrow: f64,
    /// Primary band, low side of red: (lower, upper) degrees.
    pub h_band_low: (f64, f64),
    /// Primary band, high side of red: (lower, upper) degrees.
    pub h_band_high: (f64, f64),
    /// Narrow magenta-side band used at low saturation.
    pub h_band_narrow: (f64, f64),
}

impl Default for HsiThresholds {
    fn default() -> Self {
        Self {
            i_min: 0.4,
            s_min: 13.0 / 255.0,
            s_max_wide: 110.0 / 255.0,
            s_max_narrow: 75.0 / 255.0,
            h_band_low: (1.0, 28.0),
            h_band_high: (332.0, 360.0),
            h_band_narrow: (309.0, 331.0),
        }
    }
}

impl HsiThresholds {
    /// Check the parameter set for degenerate bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidThreshold`] when any range is
    /// empty or inverted.
    pub fn validate(&self) -> ColorResult<()> {
        if self.s_min >= self.s_max_narrow || self.s_min >= self.s_max_wide {
            return Err(ColorError::InvalidThreshold(format!(
                "saturation bounds out of order: min {} vs max {}/{}",
                self.s_min, self.s_max_narrow, self.s_max_wide
            )));
        }
        for (name, (lower, upper)) in [
            ("low", self.h_band_low),
            ("high", self.h_band_high),
            ("narrow", self.h_band_narrow),
        ] {
            if lower >= upper {
                return Err(ColorError::InvalidThreshold(format!(
                    "hue band '{name}' is empty: ({lower}, {upper})"
                )));
            }
        }
        Ok(())
    }

    /// Classify an HSI pixel as skin (`true`) or non-skin (`false`).
    ///
    /// The narrow-band test is checked first; its saturation sub-range
    /// is contained in the wide one, so low-saturation pixels are
    /// decided by the magenta-side band alone.
    pub fn classify(&self, h: f64, s: f64, i: f64) -> bool {
        if i < self.i_min {
            return false;
        }

        if s > self.s_min && s < self.s_max_narrow {
            let (lower, upper) = self.h_band_narrow;
            return h > lower && h < upper;
        }

        if s > self.s_min && s < self.s_max_wide {
            let (low_l, low_u) = self.h_band_low;
            let (high_l, high_u) = self.h_band_high;
            return (low_l < h && h < low_u) || (high_l < h && h < high_u);
        }

        false
    }
}

/// Thresholds for the HSV classifier.
///
/// Hue is expected in signed degrees (-180, 180]; saturation and value
/// are scaled from [0, 1] to percent before testing. Each field pair
/// describes one linear reject boundary; a pixel is skin only if it
/// survives every test.
#[derive(Debug, Clone, PartialEq)]
pub struct HsvThresholds {
    /// Minimum saturation, percent.
    pub s_min: f64,
    /// Minimum value, percent.
    pub v_min: f64,
    /// Reject when `s > -h - sv_slope * v + sv_intercept`.
    pub sv_slope: f64,
    pub sv_intercept: f64,
    /// Reject when `h > hv_slope * v + hv_intercept`.
    pub hv_slope: f64,
    pub hv_intercept: f64,
    /// Warm side (h >= 0): reject when
    /// `s > warm_gain * (warm_offset - v) * h + warm_v_gain * v`.
    pub warm_gain: f64,
    pub warm_offset: f64,
    pub warm_v_gain: f64,
    /// Cool side (h < 0): reject when
    /// `s > cool_slope * h + cool_intercept`.
    pub cool_slope: f64,
    pub cool_intercept: f64,
}

impl Default for HsvThresholds {
    fn default() -> Self {
        Self {
            s_min: 10.0,
            v_min: 40.0,
            sv_slope: 0.1,
            sv_intercept: 110.0,
            hv_slope: -0.4,
            hv_intercept: 75.0,
            warm_gain: 0.08,
            warm_offset: 100.0,
            warm_v_gain: 0.5,
            cool_slope: 0.5,
            cool_intercept: 35.0,
        }
    }
}

impl HsvThresholds {
    /// Check the parameter set for degenerate bounds.
    pub fn validate(&self) -> ColorResult<()> {
        if !(0.0..=100.0).contains(&self.s_min) || !(0.0..=100.0).contains(&self.v_min) {
            return Err(ColorError::InvalidThreshold(format!(
                "floors must be percentages: s_min {}, v_min {}",
                self.s_min, self.v_min
            )));
        }
        if self.warm_offset <= 0.0 {
            return Err(ColorError::InvalidThreshold(format!(
                "warm_offset must be positive, got {}",
                self.warm_offset
            )));
        }
        Ok(())
    }

    /// Classify an HSV pixel as skin (`true`) or non-skin (`false`).
    ///
    /// Reject tests run in order and short-circuit; the final test
    /// branches on the sign of the hue.
    pub fn classify(&self, h: f64, s: f64, v: f64) -> bool {
        let s = s * 100.0;
        let v = v * 100.0;

        if s < self.s_min || v < self.v_min {
            return false;
        }

        if s > -h - self.sv_slope * v + self.sv_intercept {
            return false;
        }

        if h > self.hv_slope * v + self.hv_intercept {
            return false;
        }

        if h >= 0.0 {
            if s > self.warm_gain * (self.warm_offset - v) * h + self.warm_v_gain * v {
                return false;
            }
        } else if s > self.cool_slope * h + self.cool_intercept {
            return false;
        }

        true
    }
}

/// Thresholds for the YCbCr classifier.
///
/// Plain two-sided ranges on the chroma channels, byte scaled. Both
/// ranges must hold for a skin classification.
#[derive(Debug, Clone, PartialEq)]
pub struct YcbcrThresholds {
    pub cb_min: f64,
    pub cb_max: f64,
    pub cr_min: f64,
    pub cr_max: f64,
}

impl Default for YcbcrThresholds {
    fn default() -> Self {
        Self {
            cb_min: 77.0,
            cb_max: 127.0,
            cr_min: 133.0,
            cr_max: 173.0,
        }
    }
}

impl YcbcrThresholds {
    /// Check the parameter set for degenerate bounds.
    pub fn validate(&self) -> ColorResult<()> {
        if self.cb_min > self.cb_max {
            return Err(ColorError::InvalidThreshold(format!(
                "Cb range is empty: [{}, {}]",
                self.cb_min, self.cb_max
            )));
        }
        if self.cr_min > self.cr_max {
            return Err(ColorError::InvalidThreshold(format!(
                "Cr range is empty: [{}, {}]",
                self.cr_min, self.cr_max
            )));
        }
        Ok(())
    }

    /// Classify a YCbCr pixel as skin (`true`) or non-skin (`false`).
    ///
    /// Luma is ignored; both chroma channels are tested with explicit
    /// two-sided comparisons.
    pub fn classify(&self, _y: f64, cb: f64, cr: f64) -> bool {
        self.cb_min <= cb && cb <= self.cb_max && self.cr_min <= cr && cr <= self.cr_max
    }
}
