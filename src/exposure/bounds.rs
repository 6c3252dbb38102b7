// SPDX-License-Identifier: GPL-3.0-only

//! Exposure bounds
//!
//! ISO and shutter limits come from the active camera format. Until the
//! device reports them, the fallback constants apply. Aperture is simulated
//! and always uses the fixed lens-stop range.

use super::types::ExposureParameter;
use crate::constants::{aperture, bounds};
use crate::errors::ExposureError;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Valid ranges for ISO and shutter speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExposureBounds {
    /// Lowest supported ISO
    pub min_iso: f64,
    /// Highest supported ISO
    pub max_iso: f64,
    /// Fastest shutter speed in seconds
    pub min_shutter_seconds: f64,
    /// Slowest shutter speed in seconds
    pub max_shutter_seconds: f64,
}

impl Default for ExposureBounds {
    fn default() -> Self {
        Self {
            min_iso: bounds::MIN_ISO,
            max_iso: bounds::MAX_ISO,
            min_shutter_seconds: bounds::MIN_SHUTTER_SECONDS,
            max_shutter_seconds: bounds::MAX_SHUTTER_SECONDS,
        }
    }
}

impl ExposureBounds {
    /// Build bounds from the limits reported by the active camera format
    ///
    /// The slowest shutter speed is capped at one second.
    pub fn from_device(
        min_iso: f64,
        max_iso: f64,
        min_shutter_seconds: f64,
        max_shutter_seconds: f64,
    ) -> Result<Self, ExposureError> {
        let capped_max_shutter = max_shutter_seconds.min(bounds::MAX_SHUTTER_SECONDS);
        if capped_max_shutter < max_shutter_seconds {
            debug!(
                reported = max_shutter_seconds,
                capped = capped_max_shutter,
                "Capping device shutter range"
            );
        }

        let bounds = Self {
            min_iso,
            max_iso,
            min_shutter_seconds,
            max_shutter_seconds: capped_max_shutter,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check that every range is positive, finite and ordered
    pub fn validate(&self) -> Result<(), ExposureError> {
        check_range(ExposureParameter::Iso, self.min_iso, self.max_iso)?;
        check_range(
            ExposureParameter::Shutter,
            self.min_shutter_seconds,
            self.max_shutter_seconds,
        )
    }

    /// Inclusive range for a parameter
    pub fn range(&self, parameter: ExposureParameter) -> (f64, f64) {
        match parameter {
            ExposureParameter::Iso => (self.min_iso, self.max_iso),
            ExposureParameter::Shutter => (self.min_shutter_seconds, self.max_shutter_seconds),
            ExposureParameter::Aperture => (aperture::MIN, aperture::MAX),
        }
    }

    /// Clamp a raw slider value into range
    ///
    /// Aperture additionally snaps to the nearest 0.1 stop. NaN is returned
    /// unchanged so the calculator rejects it.
    pub fn clamp(&self, parameter: ExposureParameter, value: f64) -> f64 {
        if value.is_nan() {
            warn!(parameter = %parameter, "Ignoring NaN exposure value");
            return value;
        }

        let (min, max) = self.range(parameter);
        // Not f64::clamp: hand-edited bounds may be unordered and must not panic
        let clamped = value.max(min).min(max);
        match parameter {
            ExposureParameter::Aperture => snap_aperture(clamped),
            _ => clamped,
        }
    }

    /// Whether a value is already inside the range (aperture need not be on a stop)
    pub fn contains(&self, parameter: ExposureParameter, value: f64) -> bool {
        let (min, max) = self.range(parameter);
        value >= min && value <= max
    }
}

/// Round an f-number to the nearest selectable stop
pub fn snap_aperture(value: f64) -> f64 {
    let steps = ((value - aperture::MIN) / aperture::STEP).round();
    let snapped = aperture::MIN + steps * aperture::STEP;
    // Strip accumulated binary error so 1.8 prints and compares as 1.8
    ((snapped * 10.0).round() / 10.0).clamp(aperture::MIN, aperture::MAX)
}

/// Every selectable aperture stop, widest first
pub fn aperture_stops() -> Vec<f64> {
    let count = ((aperture::MAX - aperture::MIN) / aperture::STEP).round() as usize;
    (0..=count)
        .map(|i| snap_aperture(aperture::MIN + i as f64 * aperture::STEP))
        .collect()
}

fn check_range(parameter: ExposureParameter, min: f64, max: f64) -> Result<(), ExposureError> {
    let positive = |v: f64| v.is_finite() && v > 0.0;
    if positive(min) && positive(max) && min <= max {
        Ok(())
    } else {
        Err(ExposureError::InvalidBounds {
            parameter,
            min,
            max,
        })
    }
}
