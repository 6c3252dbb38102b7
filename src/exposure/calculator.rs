// SPDX-License-Identifier: GPL-3.0-only

//! Exposure value calculation
//!
//! `EV = log2(N² / t) - log2(S / 100)` where N is the f-number, t the shutter
//! time in seconds and S the ISO sensitivity.

use super::types::{ExposureParameter, ExposureSetting};
use crate::constants::REFERENCE_ISO;
use crate::errors::ExposureError;

/// Compute the exposure value for an aperture, shutter time and ISO
///
/// Every input must be positive and finite; anything else is rejected with
/// [`ExposureError::InvalidArgument`] naming the first offending parameter.
pub fn compute_ev(aperture: f64, shutter_seconds: f64, iso: f64) -> Result<f64, ExposureError> {
    require_positive(ExposureParameter::Aperture, aperture)?;
    require_positive(ExposureParameter::Shutter, shutter_seconds)?;
    require_positive(ExposureParameter::Iso, iso)?;

    Ok((aperture * aperture / shutter_seconds).log2() - (iso / REFERENCE_ISO).log2())
}

/// Parameter to highlight after `changed` was edited
///
/// A fixed rotation: ISO -> shutter -> aperture -> ISO. No compensating value
/// is computed.
pub fn suggest_compensating_parameter(changed: ExposureParameter) -> ExposureParameter {
    match changed {
        ExposureParameter::Iso => ExposureParameter::Shutter,
        ExposureParameter::Shutter => ExposureParameter::Aperture,
        ExposureParameter::Aperture => ExposureParameter::Iso,
    }
}

/// ISO 100, 1/100 s, f/1.8 with EV recomputed
pub fn reset_to_defaults() -> ExposureSetting {
    ExposureSetting::defaults()
}

fn require_positive(parameter: ExposureParameter, value: f64) -> Result<(), ExposureError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ExposureError::InvalidArgument { parameter, value })
    }
}
