// SPDX-License-Identifier: GPL-3.0-only

//! Exposure value types
//!
//! [`ExposureSetting`] keeps its EV cached next to the three inputs. The
//! fields are private so the cache can only change through constructors that
//! recompute it.

use super::calculator::compute_ev;
use crate::constants::defaults;
use crate::errors::ExposureError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three user-editable exposure parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExposureParameter {
    /// Sensor sensitivity
    Iso,
    /// Exposure duration
    Shutter,
    /// Simulated lens opening
    Aperture,
}

impl ExposureParameter {
    /// All parameters in panel order
    pub const ALL: [ExposureParameter; 3] = [
        ExposureParameter::Iso,
        ExposureParameter::Shutter,
        ExposureParameter::Aperture,
    ];

    /// Get display name for UI
    pub fn display_name(self) -> &'static str {
        match self {
            ExposureParameter::Iso => "ISO",
            ExposureParameter::Shutter => "Shutter",
            ExposureParameter::Aperture => "Aperture",
        }
    }
}

impl fmt::Display for ExposureParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ExposureParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "iso" => Ok(ExposureParameter::Iso),
            "shutter" | "shutter-speed" | "speed" => Ok(ExposureParameter::Shutter),
            "aperture" | "f-stop" | "fstop" => Ok(ExposureParameter::Aperture),
            other => Err(format!(
                "unknown exposure parameter '{}' (expected iso, shutter or aperture)",
                other
            )),
        }
    }
}

/// Whether the camera meters on its own or follows the manual values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExposureMode {
    /// Continuous auto exposure
    #[default]
    Auto,
    /// User-set ISO and shutter speed
    Manual,
}

impl ExposureMode {
    /// Get display name for UI
    pub fn display_name(self) -> &'static str {
        match self {
            ExposureMode::Auto => "Auto",
            ExposureMode::Manual => "Manual",
        }
    }
}

/// A complete exposure triple with its derived EV
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExposureTriple")]
pub struct ExposureSetting {
    iso: f64,
    shutter_seconds: f64,
    aperture: f64,
    ev: f64,
}

/// Wire form of [`ExposureSetting`]; any serialized `ev` is ignored
#[derive(Deserialize)]
struct ExposureTriple {
    iso: f64,
    shutter_seconds: f64,
    aperture: f64,
}

impl TryFrom<ExposureTriple> for ExposureSetting {
    type Error = ExposureError;

    fn try_from(raw: ExposureTriple) -> Result<Self, Self::Error> {
        ExposureSetting::new(raw.iso, raw.shutter_seconds, raw.aperture)
    }
}

impl ExposureSetting {
    /// Build a setting, computing EV. Fails if any input is not positive.
    pub fn new(iso: f64, shutter_seconds: f64, aperture: f64) -> Result<Self, ExposureError> {
        let ev = compute_ev(aperture, shutter_seconds, iso)?;
        Ok(Self {
            iso,
            shutter_seconds,
            aperture,
            ev,
        })
    }

    /// ISO 100, 1/100 s, f/1.8
    pub fn defaults() -> Self {
        // Constants are positive
        let ev = compute_ev(
            defaults::APERTURE,
            defaults::SHUTTER_SECONDS,
            defaults::ISO,
        )
        .unwrap_or_default();
        Self {
            iso: defaults::ISO,
            shutter_seconds: defaults::SHUTTER_SECONDS,
            aperture: defaults::APERTURE,
            ev,
        }
    }

    pub fn iso(&self) -> f64 {
        self.iso
    }

    pub fn shutter_seconds(&self) -> f64 {
        self.shutter_seconds
    }

    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    /// Cached exposure value
    pub fn ev(&self) -> f64 {
        self.ev
    }

    /// Value of a single parameter
    pub fn get(&self, parameter: ExposureParameter) -> f64 {
        match parameter {
            ExposureParameter::Iso => self.iso,
            ExposureParameter::Shutter => self.shutter_seconds,
            ExposureParameter::Aperture => self.aperture,
        }
    }

    /// Copy with one parameter replaced and EV recomputed
    pub fn with(&self, parameter: ExposureParameter, value: f64) -> Result<Self, ExposureError> {
        match parameter {
            ExposureParameter::Iso => Self::new(value, self.shutter_seconds, self.aperture),
            ExposureParameter::Shutter => Self::new(self.iso, value, self.aperture),
            ExposureParameter::Aperture => Self::new(self.iso, self.shutter_seconds, value),
        }
    }

    pub fn with_iso(&self, iso: f64) -> Result<Self, ExposureError> {
        self.with(ExposureParameter::Iso, iso)
    }

    pub fn with_shutter_seconds(&self, shutter_seconds: f64) -> Result<Self, ExposureError> {
        self.with(ExposureParameter::Shutter, shutter_seconds)
    }

    pub fn with_aperture(&self, aperture: f64) -> Result<Self, ExposureError> {
        self.with(ExposureParameter::Aperture, aperture)
    }
}

impl Default for ExposureSetting {
    fn default() -> Self {
        Self::defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_from_str() {
        assert_eq!("ISO".parse::<ExposureParameter>(), Ok(ExposureParameter::Iso));
        assert_eq!(
            " shutter ".parse::<ExposureParameter>(),
            Ok(ExposureParameter::Shutter)
        );
        assert_eq!(
            "f-stop".parse::<ExposureParameter>(),
            Ok(ExposureParameter::Aperture)
        );
        assert!("focus".parse::<ExposureParameter>().is_err());
    }

    #[test]
    fn test_with_recomputes_ev() {
        let base = ExposureSetting::defaults();
        let brighter = base.with_iso(200.0).unwrap();
        assert_eq!(brighter.iso(), 200.0);
        assert_eq!(brighter.shutter_seconds(), base.shutter_seconds());
        assert!((base.ev() - brighter.ev() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_with_rejects_invalid_and_keeps_original() {
        let base = ExposureSetting::defaults();
        assert!(base.with_shutter_seconds(0.0).is_err());
        assert_eq!(base, ExposureSetting::defaults());
    }

    #[test]
    fn test_deserialize_recomputes_ev() {
        let json = r#"{"iso":400.0,"shutter_seconds":0.01,"aperture":1.8,"ev":99.0}"#;
        let setting: ExposureSetting = serde_json::from_str(json).unwrap();
        let expected = ExposureSetting::new(400.0, 0.01, 1.8).unwrap();
        assert_eq!(setting, expected);
    }

    #[test]
    fn test_deserialize_rejects_non_positive() {
        let json = r#"{"iso":0.0,"shutter_seconds":0.01,"aperture":1.8}"#;
        assert!(serde_json::from_str::<ExposureSetting>(json).is_err());
    }
}
