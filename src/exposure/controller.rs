// SPDX-License-Identifier: GPL-3.0-only

//! Manual exposure state
//!
//! Holds what the controls panel edits: the current setting, the device
//! bounds, auto/manual mode and the suggested parameter. Each edit clamps the
//! new value, rebuilds the setting (recomputing EV) and rotates the
//! suggestion. Failed edits leave the state untouched.

use super::bounds::ExposureBounds;
use super::calculator::{reset_to_defaults, suggest_compensating_parameter};
use super::types::{ExposureMode, ExposureParameter, ExposureSetting};
use crate::constants::{STEPS_PER_STOP, aperture};
use crate::errors::ExposureError;
use tracing::{debug, info};

/// Caller-owned manual exposure state
#[derive(Debug, Clone, PartialEq)]
pub struct ManualExposure {
    setting: ExposureSetting,
    bounds: ExposureBounds,
    mode: ExposureMode,
    suggested: Option<ExposureParameter>,
}

impl Default for ManualExposure {
    fn default() -> Self {
        // Fallback bounds contain every default value
        Self {
            setting: reset_to_defaults(),
            bounds: ExposureBounds::default(),
            mode: ExposureMode::Auto,
            suggested: None,
        }
    }
}

impl ManualExposure {
    /// Start in auto mode with default values pulled into `bounds`
    ///
    /// Fails if the bounds are non-positive or unordered.
    pub fn new(bounds: ExposureBounds) -> Result<Self, ExposureError> {
        bounds.validate()?;
        let mut state = Self {
            bounds,
            ..Self::default()
        };
        state.setting = state.clamped_defaults();
        Ok(state)
    }

    pub fn setting(&self) -> &ExposureSetting {
        &self.setting
    }

    pub fn bounds(&self) -> &ExposureBounds {
        &self.bounds
    }

    pub fn mode(&self) -> ExposureMode {
        self.mode
    }

    /// Parameter the panel should highlight, if any
    pub fn suggested(&self) -> Option<ExposureParameter> {
        self.suggested
    }

    pub fn is_suggested(&self, parameter: ExposureParameter) -> bool {
        self.suggested == Some(parameter)
    }

    /// Apply a user edit to one parameter
    ///
    /// The value is clamped into bounds first. On success the mode switches
    /// to manual and the next parameter in the rotation becomes suggested.
    pub fn set(
        &mut self,
        parameter: ExposureParameter,
        value: f64,
    ) -> Result<&ExposureSetting, ExposureError> {
        let clamped = self.bounds.clamp(parameter, value);
        if !self.bounds.contains(parameter, value) {
            let (min, max) = self.bounds.range(parameter);
            debug!(
                parameter = %parameter,
                requested = value,
                min,
                max,
                "Exposure value outside bounds, clamping"
            );
        }
        let setting = self.setting.with(parameter, clamped)?;

        self.setting = setting;
        self.mode = ExposureMode::Manual;
        self.suggested = Some(suggest_compensating_parameter(parameter));

        debug!(
            parameter = %parameter,
            requested = value,
            applied = clamped,
            ev = self.setting.ev(),
            suggested = ?self.suggested,
            "Exposure parameter updated"
        );

        Ok(&self.setting)
    }

    /// Move a parameter by a number of steps (negative moves down)
    ///
    /// ISO and shutter move in third stops, aperture in 0.1 increments.
    pub fn nudge(
        &mut self,
        parameter: ExposureParameter,
        steps: i32,
    ) -> Result<&ExposureSetting, ExposureError> {
        let current = self.setting.get(parameter);
        let factor = 2f64.powf(steps as f64 / STEPS_PER_STOP);
        let target = match parameter {
            ExposureParameter::Iso => {
                let rounded = (current * factor).round();
                // Low ISOs would otherwise round back onto themselves
                if rounded == current && steps != 0 {
                    current + steps.signum() as f64
                } else {
                    rounded
                }
            }
            ExposureParameter::Shutter => current * factor,
            ExposureParameter::Aperture => current + steps as f64 * aperture::STEP,
        };
        self.set(parameter, target)
    }

    /// Return to continuous auto exposure with default values
    pub fn reset_to_auto(&mut self) -> &ExposureSetting {
        self.setting = self.clamped_defaults();
        self.mode = ExposureMode::Auto;
        self.suggested = None;
        info!(ev = self.setting.ev(), "Exposure reset to auto");
        &self.setting
    }

    /// Install limits reported by the device and reinitialise the values
    pub fn set_bounds(&mut self, bounds: ExposureBounds) -> Result<(), ExposureError> {
        bounds.validate()?;
        self.bounds = bounds;
        self.setting = self.clamped_defaults();
        info!(
            min_iso = bounds.min_iso,
            max_iso = bounds.max_iso,
            min_shutter = bounds.min_shutter_seconds,
            max_shutter = bounds.max_shutter_seconds,
            "Manual exposure bounds updated"
        );
        Ok(())
    }

    /// Defaults pulled into the current bounds
    fn clamped_defaults(&self) -> ExposureSetting {
        let defaults = reset_to_defaults();
        let clamp = |p: ExposureParameter| self.bounds.clamp(p, defaults.get(p));
        ExposureSetting::new(
            clamp(ExposureParameter::Iso),
            clamp(ExposureParameter::Shutter),
            clamp(ExposureParameter::Aperture),
        )
        .unwrap_or(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_in_auto() {
        let state = ManualExposure::default();
        assert_eq!(state.mode(), ExposureMode::Auto);
        assert_eq!(state.suggested(), None);
        assert_eq!(*state.setting(), ExposureSetting::defaults());
    }

    #[test]
    fn test_nudge_iso_third_stops() {
        let mut state = ManualExposure::default();
        state.nudge(ExposureParameter::Iso, 3).unwrap();
        assert_eq!(state.setting().iso(), 200.0);
        state.nudge(ExposureParameter::Iso, 1).unwrap();
        assert_eq!(state.setting().iso(), 252.0);
    }

    #[test]
    fn test_nudge_aperture_steps() {
        let mut state = ManualExposure::default();
        state.nudge(ExposureParameter::Aperture, 2).unwrap();
        assert_eq!(state.setting().aperture(), 2.0);
        state.nudge(ExposureParameter::Aperture, -100).unwrap();
        assert_eq!(state.setting().aperture(), 1.4);
    }

    #[test]
    fn test_nudge_shutter_one_stop() {
        let mut state = ManualExposure::default();
        state.nudge(ExposureParameter::Shutter, -3).unwrap();
        assert!((state.setting().shutter_seconds() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_defaults_clamped_into_narrow_bounds() {
        let bounds = ExposureBounds::from_device(200.0, 800.0, 0.001, 0.005).unwrap();
        let state = ManualExposure::new(bounds).unwrap();
        assert_eq!(state.setting().iso(), 200.0);
        assert_eq!(state.setting().shutter_seconds(), 0.005);
        assert_eq!(state.setting().aperture(), 1.8);
    }

    #[test]
    fn test_new_rejects_invalid_bounds() {
        let zero_iso = ExposureBounds {
            min_iso: 0.0,
            ..ExposureBounds::default()
        };
        assert!(matches!(
            ManualExposure::new(zero_iso),
            Err(ExposureError::InvalidBounds {
                parameter: ExposureParameter::Iso,
                ..
            })
        ));

        let inverted_iso = ExposureBounds {
            min_iso: 800.0,
            max_iso: 100.0,
            ..ExposureBounds::default()
        };
        assert!(ManualExposure::new(inverted_iso).is_err());
    }

    #[test]
    fn test_new_with_default_bounds_matches_default() {
        let state = ManualExposure::new(ExposureBounds::default()).unwrap();
        assert_eq!(state, ManualExposure::default());
    }

    #[test]
    fn test_set_clamps_out_of_range_value() {
        let mut state = ManualExposure::default();
        assert!(!state.bounds().contains(ExposureParameter::Iso, 12_800.0));
        let setting = state.set(ExposureParameter::Iso, 12_800.0).unwrap();
        assert_eq!(setting.iso(), 3200.0);
        assert!(state.bounds().contains(ExposureParameter::Iso, state.setting().iso()));
    }

    #[test]
    fn test_nudge_low_iso_always_moves() {
        let bounds = ExposureBounds::from_device(1.0, 3200.0, 0.0001, 1.0).unwrap();
        let mut state = ManualExposure::new(bounds).unwrap();
        state.set(ExposureParameter::Iso, 1.0).unwrap();

        state.nudge(ExposureParameter::Iso, 1).unwrap();
        assert_eq!(state.setting().iso(), 2.0);
        state.nudge(ExposureParameter::Iso, -1).unwrap();
        assert_eq!(state.setting().iso(), 1.0);
        // Already at the floor: clamped back to it
        state.nudge(ExposureParameter::Iso, -1).unwrap();
        assert_eq!(state.setting().iso(), 1.0);
    }
}
