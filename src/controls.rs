// SPDX-License-Identifier: GPL-3.0-only

//! Capture screen controls: flash mode and zoom
//!
//! Only the selection rules live here. Applying the mode or zoom factor to
//! hardware is the capture session's job.

use crate::constants::zoom;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Flash operating mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlashMode {
    /// Flash never fires
    #[default]
    Off,
    /// Flash fires on every capture
    On,
    /// Camera decides based on scene brightness
    Auto,
}

impl FlashMode {
    /// Cycle to the next mode: Off -> On -> Auto -> Off
    pub fn next(self) -> Self {
        match self {
            FlashMode::Off => FlashMode::On,
            FlashMode::On => FlashMode::Auto,
            FlashMode::Auto => FlashMode::Off,
        }
    }

    /// Get display name for UI
    pub fn display_name(self) -> &'static str {
        match self {
            FlashMode::Off => "Off",
            FlashMode::On => "On",
            FlashMode::Auto => "Auto",
        }
    }

    /// Whether the flash button should be offered at all
    ///
    /// Front cameras never get one, even if the device reports a flash.
    pub fn available(has_flash: bool, is_front_camera: bool) -> bool {
        has_flash && !is_front_camera
    }
}

/// Clamp a zoom factor to `[1.0, min(device_max, 10.0)]`
pub fn clamp_zoom(factor: f64, device_max: f64) -> f64 {
    let upper = device_max.min(zoom::MAX_FACTOR).max(zoom::MIN_FACTOR);
    if factor.is_nan() {
        return zoom::MIN_FACTOR;
    }
    factor.max(zoom::MIN_FACTOR).min(upper)
}

/// Current zoom factor and the device limit it is clamped against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zoom {
    factor: f64,
    device_max: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self::new(zoom::MAX_FACTOR)
    }
}

impl Zoom {
    /// Unzoomed, limited by what the device reports
    pub fn new(device_max: f64) -> Self {
        Self {
            factor: zoom::MIN_FACTOR,
            device_max,
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Effective upper limit
    pub fn max_factor(&self) -> f64 {
        clamp_zoom(f64::INFINITY, self.device_max)
    }

    /// Set an absolute zoom factor, returning the clamped value
    pub fn set(&mut self, factor: f64) -> f64 {
        self.factor = clamp_zoom(factor, self.device_max);
        debug!(requested = factor, applied = self.factor, "Zoom updated");
        self.factor
    }

    /// Apply a pinch gesture's relative scale to the current factor
    pub fn apply_pinch(&mut self, delta: f64) -> f64 {
        self.set(self.factor * delta)
    }

    /// Overlay label such as `2.5x`, hidden when effectively unzoomed
    pub fn label(&self) -> Option<String> {
        (self.factor > zoom::LABEL_THRESHOLD).then(|| format!("{:.1}x", self.factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_cycle() {
        let mut mode = FlashMode::default();
        assert_eq!(mode, FlashMode::Off);
        mode = mode.next();
        assert_eq!(mode, FlashMode::On);
        mode = mode.next();
        assert_eq!(mode, FlashMode::Auto);
        mode = mode.next();
        assert_eq!(mode, FlashMode::Off);
    }

    #[test]
    fn test_flash_availability() {
        assert!(FlashMode::available(true, false));
        assert!(!FlashMode::available(true, true));
        assert!(!FlashMode::available(false, false));
    }

    #[test]
    fn test_clamp_zoom() {
        assert_eq!(clamp_zoom(0.5, 5.0), 1.0);
        assert_eq!(clamp_zoom(3.0, 5.0), 3.0);
        assert_eq!(clamp_zoom(8.0, 5.0), 5.0);
        assert_eq!(clamp_zoom(50.0, 123.0), 10.0);
        assert_eq!(clamp_zoom(f64::NAN, 5.0), 1.0);
        // Device reporting less than 1x still allows the unzoomed factor
        assert_eq!(clamp_zoom(2.0, 0.5), 1.0);
    }

    #[test]
    fn test_zoom_set_clamps() {
        let mut zoom = Zoom::new(4.0);
        assert_eq!(zoom.set(2.0), 2.0);
        assert_eq!(zoom.set(6.0), 4.0);
        assert_eq!(zoom.factor(), 4.0);
        assert_eq!(zoom.set(0.2), 1.0);
        assert_eq!(zoom.set(f64::NAN), 1.0);
    }

    #[test]
    fn test_zoom_label_threshold() {
        let mut zoom = Zoom::default();
        zoom.set(1.01);
        assert_eq!(zoom.label(), None);
        zoom.set(1.02);
        assert_eq!(zoom.label().as_deref(), Some("1.0x"));
        zoom.set(1.5);
        assert_eq!(zoom.label().as_deref(), Some("1.5x"));
    }

    #[test]
    fn test_pinch_and_label() {
        let mut zoom = Zoom::new(16.0);
        assert_eq!(zoom.label(), None);
        zoom.apply_pinch(2.0);
        zoom.apply_pinch(1.25);
        assert_eq!(zoom.factor(), 2.5);
        assert_eq!(zoom.label().as_deref(), Some("2.5x"));
        zoom.apply_pinch(100.0);
        assert_eq!(zoom.factor(), 10.0);
        assert_eq!(zoom.max_factor(), 10.0);
        zoom.apply_pinch(0.001);
        assert_eq!(zoom.factor(), 1.0);
    }
}
