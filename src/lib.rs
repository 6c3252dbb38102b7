// SPDX-License-Identifier: GPL-3.0-only

//! Camera Exposure - manual exposure calculation for camera capture
//!
//! This library provides the numeric core behind a manual camera controls
//! panel: exposure value computation, the suggested-parameter rotation,
//! device bounds and display formatting.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`exposure`]: EV calculation, bounds, formatting and manual state
//! - [`controls`]: Flash mode cycling and zoom clamping
//! - [`config`]: User configuration handling
//! - [`terminal`]: Terminal manual-controls panel
//!
//! # Example
//!
//! ```
//! use camera_exposure::exposure::{compute_ev, format_shutter_speed};
//!
//! let ev = compute_ev(1.8, 0.01, 100.0).unwrap();
//! assert!((ev - 324f64.log2()).abs() < 1e-9);
//! assert_eq!(format_shutter_speed(0.01), "1/100");
//! ```

pub mod config;
pub mod constants;
pub mod controls;
pub mod errors;
pub mod exposure;
pub mod terminal;

// Re-export commonly used types
pub use config::Config;
pub use controls::{FlashMode, Zoom};
pub use errors::{AppError, AppResult, ExposureError};
pub use exposure::{
    ExposureBounds, ExposureMode, ExposureParameter, ExposureSetting, ManualExposure,
};
