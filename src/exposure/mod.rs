// SPDX-License-Identifier: GPL-3.0-only

//! Manual exposure module
//!
//! This module handles the numeric side of manual exposure:
//! - EV computation from ISO, shutter speed and a simulated aperture
//! - Which parameter to highlight after the user edits another one
//! - Device bounds and clamping of raw slider positions
//! - Display labels for the manual controls panel
//!
//! Everything here is pure. [`ManualExposure`] is the only stateful type and
//! it is owned by the caller.

pub mod bounds;
pub mod calculator;
pub mod controller;
pub mod format;
pub mod types;

pub use bounds::ExposureBounds;
pub use calculator::{compute_ev, reset_to_defaults, suggest_compensating_parameter};
pub use controller::ManualExposure;
pub use format::{format_aperture, format_ev, format_iso, format_shutter_speed, format_value};
pub use types::{ExposureMode, ExposureParameter, ExposureSetting};
