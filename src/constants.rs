// SPDX-License-Identifier: GPL-3.0-only

//! Application-wide constants

/// Exposure defaults applied on camera initialization and on reset to auto
pub mod defaults {
    /// Default ISO sensitivity
    pub const ISO: f64 = 100.0;

    /// Default shutter speed in seconds (1/100 s)
    pub const SHUTTER_SECONDS: f64 = 0.01;

    /// Default simulated aperture (f/1.8)
    pub const APERTURE: f64 = 1.8;
}

/// ISO that maps to a zero sensitivity term in the EV formula
pub const REFERENCE_ISO: f64 = 100.0;

/// Exposure limits used until a device reports its own
pub mod bounds {
    /// Lowest ISO before the device reports its range
    pub const MIN_ISO: f64 = 50.0;

    /// Highest ISO before the device reports its range
    pub const MAX_ISO: f64 = 3200.0;

    /// Fastest shutter speed before the device reports its range (1/10000 s)
    pub const MIN_SHUTTER_SECONDS: f64 = 0.0001;

    /// Slowest shutter speed, also the cap applied to device-reported limits
    pub const MAX_SHUTTER_SECONDS: f64 = 1.0;
}

/// Simulated lens stops
///
/// The lens is fixed, so aperture only feeds the EV readout. Valid stops run
/// from f/1.4 to f/22 in 0.1 increments.
pub mod aperture {
    /// Widest selectable stop
    pub const MIN: f64 = 1.4;

    /// Narrowest selectable stop
    pub const MAX: f64 = 22.0;

    /// Distance between adjacent stops
    pub const STEP: f64 = 0.1;
}

/// Number of nudges per photographic stop for ISO and shutter adjustments
pub const STEPS_PER_STOP: f64 = 3.0;

/// Zoom limits
pub mod zoom {
    /// Minimum zoom factor (no zoom)
    pub const MIN_FACTOR: f64 = 1.0;

    /// Hard ceiling regardless of what the device supports
    pub const MAX_FACTOR: f64 = 10.0;

    /// Zoom label is only shown above this factor
    pub const LABEL_THRESHOLD: f64 = 1.01;
}

/// Name of the directory under the user config dir
pub const CONFIG_DIR_NAME: &str = "camera-exposure";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";
