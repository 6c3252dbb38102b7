// SPDX-License-Identifier: GPL-3.0-only

//! Display labels for the manual controls panel

use super::types::ExposureParameter;

/// Label for any parameter's value
pub fn format_value(parameter: ExposureParameter, value: f64) -> String {
    match parameter {
        ExposureParameter::Iso => format_iso(value),
        ExposureParameter::Shutter => format_shutter_speed(value),
        ExposureParameter::Aperture => format_aperture(value),
    }
}

/// Format a shutter time the way camera dials print it
///
/// - One second or longer: seconds followed by `"` (`1"`, `2.5"`)
/// - Faster than one second: `1/N` with N = round(1 / seconds) (`1/100`)
/// - Zero, negative or non-finite: `--`
pub fn format_shutter_speed(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "--".to_string();
    }

    if seconds >= 1.0 {
        // Decide on the value as displayed, so 1.96 and 2.04 both read 2"
        let tenths = (seconds * 10.0).round();
        if tenths % 10.0 == 0.0 {
            format!("{}\"", (tenths / 10.0) as u64)
        } else {
            format!("{:.1}\"", tenths / 10.0)
        }
    } else {
        format!("1/{}", (1.0 / seconds).round() as u64)
    }
}

/// ISO as a whole number (`100`)
pub fn format_iso(iso: f64) -> String {
    format!("{}", iso.round() as i64)
}

/// f-number with one decimal (`f/1.8`)
pub fn format_aperture(aperture: f64) -> String {
    format!("f/{:.1}", aperture)
}

/// EV with one decimal (`8.3`)
pub fn format_ev(ev: f64) -> String {
    format!("{:.1}", ev)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shutter_long_exposures() {
        assert_eq!(format_shutter_speed(1.0), "1\"");
        assert_eq!(format_shutter_speed(2.0), "2\"");
        assert_eq!(format_shutter_speed(2.5), "2.5\"");
    }

    #[test]
    fn test_shutter_near_whole_seconds() {
        assert_eq!(format_shutter_speed(1.96), "2\"");
        assert_eq!(format_shutter_speed(2.04), "2\"");
        assert_eq!(format_shutter_speed(1.04), "1\"");
        assert_eq!(format_shutter_speed(1.06), "1.1\"");
    }

    #[test]
    fn test_shutter_rounds_denominator() {
        // 1/0.003 = 333.33..
        assert_eq!(format_shutter_speed(0.003), "1/333");
        // 1/0.0016 = 625
        assert_eq!(format_shutter_speed(0.0016), "1/625");
        assert_eq!(format_shutter_speed(0.9), "1/1");
    }

    #[test]
    fn test_shutter_invalid() {
        assert_eq!(format_shutter_speed(0.0), "--");
        assert_eq!(format_shutter_speed(-0.5), "--");
        assert_eq!(format_shutter_speed(f64::NAN), "--");
    }

    #[test]
    fn test_other_labels() {
        assert_eq!(format_iso(99.6), "100");
        assert_eq!(format_aperture(1.8), "f/1.8");
        assert_eq!(format_aperture(22.0), "f/22.0");
        assert_eq!(format_ev(8.339850002884624), "8.3");
        assert_eq!(format_ev(-1.04), "-1.0");
    }
}
