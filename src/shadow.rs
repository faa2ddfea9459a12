use std::fmt;

use tracing::debug;

use crate::angles;
use crate::types::{HeightUnit, ShadowInput, ShadowResult};

/// At or below this altitude the shadow is treated as nonexistent.
pub const MIN_SHADOW_ALTITUDE: f64 = 5.0;

pub const FEET_PER_CENTIMETER: f64 = 0.0328084;
pub const FEET_PER_METER: f64 = 3.28084;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const PLANCK_LENGTH_M: f64 = 1.616e-35;
pub const LIGHT_YEAR_M: f64 = 9.461e15;
pub const HORSE_LENGTH_FT: f64 = 8.0;

pub const EXPONENT_DIGITS: usize = 2;
pub const VISUAL_PX_PER_FOOT: f64 = 15.0;
pub const VISUAL_MAX_WIDTH_PX: f64 = 180.0;

impl HeightUnit {
    pub fn to_feet(self, height: f64) -> f64 {
        match self {
            HeightUnit::Feet => height,
            HeightUnit::Centimeter => height * FEET_PER_CENTIMETER,
            HeightUnit::Meter => height * FEET_PER_METER,
        }
    }
}

pub fn shadow_length(height_ft: f64, altitude: f64) -> f64 {
    (height_ft / angles::deg_to_rad(altitude).tan()).abs()
}

/// Scientific notation with a signed exponent, e.g. `5.66e+34` or `3.46e-16`.
pub fn format_exponential(value: f64, digits: usize) -> String {
    let raw = format!("{:.*e}", digits, value);
    match raw.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => raw,
    }
}

pub fn planck_lengths(length_ft: f64) -> f64 {
    length_ft * METERS_PER_FOOT / PLANCK_LENGTH_M
}

pub fn light_years(length_ft: f64) -> f64 {
    length_ft * METERS_PER_FOOT / LIGHT_YEAR_M
}

pub fn horse_units(length_ft: f64) -> f64 {
    (length_ft / HORSE_LENGTH_FT).abs()
}

impl ShadowResult {
    pub fn none(sun_altitude: f64) -> Self {
        Self {
            shadow_exists: false,
            length_in_feet: 0.0,
            planck_lengths: "0".to_string(),
            light_years: "0".to_string(),
            horse_units: 0.0,
            sun_altitude_degrees: sun_altitude,
        }
    }

    pub fn from_length(length_ft: f64, sun_altitude: f64) -> Self {
        Self {
            shadow_exists: true,
            length_in_feet: length_ft,
            planck_lengths: format_exponential(planck_lengths(length_ft), EXPONENT_DIGITS),
            light_years: format_exponential(light_years(length_ft), EXPONENT_DIGITS),
            horse_units: horse_units(length_ft),
            sun_altitude_degrees: sun_altitude,
        }
    }

    /// Width in pixels of the drawn shadow bar.
    pub fn visual_width(&self) -> f64 {
        (self.length_in_feet * VISUAL_PX_PER_FOOT).min(VISUAL_MAX_WIDTH_PX)
    }
}

impl fmt::Display for ShadowResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.shadow_exists {
            return write!(
                f,
                "no shadow (sun at {:.2}°, needs more than {:.0}°)",
                self.sun_altitude_degrees, MIN_SHADOW_ALTITUDE
            );
        }
        write!(
            f,
            "{:.2} ft | {} Planck lengths | {} light years | {:.2} horses",
            self.length_in_feet, self.planck_lengths, self.light_years, self.horse_units
        )
    }
}

/// Shadow of something `height_ft` tall with the sun at `altitude` degrees.
pub fn shadow_at_altitude(height_ft: f64, altitude: f64) -> ShadowResult {
    if altitude <= MIN_SHADOW_ALTITUDE {
        debug!(altitude, "sun too low, no shadow");
        return ShadowResult::none(altitude);
    }
    let length = shadow_length(height_ft, altitude);
    debug!(height_ft, altitude, length, "shadow computed");
    ShadowResult::from_length(length, altitude)
}

pub fn compute(input: &ShadowInput) -> ShadowResult {
    let height_ft = input.height_unit.to_feet(input.height);
    let pos = angles::solar_position(input.latitude, input.longitude, input.date, input.time);
    shadow_at_altitude(height_ft, pos.altitude)
}
