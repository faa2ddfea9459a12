use std::f64::consts::PI;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, TimeZone, Timelike};
use tracing::debug;

use crate::types::SolarPosition;

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;
pub const MINUTES_PER_DEGREE: f64 = 4.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

pub fn leap_year(year: i32) -> bool {
    (year % 400 == 0) || (year % 4 == 0 && year % 100 != 0)
}

pub fn days_in_months(year: i32) -> [u32; 12] {
    [
        31,
        if leap_year(year) { 29 } else { 28 },
        31, 30, 31, 30, 31, 31, 30, 31, 30, 31,
    ]
}

pub fn day_of_year(year: i32, month: u32, day: u32) -> i32 {
    let dim = days_in_months(year);
    let sum: u32 = dim[..(month - 1) as usize].iter().sum();
    (sum + day) as i32
}

pub fn decimal_hour(hour: u32, minute: u32) -> f64 {
    hour as f64 + minute as f64 / 60.0
}

pub fn solar_declination(n: i32) -> f64 {
    -EARTH_AXIAL_TILT * (2.0 * PI / 365.0 * (n + 10) as f64).cos()
}

/// Fractional-year angle in radians, zero near the March equinox.
pub fn intermediate_angle_b(n: i32) -> f64 {
    2.0 * PI / 365.0 * (n - 81) as f64
}

/// Minutes between clock time and apparent solar time.
pub fn equation_of_time(n: i32) -> f64 {
    let b = intermediate_angle_b(n);
    9.87 * (2.0 * b).sin() - 7.53 * b.cos() - 1.5 * b.sin()
}

/// Nearest multiple of 15° to `longitude`.
///
/// Stands in for the civil timezone: political borders and daylight saving are
/// ignored on purpose. Ties round toward positive infinity, so -7.5° belongs to the
/// 0° slot and 7.5° to the 15° slot.
pub fn standard_meridian(longitude: f64) -> f64 {
    (longitude / DEGREES_PER_HOUR + 0.5).floor() * DEGREES_PER_HOUR
}

pub fn local_solar_time(decimal_hour: f64, eot: f64, longitude: f64) -> f64 {
    let meridian = standard_meridian(longitude);
    decimal_hour + eot / 60.0 + MINUTES_PER_DEGREE * (meridian - longitude) / 60.0
}

pub fn hour_angle(local_solar_time: f64) -> f64 {
    DEGREES_PER_HOUR * (local_solar_time - 12.0)
}

pub fn solar_altitude(latitude: f64, declination: f64, hour_angle: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let dec_rad = deg_to_rad(declination);
    let ha_rad = deg_to_rad(hour_angle);
    let sin_alt =
        lat_rad.sin() * dec_rad.sin() + lat_rad.cos() * dec_rad.cos() * ha_rad.cos();
    rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin())
}

pub fn solar_position(
    latitude: f64,
    longitude: f64,
    date: NaiveDate,
    time: NaiveTime,
) -> SolarPosition {
    let n = day_of_year(date.year(), date.month(), date.day());
    let hours = decimal_hour(time.hour(), time.minute());
    let decl = solar_declination(n);
    let eot = equation_of_time(n);
    let lst = local_solar_time(hours, eot, longitude);
    let ha = hour_angle(lst);
    let alt = solar_altitude(latitude, decl, ha);
    debug!(
        day_of_year = n,
        declination = decl,
        equation_of_time = eot,
        local_solar_time = lst,
        hour_angle = ha,
        altitude = alt,
        "solar position"
    );
    SolarPosition {
        day_of_year: n,
        declination: decl,
        equation_of_time: eot,
        standard_meridian: standard_meridian(longitude),
        local_solar_time: lst,
        hour_angle: ha,
        altitude: alt,
    }
}

/// Same as [`solar_position`], reading the wall-clock fields of `dt` in its own zone.
pub fn solar_position_at<Tz: TimeZone>(
    latitude: f64,
    longitude: f64,
    dt: &DateTime<Tz>,
) -> SolarPosition {
    let local = dt.naive_local();
    solar_position(latitude, longitude, local.date(), local.time())
}
