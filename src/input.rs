//! Raw form payloads and their validation into [`ShadowInput`].

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::types::{Direction, Footwear, HeightUnit, ShadowInput, WeatherCondition};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Height must be positive, got {0}")]
    NonPositiveHeight(f64),

    #[error("Latitude must be in [-90, 90], got {0}")]
    LatitudeOutOfRange(f64),

    #[error("Longitude must be in [-180, 180], got {0}")]
    LongitudeOutOfRange(f64),

    #[error("Invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time {0:?}, expected HH:MM")]
    InvalidTime(String),
}

/// The calculator form as submitted, before any range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowRequest {
    pub height: f64,
    pub height_unit: HeightUnit,
    pub latitude: f64,
    pub longitude: f64,
    pub direction: Direction,
    #[serde(rename = "shoeBrand")]
    pub footwear: Footwear,
    #[serde(default)]
    pub weather: WeatherCondition,
    pub date: String,
    pub time: String,
}

impl ShadowRequest {
    pub fn validate(&self) -> Result<ShadowInput, InputError> {
        let result = self.check();
        if let Err(e) = &result {
            warn!(error = %e, "rejected shadow request");
        }
        result
    }

    fn check(&self) -> Result<ShadowInput, InputError> {
        // `!(x > 0)` so NaN is rejected too
        if !(self.height > 0.0) || !self.height.is_finite() {
            return Err(InputError::NonPositiveHeight(self.height));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(InputError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(InputError::LongitudeOutOfRange(self.longitude));
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| InputError::InvalidDate(self.date.clone()))?;
        let time = parse_time(self.time.trim())
            .ok_or_else(|| InputError::InvalidTime(self.time.clone()))?;

        Ok(ShadowInput {
            height: self.height,
            height_unit: self.height_unit,
            latitude: self.latitude,
            longitude: self.longitude,
            direction: self.direction,
            footwear: self.footwear,
            weather: self.weather,
            date,
            time,
        })
    }
}

// Browsers send "HH:MM", but some include seconds.
fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .ok()
}
