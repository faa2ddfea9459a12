//! Weather and geocoding provider plumbing.
//!
//! Builds the upstream request URLs and maps provider JSON into the records shown
//! next to a shadow reading. No requests are sent from here; the weather report is
//! display-only and never feeds the shadow computation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_API_KEY: &str = "demo_key";
pub const API_KEY_VARS: [&str; 2] = ["OPENWEATHER_API_KEY", "WEATHER_API_KEY"];
pub const GEOCODE_LIMIT: u32 = 5;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Latitude and longitude are required")]
    MissingCoordinates,

    #[error("City name is required")]
    MissingCity,

    #[error("Unexpected geocoding payload: {0}")]
    MalformedGeocode(String),

    #[error("Invalid provider JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for WeatherApiConfig {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl WeatherApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// First non-empty key among [`API_KEY_VARS`], else the demo key.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_KEY.to_string());
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn weather_url(&self, lat: Option<f64>, lon: Option<f64>) -> Result<String, WeatherError> {
        let (lat, lon) = lat.zip(lon).ok_or(WeatherError::MissingCoordinates)?;
        Ok(format!(
            "{}/data/2.5/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        ))
    }

    pub fn geocode_url(&self, city: &str) -> Result<String, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::MissingCity);
        }
        Ok(format!(
            "{}/geo/1.0/direct?q={}&limit={}&appid={}",
            self.base_url,
            urlencoding::encode(city),
            GEOCODE_LIMIT,
            self.api_key
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub description: String,
    pub temperature: f64,
    pub cloud_cover: f64,
    pub visibility: String,
}

impl Default for WeatherReport {
    fn default() -> Self {
        Self {
            description: "Clear".to_string(),
            temperature: 20.0,
            cloud_cover: 0.0,
            visibility: "10km".to_string(),
        }
    }
}

// Zero and missing both mean "use the fallback", as upstream treats 0 as falsy.
fn nonzero(v: Option<f64>) -> Option<f64> {
    v.filter(|x| *x != 0.0 && !x.is_nan())
}

impl WeatherReport {
    /// Map a current-weather payload, falling back field by field.
    pub fn from_provider(data: &Value) -> Self {
        let fallback = Self::default();
        let description = data["weather"][0]["description"]
            .as_str()
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .unwrap_or(fallback.description);
        let temperature = nonzero(data["main"]["temp"].as_f64()).unwrap_or(fallback.temperature);
        let cloud_cover = nonzero(data["clouds"]["all"].as_f64()).unwrap_or(fallback.cloud_cover);
        let visibility = nonzero(data["visibility"].as_f64())
            .map(|m| format!("{}km", (m / 1000.0).round()))
            .unwrap_or(fallback.visibility);
        Self {
            description,
            temperature,
            cloud_cover,
            visibility,
        }
    }

    /// Like [`WeatherReport::from_provider`] for a raw body; unreadable bodies give the default.
    pub fn from_body(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(data) => Self::from_provider(&data),
            Err(e) => {
                warn!(error = %e, "weather payload unreadable, using default");
                Self::default()
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        if self.description.to_lowercase().contains("cloud") {
            "cloud"
        } else {
            "sun"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub name: String,
    pub country: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    pub lat: f64,
    pub lon: f64,
}

pub fn parse_geocode(data: &Value) -> Result<Vec<GeoLocation>, WeatherError> {
    if !data.is_array() {
        return Err(WeatherError::MalformedGeocode(format!(
            "expected an array, got {}",
            data
        )));
    }
    Ok(Vec::<GeoLocation>::deserialize(data)?)
}

pub fn parse_geocode_body(body: &str) -> Result<Vec<GeoLocation>, WeatherError> {
    let data: Value = serde_json::from_str(body)?;
    parse_geocode(&data)
}
