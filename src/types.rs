use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "m")]
    Meter,
}

/// Compass point the person is facing. Only used in the narrative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::Northeast,
        Direction::East,
        Direction::Southeast,
        Direction::South,
        Direction::Southwest,
        Direction::West,
        Direction::Northwest,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Direction::North => "North",
            Direction::Northeast => "Northeast",
            Direction::East => "East",
            Direction::Southeast => "Southeast",
            Direction::South => "South",
            Direction::Southwest => "Southwest",
            Direction::West => "West",
            Direction::Northwest => "Northwest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Footwear {
    Nike,
    Adidas,
    Converse,
    Vans,
    Puma,
    Reebok,
    #[serde(rename = "New Balance")]
    NewBalance,
    Other,
}

impl Footwear {
    pub fn label(self) -> &'static str {
        match self {
            Footwear::Nike => "Nike",
            Footwear::Adidas => "Adidas",
            Footwear::Converse => "Converse",
            Footwear::Vans => "Vans",
            Footwear::Puma => "Puma",
            Footwear::Reebok => "Reebok",
            Footwear::NewBalance => "New Balance",
            Footwear::Other => "Other",
        }
    }
}

/// Weather the user says they are standing in. Display only, never enters the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Rainy,
    Cloudy,
    Foggy,
}

/// A validated calculation request. `date` and `time` are wall-clock values at `longitude`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowInput {
    pub height: f64,
    pub height_unit: HeightUnit,
    pub latitude: f64,
    pub longitude: f64,
    pub direction: Direction,
    pub footwear: Footwear,
    pub weather: WeatherCondition,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolarPosition {
    pub day_of_year: i32,
    pub declination: f64,
    pub equation_of_time: f64,
    pub standard_meridian: f64,
    pub local_solar_time: f64,
    pub hour_angle: f64,
    pub altitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShadowResult {
    pub shadow_exists: bool,
    pub length_in_feet: f64,
    pub planck_lengths: String,
    pub light_years: String,
    pub horse_units: f64,
    pub sun_altitude_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoulTrait {
    pub name: String,
    pub description: String,
    #[serde(rename = "icon")]
    pub icon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interpretation {
    pub title: String,
    pub description: String,
    pub traits: Vec<SoulTrait>,
}

/// Everything the display layer needs for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadowReading {
    pub input: ShadowInput,
    pub result: ShadowResult,
    pub interpretation: Interpretation,
}
