pub mod angles;
pub mod input;
pub mod interpretation;
pub mod shadow;
pub mod types;
pub mod weather;

pub use angles::{
    day_of_year, decimal_hour, deg_to_rad, equation_of_time, hour_angle, intermediate_angle_b,
    local_solar_time, rad_to_deg, solar_altitude, solar_declination, solar_position,
    solar_position_at, standard_meridian, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use input::{InputError, ShadowRequest};

pub use interpretation::{select, Band};

pub use shadow::{
    compute, format_exponential, shadow_at_altitude, shadow_length, MIN_SHADOW_ALTITUDE,
};

pub use types::{
    Direction, Footwear, HeightUnit, Interpretation, ShadowInput, ShadowReading, ShadowResult,
    SolarPosition, SoulTrait, WeatherCondition,
};

pub use weather::{GeoLocation, WeatherApiConfig, WeatherError, WeatherReport};

/// Shadow first, then the reading of it. The interpretation only sees the computed length.
pub fn calculate(input: &ShadowInput) -> ShadowReading {
    let result = shadow::compute(input);
    let interpretation =
        interpretation::select(result.length_in_feet, input.direction, input.footwear);
    tracing::info!(
        shadow_exists = result.shadow_exists,
        length_ft = result.length_in_feet,
        title = %interpretation.title,
        "shadow reading"
    );
    ShadowReading {
        input: *input,
        result,
        interpretation,
    }
}
