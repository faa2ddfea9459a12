use chrono::{NaiveDate, NaiveTime};
use serde_json::json;

use shadow_soul::input::*;
use shadow_soul::types::*;

fn request() -> serde_json::Value {
    json!({
        "height": 170,
        "heightUnit": "cm",
        "latitude": 51.5074,
        "longitude": -0.1278,
        "direction": "Southwest",
        "shoeBrand": "New Balance",
        "weather": "cloudy",
        "date": "2025-09-23",
        "time": "08:15"
    })
}

fn parse(v: serde_json::Value) -> ShadowRequest {
    serde_json::from_value(v).unwrap()
}

fn with(field: &str, value: serde_json::Value) -> ShadowRequest {
    let mut v = request();
    v[field] = value;
    parse(v)
}

#[test]
fn test_valid_request() {
    let input = parse(request()).validate().unwrap();
    assert_eq!(input.height, 170.0);
    assert_eq!(input.height_unit, HeightUnit::Centimeter);
    assert_eq!(input.direction, Direction::Southwest);
    assert_eq!(input.footwear, Footwear::NewBalance);
    assert_eq!(input.weather, WeatherCondition::Cloudy);
    assert_eq!(input.date, NaiveDate::from_ymd_opt(2025, 9, 23).unwrap());
    assert_eq!(input.time, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
}

#[test]
fn test_weather_defaults_to_sunny() {
    let mut v = request();
    v.as_object_mut().unwrap().remove("weather");
    assert_eq!(parse(v).validate().unwrap().weather, WeatherCondition::Sunny);
}

#[test]
fn test_unknown_enum_values_rejected() {
    for (field, bad) in [
        ("heightUnit", "inches"),
        ("direction", "Up"),
        ("shoeBrand", "Crocs"),
        ("weather", "snowy"),
    ] {
        let mut v = request();
        v[field] = json!(bad);
        assert!(
            serde_json::from_value::<ShadowRequest>(v).is_err(),
            "{} = {} accepted",
            field,
            bad
        );
    }
}

#[test]
fn test_height_must_be_positive() {
    assert_eq!(
        with("height", json!(0)).validate(),
        Err(InputError::NonPositiveHeight(0.0))
    );
    assert_eq!(
        with("height", json!(-5.5)).validate(),
        Err(InputError::NonPositiveHeight(-5.5))
    );
}

#[test]
fn test_coordinate_ranges() {
    assert_eq!(
        with("latitude", json!(90.5)).validate(),
        Err(InputError::LatitudeOutOfRange(90.5))
    );
    assert_eq!(
        with("longitude", json!(-180.01)).validate(),
        Err(InputError::LongitudeOutOfRange(-180.01))
    );
    assert!(with("latitude", json!(-90)).validate().is_ok());
    assert!(with("longitude", json!(180)).validate().is_ok());
}

#[test]
fn test_bad_date_and_time() {
    assert_eq!(
        with("date", json!("2025-02-30")).validate(),
        Err(InputError::InvalidDate("2025-02-30".to_string()))
    );
    assert_eq!(
        with("date", json!("23/09/2025")).validate(),
        Err(InputError::InvalidDate("23/09/2025".to_string()))
    );
    assert_eq!(
        with("time", json!("25:00")).validate(),
        Err(InputError::InvalidTime("25:00".to_string()))
    );
}

#[test]
fn test_time_with_seconds_accepted() {
    let input = with("time", json!("08:15:42")).validate().unwrap();
    assert_eq!(input.time, NaiveTime::from_hms_opt(8, 15, 42).unwrap());
}

#[test]
fn test_error_messages() {
    assert_eq!(
        InputError::NonPositiveHeight(-1.0).to_string(),
        "Height must be positive, got -1"
    );
    assert_eq!(
        InputError::InvalidTime("noon".to_string()).to_string(),
        "Invalid time \"noon\", expected HH:MM"
    );
}

#[test]
fn test_request_roundtrips_field_names() {
    let req = parse(request());
    let back = serde_json::to_value(&req).unwrap();
    assert_eq!(back["shoeBrand"], "New Balance");
    assert_eq!(back["heightUnit"], "cm");
    assert_eq!(back["weather"], "cloudy");
}
