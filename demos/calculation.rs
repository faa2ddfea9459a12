use chrono::TimeZone;
use chrono_tz::America::New_York;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shadow_soul::angles::solar_position_at;
use shadow_soul::{calculate, ShadowRequest, WeatherApiConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shadow_soul=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let latitude = 40.7128;
    let longitude = -74.0060;

    let body = r#"{
        "height": 6, "heightUnit": "ft",
        "latitude": 40.7128, "longitude": -74.0060,
        "direction": "North", "shoeBrand": "Converse", "weather": "sunny",
        "date": "2024-06-21", "time": "12:00"
    }"#;
    let request: ShadowRequest = serde_json::from_str(body)?;
    let input = request.validate()?;
    let reading = calculate(&input);

    let dt = New_York
        .with_ymd_and_hms(2024, 6, 21, 12, 0, 0)
        .single()
        .ok_or_else(|| anyhow::anyhow!("ambiguous local time"))?;
    let pos = solar_position_at(latitude, longitude, &dt);

    println!("=== Shadow Calculation Example ===");
    println!(
        "Location: New York, NY ({:.4}°N, {:.4}°W)",
        latitude, -longitude
    );
    println!("Date/Time: {}", dt);
    println!();
    println!("--- Solar Position ---");
    println!("Day of year: {}", pos.day_of_year);
    println!("Declination: {:.2}°", pos.declination);
    println!("Equation of Time: {:.2} minutes", pos.equation_of_time);
    println!("Standard Meridian: {:.0}°", pos.standard_meridian);
    println!("Local Solar Time: {:.2} hours", pos.local_solar_time);
    println!("Hour Angle: {:.2}°", pos.hour_angle);
    println!("Altitude: {:.2}°", pos.altitude);
    println!();
    println!("--- Shadow ---");
    println!("{}", reading.result);
    println!("Drawn width: {:.0}px", reading.result.visual_width());
    println!();
    println!("--- Soul Silhouette ---");
    println!("{}", reading.interpretation.share_text());
    for t in &reading.interpretation.traits {
        println!("  [{}] {}: {}", t.icon_key, t.name, t.description);
    }
    println!();

    let config = WeatherApiConfig::from_env();
    println!("Weather lookup: {}", config.weather_url(Some(latitude), Some(longitude))?);
    println!("Geocode lookup: {}", config.geocode_url("New York")?);
    Ok(())
}
