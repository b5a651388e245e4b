//! Plain-text conditions card: the current reading and the air-quality
//! panel, one line per metric.

use crate::types::{AirQualitySnapshot, Pollutant, WeatherSnapshot};

/// Pollutants shown on the air-quality panel, in display order
pub const PANEL_POLLUTANTS: [Pollutant; 3] = [Pollutant::Pm25, Pollutant::O3, Pollutant::Co];

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lines for the current-weather card. Readings the provider left out are
/// skipped, as is a zero visibility.
pub fn weather_card(weather: &WeatherSnapshot) -> Vec<String> {
    let mut lines = vec![weather.place()];

    let condition = weather.condition.description();
    if weather.description.is_empty() {
        lines.push(condition.to_string());
    } else {
        lines.push(format!("{} ({condition})", capitalize(&weather.description)));
    }

    match weather.feels_like {
        Some(feels_like) => lines.push(format!(
            "{:.0}°C, feels like {feels_like:.0}°C",
            weather.temperature
        )),
        None => lines.push(format!("{:.0}°C", weather.temperature)),
    }

    lines.push(format!("Humidity: {}%", weather.humidity));
    if let Some(wind) = weather.wind_speed {
        lines.push(format!("Wind: {wind:.1} m/s"));
    }
    if let Some(pressure) = weather.pressure {
        lines.push(format!("Pressure: {pressure} hPa"));
    }
    if let Some(km) = weather.visibility_km().filter(|km| *km > 0.0) {
        lines.push(format!("Visibility: {km:.1} km"));
    }

    lines
}

/// Lines for the air-quality panel
pub fn air_quality_card(air_quality: &AirQualitySnapshot) -> Vec<String> {
    let label = air_quality.level().map_or("unknown", |l| l.label());
    let mut lines = vec![format!("Air quality: {label} (index {})", air_quality.aqi)];

    for pollutant in PANEL_POLLUTANTS {
        if let Some(value) = air_quality.concentration(pollutant) {
            lines.push(format!("{}: {value:.1} µg/m³", pollutant.display_name()));
        }
    }

    lines
}
