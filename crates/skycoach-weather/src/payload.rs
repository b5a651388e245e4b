//! Adapters from OpenWeatherMap-shaped JSON payloads to snapshot types.
//!
//! Fetching is done by the caller; these only parse text already in memory.
//! Fields not listed here are ignored.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::types::{
    AirQualitySnapshot, ForecastEntry, ForecastWindow, Pollutant, WeatherCondition,
    WeatherError, WeatherSnapshot,
};

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: Option<String>,
    #[serde(default)]
    sys: SysSection,
    main: MainSection,
    #[serde(default)]
    wind: WindSection,
    #[serde(default)]
    weather: Vec<ConditionSection>,
    visibility: Option<u32>,
    /// Seconds east of UTC
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Default, Deserialize)]
struct SysSection {
    country: Option<String>,
    sunrise: Option<i64>,
    sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct MainSection {
    temp: f64,
    feels_like: Option<f64>,
    humidity: u8,
    pressure: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
struct WindSection {
    speed: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ConditionSection {
    #[serde(default)]
    main: WeatherCondition,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct AirPollutionResponse {
    #[serde(default)]
    list: Vec<AirPollutionEntry>,
}

#[derive(Debug, Deserialize)]
struct AirPollutionEntry {
    main: AqiSection,
    #[serde(default)]
    components: BTreeMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct AqiSection {
    aqi: u8,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastItem>,
    city: Option<CitySection>,
}

#[derive(Debug, Deserialize)]
struct CitySection {
    #[serde(default)]
    timezone: i32,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: ForecastMain,
    #[serde(default)]
    weather: Vec<ConditionSection>,
}

#[derive(Debug, Deserialize)]
struct ForecastMain {
    temp: f64,
    temp_min: Option<f64>,
    temp_max: Option<f64>,
}

fn instant(epoch_secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(epoch_secs, 0)
}

/// First listed condition, or an unknown one when the list is empty
fn primary(conditions: Vec<ConditionSection>) -> (WeatherCondition, String) {
    conditions
        .into_iter()
        .next()
        .map(|c| (c.main, c.description))
        .unwrap_or_default()
}

impl From<CurrentResponse> for WeatherSnapshot {
    fn from(raw: CurrentResponse) -> Self {
        let (condition, description) = primary(raw.weather);
        Self {
            location: raw.name.filter(|n| !n.is_empty()),
            country: raw.sys.country.filter(|c| !c.is_empty()),
            temperature: raw.main.temp,
            feels_like: raw.main.feels_like,
            humidity: raw.main.humidity,
            wind_speed: raw.wind.speed,
            condition,
            description,
            pressure: raw.main.pressure,
            sunrise: raw.sys.sunrise.and_then(instant),
            sunset: raw.sys.sunset.and_then(instant),
            visibility: raw.visibility,
            timezone_offset: raw.timezone,
        }
    }
}

impl WeatherSnapshot {
    /// Parse a current-weather payload.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Payload`] if the text is not JSON or lacks
    /// `main.temp` / `main.humidity`.
    pub fn from_provider_json(json: &str) -> Result<Self, WeatherError> {
        let raw: CurrentResponse = serde_json::from_str(json)?;
        Ok(raw.into())
    }
}

impl AirQualitySnapshot {
    /// Parse an air-pollution payload. Only the first list entry is used;
    /// an empty list means no reading.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Payload`] if the text is not valid JSON of the
    /// expected shape.
    pub fn from_provider_json(json: &str) -> Result<Option<Self>, WeatherError> {
        let raw: AirPollutionResponse = serde_json::from_str(json)?;
        let Some(entry) = raw.list.into_iter().next() else {
            return Ok(None);
        };

        let components = entry
            .components
            .into_iter()
            .filter_map(|(key, value)| Pollutant::from_key(&key).map(|p| (p, value)))
            .collect();

        Ok(Some(Self {
            aqi: entry.main.aqi,
            components,
        }))
    }
}

impl ForecastWindow {
    /// Parse a multi-step forecast payload, keeping provider order.
    ///
    /// # Errors
    ///
    /// Returns [`WeatherError::Payload`] if the text is not valid JSON of the
    /// expected shape.
    pub fn from_provider_json(json: &str) -> Result<Self, WeatherError> {
        let raw: ForecastResponse = serde_json::from_str(json)?;
        let entries = raw
            .list
            .into_iter()
            .filter_map(|item| {
                let at = instant(item.dt)?;
                let (condition, description) = primary(item.weather);
                Some(ForecastEntry {
                    at,
                    temperature: item.main.temp,
                    temp_min: item.main.temp_min.unwrap_or(item.main.temp),
                    temp_max: item.main.temp_max.unwrap_or(item.main.temp),
                    condition,
                    description,
                })
            })
            .collect();

        Ok(Self {
            entries,
            timezone_offset: raw.city.map_or(0, |c| c.timezone),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_weather_payload() {
        let json = r#"{
            "coord": {"lon": -9.13, "lat": 38.71},
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky", "icon": "01d"}],
            "main": {"temp": 21.4, "feels_like": 20.9, "humidity": 48, "pressure": 1017},
            "visibility": 10000,
            "wind": {"speed": 4.1, "deg": 320},
            "sys": {"country": "PT", "sunrise": 1718860000, "sunset": 1718913000},
            "timezone": 3600,
            "name": "Lisbon"
        }"#;
        let w = WeatherSnapshot::from_provider_json(json).unwrap();
        assert_eq!(w.location.as_deref(), Some("Lisbon"));
        assert_eq!(w.country.as_deref(), Some("PT"));
        assert_eq!(w.temperature, 21.4);
        assert_eq!(w.feels_like, Some(20.9));
        assert_eq!(w.humidity, 48);
        assert_eq!(w.wind_speed, Some(4.1));
        assert_eq!(w.condition, WeatherCondition::Clear);
        assert_eq!(w.description, "clear sky");
        assert_eq!(w.pressure, Some(1017));
        assert_eq!(w.visibility_km(), Some(10.0));
        assert_eq!(w.timezone_offset, 3600);
        assert_eq!(w.sunrise.map(|t| t.timestamp()), Some(1_718_860_000));
    }

    #[test]
    fn test_missing_optional_fields_stay_missing() {
        let json = r#"{"main": {"temp": 5.0, "humidity": 90}}"#;
        let w = WeatherSnapshot::from_provider_json(json).unwrap();
        assert_eq!(w.wind_speed, None);
        assert_eq!(w.pressure, None);
        assert_eq!(w.sunrise, None);
        assert_eq!(w.condition, WeatherCondition::Other);
        assert_eq!(w.location, None);
    }

    #[test]
    fn test_missing_temperature_is_an_error() {
        let json = r#"{"main": {"humidity": 90}}"#;
        assert!(matches!(
            WeatherSnapshot::from_provider_json(json),
            Err(WeatherError::Payload(_))
        ));
        assert!(WeatherSnapshot::from_provider_json("not json").is_err());
    }

    #[test]
    fn test_air_pollution_payload() {
        let json = r#"{
            "coord": {"lon": -9.13, "lat": 38.71},
            "list": [{
                "main": {"aqi": 3},
                "components": {"co": 201.9, "no": 0.02, "no2": 0.77, "o3": 68.66,
                               "so2": 0.64, "pm2_5": 0.5, "pm10": 0.54, "nh3": 0.12},
                "dt": 1605182400
            }]
        }"#;
        let aq = AirQualitySnapshot::from_provider_json(json).unwrap().unwrap();
        assert_eq!(aq.aqi, 3);
        assert_eq!(aq.components.len(), 7);
        assert_eq!(aq.concentration(Pollutant::O3), Some(68.66));
        assert_eq!(aq.concentration(Pollutant::Pm25), Some(0.5));
    }

    #[test]
    fn test_empty_air_pollution_list() {
        let aq = AirQualitySnapshot::from_provider_json(r#"{"list": []}"#).unwrap();
        assert!(aq.is_none());
    }

    #[test]
    fn test_forecast_payload() {
        let json = r#"{
            "cnt": 2,
            "list": [
                {"dt": 1718884800, "main": {"temp": 19.6, "temp_min": 18.0, "temp_max": 20.1},
                 "weather": [{"main": "Clouds", "description": "few clouds"}],
                 "dt_txt": "2024-06-20 12:00:00"},
                {"dt": 1718895600, "main": {"temp": 22.3},
                 "weather": [{"main": "Rain", "description": "light rain"}]}
            ],
            "city": {"name": "Lisbon", "timezone": 3600}
        }"#;
        let window = ForecastWindow::from_provider_json(json).unwrap();
        assert_eq!(window.timezone_offset, 3600);
        assert_eq!(window.entries.len(), 2);
        let next = window.next().unwrap();
        assert_eq!(next.temperature, 19.6);
        assert_eq!(next.condition, WeatherCondition::Clouds);
        assert_eq!(window.entries[1].temp_max, 22.3);
        assert_eq!(window.entries[1].condition, WeatherCondition::Rain);
    }
}
