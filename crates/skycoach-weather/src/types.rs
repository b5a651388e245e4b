use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

/// Primary weather condition tag as reported by the provider (`weather[0].main`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    Clear,
    Clouds,
    Rain,
    Drizzle,
    Thunderstorm,
    Snow,
    Mist,
    Smoke,
    Haze,
    Dust,
    Fog,
    Sand,
    Ash,
    Squall,
    Tornado,
    /// Any tag this crate does not know about
    #[default]
    #[serde(other)]
    Other,
}

impl WeatherCondition {
    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Clouds => "Clouds",
            Self::Rain => "Rain",
            Self::Drizzle => "Drizzle",
            Self::Thunderstorm => "Thunderstorm",
            Self::Snow => "Snow",
            Self::Mist => "Mist",
            Self::Smoke => "Smoke",
            Self::Haze => "Haze",
            Self::Dust => "Dust",
            Self::Fog => "Fog",
            Self::Sand => "Sand",
            Self::Ash => "Ash",
            Self::Squall => "Squall",
            Self::Tornado => "Tornado",
            Self::Other => "Unknown",
        }
    }

    /// Precipitation that rules out most outdoor sports
    pub fn is_severe_precipitation(&self) -> bool {
        matches!(self, Self::Rain | Self::Thunderstorm | Self::Snow)
    }

    /// Light precipitation or reduced visibility
    pub fn is_light_obstruction(&self) -> bool {
        matches!(self, Self::Drizzle | Self::Mist)
    }
}

/// Point-in-time reading of current weather conditions.
///
/// Temperature and humidity are always present. Everything else may be
/// missing from the provider payload and is kept as `None` rather than zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Option<String>,
    pub country: Option<String>,
    /// Degrees Celsius
    pub temperature: f64,
    pub feels_like: Option<f64>,
    /// Relative humidity, 0-100
    pub humidity: u8,
    /// Metres per second
    pub wind_speed: Option<f64>,
    #[serde(default)]
    pub condition: WeatherCondition,
    #[serde(default)]
    pub description: String,
    /// Hectopascals
    pub pressure: Option<u32>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    /// Metres
    pub visibility: Option<u32>,
    /// Seconds east of UTC for the place the reading belongs to
    #[serde(default)]
    pub timezone_offset: i32,
}

impl WeatherSnapshot {
    /// Minimal snapshot with only the mandatory readings filled in
    pub fn new(temperature: f64, humidity: u8) -> Self {
        Self {
            location: None,
            country: None,
            temperature,
            feels_like: None,
            humidity,
            wind_speed: None,
            condition: WeatherCondition::default(),
            description: String::new(),
            pressure: None,
            sunrise: None,
            sunset: None,
            visibility: None,
            timezone_offset: 0,
        }
    }

    /// "City, CC", or a generic phrase when the provider gave no name
    pub fn place(&self) -> String {
        match (&self.location, &self.country) {
            (Some(city), Some(country)) => format!("{city}, {country}"),
            (Some(city), None) => city.clone(),
            (None, _) => "your location".to_string(),
        }
    }

    /// Visibility in kilometres, if reported
    pub fn visibility_km(&self) -> Option<f64> {
        self.visibility.map(|m| f64::from(m) / 1000.0)
    }
}

/// Pollutants tracked by the air-quality provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Pollutant {
    #[serde(rename = "pm2_5")]
    Pm25,
    #[serde(rename = "pm10")]
    Pm10,
    #[serde(rename = "no2")]
    No2,
    #[serde(rename = "o3")]
    O3,
    #[serde(rename = "co")]
    Co,
    #[serde(rename = "so2")]
    So2,
    #[serde(rename = "nh3")]
    Nh3,
}

impl Pollutant {
    /// Map a provider component key (`pm2_5`, `o3`, ...) to a pollutant
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "pm2_5" => Some(Self::Pm25),
            "pm10" => Some(Self::Pm10),
            "no2" => Some(Self::No2),
            "o3" => Some(Self::O3),
            "co" => Some(Self::Co),
            "so2" => Some(Self::So2),
            "nh3" => Some(Self::Nh3),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pm25 => "PM2.5",
            Self::Pm10 => "PM10",
            Self::No2 => "NO2",
            Self::O3 => "O3",
            Self::Co => "CO",
            Self::So2 => "SO2",
            Self::Nh3 => "NH3",
        }
    }
}

/// Qualitative reading of the 1-5 air-quality index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityLevel {
    Good,
    Fair,
    Moderate,
    Poor,
    VeryPoor,
}

impl AirQualityLevel {
    pub fn from_index(aqi: u8) -> Option<Self> {
        match aqi {
            1 => Some(Self::Good),
            2 => Some(Self::Fair),
            3 => Some(Self::Moderate),
            4 => Some(Self::Poor),
            5 => Some(Self::VeryPoor),
            _ => None,
        }
    }

    /// Lowercase label used in spoken summaries
    pub fn label(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Moderate => "moderate",
            Self::Poor => "poor",
            Self::VeryPoor => "very poor",
        }
    }
}

/// Point-in-time air-quality reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualitySnapshot {
    /// Ordinal index, 1 = best, 5 = worst
    pub aqi: u8,
    /// Concentrations in µg/m³
    #[serde(default)]
    pub components: BTreeMap<Pollutant, f64>,
}

impl AirQualitySnapshot {
    pub fn new(aqi: u8) -> Self {
        Self {
            aqi,
            components: BTreeMap::new(),
        }
    }

    pub fn with_component(mut self, pollutant: Pollutant, concentration: f64) -> Self {
        self.components.insert(pollutant, concentration);
        self
    }

    pub fn level(&self) -> Option<AirQualityLevel> {
        AirQualityLevel::from_index(self.aqi)
    }

    pub fn concentration(&self, pollutant: Pollutant) -> Option<f64> {
        self.components.get(&pollutant).copied()
    }
}

/// One future reading in a forecast window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub at: DateTime<Utc>,
    pub temperature: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub condition: WeatherCondition,
    #[serde(default)]
    pub description: String,
}

/// Ordered sequence of future readings, nearest first
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub entries: Vec<ForecastEntry>,
    /// Seconds east of UTC for the forecast location
    #[serde(default)]
    pub timezone_offset: i32,
}

impl ForecastWindow {
    /// Nearest-future entry
    pub fn next(&self) -> Option<&ForecastEntry> {
        self.entries.first()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render an instant in the zone `offset_secs` east of UTC.
///
/// Offsets outside chrono's accepted range fall back to UTC.
pub fn local_time(at: DateTime<Utc>, offset_secs: i32) -> DateTime<FixedOffset> {
    let offset = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
    at.with_timezone(&offset)
}

/// Errors raised at the crate boundary
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Unknown activity: {0}")]
    UnknownActivity(String),
    #[error("Unknown physical condition: {0}")]
    UnknownCondition(String),
    #[error("Payload error: {0}")]
    Payload(#[from] serde_json::Error),
}
