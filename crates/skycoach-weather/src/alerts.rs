//! Safety alerts and banner notifications derived from current conditions.
//!
//! Unlike scoring these do not depend on the planned activity; they flag
//! conditions that are hazardous for anyone outdoors.

use serde::{Deserialize, Serialize};

use crate::types::{AirQualitySnapshot, WeatherCondition, WeatherSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Danger,
    Warning,
    Info,
}

/// One entry in the safety alerts panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SafetyAlert {
    pub severity: AlertSeverity,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

impl SafetyAlert {
    const fn new(
        severity: AlertSeverity,
        icon: &'static str,
        title: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            severity,
            icon,
            title,
            message,
        }
    }
}

const VERY_POOR_AIR: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Danger,
    "😷",
    "Very Poor Air Quality",
    "Avoid outdoor physical activity. Sensitive groups should stay indoors.",
);
const MODERATE_AIR: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Warning,
    "😟",
    "Moderate Air Quality",
    "Sensitive groups (children, the elderly, people with respiratory conditions) should reduce outdoor activity.",
);
const STORM: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Danger,
    "⛈️",
    "Thunderstorm",
    "Seek shelter immediately. Risk of lightning and strong winds.",
);
const RAIN: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Info,
    "🌧️",
    "Rain",
    "Take an umbrella. Surfaces may be slippery.",
);
const SNOW: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Info,
    "❄️",
    "Snow",
    "Dress appropriately. Watch out for slippery roads.",
);
const EXTREME_HEAT: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Danger,
    "🥵",
    "Extreme Heat",
    "Stay hydrated and avoid prolonged sun exposure. Risk of heatstroke.",
);
const INTENSE_COLD: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Warning,
    "🥶",
    "Intense Cold",
    "Wear layers. Risk of hypothermia with prolonged exposure.",
);
const STRONG_WINDS: SafetyAlert = SafetyAlert::new(
    AlertSeverity::Warning,
    "💨",
    "Strong Winds",
    "Watch out for flying objects and tree branches. Avoid wooded areas.",
);

pub const AIR_QUALITY_NOTICE: &str =
    "🚨 Air Quality Alert: Air quality is very poor. Avoid outdoor activities.";
pub const STORM_NOTICE: &str = "⛈️ Storm Alert: Dangerous conditions. Seek shelter immediately.";
pub const HEAT_NOTICE: &str =
    "🔥 Extreme Heat Alert: Very high temperature. Avoid prolonged sun exposure.";
pub const COLD_NOTICE: &str = "🥶 Extreme Cold Alert: Very low temperature. Dress warmly.";
pub const WIND_NOTICE: &str =
    "💨 Strong Wind Alert: Watch out for loose objects and avoid areas with trees.";

/// Detailed alerts panel, most urgent categories first
pub fn safety_alerts(
    weather: Option<&WeatherSnapshot>,
    air_quality: Option<&AirQualitySnapshot>,
) -> Vec<SafetyAlert> {
    let mut alerts = Vec::new();

    match air_quality.map(|aq| aq.aqi) {
        Some(aqi) if aqi >= 4 => alerts.push(VERY_POOR_AIR),
        Some(3) => alerts.push(MODERATE_AIR),
        _ => {}
    }

    if let Some(weather) = weather {
        match weather.condition {
            WeatherCondition::Thunderstorm => alerts.push(STORM),
            WeatherCondition::Rain => alerts.push(RAIN),
            WeatherCondition::Snow => alerts.push(SNOW),
            _ => {}
        }

        if weather.temperature > 35.0 {
            alerts.push(EXTREME_HEAT);
        } else if weather.temperature < 0.0 {
            alerts.push(INTENSE_COLD);
        }

        if weather.wind_speed.is_some_and(|w| w > 15.0) {
            alerts.push(STRONG_WINDS);
        }
    }

    alerts
}

/// Short banner lines shown at the top of the page
pub fn notifications(
    weather: Option<&WeatherSnapshot>,
    air_quality: Option<&AirQualitySnapshot>,
) -> Vec<&'static str> {
    let mut notices = Vec::new();

    if air_quality.is_some_and(|aq| aq.aqi >= 4) {
        notices.push(AIR_QUALITY_NOTICE);
    }

    if let Some(weather) = weather {
        if weather.condition == WeatherCondition::Thunderstorm {
            notices.push(STORM_NOTICE);
        }

        if weather.temperature > 35.0 {
            notices.push(HEAT_NOTICE);
        } else if weather.temperature < -5.0 {
            notices.push(COLD_NOTICE);
        }

        if weather.wind_speed.is_some_and(|w| w > 12.0) {
            notices.push(WIND_NOTICE);
        }
    }

    notices
}
