//! Spoken-language summary of conditions and the activity recommendation.
//!
//! The output is a single paragraph meant for text-to-speech playback. For
//! fixed inputs it is byte-for-byte stable: clock times come from the
//! snapshot's own timestamps rendered in the snapshot's timezone offset,
//! never from the host clock or zone.

use chrono::{DateTime, Utc};

use crate::activity::ActivityRequest;
use crate::scoring::ScoreResult;
use crate::status::RecommendationStatus;
use crate::types::{local_time, AirQualitySnapshot, ForecastWindow, Pollutant, WeatherSnapshot};

pub const WEATHER_UNAVAILABLE: &str = "Unable to retrieve weather data.";

const CLOSING: &str = "Have a great day and enjoy your activities safely!";

const HOT_ADVICE: &str = "Remember to stay hydrated and wear sunscreen. ";
const COLD_ADVICE: &str = "Wear suitable clothing for the cold. ";
const HUMID_ADVICE: &str = "High humidity can cause discomfort, drink plenty of water. ";
const WIND_ADVICE: &str = "Watch out for strong winds, avoid areas with tall trees. ";

fn clock(at: DateTime<Utc>, offset_secs: i32) -> String {
    local_time(at, offset_secs).format("%H:%M").to_string()
}

/// Build the spoken summary for one scored activity request.
pub fn summarize(
    weather: Option<&WeatherSnapshot>,
    air_quality: Option<&AirQualitySnapshot>,
    result: &ScoreResult,
    request: &ActivityRequest,
    forecast: Option<&ForecastWindow>,
) -> String {
    let Some(weather) = weather else {
        return WEATHER_UNAVAILABLE.to_string();
    };

    let mut summary = String::new();

    summary.push_str(&format!("Complete weather summary for {}. ", weather.place()));

    match weather.feels_like {
        Some(feels_like) => summary.push_str(&format!(
            "The current temperature is {:.0} degrees Celsius, feeling like {:.0} degrees. ",
            weather.temperature, feels_like
        )),
        None => summary.push_str(&format!(
            "The current temperature is {:.0} degrees Celsius. ",
            weather.temperature
        )),
    }

    summary.push_str(&format!("The sky shows {}. ", weather.description));
    summary.push_str(&format!("Humidity is {} percent. ", weather.humidity));

    if let Some(wind) = weather.wind_speed {
        summary.push_str(&format!("Wind is blowing at {wind:.1} meters per second. "));
    }

    if let Some(pressure) = weather.pressure {
        summary.push_str(&format!("Atmospheric pressure is {pressure} hectopascals. "));
    }

    if let (Some(sunrise), Some(sunset)) = (weather.sunrise, weather.sunset) {
        summary.push_str(&format!(
            "Sunrise was at {} and sunset will be at {}. ",
            clock(sunrise, weather.timezone_offset),
            clock(sunset, weather.timezone_offset)
        ));
    }

    if let Some(aq) = air_quality {
        let label = aq.level().map_or("unknown", |l| l.label());
        summary.push_str(&format!("Air quality is {label}. "));

        if let (Some(pm25), Some(o3)) = (
            aq.concentration(Pollutant::Pm25),
            aq.concentration(Pollutant::O3),
        ) {
            summary.push_str(&format!(
                "Pollutant levels are: PM 2.5 at {pm25:.1} micrograms per cubic meter, \
                 ozone at {o3:.1} micrograms per cubic meter. "
            ));
        }
    }

    if let Some(next) = forecast.and_then(ForecastWindow::next) {
        summary.push_str(&format!(
            "For the coming hours, at {}, the temperature will be {:.0} degrees. ",
            clock(next.at, weather.timezone_offset),
            next.temperature
        ));
    }

    let status = RecommendationStatus::classify(i32::from(result.score));
    summary.push_str(&format!(
        "The recommendation for {}, considering your physical condition as {}, is: {}, \
         with a score of {} out of 100 points. ",
        request.activity,
        request.condition,
        status.label(),
        result.score
    ));

    if !result.cautions.is_empty() {
        summary.push_str(&format!(
            "Specific guidance: {}. ",
            result.cautions.join(". ")
        ));
    }

    if weather.temperature > 30.0 {
        summary.push_str(HOT_ADVICE);
    } else if weather.temperature < 10.0 {
        summary.push_str(COLD_ADVICE);
    }

    if weather.humidity > 80 {
        summary.push_str(HUMID_ADVICE);
    }

    if weather.wind_speed.is_some_and(|w| w > 10.0) {
        summary.push_str(WIND_ADVICE);
    }

    summary.push_str(CLOSING);

    tracing::debug!("Built spoken summary of {} characters", summary.len());
    summary
}
