//! End-to-end scenarios over provider payloads.
//!
//! Each scenario parses JSON the way the front end receives it, scores the
//! request and checks the spoken summary byte for byte.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use skycoach_weather::{
    classify, extract_city, safety_alerts, score, summarize, Activity, ActivityRequest,
    AirQualitySnapshot, ForecastWindow, PhysicalCondition, RecommendationStatus,
    WeatherSnapshot,
};

/// Helper to build a current-weather payload
fn current_weather(overrides: serde_json::Value) -> WeatherSnapshot {
    let mut payload = serde_json::json!({
        "weather": [{"main": "Clear", "description": "clear sky"}],
        "main": {"temp": 21.4, "feels_like": 20.9, "humidity": 48, "pressure": 1017},
        "wind": {"speed": 4.1},
        "sys": {"country": "PT", "sunrise": 1718860000, "sunset": 1718913000},
        "visibility": 10000,
        "timezone": 3600,
        "name": "Lisbon"
    });
    if let (Some(base), Some(extra)) = (payload.as_object_mut(), overrides.as_object()) {
        for (key, value) in extra {
            base.insert(key.clone(), value.clone());
        }
    }
    WeatherSnapshot::from_provider_json(&payload.to_string()).unwrap()
}

fn air_quality(aqi: u8, components: serde_json::Value) -> AirQualitySnapshot {
    let payload = serde_json::json!({
        "list": [{"main": {"aqi": aqi}, "components": components}]
    });
    AirQualitySnapshot::from_provider_json(&payload.to_string())
        .unwrap()
        .unwrap()
}

fn forecast() -> ForecastWindow {
    let payload = serde_json::json!({
        "list": [
            {"dt": 1718884800, "main": {"temp": 19.6, "temp_min": 18.0, "temp_max": 20.1},
             "weather": [{"main": "Clouds", "description": "few clouds"}]},
            {"dt": 1718895600, "main": {"temp": 22.3, "temp_min": 21.0, "temp_max": 23.0},
             "weather": [{"main": "Clear", "description": "clear sky"}]}
        ],
        "city": {"timezone": 3600}
    });
    ForecastWindow::from_provider_json(&payload.to_string()).unwrap()
}

#[test]
fn test_ideal_running_scenario() {
    let weather = current_weather(serde_json::json!({
        "main": {"temp": 20.0, "humidity": 50},
        "wind": {"speed": 3.0}
    }));
    let air = air_quality(1, serde_json::json!({}));
    let request = ActivityRequest::new(Activity::Running, PhysicalCondition::Excellent);

    let result = score(Some(&weather), Some(&air), &request);

    assert_eq!(result.score, 100);
    assert!(result.cautions.is_empty());
    assert_eq!(classify(i32::from(result.score)).0, "Recommended");
}

#[test]
fn test_full_summary_golden() {
    let weather = current_weather(serde_json::json!({}));
    let air = air_quality(2, serde_json::json!({"pm2_5": 8.24, "o3": 68.66, "no": 0.1}));
    let forecast = forecast();
    let request = ActivityRequest::new(Activity::Running, PhysicalCondition::Good);

    let result = score(Some(&weather), Some(&air), &request);
    assert_eq!(result.score, 94);

    let text = summarize(Some(&weather), Some(&air), &result, &request, Some(&forecast));
    assert_eq!(
        text,
        "Complete weather summary for Lisbon, PT. \
         The current temperature is 21 degrees Celsius, feeling like 21 degrees. \
         The sky shows clear sky. \
         Humidity is 48 percent. \
         Wind is blowing at 4.1 meters per second. \
         Atmospheric pressure is 1017 hectopascals. \
         Sunrise was at 06:06 and sunset will be at 20:50. \
         Air quality is fair. \
         Pollutant levels are: PM 2.5 at 8.2 micrograms per cubic meter, \
         ozone at 68.7 micrograms per cubic meter. \
         For the coming hours, at 13:00, the temperature will be 20 degrees. \
         The recommendation for Running, considering your physical condition as Good, \
         is: Recommended, with a score of 94 out of 100 points. \
         Have a great day and enjoy your activities safely!"
    );
}

#[test]
fn test_dangerous_storm_scenario_golden() {
    let weather = current_weather(serde_json::json!({
        "name": "São Paulo",
        "sys": {"country": "BR"},
        "weather": [{"main": "Thunderstorm", "description": "thunderstorm with heavy rain"}],
        "main": {"temp": 31.2, "feels_like": 35.8, "humidity": 85, "pressure": 1008},
        "wind": {"speed": 11.0},
        "timezone": -10800
    }));
    let air = air_quality(4, serde_json::json!({}));
    let request = ActivityRequest::new(Activity::OutdoorRest, PhysicalCondition::Good);

    let result = score(Some(&weather), Some(&air), &request);
    assert_eq!(result.score, 0);
    assert_eq!(
        result.cautions,
        vec![
            "Storms are not safe for outdoor activities",
            "Very poor air quality - avoid outdoor activities",
            "Storms are dangerous - stay in a safe place",
        ]
    );
    assert_eq!(
        RecommendationStatus::classify(i32::from(result.score)),
        RecommendationStatus::NotRecommended
    );

    let text = summarize(Some(&weather), Some(&air), &result, &request, None);
    assert_eq!(
        text,
        "Complete weather summary for São Paulo, BR. \
         The current temperature is 31 degrees Celsius, feeling like 36 degrees. \
         The sky shows thunderstorm with heavy rain. \
         Humidity is 85 percent. \
         Wind is blowing at 11.0 meters per second. \
         Atmospheric pressure is 1008 hectopascals. \
         Air quality is poor. \
         The recommendation for Outdoor Rest, considering your physical condition as Good, \
         is: Not Recommended, with a score of 0 out of 100 points. \
         Specific guidance: Storms are not safe for outdoor activities. \
         Very poor air quality - avoid outdoor activities. \
         Storms are dangerous - stay in a safe place. \
         Remember to stay hydrated and wear sunscreen. \
         High humidity can cause discomfort, drink plenty of water. \
         Watch out for strong winds, avoid areas with tall trees. \
         Have a great day and enjoy your activities safely!"
    );

    let titles: Vec<&str> = safety_alerts(Some(&weather), Some(&air))
        .iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(titles, vec!["Very Poor Air Quality", "Thunderstorm"]);
}

#[test]
fn test_missing_weather_scenario() {
    let request = ActivityRequest::new(Activity::Running, PhysicalCondition::Excellent);
    let result = score(None, None, &request);
    assert_eq!(result.score, 0);
    assert_eq!(result.cautions, vec!["Weather data unavailable."]);
    assert_eq!(
        summarize(None, None, &result, &request, None),
        "Unable to retrieve weather data."
    );
}

#[test]
fn test_summary_is_deterministic() {
    let weather = current_weather(serde_json::json!({}));
    let air = air_quality(3, serde_json::json!({"pm2_5": 20.0, "o3": 90.0}));
    let forecast = forecast();
    let request = ActivityRequest::new(Activity::Cycling, PhysicalCondition::Sensitive);

    let first = score(Some(&weather), Some(&air), &request);
    let second = score(Some(&weather), Some(&air), &request);
    assert_eq!(first, second);
    assert_eq!(
        summarize(Some(&weather), Some(&air), &first, &request, Some(&forecast)),
        summarize(Some(&weather), Some(&air), &second, &request, Some(&forecast))
    );
}

#[test]
fn test_activity_strings_parsed_at_boundary() {
    let activity: Activity = "Outdoor Sports".parse().unwrap();
    let condition: PhysicalCondition = "delicate".parse().unwrap();
    assert!("Parkour".parse::<Activity>().is_err());

    let weather = current_weather(serde_json::json!({
        "weather": [{"main": "Drizzle", "description": "light drizzle"}]
    }));
    let result = score(
        Some(&weather),
        None,
        &ActivityRequest::new(activity, condition),
    );
    // (100 - 20) * 0.4
    assert_eq!(result.score, 32);
    assert!(result.cautions.is_empty());
}

#[test]
fn test_transcript_scenarios() {
    assert_eq!(
        extract_city("What's the weather in São Paulo?").as_deref(),
        Some("São Paulo")
    );
    assert_eq!(extract_city("the weather is"), None);
}
