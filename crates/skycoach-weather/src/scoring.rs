//! Activity suitability scoring.
//!
//! A score starts at 100 and goes through four stages in a fixed order:
//! the activity's own rule block, the physical-condition multiplier, the
//! air-quality penalty and the general weather penalty. Cautions are kept in
//! the order the stages append them.
//!
//! The general weather penalty is applied even when the activity block already
//! penalised the same condition (rain during outdoor sports is charged twice).
//! That double charge is long-standing observed behaviour and is kept on purpose.

use serde::{Deserialize, Serialize};

use crate::activity::{Activity, ActivityRequest};
use crate::types::{AirQualitySnapshot, WeatherCondition, WeatherSnapshot};

/// Caution texts attached to a score
pub mod cautions {
    pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable.";

    pub const RUNNING_EXTREME_TEMPERATURE: &str = "Extreme temperature for running";
    pub const RUNNING_HIGH_HUMIDITY: &str = "High humidity may cause discomfort";
    pub const RUNNING_STRONG_WIND: &str = "Strong winds may make running harder";
    pub const WALKING_TEMPERATURE: &str = "Temperature not ideal for long walks";
    pub const CYCLING_STRONG_WIND: &str = "Winds too strong for safe cycling";
    pub const SPORTS_BAD_WEATHER: &str = "Weather conditions unsuitable for sports";
    pub const REST_STORM: &str = "Storms are not safe for outdoor activities";

    pub const AIR_VERY_POOR: &str = "Very poor air quality - avoid outdoor activities";
    pub const AIR_MODERATE: &str = "Moderate air quality - sensitive groups should take care";

    pub const THUNDERSTORM: &str = "Storms are dangerous - stay in a safe place";
    pub const RAIN: &str = "Rain can make activities uncomfortable or dangerous";
    pub const SNOW: &str = "Snow can make movement difficult";
}

const BASE_SCORE: f64 = 100.0;
const MAX_SCORE: f64 = 100.0;

/// Index used when no air-quality reading is available (best case)
const DEFAULT_AQI: u8 = 1;

/// Outcome of scoring one activity request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreResult {
    /// 0-100
    pub score: u8,
    /// In the order the rules produced them
    pub cautions: Vec<String>,
}

/// Running total while the rules are evaluated
#[derive(Debug)]
struct Tally {
    score: f64,
    cautions: Vec<String>,
}

impl Tally {
    fn new() -> Self {
        Self {
            score: BASE_SCORE,
            cautions: Vec::new(),
        }
    }

    fn adjust(&mut self, delta: f64) {
        tracing::trace!(delta, "Score adjustment");
        self.score += delta;
    }

    fn adjust_with_caution(&mut self, delta: f64, caution: &str) {
        self.adjust(delta);
        self.cautions.push(caution.to_string());
    }

    fn finish(self) -> ScoreResult {
        // Truncation, not rounding
        let score = self.score.clamp(0.0, MAX_SCORE) as u8;
        ScoreResult {
            score,
            cautions: self.cautions,
        }
    }
}

/// Rule block evaluated for a single activity
type ActivityRule = fn(&WeatherSnapshot, &mut Tally);

fn rule_for(activity: Activity) -> ActivityRule {
    match activity {
        Activity::Running => running,
        Activity::Walking => walking,
        Activity::Cycling => cycling,
        Activity::OutdoorSports => outdoor_sports,
        Activity::LightExercises => light_exercises,
        Activity::OutdoorRest => outdoor_rest,
    }
}

fn wind_above(weather: &WeatherSnapshot, limit: f64) -> bool {
    weather.wind_speed.is_some_and(|w| w > limit)
}

fn running(weather: &WeatherSnapshot, tally: &mut Tally) {
    let t = weather.temperature;
    if (15.0..=25.0).contains(&t) {
        tally.adjust(10.0);
    } else if (10.0..15.0).contains(&t) || (t > 25.0 && t <= 30.0) {
        tally.adjust(-10.0);
    } else if t < 5.0 || t > 35.0 {
        tally.adjust_with_caution(-30.0, cautions::RUNNING_EXTREME_TEMPERATURE);
    }

    if weather.humidity > 80 {
        tally.adjust_with_caution(-20.0, cautions::RUNNING_HIGH_HUMIDITY);
    }

    if wind_above(weather, 8.0) {
        tally.adjust_with_caution(-15.0, cautions::RUNNING_STRONG_WIND);
    }
}

fn walking(weather: &WeatherSnapshot, tally: &mut Tally) {
    let t = weather.temperature;
    if (10.0..=30.0).contains(&t) {
        tally.adjust(5.0);
    } else if t < 0.0 || t > 35.0 {
        tally.adjust_with_caution(-20.0, cautions::WALKING_TEMPERATURE);
    }
}

fn cycling(weather: &WeatherSnapshot, tally: &mut Tally) {
    if wind_above(weather, 10.0) {
        tally.adjust_with_caution(-25.0, cautions::CYCLING_STRONG_WIND);
    } else if wind_above(weather, 5.0) {
        tally.adjust(-10.0);
    }

    let t = weather.temperature;
    if (12.0..=28.0).contains(&t) {
        tally.adjust(8.0);
    } else if t < 5.0 || t > 32.0 {
        tally.adjust(-25.0);
    }
}

fn outdoor_sports(weather: &WeatherSnapshot, tally: &mut Tally) {
    if weather.condition.is_severe_precipitation() {
        tally.adjust_with_caution(-40.0, cautions::SPORTS_BAD_WEATHER);
    } else if weather.condition.is_light_obstruction() {
        tally.adjust(-20.0);
    }
}

fn light_exercises(weather: &WeatherSnapshot, tally: &mut Tally) {
    let t = weather.temperature;
    if t < -5.0 || t > 38.0 {
        tally.adjust(-15.0);
    }
    if weather.humidity > 90 {
        tally.adjust(-10.0);
    }
}

fn outdoor_rest(weather: &WeatherSnapshot, tally: &mut Tally) {
    let t = weather.temperature;
    if weather.condition == WeatherCondition::Thunderstorm {
        tally.adjust_with_caution(-30.0, cautions::REST_STORM);
    } else if t < -10.0 || t > 40.0 {
        tally.adjust(-10.0);
    }
}

fn apply_air_quality(aqi: u8, tally: &mut Tally) {
    if aqi >= 4 {
        tally.adjust_with_caution(-40.0, cautions::AIR_VERY_POOR);
    } else if aqi == 3 {
        tally.adjust_with_caution(-20.0, cautions::AIR_MODERATE);
    } else if aqi >= 2 {
        tally.adjust(-5.0);
    }
}

fn apply_weather_condition(condition: WeatherCondition, tally: &mut Tally) {
    match condition {
        WeatherCondition::Thunderstorm => tally.adjust_with_caution(-50.0, cautions::THUNDERSTORM),
        WeatherCondition::Rain => tally.adjust_with_caution(-25.0, cautions::RAIN),
        WeatherCondition::Snow => tally.adjust_with_caution(-20.0, cautions::SNOW),
        _ => {}
    }
}

/// Score how suitable current conditions are for the requested activity.
///
/// Without a weather reading the result is a score of 0 with a single
/// "unavailable" caution. A missing air-quality reading counts as index 1.
pub fn score(
    weather: Option<&WeatherSnapshot>,
    air_quality: Option<&AirQualitySnapshot>,
    request: &ActivityRequest,
) -> ScoreResult {
    let Some(weather) = weather else {
        return ScoreResult {
            score: 0,
            cautions: vec![cautions::WEATHER_UNAVAILABLE.to_string()],
        };
    };

    let aqi = air_quality.map_or(DEFAULT_AQI, |aq| aq.aqi);
    let mut tally = Tally::new();

    rule_for(request.activity)(weather, &mut tally);
    tally.score *= request.condition.multiplier();
    apply_air_quality(aqi, &mut tally);
    apply_weather_condition(weather.condition, &mut tally);

    let result = tally.finish();
    tracing::debug!(
        "Scored {} ({}) at {} with {} caution(s)",
        request.activity,
        request.condition,
        result.score,
        result.cautions.len()
    );
    result
}
