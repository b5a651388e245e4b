//! Outdoor activity advice for SkyCoach
//!
//! Scores a planned activity against current weather and air quality,
//! turns the result into a spoken summary and pulls a city name out of a
//! voice transcript. Everything here is pure and synchronous; fetching data
//! and playing audio are the caller's job.

pub mod activity;
pub mod alerts;
pub mod card;
pub mod narrative;
pub mod outlook;
pub mod payload;
pub mod scoring;
pub mod speech;
pub mod status;
pub mod transcript;
pub mod types;

pub use activity::{Activity, ActivityRequest, PhysicalCondition};
pub use alerts::{notifications, safety_alerts, AlertSeverity, SafetyAlert};
pub use card::{air_quality_card, weather_card};
pub use narrative::summarize;
pub use outlook::{daily_outlook, DailyOutlook};
pub use scoring::{score, ScoreResult};
pub use speech::{SpeechSettings, Utterance};
pub use status::{classify, RecommendationStatus};
pub use transcript::extract_city;
pub use types::*;
