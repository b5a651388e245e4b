//! Text-to-speech request handed to the playback engine.

use serde::{Deserialize, Serialize};

/// Voice parameters for playback
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// BCP 47 language tag
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_rate")]
    pub rate: f32,
    #[serde(default = "default_unit")]
    pub pitch: f32,
    #[serde(default = "default_unit")]
    pub volume: f32,
}

fn default_lang() -> String {
    "en-US".to_string()
}

fn default_rate() -> f32 {
    0.9
}

fn default_unit() -> f32 {
    1.0
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            rate: default_rate(),
            pitch: default_unit(),
            volume: default_unit(),
        }
    }
}

/// A narrative ready to be spoken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Newlines and runs of whitespace are collapsed to single spaces.
    pub fn new(text: &str, settings: &SpeechSettings) -> Self {
        Self {
            text: text.split_whitespace().collect::<Vec<_>>().join(" "),
            lang: settings.lang.clone(),
            rate: settings.rate,
            pitch: settings.pitch,
            volume: settings.volume,
        }
    }
}
