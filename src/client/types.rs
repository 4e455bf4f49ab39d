//! Request and response bodies of the device TTS API.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub const MIN_RATE: f32 = 0.5;
pub const MAX_RATE: f32 = 2.0;
pub const DEFAULT_RATE: f32 = 1.0;

/// A response field that may be missing, explicitly `null`, or set.
///
/// Use with `#[serde(default)]` so a missing key becomes `Absent`.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Null,
    Value(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Field<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Self::Value(v),
            None => Self::Null,
        })
    }
}

impl<T: fmt::Display> fmt::Display for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "-"),
            Self::Null => write!(f, "null"),
            Self::Value(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// Clamp a speech rate or pitch into the range the device accepts.
/// NaN falls back to the neutral rate.
pub fn clamp_rate(value: f32) -> f32 {
    if value.is_nan() {
        DEFAULT_RATE
    } else {
        value.clamp(MIN_RATE, MAX_RATE)
    }
}

pub fn rate_in_range(value: f32) -> bool {
    (MIN_RATE..=MAX_RATE).contains(&value)
}

/// Body of `POST /speak`. Speed and pitch are always within range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakRequest {
    pub text: String,
    pub speed: f32,
    pub pitch: f32,
}

impl SpeakRequest {
    pub fn new(text: impl Into<String>, speed: f32, pitch: f32) -> Self {
        Self {
            text: text.into(),
            speed: clamp_rate(speed),
            pitch: clamp_rate(pitch),
        }
    }
}

/// Reply to an accepted `POST /speak`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpeakResponse {
    pub status: Field<String>,
    pub text: Field<String>,
    pub speed: Field<serde_json::Number>,
    pub pitch: Field<serde_json::Number>,
    pub queue_size: Field<u64>,
    pub message: Field<String>,
}

/// Reply to `GET /status`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatusResponse {
    pub service: Field<String>,
    pub port: Field<u64>,
    pub tts_initialized: Field<bool>,
    pub is_speaking: Field<bool>,
    pub queue_size: Field<u64>,
    pub last_status: Field<String>,
}

/// Reply to `GET /health`. Any 2xx counts as healthy; the body is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HealthResponse {
    pub status: Field<String>,
}

/// Body the device sends with non-2xx replies.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Field<String>,
    pub message: Field<String>,
}
