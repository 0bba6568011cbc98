use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Whole-number schedule quantity written either as `n` or as the inclusive range `a-b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScheduleSpan {
    Single(i32),
    Range { low: i32, high: i32 },
}

impl ScheduleSpan {
    pub fn low(&self) -> i32 {
        match *self {
            ScheduleSpan::Single(value) => value,
            ScheduleSpan::Range { low, .. } => low,
        }
    }

    pub fn high(&self) -> i32 {
        match *self {
            ScheduleSpan::Single(value) => value,
            ScheduleSpan::Range { high, .. } => high,
        }
    }

    /// Shift every bound by `delta`, clamping each bound at `floor` independently.
    pub fn shifted(self, delta: i32, floor: i32) -> Self {
        let shift = |value: i32| value.saturating_add(delta).max(floor);
        match self {
            ScheduleSpan::Single(value) => ScheduleSpan::Single(shift(value)),
            ScheduleSpan::Range { low, high } => ScheduleSpan::Range {
                low: shift(low),
                high: shift(high),
            },
        }
    }
}

impl fmt::Display for ScheduleSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleSpan::Single(value) => write!(f, "{value}"),
            ScheduleSpan::Range { low, high } => write!(f, "{low}-{high}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpanParseError {
    #[error("'{0}' is not a whole number or a range such as 5-7")]
    Malformed(String),
    #[error("range {low}-{high} ends before it starts")]
    Inverted { low: i32, high: i32 },
}

impl FromStr for ScheduleSpan {
    type Err = SpanParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        let number = |part: &str| {
            part.trim()
                .parse::<u16>()
                .map(i32::from)
                .map_err(|_| SpanParseError::Malformed(trimmed.to_string()))
        };

        match trimmed.split_once('-') {
            None => Ok(ScheduleSpan::Single(number(trimmed)?)),
            Some((low, high)) => {
                let (low, high) = (number(low)?, number(high)?);
                if low > high {
                    return Err(SpanParseError::Inverted { low, high });
                }
                Ok(ScheduleSpan::Range { low, high })
            }
        }
    }
}

impl TryFrom<String> for ScheduleSpan {
    type Error = SpanParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ScheduleSpan> for String {
    fn from(span: ScheduleSpan) -> Self {
        span.to_string()
    }
}

/// Baseline watering pattern for a crop before any weather adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropScheduleBase {
    pub base_frequency_days: ScheduleSpan,
    pub water_amount_cm: ScheduleSpan,
    pub season: String,
    pub tips: String,
}

/// Weather as delivered by an upstream provider, where any reading may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherReading {
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub rainfall_mm: Option<f64>,
    pub description: Option<String>,
}

impl WeatherReading {
    /// Fill missing or non-finite readings with the [`WeatherSnapshot`] defaults.
    pub fn into_snapshot(self) -> WeatherSnapshot {
        let defaults = WeatherSnapshot::default();
        let reading = |value: Option<f64>, fallback: f64| {
            value.filter(|value| value.is_finite()).unwrap_or(fallback)
        };

        WeatherSnapshot {
            temperature_c: reading(self.temperature_c, defaults.temperature_c),
            humidity_pct: reading(self.humidity_pct, defaults.humidity_pct),
            rainfall_mm: reading(self.rainfall_mm, defaults.rainfall_mm),
            description: self
                .description
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty())
                .unwrap_or(defaults.description),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub description: String,
}

impl Default for WeatherSnapshot {
    fn default() -> Self {
        Self {
            temperature_c: 25.0,
            humidity_pct: 65.0,
            rainfall_mm: 0.0,
            description: "unknown".to_string(),
        }
    }
}

/// Weather conditions that shift a crop's baseline schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeatherRule {
    HighTemperature,
    HighHumidity,
    HeavyRain,
}

impl WeatherRule {
    /// Evaluation order. With last-rule-wins combination the latest match takes effect.
    pub const ALL: [WeatherRule; 3] = [
        WeatherRule::HighTemperature,
        WeatherRule::HighHumidity,
        WeatherRule::HeavyRain,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            WeatherRule::HighTemperature => "high temperature",
            WeatherRule::HighHumidity => "high humidity",
            WeatherRule::HeavyRain => "heavy rain",
        }
    }
}

/// Net change applied to the baseline, along with the rules that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleAdjustment {
    pub frequency_delta_days: i32,
    pub water_delta_cm: i32,
    pub applied_rules: Vec<WeatherRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecommendation {
    pub frequency_days: ScheduleSpan,
    pub water_amount_cm: ScheduleSpan,
    pub frequency_text: String,
    pub water_text: String,
    pub timing_text: String,
    pub next_watering_text: String,
}

/// Everything produced for one schedule request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    pub requested_crop: String,
    pub crop: String,
    pub used_default_crop: bool,
    pub base: CropScheduleBase,
    pub weather: WeatherSnapshot,
    pub adjustment: ScheduleAdjustment,
    pub recommendation: ScheduleRecommendation,
}
