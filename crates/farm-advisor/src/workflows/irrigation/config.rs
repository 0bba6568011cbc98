use serde::{Deserialize, Serialize};

use super::domain::{WeatherRule, WeatherSnapshot};

/// How the deltas of several matching weather rules combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeltaCombination {
    /// Sum the deltas of every matching rule.
    #[default]
    Accumulate,
    /// Only the last matching rule in evaluation order takes effect.
    LastRuleWins,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDelta {
    pub frequency_days: i32,
    pub water_cm: i32,
}

impl RuleDelta {
    pub const fn new(frequency_days: i32, water_cm: i32) -> Self {
        Self {
            frequency_days,
            water_cm,
        }
    }
}

/// Thresholds, deltas, and guidance cut-offs used when adjusting a baseline schedule.
///
/// Every threshold is exclusive: a reading must exceed it for the rule to apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentConfig {
    pub high_temperature_c: f64,
    pub high_humidity_pct: f64,
    pub heavy_rain_mm: f64,
    pub high_temperature_delta: RuleDelta,
    pub high_humidity_delta: RuleDelta,
    pub heavy_rain_delta: RuleDelta,
    pub combination: DeltaCombination,
    /// Above this temperature only the pre-dawn window is recommended.
    pub pre_dawn_temperature_c: f64,
    /// Above this rainfall the next watering waits for the rain to stop.
    pub postpone_rainfall_mm: f64,
    pub min_frequency_days: i32,
    pub min_water_cm: i32,
}

impl Default for AdjustmentConfig {
    fn default() -> Self {
        Self {
            high_temperature_c: 32.0,
            high_humidity_pct: 80.0,
            heavy_rain_mm: 10.0,
            high_temperature_delta: RuleDelta::new(-1, 20),
            high_humidity_delta: RuleDelta::new(1, -10),
            heavy_rain_delta: RuleDelta::new(2, -50),
            combination: DeltaCombination::Accumulate,
            pre_dawn_temperature_c: 30.0,
            postpone_rainfall_mm: 5.0,
            min_frequency_days: 1,
            min_water_cm: 0,
        }
    }
}

impl AdjustmentConfig {
    pub fn with_combination(mut self, combination: DeltaCombination) -> Self {
        self.combination = combination;
        self
    }

    pub fn applies(&self, rule: WeatherRule, weather: &WeatherSnapshot) -> bool {
        match rule {
            WeatherRule::HighTemperature => weather.temperature_c > self.high_temperature_c,
            WeatherRule::HighHumidity => weather.humidity_pct > self.high_humidity_pct,
            WeatherRule::HeavyRain => weather.rainfall_mm > self.heavy_rain_mm,
        }
    }

    pub fn delta(&self, rule: WeatherRule) -> RuleDelta {
        match rule {
            WeatherRule::HighTemperature => self.high_temperature_delta,
            WeatherRule::HighHumidity => self.high_humidity_delta,
            WeatherRule::HeavyRain => self.heavy_rain_delta,
        }
    }
}
