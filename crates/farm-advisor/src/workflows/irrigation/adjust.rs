use std::sync::Arc;

use tracing::{debug, warn};

use super::config::{AdjustmentConfig, DeltaCombination};
use super::domain::{
    CropScheduleBase, ScheduleAdjustment, ScheduleOutcome, ScheduleRecommendation, WeatherRule,
    WeatherSnapshot,
};
use super::table::CropScheduleTable;

const PRE_DAWN_WINDOW: &str = "Early morning (4-6 AM)";
const COOL_HOURS_WINDOW: &str = "Early morning or evening";
const AFTER_RAIN: &str = "After rain stops (2-3 days)";
const NEXT_COOL_WINDOW: &str = "Today evening or tomorrow morning";

/// Adjusts a crop's baseline schedule for the current weather.
#[derive(Debug, Clone)]
pub struct ScheduleAdjuster {
    table: Arc<CropScheduleTable>,
    config: AdjustmentConfig,
}

impl ScheduleAdjuster {
    pub fn new(table: Arc<CropScheduleTable>) -> Self {
        Self::with_config(table, AdjustmentConfig::default())
    }

    pub fn with_config(table: Arc<CropScheduleTable>, config: AdjustmentConfig) -> Self {
        Self { table, config }
    }

    pub fn table(&self) -> &CropScheduleTable {
        &self.table
    }

    pub fn config(&self) -> &AdjustmentConfig {
        &self.config
    }

    pub fn adjust(&self, crop: &str, weather: &WeatherSnapshot) -> ScheduleOutcome {
        let lookup = self.table.resolve(crop);
        if lookup.used_default_crop {
            warn!(
                requested = crop,
                fallback = lookup.crop,
                "no schedule for crop, using default crop"
            );
        }

        let adjustment = self.weather_adjustment(weather);
        let recommendation = self.recommend(lookup.base, &adjustment, weather);
        debug!(
            crop = lookup.crop,
            rules = ?adjustment.applied_rules,
            frequency = %recommendation.frequency_days,
            water = %recommendation.water_amount_cm,
            "irrigation schedule adjusted"
        );

        ScheduleOutcome {
            requested_crop: crop.to_string(),
            crop: lookup.crop.to_string(),
            used_default_crop: lookup.used_default_crop,
            base: lookup.base.clone(),
            weather: weather.clone(),
            adjustment,
            recommendation,
        }
    }

    /// Net deltas of the rules that apply to `weather`, combined per the configuration.
    pub fn weather_adjustment(&self, weather: &WeatherSnapshot) -> ScheduleAdjustment {
        let mut adjustment = ScheduleAdjustment::default();

        for rule in WeatherRule::ALL {
            if !self.config.applies(rule, weather) {
                continue;
            }
            let delta = self.config.delta(rule);
            match self.config.combination {
                DeltaCombination::Accumulate => {
                    adjustment.frequency_delta_days += delta.frequency_days;
                    adjustment.water_delta_cm += delta.water_cm;
                }
                DeltaCombination::LastRuleWins => {
                    adjustment.frequency_delta_days = delta.frequency_days;
                    adjustment.water_delta_cm = delta.water_cm;
                }
            }
            adjustment.applied_rules.push(rule);
        }

        adjustment
    }

    fn recommend(
        &self,
        base: &CropScheduleBase,
        adjustment: &ScheduleAdjustment,
        weather: &WeatherSnapshot,
    ) -> ScheduleRecommendation {
        let frequency_days = base
            .base_frequency_days
            .shifted(adjustment.frequency_delta_days, self.config.min_frequency_days);
        let water_amount_cm = base
            .water_amount_cm
            .shifted(adjustment.water_delta_cm, self.config.min_water_cm);

        let timing = if weather.temperature_c > self.config.pre_dawn_temperature_c {
            PRE_DAWN_WINDOW
        } else {
            COOL_HOURS_WINDOW
        };
        let next_watering = if weather.rainfall_mm > self.config.postpone_rainfall_mm {
            AFTER_RAIN
        } else {
            NEXT_COOL_WINDOW
        };

        ScheduleRecommendation {
            frequency_text: format!("Every {frequency_days} days"),
            water_text: format!("{water_amount_cm} cm"),
            timing_text: timing.to_string(),
            next_watering_text: next_watering.to_string(),
            frequency_days,
            water_amount_cm,
        }
    }
}

impl Default for ScheduleAdjuster {
    fn default() -> Self {
        Self::new(CropScheduleTable::shared_builtin())
    }
}

/// Adjust the built-in schedule for `crop` using default thresholds.
pub fn adjust_schedule(crop: &str, weather: &WeatherSnapshot) -> ScheduleOutcome {
    ScheduleAdjuster::default().adjust(crop, weather)
}
