//! Weather-adjusted irrigation schedules over a per-crop baseline table.

pub mod adjust;
pub mod config;
pub mod domain;
pub mod router;
pub mod table;

#[cfg(test)]
mod tests;

pub use adjust::{adjust_schedule, ScheduleAdjuster};
pub use config::{AdjustmentConfig, DeltaCombination, RuleDelta};
pub use domain::{
    CropScheduleBase, ScheduleAdjustment, ScheduleOutcome, ScheduleRecommendation, ScheduleSpan,
    SpanParseError, WeatherReading, WeatherRule, WeatherSnapshot,
};
pub use router::{irrigation_router, ScheduleRequest};
pub use table::{CropLookup, CropScheduleTable, DEFAULT_CROP};
