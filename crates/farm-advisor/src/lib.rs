//! Scheme eligibility scoring and weather-adjusted irrigation planning.
//!
//! Both engines are pure functions over immutable reference data. The HTTP routers in
//! [`workflows`] and the binaries in `services/api` are thin shells around them.

pub mod config;
pub mod error;
pub mod reference;
pub mod telemetry;
pub mod workflows;

pub use workflows::irrigation::{adjust_schedule, ScheduleAdjuster, ScheduleOutcome};
pub use workflows::schemes::{score_eligibility, EligibilityScorer, MatchResult};
