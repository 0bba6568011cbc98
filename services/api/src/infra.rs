use farm_advisor::config::{AppConfig, ReferenceDataConfig};
use farm_advisor::reference::ReferenceDataError;
use farm_advisor::workflows::irrigation::{
    AdjustmentConfig, CropScheduleTable, ScheduleAdjuster,
};
use farm_advisor::workflows::schemes::{
    FactorWeights, SchemeAdvisor, SchemeCatalog, SchemeDirectory, ScoringConfig,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Both engines, built once over the configured reference data and shared read-only.
#[derive(Clone)]
pub(crate) struct Advisors {
    pub(crate) schemes: Arc<SchemeAdvisor>,
    pub(crate) irrigation: Arc<ScheduleAdjuster>,
}

pub(crate) fn load_advisors(config: &AppConfig) -> Result<Advisors, ReferenceDataError> {
    let ReferenceDataConfig {
        scheme_catalog,
        scheme_directory,
        crop_schedules,
    } = &config.reference;

    let catalog = match scheme_catalog {
        Some(path) => SchemeCatalog::from_path(path)?,
        None => SchemeCatalog::builtin(),
    };
    let directory = match scheme_directory {
        Some(path) => SchemeDirectory::from_path(path)?,
        None => SchemeDirectory::builtin(),
    };
    let table = match crop_schedules {
        Some(path) => Arc::new(CropScheduleTable::from_path(path)?),
        None => CropScheduleTable::shared_builtin(),
    };

    let scoring = ScoringConfig::new(
        FactorWeights::default(),
        config.advisor.qualifying_percentage,
        ScoringConfig::default().relevance_floor,
    );
    let adjustment =
        AdjustmentConfig::default().with_combination(config.advisor.delta_combination);

    Ok(Advisors {
        schemes: Arc::new(SchemeAdvisor::new(catalog, directory, scoring)),
        irrigation: Arc::new(ScheduleAdjuster::with_config(table, adjustment)),
    })
}

#[cfg(test)]
pub(crate) fn builtin_advisors() -> Advisors {
    Advisors {
        schemes: Arc::new(SchemeAdvisor::default()),
        irrigation: Arc::new(ScheduleAdjuster::default()),
    }
}
