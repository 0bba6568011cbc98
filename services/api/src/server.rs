use crate::cli::ServeArgs;
use crate::infra::{load_advisors, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use farm_advisor::config::AppConfig;
use farm_advisor::error::AppError;
use farm_advisor::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let advisors = load_advisors(&config)?;
    info!(
        schemes = advisors.schemes.catalog().len(),
        crops = advisors.irrigation.table().len(),
        combination = ?config.advisor.delta_combination,
        "reference data loaded"
    );

    let app = with_service_routes(advisors)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "farm advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}
