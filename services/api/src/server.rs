use crate::cli::ServeArgs;
use crate::infra::{AppState, CatalogSource, FileListingSource, InMemoryListingSource};
use crate::routes::with_listing_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use enable_listings::config::AppConfig;
use enable_listings::error::AppError;
use enable_listings::listings::ListingCatalogService;
use enable_listings::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

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

    let listings = &config.listings;
    let source = if listings.housing_data.is_some() || listings.care_data.is_some() {
        CatalogSource::File(FileListingSource::new(
            listings.housing_data.clone(),
            listings.care_data.clone(),
        ))
    } else {
        CatalogSource::Memory(InMemoryListingSource::with_samples())
    };
    let service = Arc::new(ListingCatalogService::new(Arc::new(source)));

    // A failed initial fetch is not fatal; the catalog starts empty and a
    // later refresh can populate it.
    match service.refresh_housing() {
        Ok(count) => info!(count, "housing listings loaded"),
        Err(err) => warn!(error = %err, "initial housing fetch failed, catalog starts empty"),
    }
    match service.refresh_care() {
        Ok(count) => info!(count, "care listings loaded"),
        Err(err) => warn!(error = %err, "initial care fetch failed, catalog starts empty"),
    }

    let app = with_listing_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "listing catalog service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
