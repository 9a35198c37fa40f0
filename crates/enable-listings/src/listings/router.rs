use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;

use super::filter::FilterConfig;
use super::service::{filter_catalog, FilterFieldView, ListingCatalogService};
use super::source::ListingSource;

/// Router builder exposing the listing catalog endpoints.
pub fn listing_router<S>(service: Arc<ListingCatalogService<S>>) -> Router
where
    S: ListingSource + 'static,
{
    Router::new()
        .route("/api/v1/housing", get(housing_handler::<S>))
        .route("/api/v1/housing/filters", get(filter_catalog_handler))
        .route("/api/v1/housing/refresh", post(refresh_housing_handler::<S>))
        .route("/api/v1/care", get(care_handler::<S>))
        .route("/api/v1/care/refresh", post(refresh_care_handler::<S>))
        .with_state(service)
}

/// Query parameters are (filter key, selected value) pairs. Unrecognized
/// keys are dropped by the configuration reducer.
pub(crate) async fn housing_handler<S>(
    State(service): State<Arc<ListingCatalogService<S>>>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response
where
    S: ListingSource + 'static,
{
    let config =
        FilterConfig::from_pairs(params.iter().map(|(key, value)| (key.as_str(), value.as_str())));
    let page = service.housing_page(&config);
    (StatusCode::OK, axum::Json(page)).into_response()
}

pub(crate) async fn filter_catalog_handler() -> axum::Json<Vec<FilterFieldView>> {
    axum::Json(filter_catalog())
}

pub(crate) async fn refresh_housing_handler<S>(
    State(service): State<Arc<ListingCatalogService<S>>>,
) -> Response
where
    S: ListingSource + 'static,
{
    match service.refresh_housing() {
        Ok(count) => {
            let payload = json!({ "status": "refreshed", "count": count });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let retained = service.housing_page(&FilterConfig::new()).total;
            let payload = json!({ "error": err.to_string(), "retained": retained });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn care_handler<S>(
    State(service): State<Arc<ListingCatalogService<S>>>,
) -> Response
where
    S: ListingSource + 'static,
{
    let page = service.care_page();
    (StatusCode::OK, axum::Json(page)).into_response()
}

pub(crate) async fn refresh_care_handler<S>(
    State(service): State<Arc<ListingCatalogService<S>>>,
) -> Response
where
    S: ListingSource + 'static,
{
    match service.refresh_care() {
        Ok(count) => {
            let payload = json!({ "status": "refreshed", "count": count });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => {
            let retained = service.care_page().total;
            let payload = json!({ "error": err.to_string(), "retained": retained });
            (StatusCode::BAD_GATEWAY, axum::Json(payload)).into_response()
        }
    }
}
