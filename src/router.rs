use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::metrics::metrics_middleware;
use crate::modules::students::controller::STUDENTS_INDEX;
use crate::modules::students::router::init_students_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::response::Redirect;
use axum::routing::get;
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(STUDENTS_INDEX) }))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/students", init_students_router())
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(metrics_middleware))
        .layer(middleware::from_fn(logging_middleware))
}
