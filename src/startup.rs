use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    accounts::accounts_fragment,
    app::{health_check, index},
    entries::entries_fragment,
    inquiry::{balance, general_ledger},
    sales::{register_sale, validate_sale},
    vouchers::vouchers_fragment,
};
use crate::middleware::metrics::metrics_middleware;
use crate::middleware::request_id::{request_id_middleware, REQUEST_ID_HEADER};
use crate::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(crate::handlers::metrics::metrics))
        .route("/cuentas", get(accounts_fragment))
        .route("/comprobantes", get(vouchers_fragment))
        .route("/asientos", get(entries_fragment))
        .route("/ventas", post(register_sale))
        .route("/ventas/validar", post(validate_sale))
        .route("/consultas/libro-mayor", get(general_ledger))
        .route("/consultas/saldo", get(balance))
        .nest_service("/static", ServeDir::new("static"))
        .layer(from_fn(metrics_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}
