use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::filters;
use crate::handlers::notification::PanelError;
use crate::models::Voucher;
use crate::AppState;

#[derive(Template)]
#[template(path = "fragments/voucher_table.html")]
pub struct VoucherTableTemplate {
    pub vouchers: Vec<Voucher>,
}

/// `GET /comprobantes`: the issued-vouchers table. Also the refresh target
/// of the `comprobantes-actualizados` event fired after a sale.
pub async fn vouchers_fragment(State(state): State<AppState>) -> Response {
    match state.api.list_vouchers().await {
        Ok(vouchers) => {
            tracing::debug!(count = vouchers.len(), "Loaded vouchers");
            VoucherTableTemplate { vouchers }.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load vouchers");
            let message = format!("Error al cargar comprobantes: {err}");
            (err.status_code(), PanelError::new(message, &err)).into_response()
        }
    }
}
