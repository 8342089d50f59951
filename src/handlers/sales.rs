use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;

use crate::error::AppError;
use crate::filters;
use crate::handlers::notification::Notification;
use crate::models::{JournalEntry, SaleForm};
use crate::validation::{build_submission, validate_sale_form};
use crate::AppState;

/// Event fired on successful registration; the voucher panel listens for
/// it and re-fetches its table.
pub const VOUCHERS_UPDATED_EVENT: &str = "comprobantes-actualizados";

pub const READY_TITLE: &str = "Haz clic para registrar la venta";

/// Submit-button fragment. Re-rendered on every keystroke so the button
/// state always mirrors the current form content.
#[derive(Template)]
#[template(path = "fragments/submit_state.html")]
pub struct SubmitStateTemplate {
    pub enabled: bool,
    pub title: String,
}

/// Success response for `POST /ventas`: a notification plus the created
/// journal entry, prepended into the entries list out of band.
#[derive(Template)]
#[template(path = "fragments/sale_result.html")]
pub struct SaleResultTemplate {
    pub message: String,
    pub entry: JournalEntry,
}

/// `POST /ventas/validar`: silent validation. Always 200; the verdict only
/// shows through the button state and its tooltip, never as a notification.
pub async fn validate_sale(Form(form): Form<SaleForm>) -> SubmitStateTemplate {
    let verdict = validate_sale_form(&form);
    SubmitStateTemplate {
        enabled: verdict.valid,
        title: if verdict.valid {
            READY_TITLE.to_string()
        } else {
            verdict.message
        },
    }
}

/// `POST /ventas`: validate, build the payload, register the sale through
/// the endpoint matching its kind, and render the created entry.
pub async fn register_sale(State(state): State<AppState>, Form(form): Form<SaleForm>) -> Response {
    let verdict = validate_sale_form(&form);
    if !verdict.valid {
        tracing::warn!(message = %verdict.message, "Rejected sale form");
        return AppError::Validation(verdict.message).into_response();
    }

    let (kind, payload) = match build_submission(&form) {
        Ok(built) => built,
        Err(err) => return err.into_response(),
    };

    match state.api.register_sale(kind, &payload).await {
        Ok(entry) => {
            tracing::info!(
                operation = payload.operation_number,
                %kind,
                entry = %entry.number,
                "Sale registered"
            );
            let body = SaleResultTemplate {
                message: format!("Venta al {} registrada exitosamente!", kind.label()),
                entry,
            };
            ([("HX-Trigger", VOUCHERS_UPDATED_EVENT)], body).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, %kind, "Failed to register sale");
            (
                err.status_code(),
                Notification::error(format!("Error al registrar la venta: {err}")),
            )
                .into_response()
        }
    }
}
