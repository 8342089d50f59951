use askama::Template;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::AppError;
use crate::filters;
use crate::handlers::notification::PanelError;
use crate::models::GeneralLedger;
use crate::AppState;

pub const MISSING_CODE: &str = "Por favor ingresa un código de cuenta";
pub const LEDGER_ERROR: &str = "Error al consultar el libro mayor.";
pub const BALANCE_ERROR: &str = "Error al consultar el saldo. Verifica que la cuenta exista.";

#[derive(Debug, Deserialize)]
pub struct InquiryParams {
    #[serde(default)]
    pub cuenta: String,
}

#[derive(Template)]
#[template(path = "fragments/ledger_table.html")]
pub struct LedgerTableTemplate {
    pub ledger: GeneralLedger,
    pub movement_count: usize,
}

#[derive(Template)]
#[template(path = "fragments/balance_card.html")]
pub struct BalanceCardTemplate {
    pub account_code: String,
    pub balance: Decimal,
}

impl BalanceCardTemplate {
    pub fn balance_class(&self) -> &'static str {
        if self.balance >= Decimal::ZERO {
            "saldo-positivo"
        } else {
            "saldo-negativo"
        }
    }
}

/// `GET /consultas/libro-mayor?cuenta=`: derived ledger table for one
/// account.
pub async fn general_ledger(
    State(state): State<AppState>,
    Query(params): Query<InquiryParams>,
) -> Response {
    let code = params.cuenta.trim();
    if code.is_empty() {
        return AppError::Validation(MISSING_CODE.to_string()).into_response();
    }

    match state.api.account_ledger(code).await {
        Ok(movements) => {
            tracing::debug!(account = code, count = movements.len(), "Loaded ledger");
            LedgerTableTemplate {
                ledger: GeneralLedger::build(code, &movements),
                movement_count: movements.len(),
            }
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, account = code, "Ledger inquiry failed");
            (err.status_code(), PanelError::new(LEDGER_ERROR, &err)).into_response()
        }
    }
}

/// `GET /consultas/saldo?cuenta=`: current balance of one account, straight
/// from the remote API.
pub async fn balance(
    State(state): State<AppState>,
    Query(params): Query<InquiryParams>,
) -> Response {
    let code = params.cuenta.trim();
    if code.is_empty() {
        return AppError::Validation(MISSING_CODE.to_string()).into_response();
    }

    match state.api.account_balance(code).await {
        Ok(balance) => {
            tracing::debug!(account = code, %balance, "Loaded balance");
            BalanceCardTemplate {
                account_code: code.to_string(),
                balance,
            }
            .into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, account = code, "Balance inquiry failed");
            (err.status_code(), PanelError::new(BALANCE_ERROR, &err)).into_response()
        }
    }
}
