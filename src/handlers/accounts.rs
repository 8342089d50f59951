use askama::Template;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::handlers::notification::PanelError;
use crate::models::Account;
use crate::AppState;

pub const LOAD_ERROR: &str = "Error al cargar las cuentas.";

#[derive(Template)]
#[template(path = "fragments/accounts_list.html")]
pub struct AccountsListTemplate {
    pub accounts: Vec<Account>,
}

/// `GET /cuentas`: the chart-of-accounts panel body.
pub async fn accounts_fragment(State(state): State<AppState>) -> Response {
    match state.api.list_accounts().await {
        Ok(accounts) => {
            tracing::debug!(count = accounts.len(), "Loaded accounts");
            AccountsListTemplate { accounts }.into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to load accounts");
            (err.status_code(), PanelError::new(LOAD_ERROR, &err)).into_response()
        }
    }
}
