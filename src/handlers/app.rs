use askama::Template;
use axum::extract::State;

use crate::handlers::accounts::{AccountsListTemplate, LOAD_ERROR as ACCOUNTS_LOAD_ERROR};
use crate::handlers::notification::PanelError;
use crate::handlers::vouchers::VoucherTableTemplate;
use crate::AppState;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    /// Whether the accounting API answered the first load. Gates the
    /// "connected" notification.
    pub ready: bool,
    pub accounts_html: String,
    pub vouchers_html: String,
}

/// `GET /`: the whole page, server-rendered. Accounts load before
/// vouchers; the journal panel fetches itself once the page is up. A dead
/// upstream still yields a page, with each panel degraded in place.
pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    let accounts = state.api.list_accounts().await;
    let ready = accounts.is_ok();

    let accounts_html = match accounts {
        Ok(accounts) => render_or_log(AccountsListTemplate { accounts }),
        Err(err) => {
            tracing::error!(error = %err, "First accounts load failed");
            render_or_log(PanelError::inline(ACCOUNTS_LOAD_ERROR))
        }
    };

    let vouchers_html = match state.api.list_vouchers().await {
        Ok(vouchers) => render_or_log(VoucherTableTemplate { vouchers }),
        Err(err) => {
            tracing::error!(error = %err, "First vouchers load failed");
            render_or_log(PanelError::inline(format!(
                "Error al cargar comprobantes: {err}"
            )))
        }
    };

    IndexTemplate {
        ready,
        accounts_html,
        vouchers_html,
    }
}

fn render_or_log<T: Template>(template: T) -> String {
    template.render().unwrap_or_else(|err| {
        tracing::error!(error = %err, "Template rendering failed");
        String::new()
    })
}

pub async fn health_check() -> &'static str {
    "OK"
}
