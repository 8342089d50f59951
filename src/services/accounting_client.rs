use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::config::ContabilidadSettings;
use crate::error::AppError;
use crate::models::{Account, JournalEntry, RawMovement, SaleKind, SalePayload, Voucher};
use crate::services::metrics;

/// Client for the remote accounting API.
///
/// All methods translate a non-2xx reply into [`AppError::UpstreamStatus`]
/// so the UI shows the same "Error {code}: {reason}" wording everywhere.
pub struct AccountingClient {
    client: Client,
    base_url: String,
}

impl AccountingClient {
    pub fn new(settings: &ContabilidadSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.get_json("/cuentas".to_string(), "/cuentas").await
    }

    pub async fn list_vouchers(&self) -> Result<Vec<Voucher>, AppError> {
        self.get_json(
            "/contabilidad/comprobantes".to_string(),
            "/contabilidad/comprobantes",
        )
        .await
    }

    pub async fn list_entries(&self) -> Result<Vec<JournalEntry>, AppError> {
        self.get_json(
            "/contabilidad/asientos".to_string(),
            "/contabilidad/asientos",
        )
        .await
    }

    pub async fn account_ledger(&self, account_code: &str) -> Result<Vec<RawMovement>, AppError> {
        self.get_json(
            format!("/contabilidad/libro-mayor/{account_code}"),
            "/contabilidad/libro-mayor",
        )
        .await
    }

    /// The balance endpoint answers with a bare JSON number.
    pub async fn account_balance(&self, account_code: &str) -> Result<Decimal, AppError> {
        self.get_json(
            format!("/contabilidad/saldo/{account_code}"),
            "/contabilidad/saldo",
        )
        .await
    }

    /// Register a sale through the endpoint matching its settlement kind.
    /// The API answers with the journal entry it created.
    pub async fn register_sale(
        &self,
        kind: SaleKind,
        payload: &SalePayload,
    ) -> Result<JournalEntry, AppError> {
        let endpoint = kind.endpoint();
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, %kind, "Registering sale");

        let result = self.client.post(&url).json(payload).send().await;
        Self::finish("POST", endpoint, result).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: String,
        endpoint: &'static str,
    ) -> Result<T, AppError> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%url, "Querying accounting API");

        let result = self.client.get(&url).send().await;
        Self::finish("GET", endpoint, result).await
    }

    async fn finish<T: DeserializeOwned>(
        method: &'static str,
        endpoint: &'static str,
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> Result<T, AppError> {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                metrics::record_upstream(method, endpoint, "transport");
                tracing::error!(error = %err, endpoint, "Accounting API unreachable");
                return Err(AppError::UpstreamRequest(err));
            }
        };

        let status = response.status();
        if !status.is_success() {
            metrics::record_upstream(method, endpoint, status.as_str());
            tracing::error!(%status, endpoint, "Accounting API returned an error status");
            return Err(AppError::UpstreamStatus {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        metrics::record_upstream(method, endpoint, "ok");
        response.json::<T>().await.map_err(AppError::from)
    }
}
