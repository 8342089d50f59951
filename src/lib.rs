pub mod config;
pub mod error;
pub mod filters;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod observability;
pub mod services;
pub mod startup;
pub mod validation;

use services::accounting_client::AccountingClient;
use std::sync::Arc;

/// Shared application state: the client for the remote accounting API.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<AccountingClient>,
}

impl AppState {
    pub fn new(api: Arc<AccountingClient>) -> Self {
        Self { api }
    }
}
