pub mod accounting_client;
pub mod metrics;
