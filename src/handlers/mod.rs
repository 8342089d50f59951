pub mod accounts;
pub mod app;
pub mod entries;
pub mod inquiry;
pub mod metrics;
pub mod notification;
pub mod sales;
pub mod vouchers;
