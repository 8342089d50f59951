use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::flex;

/// Account reference embedded in a movement line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovementAccount {
    #[serde(default, rename = "codigo", deserialize_with = "flex::string")]
    pub code: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
}

/// One debit/credit line inside a journal entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default, rename = "cuenta")]
    pub account: MovementAccount,
    #[serde(default, rename = "debe")]
    pub debit: Decimal,
    #[serde(default, rename = "haber")]
    pub credit: Decimal,
}

/// Journal entry (asiento) as served by `GET /contabilidad/asientos` and
/// echoed back when a sale is registered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JournalEntry {
    #[serde(default, rename = "numeroAsiento", deserialize_with = "flex::string")]
    pub number: String,
    #[serde(default, rename = "fecha")]
    pub date: String,
    #[serde(default, rename = "descripcion")]
    pub description: String,
    #[serde(default, rename = "movimientos")]
    pub movements: Vec<Movement>,
}

/// Raw per-account movement from `GET /contabilidad/libro-mayor/{codigo}`.
/// Only the movement magnitude matters for the inquiry view; it comes in as
/// either a debit or a credit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMovement {
    #[serde(default, deserialize_with = "flex::string")]
    pub id: String,
    #[serde(default, rename = "debe")]
    pub debit: Decimal,
    #[serde(default, rename = "haber")]
    pub credit: Decimal,
}
