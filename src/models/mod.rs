//! Domain models for the accounting frontend.

mod account;
mod entry;
mod sale;
mod statement;
mod voucher;

pub use account::Account;
pub use entry::{JournalEntry, Movement, MovementAccount, RawMovement};
pub use sale::{SaleForm, SalePayload};
pub use statement::{GeneralLedger, StatementLine};
pub use voucher::{IdentityDocumentKind, SaleKind, Voucher};

/// Tolerant deserializers for fields the remote API serves inconsistently
/// (numeric ids echoed back as numbers or strings, nullable strings).
pub(crate) mod flex {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn value_to_string(value: Value) -> Option<String> {
        match value {
            Value::Null => None,
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            other => Some(other.to_string()),
        }
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_string(value).unwrap_or_default())
    }

    pub fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(value_to_string(value))
    }
}
