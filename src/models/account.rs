use serde::{Deserialize, Serialize};

use super::flex;

/// Chart-of-accounts row as served by `GET /cuentas`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, rename = "codigo", deserialize_with = "flex::string")]
    pub code: String,
    #[serde(default, rename = "nombre")]
    pub name: String,
    #[serde(default, rename = "nivel")]
    pub level: i32,
    #[serde(default, rename = "tipo")]
    pub kind: String,
    #[serde(default, rename = "padreId", deserialize_with = "flex::opt_string")]
    pub parent_id: Option<String>,
}

impl Account {
    /// Parent code for display. Root accounts show "Raíz".
    pub fn parent_display(&self) -> &str {
        match self.parent_id.as_deref() {
            Some(parent) if !parent.is_empty() => parent,
            _ => "Raíz",
        }
    }
}
