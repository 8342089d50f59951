use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::flex;

/// Settlement kind of a sale. The remote API records each kind through its
/// own endpoint rather than a payload field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleKind {
    Cash,
    Credit,
}

impl SaleKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CONTADO" => Some(SaleKind::Cash),
            "CREDITO" => Some(SaleKind::Credit),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SaleKind::Cash => "CONTADO",
            SaleKind::Credit => "CREDITO",
        }
    }

    /// Lowercase label used in user-facing messages ("Venta al contado ...").
    pub fn label(&self) -> &'static str {
        match self {
            SaleKind::Cash => "contado",
            SaleKind::Credit => "crédito",
        }
    }

    /// Remote endpoint that registers this kind of sale.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SaleKind::Cash => "/contabilidad/venta-contado",
            SaleKind::Credit => "/contabilidad/venta-credito",
        }
    }
}

impl fmt::Display for SaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity-document kinds from the SUNAT catalog the form accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityDocumentKind {
    /// Código 1: DNI, exactly 8 digits.
    NationalId,
    /// Código 6: RUC, exactly 11 digits.
    TaxId,
    /// Código 4: Carnet de Extranjería.
    ForeignerCard,
    /// Código 7: Pasaporte.
    Passport,
}

impl IdentityDocumentKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(IdentityDocumentKind::NationalId),
            "6" => Some(IdentityDocumentKind::TaxId),
            "4" => Some(IdentityDocumentKind::ForeignerCard),
            "7" => Some(IdentityDocumentKind::Passport),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            IdentityDocumentKind::NationalId => "1",
            IdentityDocumentKind::TaxId => "6",
            IdentityDocumentKind::ForeignerCard => "4",
            IdentityDocumentKind::Passport => "7",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IdentityDocumentKind::NationalId => "DNI",
            IdentityDocumentKind::TaxId => "RUC",
            IdentityDocumentKind::ForeignerCard => "Carnet de Extranjería",
            IdentityDocumentKind::Passport => "Pasaporte",
        }
    }
}

/// Issued voucher as listed by `GET /contabilidad/comprobantes`. Fields are
/// tolerated as missing so one sparse row does not sink the whole table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    #[serde(
        default,
        rename = "numeroOperacion",
        deserialize_with = "flex::opt_string"
    )]
    pub operation_number: Option<String>,
    #[serde(default, rename = "cliente")]
    pub client: String,
    #[serde(default, rename = "tipoVenta")]
    pub sale_kind: String,
    #[serde(default, rename = "montoTotal")]
    pub total_amount: Decimal,
    #[serde(default, rename = "tipoComprobante")]
    pub voucher_type: String,
    #[serde(default, rename = "numeroSerie", deserialize_with = "flex::string")]
    pub series_number: String,
    #[serde(default, rename = "numeroDocumento", deserialize_with = "flex::string")]
    pub document_number: String,
    #[serde(default, rename = "tipoDocumentoIdentidad", deserialize_with = "flex::string")]
    pub identity_document_type: String,
    #[serde(
        default,
        rename = "numeroDocumentoIdentidad",
        deserialize_with = "flex::string"
    )]
    pub identity_document_number: String,
    #[serde(default, rename = "fechaEmision")]
    pub issue_date: String,
    #[serde(
        default,
        rename = "fechaVencimiento",
        deserialize_with = "flex::opt_string"
    )]
    pub due_date: Option<String>,
}

impl Voucher {
    pub fn operation_display(&self) -> &str {
        self.operation_number.as_deref().unwrap_or("")
    }

    /// Cash sales carry no due date; the table shows "N/A" for them.
    pub fn due_date_display(&self) -> &str {
        match self.due_date.as_deref() {
            Some(date) if !date.is_empty() => date,
            _ => "N/A",
        }
    }

    /// Catalog label for the identity-document code, or the raw code when
    /// it is not one the form knows.
    pub fn identity_document_display(&self) -> &str {
        IdentityDocumentKind::from_code(&self.identity_document_type)
            .map(|kind| kind.label())
            .unwrap_or(&self.identity_document_type)
    }
}
