use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Raw sale-form input exactly as the page posts it. Everything is a string
/// here; validation and the payload builder decide what it means.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SaleForm {
    #[serde(default, rename = "numeroOperacion")]
    pub operation_number: String,
    #[serde(default, rename = "cliente")]
    pub client: String,
    #[serde(default, rename = "tipoVenta")]
    pub sale_kind: String,
    #[serde(default, rename = "montoTotal")]
    pub total_amount: String,
    #[serde(default, rename = "descripcion")]
    pub description: String,
    #[serde(default, rename = "tipoComprobante")]
    pub voucher_type: String,
    #[serde(default, rename = "numeroSerie")]
    pub series_number: String,
    #[serde(default, rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(default, rename = "tipoDocumentoIdentidad")]
    pub identity_document_type: String,
    #[serde(default, rename = "numeroDocumentoIdentidad")]
    pub identity_document_number: String,
    #[serde(default, rename = "fechaEmision")]
    pub issue_date: String,
    #[serde(default, rename = "fechaVencimiento")]
    pub due_date: String,
}

/// Wire payload for the sale-registration endpoints. The settlement kind is
/// carried by the endpoint, not the body; cash sales never serialize a due
/// date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalePayload {
    #[serde(rename = "numeroOperacion")]
    pub operation_number: u32,
    #[serde(rename = "cliente")]
    pub client: String,
    #[serde(rename = "montoTotal", with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipoComprobante")]
    pub voucher_type: String,
    #[serde(rename = "numeroSerie")]
    pub series_number: String,
    #[serde(rename = "numeroDocumento")]
    pub document_number: String,
    #[serde(rename = "tipoDocumentoIdentidad")]
    pub identity_document_type: String,
    #[serde(rename = "numeroDocumentoIdentidad")]
    pub identity_document_number: String,
    #[serde(rename = "fechaEmision")]
    pub issue_date: NaiveDate,
    #[serde(
        default,
        rename = "fechaVencimiento",
        skip_serializing_if = "Option::is_none"
    )]
    pub due_date: Option<NaiveDate>,
}
