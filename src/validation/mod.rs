//! Sale-form validation and payload construction.
//!
//! All checks are pure functions over the raw form strings. The form-level
//! validator runs a fixed sequence and stops at the first failure, so the
//! user always sees one message at a time, in a stable order.

use chrono::{Days, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::AppError;
use crate::models::{IdentityDocumentKind, SaleForm, SaleKind, SalePayload};

static SERIES_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]\d{3}$").expect("series pattern"));
static DOCUMENT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,20}$").expect("document pattern"));
static DNI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{8}$").expect("dni pattern"));
static RUC_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{11}$").expect("ruc pattern"));
static ALNUM_6_12_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{6,12}$").expect("alnum pattern"));

pub const READY_MESSAGE: &str = "Formulario válido";

/// Outcome of a validation pass: overall verdict plus a single message,
/// either the first failure or the ready text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    fn ok(message: &str) -> Self {
        Verdict {
            valid: true,
            message: message.to_string(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Verdict {
            valid: false,
            message: message.into(),
        }
    }
}

/// Labels for the required-field check, in the order the form shows them.
/// The first blank field decides the message.
const REQUIRED_LABELS: [&str; 10] = [
    "Número de Operación",
    "Cliente",
    "Tipo de Venta",
    "Monto Total",
    "Tipo de Comprobante",
    "Número de Serie",
    "Número de Documento",
    "Tipo de Documento de Identidad",
    "Número de Documento de Identidad",
    "Fecha de Emisión",
];

fn required_values(form: &SaleForm) -> [&str; 10] {
    [
        &form.operation_number,
        &form.client,
        &form.sale_kind,
        &form.total_amount,
        &form.voucher_type,
        &form.series_number,
        &form.document_number,
        &form.identity_document_type,
        &form.identity_document_number,
        &form.issue_date,
    ]
}

/// Validate an identity-document number against its SUNAT catalog code.
/// The candidate is sanitized first: whitespace and every other
/// non-alphanumeric character are removed, so "12.345.678" passes the DNI
/// rule. Note the sanitized value is only used for checking; the payload
/// still carries what the user typed, trimmed.
pub fn validate_identity_document(kind_code: &str, number: &str) -> Verdict {
    if number.trim().is_empty() {
        return Verdict::fail("El número de documento es requerido");
    }

    let sanitized: String = number
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();

    match IdentityDocumentKind::from_code(kind_code.trim()) {
        Some(IdentityDocumentKind::NationalId) => {
            if !DNI_PATTERN.is_match(&sanitized) {
                return Verdict::fail("El DNI debe tener exactamente 8 dígitos numéricos");
            }
        }
        Some(IdentityDocumentKind::TaxId) => {
            if !RUC_PATTERN.is_match(&sanitized) {
                return Verdict::fail("El RUC debe tener exactamente 11 dígitos numéricos");
            }
        }
        Some(IdentityDocumentKind::ForeignerCard) => {
            if !ALNUM_6_12_PATTERN.is_match(&sanitized) {
                return Verdict::fail(
                    "El Carnet de Extranjería debe tener entre 6 y 12 caracteres alfanuméricos",
                );
            }
        }
        Some(IdentityDocumentKind::Passport) => {
            if !ALNUM_6_12_PATTERN.is_match(&sanitized) {
                return Verdict::fail(
                    "El Pasaporte debe tener entre 6 y 12 caracteres alfanuméricos",
                );
            }
        }
        None => return Verdict::fail("Tipo de documento no válido"),
    }

    Verdict::ok("Documento válido")
}

/// Voucher series: one uppercase letter plus three digits. The check is
/// case-insensitive ("b002" passes); the payload keeps the typed case.
pub fn validate_series_number(series: &str) -> Verdict {
    let series = series.trim();
    if series.is_empty() {
        return Verdict::fail("El número de serie es requerido");
    }
    if !SERIES_PATTERN.is_match(&series.to_uppercase()) {
        return Verdict::fail(
            "El número de serie debe tener el formato: Letra + 3 números (Ej: F001, B001)",
        );
    }
    Verdict::ok("Serie válida")
}

/// Voucher document number: digits only, at most twenty.
pub fn validate_document_number(number: &str) -> Verdict {
    let number = number.trim();
    if number.is_empty() {
        return Verdict::fail("El número de documento es requerido");
    }
    if !DOCUMENT_PATTERN.is_match(number) {
        return Verdict::fail(
            "El número de documento debe contener solo números (máximo 20 dígitos)",
        );
    }
    Verdict::ok("Número de documento válido")
}

/// Full-form validation in a fixed short-circuit order: required fields,
/// operation number, amount, series, document number, identity document,
/// sale kind, the credit due-date rule, issue date.
pub fn validate_sale_form(form: &SaleForm) -> Verdict {
    let values = required_values(form);
    for (label, value) in REQUIRED_LABELS.iter().zip(values.iter()) {
        if value.trim().is_empty() {
            return Verdict::fail(format!("El campo \"{label}\" es obligatorio"));
        }
    }

    match form.operation_number.trim().parse::<u32>() {
        Ok(n) if n > 0 => {}
        _ => return Verdict::fail("El número de operación debe ser un número válido"),
    }

    match form.total_amount.trim().parse::<Decimal>() {
        Ok(amount) if amount > Decimal::ZERO => {}
        _ => return Verdict::fail("El monto total debe ser un número mayor a cero"),
    }

    let series = validate_series_number(&form.series_number);
    if !series.valid {
        return series;
    }

    let document = validate_document_number(&form.document_number);
    if !document.valid {
        return document;
    }

    let identity = validate_identity_document(
        &form.identity_document_type,
        &form.identity_document_number,
    );
    if !identity.valid {
        return identity;
    }

    let kind = match SaleKind::from_code(form.sale_kind.trim()) {
        Some(kind) => kind,
        None => return Verdict::fail("Tipo de venta no válido"),
    };

    if kind == SaleKind::Credit && form.due_date.trim().is_empty() {
        return Verdict::fail("Para ventas a crédito, la fecha de vencimiento es obligatoria");
    }

    if parse_date(&form.issue_date).is_none() {
        return Verdict::fail("La fecha de emisión no es una fecha válida");
    }

    Verdict::ok(READY_MESSAGE)
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Resolve the sale kind and build the wire payload from the form.
///
/// Independent of [`validate_sale_form`]: a credit sale with a blank due
/// date is rejected interactively, but if one gets here anyway the due
/// date defaults to thirty days after the issue date. Cash sales discard
/// any due date the user typed.
pub fn build_submission(form: &SaleForm) -> Result<(SaleKind, SalePayload), AppError> {
    let kind = SaleKind::from_code(form.sale_kind.trim())
        .ok_or_else(|| AppError::Validation("Tipo de venta no válido".to_string()))?;

    let operation_number = match form.operation_number.trim().parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(AppError::Validation(
                "El número de operación debe ser un número válido".to_string(),
            ))
        }
    };

    let total_amount = match form.total_amount.trim().parse::<Decimal>() {
        Ok(amount) if amount > Decimal::ZERO => amount,
        _ => {
            return Err(AppError::Validation(
                "El monto total debe ser un número mayor a cero".to_string(),
            ))
        }
    };

    let issue_date = parse_date(&form.issue_date).ok_or_else(|| {
        AppError::Validation(if form.issue_date.trim().is_empty() {
            "La fecha de emisión es obligatoria".to_string()
        } else {
            "La fecha de emisión no es una fecha válida".to_string()
        })
    })?;

    let due_date = match kind {
        SaleKind::Cash => None,
        SaleKind::Credit => {
            if form.due_date.trim().is_empty() {
                Some(default_due_date(issue_date))
            } else {
                Some(parse_date(&form.due_date).ok_or_else(|| {
                    AppError::Validation(
                        "La fecha de vencimiento no es una fecha válida".to_string(),
                    )
                })?)
            }
        }
    };

    let client = form.client.trim().to_string();
    let description = if form.description.trim().is_empty() {
        match kind {
            SaleKind::Cash => format!("Venta al contado - {client}"),
            SaleKind::Credit => format!("Venta a crédito - {client}"),
        }
    } else {
        form.description.trim().to_string()
    };

    let payload = SalePayload {
        operation_number,
        client,
        total_amount,
        description,
        voucher_type: form.voucher_type.trim().to_string(),
        series_number: form.series_number.trim().to_string(),
        document_number: form.document_number.trim().to_string(),
        identity_document_type: form.identity_document_type.trim().to_string(),
        identity_document_number: form.identity_document_number.trim().to_string(),
        issue_date,
        due_date,
    };

    Ok((kind, payload))
}

/// Thirty calendar days after the issue date.
fn default_due_date(issue_date: NaiveDate) -> NaiveDate {
    issue_date
        .checked_add_days(Days::new(30))
        .unwrap_or(issue_date)
}
