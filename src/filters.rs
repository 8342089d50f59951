//! Askama display filters shared by the templates.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Monetary amount in soles with two decimals: "S/ 150.50".
pub fn soles(amount: &Decimal) -> askama::Result<String> {
    Ok(format!("S/ {:.2}", amount))
}

/// ISO date or datetime rendered as dd/mm/yyyy. Values that do not parse
/// pass through untouched.
pub fn fecha(value: &str) -> askama::Result<String> {
    let date_part = value.split('T').next().unwrap_or(value);
    Ok(NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        value.parse().expect("decimal literal")
    }

    #[test]
    fn soles_always_shows_two_decimals() {
        assert_eq!(soles(&dec("150.5")).unwrap(), "S/ 150.50");
        assert_eq!(soles(&dec("0")).unwrap(), "S/ 0.00");
        assert_eq!(soles(&dec("-12.34")).unwrap(), "S/ -12.34");
        assert_eq!(soles(&dec("1234.5")).unwrap(), "S/ 1234.50");
    }

    #[test]
    fn fecha_formats_dates_and_datetimes() {
        assert_eq!(fecha("2024-03-10").unwrap(), "10/03/2024");
        assert_eq!(fecha("2024-03-10T15:04:05.000Z").unwrap(), "10/03/2024");
        assert_eq!(fecha("sin fecha").unwrap(), "sin fecha");
    }
}
