use rust_decimal::Decimal;

use super::RawMovement;

pub const PURCHASE_DESCRIPTION: &str = "Compra de mercaderías";
pub const SALE_DESCRIPTION: &str = "Venta de mercaderías";

/// One derived row of the general-ledger table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    pub id: String,
    pub process_code: String,
    pub description: &'static str,
    pub debit: Decimal,
    pub credit: Decimal,
    pub running_balance: Decimal,
}

impl StatementLine {
    /// CSS bucket for the running balance column.
    pub fn balance_class(&self) -> &'static str {
        if self.running_balance.is_zero() {
            "saldo-cero"
        } else if self.running_balance > Decimal::ZERO {
            "saldo-positivo"
        } else {
            "saldo-negativo"
        }
    }
}

/// Presentation of one account's general ledger.
///
/// Each raw movement is shown at its magnitude (the larger of debit and
/// credit) as a purchase leg followed by a sale leg, with a running balance
/// after every row. Movements without a positive magnitude are skipped.
/// The legs cancel pairwise, so the closing row always totals zero; the
/// authoritative balance comes from the saldo endpoint instead.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralLedger {
    pub account_code: String,
    pub lines: Vec<StatementLine>,
    pub final_balance: Decimal,
}

impl GeneralLedger {
    pub fn build(account_code: &str, movements: &[RawMovement]) -> Self {
        let mut lines = Vec::with_capacity(movements.len() * 2);
        let mut balance = Decimal::ZERO;

        for movement in movements {
            let amount = movement.debit.max(movement.credit);
            if amount <= Decimal::ZERO {
                continue;
            }

            balance += amount;
            lines.push(StatementLine {
                id: format!("{}-C", movement.id),
                process_code: format!("AS-{}-C", movement.id),
                description: PURCHASE_DESCRIPTION,
                debit: amount,
                credit: Decimal::ZERO,
                running_balance: balance,
            });

            balance -= amount;
            lines.push(StatementLine {
                id: format!("{}-V", movement.id),
                process_code: format!("AS-{}-V", movement.id),
                description: SALE_DESCRIPTION,
                debit: Decimal::ZERO,
                credit: amount,
                running_balance: balance,
            });
        }

        GeneralLedger {
            account_code: account_code.to_string(),
            lines,
            final_balance: Decimal::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
