use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Currency;

/// Whether a transaction increases or decreases a balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Applies the signing rule: income counts positive, expense negative.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

/// One recorded income or expense event.
///
/// Created once inside [`Ledger::record`](crate::ledger::Ledger::record) and
/// never edited or deleted afterwards. `amount` holds the magnitude; the sign
/// lives in `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: Decimal,
    pub currency: Currency,
    pub kind: TransactionKind,
    pub description: String,
    pub recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        amount: Decimal,
        currency: Currency,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            currency,
            kind,
            description: description.into(),
            recorded_at: Utc::now(),
        }
    }

    /// The amount with the kind's sign applied.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }
}
