use std::collections::HashMap;
use std::fmt;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::currency::Currency;

use super::transaction::{Transaction, TransactionKind};

/// Notification handed to subscribed observers after every record.
///
/// Carries the new transaction and the updated balance of its currency so a
/// front end can react without re-reading the whole ledger mid-call.
#[derive(Debug, Clone)]
pub struct LedgerChange {
    pub transaction: Transaction,
    pub balance: Decimal,
}

/// Handle returned by [`Ledger::subscribe`], used to remove the observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Observer = Box<dyn FnMut(&LedgerChange)>;

/// Single source of truth for balances and transaction history.
///
/// Transactions are stored most-recent-first, so the history view is already
/// in display order. Balances are folded per currency on every record;
/// replaying the history from zero yields the same totals.
pub struct Ledger {
    transactions: Vec<Transaction>,
    balances: HashMap<Currency, Decimal>,
    observers: Vec<(SubscriberId, Observer)>,
    next_subscriber: u64,
}

impl Ledger {
    pub fn new() -> Self {
        let balances = Currency::ALL
            .iter()
            .map(|currency| (*currency, Decimal::ZERO))
            .collect();
        Self {
            transactions: Vec::new(),
            balances,
            observers: Vec::new(),
            next_subscriber: 0,
        }
    }

    /// Records a new transaction and returns its identifier.
    ///
    /// `amount` is taken as a magnitude and the sign of the balance update
    /// comes from `kind`. Callers are expected to pass a positive value; a
    /// negative amount inverts the update without being rejected.
    ///
    /// Every subscribed observer is notified before this returns.
    pub fn record(
        &mut self,
        amount: Decimal,
        currency: Currency,
        kind: TransactionKind,
        description: impl Into<String>,
    ) -> Uuid {
        let transaction = Transaction::new(amount, currency, kind, description);
        let id = transaction.id;

        let entry = self.balances.entry(currency).or_insert(Decimal::ZERO);
        *entry += kind.signed(amount);
        let balance = *entry;

        self.transactions.insert(0, transaction.clone());
        tracing::debug!(
            kind = kind.label(),
            currency = currency.code(),
            %amount,
            %balance,
            "transaction recorded"
        );

        let change = LedgerChange {
            transaction,
            balance,
        };
        for (_, observer) in &mut self.observers {
            observer(&change);
        }

        id
    }

    /// Current running balance for `currency`.
    pub fn balance_of(&self, currency: Currency) -> Decimal {
        self.balances
            .get(&currency)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Full history, most recent first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Registers an observer called synchronously after every record, in
    /// subscription order.
    pub fn subscribe(&mut self, observer: impl FnMut(&LedgerChange) + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber);
        self.next_subscriber += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a previously registered observer. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.observers.retain(|(candidate, _)| *candidate != id);
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("transactions", &self.transactions)
            .field("balances", &self.balances)
            .field("observers", &self.observers.len())
            .finish()
    }
}
