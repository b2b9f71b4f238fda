//! Ledger domain models and the observable aggregate.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod transaction;

pub use ledger::{Ledger, LedgerChange, SubscriberId};
pub use transaction::{Transaction, TransactionKind};
