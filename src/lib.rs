#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger offers the balance and transaction-history primitives behind
//! a two-currency personal budget tracker, plus the terminal front end that
//! consumes them.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Pocket Ledger tracing initialized.");
    });
}
