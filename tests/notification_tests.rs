use std::cell::RefCell;
use std::rc::Rc;

use pocket_ledger::currency::Currency;
use pocket_ledger::ledger::{Ledger, LedgerChange, TransactionKind};
use rust_decimal_macros::dec;

#[test]
fn observer_receives_the_recorded_transaction() {
    let mut ledger = Ledger::new();
    let seen: Rc<RefCell<Vec<LedgerChange>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    ledger.subscribe(move |change| sink.borrow_mut().push(change.clone()));

    let id = ledger.record(dec!(50), Currency::Dollars, TransactionKind::Income, "salary");

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].transaction.id, id);
    assert_eq!(seen[0].transaction.description, "salary");
    assert_eq!(seen[0].balance, dec!(50));
}

#[test]
fn notification_balance_tracks_the_changed_currency() {
    let mut ledger = Ledger::new();
    let balances = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&balances);
    ledger.subscribe(move |change| {
        sink.borrow_mut()
            .push((change.transaction.currency, change.balance));
    });

    ledger.record(dec!(50), Currency::Dollars, TransactionKind::Income, "");
    ledger.record(dec!(1000), Currency::Riels, TransactionKind::Income, "");
    ledger.record(dec!(20), Currency::Dollars, TransactionKind::Expense, "");

    assert_eq!(
        *balances.borrow(),
        vec![
            (Currency::Dollars, dec!(50)),
            (Currency::Riels, dec!(1000)),
            (Currency::Dollars, dec!(30)),
        ]
    );
}

#[test]
fn observers_fire_in_subscription_order() {
    let mut ledger = Ledger::new();
    let order = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&order);
    ledger.subscribe(move |_| sink.borrow_mut().push("first"));
    let sink = Rc::clone(&order);
    ledger.subscribe(move |_| sink.borrow_mut().push("second"));

    ledger.record(dec!(1), Currency::Riels, TransactionKind::Income, "");

    assert_eq!(*order.borrow(), vec!["first", "second"]);
}

#[test]
fn unsubscribed_observer_stays_silent() {
    let mut ledger = Ledger::new();
    let count = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&count);
    let id = ledger.subscribe(move |_| *sink.borrow_mut() += 1);

    ledger.record(dec!(1), Currency::Dollars, TransactionKind::Income, "");
    ledger.unsubscribe(id);
    ledger.record(dec!(1), Currency::Dollars, TransactionKind::Income, "");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn remaining_observers_survive_an_unsubscribe() {
    let mut ledger = Ledger::new();
    let count = Rc::new(RefCell::new(0usize));

    let sink = Rc::clone(&count);
    let first = ledger.subscribe(move |_| *sink.borrow_mut() += 1);
    let sink = Rc::clone(&count);
    ledger.subscribe(move |_| *sink.borrow_mut() += 10);

    ledger.unsubscribe(first);
    ledger.record(dec!(1), Currency::Dollars, TransactionKind::Income, "");

    assert_eq!(*count.borrow(), 10);
}
