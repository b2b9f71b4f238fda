use dialoguer::{theme::ColorfulTheme, Select};

use crate::cli::{forms, output};
use crate::currency::{format_amount, Currency};
use crate::errors::ShellError;
use crate::ledger::{Ledger, Transaction, TransactionKind};

#[derive(Clone, Copy)]
enum Action {
    RecordIncome,
    RecordExpense,
    History,
    Export,
    Exit,
}

const ACTIONS: [(Action, &str); 5] = [
    (Action::RecordIncome, "Record income"),
    (Action::RecordExpense, "Record expense"),
    (Action::History, "Transaction history"),
    (Action::Export, "Export history as JSON"),
    (Action::Exit, "Exit"),
];

/// Runs the single-screen budget tracker until the user exits.
pub fn run_cli() -> Result<(), ShellError> {
    crate::init();

    let mut ledger = Ledger::new();
    ledger.subscribe(|change| {
        tracing::info!(
            kind = change.transaction.kind.label(),
            currency = change.transaction.currency.code(),
            amount = %change.transaction.amount,
            balance = %change.balance,
            "ledger updated"
        );
    });

    let theme = ColorfulTheme::default();

    loop {
        print_balances(&ledger);

        let labels: Vec<&str> = ACTIONS.iter().map(|(_, label)| *label).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt("Action")
            .items(&labels)
            .default(0)
            .interact_opt()?;
        let action = match choice {
            Some(index) => ACTIONS[index].0,
            None => break,
        };

        match action {
            Action::RecordIncome => record(&mut ledger, &theme, TransactionKind::Income)?,
            Action::RecordExpense => record(&mut ledger, &theme, TransactionKind::Expense)?,
            Action::History => print_history(&ledger),
            Action::Export => export_history(&ledger)?,
            Action::Exit => break,
        }
    }

    output::info("Goodbye.");
    Ok(())
}

fn print_balances(ledger: &Ledger) {
    output::section("Balances");
    for currency in Currency::ALL {
        output::info(format!(
            "{}  {}",
            currency.symbol(),
            format_amount(ledger.balance_of(currency), currency)
        ));
    }
    output::blank_line();
}

fn record(
    ledger: &mut Ledger,
    theme: &ColorfulTheme,
    kind: TransactionKind,
) -> Result<(), ShellError> {
    let amount = match forms::prompt_amount(theme)? {
        Some(amount) => amount,
        // Unparseable input skips the record entirely: no transaction, no
        // balance change, no notification.
        None => return Ok(()),
    };
    let currency = forms::prompt_currency(theme)?;
    let description = forms::prompt_description(theme)?;

    ledger.record(amount, currency, kind, description);
    output::success(format!(
        "Recorded {} of {}",
        kind.label(),
        format_amount(amount, currency)
    ));
    Ok(())
}

fn print_history(ledger: &Ledger) {
    output::section("History");
    if ledger.is_empty() {
        output::info("No transactions recorded yet.");
        return;
    }
    for txn in ledger.transactions() {
        output::info(render_line(txn));
    }
}

fn render_line(txn: &Transaction) -> String {
    let sign = match txn.kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    let description = if txn.description.is_empty() {
        "(no description)"
    } else {
        txn.description.as_str()
    };
    format!(
        "{sign}{}  {description}",
        format_amount(txn.amount, txn.currency)
    )
}

fn export_history(ledger: &Ledger) -> Result<(), ShellError> {
    let rendered = serde_json::to_string_pretty(ledger.transactions())?;
    println!("{rendered}");
    Ok(())
}
