use std::str::FromStr;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;

use crate::currency::Currency;
use crate::errors::ShellError;

/// Prompts for an amount, taken as free text.
///
/// Returns `None` when the input does not parse as a decimal; the caller
/// skips the record in that case and nothing else happens.
pub fn prompt_amount(theme: &ColorfulTheme) -> Result<Option<Decimal>, ShellError> {
    let raw: String = Input::with_theme(theme)
        .with_prompt("Amount")
        .allow_empty(true)
        .interact_text()?;
    Ok(Decimal::from_str(raw.trim()).ok())
}

/// Exclusive currency selector over the closed set.
pub fn prompt_currency(theme: &ColorfulTheme) -> Result<Currency, ShellError> {
    let labels: Vec<String> = Currency::ALL
        .iter()
        .map(|currency| format!("{} ({})", currency.code(), currency.symbol()))
        .collect();
    let index = Select::with_theme(theme)
        .with_prompt("Currency")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(Currency::ALL[index])
}

/// Free-text description; empty is allowed.
pub fn prompt_description(theme: &ColorfulTheme) -> Result<String, ShellError> {
    let text: String = Input::with_theme(theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;
    Ok(text)
}
