//! Currency conversion over a fixed rate table.
//!
//! The converter screen is seeded with the calculator's display string and
//! converts it between a handful of currencies. The calculator engine never
//! depends on this module.
//!
//! # Example
//!
//! ```rust
//! use tally::converter::{ConverterState, Currency};
//!
//! let mut converter = ConverterState::seeded("100");
//! assert_eq!(converter.result(), "85");
//!
//! converter.to = Currency::Uah;
//! assert_eq!(converter.result(), "4230");
//! ```

use crate::engine::format::{format_finite, format_non_finite};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised by the converter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConverterError {
    #[error("Unknown currency code '{0}'")]
    UnknownCurrency(String),
}

/// A currency offered by the converter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
    Jpy,
    Uah,
}

impl Currency {
    /// Every currency, in menu order.
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Uah,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Jpy => "JPY",
            Self::Uah => "UAH",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = ConverterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ConverterError::UnknownCurrency(s.to_string()))
    }
}

/// Multiplicative rate converting one unit of `from` into `to`.
pub fn rate(from: Currency, to: Currency) -> f64 {
    use Currency::*;

    match (from, to) {
        (Usd, Eur) => 0.85,
        (Usd, Gbp) => 0.75,
        (Usd, Jpy) => 110.0,
        (Usd, Uah) => 42.3,
        (Eur, Usd) => 1.18,
        (Eur, Gbp) => 0.88,
        (Eur, Jpy) => 129.53,
        (Eur, Uah) => 49.8,
        (Gbp, Usd) => 1.33,
        (Gbp, Eur) => 1.14,
        (Gbp, Jpy) => 148.2,
        (Gbp, Uah) => 56.4,
        (Jpy, Usd) => 0.0091,
        (Jpy, Eur) => 0.0077,
        (Jpy, Gbp) => 0.0067,
        (Jpy, Uah) => 0.39,
        (Uah, Usd) => 0.024,
        (Uah, Eur) => 0.020,
        (Uah, Gbp) => 0.018,
        (Uah, Jpy) => 2.56,
        (Usd, Usd) | (Eur, Eur) | (Gbp, Gbp) | (Jpy, Jpy) | (Uah, Uah) => 1.0,
    }
}

/// Convert a typed amount. Amounts that do not parse convert as zero.
pub fn convert(from: Currency, to: Currency, amount: &str) -> f64 {
    let value = amount.trim().parse::<f64>().unwrap_or(0.0);
    value * rate(from, to)
}

/// Inputs of the converter screen.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ConverterState {
    pub amount: String,
    pub from: Currency,
    pub to: Currency,
}

impl Default for ConverterState {
    fn default() -> Self {
        Self::seeded("")
    }
}

impl ConverterState {
    /// Seed the amount from a display string, converting USD to EUR.
    ///
    /// An empty seed becomes `"0"`.
    pub fn seeded(display: &str) -> Self {
        let amount = if display.is_empty() { "0" } else { display };
        Self {
            amount: amount.to_string(),
            from: Currency::Usd,
            to: Currency::Eur,
        }
    }

    /// Converted amount as a number.
    pub fn value(&self) -> f64 {
        convert(self.from, self.to, &self.amount)
    }

    /// Converted amount formatted for display.
    pub fn result(&self) -> String {
        let value = self.value();
        if value.is_finite() {
            format_finite(value)
        } else {
            format_non_finite(value)
        }
    }

    /// Swap source and target currencies.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
    }
}
