//! Symbol — provider ticker plus display label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A provider-facing ticker paired with its display label.
///
/// The label is the ticker with the exchange suffix stripped
/// (`RELIANCE.NS` → `RELIANCE`). Identity is the ticker string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol {
    pub ticker: String,
    pub label: String,
}

impl Symbol {
    pub fn new(ticker: impl Into<String>) -> Self {
        let ticker = ticker.into();
        let label = match ticker.find('.') {
            Some(dot) => ticker[..dot].to_string(),
            None => ticker.clone(),
        };
        Self { ticker, label }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ticker)
    }
}
