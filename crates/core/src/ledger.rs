//! Financial transaction kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Direction of a money movement recorded against the office (and optionally a case).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(CoreError::Validation(format!(
                "Invalid transaction type '{other}'. Expected one of: income, expense"
            ))),
        }
    }
}

/// Reject amounts that cannot be stored meaningfully (NaN, infinities).
///
/// No currency rounding is applied; negative amounts are accepted as-is.
pub fn validate_amount(amount: f64) -> Result<f64, CoreError> {
    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(CoreError::Validation("amount must be a finite number".into()))
    }
}
