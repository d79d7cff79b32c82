//! Ledger Simulator
//!
//! Turns the rows a user typed into journal entries and reads the server's
//! verdict back into a status line. Balance checking itself happens on the
//! server.

use thiserror::Error;

use crate::dto::{LedgerEntry, LedgerValidateResponse};
use crate::status::{Status, StatusKind};

/// Placeholder account for rows that carry an amount but no name
pub const UNNAMED_ACCOUNT: &str = "?";

/// One table row exactly as typed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerRow {
    pub account: String,
    pub debit: String,
    pub credit: String,
}

impl LedgerRow {
    pub fn new(
        account: impl Into<String>,
        debit: impl Into<String>,
        credit: impl Into<String>,
    ) -> Self {
        Self {
            account: account.into(),
            debit: debit.into(),
            credit: credit.into(),
        }
    }

    /// The entry this row contributes, or `None` for a blank row
    pub fn to_entry(&self) -> Option<LedgerEntry> {
        let account = self.account.trim();
        let debit = parse_amount(&self.debit);
        let credit = parse_amount(&self.credit);

        if account.is_empty() && debit == 0.0 && credit == 0.0 {
            return None;
        }

        Some(LedgerEntry {
            account: if account.is_empty() {
                UNNAMED_ACCOUNT.to_string()
            } else {
                account.to_string()
            },
            debit,
            credit,
        })
    }
}

/// Blank or unparsable amounts count as zero
fn parse_amount(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Add at least one entry (account and debit or credit).")]
    NoEntries,

    #[error("Invalid entry {0:?}. Use account:debit:credit")]
    Malformed(String),
}

/// Collect the non-blank rows, in table order
pub fn collect_entries(rows: &[LedgerRow]) -> Result<Vec<LedgerEntry>, LedgerError> {
    let entries: Vec<LedgerEntry> = rows.iter().filter_map(LedgerRow::to_entry).collect();
    if entries.is_empty() {
        Err(LedgerError::NoEntries)
    } else {
        Ok(entries)
    }
}

/// Parse a command-line entry of the form `account:debit:credit`.
///
/// Trailing amounts may be left off (`Cash:500` is a debit of 500).
pub fn parse_row_spec(spec: &str) -> Result<LedgerRow, LedgerError> {
    let mut parts = spec.rsplitn(3, ':').collect::<Vec<_>>();
    parts.reverse();

    let row = match parts.as_slice() {
        [account] => LedgerRow::new(*account, "", ""),
        [account, debit] => LedgerRow::new(*account, *debit, ""),
        [account, debit, credit] => LedgerRow::new(*account, *debit, *credit),
        _ => return Err(LedgerError::Malformed(spec.to_string())),
    };

    for amount in [&row.debit, &row.credit] {
        let trimmed = amount.trim();
        if !trimmed.is_empty() && trimmed.parse::<f64>().is_err() {
            return Err(LedgerError::Malformed(spec.to_string()));
        }
    }

    Ok(row)
}

/// Status line for a validation result.
///
/// Unbalanced journals are errors. A balanced journal that does not match the
/// scenario is informational; anything else balanced is a success.
pub fn verdict(response: &LedgerValidateResponse) -> Status {
    let kind = if !response.balanced {
        StatusKind::Error
    } else if response.correct == Some(false) {
        StatusKind::Info
    } else {
        StatusKind::Success
    };

    let message = match response.hint.as_deref().filter(|h| !h.is_empty()) {
        Some(hint) => format!("{} {}", response.message, hint),
        None => response.message.clone(),
    };

    Status::new(message, kind)
}
