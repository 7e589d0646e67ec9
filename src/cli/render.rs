//! Text rendering for the interactive shell

use std::fmt;

use chrono::{DateTime, Local};

use crate::core::Statement;
use crate::io::csv_format::{format_amount, TIMESTAMP_FORMAT};

pub const MENU: &str = "
================ MENU ================
[d]\tDeposit
[w]\tWithdraw
[s]\tStatement
[nc]\tNew client
[na]\tNew account
[la]\tList accounts
[x]\tExport statement (CSV)
[q]\tQuit
=> ";

/// Separator printed between accounts in the listing
pub const ACCOUNT_SEPARATOR: &str = "========================================";

/// Printable statement of one account
pub struct StatementText<'a> {
    statement: Statement<'a>,
    generated_at: DateTime<Local>,
}

impl<'a> StatementText<'a> {
    pub fn new(statement: Statement<'a>, generated_at: DateTime<Local>) -> Self {
        StatementText {
            statement,
            generated_at,
        }
    }
}

impl fmt::Display for StatementText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n================ STATEMENT ================")?;
        writeln!(f, "Holder: {}", self.statement.holder())?;
        writeln!(f, "Date: {}", self.generated_at.format(TIMESTAMP_FORMAT))?;

        let records = self.statement.records();
        if records.is_empty() {
            writeln!(f, "No transactions recorded.")?;
        }
        for record in records {
            writeln!(f, "\n{}:\n\tR$ {}", record.kind(), format_amount(record.amount()))?;
        }

        writeln!(f, "\nBalance:\n\tR$ {}", format_amount(self.statement.balance()))?;
        write!(f, "===========================================")
    }
}
