//! Menu-driven shell over a [`Bank`]
//!
//! The shell reads one answer per line from any `BufRead` and writes prompts
//! and results to any `Write`, so the same loop serves stdin, script files
//! and tests. End of input ends the session like the quit option.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::cli::render::{StatementText, ACCOUNT_SEPARATOR, MENU};
use crate::core::{cpf, Bank};
use crate::io::write_statement_csv;
use crate::types::LedgerError;

const BIRTH_DATE_FORMAT: &str = "%d-%m-%Y";

/// Whether the menu loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    bank: Bank,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(bank: Bank, input: R, output: W) -> Self {
        Shell {
            bank,
            input,
            output,
        }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// End the session and hand back the bank
    pub fn into_bank(self) -> Bank {
        self.bank
    }

    /// Run the menu loop until quit or end of input
    ///
    /// # Errors
    ///
    /// Only I/O failures end the loop with an error; business rejections are
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        loop {
            let Some(option) = self.prompt(MENU)? else {
                break;
            };

            if self.dispatch(&option)? == LoopControl::Exit {
                break;
            }
        }

        debug!("shell session ended");
        Ok(())
    }

    fn dispatch(&mut self, option: &str) -> Result<LoopControl, LedgerError> {
        debug!(option, "menu option selected");

        match option {
            "d" => self.deposit(),
            "w" => self.withdraw(),
            "s" => self.statement(),
            "nc" => self.new_client(),
            "na" => self.new_account(),
            "la" => self.list_accounts(),
            "x" => self.export_statement(),
            "q" => Ok(LoopControl::Exit),
            _ => {
                writeln!(
                    self.output,
                    "\n@@@ Invalid operation, please select a valid option. @@@"
                )?;
                Ok(LoopControl::Continue)
            }
        }
    }

    /// Write `label` and read one trimmed line, `None` at end of input
    ///
    /// Bytes that are not valid UTF-8 are replaced, so they reach the
    /// command as unrecognized text instead of ending the session.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, LedgerError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    fn success(&mut self, message: &str) -> Result<LoopControl, LedgerError> {
        writeln!(self.output, "\n=== {} ===", message)?;
        Ok(LoopControl::Continue)
    }

    fn failure(&mut self, error: &LedgerError) -> Result<LoopControl, LedgerError> {
        writeln!(self.output, "\n@@@ Operation failed! {} @@@", error)?;
        Ok(LoopControl::Continue)
    }

    /// Ask for a CPF and check that a client holds it
    fn prompt_client(&mut self) -> Result<Option<Result<String, LedgerError>>, LedgerError> {
        let Some(tax_id) = self.prompt("Client CPF: ")? else {
            return Ok(None);
        };

        if self.bank.find_client(&tax_id).is_none() {
            return Ok(Some(Err(LedgerError::client_not_found(&tax_id))));
        }

        Ok(Some(Ok(tax_id)))
    }

    fn deposit(&mut self) -> Result<LoopControl, LedgerError> {
        self.move_money("Deposit amount: ", "Deposit completed!", Bank::deposit)
    }

    fn withdraw(&mut self) -> Result<LoopControl, LedgerError> {
        self.move_money("Withdrawal amount: ", "Withdrawal completed!", Bank::withdraw)
    }

    fn move_money(
        &mut self,
        label: &str,
        done: &str,
        operation: fn(&mut Bank, &str, Decimal) -> Result<(), LedgerError>,
    ) -> Result<LoopControl, LedgerError> {
        let tax_id = match self.prompt_client()? {
            None => return Ok(LoopControl::Exit),
            Some(Err(error)) => return self.failure(&error),
            Some(Ok(tax_id)) => tax_id,
        };

        let Some(raw_amount) = self.prompt(label)? else {
            return Ok(LoopControl::Exit);
        };

        let result = parse_amount(&raw_amount)
            .and_then(|amount| operation(&mut self.bank, &tax_id, amount));

        match result {
            Ok(()) => self.success(done),
            Err(error) => self.failure(&error),
        }
    }

    fn statement(&mut self) -> Result<LoopControl, LedgerError> {
        let Some(tax_id) = self.prompt("Client CPF: ")? else {
            return Ok(LoopControl::Exit);
        };

        let text = self
            .bank
            .statement(&tax_id)
            .map(|statement| StatementText::new(statement, Local::now()).to_string());

        match text {
            Ok(text) => {
                writeln!(self.output, "{}", text)?;
                Ok(LoopControl::Continue)
            }
            Err(error) => self.failure(&error),
        }
    }

    fn export_statement(&mut self) -> Result<LoopControl, LedgerError> {
        let Some(tax_id) = self.prompt("Client CPF: ")? else {
            return Ok(LoopControl::Exit);
        };

        let records = self
            .bank
            .statement(&tax_id)
            .map(|statement| statement.records().to_vec());

        match records {
            Ok(records) => {
                writeln!(self.output)?;
                write_statement_csv(&records, &mut self.output)?;
                Ok(LoopControl::Continue)
            }
            Err(error) => self.failure(&error),
        }
    }

    fn new_client(&mut self) -> Result<LoopControl, LedgerError> {
        let Some(raw_tax_id) = self.prompt("CPF (digits only): ")? else {
            return Ok(LoopControl::Exit);
        };

        let tax_id = match cpf::parse(&raw_tax_id) {
            Ok(tax_id) => tax_id,
            Err(error) => return self.failure(&error),
        };
        if self.bank.find_client(tax_id.as_str()).is_some() {
            return self.failure(&LedgerError::duplicate_tax_id(tax_id.as_str()));
        }

        let Some(full_name) = self.prompt("Full name: ")? else {
            return Ok(LoopControl::Exit);
        };
        let Some(raw_birth_date) = self.prompt("Birth date (dd-mm-yyyy): ")? else {
            return Ok(LoopControl::Exit);
        };
        let Some(address) =
            self.prompt("Address (street, number - district - city/state): ")?
        else {
            return Ok(LoopControl::Exit);
        };

        let result = parse_birth_date(&raw_birth_date).and_then(|birth_date| {
            self.bank
                .register_individual(tax_id.as_str(), &full_name, birth_date, &address)
        });

        match result {
            Ok(_) => self.success("Client registered!"),
            Err(error) => self.failure(&error),
        }
    }

    fn new_account(&mut self) -> Result<LoopControl, LedgerError> {
        let Some(tax_id) = self.prompt("Client CPF: ")? else {
            return Ok(LoopControl::Exit);
        };

        match self.bank.open_checking_account(&tax_id) {
            Ok(number) => self.success(&format!("Account {} opened!", number)),
            Err(error) => self.failure(&error),
        }
    }

    fn list_accounts(&mut self) -> Result<LoopControl, LedgerError> {
        let accounts = self.bank.accounts();

        if accounts.is_empty() {
            writeln!(self.output, "\nNo accounts registered.")?;
            return Ok(LoopControl::Continue);
        }

        // Leave the menu prompt's line before the first block
        writeln!(self.output)?;
        for (account, client) in accounts {
            writeln!(self.output, "{}", ACCOUNT_SEPARATOR)?;
            writeln!(
                self.output,
                "{}",
                account.label(client.full_name().unwrap_or_default())
            )?;
        }

        Ok(LoopControl::Continue)
    }
}

/// Parse a user-typed amount, accepting a comma as decimal separator
///
/// Amounts are whole cents: more than two significant decimal places is
/// rejected, trailing zeros are not.
fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let amount = Decimal::from_str(&input.trim().replace(',', "."))
        .map_err(|_| LedgerError::invalid_amount_input(input))?;

    if amount.normalize().scale() > 2 {
        return Err(LedgerError::invalid_amount_input(input));
    }

    Ok(amount)
}

fn parse_birth_date(input: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(input.trim(), BIRTH_DATE_FORMAT)
        .map_err(|_| LedgerError::invalid_birth_date(input))
}
