// CLI module
// Command-line arguments, rendering and the interactive shell

mod args;
pub mod render;
pub mod shell;

pub use args::CliArgs;
pub use shell::{LoopControl, Shell};

use crate::core::Bank;
use crate::types::LedgerError;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Parse command-line arguments using clap
///
/// If parsing fails (e.g., invalid arguments or --help flag), clap displays
/// an error message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Run a shell session over stdout
///
/// Input comes from the script file when one was given, stdin otherwise.
///
/// # Errors
///
/// Returns `LedgerError::Io` if the script cannot be opened or a read/write
/// fails during the session.
pub fn run(args: &CliArgs, bank: Bank) -> Result<Bank, LedgerError> {
    // Script file when given, interactive stdin otherwise
    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => {
            let file = File::open(path).map_err(|error| LedgerError::Io {
                message: format!("{}: {}", path.display(), error),
            })?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let mut shell = Shell::new(bank, input, io::stdout().lock());
    shell.run()?;

    Ok(shell.into_bank())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn args_for(path: &str) -> CliArgs {
        CliArgs::try_parse_from(["program", "--script", path]).unwrap()
    }

    #[test]
    fn test_run_reads_script_file() {
        let mut script = NamedTempFile::new().unwrap();
        write!(
            script,
            "nc\n11144477735\nMaria Silva\n17-05-1990\nRua A, 10\nna\n11144477735\n\
             d\n11144477735\n250\nq\n"
        )
        .unwrap();
        script.flush().unwrap();

        let args = args_for(script.path().to_str().unwrap());
        let bank = run(&args, Bank::new()).unwrap();

        let statement = bank.statement("11144477735").unwrap();
        assert_eq!(statement.holder(), "Maria Silva");
        assert_eq!(statement.balance(), rust_decimal::Decimal::new(250, 0));
    }

    #[test]
    fn test_run_missing_script_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let args = args_for(missing.to_str().unwrap());

        match run(&args, Bank::new()) {
            Err(LedgerError::Io { message }) => {
                assert!(message.starts_with(&missing.display().to_string()));
            }
            other => panic!("expected an I/O error, got {:?}", other.map(|_| ())),
        }
    }
}
