use crate::types::AccountLimits;
use clap::Parser;
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Interactive retail banking ledger
#[derive(Parser, Debug)]
#[command(name = "retail-ledger")]
#[command(about = "Interactive retail banking ledger", long_about = None)]
pub struct CliArgs {
    /// Script file with menu input, one answer per line
    #[arg(
        long = "script",
        value_name = "PATH",
        help = "Read menu input from a file instead of stdin"
    )]
    pub script: Option<PathBuf>,

    /// Per-withdrawal limit for new checking accounts
    #[arg(
        long = "withdrawal-limit",
        value_name = "AMOUNT",
        help = "Largest single withdrawal on checking accounts (default: 500.00)"
    )]
    pub withdrawal_limit: Option<Decimal>,

    /// Withdrawal count cap for new checking accounts
    #[arg(
        long = "max-withdrawals",
        value_name = "COUNT",
        help = "Number of withdrawals a checking account accepts (default: 3)"
    )]
    pub max_withdrawals: Option<u32>,

    /// Log filter, overridden by RUST_LOG
    #[arg(
        long = "log-level",
        value_name = "FILTER",
        default_value = "warn",
        help = "Log filter directive written to stderr, e.g. 'info' or 'retail_ledger=debug'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create the AccountLimits for new checking accounts
    ///
    /// Values given on the command line replace the defaults; invalid ones
    /// fall back to the defaults (see [`AccountLimits::new`]).
    pub fn to_account_limits(&self) -> AccountLimits {
        // Use provided values or defaults
        if self.withdrawal_limit.is_some() || self.max_withdrawals.is_some() {
            // At least one custom value provided, fill the other from the defaults
            let default = AccountLimits::default();
            AccountLimits::new(
                self.withdrawal_limit.unwrap_or(default.withdrawal_limit),
                self.max_withdrawals.unwrap_or(default.max_withdrawals),
            )
        } else {
            // No custom values, use all defaults
            AccountLimits::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_script(&["program"], None)]
    #[case::script(&["program", "--script", "session.txt"], Some("session.txt"))]
    fn test_script_parsing(#[case] args: &[&str], #[case] expected: Option<&str>) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.script, expected.map(PathBuf::from));
    }

    #[rstest]
    #[case::default_level(&["program"], "warn")]
    #[case::custom_level(&["program", "--log-level", "debug"], "debug")]
    fn test_log_level(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_level, expected);
    }

    #[rstest]
    #[case::all_defaults(&["program"], Decimal::new(500, 0), 3)]
    #[case::custom_limit(&["program", "--withdrawal-limit", "1000.50"], Decimal::new(100050, 2), 3)]
    #[case::custom_count(&["program", "--max-withdrawals", "10"], Decimal::new(500, 0), 10)]
    #[case::all_custom(
        &["program", "--withdrawal-limit", "250", "--max-withdrawals", "5"],
        Decimal::new(250, 0),
        5
    )]
    fn test_account_limits_conversion(
        #[case] args: &[&str],
        #[case] expected_limit: Decimal,
        #[case] expected_count: u32,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let limits = parsed.to_account_limits();

        assert_eq!(limits.withdrawal_limit, expected_limit);
        assert_eq!(limits.max_withdrawals, expected_count);
    }

    // Zero values should fall back to defaults
    #[rstest]
    #[case::zero_limit(&["program", "--withdrawal-limit", "0"], Decimal::new(500, 0), 3)]
    #[case::zero_count(&["program", "--max-withdrawals", "0"], Decimal::new(500, 0), 3)]
    fn test_account_limits_zero_values_fallback(
        #[case] args: &[&str],
        #[case] expected_limit: Decimal,
        #[case] expected_count: u32,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let limits = parsed.to_account_limits();

        assert_eq!(limits.withdrawal_limit, expected_limit);
        assert_eq!(limits.max_withdrawals, expected_count);
    }

    #[rstest]
    #[case::bad_limit(&["program", "--withdrawal-limit", "lots"])]
    #[case::negative_count(&["program", "--max-withdrawals", "-1"])]
    #[case::unknown_flag(&["program", "--batch-size", "10"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
