pub mod archive;
pub mod report;
pub mod summary;

use clap::Parser;
use colored::Colorize;

const DOWNLOAD_HELP: &str = "\
DOWNLOAD LINKS:
Download activity CSV files and place them on the desktop:
  Discover : https://card.discover.com/cardmembersvcs/statements/app/activity?view=R#/ytd
  Chase    : https://secure.chase.com/web/auth/dashboard#/dashboard/overview
  Apple    : export from the Wallet app

Whitelists and directories can be overridden in
~/.config/credit-transaction-parser/settings.json";

#[derive(Parser, Debug)]
#[command(
    name = "credit-transaction-parser",
    about = "Summarize a month of Discover, Chase and Apple Card spending.",
    after_help = DOWNLOAD_HELP
)]
pub struct Cli {
    /// Month to summarize, 1-12 (default: current month)
    #[arg(allow_negative_numbers = true)]
    pub month: Option<String>,
    /// Move the statement files into the archive directory when done
    #[arg(short = 'c', long)]
    pub clean: bool,
}

pub(crate) fn info(msg: impl std::fmt::Display) {
    println!("{} {msg}", "[ INFO ]".cyan());
}

pub(crate) fn warn(msg: impl std::fmt::Display) {
    println!("{} {msg}", "[ WARN ]".yellow());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_and_clean() {
        let cli = Cli::try_parse_from(["ctp", "3", "--clean"]).unwrap();
        assert_eq!(cli.month.as_deref(), Some("3"));
        assert!(cli.clean);
    }

    #[test]
    fn test_short_clean_flag_without_month() {
        let cli = Cli::try_parse_from(["ctp", "-c"]).unwrap();
        assert!(cli.month.is_none());
        assert!(cli.clean);
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Cli::try_parse_from(["ctp", "--save"]).is_err());
    }

    #[test]
    fn test_negative_month_reaches_month_parsing() {
        let cli = Cli::try_parse_from(["ctp", "-3"]).unwrap();
        assert_eq!(cli.month.as_deref(), Some("-3"));
        assert!(!cli.clean);
    }

    #[test]
    fn test_version_flag_rejected() {
        assert!(Cli::try_parse_from(["ctp", "--version"]).is_err());
        assert!(Cli::try_parse_from(["ctp", "-V"]).is_err());
    }

    #[test]
    fn test_malformed_month_still_parses() {
        let cli = Cli::try_parse_from(["ctp", "march"]).unwrap();
        assert_eq!(cli.month.as_deref(), Some("march"));
    }
}
