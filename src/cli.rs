//! Command-line interface definitions.
//!
//! The binary parses these with `clap` and turns them into a [`Config`] and
//! [`SearchOptions`]; keeping them in the library lets tests exercise parsing.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::client::SearchOptions;
use crate::config::{
    Config, LogFormat, LogLevel, API_KEY_ENV, API_URL, DEFAULT_TIMEOUT_SECS, QUERY_DATE_FORMAT,
    USER_AGENT,
};

/// Look up historic WHOIS records of a domain.
#[derive(Debug, Parser)]
#[command(name = "whois_history", version)]
pub struct Cli {
    /// WHOIS XML API key
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: String,

    /// API endpoint URL
    #[arg(long, default_value = API_URL)]
    pub endpoint: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the number of matching records (free)
    Preview(LookupArgs),
    /// Print the matching records as JSON (billed)
    Purchase(LookupArgs),
}

/// Domain and date filters shared by both subcommands. Dates are `YYYY-MM-DD`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Domain to look up, e.g. example.com
    pub domain_name: String,

    /// Records discovered since this date
    #[arg(long, value_parser = parse_date)]
    pub since_date: Option<NaiveDate>,

    /// Records created after this date
    #[arg(long, value_parser = parse_date)]
    pub created_date_from: Option<NaiveDate>,

    /// Records created before this date
    #[arg(long, value_parser = parse_date)]
    pub created_date_to: Option<NaiveDate>,

    /// Records updated after this date
    #[arg(long, value_parser = parse_date)]
    pub updated_date_from: Option<NaiveDate>,

    /// Records updated before this date
    #[arg(long, value_parser = parse_date)]
    pub updated_date_to: Option<NaiveDate>,

    /// Records expiring after this date
    #[arg(long, value_parser = parse_date)]
    pub expired_date_from: Option<NaiveDate>,

    /// Records expiring before this date
    #[arg(long, value_parser = parse_date)]
    pub expired_date_to: Option<NaiveDate>,
}

impl LookupArgs {
    /// Date filters as [`SearchOptions`].
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            since_date: self.since_date,
            created_date_from: self.created_date_from,
            created_date_to: self.created_date_to,
            updated_date_from: self.updated_date_from,
            updated_date_to: self.updated_date_to,
            expired_date_from: self.expired_date_from,
            expired_date_to: self.expired_date_to,
        }
    }
}

impl Cli {
    /// Client configuration described by the global options.
    pub fn config(&self) -> Config {
        Config {
            api_key: self.api_key.clone(),
            endpoint: self.endpoint.clone(),
            user_agent: self.user_agent.clone(),
            timeout_seconds: self.timeout_seconds,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }

    /// The lookup arguments of whichever subcommand was given.
    pub fn lookup(&self) -> &LookupArgs {
        match &self.command {
            Command::Preview(args) | Command::Purchase(args) => args,
        }
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, QUERY_DATE_FORMAT)
        .map_err(|e| format!("'{}' is not a YYYY-MM-DD date: {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2020-04-25").unwrap(),
            NaiveDate::from_ymd_opt(2020, 4, 25).unwrap()
        );
        assert!(parse_date("25/04/2020").is_err());
        assert!(parse_date("2020-13-01").is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
