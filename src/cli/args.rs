use crate::logging::LogFormat;
use crate::server::ServerConfig;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// Score purchase receipts over HTTP
#[derive(Parser, Debug)]
#[command(name = "receipt-points")]
#[command(about = "Accept purchase receipts and score them for points", long_about = None)]
pub struct CliArgs {
    /// Address the HTTP server listens on
    #[arg(
        long = "bind",
        value_name = "ADDR",
        env = "RECEIPT_POINTS_BIND",
        default_value = "0.0.0.0:8080",
        global = true,
        help = "Socket address to listen on"
    )]
    pub bind: SocketAddr,

    /// Number of runtime worker threads
    #[arg(
        long = "workers",
        value_name = "COUNT",
        env = "RECEIPT_POINTS_WORKERS",
        global = true,
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub workers: Option<usize>,

    /// Log output format
    #[arg(
        long = "log-format",
        value_name = "FORMAT",
        value_enum,
        env = "RECEIPT_POINTS_LOG_FORMAT",
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands; `serve` runs when none is given
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP service
    Serve,

    /// Score a receipt JSON file and print the breakdown
    Points {
        /// Path to a receipt JSON document
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl CliArgs {
    /// The selected subcommand, defaulting to `serve`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }

    /// Create a ServerConfig from CLI arguments
    ///
    /// A worker count of 0 falls back to the default with a warning.
    pub fn to_server_config(&self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig::new(self.bind, self.workers.unwrap_or(default.workers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_subcommand(&["program"], Command::Serve)]
    #[case::explicit_serve(&["program", "serve"], Command::Serve)]
    #[case::points(
        &["program", "points", "receipt.json"],
        Command::Points { file: PathBuf::from("receipt.json") }
    )]
    fn test_command_parsing(#[case] args: &[&str], #[case] expected: Command) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.command(), expected);
    }

    #[rstest]
    #[case::default_bind(&["program"], "0.0.0.0:8080")]
    #[case::custom_bind(&["program", "--bind", "127.0.0.1:9000"], "127.0.0.1:9000")]
    #[case::bind_after_subcommand(&["program", "serve", "--bind", "127.0.0.1:9001"], "127.0.0.1:9001")]
    fn test_bind_parsing(#[case] args: &[&str], #[case] expected: &str) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.bind, expected.parse::<SocketAddr>().unwrap());
    }

    #[rstest]
    #[case::default_format(&["program"], LogFormat::Pretty)]
    #[case::json(&["program", "--log-format", "json"], LogFormat::Json)]
    fn test_log_format_parsing(#[case] args: &[&str], #[case] expected: LogFormat) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.log_format, expected);
    }

    #[rstest]
    #[case::all_defaults(&["program"], num_cpus::get())]
    #[case::custom_workers(&["program", "--workers", "4"], 4)]
    #[case::zero_falls_back(&["program", "--workers", "0"], num_cpus::get())]
    fn test_server_config_conversion(#[case] args: &[&str], #[case] expected_workers: usize) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        let config = parsed.to_server_config();

        assert_eq!(config.workers, expected_workers);
        assert_eq!(config.bind, parsed.bind);
    }

    #[rstest]
    #[case::points_without_file(&["program", "points"])]
    #[case::invalid_bind(&["program", "--bind", "not-an-address"])]
    #[case::invalid_format(&["program", "--log-format", "xml"])]
    #[case::invalid_workers(&["program", "--workers", "many"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        assert!(CliArgs::try_parse_from(args).is_err());
    }
}
