use std::time::Duration;

use clap::{Arg, ArgMatches, Command};

pub const DEFAULT_LISTEN_HOST: &str = "0.0.0.0:2345";
pub const DEFAULT_UPSTREAM_URL: &str = "https://random-word-api.vercel.app/api";
pub const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_WORD_NUMBER: i64 = 3;

/// Where and how the relay reaches the word generator.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_UPSTREAM_TIMEOUT_MS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub listen_host: String,
    pub log_file: Option<String>,
    pub upstream: UpstreamConfig,
}

pub fn relay_command() -> Command {
    Command::new("wordrelay")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("Relay for a random word generation service")
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .num_args(1)
                .default_value(DEFAULT_LISTEN_HOST)
                .help("Specify the listen address (e.g., 0.0.0.0:2345)"),
        )
        .arg(
            Arg::new("upstream-url")
                .long("upstream-url")
                .num_args(1)
                .default_value(DEFAULT_UPSTREAM_URL)
                .help("Base URL of the word generation service"),
        )
        .arg(
            Arg::new("upstream-timeout-ms")
                .long("upstream-timeout-ms")
                .num_args(1)
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("5000")
                .help("Abort upstream requests after this many milliseconds"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
}

impl RelayConfig {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let listen_host = matches
            .get_one::<String>("listen-host")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LISTEN_HOST.to_string());
        let base_url = matches
            .get_one::<String>("upstream-url")
            .cloned()
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());
        let timeout_ms = matches
            .get_one::<u64>("upstream-timeout-ms")
            .copied()
            .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_MS);

        Self {
            listen_host,
            log_file: matches.get_one::<String>("log-file").cloned(),
            upstream: UpstreamConfig {
                base_url,
                timeout: Duration::from_millis(timeout_ms),
            },
        }
    }
}
