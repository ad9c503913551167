//! Configuration and CLI argument handling

use clap::Parser;

use crate::layout::DialAnchor;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "dial-stopwatch")]
#[command(about = "A stopwatch service with a radial tick dial")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20554")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Number of tick marks on the dial
    #[arg(short, long, default_value = "12", value_parser = clap::value_parser!(u16).range(1..))]
    pub ticks: u16,

    /// Vertical placement of the dial inside its container
    #[arg(long, value_enum, default_value_t = DialAnchor::Bottom)]
    pub anchor: DialAnchor,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    pub fn tick_count(&self) -> usize {
        usize::from(self.ticks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["dial-stopwatch"]).unwrap();
        assert_eq!(config.address(), "0.0.0.0:20554");
        assert_eq!(config.tick_count(), 12);
        assert_eq!(config.anchor, DialAnchor::Bottom);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "dial-stopwatch", "--host", "127.0.0.1", "-p", "8080", "--ticks", "60", "--anchor", "center", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "127.0.0.1:8080");
        assert_eq!(config.tick_count(), 60);
        assert_eq!(config.anchor, DialAnchor::Center);
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn rejects_zero_ticks() {
        assert!(Config::try_parse_from(["dial-stopwatch", "--ticks", "0"]).is_err());
    }
}
