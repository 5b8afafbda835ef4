use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Recursively removes every `__pycache__` directory below ROOT.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Directory to search, defaults to the current one
    #[clap(default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// When to color the output
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,

    /// Wait for Enter before exiting
    #[clap(long)]
    pub pause: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults_to_current_directory() {
        let cli = Cli::parse_from(["pycache-sweep"]);
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.log_level, LogLevel::Warn);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert!(!cli.pause);
    }

    #[test]
    fn cli_accepts_root_and_flags() {
        let cli = Cli::parse_from(["pycache-sweep", "-l", "debug", "src", "--pause"]);
        assert_eq!(cli.root, PathBuf::from("src"));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(cli.pause);
    }

    #[test]
    fn cli_rejects_unknown_log_level() {
        assert!(Cli::try_parse_from(["pycache-sweep", "--log-level", "loud"]).is_err());
    }
}
