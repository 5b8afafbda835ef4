use std::path::PathBuf;

use crate::application::data::ColorChoice;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub root: PathBuf,
    pub color: ColorChoice,
    pub pause: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            color: cli.color,
            pause: cli.pause,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn runtime_config_takes_settings_from_cli() {
        let cli = Cli::parse_from(["pycache-sweep", "project", "--color", "never", "--pause"]);
        let config = RuntimeConfig::from(cli);

        assert_eq!(config.root, PathBuf::from("project"));
        assert_eq!(config.color, ColorChoice::Never);
        assert!(config.pause);
    }
}
