//! CLI command definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ColorChoice, Config, Verbosity};
use crate::error::Result;

/// Compare the per-unit price of two products
#[derive(Parser, Debug)]
#[command(name = "unit-price")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorArg>,

    /// YAML configuration file
    #[arg(long, env = "UNIT_PRICE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Append logs to this file (the TUI discards logs without one)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive terminal comparator
    Tui,

    /// Replay keypad symbols and print the resulting view
    Eval(EvalArgs),

    /// Precache the static page and answer requests through the asset cache
    Assets(AssetsArgs),
}

/// Arguments for the eval command
#[derive(Parser, Debug)]
pub struct EvalArgs {
    /// Keypad symbols in order: 0-9, 00, ., AC, BS, NEXT
    #[arg(required = true, num_args = 1..)]
    pub keys: Vec<String>,

    /// Print the view model as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the assets command
#[derive(Parser, Debug)]
pub struct AssetsArgs {
    /// Directory holding the static page (overrides `asset_root`)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Urls to request after install; defaults to the configured assets
    pub urls: Vec<String>,

    /// Treat the urls as navigations
    #[arg(long)]
    pub navigate: bool,

    /// Answer requests with the network disconnected
    #[arg(long)]
    pub offline: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

impl Cli {
    /// Verbosity requested by flags, if any
    #[must_use]
    pub const fn verbosity(&self) -> Option<Verbosity> {
        if self.quiet {
            return Some(Verbosity::Quiet);
        }
        match self.verbose {
            0 => None,
            1 => Some(Verbosity::Verbose),
            _ => Some(Verbosity::Debug),
        }
    }

    /// Loads the configuration file (if any) and applies flag overrides
    pub fn build_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::new(),
        };
        if let Some(verbosity) = self.verbosity() {
            config = config.with_verbosity(verbosity);
        }
        if let Some(color) = self.color {
            config = config.with_color(color.into());
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path);
        }
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    // ===== Parsing tests =====

    #[test]
    fn test_parse_tui() {
        let cli = Cli::parse_from(["unit-price", "tui"]);
        assert!(matches!(cli.command, Commands::Tui));
    }

    #[test]
    fn test_parse_eval() {
        let cli = Cli::parse_from(["unit-price", "eval", "1", "00", "NEXT", "--json"]);
        if let Commands::Eval(args) = cli.command {
            assert_eq!(args.keys, vec!["1", "00", "NEXT"]);
            assert!(args.json);
        } else {
            panic!("expected Eval command");
        }
    }

    #[test]
    fn test_eval_requires_keys() {
        assert!(Cli::try_parse_from(["unit-price", "eval"]).is_err());
    }

    #[test]
    fn test_parse_assets() {
        let cli = Cli::parse_from([
            "unit-price",
            "assets",
            "--root",
            "site",
            "--offline",
            "--navigate",
            "/price-checker/",
        ]);
        if let Commands::Assets(args) = cli.command {
            assert_eq!(args.root, Some(PathBuf::from("site")));
            assert_eq!(args.urls, vec!["/price-checker/"]);
            assert!(args.offline);
            assert!(args.navigate);
        } else {
            panic!("expected Assets command");
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["unit-price", "eval", "1", "-vv", "--color", "never"]);
        assert_eq!(cli.verbosity(), Some(Verbosity::Debug));
        assert_eq!(cli.color, Some(ColorArg::Never));
    }

    // ===== Config building tests =====

    #[test]
    fn test_verbosity_flags() {
        assert_eq!(Cli::parse_from(["unit-price", "tui"]).verbosity(), None);
        assert_eq!(
            Cli::parse_from(["unit-price", "-v", "tui"]).verbosity(),
            Some(Verbosity::Verbose)
        );
        assert_eq!(
            Cli::parse_from(["unit-price", "-q", "-vv", "tui"]).verbosity(),
            Some(Verbosity::Quiet)
        );
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit-price.yaml");
        std::fs::write(&path, "verbosity: debug\ncolor: always\n").unwrap();

        let cli = Cli::parse_from([
            "unit-price",
            "--config",
            path.to_str().unwrap(),
            "-q",
            "tui",
        ]);
        let config = cli.build_config().unwrap();
        assert_eq!(config.verbosity, Verbosity::Quiet);
        assert_eq!(config.color, ColorChoice::Always);
    }

    #[test]
    fn test_log_file_flag_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("unit-price.yaml");
        std::fs::write(&path, "log_file: from-config.log\n").unwrap();

        let from_file = Cli::parse_from(["unit-price", "--config", path.to_str().unwrap(), "tui"]);
        assert_eq!(
            from_file.build_config().unwrap().log_file,
            Some(PathBuf::from("from-config.log"))
        );

        let cli = Cli::parse_from([
            "unit-price",
            "--config",
            path.to_str().unwrap(),
            "tui",
            "--log-file",
            "tui.log",
        ]);
        assert_eq!(
            cli.build_config().unwrap().log_file,
            Some(PathBuf::from("tui.log"))
        );
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let cli = Cli::parse_from(["unit-price", "--config", "/nonexistent/cfg.yaml", "tui"]);
        assert!(cli.build_config().is_err());
    }

    #[test]
    fn test_color_arg_conversion() {
        assert_eq!(ColorChoice::from(ColorArg::Auto), ColorChoice::Auto);
        assert_eq!(ColorChoice::from(ColorArg::Always), ColorChoice::Always);
        assert_eq!(ColorChoice::from(ColorArg::Never), ColorChoice::Never);
    }
}
