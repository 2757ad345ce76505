//! Command-line argument parsing for NeuroNudge Plots
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::config::Config;
use crate::types::Strategy;

/// NeuroNudge Plots - Per-learner Q-value diagnostics for simulation results
#[derive(Parser, Debug)]
#[command(name = "nnplots")]
#[command(version)]
#[command(about = "Render per-learner Q-value charts from NeuroNudge simulation results", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding strategy_{N}_simulation_results.json
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Directory figures are written to
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Save figures without opening the image viewer
    #[arg(long)]
    pub no_open: bool,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress progress and status output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one strategy without prompting
    Plot {
        /// Strategy identifier (1, 2, 3 or 4)
        #[arg(value_parser = parse_strategy)]
        strategy: Strategy,
    },

    /// Display current configuration
    Config,
}

fn parse_strategy(value: &str) -> Result<Strategy, String> {
    value.parse().map_err(|_| format!("expected 1, 2, 3 or 4, got '{}'", value))
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags, falling back to `default`
    pub fn verbosity(&self, default: Verbosity) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => default,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(dir) = &self.input_dir {
            config.paths.input_dir = dir.to_string_lossy().into_owned();
        }
        if let Some(dir) = &self.output_dir {
            config.paths.output_dir = dir.to_string_lossy().into_owned();
        }
        if self.no_open {
            config.render.open_viewer = false;
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the configuration-file spelling
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Check if should show progress bars and status lines
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Check if should show diagnostic traces
    pub fn show_events(&self) -> bool {
        matches!(self, Verbosity::Verbose | Verbosity::VeryVerbose)
    }

    /// Check if should show per-series detail
    pub fn show_series(&self) -> bool {
        matches!(self, Verbosity::VeryVerbose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> Args {
        Args {
            config: None,
            input_dir: None,
            output_dir: None,
            no_open: false,
            verbose,
            quiet,
            command: None,
        }
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(args(2, true).verbosity(Verbosity::Normal), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_default_from_config() {
        assert_eq!(args(0, false).verbosity(Verbosity::Normal), Verbosity::Normal);
        assert_eq!(args(0, false).verbosity(Verbosity::Verbose), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(args(1, false).verbosity(Verbosity::Normal), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        assert_eq!(args(3, false).verbosity(Verbosity::Quiet), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_parse_plot_subcommand() {
        let parsed = Args::try_parse_from(["nnplots", "--no-open", "plot", "3"]).unwrap();
        assert!(parsed.no_open);
        match parsed.command {
            Some(Commands::Plot { strategy }) => assert_eq!(strategy, Strategy::DecayingQValues),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_plot_rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["nnplots", "plot", "5"]).is_err());
        assert!(Args::try_parse_from(["nnplots", "plot", "q"]).is_err());
    }

    #[test]
    fn test_no_subcommand_is_interactive() {
        let parsed = Args::try_parse_from(["nnplots"]).unwrap();
        assert!(parsed.command.is_none());
    }

    #[test]
    fn test_apply_overrides() {
        let parsed = Args::try_parse_from([
            "nnplots",
            "--input-dir",
            "/data/engine",
            "--output-dir",
            "/tmp/figures",
            "--no-open",
        ])
        .unwrap();

        let mut config = Config::default();
        parsed.apply_overrides(&mut config);

        assert_eq!(config.paths.input_dir, "/data/engine");
        assert_eq!(config.paths.output_dir, "/tmp/figures");
        assert!(!config.render.open_viewer);
    }

    #[test]
    fn test_verbosity_names_round_trip() {
        for verbosity in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::VeryVerbose,
        ] {
            assert_eq!(Verbosity::from_name(verbosity.as_str()), Some(verbosity));
        }
        assert_eq!(Verbosity::from_name("loud"), None);
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());

        assert!(!Verbosity::Normal.show_events());
        assert!(Verbosity::Verbose.show_events());

        assert!(!Verbosity::Verbose.show_series());
        assert!(Verbosity::VeryVerbose.show_series());
    }
}
