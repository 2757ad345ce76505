//! NeuroNudge Plots - Main CLI Entry Point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use neuronudge_plots::{
    cli::{Args, Commands, Config, Verbosity},
    repl::{DisplayManager, InputHandler, ReportSession},
    ReportGenerator, Strategy,
};

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load(args.config.clone())?;
    args.apply_overrides(&mut config);
    config.validate()?;

    if !config.display.color_output {
        colored::control::set_override(false);
    }

    let verbosity = args.verbosity(config.verbosity());

    match &args.command {
        Some(Commands::Plot { strategy }) => run_once(&config, verbosity, *strategy)?,
        Some(Commands::Config) => show_config(&config, args.config.as_deref())?,
        None => run_interactive(&config, verbosity)?,
    }

    Ok(())
}

/// Prompt for strategies until the user quits
fn run_interactive(config: &Config, verbosity: Verbosity) -> Result<()> {
    let display = DisplayManager::new(verbosity);
    display.show_banner(env!("CARGO_PKG_VERSION"));

    let generator = ReportGenerator::from_config(config);
    let mut session = ReportSession::new(InputHandler::new()?, generator, display);

    if let Err(e) = session.run() {
        session.display().show_error(&e.to_string());
        return Err(e.into());
    }

    Ok(())
}

/// Render a single strategy without prompting
fn run_once(config: &Config, verbosity: Verbosity, strategy: Strategy) -> Result<()> {
    let display = DisplayManager::new(verbosity);
    let generator = ReportGenerator::from_config(config);

    match generator.generate(strategy, &display) {
        Ok(summary) => {
            display.show_summary(&summary);
            Ok(())
        }
        Err(e) => {
            display.show_error(&e.to_string());
            Err(e.into())
        }
    }
}

fn show_config(config: &Config, explicit: Option<&Path>) -> Result<()> {
    println!("{}", "NeuroNudge Plots configuration".bold().cyan());
    match explicit.map(Path::to_path_buf).or_else(Config::default_path) {
        Some(path) if path.exists() => println!("{} {}", "File:".dimmed(), path.display()),
        _ => println!("{} built-in defaults", "File:".dimmed()),
    }
    println!();
    println!("{}", config.to_toml()?);
    Ok(())
}
