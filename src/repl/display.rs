//! Display manager for console output
//!
//! Status lines are color-coded, per-learner rendering gets a progress bar,
//! and diagnostic traces go to stderr when running verbose.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::cli::Verbosity;
use crate::report::ReportSummary;
use crate::types::Strategy;

/// Display manager for the report loop
pub struct DisplayManager {
    verbosity: Verbosity,
    update_interval: Duration,
}

impl DisplayManager {
    /// Create new display manager
    pub fn new(verbosity: Verbosity) -> Self {
        DisplayManager {
            verbosity,
            update_interval: Duration::from_millis(100),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Show welcome banner
    pub fn show_banner(&self, version: &str) {
        if !self.verbosity.show_progress() {
            return;
        }

        let width = 64;
        let rule = "=".repeat(width);
        println!("\n{}", rule.cyan());
        println!("{}", format!("  NeuroNudge Plots {}", version).bold().cyan());
        for strategy in Strategy::ALL {
            println!("{}", format!("  {}: {}", strategy.id(), strategy.label()).dimmed());
        }
        println!("{}\n", rule.cyan());
        println!("Choose a strategy (or {} to quit)\n", "q".green());
    }

    /// Create progress bar over the learners of one strategy
    pub fn start_rendering(&self, strategy: Strategy, learner_count: usize) -> ProgressBar {
        if !self.verbosity.show_progress() {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(learner_count as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} Rendering... [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(format!("Strategy {}", strategy));
        pb.enable_steady_tick(self.update_interval);
        pb
    }

    /// Advance the rendering bar past one learner
    pub fn update_rendering(&self, pb: &ProgressBar, learner_id: &str) {
        pb.set_message(learner_id.to_string());
        pb.inc(1);
    }

    /// Show the outcome of one strategy
    pub fn show_summary(&self, summary: &ReportSummary) {
        if !self.verbosity.show_progress() {
            return;
        }

        let duration_ms = summary.duration.as_millis() as u64;
        println!(
            "{} Strategy {} ({}): {} figures from {} iterations {}",
            "✓".green(),
            summary.strategy,
            summary.strategy.label(),
            summary.images.len(),
            summary.iterations,
            format!("({}ms)", duration_ms).dimmed()
        );
        for image in &summary.images {
            println!("  {} {}", "•".cyan(), image.display());
        }
    }

    /// Display error message
    pub fn show_error(&self, error: &str) {
        eprintln!("{} {}", "Error:".red().bold(), error.red());
    }

    /// Display warning message
    pub fn show_warning(&self, warning: &str) {
        if self.verbosity.show_progress() {
            println!("{} {}", "Warning:".yellow().bold(), warning.yellow());
        }
    }

    /// Display info message
    pub fn show_info(&self, info: &str) {
        if self.verbosity.show_progress() {
            println!("{} {}", "Info:".cyan(), info);
        }
    }

    /// Diagnostic trace (verbose and above)
    pub fn trace(&self, tag: &str, message: &str) {
        if self.verbosity.show_events() {
            eprintln!("[{}] {}", tag, message);
        }
    }

    /// Per-series detail (very verbose only)
    pub fn trace_series(&self, tag: &str, message: &str) {
        if self.verbosity.show_series() {
            eprintln!("[{}] {}", tag, message);
        }
    }
}

impl Default for DisplayManager {
    fn default() -> Self {
        Self::new(Verbosity::Normal)
    }
}
