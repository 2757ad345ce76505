//! Report generation for one strategy
//!
//! Loads the strategy's results file, reshapes it per learner and writes
//! one figure per learner on the roster.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::analysis::ProgressTable;
use crate::cli::Config;
use crate::errors::Result;
use crate::render::{open_image, render_learner, RenderOptions};
use crate::repl::DisplayManager;
use crate::types::{DifficultyLevel, SimulationResults, Strategy};

/// Outcome of rendering one strategy
#[derive(Debug, Clone)]
pub struct ReportSummary {
    pub strategy: Strategy,
    /// Iterations in the results file
    pub iterations: usize,
    /// Saved figures, in roster order
    pub images: Vec<PathBuf>,
    pub duration: Duration,
}

/// Turns a strategy's simulation results into per-learner figures
#[derive(Debug, Clone)]
pub struct ReportGenerator {
    input_dir: PathBuf,
    output_dir: PathBuf,
    learners: Vec<String>,
    options: RenderOptions,
    open_viewer: bool,
}

impl ReportGenerator {
    pub fn new(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        learners: Vec<String>,
        options: RenderOptions,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            learners,
            options,
            open_viewer: false,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.input_dir(),
            config.output_dir(),
            config.learners.clone(),
            config.render_options(),
        )
        .with_viewer(config.render.open_viewer)
    }

    /// Open each saved figure in the image viewer
    pub fn with_viewer(mut self, open_viewer: bool) -> Self {
        self.open_viewer = open_viewer;
        self
    }

    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn learners(&self) -> &[String] {
        &self.learners
    }

    /// Results file consulted for `strategy`
    pub fn results_path(&self, strategy: Strategy) -> PathBuf {
        strategy.results_path(&self.input_dir)
    }

    /// Figure path for one learner under `strategy`
    pub fn image_path(&self, strategy: Strategy, learner_id: &str) -> PathBuf {
        self.output_dir.join(strategy.image_file_name(learner_id))
    }

    /// Load and reshape without rendering
    pub fn load(&self, strategy: Strategy) -> Result<(SimulationResults, ProgressTable)> {
        let results = SimulationResults::load(&self.results_path(strategy))?;
        let table = ProgressTable::from_results(&results, &self.learners)?;
        Ok((results, table))
    }

    /// Render every learner's figure for `strategy`
    pub fn generate(&self, strategy: Strategy, display: &DisplayManager) -> Result<ReportSummary> {
        let start = Instant::now();

        let path = self.results_path(strategy);
        display.trace("LOAD", &format!("Reading {}", path.display()));
        let (results, table) = self.load(strategy)?;
        display.trace(
            "RESHAPE",
            &format!(
                "{} iterations across {} learners",
                results.iteration_count(),
                table.len()
            ),
        );

        std::fs::create_dir_all(&self.output_dir)?;

        let pb = display.start_rendering(strategy, table.len());
        let mut images = Vec::with_capacity(table.len());

        for progress in table.learners() {
            for level in DifficultyLevel::ALL {
                display.trace_series(
                    "RESHAPE",
                    &format!(
                        "{} {}: {} raw, {} smoothed",
                        progress.learner_id(),
                        level,
                        progress.series(level).len(),
                        progress.smoothed(level, self.options.window).len()
                    ),
                );
            }

            let image = self.image_path(strategy, progress.learner_id());
            render_learner(progress, &image, &self.options)?;
            display.trace("RENDER", &format!("Saved {}", image.display()));
            display.update_rendering(&pb, progress.learner_id());

            if self.open_viewer {
                if let Err(e) = open_image(&image) {
                    display.show_warning(&format!("Could not open {}: {}", image.display(), e));
                }
            }

            images.push(image);
        }

        pb.finish_and_clear();

        Ok(ReportSummary {
            strategy,
            iterations: results.iteration_count(),
            images,
            duration: start.elapsed(),
        })
    }
}
