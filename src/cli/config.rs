//! Configuration management for NeuroNudge Plots
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.neuronudge/plots.toml

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::analysis::DEFAULT_WINDOW;
use crate::cli::args::Verbosity;
use crate::errors::{PlotError, Result};
use crate::render::RenderOptions;
use crate::types::DEFAULT_LEARNERS;

/// Complete configuration for NeuroNudge Plots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Learners to plot, in output order
    pub learners: Vec<String>,
    pub paths: PathsConfig,
    pub smoothing: SmoothingConfig,
    pub render: RenderConfig,
    pub display: DisplayConfig,
}

/// Input and output locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding strategy_{N}_simulation_results.json
    pub input_dir: String,
    /// Directory the PNG figures are written to
    pub output_dir: String,
}

/// Moving-average configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    pub window: usize,
}

/// Figure configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Draw titles, tick labels and axis descriptions (needs system fonts)
    pub annotate: bool,
    /// Hand each saved figure to the platform image viewer
    pub open_viewer: bool,
}

/// Console output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub verbosity: String,
    pub color_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            learners: DEFAULT_LEARNERS.iter().map(|id| id.to_string()).collect(),
            paths: PathsConfig::default(),
            smoothing: SmoothingConfig::default(),
            render: RenderConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_dir: "./engine".to_string(),
            output_dir: "results".to_string(),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 1400,
            annotate: true,
            open_viewer: true,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            verbosity: "normal".to_string(),
            color_output: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| PlotError::Config(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| PlotError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard configuration file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".neuronudge").join("plots.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.learners.is_empty() {
            return Err(PlotError::Config(
                "learners must name at least one learner".to_string()
            ));
        }

        let mut seen = HashSet::new();
        for learner in &self.learners {
            if !seen.insert(learner.as_str()) {
                return Err(PlotError::Config(format!("Duplicate learner: {}", learner)));
            }
        }

        if self.smoothing.window == 0 {
            return Err(PlotError::Config(
                "smoothing window must be greater than 0".to_string()
            ));
        }

        if self.render.width == 0 || self.render.height == 0 {
            return Err(PlotError::Config(
                "render width and height must be greater than 0".to_string()
            ));
        }

        if Verbosity::from_name(&self.display.verbosity).is_none() {
            return Err(PlotError::Config(
                format!("Invalid verbosity level: {}", self.display.verbosity)
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlotError::Config(format!("Failed to create config dir: {}", e)))?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PlotError::Config(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Serialize to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PlotError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// Directory holding the simulation results
    pub fn input_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.input_dir)
    }

    /// Directory the figures are written to
    pub fn output_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.output_dir)
    }

    /// Configured verbosity, falling back to normal
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_name(&self.display.verbosity).unwrap_or(Verbosity::Normal)
    }

    /// Figure options for the renderer
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            window: self.smoothing.window,
            annotate: self.render.annotate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.learners.len(), 6);
        assert_eq!(config.learners[0], "Learner 1");
        assert_eq!(config.paths.input_dir, "./engine");
        assert_eq!(config.paths.output_dir, "results");
        assert_eq!(config.smoothing.window, 10);
        assert!(config.render.open_viewer);
    }

    #[test]
    fn test_config_validation_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_window() {
        let mut config = Config::default();
        config.smoothing.window = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_empty_roster() {
        let mut config = Config::default();
        config.learners.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_duplicate_learner() {
        let mut config = Config::default();
        config.learners.push("Learner 1".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_zero_size() {
        let mut config = Config::default();
        config.render.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_verbosity() {
        let mut config = Config::default();
        config.display.verbosity = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: Config = toml::from_str("[smoothing]\nwindow = 25\n").unwrap();
        assert_eq!(config.smoothing.window, 25);
        assert_eq!(config.paths.output_dir, "results");
        assert_eq!(config.learners.len(), 6);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("plots.toml");

        let mut config = Config::default();
        config.learners = vec!["Learner 3".to_string()];
        config.render.annotate = false;
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plots.toml");
        std::fs::write(&path, "[smoothing]\nwindow = 0\n").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, PlotError::Config(_)));
    }

    #[test]
    fn test_render_options() {
        let options = Config::default().render_options();
        assert_eq!((options.width, options.height), (2400, 1400));
        assert_eq!(options.window, 10);
        assert!(options.annotate);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path("~/.neuronudge");
        assert!(!expanded.to_string_lossy().contains('~'));
    }

    #[test]
    fn test_expand_path_without_tilde() {
        assert_eq!(Config::expand_path("./engine"), PathBuf::from("./engine"));
    }
}
