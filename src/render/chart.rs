//! Per-learner progress figure
//!
//! Layout: the left three quarters hold one smoothed Q-value chart per
//! difficulty level, easiest on top. The right quarter holds the
//! attempted-difficulty scatter in its top cell; the cells below it stay
//! empty. The scatter's y axis runs VeryEasy (top) to Grandmaster (bottom)
//! so it lines up with the left column.

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::Path;

use crate::analysis::{LearnerProgress, DEFAULT_WINDOW};
use crate::errors::{PlotError, Result};
use crate::types::DifficultyLevel;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
type DrawResult = std::result::Result<(), Box<dyn Error>>;

const FONT: &str = "sans-serif";
const GUTTER_PX: u32 = 40;

/// Figure size and content switches
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Moving-average window applied before plotting
    pub window: usize,
    /// Draw titles, tick labels and axis descriptions
    pub annotate: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 1400,
            window: DEFAULT_WINDOW,
            annotate: true,
        }
    }
}

/// Figure title for a learner
pub fn figure_title(learner_id: &str) -> String {
    format!(
        "Progress and Attempted Difficulty Level of {} Over Iterations",
        learner_id
    )
}

/// Render one learner's figure and save it as PNG at `path`
pub fn render_learner(progress: &LearnerProgress, path: &Path, options: &RenderOptions) -> Result<()> {
    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();

    draw_figure(&root, progress, options).map_err(|e| PlotError::Render(e.to_string()))?;
    root.present()
        .map_err(|e| PlotError::Render(format!("Failed to save {}: {}", path.display(), e)))?;

    Ok(())
}

fn draw_figure(root: &Area<'_>, progress: &LearnerProgress, options: &RenderOptions) -> DrawResult {
    root.fill(&WHITE)?;

    let body = if options.annotate {
        let titled = root.titled(&figure_title(progress.learner_id()), (FONT, 28))?;
        let (gutter, rest) = titled.split_horizontally(GUTTER_PX);
        draw_y_description(&gutter)?;
        rest
    } else {
        root.clone()
    };

    let (width, _) = body.dim_in_pixel();
    let (left, right) = body.split_horizontally(width * 3 / 4);

    let rows = left.split_evenly((DifficultyLevel::COUNT, 1));
    for (row, (area, level)) in rows.iter().zip(DifficultyLevel::ALL).enumerate() {
        let is_last = row + 1 == DifficultyLevel::COUNT;
        draw_q_values(area, progress, level, is_last, options)?;
    }

    let cells = right.split_evenly((DifficultyLevel::COUNT, 1));
    if let Some(top) = cells.first() {
        draw_attempted(top, progress, options)?;
    }

    Ok(())
}

fn draw_y_description(gutter: &Area<'_>) -> DrawResult {
    let (w, h) = gutter.dim_in_pixel();
    let style = TextStyle::from((FONT, 18).into_font())
        .transform(FontTransform::Rotate270)
        .pos(Pos::new(HPos::Center, VPos::Center));
    gutter.draw_text("Smoothed Q-Values", &style, (w as i32 / 2, h as i32 / 2))?;
    Ok(())
}

fn draw_q_values(
    area: &Area<'_>,
    progress: &LearnerProgress,
    level: DifficultyLevel,
    is_last: bool,
    options: &RenderOptions,
) -> DrawResult {
    let smoothed = progress.smoothed(level, options.window);
    let x_end = smoothed.len().max(1) as f64;

    let mut builder = ChartBuilder::on(area);
    builder.margin(4);
    if options.annotate {
        builder
            .caption(level.as_str(), (FONT, 14))
            .x_label_area_size(if is_last { 30 } else { 0 })
            .y_label_area_size(40);
    }
    let mut chart = builder.build_cartesian_2d(0f64..x_end, 0f64..1f64)?;

    if options.annotate {
        let mut mesh = chart.configure_mesh();
        mesh.y_labels(3).light_line_style(&WHITE);
        if is_last {
            mesh.x_desc("Iterations");
        }
        mesh.draw()?;
    }

    let color = Palette99::pick(level.rank());
    chart.draw_series(LineSeries::new(
        smoothed.iter().enumerate().map(|(i, &v)| (i as f64, v)),
        color.stroke_width(2),
    ))?;

    Ok(())
}

fn draw_attempted(area: &Area<'_>, progress: &LearnerProgress, options: &RenderOptions) -> DrawResult {
    let ranks = progress.attempted_ranks();
    let x_end = ranks.len().max(1) as f64;
    let levels = DifficultyLevel::COUNT as f64;

    let mut builder = ChartBuilder::on(area);
    builder.margin(4);
    if options.annotate {
        builder
            .caption("Attempted Difficulty", (FONT, 14))
            .x_label_area_size(30)
            .y_label_area_size(90);
    }
    let mut chart = builder.build_cartesian_2d(0f64..x_end, -1f64..levels)?;

    if options.annotate {
        chart
            .configure_mesh()
            .y_labels(DifficultyLevel::COUNT + 2)
            .y_label_formatter(&|y| level_label(*y))
            .x_desc("Iterations")
            .light_line_style(&WHITE)
            .draw()?;
    }

    chart.draw_series(
        ranks
            .iter()
            .enumerate()
            .map(|(i, &rank)| Circle::new((i as f64, inverted_rank(rank)), 2, BLACK.filled())),
    )?;

    Ok(())
}

/// Plot coordinate for a rank, flipped so rank 0 sits at the top
fn inverted_rank(rank: usize) -> f64 {
    (DifficultyLevel::COUNT - 1 - rank.min(DifficultyLevel::COUNT - 1)) as f64
}

/// Tick label for a scatter y coordinate; empty between levels
fn level_label(y: f64) -> String {
    if (y - y.round()).abs() > 1e-6 || y < 0.0 {
        return String::new();
    }
    let y = y.round() as usize;
    if y >= DifficultyLevel::COUNT {
        return String::new();
    }
    DifficultyLevel::from_rank(DifficultyLevel::COUNT - 1 - y)
        .map(|level| level.to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plain(width: u32, height: u32) -> RenderOptions {
        RenderOptions {
            width,
            height,
            window: DEFAULT_WINDOW,
            annotate: false,
        }
    }

    #[test]
    fn test_inverted_rank_puts_easiest_on_top() {
        assert_eq!(inverted_rank(DifficultyLevel::VeryEasy.rank()), 7.0);
        assert_eq!(inverted_rank(DifficultyLevel::Grandmaster.rank()), 0.0);
    }

    #[test]
    fn test_level_labels_follow_inversion() {
        assert_eq!(level_label(7.0), "VeryEasy");
        assert_eq!(level_label(0.0), "Grandmaster");
        assert_eq!(level_label(-1.0), "");
        assert_eq!(level_label(8.0), "");
        assert_eq!(level_label(3.5), "");
    }

    #[test]
    fn test_figure_title() {
        assert_eq!(
            figure_title("Learner 4"),
            "Progress and Attempted Difficulty Level of Learner 4 Over Iterations"
        );
    }

    #[test]
    fn test_render_empty_learner() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.png");

        render_learner(&LearnerProgress::new("Learner 6"), &path, &plain(320, 200)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_render_into_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("figure.png");

        let err = render_learner(&LearnerProgress::new("Learner 1"), &path, &plain(320, 200)).unwrap_err();
        assert!(matches!(err, PlotError::Render(_)));
    }
}
