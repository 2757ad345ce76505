//! Figure rendering and display

pub mod chart;
pub mod viewer;

pub use chart::{figure_title, render_learner, RenderOptions};
pub use viewer::open_image;
