//! Moving-average smoothing for noisy Q-value series

/// Default smoothing window, in iterations
pub const DEFAULT_WINDOW: usize = 10;

/// Simple moving average over full windows only
///
/// Output has `values.len() - window + 1` points, or none when the series
/// is shorter than the window. A zero window yields no output.
pub fn moving_average(values: &[f64], window: usize) -> Vec<f64> {
    if window == 0 || values.len() < window {
        return Vec::new();
    }

    values
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / window as f64)
        .collect()
}

/// Number of points [`moving_average`] produces for a series of `len`
pub fn smoothed_len(len: usize, window: usize) -> usize {
    if window == 0 {
        0
    } else {
        len.saturating_sub(window - 1)
    }
}
