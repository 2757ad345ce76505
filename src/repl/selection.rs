//! Strategy selection tokens

use crate::types::Strategy;

/// Prompt shown before each selection
pub const PROMPT: &str = ">> NeuroNudge Plots: Which strategy (1,2,3,4) would you like to plot?: ";

/// What the user asked for at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Plot(Strategy),
    Quit,
}

/// Parse one line of input
///
/// Accepts `1`..`4` and `q`/`Q` after trimming; anything else is `None`
/// and the caller prompts again.
pub fn parse_selection(input: &str) -> Option<Selection> {
    match input.trim() {
        "q" | "Q" => Some(Selection::Quit),
        other => other.parse::<Strategy>().ok().map(Selection::Plot),
    }
}
