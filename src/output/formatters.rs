//! Formatting utilities for terminal output

use crate::stats::Statistics;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// One bar per row of the guess distribution, scaled to the largest count
///
/// Yields `(guesses, count, bar)` for 1..=6 guesses; losses are left out.
#[must_use]
pub fn distribution_bars(stats: &Statistics, width: usize) -> Vec<(usize, usize, String)> {
    let wins = &stats.guess_distribution[1..];
    let max = wins.iter().copied().max().unwrap_or(0);

    wins.iter()
        .enumerate()
        .map(|(i, &count)| (i + 1, count, create_progress_bar(count as f64, max as f64, width)))
        .collect()
}

/// One-line summary: games, win rate, streaks
#[must_use]
pub fn stats_summary(stats: &Statistics) -> String {
    format!(
        "Partite: {}  Vittorie: {:.0}%  Serie: {}  Serie massima: {}",
        stats.total_games,
        stats.win_rate(),
        stats.current_streak,
        stats.max_streak
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn distribution_scaled_to_largest() {
        let mut stats = Statistics::default();
        stats.record_win(3);
        stats.record_win(3);
        stats.record_win(4);
        stats.record_loss();

        let bars = distribution_bars(&stats, 4);
        assert_eq!(bars.len(), 6);
        assert_eq!(bars[2], (3, 2, "████".to_string()));
        assert_eq!(bars[3], (4, 1, "██░░".to_string()));
        assert_eq!(bars[0], (1, 0, "░░░░".to_string()));
    }

    #[test]
    fn summary_line() {
        let mut stats = Statistics::default();
        stats.record_win(2);
        stats.record_loss();
        assert_eq!(
            stats_summary(&stats),
            "Partite: 2  Vittorie: 50%  Serie: 0  Serie massima: 1"
        );
    }
}
