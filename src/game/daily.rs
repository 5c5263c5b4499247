//! Daily word numbering and the countdown to the next one
//!
//! Days roll over at midnight UTC.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// First daily game: 2022-01-10T00:00:00Z
pub const DAILY_EPOCH_SECS: u64 = 1_641_772_800;

const SECS_PER_DAY: u64 = 86_400;
const MILLIS_PER_DAY: u128 = 86_400_000;

/// Number of whole days between the first daily game and `now`
///
/// Times before the first game map to day 0.
///
/// # Examples
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use wordle_it::game::daily::{DAILY_EPOCH_SECS, daily_index};
///
/// let launch = UNIX_EPOCH + Duration::from_secs(DAILY_EPOCH_SECS);
/// assert_eq!(daily_index(launch), 0);
/// assert_eq!(daily_index(launch + Duration::from_secs(86_400 * 3 + 5)), 3);
/// ```
#[must_use]
pub fn daily_index(now: SystemTime) -> u64 {
    unix_duration(now).as_secs().saturating_sub(DAILY_EPOCH_SECS) / SECS_PER_DAY
}

/// Daily index for the current system time
#[must_use]
pub fn today() -> u64 {
    daily_index(SystemTime::now())
}

/// Time left until the next daily word
#[must_use]
pub fn time_until_next(now: SystemTime) -> Duration {
    let elapsed_today = unix_duration(now).as_millis() % MILLIS_PER_DAY;
    Duration::from_millis((MILLIS_PER_DAY - elapsed_today) as u64)
}

/// Render a countdown as `HH:MM:SS`, rounding partial seconds up
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let mut secs = remaining.as_secs();
    if remaining.subsec_nanos() > 0 {
        secs += 1;
    }
    format!(
        "{:02}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}

fn unix_duration(now: SystemTime) -> Duration {
    // Clocks before 1970 count as the epoch
    now.duration_since(UNIX_EPOCH).unwrap_or_default()
}
