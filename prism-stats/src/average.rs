//! # Trimmed averages
//!
//! An "average of N" discards the fastest and slowest results of a window and
//! takes the arithmetic mean of what is left. How many results are discarded
//! from each side depends on the window size:
//!
//! | Window | Trimmed per side |
//! |--------|------------------|
//! | 5      | 1                |
//! | 12     | 1                |
//! | 100    | 5                |
//!
//! DNFs sort as the slowest possible results, so as long as a window holds no
//! more DNFs than are trimmed from the slow side they simply fall away. A
//! window with more DNFs than that is *saturated* and averages to
//! [`EffectiveTime::Dnf`].

use crate::{EffectiveTime, Millis, SolveAttempt, Window};

/// Share of a window trimmed from each side, in percent
pub const TRIM_PERCENT: usize = 5;

/// How many results are discarded from each side of a window of `size`
///
/// 5% of the window, rounded half-up, and never less than one.
pub const fn trim_count(size: usize) -> usize {
    let trim = (size * TRIM_PERCENT + 50) / 100;
    if trim == 0 { 1 } else { trim }
}

/// Trimmed mean of a complete window of effective times
///
/// The window size is `times.len()`; the order of `times` does not matter.
/// The mean is rounded half-up to whole milliseconds.
pub fn trimmed_mean(times: &[EffectiveTime]) -> EffectiveTime {
    let size = times.len();
    let trim = trim_count(size);
    let dnfs = times.iter().filter(|time| time.is_dnf()).count();

    if dnfs > trim {
        tracing::debug!(size, trim, dnfs, "window saturated with DNFs");
        return EffectiveTime::Dnf;
    }

    // Nothing left to average once both sides are trimmed
    if size <= 2 * trim {
        return EffectiveTime::Dnf;
    }

    let mut sorted = times.to_vec();
    sorted.sort_unstable();

    let kept: Vec<Millis> = sorted[trim..size - trim]
        .iter()
        .filter_map(|time| time.millis())
        .collect();

    // DNFs sort last and number at most `trim`, so every kept entry is finite
    debug_assert_eq!(kept.len(), size - 2 * trim);

    EffectiveTime::Time(mean_half_up(&kept))
}

/// Trimmed average of the `size` most recent attempts
///
/// `None` while the history holds fewer than `size` attempts.
pub fn average_of(history: &[SolveAttempt], size: usize) -> Option<EffectiveTime> {
    Window::select(history, size).average()
}

fn mean_half_up(values: &[Millis]) -> Millis {
    if values.is_empty() {
        return 0;
    }

    let sum: u128 = values.iter().map(|&value| u128::from(value)).sum();
    let count = values.len() as u128;
    let mean = (2 * sum + count) / (2 * count);

    // The mean of u64 values always fits back into a u64
    mean as Millis
}
