use crate::{EffectiveTime, SolveAttempt, trimmed_mean};

/// The most recent attempts of a history
///
/// Histories are ordered oldest first, so a window is always a suffix of the
/// history it was selected from. A window selected from a history shorter
/// than the requested size holds every attempt but is *incomplete*, and an
/// incomplete window has no average.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    attempts: &'a [SolveAttempt],
    size: usize,
}

impl<'a> Window<'a> {
    /// Select the `size` most recent attempts of `history`
    pub fn select(history: &'a [SolveAttempt], size: usize) -> Self {
        let start = history.len().saturating_sub(size);
        Self {
            attempts: &history[start..],
            size,
        }
    }

    /// The requested window size
    pub const fn size(&self) -> usize {
        self.size
    }

    /// How many attempts were actually selected
    pub const fn len(&self) -> usize {
        self.attempts.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.attempts.is_empty()
    }

    pub const fn is_complete(&self) -> bool {
        self.attempts.len() == self.size
    }

    /// Iterate the selected attempts, most recent first
    pub fn iter(&self) -> impl Iterator<Item = &'a SolveAttempt> + use<'a> {
        self.attempts.iter().rev()
    }

    pub fn effective_times(&self) -> Vec<EffectiveTime> {
        self.attempts.iter().map(SolveAttempt::effective_time).collect()
    }

    /// The trimmed average of this window, or `None` while it is incomplete
    pub fn average(&self) -> Option<EffectiveTime> {
        if !self.is_complete() {
            tracing::trace!(
                size = self.size,
                available = self.len(),
                "window incomplete, no average"
            );
            return None;
        }

        Some(trimmed_mean(&self.effective_times()))
    }
}
