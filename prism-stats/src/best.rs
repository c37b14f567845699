use crate::{Millis, SolveAttempt};

/// Fastest effective time among the non-DNF attempts
///
/// `None` when there are no attempts, or every attempt is a DNF.
pub fn best<'a, I>(attempts: I) -> Option<Millis>
where
    I: IntoIterator<Item = &'a SolveAttempt>,
{
    attempts
        .into_iter()
        .filter_map(|attempt| attempt.effective_time().millis())
        .min()
}
