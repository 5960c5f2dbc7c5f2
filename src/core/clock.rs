//! Stopwatch and elapsed-time breakdown helpers.
use std::time::{Duration, Instant};

use time::OffsetDateTime;

use crate::core::error::{Error, ErrorKind};

/// Break a span into whole `(days, hours, minutes, seconds)`.
pub fn split_duration(span: time::Duration) -> (i64, i64, i64, i64) {
    let days = span.whole_days();
    let hours = span.whole_hours() - days * 24;
    let minutes = span.whole_minutes() - span.whole_hours() * 60;
    let seconds = span.whole_seconds() - span.whole_minutes() * 60;
    (days, hours, minutes, seconds)
}

/// Time elapsed since `when`, as whole `(days, hours, minutes, seconds)`.
pub fn time_since(when: OffsetDateTime) -> (i64, i64, i64, i64) {
    split_duration(OffsetDateTime::now_utc() - when)
}

/// A stopwatch measuring one span at a time.
///
/// Construct with [`Timer::started`] to begin measuring immediately, or with
/// [`Timer::new`] and a later [`start`](Timer::start). Starting again moves
/// the baseline forward.
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    started_at: Option<Instant>,
}

impl Timer {
    /// An unstarted timer.
    pub fn new() -> Self {
        Timer { started_at: None }
    }

    /// A timer already measuring from now.
    pub fn started() -> Self {
        Timer {
            started_at: Some(Instant::now()),
        }
    }

    /// Begin measuring from now, replacing any earlier baseline.
    pub fn start(&mut self) {
        self.started_at = Some(Instant::now());
    }

    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    /// Time measured so far.
    pub fn elapsed(&self) -> Result<Duration, Error> {
        match self.started_at {
            Some(at) => Ok(at.elapsed()),
            None => Err(Error::new(ErrorKind::Usage).with_message("timer was never started")),
        }
    }
}
