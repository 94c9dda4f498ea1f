//! Refresh cadence for live chart data.
//!
//! The geometry core is pure and recomputed wholesale, so the only live
//! concern is deciding *when* the caller should re-invoke it. Pausing is
//! tracked through named reasons so independent owners (navigation,
//! app backgrounding, a user press-and-hold) can overlap without
//! clobbering each other's state.

use std::time::{Duration, Instant};

use indexmap::IndexSet;

use crate::error::{ChartError, ChartResult};

/// Owns a single repeating refresh cadence with named pause reasons.
#[derive(Debug, Clone)]
pub struct RefreshScheduler {
    interval: Duration,
    next_fire: Option<Instant>,
    pause_reasons: IndexSet<String>,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> ChartResult<Self> {
        validate_interval(interval)?;
        Ok(Self {
            interval,
            next_fire: None,
            pause_reasons: IndexSet::new(),
        })
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Changes the cadence without touching pause state. The new interval
    /// applies from the next fire.
    pub fn set_interval(&mut self, interval: Duration) -> ChartResult<()> {
        validate_interval(interval)?;
        self.interval = interval;
        Ok(())
    }

    /// Returns whether a refresh is due at `now`, advancing the cadence if so.
    ///
    /// Never fires while paused. The first poll after construction or after
    /// the last pause reason clears fires immediately.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_paused() {
            return false;
        }

        match self.next_fire {
            Some(next) if now < next => false,
            _ => {
                self.next_fire = Some(now + self.interval);
                true
            }
        }
    }

    /// Adds a named pause reason. Returns `false` when already present.
    pub fn pause(&mut self, reason: impl Into<String>) -> bool {
        let inserted = self.pause_reasons.insert(reason.into());
        if inserted {
            tracing::debug!(active_reasons = self.pause_reasons.len(), "refresh paused");
        }
        inserted
    }

    /// Removes a named pause reason. Returns `false` when it was not present.
    ///
    /// Clearing the last reason resets the cadence so the next poll fires
    /// immediately with fresh data.
    pub fn resume(&mut self, reason: &str) -> bool {
        let removed = self.pause_reasons.shift_remove(reason);
        if removed {
            tracing::debug!(active_reasons = self.pause_reasons.len(), "refresh resumed");
            if self.pause_reasons.is_empty() {
                self.next_fire = None;
            }
        }
        removed
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.pause_reasons.is_empty()
    }

    /// Active pause reasons in insertion order.
    pub fn pause_reasons(&self) -> impl Iterator<Item = &str> {
        self.pause_reasons.iter().map(String::as_str)
    }
}

fn validate_interval(interval: Duration) -> ChartResult<()> {
    if interval.is_zero() {
        return Err(ChartError::InvalidData(
            "refresh interval must be > 0".to_owned(),
        ));
    }
    Ok(())
}
