//! The session timer state machine: `Idle → Running → {Paused ↔ Running} → Idle`.
//!
//! All operations take `now` as a parameter; the timer itself never reads the
//! clock. Elapsed time accounting uses integer-second truncation at every
//! fold point, each Running interval truncated independently, so repeated
//! pause/resume cycles never drift through rounding.

use crate::errors::{AppError, AppResult};
use crate::models::SessionSummary;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
}

#[derive(Debug)]
pub struct SessionTimer {
    status: TimerStatus,
    start_time: Option<NaiveDateTime>,
    last_resume: Option<NaiveDateTime>,
    accumulated_seconds: u64,
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionTimer {
    pub fn new() -> Self {
        Self {
            status: TimerStatus::Idle,
            start_time: None,
            last_resume: None,
            accumulated_seconds: 0,
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn start_time(&self) -> Option<NaiveDateTime> {
        self.start_time
    }

    pub fn accumulated_seconds(&self) -> u64 {
        self.accumulated_seconds
    }

    /// Begin a fresh session. At most one session may be in flight; starting
    /// while Running or Paused is rejected, never queued.
    pub fn start(&mut self, project: &str, now: NaiveDateTime) -> AppResult<()> {
        if project.trim().is_empty() {
            return Err(AppError::Validation("project required".to_string()));
        }
        if self.status != TimerStatus::Idle {
            return Err(AppError::InvalidState(
                "a session is already in progress".to_string(),
            ));
        }

        self.status = TimerStatus::Running;
        self.start_time = Some(now);
        self.last_resume = Some(now);
        self.accumulated_seconds = 0;
        Ok(())
    }

    pub fn pause(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.status != TimerStatus::Running {
            return Err(AppError::InvalidState(
                "timer is not running".to_string(),
            ));
        }

        self.fold_running_interval(now);
        self.status = TimerStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self, now: NaiveDateTime) -> AppResult<()> {
        if self.status != TimerStatus::Paused {
            return Err(AppError::InvalidState(
                "timer is not paused".to_string(),
            ));
        }

        self.last_resume = Some(now);
        self.status = TimerStatus::Running;
        Ok(())
    }

    /// End the session and emit its summary, exactly once. If Running, the
    /// final interval is folded in the same way `pause` folds one; the timer
    /// then resets to Idle and a fresh session may start.
    pub fn stop(&mut self, now: NaiveDateTime) -> AppResult<SessionSummary> {
        if self.status == TimerStatus::Idle {
            return Err(AppError::InvalidState(
                "no session in progress".to_string(),
            ));
        }

        if self.status == TimerStatus::Running {
            self.fold_running_interval(now);
        }

        let summary = SessionSummary {
            // start() always sets start_time for any non-Idle status
            start_time: self.start_time.unwrap_or(now),
            stop_time: now,
            duration_seconds: self.accumulated_seconds,
        };

        self.status = TimerStatus::Idle;
        self.start_time = None;
        self.last_resume = None;
        self.accumulated_seconds = 0;

        Ok(summary)
    }

    /// Pure query for the display tick, which lives in the caller: total
    /// elapsed seconds as of `now`, with no state change.
    pub fn current_elapsed_seconds(&self, now: NaiveDateTime) -> u64 {
        match (self.status, self.last_resume) {
            (TimerStatus::Running, Some(resumed)) => {
                self.accumulated_seconds + elapsed_whole_seconds(resumed, now)
            }
            _ => self.accumulated_seconds,
        }
    }

    fn fold_running_interval(&mut self, now: NaiveDateTime) {
        if let Some(resumed) = self.last_resume {
            self.accumulated_seconds += elapsed_whole_seconds(resumed, now);
        }
    }
}

/// Whole seconds between `from` and `now`, truncated. A clock that moved
/// backwards would produce a negative interval; that is clamped to zero at
/// the point of accumulation so a skewed segment costs nothing rather than
/// corrupting the running total.
fn elapsed_whole_seconds(from: NaiveDateTime, now: NaiveDateTime) -> u64 {
    (now - from).num_seconds().max(0) as u64
}
