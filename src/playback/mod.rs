//! Playback cursor over a recorded trace
//!
//! The cursor owns at most one [`Trace`] and walks it one step per timer
//! tick while playing. It is a plain state machine:
//!
//! ```text
//!            start (len > 1)             last step reached
//!   Idle ─────────────────────▶ Playing ───────────────────▶ Paused
//!    ▲                           │   ▲                         │
//!    │ stop                pause │   │ resume                  │
//!    └───────────────────────────┴── Paused ◀──── reset ───────┘
//! ```
//!
//! Time is passed in explicitly (`now: Instant`), so the host loop decides
//! how often to poll and tests can drive the machine without sleeping. The
//! [`Ticker`] holds at most one pending deadline; every transition out of
//! `Playing` cancels it.

pub mod ticker;

pub use ticker::Ticker;

use crate::errors::PlaybackError;
use crate::trace::{Step, Trace};
use std::time::{Duration, Instant};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// No run loaded, or a run loaded but never started
    Idle,
    Playing,
    /// Sequence retained, index frozen
    Paused,
}

#[derive(Debug)]
pub struct PlaybackCursor {
    trace: Option<Trace>,
    index: usize,
    state: PlaybackState,
    ticker: Ticker,
}

impl PlaybackCursor {
    pub fn new(delay: Duration) -> Self {
        PlaybackCursor {
            trace: None,
            index: 0,
            state: PlaybackState::Idle,
            ticker: Ticker::new(delay),
        }
    }

    /// Load a new run and start playing it from the first step.
    ///
    /// Refused while another run is playing; call [`pause`](Self::pause) or
    /// [`stop`](Self::stop) first. A trace with fewer than two steps has
    /// nothing to advance through and is loaded paused.
    pub fn start(&mut self, trace: Trace, now: Instant) -> Result<(), PlaybackError> {
        if self.state == PlaybackState::Playing {
            return Err(PlaybackError::Busy);
        }

        let steps = trace.len();
        self.trace = Some(trace);
        self.index = 0;
        if steps > 1 {
            self.state = PlaybackState::Playing;
            self.ticker.schedule(now);
        } else {
            self.state = PlaybackState::Paused;
            self.ticker.cancel();
        }
        trace!(steps, state = ?self.state, "playback started");
        Ok(())
    }

    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
            self.ticker.cancel();
            trace!(index = self.index, "playback paused");
        }
    }

    /// Continue playing from the current step
    pub fn resume(&mut self, now: Instant) -> Result<(), PlaybackError> {
        if self.trace.is_none() {
            return Err(PlaybackError::NoTrace);
        }
        if self.state == PlaybackState::Playing {
            return Ok(());
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.state = PlaybackState::Playing;
        self.ticker.schedule(now);
        trace!(index = self.index, "playback resumed");
        Ok(())
    }

    /// Rewind to the first step, keeping the sequence for replay
    pub fn reset(&mut self) {
        self.ticker.cancel();
        self.index = 0;
        self.state = if self.trace.is_some() {
            PlaybackState::Paused
        } else {
            PlaybackState::Idle
        };
        trace!("playback reset");
    }

    /// Discard the sequence entirely
    pub fn stop(&mut self) {
        self.ticker.cancel();
        self.trace = None;
        self.index = 0;
        self.state = PlaybackState::Idle;
        trace!("playback stopped");
    }

    /// Advance one step if playing and the tick is due.
    ///
    /// Returns true when the index moved. Reaching the last step pauses.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.state != PlaybackState::Playing || !self.ticker.fire(now) {
            return false;
        }

        self.index += 1;
        if self.is_at_end() {
            self.state = PlaybackState::Paused;
            trace!(index = self.index, "playback complete");
        } else {
            self.ticker.schedule(now);
        }
        true
    }

    pub fn step_forward(&mut self) -> Result<(), PlaybackError> {
        self.pause();
        if self.trace.is_none() {
            return Err(PlaybackError::NoTrace);
        }
        if self.is_at_end() {
            return Err(PlaybackError::AtEnd);
        }
        self.index += 1;
        Ok(())
    }

    pub fn step_backward(&mut self) -> Result<(), PlaybackError> {
        self.pause();
        if self.trace.is_none() {
            return Err(PlaybackError::NoTrace);
        }
        if self.index == 0 {
            return Err(PlaybackError::AtStart);
        }
        self.index -= 1;
        Ok(())
    }

    pub fn jump_to_start(&mut self) -> Result<(), PlaybackError> {
        self.pause();
        if self.trace.is_none() {
            return Err(PlaybackError::NoTrace);
        }
        self.index = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<(), PlaybackError> {
        self.pause();
        let Some(trace) = &self.trace else {
            return Err(PlaybackError::NoTrace);
        };
        self.index = trace.len().saturating_sub(1);
        Ok(())
    }

    /// Change the tick delay; a pending tick is rescheduled from `now`
    pub fn set_delay(&mut self, delay: Duration, now: Instant) {
        self.ticker.set_delay(delay);
        if self.ticker.is_pending() {
            self.ticker.schedule(now);
        }
    }

    pub fn delay(&self) -> Duration {
        self.ticker.delay()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    pub fn current(&self) -> Option<&Step> {
        self.trace.as_ref().and_then(|t| t.get(self.index))
    }

    pub fn position(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.trace.as_ref().map_or(0, Trace::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.index + 1 >= self.len()
    }

    /// Time until the next automatic advance, if one is pending
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.remaining(now)
    }
}
