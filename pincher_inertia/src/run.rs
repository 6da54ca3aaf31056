// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Motion;

/// Warps elapsed time so a constant velocity eases out to a stop.
///
/// Returns `c·(1 − c/2B)` with `c = clamp(elapsed, 0, B)`. The slope is one at
/// `elapsed = 0` and zero from `elapsed = B` on. A non-positive braking time
/// maps everything to zero.
#[must_use]
pub fn braking_time_map(elapsed: f64, braking_time: f64) -> f64 {
    if braking_time <= 0.0 || elapsed.is_nan() {
        return 0.0;
    }
    let c = elapsed.clamp(0.0, braking_time);
    c * (1.0 - c / (2.0 * braking_time))
}

/// A live, cancellable braking animation.
///
/// The run does not schedule itself. Each [`InertiaRun::tick`] with a frame
/// timestamp yields the braking-mapped time elapsed since the previous tick;
/// [`Motion::step`] turns that into a transform delta. The run finishes on
/// the first tick at or past its braking time, or when stopped.
#[derive(Clone, Debug, PartialEq)]
pub struct InertiaRun {
    motion: Motion,
    start: f64,
    braking_time: f64,
    emitted: f64,
    running: bool,
}

impl InertiaRun {
    /// Starts a run of `motion` at timestamp `start`.
    #[must_use]
    pub fn new(motion: Motion, start: f64, braking_time: f64) -> Self {
        Self {
            motion,
            start,
            braking_time,
            emitted: 0.0,
            running: true,
        }
    }

    /// The motion this run applies.
    #[must_use]
    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    /// Timestamp the run started at.
    #[must_use]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns `true` until the run has braked to a stop or been stopped.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances to frame timestamp `now`.
    ///
    /// Returns the braking-mapped time since the previous tick, or `None` if
    /// the run is no longer running. Timestamps earlier than a previous tick
    /// yield a zero step.
    pub fn tick(&mut self, now: f64) -> Option<f64> {
        if !self.running {
            return None;
        }
        let elapsed = now - self.start;
        let mapped = braking_time_map(elapsed, self.braking_time).max(self.emitted);
        let step = mapped - self.emitted;
        self.emitted = mapped;
        if elapsed >= self.braking_time || elapsed.is_nan() {
            self.running = false;
        }
        Some(step)
    }

    /// Stops the run. No further tick yields a step. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
    }
}
