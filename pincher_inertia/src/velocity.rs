// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity estimation from noisy, time-stamped deltas.

use crate::InertiaTuning;

/// One entry of a sample history: per-channel deltas over `dt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample<const N: usize> {
    /// Change of each channel since the previous sample.
    pub deltas: [f64; N],
    /// Time since the previous sample.
    pub dt: f64,
}

/// Per-channel rates estimated from the tail of a history.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Velocity<const N: usize> {
    /// Accumulated delta divided by accumulated time, per channel.
    pub rates: [f64; N],
    /// Accumulated time the estimate covers.
    pub duration: f64,
    /// Number of samples the estimate covers.
    pub samples: usize,
}

/// Number of newest samples needed to cover the tuning's minimums.
///
/// Walks backward from the newest sample until both
/// [`InertiaTuning::minimum_time`] and [`InertiaTuning::minimum_samples`] are
/// met. If the whole history never covers the minimum time, every sample is
/// used. Returns `None` if the history is shorter than the minimum count.
#[must_use]
pub fn sample_window(
    dts: impl DoubleEndedIterator<Item = f64>,
    tuning: &InertiaTuning,
) -> Option<usize> {
    let mut elapsed = 0.0;
    let mut count = 0;
    for dt in dts.rev() {
        elapsed += dt;
        count += 1;
        if elapsed >= tuning.minimum_time && count >= tuning.minimum_samples {
            break;
        }
    }
    (count >= tuning.minimum_samples.max(1)).then_some(count)
}

/// Estimates per-channel velocity from a history ordered oldest to newest.
///
/// Returns `None` when the history holds fewer than the minimum sample count,
/// or when the covered time is not positive (no finite rate exists).
#[must_use]
pub fn estimate_velocity<const N: usize>(
    history: &[Sample<N>],
    tuning: &InertiaTuning,
) -> Option<Velocity<N>> {
    let count = sample_window(history.iter().map(|s| s.dt), tuning)?;
    let window = &history[history.len() - count..];

    let mut totals = [0.0; N];
    let mut duration = 0.0;
    for sample in window {
        duration += sample.dt;
        for (total, delta) in totals.iter_mut().zip(sample.deltas) {
            *total += delta;
        }
    }
    if duration <= 0.0 || !duration.is_finite() {
        return None;
    }
    let rates = totals.map(|total| total / duration);
    rates.iter().all(|r| r.is_finite()).then_some(Velocity {
        rates,
        duration,
        samples: count,
    })
}
