// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Numeric parameters shared by velocity estimation and braking.
///
/// Times are in the host's timestamp unit (milliseconds recommended).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct InertiaTuning {
    /// Minimum accumulated time a velocity estimate must cover.
    pub minimum_time: f64,
    /// Minimum number of samples a velocity estimate must cover.
    pub minimum_samples: usize,
    /// Time over which a run's effective velocity eases to zero.
    pub braking_time: f64,
    /// Maximum gap between dropping to one pointer and lifting it for the
    /// two lifts to count as a single pinch release.
    pub pinch_release_window: f64,
}

impl InertiaTuning {
    /// Defaults: 100 time units, 3 samples, 1000 units of braking, 300 units
    /// of pinch-release window.
    pub const DEFAULT: Self = Self {
        minimum_time: 100.0,
        minimum_samples: 3,
        braking_time: 1000.0,
        pinch_release_window: 300.0,
    };
}

impl Default for InertiaTuning {
    fn default() -> Self {
        Self::DEFAULT
    }
}
