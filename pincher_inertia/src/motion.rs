// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What an inertia run does per unit of braking-mapped time.

use alloc::vec::Vec;
use core::f64::consts::E;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};
use pincher_geometry::{Pinch, Transform};

use crate::{InertiaTuning, Sample, estimate_velocity, sample_window};

/// Single-pointer movement recorded during a drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslationSample {
    /// Pointer movement since its previous position.
    pub delta: Vec2,
    /// Time since the previous sample.
    pub dt: f64,
}

/// Multi-pointer pinch step recorded during a pinch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// The pinch applied at this step.
    pub pinch: Pinch,
    /// Time since the previous sample.
    pub dt: f64,
}

/// Where a rotating/scaling run pivots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pivot {
    /// The pivot supplied with each frame (the engine's tracked pointer).
    Tracked,
    /// A pivot fixed when the run started.
    Fixed(Point),
}

/// Rates of change applied by an inertia run.
///
/// Rates are per time unit; a run multiplies them by the braking-mapped time
/// elapsed since its previous frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Translation at a constant velocity.
    Translate {
        /// Displacement per time unit.
        velocity: Vec2,
    },
    /// Rotation and uniform scale about a pivot.
    Spin {
        /// Radians per time unit.
        angular: f64,
        /// Natural log of the scale factor per time unit.
        log_scale: f64,
        /// Center of rotation and scale.
        pivot: Pivot,
    },
}

impl Motion {
    /// Translation inertia from a single-pointer drag history.
    #[must_use]
    pub fn translate_from(history: &[TranslationSample], tuning: &InertiaTuning) -> Option<Self> {
        let samples: Vec<Sample<2>> = history
            .iter()
            .map(|s| Sample {
                deltas: [s.delta.x, s.delta.y],
                dt: s.dt,
            })
            .collect();
        let v = estimate_velocity(&samples, tuning)?;
        Some(Self::Translate {
            velocity: Vec2::new(v.rates[0], v.rates[1]),
        })
    }

    /// Rotation/scale inertia about the tracked pivot from a pinch history.
    ///
    /// Translation in the pinch samples is ignored. Scale is accumulated in
    /// log space so consecutive factors multiply.
    #[must_use]
    pub fn spin_from(history: &[PinchSample], tuning: &InertiaTuning) -> Option<Self> {
        let samples: Vec<Sample<2>> = history
            .iter()
            .map(|s| Sample {
                deltas: [s.pinch.rotation, s.pinch.scale.ln()],
                dt: s.dt,
            })
            .collect();
        let v = estimate_velocity(&samples, tuning)?;
        Some(Self::Spin {
            angular: v.rates[0],
            log_scale: v.rates[1],
            pivot: Pivot::Tracked,
        })
    }

    /// Full pinch-release inertia from a pinch history.
    ///
    /// Replays the newest samples (the same window as [`estimate_velocity`])
    /// as one composed transform and decomposes it. If that transform has a
    /// fixed point, the result rotates and scales about it; otherwise it falls
    /// back to translating at the decomposed translation rate.
    #[must_use]
    pub fn pinch_release_from(history: &[PinchSample], tuning: &InertiaTuning) -> Option<Self> {
        let count = sample_window(history.iter().map(|s| s.dt), tuning)?;
        let window = &history[history.len() - count..];

        let mut replay = Transform::IDENTITY;
        let mut duration = 0.0;
        for sample in window {
            replay = sample.pinch.to_transform().compose(replay);
            duration += sample.dt;
        }
        if duration <= 0.0 || !duration.is_finite() || !replay.is_finite() {
            return None;
        }

        let decomposed = replay.decompose();
        let motion = match replay.fixed_point() {
            Some(pivot) => Self::Spin {
                angular: decomposed.rotate / duration,
                log_scale: decomposed.scale.ln() / duration,
                pivot: Pivot::Fixed(pivot),
            },
            None => Self::Translate {
                velocity: decomposed.translation() / duration,
            },
        };
        motion.is_finite().then_some(motion)
    }

    /// Returns `true` if every rate and pivot coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Translate { velocity } => velocity.is_finite(),
            Self::Spin {
                angular,
                log_scale,
                pivot,
            } => {
                angular.is_finite()
                    && log_scale.is_finite()
                    && match pivot {
                        Pivot::Tracked => true,
                        Pivot::Fixed(p) => p.is_finite(),
                    }
            }
        }
    }

    /// The transform delta for `mapped` units of braking-mapped time.
    ///
    /// `tracked` is used as the pivot for [`Pivot::Tracked`] runs.
    #[must_use]
    pub fn step(&self, mapped: f64, tracked: Point) -> Transform {
        match *self {
            Self::Translate { velocity } => {
                Transform::translation(velocity.x * mapped, velocity.y * mapped)
            }
            Self::Spin {
                angular,
                log_scale,
                pivot,
            } => {
                let center = match pivot {
                    Pivot::Tracked => tracked,
                    Pivot::Fixed(p) => p,
                };
                // `exp` is not among the no_std float functions.
                let s = E.powf(log_scale * mapped);
                let linear = Transform::scale(s, s).compose(Transform::rotation(angular * mapped));
                Transform::about(center, linear)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use core::f64::consts::FRAC_PI_2;

    use super::*;

    fn spin_sample(rotation: f64, scale: f64, dt: f64) -> PinchSample {
        PinchSample {
            pinch: Pinch {
                rotation,
                scale,
                ..Pinch::identity_at(Point::ORIGIN)
            },
            dt,
        }
    }

    #[test]
    fn translate_from_drag_history() {
        let history: Vec<_> = (0..5)
            .map(|_| TranslationSample {
                delta: Vec2::new(4.0, -2.0),
                dt: 20.0,
            })
            .collect();
        let motion = Motion::translate_from(&history, &InertiaTuning::default()).unwrap();
        assert_eq!(
            motion,
            Motion::Translate {
                velocity: Vec2::new(0.2, -0.1)
            }
        );
    }

    #[test]
    fn spin_accumulates_scale_in_log_space() {
        let history = [spin_sample(0.1, 2.0, 50.0); 3];
        let motion = Motion::spin_from(&history, &InertiaTuning::default()).unwrap();
        let Motion::Spin {
            angular,
            log_scale,
            pivot,
        } = motion
        else {
            panic!("expected spin, got {motion:?}");
        };
        assert!((angular - 0.3 / 150.0).abs() < 1e-12);
        assert!((log_scale - 3.0 * 2.0_f64.ln() / 150.0).abs() < 1e-12);
        assert_eq!(pivot, Pivot::Tracked);
    }

    #[test]
    fn spin_needs_enough_samples() {
        let history = [spin_sample(0.1, 1.0, 50.0); 2];
        assert_eq!(Motion::spin_from(&history, &InertiaTuning::default()), None);
    }

    #[test]
    fn pinch_release_rotates_about_the_fixed_point() {
        let center = Point::new(40.0, -10.0);
        let prev = [Point::new(30.0, -10.0), Point::new(50.0, -10.0)];
        let step = Transform::about(center, Transform::rotation(0.05));
        let mut samples = Vec::new();
        let mut points = prev;
        for _ in 0..4 {
            let next = points.map(|p| step.apply_to(p));
            samples.push(PinchSample {
                pinch: pincher_geometry::pinch(&points, &next),
                dt: 25.0,
            });
            points = next;
        }

        let motion = Motion::pinch_release_from(&samples, &InertiaTuning::default()).unwrap();
        let Motion::Spin {
            angular,
            log_scale,
            pivot: Pivot::Fixed(pivot),
        } = motion
        else {
            panic!("expected fixed-pivot spin, got {motion:?}");
        };
        assert!((angular - 0.2 / 100.0).abs() < 1e-9);
        assert!(log_scale.abs() < 1e-9);
        assert!((pivot.x - center.x).abs() < 1e-6);
        assert!((pivot.y - center.y).abs() < 1e-6);
    }

    #[test]
    fn pinch_release_without_fixed_point_translates() {
        let history: Vec<_> = (0..3)
            .map(|_| PinchSample {
                pinch: Pinch {
                    delta: Vec2::new(6.0, 3.0),
                    ..Pinch::identity_at(Point::new(5.0, 5.0))
                },
                dt: 40.0,
            })
            .collect();
        let motion = Motion::pinch_release_from(&history, &InertiaTuning::default()).unwrap();
        let Motion::Translate { velocity } = motion else {
            panic!("expected translation, got {motion:?}");
        };
        assert!((velocity.x - 18.0 / 120.0).abs() < 1e-12);
        assert!((velocity.y - 9.0 / 120.0).abs() < 1e-12);
    }

    #[test]
    fn spin_step_keeps_the_pivot_in_place() {
        let motion = Motion::Spin {
            angular: FRAC_PI_2,
            log_scale: 2.0_f64.ln(),
            pivot: Pivot::Tracked,
        };
        let pivot = Point::new(3.0, 4.0);
        let t = motion.step(1.0, pivot);
        let moved = t.apply_to(pivot);
        assert!((moved.x - pivot.x).abs() < 1e-12);
        assert!((moved.y - pivot.y).abs() < 1e-12);
        let d = t.decompose();
        assert!((d.scale - 2.0).abs() < 1e-12);
        assert!((d.rotate - FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn spin_step_scales_by_exponential_of_log_rate() {
        let motion = Motion::Spin {
            angular: 0.0,
            log_scale: 0.5,
            pivot: Pivot::Fixed(Point::ORIGIN),
        };
        let d = motion.step(2.0, Point::new(7.0, 7.0)).decompose();
        assert!((d.scale - E).abs() < 1e-12);
        assert!(d.rotate.abs() < 1e-12);
        assert!(d.translate_x.abs() < 1e-12 && d.translate_y.abs() < 1e-12);
    }
}
