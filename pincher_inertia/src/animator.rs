// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use pincher_geometry::Transform;

use crate::{InertiaKind, InertiaKinds, InertiaRun};

/// At most one live [`InertiaRun`] per [`InertiaKind`].
///
/// Runs of different kinds are in flight independently and share nothing but
/// the transform their frames are composed into. Starting a run replaces any
/// run of the same kind.
#[derive(Clone, Debug, Default)]
pub struct Inertia {
    translate: Option<InertiaRun>,
    spin: Option<InertiaRun>,
    pinch: Option<InertiaRun>,
}

impl Inertia {
    /// Creates an animator with no live runs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, kind: InertiaKind) -> &mut Option<InertiaRun> {
        match kind {
            InertiaKind::Translate => &mut self.translate,
            InertiaKind::Spin => &mut self.spin,
            InertiaKind::Pinch => &mut self.pinch,
        }
    }

    fn get(&self, kind: InertiaKind) -> Option<&InertiaRun> {
        match kind {
            InertiaKind::Translate => self.translate.as_ref(),
            InertiaKind::Spin => self.spin.as_ref(),
            InertiaKind::Pinch => self.pinch.as_ref(),
        }
    }

    /// Installs `run` as the live run of `kind`, stopping any previous one.
    pub fn start(&mut self, kind: InertiaKind, run: InertiaRun) {
        tracing::debug!(?kind, motion = ?run.motion(), start = run.start(), "inertia started");
        if let Some(mut previous) = self.slot(kind).replace(run) {
            previous.stop();
        }
    }

    /// Stops every live run whose kind is in `kinds`.
    ///
    /// Returns the kinds that were actually running.
    pub fn stop(&mut self, kinds: InertiaKinds) -> InertiaKinds {
        let mut stopped = InertiaKinds::empty();
        for kind in InertiaKind::ALL {
            if !kinds.contains(kind.flag()) {
                continue;
            }
            if let Some(mut run) = self.slot(kind).take() {
                if run.is_running() {
                    stopped |= kind.flag();
                }
                run.stop();
            }
        }
        if !stopped.is_empty() {
            tracing::debug!(?stopped, "inertia stopped");
        }
        stopped
    }

    /// The kinds that currently have a live run.
    #[must_use]
    pub fn running(&self) -> InertiaKinds {
        InertiaKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some_and(InertiaRun::is_running))
            .fold(InertiaKinds::empty(), |acc, kind| acc | kind.flag())
    }

    /// Returns `true` if any run is live.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.running().is_empty()
    }

    /// Advances every live run to frame timestamp `now`.
    ///
    /// Returns the composed delta of all runs that stepped, applied in
    /// translate, spin, pinch order, or `None` if no run was live.
    /// `tracked` is the pivot for runs with [`crate::Pivot::Tracked`]. Runs
    /// that finish on this frame still contribute their last step and are
    /// then dropped.
    pub fn tick(&mut self, now: f64, tracked: Point) -> Option<Transform> {
        let mut delta: Option<Transform> = None;
        for kind in InertiaKind::ALL {
            let slot = self.slot(kind);
            let Some(run) = slot.as_mut() else {
                continue;
            };
            if let Some(mapped) = run.tick(now) {
                let step = run.motion().step(mapped, tracked);
                delta = Some(step.compose(delta.unwrap_or(Transform::IDENTITY)));
            }
            if !run.is_running() {
                *slot = None;
            }
        }
        delta
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;

    use super::*;
    use crate::{Motion, Pivot};

    fn translate_run(vx: f64, start: f64) -> InertiaRun {
        InertiaRun::new(
            Motion::Translate {
                velocity: Vec2::new(vx, 0.0),
            },
            start,
            1000.0,
        )
    }

    #[test]
    fn idle_animator_yields_nothing() {
        let mut inertia = Inertia::new();
        assert!(!inertia.is_running());
        assert_eq!(inertia.tick(16.0, Point::ORIGIN), None);
    }

    #[test]
    fn starting_same_kind_replaces_previous_run() {
        let mut inertia = Inertia::new();
        inertia.start(InertiaKind::Translate, translate_run(1.0, 0.0));
        inertia.start(InertiaKind::Translate, translate_run(2.0, 0.0));
        let delta = inertia.tick(500.0, Point::ORIGIN).unwrap();
        assert_eq!(delta.decompose().translate_x, 750.0);
    }

    #[test]
    fn kinds_run_side_by_side_and_stop_independently() {
        let mut inertia = Inertia::new();
        inertia.start(InertiaKind::Translate, translate_run(1.0, 0.0));
        inertia.start(
            InertiaKind::Spin,
            InertiaRun::new(
                Motion::Spin {
                    angular: 0.001,
                    log_scale: 0.0,
                    pivot: Pivot::Tracked,
                },
                0.0,
                1000.0,
            ),
        );
        assert_eq!(
            inertia.running(),
            InertiaKinds::TRANSLATE | InertiaKinds::SPIN
        );

        let stopped = inertia.stop(InertiaKinds::SPIN | InertiaKinds::PINCH);
        assert_eq!(stopped, InertiaKinds::SPIN);
        assert_eq!(inertia.running(), InertiaKinds::TRANSLATE);

        let delta = inertia.tick(500.0, Point::ORIGIN).unwrap();
        assert_eq!(delta.decompose().rotate, 0.0);
    }

    #[test]
    fn finished_runs_are_dropped_after_their_last_step() {
        let mut inertia = Inertia::new();
        inertia.start(InertiaKind::Pinch, translate_run(1.0, 0.0));
        let last = inertia.tick(1200.0, Point::ORIGIN).unwrap();
        assert_eq!(last.decompose().translate_x, 500.0);
        assert!(!inertia.is_running());
        assert_eq!(inertia.tick(1300.0, Point::ORIGIN), None);
    }

    #[test]
    fn tracked_pivot_is_read_each_frame() {
        let mut inertia = Inertia::new();
        inertia.start(
            InertiaKind::Spin,
            InertiaRun::new(
                Motion::Spin {
                    angular: 0.001,
                    log_scale: 0.0,
                    pivot: Pivot::Tracked,
                },
                0.0,
                1000.0,
            ),
        );
        let pivot = Point::new(50.0, 50.0);
        let delta = inertia.tick(100.0, pivot).unwrap();
        let moved = delta.apply_to(pivot);
        assert!((moved.x - pivot.x).abs() < 1e-9);
        assert!((moved.y - pivot.y).abs() < 1e-9);
    }
}
