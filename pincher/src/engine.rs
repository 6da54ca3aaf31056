// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pointer/gesture state machine.

use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use pincher_geometry::{Pinch, Transform};
use pincher_inertia::{
    Inertia, InertiaKind, InertiaKinds, InertiaRun, Motion, PinchSample, TranslationSample,
};
use smallvec::SmallVec;

use crate::listeners::{ListenerError, ListenerFailure, ListenerId, Listeners};
use crate::{PincherOptions, Pointer, PointerId};

/// Samples kept per history before the oldest half is discarded.
const HISTORY_CAPACITY: usize = 1024;

type Positions = SmallVec<[Point; 4]>;

/// Whether the host should keep driving [`Engine::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum Animation {
    /// At least one inertia run is live; request another frame.
    Running,
    /// No inertia run is live.
    Idle,
}

impl Animation {
    /// Returns `true` for [`Animation::Running`].
    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Turns pointer events into a single accumulated [`Transform`].
///
/// The phase is implied by the number of active pointers: none is idle, one
/// drags, two or more pinch. Inertia is started at phase transitions and
/// advanced by the host through [`Engine::tick`].
///
/// Pointer ids of type `K` only need to be comparable; [`PointerId`] covers
/// the usual mouse-or-touch case.
#[derive(Debug)]
pub struct Engine<K = PointerId> {
    options: PincherOptions,
    pointers: SmallVec<[Pointer<K>; 4]>,
    transform: Transform,
    listeners: Listeners,
    inertia: Inertia,
    translation_history: Vec<TranslationSample>,
    pinch_history: Vec<PinchSample>,
    /// Last position of the single remaining pointer.
    pivot: Point,
    /// Latest timestamp seen on any input or frame.
    now: f64,
    last_pinch_time: f64,
    /// When the pointer count last dropped from two to one.
    released_to_one_at: Option<f64>,
}

impl<K: Copy + Eq + fmt::Debug> Default for Engine<K> {
    fn default() -> Self {
        Self::new(PincherOptions::default())
    }
}

impl<K: Copy + Eq + fmt::Debug> Engine<K> {
    /// Creates an idle engine with the identity transform.
    #[must_use]
    pub fn new(options: PincherOptions) -> Self {
        Self {
            options,
            pointers: SmallVec::new(),
            transform: Transform::IDENTITY,
            listeners: Listeners::default(),
            inertia: Inertia::new(),
            translation_history: Vec::new(),
            pinch_history: Vec::new(),
            pivot: Point::ORIGIN,
            now: f64::NEG_INFINITY,
            last_pinch_time: 0.0,
            released_to_one_at: None,
        }
    }

    /// The current options.
    #[must_use]
    pub fn options(&self) -> &PincherOptions {
        &self.options
    }

    /// Replaces all options. Effective from the next pointer-count change.
    pub fn set_options(&mut self, options: PincherOptions) {
        self.options = options;
    }

    /// The accumulated transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Replaces the accumulated transform without notifying listeners.
    ///
    /// Render adapters use this to reset to identity after consuming a delta.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Number of active pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Active pointers in the order they touched down.
    #[must_use]
    pub fn pointers(&self) -> &[Pointer<K>] {
        &self.pointers
    }

    /// The tracked pivot: last position of the most recent single pointer.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// Returns `true` while any inertia run is live.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.inertia.is_running()
    }

    /// Stops live inertia of the given kinds, returning those that were running.
    pub fn stop_inertia(&mut self, kinds: InertiaKinds) -> InertiaKinds {
        self.inertia.stop(kinds)
    }

    /// Registers a listener called with the transform after every change.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&Transform) -> Result<(), ListenerError> + 'static,
    ) -> ListenerId {
        self.listeners.subscribe(listener)
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Drains the listener failures recorded since the last call.
    pub fn take_listener_failures(&mut self) -> Vec<ListenerFailure> {
        self.listeners.take_failures()
    }

    /// A contact started at `(x, y)` at time `t`.
    ///
    /// An id that is already active, or a non-finite position, is ignored.
    pub fn add_pointer(&mut self, id: K, x: f64, y: f64, t: f64) {
        if self.index_of(id).is_some() {
            return;
        }
        let position = Point::new(x, y);
        if !position.is_finite() {
            tracing::debug!(pointer = ?id, ?position, "ignoring non-finite contact");
            return;
        }
        self.observe(t);
        self.pointers.push(Pointer::new(id, position, t));
        let count = self.pointers.len();
        tracing::trace!(pointer = ?id, count, "pointer added");

        match count {
            1 => {
                self.inertia.stop(self.options.stopped_on_touch());
                self.translation_history.clear();
                self.pivot = position;
            }
            2 => {
                self.inertia.stop(self.options.stopped_on_pinch());
                self.pinch_history.clear();
                self.released_to_one_at = None;
            }
            _ => self.pinch_history.clear(),
        }
        self.last_pinch_time = t;
        self.notify();
    }

    /// An active contact moved to `(x, y)` at time `t`.
    ///
    /// Unknown ids are ignored.
    pub fn move_pointer(&mut self, id: K, x: f64, y: f64, t: f64) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        let position = Point::new(x, y);
        if !position.is_finite() {
            tracing::debug!(pointer = ?id, ?position, "ignoring non-finite move");
            return;
        }
        self.observe(t);

        if self.pointers.len() == 1 {
            let (delta, dt) = self.pointers[index].update(position, t);
            self.apply(Transform::translation(delta.x, delta.y));
            push_bounded(
                &mut self.translation_history,
                TranslationSample { delta, dt },
            );
            self.pivot = position;
        } else {
            let prev = self.positions();
            self.pointers[index].update(position, t);
            let next = self.positions();
            match Pinch::between(&prev, &next) {
                Some(pinch) => {
                    self.apply(pinch.to_transform());
                    push_bounded(
                        &mut self.pinch_history,
                        PinchSample {
                            pinch,
                            dt: t - self.last_pinch_time,
                        },
                    );
                }
                None => tracing::debug!(pointer = ?id, "skipping degenerate pinch step"),
            }
            self.last_pinch_time = t;
        }
        self.notify();
    }

    /// An active contact ended, at the latest observed timestamp.
    ///
    /// May start inertia depending on the remaining pointer count. Unknown
    /// ids are ignored.
    pub fn remove_pointer(&mut self, id: K) {
        let Some(index) = self.index_of(id) else {
            return;
        };
        self.pointers.remove(index);
        let count = self.pointers.len();
        tracing::trace!(pointer = ?id, count, "pointer removed");

        match count {
            0 => self.released_all(),
            1 => self.released_to_one(),
            2 => {
                self.pinch_history.clear();
                self.last_pinch_time = self.now;
            }
            _ => {}
        }
        self.notify();
    }

    /// Like [`Engine::remove_pointer`], with an explicit timestamp.
    pub fn remove_pointer_at(&mut self, id: K, t: f64) {
        if self.index_of(id).is_some() {
            self.observe(t);
            self.remove_pointer(id);
        }
    }

    /// Drops every pointer without starting inertia or notifying.
    ///
    /// For gestures interrupted by the platform. Live inertia keeps running.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.translation_history.clear();
        self.pinch_history.clear();
        self.released_to_one_at = None;
    }

    /// Advances live inertia to frame timestamp `now`.
    ///
    /// Composes this frame's step into the transform and notifies listeners
    /// if anything moved.
    pub fn tick(&mut self, now: f64) -> Animation {
        self.observe(now);
        if let Some(delta) = self.inertia.tick(now, self.pivot) {
            self.apply(delta);
            self.notify();
        }
        if self.inertia.is_running() {
            Animation::Running
        } else {
            Animation::Idle
        }
    }

    fn index_of(&self, id: K) -> Option<usize> {
        self.pointers.iter().position(|p| p.id() == id)
    }

    fn positions(&self) -> Positions {
        self.pointers.iter().map(Pointer::position).collect()
    }

    fn observe(&mut self, t: f64) {
        self.now = self.now.max(t);
    }

    fn apply(&mut self, delta: Transform) {
        let next = delta.compose(self.transform);
        if next.is_finite() {
            self.transform = next;
        } else {
            tracing::debug!(?delta, "skipping non-finite transform update");
        }
    }

    fn notify(&mut self) {
        self.listeners.notify(&self.transform);
    }

    fn start(&mut self, kind: InertiaKind, motion: Motion) {
        let run = InertiaRun::new(motion, self.now, self.options.tuning.braking_time);
        self.inertia.start(kind, run);
    }

    /// Two pointers became one.
    fn released_to_one(&mut self) {
        if let Some(survivor) = self.pointers.first() {
            self.pivot = survivor.position();
        }
        self.released_to_one_at = Some(self.now);
        self.translation_history.clear();

        let options = self.options;
        if options.enable_inertia
            && options.enable_fidget_spin_inertia
            && let Some(motion) = Motion::spin_from(&self.pinch_history, &options.tuning)
        {
            self.start(InertiaKind::Spin, motion);
        }
    }

    /// The last pointer lifted.
    fn released_all(&mut self) {
        let options = self.options;
        let released_to_one_at = self.released_to_one_at.take();
        if !options.enable_inertia {
            return;
        }

        let quick_release = released_to_one_at
            .is_some_and(|at| self.now - at <= options.tuning.pinch_release_window);
        if quick_release
            && options.enable_pinch_inertia
            && let Some(motion) = Motion::pinch_release_from(&self.pinch_history, &options.tuning)
        {
            self.inertia.stop(options.stopped_on_pinch_inertia());
            self.start(InertiaKind::Pinch, motion);
            return;
        }

        if options.enable_translate_inertia
            && let Some(motion) = Motion::translate_from(&self.translation_history, &options.tuning)
        {
            self.start(InertiaKind::Translate, motion);
        }
    }
}

fn push_bounded<T>(history: &mut Vec<T>, sample: T) {
    if history.len() >= 2 * HISTORY_CAPACITY {
        history.drain(..HISTORY_CAPACITY);
    }
    history.push(sample);
}
