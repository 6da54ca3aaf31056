// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracked contacts and surface coordinates.

use kurbo::{Point, Rect, Vec2};

/// Identifier for the usual pointer sources: the mouse, or one touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The mouse cursor; there is only ever one.
    Mouse,
    /// A touch contact, by its platform identifier.
    Touch(u64),
}

/// One tracked contact, owned by the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer<K> {
    id: K,
    position: Point,
    time: f64,
    created: f64,
}

impl<K: Copy> Pointer<K> {
    pub(crate) fn new(id: K, position: Point, time: f64) -> Self {
        Self {
            id,
            position,
            time,
            created: time,
        }
    }

    /// The pointer's identifier.
    #[must_use]
    pub fn id(&self) -> K {
        self.id
    }

    /// Last known position in surface coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Timestamp of the last contact-start or contact-move.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Timestamp of the contact-start.
    #[must_use]
    pub fn created(&self) -> f64 {
        self.created
    }

    /// Moves the pointer, returning the displacement and elapsed time.
    pub(crate) fn update(&mut self, position: Point, time: f64) -> (Vec2, f64) {
        let delta = position - self.position;
        let dt = time - self.time;
        self.position = position;
        self.time = time;
        (delta, dt)
    }
}

/// Maps a client-space point into surface coordinates centered on `bounds`.
///
/// ```
/// use kurbo::{Point, Rect};
/// use pincher::surface_point;
///
/// let bounds = Rect::new(100.0, 100.0, 300.0, 200.0);
/// assert_eq!(surface_point(Point::new(200.0, 150.0), bounds), Point::ORIGIN);
/// assert_eq!(surface_point(Point::new(110.0, 160.0), bounds), Point::new(-90.0, 10.0));
/// ```
#[must_use]
pub fn surface_point(client: Point, bounds: Rect) -> Point {
    (client - bounds.center()).to_point()
}
