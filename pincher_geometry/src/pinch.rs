// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stateless multi-pointer math.
//!
//! All functions take borrowed position snapshots. "Previous" and "next"
//! snapshots are paired by index: `prev[i]` and `next[i]` are the same pointer.

use core::f64::consts::{PI, TAU};

use kurbo::{Point, Vec2};

use crate::Transform;

/// Average radii at or below this are treated as coincident points.
const DEGENERATE_RADIUS: f64 = 1e-9;

/// Arithmetic mean of the points. An empty slice yields the origin.
#[must_use]
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::ORIGIN;
    }
    let sum = points
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.to_vec2());
    (sum / points.len() as f64).to_point()
}

/// Mean Euclidean distance of the points from their centroid.
#[must_use]
pub fn average_radius(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let c = centroid(points);
    let total: f64 = points.iter().map(|p| p.distance(c)).sum();
    total / points.len() as f64
}

/// Maps an angle into `[-π, π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let shifted = (angle + PI) % TAU;
    let wrapped = if shifted < 0.0 { shifted + TAU } else { shifted };
    wrapped - PI
}

/// Mean signed change of bearing of each point about its snapshot's centroid.
///
/// Each per-point change is normalized into `[-π, π)` before averaging, so a
/// bearing crossing the ±π seam does not cancel out a neighbour's rotation.
/// Only index-paired points contribute; an empty pairing yields `0`.
#[must_use]
pub fn average_angular_displacement(prev: &[Point], next: &[Point]) -> f64 {
    let count = prev.len().min(next.len());
    if count == 0 {
        return 0.0;
    }
    let prev_c = centroid(prev);
    let next_c = centroid(next);
    let total: f64 = prev
        .iter()
        .zip(next)
        .map(|(p, n)| {
            let before = (*p - prev_c).atan2();
            let after = (*n - next_c).atan2();
            normalize_angle(after - before)
        })
        .sum();
    total / count as f64
}

/// One-step translate/rotate/scale delta between two snapshots of the same pointers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pinch {
    /// Movement of the centroid, `next_centroid - prev_centroid`.
    pub delta: Vec2,
    /// Ratio of the next average radius to the previous one.
    pub scale: f64,
    /// Average angular displacement in radians.
    pub rotation: f64,
    /// Centroid of the previous snapshot.
    pub prev_centroid: Point,
    /// Centroid of the next snapshot.
    pub next_centroid: Point,
}

impl Pinch {
    /// A pinch that changes nothing, anchored at `centroid`.
    #[must_use]
    pub fn identity_at(centroid: Point) -> Self {
        Self {
            delta: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
            prev_centroid: centroid,
            next_centroid: centroid,
        }
    }

    /// Computes the pinch between `prev` and `next`.
    ///
    /// Returns `None` when the snapshots are empty or of different lengths,
    /// when either snapshot has all of its points coincident (zero average
    /// radius), or when any component would not be finite.
    #[must_use]
    pub fn between(prev: &[Point], next: &[Point]) -> Option<Self> {
        if prev.is_empty() || prev.len() != next.len() {
            return None;
        }
        let prev_radius = average_radius(prev);
        let next_radius = average_radius(next);
        if prev_radius <= DEGENERATE_RADIUS || next_radius <= DEGENERATE_RADIUS {
            return None;
        }
        let prev_centroid = centroid(prev);
        let next_centroid = centroid(next);
        let pinch = Self {
            delta: next_centroid - prev_centroid,
            scale: next_radius / prev_radius,
            rotation: average_angular_displacement(prev, next),
            prev_centroid,
            next_centroid,
        };
        pinch.is_finite().then_some(pinch)
    }

    /// Returns `true` if no component is NaN or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.delta.is_finite()
            && self.scale.is_finite()
            && self.rotation.is_finite()
            && self.prev_centroid.is_finite()
            && self.next_centroid.is_finite()
    }

    /// The pinch as a transform acting on surface coordinates.
    ///
    /// Applies, in order: `translate(-prev_centroid)`, `rotate(rotation)`,
    /// `scale(scale, scale)`, `translate(delta)`, `translate(prev_centroid)`.
    #[must_use]
    pub fn to_transform(&self) -> Transform {
        let c = self.prev_centroid.to_vec2();
        Transform::translation(c.x, c.y)
            .compose(Transform::translation(self.delta.x, self.delta.y))
            .compose(Transform::scale(self.scale, self.scale))
            .compose(Transform::rotation(self.rotation))
            .compose(Transform::translation(-c.x, -c.y))
    }
}

/// Computes the pinch between `prev` and `next`, falling back to an identity pinch.
///
/// Degenerate snapshots (see [`Pinch::between`]) yield
/// [`Pinch::identity_at`] the previous centroid, so callers can always
/// compose the result into a transform without producing NaN or infinity.
#[must_use]
pub fn pinch(prev: &[Point], next: &[Point]) -> Pinch {
    Pinch::between(prev, next).unwrap_or_else(|| Pinch::identity_at(centroid(prev)))
}
