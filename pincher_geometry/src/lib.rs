// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pincher_geometry --heading-base-level=0

//! Pincher Geometry: the affine transform value type and multi-pointer pinch math.
//!
//! This crate provides the two leaf layers of the Pincher gesture engine:
//! - [`Transform`]: an immutable 2D affine map with a left-multiplying
//!   composition convention, lossy decomposition into translate/rotate/scale,
//!   and a fixed-point solver.
//! - [`pinch`] and friends: stateless functions computing centroids, average
//!   radii, average angular displacement, and the one-step [`Pinch`] delta
//!   between two snapshots of the same pointers.
//!
//! It does **not** track pointers or time. The `pincher` crate owns pointer
//! state and feeds position snapshots into these functions.
//!
//! ## Composing actions
//!
//! New actions are applied to an existing transform from the left:
//! `action.compose(current)` first applies `current`, then `action`.
//!
//! ```rust
//! use pincher_geometry::Transform;
//!
//! let current = Transform::scale(2.0, 2.0);
//! let moved = Transform::translation(10.0, 5.0).compose(current);
//!
//! let d = moved.decompose();
//! assert_eq!((d.translate_x, d.translate_y), (10.0, 5.0));
//! assert_eq!(d.scale, 2.0);
//! ```
//!
//! ## Pinch between two snapshots
//!
//! ```rust
//! use kurbo::Point;
//! use pincher_geometry::pinch;
//!
//! let prev = [Point::new(-50.0, 0.0), Point::new(50.0, 0.0)];
//! let next = [Point::new(-100.0, 0.0), Point::new(100.0, 0.0)];
//!
//! let p = pinch(&prev, &next);
//! assert!((p.scale - 2.0).abs() < 1e-12);
//! assert!(p.rotation.abs() < 1e-12);
//!
//! let d = p.to_transform().decompose();
//! assert!((d.scale - 2.0).abs() < 1e-12);
//! ```
//!
//! Coincident points have no defined scale or bearing; [`pinch`] returns an
//! identity pinch for them instead of a non-finite value, and
//! [`Pinch::between`] reports them as `None`.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod pinch;
mod transform;

pub use pinch::{
    Pinch, average_angular_displacement, average_radius, centroid, normalize_angle, pinch,
};
pub use transform::{Decomposed, Transform};
