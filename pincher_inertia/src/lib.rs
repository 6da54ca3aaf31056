// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pincher_inertia --heading-base-level=0

//! Pincher Inertia: momentum after release.
//!
//! This crate turns a time-stamped gesture history into a velocity estimate,
//! and a velocity estimate into a decaying animation that yields incremental
//! transform deltas once per frame until it brakes to a stop.
//!
//! - [`estimate_velocity`]: walk a sample history backward until both a
//!   minimum elapsed time and a minimum sample count are covered, then divide.
//! - [`Motion`]: what a run does per unit of braking-mapped time (translate,
//!   or rotate+scale about a pivot), derived from translation or pinch
//!   histories.
//! - [`InertiaRun`]: one cancellable, frame-driven braking animation.
//! - [`Inertia`]: at most one live run per [`InertiaKind`], advanced together.
//!
//! ## Frame driving
//!
//! Nothing here owns a clock or a display loop. The host feeds frame
//! timestamps into [`InertiaRun::tick`] (or [`Inertia::tick`]); each call
//! returns only the delta since the previous frame, so deltas compose
//! additively into a live transform.
//!
//! ```rust
//! use kurbo::Vec2;
//! use pincher_inertia::{InertiaRun, Motion};
//!
//! let motion = Motion::Translate { velocity: Vec2::new(1.0, 0.0) };
//! let mut run = InertiaRun::new(motion, 0.0, 1000.0);
//!
//! let first = run.tick(500.0).unwrap();
//! let second = run.tick(1000.0).unwrap();
//! assert!(first > second);
//! assert!(!run.is_running());
//! assert_eq!(run.tick(1500.0), None);
//! ```
//!
//! ## Braking curve
//!
//! With braking time `B`, elapsed time `t` is warped to
//! `m(t) = c·(1 − c/2B)` with `c = clamp(t, 0, B)`. The warp starts at slope
//! one and eases to slope zero at `t = B`, so a constant velocity `v` moves a
//! run by `v·m(t)`: a quadratic ease-out that covers `v·B/2` in total.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod animator;
mod kind;
mod motion;
mod run;
mod tuning;
mod velocity;

pub use animator::Inertia;
pub use kind::{InertiaKind, InertiaKinds};
pub use motion::{Motion, Pivot, PinchSample, TranslationSample};
pub use run::{InertiaRun, braking_time_map};
pub use tuning::InertiaTuning;
pub use velocity::{Sample, Velocity, estimate_velocity, sample_window};
