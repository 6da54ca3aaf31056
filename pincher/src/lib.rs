// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=pincher --heading-base-level=0

//! Pincher: pan, rotate and pinch-zoom from raw pointer events.
//!
//! An [`Engine`] consumes contact-start, contact-move and contact-end events
//! for any number of simultaneous pointers and accumulates them into one
//! [`Transform`]:
//!
//! - One pointer drags: each move translates by the pointer's displacement.
//! - Two or more pointers pinch: each move applies the translation, uniform
//!   scale and rotation that carries the previous pointer positions onto the
//!   new ones about their centroid.
//! - Lifting pointers can start inertia. Releasing a drag coasts, dropping a
//!   pinch to one pointer keeps spinning about that pointer ("fidget spin"),
//!   and lifting both pinch pointers in quick succession continues the whole
//!   pinch.
//!
//! The engine owns no clock and no display loop. Hosts pass timestamps with
//! every event and call [`Engine::tick`] once per frame while it reports
//! [`Animation::Running`]. Listeners registered with [`Engine::subscribe`]
//! see the transform after every change.
//!
//! ## Example
//!
//! ```rust
//! use pincher::{Engine, PincherOptions, PointerId};
//!
//! let mut engine = Engine::new(PincherOptions::default());
//!
//! // Two fingers move apart symmetrically.
//! engine.add_pointer(PointerId::Touch(0), -50.0, 0.0, 0.0);
//! engine.add_pointer(PointerId::Touch(1), 50.0, 0.0, 0.0);
//! engine.move_pointer(PointerId::Touch(0), -100.0, 0.0, 16.0);
//! engine.move_pointer(PointerId::Touch(1), 100.0, 0.0, 16.0);
//!
//! let d = engine.transform().decompose();
//! assert!((d.scale - 2.0).abs() < 1e-9);
//! assert!(d.rotate.abs() < 1e-9);
//! assert!(d.translate_x.abs() < 1e-9 && d.translate_y.abs() < 1e-9);
//! ```
//!
//! ## Coordinates and time
//!
//! Positions are surface coordinates with the origin at the center of the
//! tracked surface; [`surface_point`] maps client coordinates there.
//! Timestamps must increase and share a unit, milliseconds being the
//! natural choice; the inertia defaults in [`InertiaTuning`] assume it.
//!
//! ## Listener failures
//!
//! A listener returns `Result<(), ListenerError>`. A failing listener never
//! stops the others or the triggering operation; the failure is logged with
//! `tracing` and kept until [`Engine::take_listener_failures`] drains it.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//! - `serde`: (de)serialize [`PincherOptions`], [`InertiaTuning`] and
//!   [`Transform`].
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod engine;
mod listeners;
mod options;
mod pointer;

pub use engine::{Animation, Engine};
pub use listeners::{ListenerError, ListenerFailure, ListenerId};
pub use options::PincherOptions;
pub use pointer::{Pointer, PointerId, surface_point};

pub use pincher_geometry::{Decomposed, Pinch, Transform};
pub use pincher_inertia::{InertiaKind, InertiaKinds, InertiaTuning};
