// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform-changed listeners with per-listener failure isolation.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use pincher_geometry::Transform;
use thiserror::Error;

/// Failures kept for [`crate::Engine::take_listener_failures`]; older ones are dropped.
const MAX_RECORDED_FAILURES: usize = 64;

/// Handle returned by [`crate::Engine::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

/// Error a transform listener reports instead of panicking.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The listener could not use the transform.
    #[error("listener rejected transform: {0}")]
    Rejected(String),
    /// Any other error raised while handling the transform.
    #[error(transparent)]
    Other(#[from] Box<dyn core::error::Error + Send + Sync>),
}

/// A listener error recorded during a notification.
#[derive(Debug)]
pub struct ListenerFailure {
    /// The listener that failed.
    pub listener: ListenerId,
    /// What it reported.
    pub error: ListenerError,
}

type ListenerFn = dyn FnMut(&Transform) -> Result<(), ListenerError>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(ListenerId, Box<ListenerFn>)>,
    failures: VecDeque<ListenerFailure>,
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("entries", &self.entries.len())
            .field("failures", &self.failures)
            .finish()
    }
}

impl Listeners {
    pub(crate) fn subscribe(
        &mut self,
        listener: impl FnMut(&Transform) -> Result<(), ListenerError> + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, Box::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    /// Calls every listener in subscription order.
    ///
    /// A failing listener is logged and recorded; the rest still run.
    pub(crate) fn notify(&mut self, transform: &Transform) {
        for (id, listener) in &mut self.entries {
            if let Err(error) = listener(transform) {
                tracing::warn!(listener = ?id, %error, "transform listener failed");
                if self.failures.len() == MAX_RECORDED_FAILURES {
                    self.failures.pop_front();
                }
                self.failures.push_back(ListenerFailure {
                    listener: *id,
                    error,
                });
            }
        }
    }

    pub(crate) fn take_failures(&mut self) -> Vec<ListenerFailure> {
        self.failures.drain(..).collect()
    }
}
