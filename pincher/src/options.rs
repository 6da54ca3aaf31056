// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration.

use pincher_inertia::{InertiaKinds, InertiaTuning};

/// Inertia switches and cross-cancellation rules.
///
/// Every flag defaults to `true`. Options are read at gesture-phase
/// transitions (pointer count changes), so replacing them through
/// [`crate::Engine::set_options`] takes effect from the next transition.
///
/// ```
/// use pincher::PincherOptions;
///
/// let options = PincherOptions::default()
///     .with_fidget_spin_inertia(false)
///     .with_stop_translate_inertia_on_touch(false);
/// assert!(options.enable_inertia);
/// assert!(!options.enable_fidget_spin_inertia);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PincherOptions {
    /// Master switch; when `false` no inertia starts regardless of the other flags.
    pub enable_inertia: bool,
    /// Translate inertia when the last pointer of a single-pointer drag lifts.
    pub enable_translate_inertia: bool,
    /// Rotation/scale inertia about the surviving pointer when a pinch drops to one pointer.
    pub enable_fidget_spin_inertia: bool,
    /// Full pinch inertia when both pointers of a pinch lift in quick succession.
    pub enable_pinch_inertia: bool,
    /// A new first contact stops translate inertia.
    pub stop_translate_inertia_on_touch: bool,
    /// A second contact stops spin inertia.
    pub stop_fidget_spin_inertia_on_pinch: bool,
    /// A new first contact stops spin inertia.
    pub stop_fidget_spin_inertia_on_touch: bool,
    /// A second contact stops pinch inertia.
    pub stop_pinch_inertia_on_pinch: bool,
    /// A new first contact stops pinch inertia.
    pub stop_pinch_inertia_on_touch: bool,
    /// Starting pinch inertia stops spin inertia.
    pub stop_fidget_spin_inertia_on_pinch_inertia: bool,
    /// Velocity estimation, braking and pinch-release timing.
    pub tuning: InertiaTuning,
}

impl Default for PincherOptions {
    fn default() -> Self {
        Self {
            enable_inertia: true,
            enable_translate_inertia: true,
            enable_fidget_spin_inertia: true,
            enable_pinch_inertia: true,
            stop_translate_inertia_on_touch: true,
            stop_fidget_spin_inertia_on_pinch: true,
            stop_fidget_spin_inertia_on_touch: true,
            stop_pinch_inertia_on_pinch: true,
            stop_pinch_inertia_on_touch: true,
            stop_fidget_spin_inertia_on_pinch_inertia: true,
            tuning: InertiaTuning::default(),
        }
    }
}

impl PincherOptions {
    /// Sets [`Self::enable_inertia`].
    #[must_use]
    pub fn with_inertia(mut self, enabled: bool) -> Self {
        self.enable_inertia = enabled;
        self
    }

    /// Sets [`Self::enable_translate_inertia`].
    #[must_use]
    pub fn with_translate_inertia(mut self, enabled: bool) -> Self {
        self.enable_translate_inertia = enabled;
        self
    }

    /// Sets [`Self::enable_fidget_spin_inertia`].
    #[must_use]
    pub fn with_fidget_spin_inertia(mut self, enabled: bool) -> Self {
        self.enable_fidget_spin_inertia = enabled;
        self
    }

    /// Sets [`Self::enable_pinch_inertia`].
    #[must_use]
    pub fn with_pinch_inertia(mut self, enabled: bool) -> Self {
        self.enable_pinch_inertia = enabled;
        self
    }

    /// Sets [`Self::stop_translate_inertia_on_touch`].
    #[must_use]
    pub fn with_stop_translate_inertia_on_touch(mut self, stop: bool) -> Self {
        self.stop_translate_inertia_on_touch = stop;
        self
    }

    /// Sets [`Self::stop_fidget_spin_inertia_on_pinch`].
    #[must_use]
    pub fn with_stop_fidget_spin_inertia_on_pinch(mut self, stop: bool) -> Self {
        self.stop_fidget_spin_inertia_on_pinch = stop;
        self
    }

    /// Sets [`Self::stop_fidget_spin_inertia_on_touch`].
    #[must_use]
    pub fn with_stop_fidget_spin_inertia_on_touch(mut self, stop: bool) -> Self {
        self.stop_fidget_spin_inertia_on_touch = stop;
        self
    }

    /// Sets [`Self::stop_pinch_inertia_on_pinch`].
    #[must_use]
    pub fn with_stop_pinch_inertia_on_pinch(mut self, stop: bool) -> Self {
        self.stop_pinch_inertia_on_pinch = stop;
        self
    }

    /// Sets [`Self::stop_pinch_inertia_on_touch`].
    #[must_use]
    pub fn with_stop_pinch_inertia_on_touch(mut self, stop: bool) -> Self {
        self.stop_pinch_inertia_on_touch = stop;
        self
    }

    /// Sets [`Self::stop_fidget_spin_inertia_on_pinch_inertia`].
    #[must_use]
    pub fn with_stop_fidget_spin_inertia_on_pinch_inertia(mut self, stop: bool) -> Self {
        self.stop_fidget_spin_inertia_on_pinch_inertia = stop;
        self
    }

    /// Sets [`Self::tuning`].
    #[must_use]
    pub fn with_tuning(mut self, tuning: InertiaTuning) -> Self {
        self.tuning = tuning;
        self
    }

    /// Kinds stopped when a first pointer touches down (0 → 1).
    #[must_use]
    pub fn stopped_on_touch(&self) -> InertiaKinds {
        let mut kinds = InertiaKinds::empty();
        kinds.set(InertiaKinds::TRANSLATE, self.stop_translate_inertia_on_touch);
        kinds.set(InertiaKinds::SPIN, self.stop_fidget_spin_inertia_on_touch);
        kinds.set(InertiaKinds::PINCH, self.stop_pinch_inertia_on_touch);
        kinds
    }

    /// Kinds stopped when a second pointer touches down (1 → 2).
    #[must_use]
    pub fn stopped_on_pinch(&self) -> InertiaKinds {
        let mut kinds = InertiaKinds::empty();
        kinds.set(InertiaKinds::SPIN, self.stop_fidget_spin_inertia_on_pinch);
        kinds.set(InertiaKinds::PINCH, self.stop_pinch_inertia_on_pinch);
        kinds
    }

    /// Kinds stopped when pinch inertia starts.
    #[must_use]
    pub fn stopped_on_pinch_inertia(&self) -> InertiaKinds {
        if self.stop_fidget_spin_inertia_on_pinch_inertia {
            InertiaKinds::SPIN
        } else {
            InertiaKinds::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_stop_everything() {
        let options = PincherOptions::default();
        assert_eq!(options.stopped_on_touch(), InertiaKinds::all());
        assert_eq!(
            options.stopped_on_pinch(),
            InertiaKinds::SPIN | InertiaKinds::PINCH
        );
        assert_eq!(options.stopped_on_pinch_inertia(), InertiaKinds::SPIN);
        assert_eq!(options.tuning, InertiaTuning::DEFAULT);
    }

    #[test]
    fn stop_rules_follow_flags() {
        let options = PincherOptions::default()
            .with_stop_translate_inertia_on_touch(false)
            .with_stop_pinch_inertia_on_pinch(false)
            .with_stop_fidget_spin_inertia_on_pinch_inertia(false);
        assert_eq!(
            options.stopped_on_touch(),
            InertiaKinds::SPIN | InertiaKinds::PINCH
        );
        assert_eq!(options.stopped_on_pinch(), InertiaKinds::SPIN);
        assert!(options.stopped_on_pinch_inertia().is_empty());
    }
}
