// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bitflags::bitflags;

/// The three independent inertia slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InertiaKind {
    /// Translation after the last pointer lifts from a single-pointer drag.
    Translate,
    /// Rotation and scale about the surviving pointer after a two-pointer
    /// gesture drops to one pointer ("fidget spin").
    Spin,
    /// Full pinch replay after both pointers lift in quick succession.
    Pinch,
}

impl InertiaKind {
    /// All kinds, in the order their frames are applied.
    pub const ALL: [Self; 3] = [Self::Translate, Self::Spin, Self::Pinch];

    /// The single-kind flag set for this kind.
    #[must_use]
    pub const fn flag(self) -> InertiaKinds {
        match self {
            Self::Translate => InertiaKinds::TRANSLATE,
            Self::Spin => InertiaKinds::SPIN,
            Self::Pinch => InertiaKinds::PINCH,
        }
    }
}

bitflags! {
    /// A set of [`InertiaKind`]s, used to stop several slots at once.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct InertiaKinds: u8 {
        /// [`InertiaKind::Translate`].
        const TRANSLATE = 1 << 0;
        /// [`InertiaKind::Spin`].
        const SPIN = 1 << 1;
        /// [`InertiaKind::Pinch`].
        const PINCH = 1 << 2;
    }
}

impl From<InertiaKind> for InertiaKinds {
    fn from(kind: InertiaKind) -> Self {
        kind.flag()
    }
}
