// Copyright 2025 the Pincher Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

/// Determinants with a smaller magnitude are treated as singular.
const SINGULAR_EPSILON: f64 = 1e-12;

/// Immutable 2D affine transform.
///
/// The six coefficients `(a, b, c, d, e, f)` describe the matrix
///
/// ```text
/// [a c e]
/// [b d f]
/// [0 0 1]
/// ```
///
/// applied to column vectors. This is the same layout as [`kurbo::Affine`],
/// which backs the value.
///
/// Every operation returns a new value. Composition follows the
/// "apply actions from the left" convention: `action.compose(current)`
/// yields the transform that first applies `current` and then `action`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Transform(Affine);

impl Transform {
    /// The identity transform `(1, 0, 0, 1, 0, 0)`.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Returns the identity transform.
    #[must_use]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// A pure translation by `(x, y)`.
    #[must_use]
    pub fn translation(x: f64, y: f64) -> Self {
        Self(Affine::translate((x, y)))
    }

    /// A counter-clockwise rotation by `angle` radians about the origin.
    #[must_use]
    pub fn rotation(angle: f64) -> Self {
        Self(Affine::rotate(angle))
    }

    /// A scale by `sx` horizontally and `sy` vertically about the origin.
    #[must_use]
    pub fn scale(sx: f64, sy: f64) -> Self {
        Self(Affine::scale_non_uniform(sx, sy))
    }

    /// Builds a transform from `[a, b, c, d, e, f]`.
    #[must_use]
    pub const fn from_coeffs(coeffs: [f64; 6]) -> Self {
        Self(Affine::new(coeffs))
    }

    /// Returns the coefficients `[a, b, c, d, e, f]`.
    #[must_use]
    pub fn coeffs(self) -> [f64; 6] {
        self.0.as_coeffs()
    }

    /// Returns the backing [`Affine`].
    #[must_use]
    pub fn as_affine(self) -> Affine {
        self.0
    }

    /// Wraps `linear` so that it acts about `pivot` instead of the origin.
    ///
    /// The result applies `translate(-pivot)`, then `linear`, then
    /// `translate(pivot)`.
    #[must_use]
    pub fn about(pivot: Point, linear: Self) -> Self {
        let p = pivot.to_vec2();
        Self(Affine::translate(p) * linear.0 * Affine::translate(-p))
    }

    /// Composes `self` on the left of `other`.
    ///
    /// The returned transform first applies `other`, then `self`.
    #[must_use]
    pub fn compose(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }

    /// Applies the transform to a point.
    #[must_use]
    pub fn apply_to(self, point: Point) -> Point {
        self.0 * point
    }

    /// Returns `true` if every coefficient is finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Splits the transform into translation, uniform scale and rotation.
    ///
    /// `scale` is the length of the first column and `rotate` its angle.
    /// Any skew or non-uniform scale is discarded, so this is lossy for
    /// transforms that are not similarity transforms.
    #[must_use]
    pub fn decompose(self) -> Decomposed {
        let [a, b, _, _, e, f] = self.0.as_coeffs();
        Decomposed {
            translate_x: e,
            translate_y: f,
            scale: a.hypot(b),
            rotate: b.atan2(a),
        }
    }

    /// Solves for the point this transform leaves in place.
    ///
    /// This is the solution of `(a − 1)x + cy = −e`, `bx + (d − 1)y = −f`.
    /// Returns `None` when the system is singular, which is the case for
    /// pure translations and for degenerate linear parts.
    #[must_use]
    pub fn fixed_point(self) -> Option<Point> {
        let [a, b, c, d, e, f] = self.0.as_coeffs();
        let (m00, m01, r0) = (a - 1.0, c, -e);
        let (m10, m11, r1) = (b, d - 1.0, -f);
        let det = m00 * m11 - m01 * m10;
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let x = (r0 * m11 - m01 * r1) / det;
        let y = (m00 * r1 - r0 * m10) / det;
        (x.is_finite() && y.is_finite()).then_some(Point::new(x, y))
    }

    /// Formats the transform as a CSS `matrix(a, b, c, d, e, f)` function.
    #[must_use]
    pub fn css_matrix(self) -> String {
        let [a, b, c, d, e, f] = self.0.as_coeffs();
        format!("matrix({a}, {b}, {c}, {d}, {e}, {f})")
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Affine> for Transform {
    fn from(affine: Affine) -> Self {
        Self(affine)
    }
}

impl From<Transform> for Affine {
    fn from(transform: Transform) -> Self {
        transform.0
    }
}

/// Translation, uniform scale and rotation read back from a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decomposed {
    /// Horizontal translation (`e`).
    pub translate_x: f64,
    /// Vertical translation (`f`).
    pub translate_y: f64,
    /// Uniform scale, `hypot(a, b)`.
    pub scale: f64,
    /// Rotation in radians, `atan2(b, a)`.
    pub rotate: f64,
}

impl Decomposed {
    /// The translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.translate_x, self.translate_y)
    }

    /// Formats as a CSS `translate(..) rotate(..) scale(..)` transform list.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}rad) scale({})",
            self.translate_x, self.translate_y, self.rotate, self.scale
        )
    }
}
