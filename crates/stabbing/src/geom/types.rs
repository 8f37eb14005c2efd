//! Basic 2D types and the tolerance used by the tangency predicates.
//!
//! - `GeomCfg`: centralizes the slack on squared-distance comparisons.
//! - `Side`: three-valued outcome of side tests (`NEGATIVE`/`ZERO`/`POSITIVE`).
//! - `Line`, `Segment`, `Ray`: directed objects built from a point and a direction.
//! - `Affine2`: 2D affine map used by the tangent construction.
//!
//! Code cross-refs: `predicates::{oriented_side, inflated_side}`, `tangents::tangents`

use nalgebra::{Matrix2, Vector2};

/// Disk centers and other points in the plane.
pub type Point2 = Vector2<f64>;

/// Geometry configuration (tolerances).
///
/// `eps_touch` widens every "touches" outcome: a squared distance within a
/// factor `1 ± eps_touch` of the threshold (`r²` or `(2r)²`) counts as
/// tangency, so the slack scales with the radius. With `eps_touch = 0` the
/// comparisons are plain `f64` comparisons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_touch: f64,
}

impl GeomCfg {
    /// No slack: ties only on bit-exact equality.
    #[inline]
    pub fn exact() -> Self {
        Self { eps_touch: 0.0 }
    }
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self { eps_touch: 1e-9 }
    }
}

/// Result of a side test against a directed line.
///
/// `Positive` is the left side (counterclockwise of the direction).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Negative,
    Zero,
    Positive,
}

impl Side {
    #[inline]
    pub fn of(x: f64) -> Self {
        if x > 0.0 {
            Side::Positive
        } else if x < 0.0 {
            Side::Negative
        } else {
            Side::Zero
        }
    }
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
pub fn cross(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// `v` rotated by +90°.
#[inline]
pub fn perp_ccw(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(-v.y, v.x)
}

/// Infinite directed line through `p` with direction `d` (`d ≠ 0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub p: Point2,
    pub d: Vector2<f64>,
}

impl Line {
    #[inline]
    pub fn new(p: Point2, d: Vector2<f64>) -> Self {
        Self { p, d }
    }

    #[inline]
    pub fn through(a: Point2, b: Point2) -> Self {
        Self { p: a, d: b - a }
    }

    /// Line through `q` perpendicular to `self`, directed as `self` turned by +90°.
    #[inline]
    pub fn perpendicular(&self, q: Point2) -> Line {
        Line {
            p: q,
            d: perp_ccw(self.d),
        }
    }

    /// Point-set equality (orientation ignored).
    ///
    /// `eps` bounds the cross products used for the parallel and on-line checks.
    pub fn coincides(&self, other: &Line, eps: f64) -> bool {
        let scale = self.d.norm() * other.d.norm();
        if scale <= 0.0 {
            return false;
        }
        let parallel = cross(self.d, other.d).abs() <= eps * scale;
        let on_line = cross(self.d, other.p - self.p).abs() <= eps * self.d.norm();
        parallel && on_line
    }
}

/// Directed segment `source → target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub source: Point2,
    pub target: Point2,
}

impl Segment {
    #[inline]
    pub fn new(source: Point2, target: Point2) -> Self {
        Self { source, target }
    }
    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        self.target - self.source
    }
    #[inline]
    pub fn squared_length(&self) -> f64 {
        self.to_vector().norm_squared()
    }
    #[inline]
    pub fn midpoint(&self) -> Point2 {
        self.source + 0.5 * self.to_vector()
    }
    #[inline]
    pub fn supporting_line(&self) -> Line {
        Line::through(self.source, self.target)
    }
    #[inline]
    pub fn transform(&self, f: &Affine2) -> Segment {
        Segment {
            source: f.apply(self.source),
            target: f.apply(self.target),
        }
    }
}

/// Ray starting at `source` with direction `d`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub source: Point2,
    pub d: Vector2<f64>,
}

impl Ray {
    #[inline]
    pub fn new(source: Point2, d: Vector2<f64>) -> Self {
        Self { source, d }
    }

    /// Ray from `source` along the direction of `line`.
    #[inline]
    pub fn along(source: Point2, line: &Line) -> Self {
        Self { source, d: line.d }
    }
}

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    #[inline]
    pub fn scaling(s: f64) -> Self {
        Self {
            m: Matrix2::identity() * s,
            t: Vector2::zeros(),
        }
    }
    /// Rotation given by its sine and cosine (counterclockwise for `sin > 0`).
    #[inline]
    pub fn rotation(sin: f64, cos: f64) -> Self {
        Self {
            m: Matrix2::new(cos, -sin, sin, cos),
            t: Vector2::zeros(),
        }
    }
    /// Composition `self ∘ other` (apply `other` first).
    #[inline]
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }
    #[inline]
    pub fn apply(&self, p: Point2) -> Point2 {
        self.m * p + self.t
    }
}
