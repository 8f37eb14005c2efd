//! Common tangents of two disks sharing one radius.
//!
//! Order of the returned segments is fixed and callers index into it:
//! `[outer+, outer−, inner ccw, inner cw]` (see `TangentKind`).
//!
//! - Outer tangents are `p1p2` translated by `±v`, `v` the left normal of
//!   `p1p2` scaled to length `r`.
//! - Inner tangents exist only for `d > 2r`. They pass through the midpoint of
//!   `p1p2`, are turned by `±asin(2r/d)` and scaled to `sqrt(d² − 4r²)`, so their
//!   endpoints are the tangency points.

use super::types::{perp_ccw, Affine2, Line, Point2, Segment};

/// Index of a tangent in the sequence returned by `tangents`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TangentKind {
    /// Outer tangent on the left of `p1 → p2`.
    OuterUpper = 0,
    /// Outer tangent on the right of `p1 → p2`.
    OuterLower = 1,
    /// Inner tangent turned counterclockwise from `p1 → p2`.
    InnerCcw = 2,
    /// Inner tangent turned clockwise from `p1 → p2`.
    InnerCw = 3,
}

/// Tangent segments between the radius-`r` disks around `p1` and `p2`.
///
/// - `p1 == p2`: empty.
/// - `0 < d <= 2r`: the two outer tangents.
/// - `d > 2r`: outer and inner tangents.
pub fn tangents(r: f64, p1: Point2, p2: Point2) -> Vec<Segment> {
    let s = Segment::new(p1, p2);
    let d = s.squared_length().sqrt();
    if !(d > 0.0) {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(4);
    let v = perp_ccw(s.to_vector()) / d * r;
    out.push(s.transform(&Affine2::translation(v)));
    out.push(s.transform(&Affine2::translation(-v)));
    if d > 2.0 * r {
        let mid = s.midpoint();
        let inner_distance = ((d - 2.0 * r) * (d + 2.0 * r)).sqrt();
        let sin = 2.0 * r / d;
        let cos = (1.0 - sin * sin).sqrt();
        let about_mid = |sin: f64| {
            Affine2::translation(mid)
                .compose(&Affine2::scaling(inner_distance / d))
                .compose(&Affine2::rotation(sin, cos))
                .compose(&Affine2::translation(-mid))
        };
        out.push(s.transform(&about_mid(sin)));
        out.push(s.transform(&about_mid(-sin)));
    }
    out
}

/// Supporting line of one tangent, if it exists for this pair.
#[inline]
pub fn tangent_line(r: f64, p1: Point2, p2: Point2, kind: TangentKind) -> Option<Line> {
    tangents(r, p1, p2)
        .get(kind as usize)
        .map(Segment::supporting_line)
}
