//! Distance, side and intersection-count predicates.
//!
//! Every test that decides "touching" compares a squared distance against a
//! squared threshold, so no square roots enter the predicates. The slack on
//! those comparisons is `GeomCfg::eps_touch`, relative to the threshold.

use nalgebra::Vector2;

use super::types::{cross, GeomCfg, Line, Point2, Ray, Segment, Side};

/// Squared Euclidean distance from a point to a geometric object.
pub trait SquaredDistance {
    fn squared_distance(&self, q: Point2) -> f64;
}

impl SquaredDistance for Vector2<f64> {
    #[inline]
    fn squared_distance(&self, q: Point2) -> f64 {
        (self - q).norm_squared()
    }
}

impl SquaredDistance for Line {
    #[inline]
    fn squared_distance(&self, q: Point2) -> f64 {
        let c = cross(self.d, q - self.p);
        c * c / self.d.norm_squared()
    }
}

impl SquaredDistance for Ray {
    fn squared_distance(&self, q: Point2) -> f64 {
        let w = q - self.source;
        if w.dot(&self.d) <= 0.0 {
            w.norm_squared()
        } else {
            let c = cross(self.d, w);
            c * c / self.d.norm_squared()
        }
    }
}

impl SquaredDistance for Segment {
    fn squared_distance(&self, q: Point2) -> f64 {
        let d = self.to_vector();
        let w = q - self.source;
        let dd = d.norm_squared();
        let t = if dd > 0.0 {
            (w.dot(&d) / dd).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (w - d * t).norm_squared()
    }
}

/// Squared distance between `q` and `obj`.
#[inline]
pub fn squared_distance<T: SquaredDistance + ?Sized>(obj: &T, q: Point2) -> f64 {
    obj.squared_distance(q)
}

/// Sign of the orientation determinant: `Positive` left of `l`, `Negative` right.
#[inline]
pub fn oriented_side(q: Point2, l: &Line) -> Side {
    Side::of(cross(l.d, q - l.p))
}

/// Side test for the radius-`r` disk around `q`.
///
/// `Zero` whenever the disk touches or crosses `l`; otherwise the side of `q`.
#[inline]
pub fn inflated_side(r: f64, q: Point2, l: &Line, cfg: GeomCfg) -> Side {
    if l.squared_distance(q) <= r * r * (1.0 + cfg.eps_touch) {
        Side::Zero
    } else {
        oriented_side(q, l)
    }
}

/// Number of intersection points of the radius-`r` circle around `q` with `obj`
/// (a line or a ray).
#[inline]
pub fn line_circle_intersection_count<T: SquaredDistance + ?Sized>(
    r: f64,
    q: Point2,
    obj: &T,
    cfg: GeomCfg,
) -> u8 {
    count_against(obj.squared_distance(q), r * r, cfg)
}

/// Number of intersection points of two radius-`r` circles.
#[inline]
pub fn circle_circle_intersection_count(r: f64, p1: Point2, p2: Point2, cfg: GeomCfg) -> u8 {
    count_against(SquaredDistance::squared_distance(&p1, p2), 4.0 * r * r, cfg)
}

#[inline]
fn count_against(dd: f64, threshold: f64, cfg: GeomCfg) -> u8 {
    if dd < threshold * (1.0 - cfg.eps_touch) {
        2
    } else if dd <= threshold * (1.0 + cfg.eps_touch) {
        1
    } else {
        0
    }
}

/// Intersection point of two lines; `None` if they are parallel.
pub fn line_intersection(l1: &Line, l2: &Line) -> Option<Point2> {
    let det = cross(l1.d, l2.d);
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    let t = cross(l2.p - l1.p, l2.d) / det;
    let p = l1.p + l1.d * t;
    if p.x.is_finite() && p.y.is_finite() {
        Some(p)
    } else {
        None
    }
}
