//! Geometric primitives and predicates for equal-radius disks.
//!
//! Purpose
//! - Provide the stateless layer under the wedge tunnel: points, directed
//!   lines/segments/rays, side tests (plain and radius-inflated), intersection
//!   counts, line intersection and the four common tangents of two disks.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (`Point2`).
//! - `Side::Positive` is left of a directed line.
//! - "Touching" outcomes use `GeomCfg::eps_touch` as relative slack on squared distances.
//!
//! Code cross-refs: `tunnel::WedgeTunnel`

mod predicates;
mod tangents;
mod types;

pub use predicates::{
    circle_circle_intersection_count, inflated_side, line_circle_intersection_count,
    line_intersection, oriented_side, squared_distance, SquaredDistance,
};
pub use tangents::{tangent_line, tangents, TangentKind};
pub use types::{cross, perp_ccw, Affine2, GeomCfg, Line, Point2, Ray, Segment, Side};

#[cfg(test)]
mod tests;
