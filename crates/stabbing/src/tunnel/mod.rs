//! Wedge-tunnel engine: online disk stabbing by a two-line corridor.
//!
//! Purpose
//! - Decide, disk by disk, whether a sequence of equal-radius disks can still
//!   be stabbed in order by a line path inside a wedge, and maintain the two
//!   bounding lines (`ccw`, `cw`) plus the two supporting chains (`top`, `bot`).
//!
//! Design
//! - Each chain is a deque of plain centers maintained like a monotone-chain
//!   hull, with turns measured against outer tangents instead of straight
//!   lines. The bounding lines are pure functions of the opposite chain's
//!   front and the newest disk.
//! - `step` is atomic: on rejection nothing changes; on
//!   `UnsupportedConfiguration` every chain mutation is undone before returning.
//!
//! Code cross-refs: `geom::{tangents, inflated_side, line_circle_intersection_count}`,
//! `session::Session`

mod types;
mod wedge;

pub use types::{Chain, TunnelError, TunnelStats};
pub use wedge::WedgeTunnel;
pub(crate) use wedge::fmt_point;
