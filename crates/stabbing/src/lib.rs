//! Online disk stabbing with a wedge tunnel.
//!
//! Disks of one shared radius arrive one at a time; the wedge tunnel decides
//! whether the sequence seen so far can still be threaded, in order, by a
//! corridor bounded by two lines, and keeps the supporting chains up to date.
//!
//! Layers
//! - `geom`: stateless primitives (side tests, intersection counts, tangents).
//! - `tunnel`: the incremental engine (`WedgeTunnel::new`, `WedgeTunnel::step`).
//! - `session`: driver state that restarts tunnels as disks are rejected.
//! - `walk`: reproducible random disk sequences.
//!
//! API Policy
//! - Breaking changes are fine while the crate is pre-1.0; prefer clearer
//!   names over compatibility shims.

pub mod geom;
pub mod session;
pub mod tunnel;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom::{GeomCfg, Line, Point2, Segment, Side, TangentKind};
    pub use crate::session::{Outcome, RestartPolicy, Run, Session};
    pub use crate::tunnel::{Chain, TunnelError, TunnelStats, WedgeTunnel};
    pub use crate::walk::{draw_walk, zigzag, ReplayToken, WalkCfg};
    pub use nalgebra::Vector2 as Vec2;
}
