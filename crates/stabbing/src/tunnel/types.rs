//! Error and bookkeeping types for the wedge tunnel.

use std::fmt;

/// Errors surfaced by the wedge tunnel.
///
/// `step` returning `Ok(false)` is the normal "cannot extend" outcome and is
/// not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum TunnelError {
    /// Input outside the supported domain: coincident or overlapping
    /// consecutive disks, a non-positive radius, or a degenerate wedge.
    UnsupportedConfiguration { reason: String },
}

impl TunnelError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedConfiguration {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for TunnelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedConfiguration { reason } => {
                write!(f, "unsupported configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for TunnelError {}

/// Counters over the lifetime of one tunnel instance.
///
/// Only accepted steps are counted; a rejected or failed `step` leaves the
/// counters untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TunnelStats {
    pub steps: usize,
    pub pushes: usize,
    pub pops: usize,
}

/// One of the two supporting chains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Chain {
    Top,
    Bot,
}
