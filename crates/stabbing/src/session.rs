//! Long-lived driver state for feeding disks one at a time.
//!
//! A `Session` owns every placed center and the current tunnel. The first two
//! disks of an attempt start a tunnel; each later disk is stepped. A rejected
//! disk or an unsupported configuration ends the attempt; the `RestartPolicy`
//! decides whether the offending disk seeds the next attempt.
//!
//! Code cross-refs: `tunnel::WedgeTunnel`

use crate::geom::{GeomCfg, Point2};
use crate::tunnel::{fmt_point, TunnelError, WedgeTunnel};

/// What happens to the disk that ended an attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RestartPolicy {
    /// Drop it; the next disk starts from scratch.
    #[default]
    Clear,
    /// Keep it as the first disk of the next attempt.
    FromRejected,
}

/// Result of feeding one disk.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// First disk of a fresh attempt, waiting for a partner.
    Pending,
    /// Second disk; a new tunnel was started.
    Started,
    /// The current tunnel was extended.
    Accepted,
    /// The disk cannot extend the current tunnel; the tunnel ended.
    Rejected,
    /// The disk is outside the supported input domain; the attempt ended.
    Unsupported(TunnelError),
}

/// A contiguous range of placed disks stabbed by one tunnel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
    /// Index of the first disk in `Session::placed`.
    pub start: usize,
    pub len: usize,
}

#[derive(Clone, Debug)]
pub struct Session {
    r: f64,
    cfg: GeomCfg,
    policy: RestartPolicy,
    placed: Vec<Point2>,
    pending: Option<usize>,
    tunnel: Option<WedgeTunnel>,
    start: usize,
    runs: Vec<Run>,
}

impl Session {
    pub fn new(r: f64) -> Self {
        Self::with_cfg(r, GeomCfg::default(), RestartPolicy::default())
    }

    pub fn with_cfg(r: f64, cfg: GeomCfg, policy: RestartPolicy) -> Self {
        Self {
            r,
            cfg,
            policy,
            placed: Vec::new(),
            pending: None,
            tunnel: None,
            start: 0,
            runs: Vec::new(),
        }
    }

    /// Feed the next disk center.
    pub fn add_disk(&mut self, p: Point2) -> Outcome {
        let idx = self.placed.len();
        self.placed.push(p);

        if let Some(t) = self.tunnel.as_mut() {
            return match t.step(p) {
                Ok(true) => Outcome::Accepted,
                Ok(false) => {
                    self.close(idx);
                    Outcome::Rejected
                }
                Err(e) => {
                    tracing::debug!(index = idx, error = %e, "step unsupported");
                    self.close(idx);
                    Outcome::Unsupported(e)
                }
            };
        }

        match self.pending.take() {
            None => {
                self.pending = Some(idx);
                Outcome::Pending
            }
            Some(first) => match WedgeTunnel::with_cfg(self.r, self.placed[first], p, self.cfg) {
                Ok(t) => {
                    self.tunnel = Some(t);
                    self.start = first;
                    Outcome::Started
                }
                Err(e) => {
                    tracing::debug!(index = idx, error = %e, "seed pair unsupported");
                    self.restart_from(idx);
                    Outcome::Unsupported(e)
                }
            },
        }
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }
    #[inline]
    pub fn policy(&self) -> RestartPolicy {
        self.policy
    }
    /// Every disk fed so far, in arrival order.
    #[inline]
    pub fn placed(&self) -> &[Point2] {
        &self.placed
    }
    #[inline]
    pub fn tunnel(&self) -> Option<&WedgeTunnel> {
        self.tunnel.as_ref()
    }
    /// Lone first disk of an attempt that has no tunnel yet.
    #[inline]
    pub fn pending(&self) -> Option<Point2> {
        self.pending.map(|i| self.placed[i])
    }
    /// Disks of the current attempt (what a front end draws).
    pub fn attempt(&self) -> &[Point2] {
        match (&self.tunnel, self.pending) {
            (Some(t), _) => t.disks(),
            (None, Some(i)) => &self.placed[i..=i],
            (None, None) => &[],
        }
    }
    /// Finished runs, oldest first.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }
    #[inline]
    pub fn current_run(&self) -> Option<Run> {
        self.tunnel.as_ref().map(|t| Run {
            start: self.start,
            len: t.disks().len(),
        })
    }
    /// Longest run so far, including the open one; earliest wins ties.
    pub fn longest_run(&self) -> Option<Run> {
        self.runs
            .iter()
            .copied()
            .chain(self.current_run())
            .fold(None, |best: Option<Run>, r| match best {
                Some(b) if b.len >= r.len => Some(b),
                _ => Some(r),
            })
    }

    fn close(&mut self, ended_by: usize) {
        if let Some(t) = self.tunnel.take() {
            let run = Run {
                start: self.start,
                len: t.disks().len(),
            };
            tracing::debug!(
                start = run.start,
                len = run.len,
                ended_by = %fmt_point(self.placed[ended_by]),
                "tunnel ended"
            );
            self.runs.push(run);
        }
        self.restart_from(ended_by);
    }

    fn restart_from(&mut self, idx: usize) {
        self.pending = match self.policy {
            RestartPolicy::Clear => None,
            RestartPolicy::FromRejected => Some(idx),
        };
    }
}
