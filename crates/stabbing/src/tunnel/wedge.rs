//! Incremental wedge tunnel over equal-radius disks.
//!
//! State
//! - `disks`: all accepted centers in arrival order.
//! - `top`, `bot`: deques of centers, the outer supporting chains on either
//!   side of the tunnel. Both end in the most recent disk they took part in.
//! - `ccw`, `cw`: bounding lines of the wedge. `ccw` is the ccw inner tangent of
//!   `(bot.front, p)`, `cw` the cw inner tangent of `(top.front, p)`, where `p`
//!   is the disk that last updated them.
//!
//! Each disk is pushed at most once per chain and popped at most once per
//! chain, so `n` steps cost O(n) chain operations in total.

use std::collections::VecDeque;

use super::types::{Chain, TunnelError, TunnelStats};
use crate::geom::{
    circle_circle_intersection_count, inflated_side, line_circle_intersection_count,
    line_intersection, tangent_line, tangents, GeomCfg, Line, Point2, Ray, Segment, Side,
    TangentKind,
};

/// Per-side parameters of one chain-update pass.
struct Pass {
    /// Chain receiving the new disk at its back; its side's bounding line is rebuilt.
    chain: Chain,
    /// Chain whose front anchors the rebuilt bounding line.
    opposite: Chain,
    /// Outer tangent used to test the back of `chain`.
    outer: TangentKind,
    /// The back of `chain` survives only strictly on this side of that tangent.
    keep: Side,
    /// Inner tangent forming the bounding line.
    inner: TangentKind,
    /// The front of `opposite` is dropped while its successor lies on this side.
    narrow: Side,
}

const CCW_PASS: Pass = Pass {
    chain: Chain::Top,
    opposite: Chain::Bot,
    outer: TangentKind::OuterUpper,
    keep: Side::Negative,
    inner: TangentKind::InnerCcw,
    narrow: Side::Positive,
};

const CW_PASS: Pass = Pass {
    chain: Chain::Bot,
    opposite: Chain::Top,
    outer: TangentKind::OuterLower,
    keep: Side::Positive,
    inner: TangentKind::InnerCw,
    narrow: Side::Negative,
};

/// Chain mutation recorded so a failed `step` can be undone.
enum Undo {
    PopBack(Chain, Point2),
    PopFront(Chain, Point2),
    Push(Chain),
}

/// Wedge tunnel through a growing sequence of radius-`r` disks.
#[derive(Clone, Debug, PartialEq)]
pub struct WedgeTunnel {
    r: f64,
    cfg: GeomCfg,
    disks: Vec<Point2>,
    top: VecDeque<Point2>,
    bot: VecDeque<Point2>,
    ccw: Line,
    cw: Line,
    stats: TunnelStats,
}

impl WedgeTunnel {
    /// Start a tunnel from its first two disks with the default tolerances.
    pub fn new(r: f64, p1: Point2, p2: Point2) -> Result<Self, TunnelError> {
        Self::with_cfg(r, p1, p2, GeomCfg::default())
    }

    /// Start a tunnel from its first two disks.
    ///
    /// Fails with `UnsupportedConfiguration` if `r` is not a positive finite
    /// number or the two disks coincide, overlap or touch.
    pub fn with_cfg(r: f64, p1: Point2, p2: Point2, cfg: GeomCfg) -> Result<Self, TunnelError> {
        if !(r.is_finite() && r > 0.0) {
            return Err(TunnelError::unsupported(format!(
                "radius must be positive and finite, got {r}"
            )));
        }
        if p1 == p2 {
            return Err(TunnelError::unsupported(format!(
                "coincident disk centers at {}",
                fmt_point(p1)
            )));
        }
        if circle_circle_intersection_count(r, p1, p2, cfg) > 0 {
            return Err(overlap(p1, p2));
        }
        let ts = tangents(r, p1, p2);
        let (Some(ccw), Some(cw)) = (
            ts.get(TangentKind::InnerCcw as usize),
            ts.get(TangentKind::InnerCw as usize),
        ) else {
            return Err(overlap(p1, p2));
        };
        tracing::debug!(r, p1 = %fmt_point(p1), p2 = %fmt_point(p2), "tunnel started");
        Ok(Self {
            r,
            cfg,
            disks: vec![p1, p2],
            top: VecDeque::from([p1, p2]),
            bot: VecDeque::from([p1, p2]),
            ccw: ccw.supporting_line(),
            cw: cw.supporting_line(),
            stats: TunnelStats::default(),
        })
    }

    #[inline]
    pub fn r(&self) -> f64 {
        self.r
    }
    #[inline]
    pub fn cfg(&self) -> GeomCfg {
        self.cfg
    }
    #[inline]
    pub fn disks(&self) -> &[Point2] {
        &self.disks
    }
    #[inline]
    pub fn top(&self) -> &VecDeque<Point2> {
        &self.top
    }
    #[inline]
    pub fn bot(&self) -> &VecDeque<Point2> {
        &self.bot
    }
    #[inline]
    pub fn ccw(&self) -> &Line {
        &self.ccw
    }
    #[inline]
    pub fn cw(&self) -> &Line {
        &self.cw
    }
    #[inline]
    pub fn stats(&self) -> TunnelStats {
        self.stats
    }
    #[inline]
    pub fn chain(&self, chain: Chain) -> &VecDeque<Point2> {
        match chain {
            Chain::Top => &self.top,
            Chain::Bot => &self.bot,
        }
    }

    /// Most recently accepted disk.
    #[inline]
    pub fn last(&self) -> Point2 {
        // `disks` starts with the seed pair and only grows.
        self.disks[self.disks.len() - 1]
    }

    /// Intersection of `ccw` and `cw`; `None` if they are parallel.
    #[inline]
    pub fn apex(&self) -> Option<Point2> {
        line_intersection(&self.ccw, &self.cw)
    }

    /// Admission test for a disk at `p`.
    ///
    /// The disk must not lie strictly outside either bounding line, and must
    /// either overlap the last disk or not lie strictly behind it with respect
    /// to both perpendiculars erected at the last disk.
    pub fn intersects_wedge(&self, p: Point2) -> bool {
        let (r, cfg) = (self.r, self.cfg);
        let last = self.last();
        inflated_side(r, p, &self.ccw, cfg) != Side::Positive
            && inflated_side(r, p, &self.cw, cfg) != Side::Negative
            && (circle_circle_intersection_count(r, p, last, cfg) > 0
                || inflated_side(r, p, &self.ccw.perpendicular(last), cfg) != Side::Positive
                || inflated_side(r, p, &self.cw.perpendicular(last), cfg) != Side::Positive)
    }

    /// Try to extend the tunnel with a disk at `p`.
    ///
    /// - `Ok(true)`: accepted, state updated.
    /// - `Ok(false)`: `p` cannot extend this tunnel; state unchanged.
    /// - `Err(UnsupportedConfiguration)`: `p` overlaps the last disk or a
    ///   tangent/apex needed by the update is undefined; state unchanged.
    pub fn step(&mut self, p: Point2) -> Result<bool, TunnelError> {
        let last = self.last();
        if circle_circle_intersection_count(self.r, last, p, self.cfg) > 0 {
            return Err(overlap(last, p));
        }
        if !self.intersects_wedge(p) {
            tracing::trace!(p = %fmt_point(p), "disk outside the wedge");
            return Ok(false);
        }

        let saved = (self.ccw, self.cw, self.stats);
        let mut journal = Vec::new();
        let res = self
            .run_pass(&CCW_PASS, p, &mut journal)
            .and_then(|()| self.run_pass(&CW_PASS, p, &mut journal));
        if let Err(e) = res {
            self.rollback(journal);
            (self.ccw, self.cw, self.stats) = saved;
            tracing::debug!(p = %fmt_point(p), error = %e, "step rolled back");
            return Err(e);
        }

        self.disks.push(p);
        self.stats.steps += 1;
        tracing::trace!(
            p = %fmt_point(p),
            top = self.top.len(),
            bot = self.bot.len(),
            "disk accepted"
        );
        Ok(true)
    }

    /// Outer tangent segments between consecutive members of `chain`
    /// (the upper tangent for `top`, the lower one for `bot`).
    pub fn boundary(&self, chain: Chain) -> Vec<Segment> {
        let kind = match chain {
            Chain::Top => TangentKind::OuterUpper,
            Chain::Bot => TangentKind::OuterLower,
        };
        let c = self.chain(chain);
        c.iter()
            .zip(c.iter().skip(1))
            .filter_map(|(a, b)| tangents(self.r, *a, *b).get(kind as usize).copied())
            .collect()
    }

    #[inline]
    pub fn top_boundary(&self) -> Vec<Segment> {
        self.boundary(Chain::Top)
    }
    #[inline]
    pub fn bot_boundary(&self) -> Vec<Segment> {
        self.boundary(Chain::Bot)
    }

    fn run_pass(
        &mut self,
        pass: &Pass,
        p: Point2,
        journal: &mut Vec<Undo>,
    ) -> Result<(), TunnelError> {
        let (r, cfg) = (self.r, self.cfg);
        let apex = self
            .apex()
            .ok_or_else(|| TunnelError::unsupported("bounding lines are parallel"))?;
        let ray = Ray::along(apex, self.bound(pass.chain));
        if line_circle_intersection_count(r, p, &ray, cfg) >= 2 {
            return Ok(());
        }

        // Drop the back of the chain while the new outer tangent does not
        // strictly keep it outside.
        loop {
            let c = self.chain(pass.chain);
            let n = c.len();
            if n <= 1 {
                break;
            }
            let (prev, back) = (c[n - 2], c[n - 1]);
            let outer = self.tangent(prev, p, pass.outer)?;
            if inflated_side(r, back, &outer, cfg) == pass.keep {
                break;
            }
            self.chain_mut(pass.chain).pop_back();
            journal.push(Undo::PopBack(pass.chain, back));
            self.stats.pops += 1;
        }
        self.chain_mut(pass.chain).push_back(p);
        journal.push(Undo::Push(pass.chain));
        self.stats.pushes += 1;

        // Narrow the wedge from the front of the opposite chain.
        let mut bound = self.tangent(self.chain(pass.opposite)[0], p, pass.inner)?;
        while self.chain(pass.opposite).len() > 1
            && inflated_side(r, self.chain(pass.opposite)[1], &bound, cfg) == pass.narrow
        {
            if let Some(front) = self.chain_mut(pass.opposite).pop_front() {
                journal.push(Undo::PopFront(pass.opposite, front));
                self.stats.pops += 1;
            }
            bound = self.tangent(self.chain(pass.opposite)[0], p, pass.inner)?;
        }
        *self.bound_mut(pass.chain) = bound;
        Ok(())
    }

    fn rollback(&mut self, journal: Vec<Undo>) {
        for op in journal.into_iter().rev() {
            match op {
                Undo::PopBack(c, q) => self.chain_mut(c).push_back(q),
                Undo::PopFront(c, q) => self.chain_mut(c).push_front(q),
                Undo::Push(c) => {
                    self.chain_mut(c).pop_back();
                }
            }
        }
    }

    fn tangent(&self, a: Point2, b: Point2, kind: TangentKind) -> Result<Line, TunnelError> {
        tangent_line(self.r, a, b, kind).ok_or_else(|| {
            TunnelError::unsupported(format!(
                "no {kind:?} tangent between {} and {}; overlapping disks are not implemented",
                fmt_point(a),
                fmt_point(b)
            ))
        })
    }

    #[inline]
    fn chain_mut(&mut self, chain: Chain) -> &mut VecDeque<Point2> {
        match chain {
            Chain::Top => &mut self.top,
            Chain::Bot => &mut self.bot,
        }
    }

    /// Bounding line rebuilt by the pass that pushes onto `chain`.
    #[inline]
    fn bound(&self, chain: Chain) -> &Line {
        match chain {
            Chain::Top => &self.ccw,
            Chain::Bot => &self.cw,
        }
    }
    #[inline]
    fn bound_mut(&mut self, chain: Chain) -> &mut Line {
        match chain {
            Chain::Top => &mut self.ccw,
            Chain::Bot => &mut self.cw,
        }
    }
}

fn overlap(a: Point2, b: Point2) -> TunnelError {
    TunnelError::unsupported(format!(
        "disks at {} and {} overlap; overlapping disks are not implemented",
        fmt_point(a),
        fmt_point(b)
    ))
}

pub(crate) fn fmt_point(p: Point2) -> String {
    format!("({}, {})", p.x, p.y)
}
