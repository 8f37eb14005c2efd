//! Feed a sequence of centers through a `Session` and summarize the outcomes.
//!
//! The report lists one record per disk and the runs found. It never
//! contains tunnel geometry.

use nalgebra::Vector2;
use serde::Serialize;
use stabbing::geom::GeomCfg;
use stabbing::session::{Outcome, RestartPolicy, Run, Session};

/// Session parameters taken from the command line.
#[derive(Clone, Copy, Debug)]
pub struct StabOpts {
    pub radius: f64,
    pub eps: f64,
    pub policy: RestartPolicy,
}

#[derive(Debug, Serialize)]
pub struct DiskRecord {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    pub start: usize,
    pub len: usize,
}

impl From<Run> for RunRecord {
    fn from(r: Run) -> Self {
        Self {
            start: r.start,
            len: r.len,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub version: &'static str,
    pub radius: f64,
    pub eps: f64,
    pub restart: &'static str,
    pub disks: Vec<DiskRecord>,
    /// Finished runs followed by the run still open at the end of input.
    pub runs: Vec<RunRecord>,
    pub longest: Option<RunRecord>,
}

pub fn policy_name(policy: RestartPolicy) -> &'static str {
    match policy {
        RestartPolicy::Clear => "clear",
        RestartPolicy::FromRejected => "from-rejected",
    }
}

fn outcome_record(index: usize, p: Vector2<f64>, outcome: Outcome) -> DiskRecord {
    let (label, reason) = match outcome {
        Outcome::Pending => ("pending", None),
        Outcome::Started => ("started", None),
        Outcome::Accepted => ("accepted", None),
        Outcome::Rejected => ("rejected", None),
        Outcome::Unsupported(e) => ("unsupported", Some(e.to_string())),
    };
    DiskRecord {
        index,
        x: p.x,
        y: p.y,
        outcome: label,
        reason,
    }
}

pub fn stab(centers: &[Vector2<f64>], opts: StabOpts) -> Report {
    let mut session = Session::with_cfg(
        opts.radius,
        GeomCfg {
            eps_touch: opts.eps,
        },
        opts.policy,
    );
    let disks: Vec<DiskRecord> = centers
        .iter()
        .enumerate()
        .map(|(index, &p)| outcome_record(index, p, session.add_disk(p)))
        .collect();
    let runs: Vec<RunRecord> = session
        .runs()
        .iter()
        .copied()
        .chain(session.current_run())
        .map(RunRecord::from)
        .collect();
    let longest = session.longest_run().map(RunRecord::from);
    tracing::info!(
        disks = disks.len(),
        runs = runs.len(),
        longest = longest.map_or(0, |r| r.len),
        "stab_summary"
    );
    Report {
        version: stabbing::VERSION,
        radius: opts.radius,
        eps: opts.eps,
        restart: policy_name(opts.policy),
        disks,
        runs,
        longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn opts(policy: RestartPolicy) -> StabOpts {
        StabOpts {
            radius: 1.0,
            eps: 1e-9,
            policy,
        }
    }

    #[test]
    fn records_outcomes_and_runs() {
        let pts = [
            vector![0.0, 0.0],
            vector![10.0, 0.0],
            vector![20.0, 0.0],
            vector![10.0, 100.0],
            vector![20.0, 100.0],
        ];
        let report = stab(&pts, opts(RestartPolicy::FromRejected));
        let labels: Vec<_> = report.disks.iter().map(|d| d.outcome).collect();
        assert_eq!(
            labels,
            ["pending", "started", "accepted", "rejected", "started"]
        );
        assert_eq!(
            report.runs,
            vec![RunRecord { start: 0, len: 3 }, RunRecord { start: 3, len: 2 }]
        );
        assert_eq!(report.longest, Some(RunRecord { start: 0, len: 3 }));
        assert_eq!(report.restart, "from-rejected");
    }

    #[test]
    fn unsupported_disks_carry_a_reason() {
        let pts = [vector![0.0, 0.0], vector![0.5, 0.0]];
        let report = stab(&pts, opts(RestartPolicy::Clear));
        assert_eq!(report.disks[1].outcome, "unsupported");
        assert!(report.disks[1].reason.as_deref().unwrap().contains("overlap"));
        assert!(report.runs.is_empty());
        assert_eq!(report.longest, None);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json["disks"][0].get("reason").is_none());
    }
}
