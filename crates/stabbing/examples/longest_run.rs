//! Print the stabbable runs of a few random walks.
//!
//! Usage:
//!   cargo run -p stabbing --example longest_run -- 0.3
//!
//! The optional argument is the maximum turn per step in radians.

use stabbing::prelude::*;

fn main() {
    let max_turn = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(0.3);
    let cfg = WalkCfg {
        max_turn,
        ..WalkCfg::default()
    };
    for index in 0..5 {
        let pts = match draw_walk(cfg, 200, ReplayToken { seed: 2025, index }) {
            Ok(pts) => pts,
            Err(e) => {
                eprintln!("{e}");
                return;
            }
        };
        let mut session =
            Session::with_cfg(cfg.radius, GeomCfg::default(), RestartPolicy::FromRejected);
        for p in pts {
            session.add_disk(p);
        }
        let longest = session.longest_run().map_or(0, |r| r.len);
        println!(
            "walk {index}: runs={}, longest={longest}",
            session.runs().len() + usize::from(session.tunnel().is_some())
        );
    }
}
