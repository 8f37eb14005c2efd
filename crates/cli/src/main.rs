use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::json;
use stabbing::session::RestartPolicy;
use stabbing::walk::{draw_walk, ReplayToken, WalkCfg};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod provenance;
mod stab;

use provenance::{current_git_rev, write_sidecar, Payload};
use stab::{policy_name, stab, Report, StabOpts};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Find stabbable runs of equal-radius disks with a wedge tunnel")]
struct Cmd {
    /// Log tunnel events (starts, rejections, restarts) at debug level
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Stab disks whose centers come from a CSV with `x` and `y` columns
    Run {
        #[arg(long)]
        input: String,
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long)]
        out: String,
    },
    /// Stab a generated random walk
    Walk {
        #[arg(long, default_value_t = 100)]
        len: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 3.0)]
        step_min: f64,
        #[arg(long, default_value_t = 6.0)]
        step_max: f64,
        /// Maximum heading change per step (radians)
        #[arg(long, default_value_t = 0.3)]
        max_turn: f64,
        #[command(flatten)]
        session: SessionArgs,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct SessionArgs {
    /// Shared disk radius
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    /// Relative slack on squared-distance tangency tests (0 = plain float comparisons)
    #[arg(long, default_value_t = 1e-9)]
    eps: f64,
    /// What to do with the disk that ends a run
    #[arg(long, value_enum, default_value_t = Restart::Clear)]
    restart: Restart,
}

#[derive(Clone, Copy, ValueEnum)]
enum Restart {
    Clear,
    FromRejected,
}

impl SessionArgs {
    fn opts(&self) -> Result<StabOpts> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            bail!("--radius must be positive and finite, got {}", self.radius);
        }
        if !(self.eps.is_finite() && self.eps >= 0.0) {
            bail!("--eps must be finite and non-negative, got {}", self.eps);
        }
        Ok(StabOpts {
            radius: self.radius,
            eps: self.eps,
            policy: match self.restart {
                Restart::Clear => RestartPolicy::Clear,
                Restart::FromRejected => RestartPolicy::FromRejected,
            },
        })
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            input,
            session,
            out,
        } => run(input, session, out),
        Action::Walk {
            len,
            seed,
            index,
            step_min,
            step_max,
            max_turn,
            session,
            out,
        } => {
            let walk = WalkCfg {
                radius: session.radius,
                step_min,
                step_max,
                max_turn,
            };
            walk_cmd(walk, len, ReplayToken { seed, index }, session, out)
        }
        Action::Report => report(),
    }
}

fn run(input: String, session: SessionArgs, out: String) -> Result<()> {
    let opts = session.opts()?;
    tracing::info!(input, out, radius = opts.radius, "run");
    let centers = input::read_centers(&input)?;
    tracing::info!(disks = centers.len(), "input_centers");
    let report = stab(&centers, opts);
    let payload = Payload::new(params_json(&opts)).with_input(input);
    write_report(&out, &report, payload)
}

fn walk_cmd(
    walk: WalkCfg,
    len: usize,
    tok: ReplayToken,
    session: SessionArgs,
    out: String,
) -> Result<()> {
    let opts = session.opts()?;
    tracing::info!(len, seed = tok.seed, index = tok.index, out, "walk");
    let centers = draw_walk(walk, len, tok)?;
    let report = stab(&centers, opts);
    let mut params = params_json(&opts);
    params["walk"] = json!({
        "len": len,
        "seed": tok.seed,
        "index": tok.index,
        "step_min": walk.step_min,
        "step_max": walk.step_max,
        "max_turn": walk.max_turn
    });
    write_report(&out, &report, Payload::new(params))
}

fn params_json(opts: &StabOpts) -> serde_json::Value {
    json!({
        "radius": opts.radius,
        "eps": opts.eps,
        "restart": policy_name(opts.policy)
    })
}

fn write_report(out: &str, report: &Report, payload: Payload) -> Result<()> {
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {out}"))?;
    let sidecar = write_sidecar(out_path, payload)?;
    tracing::info!(out, sidecar = %sidecar.display(), "report_written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": current_git_rev(),
        "stabbing_version": stabbing::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
