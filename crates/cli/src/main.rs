use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hexflip::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use export::{write_frames, Format};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "hexflip")]
#[command(about = "Replay flips on the 19-point hex graph and export frames")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    run_id: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply a fixed flip sequence and write one frame per state
    Frames {
        /// Vertex to flip; repeat for a sequence (e.g. --flip 9 --flip 10)
        #[arg(long = "flip")]
        flips: Vec<usize>,
        #[arg(long)]
        out: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Seeded random walk over flippable vertices
    Walk {
        #[arg(long, default_value_t = 16)]
        steps: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print a small provenance JSON block with the starting state
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Frames { flips, out, format } => frames(flips, out, format, cmd.run_id),
        Action::Walk {
            steps,
            seed,
            out,
            format,
        } => walk(WalkCfg { steps, seed }, out, format, cmd.run_id),
        Action::Report => report(cmd.run_id),
    }
}

fn frames(flips: Vec<usize>, out: String, format: Format, run_id: Option<String>) -> Result<()> {
    tracing::info!(flips = ?flips, out, format = ?format, run_id = ?run_id, "frames");
    let script: Vec<VertexId> = flips.iter().copied().map(VertexId).collect();
    let frames = replay(&script)?;
    for f in &frames {
        tracing::info!(step = f.step, edges = f.edges.len(), marked = %f.title(), "frame");
    }
    let out_path = Path::new(&out);
    write_frames(out_path, &frames, format, run_id.as_deref())?;
    let params = serde_json::json!({ "flips": flips, "format": format!("{format:?}") });
    write_sidecar(out_path, Payload::new(params).with_run_id(run_id))?;
    Ok(())
}

/// Frame 0 is the starting state; frame `k` follows the `k`-th flip request.
fn replay(script: &[VertexId]) -> Result<Vec<Frame>> {
    let mut g = HexGraph::new();
    let mut frames = vec![Frame::capture(&g, 0, None)];
    for (k, &id) in script.iter().enumerate() {
        match g.flip(id).with_context(|| format!("flip #{} (vertex {id})", k + 1))? {
            FlipOutcome::Flipped => {}
            FlipOutcome::Skipped { degree } => {
                tracing::warn!(vertex = id.0, degree, "not flippable, skipped")
            }
        }
        frames.push(Frame::capture(&g, k + 1, Some(id)));
    }
    Ok(frames)
}

fn walk(cfg: WalkCfg, out: String, format: Format, run_id: Option<String>) -> Result<()> {
    tracing::info!(steps = cfg.steps, seed = cfg.seed, out, run_id = ?run_id, "walk");
    let mut g = HexGraph::new();
    let path = random_walk(&mut g, cfg);
    if path.len() < cfg.steps {
        tracing::warn!(taken = path.len(), requested = cfg.steps, "walk ended early");
    }
    // rebuild intermediate frames by replaying the recorded path
    let frames = replay(&path)?;
    let out_path = Path::new(&out);
    write_frames(out_path, &frames, format, run_id.as_deref())?;
    let params = serde_json::json!({
        "steps": cfg.steps,
        "seed": cfg.seed,
        "path": path.iter().map(|id| id.0).collect::<Vec<_>>(),
    });
    write_sidecar(out_path, Payload::new(params).with_run_id(run_id))?;
    Ok(())
}

fn report(run_id: Option<String>) -> Result<()> {
    let g = HexGraph::new();
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": hexflip::VERSION,
        "run_id": run_id,
        "points": g.len(),
        "edges": g.adjacency().edge_count(),
        "core": g.core_ids().iter().map(|id| id.0).collect::<Vec<_>>(),
        "marked": g.marked_ids().iter().map(|id| id.0).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
