//! Frame export: JSON documents and flat edge tables (CSV / Parquet).

use anyhow::{Context, Result};
use clap::ValueEnum;
use hexflip::Frame;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Csv,
    Parquet,
}

/// Serialized form of one `Frame`.
#[derive(Debug, Serialize)]
pub struct FrameRecord {
    pub step: usize,
    pub flipped: Option<usize>,
    pub title: String,
    pub points: Vec<[f64; 2]>,
    pub edges: Vec<[usize; 2]>,
    pub marked: Vec<usize>,
}

impl From<&Frame> for FrameRecord {
    fn from(f: &Frame) -> Self {
        Self {
            step: f.step,
            flipped: f.flipped.map(|id| id.0),
            title: f.title(),
            points: f.points.iter().map(|&(x, y)| [x, y]).collect(),
            edges: f.edges.iter().map(|&(i, j)| [i.0, j.0]).collect(),
            marked: f.marked.iter().map(|id| id.0).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct FramesDoc<'a> {
    run_id: Option<&'a str>,
    frames: Vec<FrameRecord>,
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

pub fn write_frames(path: &Path, frames: &[Frame], format: Format, run_id: Option<&str>) -> Result<()> {
    ensure_parent(path)?;
    match format {
        Format::Json => {
            let doc = FramesDoc {
                run_id,
                frames: frames.iter().map(FrameRecord::from).collect(),
            };
            fs::write(path, serde_json::to_vec_pretty(&doc)?)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        Format::Csv => {
            let mut df = edge_table(frames)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)?;
        }
        Format::Parquet => {
            let mut df = edge_table(frames)?;
            let mut file =
                File::create(path).with_context(|| format!("creating {}", path.display()))?;
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
    }
    Ok(())
}

/// One row per (frame, edge): `step, i, j, x0, y0, x1, y1, marked_i, marked_j`.
pub fn edge_table(frames: &[Frame]) -> Result<DataFrame> {
    let mut step = Vec::new();
    let mut ii = Vec::new();
    let mut jj = Vec::new();
    let (mut x0, mut y0, mut x1, mut y1) = (Vec::new(), Vec::new(), Vec::new(), Vec::new());
    let mut marked_i = Vec::new();
    let mut marked_j = Vec::new();
    for f in frames {
        for (&(i, j), ((ax, ay), (bx, by))) in f.edges.iter().zip(f.segments()) {
            step.push(f.step as u32);
            ii.push(i.0 as u32);
            jj.push(j.0 as u32);
            x0.push(ax);
            y0.push(ay);
            x1.push(bx);
            y1.push(by);
            marked_i.push(f.marked.contains(&i));
            marked_j.push(f.marked.contains(&j));
        }
    }
    let df = df!(
        "step" => step,
        "i" => ii,
        "j" => jj,
        "x0" => x0,
        "y0" => y0,
        "x1" => x1,
        "y1" => y1,
        "marked_i" => marked_i,
        "marked_j" => marked_j
    )?;
    Ok(df)
}
