use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use eddy_geom::circle::{fit_circle, CircleFit};
use eddy_geom::geodesic::{distance, distance_matrix};
use eddy_geom::poly::winding_number_xy;

mod input;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "eddy-cli")]
#[command(about = "Circle fits, containment and great-circle distances for eddy contours")]
struct Cmd {
    /// Optional run tag; propagated to provenance sidecars and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Fit a circle to a ring read from CSV (`x`, `y` columns)
    Fit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Winding number of a point with respect to a CSV ring
    Contains {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Great-circle distance in meters between two lon/lat points (degrees)
    Distance {
        #[arg(long, allow_hyphen_values = true)]
        lon0: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat0: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon1: f64,
        #[arg(long, allow_hyphen_values = true)]
        lat1: f64,
    },
    /// All-pairs distance matrix between two CSV point sets (`lon`, `lat` columns)
    Matrix {
        #[arg(long)]
        from: PathBuf,
        #[arg(long)]
        to: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

/// JSON record written by `fit`.
#[derive(Debug, Serialize)]
struct FitRecord {
    vertices: usize,
    center_x: f64,
    center_y: f64,
    radius: f64,
    shape_error: f64,
    circle_area: f64,
    polygon_area: f64,
    clipped_area: f64,
}

impl FitRecord {
    fn new(vertices: usize, fit: &CircleFit) -> Self {
        Self {
            vertices,
            center_x: fit.center.x,
            center_y: fit.center.y,
            radius: fit.radius,
            shape_error: fit.shape_error,
            circle_area: fit.circle_area,
            polygon_area: fit.polygon_area,
            clipped_area: fit.clipped_area,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Fit { input, out } => fit(&input, &out, cmd.tag).map(|_| ()),
        Action::Contains { input, x, y } => contains(&input, x, y),
        Action::Distance {
            lon0,
            lat0,
            lon1,
            lat1,
        } => {
            let d = distance(lon0, lat0, lon1, lat1);
            tracing::info!(lon0, lat0, lon1, lat1, meters = d, "distance");
            println!("{d}");
            Ok(())
        }
        Action::Matrix { from, to, out } => matrix(&from, &to, &out, cmd.tag).map(|_| ()),
        Action::Report => report(cmd.tag),
    }
}

fn fit(input: &Path, out: &Path, tag: Option<String>) -> Result<FitRecord> {
    tracing::info!(input = %input.display(), out = %out.display(), tag = ?tag, "fit");
    let (x, y) = input::read_xy(input, "x", "y")?;
    let fit = fit_circle(&x, &y).with_context(|| format!("fitting {}", input.display()))?;
    let record = FitRecord::new(x.len(), &fit);
    tracing::info!(
        radius = record.radius,
        shape_error = record.shape_error,
        "circle_fit"
    );

    write_json(out, &record)?;
    let payload = Payload::new("fit", json!({ "input": input.to_string_lossy() })).with_tag(tag);
    provenance::write_sidecar(out, &payload)?;
    Ok(record)
}

fn contains(input: &Path, px: f64, py: f64) -> Result<()> {
    let (x, y) = input::read_xy(input, "x", "y")?;
    let wn = winding_number_xy(px, py, &x, &y)
        .with_context(|| format!("ring {}", input.display()))?;
    tracing::info!(x = px, y = py, winding = wn, "contains");
    println!("{}", json!({ "winding_number": wn, "inside": wn != 0 }));
    Ok(())
}

fn matrix(from: &Path, to: &Path, out: &Path, tag: Option<String>) -> Result<Vec<Vec<f64>>> {
    tracing::info!(from = %from.display(), to = %to.display(), out = %out.display(), "matrix");
    let (lon0, lat0) = input::read_xy(from, "lon", "lat")?;
    let (lon1, lat1) = input::read_xy(to, "lon", "lat")?;
    let m = distance_matrix(&lon0, &lat0, &lon1, &lat1)?;
    let rows: Vec<Vec<f64>> = m
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect();
    tracing::info!(rows = m.nrows(), cols = m.ncols(), "distance_matrix");

    write_json(out, &rows)?;
    let payload = Payload::new(
        "matrix",
        json!({
            "from": from.to_string_lossy(),
            "to": to.to_string_lossy(),
            "shape": [m.nrows(), m.ncols()],
        }),
    )
    .with_tag(tag);
    provenance::write_sidecar(out, &payload)?;
    Ok(rows)
}

fn report(tag: Option<String>) -> Result<()> {
    let payload = Payload::new("report", json!({})).with_tag(tag);
    let obj = provenance::block(&payload, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))
}
