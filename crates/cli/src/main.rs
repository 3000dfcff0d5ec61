use anyhow::{Context, Result};
use bayazit::api::{
    draw_convex_radial, draw_star_radial, DecompCfg, Decomposer, PolygonReplay, RadialCfg,
    VertexCount, DEFAULT_EPS, DEFAULT_MAX_VERTICES,
};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

use io::{PartsFile, PolygonFile};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex decomposition of simple polygons")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split a polygon JSON file into convex pieces
    Decompose {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = DEFAULT_MAX_VERTICES)]
        max_vertices: usize,
        #[arg(long, default_value_t = DEFAULT_EPS)]
        eps: f64,
        /// Reorient clockwise input before decomposing
        #[arg(long)]
        ccw: bool,
    },
    /// Write a reproducible random polygon as JSON
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Take the convex hull of the sampled points instead of the star
        #[arg(long)]
        convex: bool,
        #[arg(long)]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Decompose {
            input,
            out,
            max_vertices,
            eps,
            ccw,
        } => decompose(&input, &out, DecompCfg { max_vertices, eps }, ccw),
        Action::Sample {
            seed,
            index,
            vertices,
            convex,
            out,
        } => sample(seed, index, vertices, convex, &out),
    }
}

fn decompose(input: &Path, out: &Path, cfg: DecompCfg, ccw: bool) -> Result<()> {
    tracing::info!(
        version = bayazit::VERSION,
        input = %input.display(),
        out = %out.display(),
        ?cfg,
        ccw,
        "decompose"
    );
    let mut poly = io::read_polygon(input)?;
    if ccw && !poly.is_ccw() {
        tracing::info!("reorienting clockwise input");
        poly.ensure_ccw();
    }
    let parts = Decomposer::new(cfg)?
        .decompose_polygon(&poly)
        .with_context(|| format!("decomposing {}", input.display()))?;

    let doc = PartsFile::new(&poly, &parts);
    tracing::info!(
        pieces = doc.parts.len(),
        input_area = doc.input_area,
        area_defect = doc.area_defect,
        "decomposed"
    );
    io::write_json(out, &doc)
}

fn sample(seed: u64, index: u64, vertices: usize, convex: bool, out: &Path) -> Result<()> {
    tracing::info!(seed, index, vertices, convex, out = %out.display(), "sample");
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(vertices),
        ..RadialCfg::default()
    };
    let token = PolygonReplay { seed, index };
    let poly = if convex {
        draw_convex_radial(cfg, token)
    } else {
        draw_star_radial(cfg, token)
    }
    .with_context(|| format!("no polygon for seed={seed} index={index} vertices={vertices}"))?;

    io::write_json(out, &PolygonFile::from(&poly))
}
