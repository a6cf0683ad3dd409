use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use ombb::api::{
    hull_builder, lonlat_points, ombb, pixel_points, HullBuilder, OmbbCfg, Point,
    SphericalMercator,
};
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{provenance, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls and oriented minimum-area boxes of planar point sets")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the counter-clockwise convex hull
    Hull {
        #[command(flatten)]
        input: Input,
        /// Hull builder: gift-wrap or monotone-chain
        #[arg(long, default_value = "gift-wrap")]
        hull: String,
    },
    /// Print the oriented minimum-area bounding box
    #[command(name = "box")]
    Obb {
        #[command(flatten)]
        input: Input,
        /// Hull builder: gift-wrap or monotone-chain
        #[arg(long, default_value = "gift-wrap")]
        hull: String,
        /// Treat points as lon/lat degrees and solve in spherical Mercator
        #[arg(long)]
        mercator: bool,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct Input {
    /// Built-in point set, prepended to any --point values
    #[arg(long, value_enum)]
    fixture: Option<Fixture>,
    /// A point as `X,Y`; repeatable
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    point: Vec<[f64; 2]>,
    /// Signed-area tolerance for collinearity
    #[arg(long, default_value_t = 1e-5)]
    eps: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fixture {
    Pixel,
    Lonlat,
}

impl Input {
    fn points(&self) -> Result<Vec<Point>> {
        let mut pts = match self.fixture {
            Some(Fixture::Pixel) => pixel_points(),
            Some(Fixture::Lonlat) => lonlat_points(),
            None => Vec::new(),
        };
        pts.extend(self.point.iter().map(|&[x, y]| Point::new(x, y)));
        if pts.is_empty() {
            bail!("no input points (use --fixture or --point X,Y)");
        }
        Ok(pts)
    }
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate {v:?}: {e}"))
    };
    Ok([parse(x)?, parse(y)?])
}

#[derive(Serialize)]
struct HullOut {
    hull: Vec<[f64; 2]>,
    provenance: Provenance,
}

#[derive(Serialize)]
struct BoxOut {
    /// Upper-left, bottom-left, bottom-right, upper-right.
    corners: [[f64; 2]; 4],
    /// Only for planar input; lon/lat corners carry no meaningful area.
    #[serde(skip_serializing_if = "Option::is_none")]
    area: Option<f64>,
    provenance: Provenance,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { input, hull } => run_hull(&input, &hull),
        Action::Obb {
            input,
            hull,
            mercator,
        } => run_box(&input, &hull, mercator),
        Action::Report => report(),
    }
}

fn run_hull(input: &Input, builder: &str) -> Result<()> {
    let pts = input.points()?;
    tracing::info!(points = pts.len(), builder, eps = input.eps, "hull");
    let hull = hull_builder(builder)
        .ok_or_else(|| anyhow!("unknown hull builder {builder:?}"))?
        .build(&pts, input.eps)
        .context("building convex hull")?;
    let out = HullOut {
        hull: hull.iter().map(|p| [p.x, p.y]).collect(),
        provenance: provenance(json!({
            "builder": builder,
            "eps": input.eps,
            "points": pts.len(),
        })),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn run_box(input: &Input, builder: &str, mercator: bool) -> Result<()> {
    let pts = input.points()?;
    tracing::info!(points = pts.len(), builder, eps = input.eps, mercator, "box");
    let hull = hull_builder(builder).ok_or_else(|| anyhow!("unknown hull builder {builder:?}"))?;
    let projection = SphericalMercator::default();
    let mut cfg = OmbbCfg {
        eps_side: input.eps,
        hull,
        ..OmbbCfg::default()
    };
    if mercator {
        cfg.projection = &projection;
    }
    let obb = ombb(&pts, &cfg).context("computing oriented bounding box")?;
    let out = BoxOut {
        corners: obb.corners.map(|c| [c.x, c.y]),
        area: (!mercator).then(|| obb.area()),
        provenance: provenance(json!({
            "builder": builder,
            "eps": input.eps,
            "mercator": mercator,
            "points": pts.len(),
        })),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance(json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
