use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use convexkit::api::{
    clip_convex, convex_hull_in_place, is_convex, point_in_polygon, regular_polygon,
    winding_number,
};
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod points;
mod provenance;

use points::{parse_point, parse_points, print_polygon, Pt};

#[derive(Parser)]
#[command(name = "convexkit-cli")]
#[command(about = "Convex hull, containment and convex intersection on point lists")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print the convex hull (counter-clockwise, leftmost vertex first)
    Hull {
        /// Whitespace-separated `x,y` points
        #[arg(long, allow_hyphen_values = true)]
        points: String,
    },
    /// Print `inside` or `outside` for a query point
    Contains {
        #[arg(long, allow_hyphen_values = true)]
        point: String,
        #[arg(long, allow_hyphen_values = true)]
        polygon: String,
    },
    /// Print the intersection of two convex counter-clockwise polygons, or `empty`
    Intersect {
        #[arg(long, allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_hyphen_values = true)]
        b: String,
        /// Reject inputs that are not convex and counter-clockwise
        #[arg(long)]
        check: bool,
    },
    /// Print a regular polygon on the unit circle
    Regular {
        #[arg(long)]
        n: usize,
        /// Angle of the first vertex, radians
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        theta: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { points } => hull(&points),
        Action::Contains { point, polygon } => contains(&point, &polygon),
        Action::Intersect { a, b, check } => intersect(&a, &b, check),
        Action::Regular { n, theta } => regular(n, theta),
        Action::Report => report(),
    }
}

fn hull(points: &str) -> Result<()> {
    let mut pts = parse_points(points)?;
    let input = pts.len();
    let k = convex_hull_in_place(&mut pts);
    tracing::info!(input, hull = k, "hull");
    print_polygon(&pts);
    Ok(())
}

fn contains(point: &str, polygon: &str) -> Result<()> {
    let q = parse_point(point)?;
    let poly = parse_points(polygon)?;
    let inside = point_in_polygon(&q, &poly);
    tracing::info!(
        vertices = poly.len(),
        winding = winding_number(&q, &poly),
        inside,
        "contains"
    );
    println!("{}", if inside { "inside" } else { "outside" });
    Ok(())
}

fn intersect(a: &str, b: &str, check: bool) -> Result<()> {
    let a = parse_points(a)?;
    let b = parse_points(b)?;
    if check {
        for (name, poly) in [("a", &a), ("b", &b)] {
            if !is_convex(poly) {
                bail!("polygon {name} is not convex and counter-clockwise");
            }
        }
    }
    let mut out: Vec<Pt> = Vec::new();
    let outcome = clip_convex(&a, &b, &mut out);
    tracing::info!(?outcome, vertices = out.len(), "intersect");
    if outcome.produced() {
        print_polygon(&out);
    } else {
        println!("empty");
    }
    Ok(())
}

fn regular(n: usize, theta: f64) -> Result<()> {
    if n < 3 {
        bail!("a regular polygon needs n >= 3, got {n}");
    }
    let poly: Vec<Pt> = regular_polygon(n, theta);
    tracing::info!(n, theta, "regular");
    print_polygon(&poly);
    Ok(())
}

fn report() -> Result<()> {
    let report = provenance::Report::collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
