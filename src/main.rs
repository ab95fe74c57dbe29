use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use geopose::{DistanceModel, GeoPoint, PlacementConfig, PlacementSession};

/// Print the AR placement of a target seen from an observer as JSON
#[derive(Parser, Debug)]
#[command(name = "geopose")]
#[command(about = "Place a geographic target inside a gravity/heading-aligned AR frame")]
struct Args {
    /// Observer position as "lat,lon" in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    observer: GeoPoint,

    /// Target position as "lat,lon"; defaults to the observer
    #[arg(long, allow_hyphen_values = true)]
    target: Option<GeoPoint>,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use the WGS-84 ellipsoidal distance regardless of the config
    #[arg(long)]
    ellipsoidal: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => PlacementConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => PlacementConfig::default(),
    };
    if args.ellipsoidal {
        config.distance_model = DistanceModel::Ellipsoidal;
    }
    debug!(?config, "effective configuration");

    let mut session = PlacementSession::new(config);
    session.update_location(args.observer)?;
    if let Some(target) = args.target {
        session.select_target(target)?;
    }

    let placement = session.place()?;
    println!("{}", placement.to_json(args.pretty)?);
    Ok(())
}
