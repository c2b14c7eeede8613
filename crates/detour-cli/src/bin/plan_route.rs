//! CLI tool to compute hazard-avoiding candidate routes via OSRM.
//!
//! Prints the aggregated route list as JSON; unsafe routes are kept
//! unless `--safe-only` is passed.

use anyhow::{anyhow, Result};
use clap::Parser;
use detour_core::{GeoPoint, HazardZone};
use detour_osrm::{OsrmClient, RoutePlanner, DEFAULT_OSRM_URL};

/// Compute candidate routes between two points, avoiding hazard zones
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Start point as "lat,lng"
    #[arg(long, value_parser = parse_point)]
    from: GeoPoint,

    /// End point as "lat,lng"
    #[arg(long, value_parser = parse_point)]
    to: GeoPoint,

    /// Hazard zone as "lat,lng,radius_m" (repeatable)
    #[arg(long = "hazard", value_parser = parse_hazard)]
    hazards: Vec<HazardZone>,

    /// OSRM route service base URL
    #[arg(long, default_value = DEFAULT_OSRM_URL)]
    osrm_url: String,

    /// Only print routes that clear every hazard buffer
    #[arg(long)]
    safe_only: bool,
}

fn parse_point(value: &str) -> Result<GeoPoint, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 2 {
        return Err(format!("expected \"lat,lng\", got \"{value}\""));
    }
    let lat: f64 = parts[0].trim().parse().map_err(|_| "invalid latitude")?;
    let lng: f64 = parts[1].trim().parse().map_err(|_| "invalid longitude")?;
    Ok(GeoPoint::new(lat, lng))
}

fn parse_hazard(value: &str) -> Result<HazardZone, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("expected \"lat,lng,radius_m\", got \"{value}\""));
    }
    let lat: f64 = parts[0].trim().parse().map_err(|_| "invalid latitude")?;
    let lng: f64 = parts[1].trim().parse().map_err(|_| "invalid longitude")?;
    let radius_m: f64 = parts[2].trim().parse().map_err(|_| "invalid radius")?;
    if radius_m < 0.0 {
        return Err("radius must be non-negative".to_string());
    }
    Ok(HazardZone {
        id: String::new(),
        center: GeoPoint::new(lat, lng),
        radius_m,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    if !args.from.lat.is_finite()
        || !args.from.lng.is_finite()
        || !args.to.lat.is_finite()
        || !args.to.lng.is_finite()
    {
        return Err(anyhow!("start and end coordinates must be finite"));
    }

    let hazards: Vec<HazardZone> = args
        .hazards
        .into_iter()
        .enumerate()
        .map(|(idx, hazard)| HazardZone {
            id: format!("hazard-{idx}"),
            ..hazard
        })
        .collect();

    let planner = RoutePlanner::new(OsrmClient::new(args.osrm_url));
    let mut routes = planner
        .compute_candidate_routes(args.from, args.to, &hazards)
        .await;

    if args.safe_only {
        routes.retain(|route| route.is_safe);
    }

    if routes.is_empty() {
        eprintln!("No routes found");
    }
    println!("{}", serde_json::to_string_pretty(&routes)?);

    Ok(())
}
