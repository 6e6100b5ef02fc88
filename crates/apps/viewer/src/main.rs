use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use flux::build_fluxes;
use formats::{AssetLoadError, load_assets_dir};
use foundation::math::{GeoPoint, geo_to_sphere};
use gpu::{RenderContext, Renderer};
use scene::Globe;
use scene::picking::{Ray, pick_sphere};
use scene::region::resolve_code;

/// Globe flux viewer: builds the arc set from the destination assets and
/// simulates the render loop and a pick without opening a window.
#[derive(Debug, Parser)]
#[command(name = "viewer")]
struct Args {
    /// Directory holding destinations.json, indexed_surface.pgm and
    /// region_codes.json.
    #[arg(long, default_value = "crates/apps/viewer/assets")]
    assets: PathBuf,

    /// Flux origin latitude, degrees.
    #[arg(long, default_value_t = 47.21176)]
    home_lat: f64,

    /// Flux origin longitude, degrees.
    #[arg(long, default_value_t = -1.573)]
    home_lon: f64,

    /// Samples per arc.
    #[arg(long, default_value_t = 50)]
    samples: usize,

    /// Frames of displacement animation to simulate.
    #[arg(long, default_value_t = 120)]
    frames: u64,

    /// Latitude of a simulated pick, degrees.
    #[arg(long)]
    pick_lat: Option<f64>,

    /// Longitude of a simulated pick, degrees.
    #[arg(long)]
    pick_lon: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AssetLoadError> {
    let assets = load_assets_dir(&args.assets)?;
    info!(
        "loaded {} destinations, {}x{} index surface, {} region codes",
        assets.destinations.len(),
        assets.surface.width(),
        assets.surface.height(),
        assets.region_codes.len()
    );

    let globe = Globe::default();
    let home = GeoPoint::new(args.home_lat, args.home_lon);
    let destinations: Vec<GeoPoint> = assets.destinations.iter().map(|d| d.geo()).collect();

    let fluxes = build_fluxes(home, &destinations, &globe.sphere, args.samples);
    info!("built {} flux arcs at {} samples each", fluxes.len(), args.samples);

    let mut ctx = RenderContext::default();

    match (args.pick_lat, args.pick_lon) {
        (Some(lat), Some(lon)) => {
            simulate_pick(GeoPoint::new(lat, lon), &globe, &assets, &mut ctx);
        }
        (None, None) => {}
        _ => warn!("--pick-lat and --pick-lon must be given together; pick skipped"),
    }

    for _ in 0..args.frames {
        ctx.advance();
    }
    let frame = Renderer::collect(&globe, &fluxes, &ctx);
    info!(
        "collected {} draw commands after {} frames (displacement {:.3})",
        frame.commands.len(),
        args.frames,
        ctx.displacement()
    );
    Ok(())
}

/// Stands in for the input collaborator: the camera sits outside the sphere
/// on the radial through the picked point, aiming at the globe center.
fn simulate_pick(
    geo: GeoPoint,
    globe: &Globe,
    assets: &formats::VisualizationAssets,
    ctx: &mut RenderContext,
) {
    let target = geo_to_sphere(geo, &globe.sphere);
    let origin = globe.sphere.center + (target - globe.sphere.center) * 3.75;
    let ray = Ray::new(origin, globe.sphere.center - origin);

    match pick_sphere(ray, &globe.sphere) {
        Some(hit) => {
            let (index, code) = resolve_code(hit.uv, &assets.surface, &assets.region_codes);
            ctx.set_clicked(index);
            match code {
                Some(code) => info!(
                    "pick at ({:.4}, {:.4}) resolved to region {} ({code})",
                    geo.lat_deg, geo.lon_deg, index.0
                ),
                None => info!(
                    "pick at ({:.4}, {:.4}) resolved to unregistered region {}",
                    geo.lat_deg, geo.lon_deg, index.0
                ),
            }
        }
        None => info!("pick ray missed the globe"),
    }
}
