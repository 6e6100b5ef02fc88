use std::fs;
use std::path::{Path, PathBuf};

use scene::region::EncodedSurface;

use crate::destinations::{DestinationRecord, DestinationsError, destinations_from_json_str};
use crate::region_codes::{RegionCodeTable, RegionCodesError};
use crate::surface_pgm::{SurfacePgmError, surface_from_pgm_bytes};

pub const DESTINATIONS_FILE: &str = "destinations.json";
pub const SURFACE_FILE: &str = "indexed_surface.pgm";
pub const REGION_CODES_FILE: &str = "region_codes.json";

/// Everything the viewer must have in hand before the first flux rebuild.
/// Loading is sequenced by the caller; the geometry core itself assumes
/// ready data.
#[derive(Debug)]
pub struct VisualizationAssets {
    pub destinations: Vec<DestinationRecord>,
    pub surface: EncodedSurface,
    pub region_codes: RegionCodeTable,
}

#[derive(Debug)]
pub enum AssetLoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Destinations(DestinationsError),
    Surface(SurfacePgmError),
    RegionCodes(RegionCodesError),
}

impl std::fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetLoadError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            AssetLoadError::Destinations(e) => write!(f, "destinations asset: {e}"),
            AssetLoadError::Surface(e) => write!(f, "index surface asset: {e}"),
            AssetLoadError::RegionCodes(e) => write!(f, "region codes asset: {e}"),
        }
    }
}

impl std::error::Error for AssetLoadError {}

pub fn load_assets_dir(root: impl AsRef<Path>) -> Result<VisualizationAssets, AssetLoadError> {
    let root = root.as_ref();

    let destinations_path = root.join(DESTINATIONS_FILE);
    let payload = read_text(&destinations_path)?;
    let destinations =
        destinations_from_json_str(&payload).map_err(AssetLoadError::Destinations)?;

    let surface_path = root.join(SURFACE_FILE);
    let bytes = fs::read(&surface_path).map_err(|e| AssetLoadError::Io {
        path: surface_path.clone(),
        source: e,
    })?;
    let surface = surface_from_pgm_bytes(&bytes).map_err(AssetLoadError::Surface)?;

    let codes_path = root.join(REGION_CODES_FILE);
    let payload = read_text(&codes_path)?;
    let region_codes =
        RegionCodeTable::from_json_str(&payload).map_err(AssetLoadError::RegionCodes)?;

    Ok(VisualizationAssets {
        destinations,
        surface,
        region_codes,
    })
}

fn read_text(path: &Path) -> Result<String, AssetLoadError> {
    fs::read_to_string(path).map_err(|e| AssetLoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
