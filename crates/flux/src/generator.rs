use foundation::math::{GeoPoint, Sphere, geo_to_sphere};

use crate::arc::{ArcPath, build_arc};

/// Builds one elevated arc per destination, in input order.
///
/// The origin is transformed once and shared by every arc. An empty
/// destination set yields an empty collection. The operation is stateless:
/// when the destination set changes, callers rebuild the whole batch and
/// publish it by replacement, never by editing paths in place.
pub fn build_fluxes(
    origin: GeoPoint,
    destinations: &[GeoPoint],
    sphere: &Sphere,
    sample_count: usize,
) -> Vec<ArcPath> {
    let start = geo_to_sphere(origin, sphere);
    destinations
        .iter()
        .map(|dest| build_arc(start, geo_to_sphere(*dest, sphere), sphere, sample_count))
        .collect()
}
