use super::{Vec2, Vec3};

/// Geographic coordinates in degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl GeoPoint {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// The session globe: a perfect sphere, centered at the origin unless stated
/// otherwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self {
            center: Vec3::new(0.0, 0.0, 0.0),
            radius,
        }
    }

    pub fn with_center(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }
}

/// Geographic to Cartesian, Y as the polar axis:
///
/// `x = R·cos(lat)·cos(lon)`, `y = R·sin(lat)`, `z = R·cos(lat)·sin(lon)`.
///
/// The equirectangular unwrap in [`surface_uv`] assumes this orientation;
/// the two must change together.
pub fn geo_to_sphere(geo: GeoPoint, sphere: &Sphere) -> Vec3 {
    let lat = geo.lat_deg.to_radians();
    let lon = geo.lon_deg.to_radians();

    let dir = Vec3::new(
        lat.cos() * lon.cos(),
        lat.sin(),
        lat.cos() * lon.sin(),
    );
    sphere.center + dir * sphere.radius
}

/// Inverse of [`geo_to_sphere`] for points on (or above) the sphere surface.
///
/// Longitude is reported as 0 at the poles, where it is undefined.
pub fn sphere_to_geo(point: Vec3, sphere: &Sphere) -> GeoPoint {
    let offset = point - sphere.center;
    let r = offset.length();
    let lat = (offset.y / r).asin();
    let lon = offset.z.atan2(offset.x);
    GeoPoint::new(lat.to_degrees(), lon.to_degrees())
}

/// Normalized surface coordinate of a geographic point.
///
/// `u = (lon + 180°)/360°` wrapped into `[0, 1)`; `v = (90° - lat)/180°`
/// with row 0 at the north pole. This is the layout contract of the encoded
/// index surface asset and must not change independently of it.
pub fn surface_uv(geo: GeoPoint) -> Vec2 {
    let u = ((geo.lon_deg + 180.0) / 360.0).rem_euclid(1.0);
    let v = (90.0 - geo.lat_deg) / 180.0;
    Vec2::new(u, v)
}

/// Angle subtended at the sphere center by two surface points, in radians.
pub fn central_angle(a: Vec3, b: Vec3, sphere: &Sphere) -> f64 {
    let r2 = sphere.radius * sphere.radius;
    let cos = ((a - sphere.center).dot(b - sphere.center) / r2).clamp(-1.0, 1.0);
    cos.acos()
}
