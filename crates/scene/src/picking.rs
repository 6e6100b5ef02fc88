use foundation::math::{Sphere, Vec2, Vec3, sphere_to_geo, surface_uv};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceHit {
    /// First intersection of the ray with the sphere surface.
    pub point: Vec3,
    /// Distance from the ray origin along the normalized direction.
    pub distance: f64,
    /// Normalized surface coordinate of the hit, in the same unwrap as the
    /// forward geographic transform.
    pub uv: Vec2,
}

/// Analytic ray–sphere pick.
///
/// Contract:
/// - Most rays miss; `None` is the normal outcome, never an error.
/// - The nearest non-negative root wins. A sphere entirely behind the ray
///   origin is a miss; an origin inside the sphere hits the far surface.
/// - A zero-length direction cannot pick anything.
pub fn pick_sphere(ray: Ray, sphere: &Sphere) -> Option<SurfaceHit> {
    let dir = ray.dir.normalized()?;

    let oc = ray.origin - sphere.center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }

    let sqrt_disc = disc.sqrt();
    let mut t = -b - sqrt_disc;
    if t < 0.0 {
        t = -b + sqrt_disc;
    }
    if t < 0.0 {
        return None;
    }

    let point = ray.origin + dir * t;
    let uv = surface_uv(sphere_to_geo(point, sphere));
    Some(SurfaceHit {
        point,
        distance: t,
        uv,
    })
}

#[cfg(test)]
mod tests {
    use super::{Ray, pick_sphere};
    use foundation::math::{GeoPoint, Sphere, Vec3, geo_to_sphere, surface_uv};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn ray_at_center_hits_near_surface() {
        let sphere = Sphere::new(400.0);
        let ray = Ray::new(Vec3::new(1500.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        let hit = pick_sphere(ray, &sphere).expect("hit");
        assert_close(hit.distance, 1100.0, 1e-9);
        assert_close(hit.point.x, 400.0, 1e-9);
        assert_close((hit.point - sphere.center).length(), 400.0, 1e-9);
    }

    #[test]
    fn ray_aimed_away_misses() {
        let sphere = Sphere::new(400.0);
        let ray = Ray::new(Vec3::new(1500.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(pick_sphere(ray, &sphere), None);
    }

    #[test]
    fn tangent_adjacent_ray_misses() {
        let sphere = Sphere::new(400.0);
        // Perpendicular distance from center is 400.1 > R.
        let ray = Ray::new(Vec3::new(1500.0, 400.1, 0.0), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(pick_sphere(ray, &sphere), None);
    }

    #[test]
    fn origin_inside_hits_far_surface() {
        let sphere = Sphere::new(400.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let hit = pick_sphere(ray, &sphere).expect("hit");
        assert_close(hit.distance, 400.0, 1e-9);
        assert_close(hit.point.y, 400.0, 1e-9);
    }

    #[test]
    fn zero_direction_picks_nothing() {
        let sphere = Sphere::new(400.0);
        let ray = Ray::new(Vec3::new(1500.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(pick_sphere(ray, &sphere), None);
    }

    #[test]
    fn hit_uv_matches_forward_unwrap() {
        let sphere = Sphere::new(400.0);
        let geo = GeoPoint::new(47.21176, -1.573);
        let target = geo_to_sphere(geo, &sphere);

        // Camera outside the sphere on the radial through the target.
        let origin = sphere.center + (target - sphere.center) * 3.0;
        let ray = Ray::new(origin, target - origin);
        let hit = pick_sphere(ray, &sphere).expect("hit");

        let expected = surface_uv(geo);
        assert_close(hit.uv.x, expected.x, 1e-9);
        assert_close(hit.uv.y, expected.y, 1e-9);
    }
}
