use std::f64::consts::PI;

use foundation::math::{Sphere, Vec3, central_angle};

/// Separations below this (radians) collapse to the coincident case.
const COINCIDENT_ANGLE: f64 = 1e-9;

/// Separations within this of π (radians) use the fixed reference plane.
const ANTIPODAL_MARGIN: f64 = 1e-6;

/// Lift floor, as a fraction of the sphere radius. Even near-coincident
/// endpoints get a visibly curved path.
const MIN_LIFT: f64 = 0.05;

/// Extra lift per half-turn of separation, keeping the peak elevation
/// strictly increasing with separation.
const LIFT_GAIN: f64 = 0.25;

/// Elevated polyline connecting two points on the sphere surface.
///
/// Endpoints are exactly the two input points; interior samples sit at or
/// above the surface. Immutable once built; the generator republishes whole
/// collections instead of mutating paths in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcPath {
    points: Vec<Vec3>,
}

impl ArcPath {
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Builds the elevated arc from `p0` to `p1` as a cubic Bézier sampled at
/// `sample_count` evenly spaced parameters.
///
/// The two interior control points sit at the 1/3 and 2/3 angular fractions
/// along the great circle from `p0` to `p1`, pushed out to `R + lift(θ)`.
/// The lift grows with separation and carries a `sec(θ/3) - 1` clearance
/// term: with `(R + lift)·cos(θ/3) > R` the curve leaves both endpoints
/// moving outward, so no sample dips inside the sphere.
///
/// Degenerate inputs are policy, not errors:
/// - coincident endpoints return `sample_count` copies of `p0`;
/// - antipodal endpoints leave the great-circle plane unconstrained, so it
///   is fixed deterministically from the +Y reference axis (+X when `p0`
///   is nearly polar). Any plane would be geometrically valid; this one is
///   simply repeatable.
pub fn build_arc(p0: Vec3, p1: Vec3, sphere: &Sphere, sample_count: usize) -> ArcPath {
    let theta = central_angle(p0, p1, sphere);
    if theta < COINCIDENT_ANGLE {
        return ArcPath {
            points: vec![p0; sample_count],
        };
    }

    let Some(e1) = (p0 - sphere.center).normalized() else {
        // Degenerate sphere input; nothing sensible to build.
        return ArcPath {
            points: vec![p0; sample_count],
        };
    };
    let d1 = (p1 - sphere.center) * (1.0 / sphere.radius);

    let e2 = if theta > PI - ANTIPODAL_MARGIN {
        reference_perpendicular(e1)
    } else {
        match (d1 - e1 * theta.cos()).normalized() {
            Some(v) => v,
            None => reference_perpendicular(e1),
        }
    };

    let control_radius = sphere.radius + lift_above_surface(sphere.radius, theta);
    let c1 = sphere.center + direction_at(e1, e2, theta / 3.0) * control_radius;
    let c2 = sphere.center + direction_at(e1, e2, 2.0 * theta / 3.0) * control_radius;

    let mut points = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        // Endpoints bypass evaluation so they match the inputs exactly.
        if i == 0 {
            points.push(p0);
        } else if i == sample_count - 1 {
            points.push(p1);
        } else {
            let t = i as f64 / (sample_count - 1) as f64;
            points.push(cubic_bezier(p0, c1, c2, p1, t));
        }
    }
    ArcPath { points }
}

/// Arc peak height above the surface, monotonically increasing in `theta`
/// and floored at `MIN_LIFT·R`.
fn lift_above_surface(radius: f64, theta: f64) -> f64 {
    // (R + h)·cos(θ/3) must stay ≥ R or the curve starts inward at the
    // endpoints; the secant term supplies exactly that clearance.
    let clearance = 1.0 / (theta / 3.0).cos() - 1.0;
    radius * (MIN_LIFT + LIFT_GAIN * theta / PI + clearance)
}

fn direction_at(e1: Vec3, e2: Vec3, angle: f64) -> Vec3 {
    e1 * angle.cos() + e2 * angle.sin()
}

/// Deterministic unit axis perpendicular to `d`: +Y projected off `d`,
/// falling back to +X when `d` is nearly polar.
fn reference_perpendicular(d: Vec3) -> Vec3 {
    let reference = if d.y.abs() < 0.99 {
        Vec3::new(0.0, 1.0, 0.0)
    } else {
        Vec3::new(1.0, 0.0, 0.0)
    };
    let ortho = reference - d * d.dot(reference);
    ortho.normalized().unwrap_or(Vec3::new(0.0, 0.0, 1.0))
}

fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f64) -> Vec3 {
    let u = 1.0 - t;
    p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}
