use foundation::math::Sphere;

/// Radius of the demo globe in scene units.
pub const GLOBE_RADIUS: f64 = 400.0;

/// The visualization globe: owner of the one sphere every core component
/// references for the session.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Globe {
    pub sphere: Sphere,
}

impl Globe {
    pub fn new(radius: f64) -> Self {
        Self {
            sphere: Sphere::new(radius),
        }
    }
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(GLOBE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::{GLOBE_RADIUS, Globe};

    #[test]
    fn default_globe_uses_demo_radius() {
        let globe = Globe::default();
        assert_eq!(globe.sphere.radius, GLOBE_RADIUS);
        assert_eq!(globe.sphere.center.length(), 0.0);
    }
}
