use flux::ArcPath;
use scene::Globe;

use crate::context::{FluxUniforms, GlobeUniforms, RenderContext};

/// One draw of the published scene. Flux paths are referenced by their
/// position in the published collection; the engine makes no assumption
/// about how the external renderer turns them into pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RenderCommand {
    DrawGlobe {
        radius: f64,
        uniforms: GlobeUniforms,
    },
    DrawFlux {
        path_index: usize,
        sample_count: usize,
        uniforms: FluxUniforms,
    },
}

#[derive(Debug, Default)]
pub struct RenderFrame {
    pub commands: Vec<RenderCommand>,
}

pub struct Renderer;

impl Renderer {
    /// Collects one frame of draw commands: the globe first, then one
    /// polyline per flux path in collection order. Uniform blocks are
    /// snapshotted from the context at collect time, so a frame is
    /// self-contained even if the context mutates afterwards.
    pub fn collect(globe: &Globe, fluxes: &[ArcPath], ctx: &RenderContext) -> RenderFrame {
        let mut frame = RenderFrame::default();
        frame.commands.push(RenderCommand::DrawGlobe {
            radius: globe.sphere.radius,
            uniforms: ctx.globe_uniforms(),
        });

        let flux_uniforms = ctx.flux_uniforms();
        for (path_index, path) in fluxes.iter().enumerate() {
            frame.commands.push(RenderCommand::DrawFlux {
                path_index,
                sample_count: path.len(),
                uniforms: flux_uniforms,
            });
        }
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::{RenderCommand, Renderer};
    use crate::context::RenderContext;
    use flux::build_fluxes;
    use foundation::math::GeoPoint;
    use scene::Globe;
    use scene::region::RegionIndex;

    #[test]
    fn frame_holds_globe_then_one_command_per_flux() {
        let globe = Globe::default();
        let fluxes = build_fluxes(
            GeoPoint::new(47.21176, -1.573),
            &[GeoPoint::new(48.8566, 2.3522), GeoPoint::new(52.52, 13.405)],
            &globe.sphere,
            50,
        );
        let ctx = RenderContext::default();

        let frame = Renderer::collect(&globe, &fluxes, &ctx);
        assert_eq!(frame.commands.len(), 3);
        assert!(matches!(
            frame.commands[0],
            RenderCommand::DrawGlobe { radius, .. } if radius == globe.sphere.radius
        ));
        assert!(matches!(
            frame.commands[1],
            RenderCommand::DrawFlux {
                path_index: 0,
                sample_count: 50,
                ..
            }
        ));
        assert!(matches!(
            frame.commands[2],
            RenderCommand::DrawFlux { path_index: 1, .. }
        ));
    }

    #[test]
    fn frame_snapshots_the_context() {
        let globe = Globe::default();
        let mut ctx = RenderContext::default();
        ctx.set_clicked(RegionIndex(66));
        ctx.advance();

        let frame = Renderer::collect(&globe, &[], &ctx);

        // Mutating the context after collect must not bleed into the frame.
        ctx.set_clicked(RegionIndex(1));
        ctx.advance();

        let RenderCommand::DrawGlobe { uniforms, .. } = frame.commands[0] else {
            panic!("first command must be the globe");
        };
        assert_eq!(uniforms.clicked_norm, 66.0 / 255.0);
    }

    #[test]
    fn empty_flux_collection_still_draws_the_globe() {
        let globe = Globe::default();
        let frame = Renderer::collect(&globe, &[], &RenderContext::default());
        assert_eq!(frame.commands.len(), 1);
    }
}
