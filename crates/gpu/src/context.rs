use scene::region::RegionIndex;

/// RGB color, channels in [0, 1].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

/// GUI-adjustable style parameters. Defaults are the demo's startup values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FluxStyle {
    /// Displacement phase advance per rendered frame.
    pub speed: f64,
    pub flux_color: Color,
    pub click_color: Color,
    pub country_color: Color,
    pub border_color: Color,
}

impl Default for FluxStyle {
    fn default() -> Self {
        Self {
            speed: 0.004,
            flux_color: Color::from_rgb_u8(0x12, 0x13, 0x14),
            click_color: Color::from_rgb_u8(0x46, 0x4e, 0xa2),
            country_color: Color::from_rgb_u8(0x24, 0x2e, 0xc5),
            border_color: Color::from_rgb_u8(0x22, 0x37, 0xff),
        }
    }
}

/// Uniform block read by the globe material once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GlobeUniforms {
    /// Normalized clicked region index, or [`NO_CLICK`] when nothing has
    /// been picked yet.
    pub clicked_norm: f64,
    pub click_color: Color,
    pub country_color: Color,
    pub border_color: Color,
}

/// Uniform block read by the flux line material once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FluxUniforms {
    pub color: Color,
    pub displacement: f64,
}

/// Sentinel for "nothing picked": outside the normalized index alphabet, so
/// it can never fall inside a highlight band.
pub const NO_CLICK: f64 = -1.0;

/// Render-loop-visible parameter state.
///
/// UI and input handlers mutate this through setters; the render step reads
/// it once per frame through the uniform snapshots. One context per
/// visualization session, passed by reference into the render step.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    style: FluxStyle,
    displacement: f64,
    clicked: Option<RegionIndex>,
}

impl RenderContext {
    pub fn new(style: FluxStyle) -> Self {
        Self {
            style,
            displacement: 0.0,
            clicked: None,
        }
    }

    pub fn style(&self) -> &FluxStyle {
        &self.style
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.style.speed = speed;
    }

    pub fn set_flux_color(&mut self, color: Color) {
        self.style.flux_color = color;
    }

    pub fn set_click_color(&mut self, color: Color) {
        self.style.click_color = color;
    }

    pub fn set_country_color(&mut self, color: Color) {
        self.style.country_color = color;
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.style.border_color = color;
    }

    pub fn clicked(&self) -> Option<RegionIndex> {
        self.clicked
    }

    pub fn set_clicked(&mut self, index: RegionIndex) {
        self.clicked = Some(index);
    }

    pub fn clear_clicked(&mut self) {
        self.clicked = None;
    }

    /// Steps the flux texture displacement phase. Called once per rendered
    /// frame by the scheduling loop.
    pub fn advance(&mut self) {
        self.displacement += self.style.speed;
    }

    pub fn displacement(&self) -> f64 {
        self.displacement
    }

    pub fn globe_uniforms(&self) -> GlobeUniforms {
        GlobeUniforms {
            clicked_norm: self
                .clicked
                .map(RegionIndex::normalized)
                .unwrap_or(NO_CLICK),
            click_color: self.style.click_color,
            country_color: self.style.country_color,
            border_color: self.style.border_color,
        }
    }

    pub fn flux_uniforms(&self) -> FluxUniforms {
        FluxUniforms {
            color: self.style.flux_color,
            displacement: self.displacement,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(FluxStyle::default())
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, FluxStyle, NO_CLICK, RenderContext};
    use scene::region::{RegionIndex, matches_highlight};

    fn assert_close(a: f64, b: f64, eps: f64) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn advance_accumulates_speed_per_frame() {
        let mut ctx = RenderContext::default();
        for _ in 0..10 {
            ctx.advance();
        }
        assert_close(ctx.displacement(), 0.04, 1e-12);

        ctx.set_speed(0.03);
        ctx.advance();
        assert_close(ctx.displacement(), 0.07, 1e-12);
    }

    #[test]
    fn clicked_index_lands_in_the_globe_uniforms_normalized() {
        let mut ctx = RenderContext::default();
        assert_eq!(ctx.globe_uniforms().clicked_norm, NO_CLICK);

        ctx.set_clicked(RegionIndex(66));
        let uniforms = ctx.globe_uniforms();
        assert_close(uniforms.clicked_norm, 66.0 / 255.0, 1e-12);
        assert!(matches_highlight(
            uniforms.clicked_norm,
            RegionIndex(66).normalized()
        ));
        assert!(!matches_highlight(
            uniforms.clicked_norm,
            RegionIndex(67).normalized()
        ));

        ctx.clear_clicked();
        assert_eq!(ctx.globe_uniforms().clicked_norm, NO_CLICK);
    }

    #[test]
    fn no_click_sentinel_matches_no_region() {
        for index in [0u8, 1, 128, 255] {
            assert!(!matches_highlight(
                NO_CLICK,
                RegionIndex(index).normalized()
            ));
        }
    }

    #[test]
    fn style_setters_feed_the_uniform_snapshots() {
        let mut ctx = RenderContext::new(FluxStyle::default());
        let red = Color::from_rgb_u8(0xff, 0x00, 0x00);
        ctx.set_flux_color(red);
        ctx.set_click_color(red);
        assert_eq!(ctx.flux_uniforms().color, red);
        assert_eq!(ctx.globe_uniforms().click_color, red);
    }
}
