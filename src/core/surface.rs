/// Compositing modes the animator switches between.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    SourceOver,
    /// Additive: overlapping strokes brighten.
    Lighter,
}

impl Blend {
    /// Name understood by `globalCompositeOperation`.
    pub fn as_str(self) -> &'static str {
        match self {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        }
    }
}

/// The subset of a 2D canvas context the trail animator draws with.
///
/// Implemented over `CanvasRenderingContext2d` in the browser and by recording
/// fakes in host tests.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    /// Reset the backing pixel size. Implementations must not touch anything
    /// but the dimensions.
    fn set_size(&mut self, width: u32, height: u32);

    fn set_blend(&mut self, blend: Blend);
    /// Clear the full `width x height` area.
    fn clear(&mut self);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn stroke(&mut self);
    fn close_path(&mut self);
}

/// `hsla()` stroke color with the hue rounded to a whole degree.
pub fn stroke_color(hue: f64, alpha: f64) -> String {
    format!("hsla({},100%,50%,{})", hue.round() as i64, alpha)
}

/// Backing size for a canvas covering the viewport, minus a horizontal margin.
pub fn viewport_backing_size(inner_width: f64, inner_height: f64, margin: u32) -> (u32, u32) {
    let to_px = |v: f64| if v.is_finite() && v > 0.0 { v as u32 } else { 0 };
    (
        to_px(inner_width).saturating_sub(margin),
        to_px(inner_height),
    )
}
