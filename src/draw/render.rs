//! Cairo-based stroke rasterization.

use super::color::{BLACK, Color};
use super::stroke::{Point, Stroke};
use log::warn;

/// Settings that shape how a stroke list is turned into pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Fill painted after clearing; `None` leaves the surface transparent
    pub background: Option<Color>,
    /// Whether a click without drag paints a dot of the stroke width
    pub single_point_dots: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            background: None,
            single_point_dots: true,
        }
    }
}

/// Clears the whole surface and replays every stroke in order.
///
/// The result depends only on `strokes` and `options`, so calling this twice
/// with the same input leaves the same pixels behind. Strokes whose color does
/// not parse are drawn with the last valid color of this pass (black before
/// any valid color is seen).
///
/// # Arguments
/// * `ctx` - Cairo drawing context covering the raster surface
/// * `strokes` - Committed strokes, first = bottom layer
/// * `options` - Background and single-point handling
pub fn render_strokes(ctx: &cairo::Context, strokes: &[Stroke], options: &RenderOptions) {
    clear_surface(ctx, options.background);

    let mut current = BLACK;
    for stroke in strokes {
        match Color::from_css(&stroke.color) {
            Some(color) => current = color,
            None => warn!(
                "Unparseable stroke color '{}', keeping previous color",
                stroke.color
            ),
        }
        render_freehand(ctx, &stroke.points, current, stroke.width, options.single_point_dots);
    }
}

/// Wipes every pixel, then paints the background color if one is set.
pub fn clear_surface(ctx: &cairo::Context, background: Option<Color>) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();

    if let Some(bg) = background {
        let _ = ctx.save();
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
        let _ = ctx.paint();
        let _ = ctx.restore();
    }
}

/// Render freehand stroke (polyline through points)
///
/// A single point becomes a zero-length segment, which Cairo paints as a round
/// dot of diameter `width` when `dot` is set and skips entirely otherwise.
pub fn render_freehand(ctx: &cairo::Context, points: &[Point], color: Color, width: f64, dot: bool) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    if rest.is_empty() && !dot {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(width);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(first.x, first.y);
    if rest.is_empty() {
        ctx.line_to(first.x, first.y);
    }
    for point in rest {
        ctx.line_to(point.x, point.y);
    }

    let _ = ctx.stroke();
}
