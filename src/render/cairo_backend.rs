use cairo::{Context, Format, ImageSurface, LineCap, LineJoin, Operator};
use pango::FontDescription;
use std::f64::consts::PI;

use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, LayerPrimitives, LineStrokeStyle, RenderFrame, Renderer, TextHAlign, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub paths_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Cairo + Pango + PangoCairo offscreen canvas.
///
/// The image surface plays the role of the canvas pixel buffer; the client
/// size is the logical layout size the chart is laid out against.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    client_width: f64,
    client_height: f64,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(client_width: f64, client_height: f64) -> ChartResult<Self> {
        if !client_width.is_finite()
            || !client_height.is_finite()
            || client_width <= 0.0
            || client_height <= 0.0
        {
            return Err(ChartError::InvalidArgument(
                "cairo canvas client size must be finite and > 0".to_owned(),
            ));
        }

        let surface = create_surface(client_width.ceil() as u32, client_height.ceil() as u32)?;
        Ok(Self {
            surface,
            client_width,
            client_height,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_client_size(&mut self, width: f64, height: f64) {
        self.client_width = width;
        self.client_height = height;
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let metrics = frame.metrics;
        context.identity_matrix();
        context.scale(metrics.device_pixel_ratio, metrics.device_pixel_ratio);
        context.set_operator(Operator::Clear);
        context.rectangle(0.0, 0.0, metrics.css_width, metrics.css_height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;
        context.set_operator(Operator::Over);

        let mut stats = CairoRenderStats::default();
        for layer in &frame.layers {
            paint_layer(context, layer, &mut stats)?;
        }

        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn client_size(&self) -> (f64, f64) {
        (self.client_width, self.client_height)
    }

    fn buffer_size(&self) -> (u32, u32) {
        (
            u32::try_from(self.surface.width()).unwrap_or(0),
            u32::try_from(self.surface.height()).unwrap_or(0),
        )
    }

    fn resize_buffer(&mut self, width: u32, height: u32) -> ChartResult<()> {
        self.surface = create_surface(width, height)?;
        Ok(())
    }

    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        self.render_with_context(&context, frame)
    }
}

fn create_surface(width: u32, height: u32) -> ChartResult<ImageSurface> {
    let width = i32::try_from(width.max(1))
        .map_err(|_| ChartError::InvalidArgument("cairo surface width overflows i32".to_owned()))?;
    let height = i32::try_from(height.max(1)).map_err(|_| {
        ChartError::InvalidArgument("cairo surface height overflows i32".to_owned())
    })?;
    ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|err| map_backend_error("failed to create cairo surface", err))
}

fn paint_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &layer.rects {
        apply_color(context, rect.fill_color);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        match line.stroke_style {
            LineStrokeStyle::Solid => context.set_dash(&[], 0.0),
            LineStrokeStyle::Dashed { on_px, off_px } => context.set_dash(&[on_px, off_px], 0.0),
        }
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }
    context.set_dash(&[], 0.0);

    for path in &layer.paths {
        apply_color(context, path.color);
        context.set_line_width(path.stroke_width);
        context.set_line_join(LineJoin::Round);
        context.set_line_cap(LineCap::Round);
        context.new_path();
        for sub_path in &path.sub_paths {
            let mut vertices = sub_path.iter();
            if let Some(&(x, y)) = vertices.next() {
                context.move_to(x, y);
            }
            for &(x, y) in vertices {
                context.line_to(x, y);
            }
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke series path", err))?;
        stats.paths_drawn += 1;
    }
    context.set_line_cap(LineCap::Butt);
    context.set_line_join(LineJoin::Miter);

    for circle in &layer.circles {
        apply_color(context, circle.fill_color);
        context.new_path();
        context.arc(circle.x, circle.y, circle.radius, 0.0, 2.0 * PI);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill marker", err))?;
        stats.circles_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, text_height) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };
        let y = match text.v_align {
            TextVAlign::Top => text.y,
            TextVAlign::Middle => text.y - f64::from(text_height) / 2.0,
        };

        apply_color(context, text.color);
        context.move_to(x, y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }

    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
