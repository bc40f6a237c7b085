// File: crates/ratings-render-skia/src/lib.rs
// Summary: Skia CPU raster backend; paints a ratings-core Scene and encodes it as PNG.

use anyhow::Result;
use skia_safe as skia;
use tracing::debug;

use ratings_core::scene::{Line, Primitive, Rect, Scene, Stroke, Text};
use ratings_core::theme::Rgba;

pub mod text;

pub use text::TextShaper;

pub struct SkiaRenderer {
    shaper: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self { Self::new() }
}

impl SkiaRenderer {
    pub fn new() -> Self { Self { shaper: TextShaper::new() } }

    /// Paint `scene` onto a fresh raster surface and return the surface.
    fn paint(&self, scene: &Scene) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((scene.width as i32, scene.height as i32))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(color(scene.background));

        for item in &scene.items {
            match item {
                Primitive::Rect(r) => draw_rect(canvas, r),
                Primitive::Line(l) => draw_line(canvas, l),
                Primitive::Text(t) => self.draw_text(canvas, t),
            }
        }
        debug!(items = scene.items.len(), width = scene.width, height = scene.height, "painted scene");
        Ok(surface)
    }

    /// Render to an RGBA8 buffer: (pixels, width, height, row stride in bytes).
    pub fn render_to_rgba8(&self, scene: &Scene) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.paint(scene)?;
        let info = skia::ImageInfo::new(
            (scene.width as i32, scene.height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = scene.width as usize * 4;
        let mut pixels = vec![0u8; stride * scene.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            anyhow::bail!("failed to read back surface pixels");
        }
        Ok((pixels, scene.width, scene.height, stride))
    }

    pub fn render_to_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let mut surface = self.paint(scene)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(scene)?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn draw_text(&self, canvas: &skia::Canvas, t: &Text) {
        let size = t.font_px as f32;
        let dx = (t.dx_em * t.font_px) as f32;
        let dy = (t.dy_em * t.font_px) as f32;
        if t.rotate_deg != 0.0 {
            canvas.save();
            canvas.translate((t.pos.x as f32, t.pos.y as f32));
            canvas.rotate(t.rotate_deg as f32, None);
            self.shaper.draw(canvas, &t.content, dx, dy, size, color(t.color), t.bold, t.anchor);
            canvas.restore();
        } else {
            let o = t.origin();
            self.shaper.draw(canvas, &t.content, o.x as f32, o.y as f32, size, color(t.color), t.bold, t.anchor);
        }
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke_paint(s: &Stroke, opacity: f64) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(s.width as f32);
    paint.set_color(color(s.color));
    paint.set_alpha_f((s.color.a as f32 / 255.0) * opacity.clamp(0.0, 1.0) as f32);
    if let Some([on, off]) = s.dash {
        paint.set_path_effect(skia::PathEffect::dash(&[on as f32, off as f32], 0.0));
    }
    paint
}

fn draw_rect(canvas: &skia::Canvas, r: &Rect) {
    let (top, bottom) = if r.height >= 0.0 { (r.y, r.y + r.height) } else { (r.y + r.height, r.y) };
    let rect = skia::Rect::from_ltrb(r.x as f32, top as f32, (r.x + r.width) as f32, bottom as f32);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(color(r.fill));
    fill.set_alpha_f((r.fill.a as f32 / 255.0) * r.opacity.clamp(0.0, 1.0) as f32);
    canvas.draw_rect(rect, &fill);

    if let Some(s) = &r.stroke {
        canvas.draw_rect(rect, &stroke_paint(s, r.opacity));
    }
}

fn draw_line(canvas: &skia::Canvas, l: &Line) {
    let paint = stroke_paint(&l.stroke, 1.0);
    canvas.draw_line((l.from.x as f32, l.from.y as f32), (l.to.x as f32, l.to.y as f32), &paint);
}
