// File: crates/ratings-core/src/svg.rs
// Summary: SVG backend; serializes a Scene to standalone SVG text with per-bar hover titles.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::scene::{Line, Primitive, Rect, Scene, Stroke, Text, TextAnchor};
use crate::theme::Rgba;

const FONT_FAMILY: &str = "sans-serif";

pub fn to_svg_string(scene: &Scene) -> String {
    let mut out = String::with_capacity(256 + scene.items.len() * 96);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = scene.width,
        h = scene.height
    );
    let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="{}"/>"#, scene.background.to_css());
    for item in &scene.items {
        match item {
            Primitive::Rect(r) => write_rect(&mut out, r, scene),
            Primitive::Line(l) => write_line(&mut out, l),
            Primitive::Text(t) => write_text(&mut out, t),
        }
    }
    out.push_str("</svg>\n");
    out
}

/// Write the SVG next to any missing parent directories.
pub fn write_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let io_err = |source| ChartError::Io { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, to_svg_string(scene)).map_err(io_err)
}

fn write_rect(out: &mut String, r: &Rect, scene: &Scene) {
    // SVG rejects negative heights; flip such rects onto their positive extent.
    let (y, h) = if r.height < 0.0 { (r.y + r.height, -r.height) } else { (r.y, r.height) };
    let _ = write!(
        out,
        r#"  <rect x="{}" y="{}" width="{}" height="{}" fill="{}"{}{}"#,
        num(r.x),
        num(y),
        num(r.width),
        num(h),
        r.fill.to_css(),
        stroke_attrs(r.stroke.as_ref()),
        opacity_attr(r.opacity)
    );
    match r.bar.and_then(|i| scene.tooltips.get(i)) {
        Some(tip) => {
            let _ = writeln!(out, "><title>{}</title></rect>", escape(&tip.to_plain_text()));
        }
        None => out.push_str("/>\n"),
    }
}

fn write_line(out: &mut String, l: &Line) {
    let _ = writeln!(
        out,
        r#"  <line x1="{}" y1="{}" x2="{}" y2="{}"{}/>"#,
        num(l.from.x),
        num(l.from.y),
        num(l.to.x),
        num(l.to.y),
        stroke_attrs(Some(&l.stroke))
    );
}

fn write_text(out: &mut String, t: &Text) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let placement = if t.rotate_deg != 0.0 {
        format!(r#"transform="translate({},{}) rotate({})""#, num(t.pos.x), num(t.pos.y), num(t.rotate_deg))
    } else {
        format!(r#"x="{}" y="{}""#, num(t.pos.x), num(t.pos.y))
    };
    let mut offsets = String::new();
    if t.dx_em != 0.0 { let _ = write!(offsets, r#" dx="{}em""#, num(t.dx_em)); }
    if t.dy_em != 0.0 { let _ = write!(offsets, r#" dy="{}em""#, num(t.dy_em)); }
    let _ = writeln!(
        out,
        r#"  <text {placement}{offsets} text-anchor="{anchor}" font-family="{FONT_FAMILY}" font-size="{}px"{} fill="{}"{}>{}</text>"#,
        num(t.font_px),
        if t.bold { r#" font-weight="bold""# } else { "" },
        color_rgb(t.color),
        alpha_attr("fill-opacity", t.color),
        escape(&t.content)
    );
}

fn stroke_attrs(stroke: Option<&Stroke>) -> String {
    let Some(s) = stroke else { return String::new() };
    let mut a = format!(r#" stroke="{}" stroke-width="{}""#, color_rgb(s.color), num(s.width));
    a.push_str(&alpha_attr("stroke-opacity", s.color));
    if let Some([on, off]) = s.dash {
        let _ = write!(a, r#" stroke-dasharray="{}, {}""#, num(on), num(off));
    }
    a
}

fn opacity_attr(opacity: f64) -> String {
    if opacity >= 1.0 { String::new() } else { format!(r#" opacity="{}""#, num(opacity.max(0.0))) }
}

fn color_rgb(c: Rgba) -> String { Rgba::rgb(c.r, c.g, c.b).to_css() }

fn alpha_attr(name: &str, c: Rgba) -> String {
    if c.a == 255 { String::new() } else { format!(r#" {name}="{}""#, num(c.a as f64 / 255.0)) }
}

/// Up to three decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
