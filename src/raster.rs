//! Rasterization: compositing the background, text layers and watermark
//! into the final bitmap.
//!
//! One shared draw path serves both the interactive-editor contract
//! (absolute font sizes, per-layer styles) and the generated/preview
//! contract (derived font sizes, fixed classic style). Draw order is
//! fixed: black canvas fill, background image, text layers in
//! declaration order, watermark last.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::error::MemeError;
use crate::fonts::TextPainter;
use crate::layout::{self, ExportSize, ResolvedGeometry, ResolvedLayer};
use crate::style::{HAlign, LayerStyle, Rgb, Watermark, LINE_HEIGHT};
use crate::template::TemplateDescriptor;
use crate::wrap;

/// Watermark font size as a fraction of canvas width.
const WATERMARK_SCALE: f32 = 0.025;

/// Watermark font size floor, pixels.
const WATERMARK_MIN_PX: f32 = 14.0;

/// Composite `template`'s text layers over `background` at the given
/// export size.
///
/// `styles[i]` applies to layer *i*; layers without a style use the
/// classic meme default. The output bitmap is fully opaque and sized to
/// the preset's canvas (or the source dimensions for
/// [`ExportSize::Original`]). Text that overflows the canvas vertically
/// is drawn, not clipped.
pub fn compose(
    background: &RgbaImage,
    template: &TemplateDescriptor,
    styles: &[LayerStyle],
    size: ExportSize,
    watermark: Option<&Watermark>,
    painter: &dyn TextPainter,
) -> Result<RgbaImage, MemeError> {
    let (src_w, src_h) = background.dimensions();
    let geometry = layout::resolve(template, size, src_w, src_h)?;

    // Canvas starts opaque black so any residual area outside the drawn
    // rectangle is never transparent.
    let mut canvas = RgbaImage::from_pixel(
        geometry.canvas_w,
        geometry.canvas_h,
        Rgba([0, 0, 0, 255]),
    );

    draw_background(&mut canvas, background, &geometry);

    let default_style = LayerStyle::default();
    for (i, spec) in template.layers.iter().enumerate() {
        let style = styles.get(i).unwrap_or(&default_style);
        let resolved = &geometry.layers[i];
        draw_layer(&mut canvas, &geometry, resolved, &spec.text, style, painter);
    }

    if let Some(wm) = watermark {
        draw_watermark(&mut canvas, wm, painter);
    }

    Ok(canvas)
}

/// Scale the background to the resolved draw rectangle and overlay it.
/// Negative offsets crop; `overlay` clips for us.
fn draw_background(canvas: &mut RgbaImage, background: &RgbaImage, geometry: &ResolvedGeometry) {
    let draw_w = geometry.draw_w.round().max(1.0) as u32;
    let draw_h = geometry.draw_h.round().max(1.0) as u32;

    if (draw_w, draw_h) == background.dimensions() {
        imageops::overlay(
            canvas,
            background,
            geometry.draw_x.round() as i64,
            geometry.draw_y.round() as i64,
        );
        return;
    }

    let resized = imageops::resize(background, draw_w, draw_h, FilterType::Triangle);
    imageops::overlay(
        canvas,
        &resized,
        geometry.draw_x.round() as i64,
        geometry.draw_y.round() as i64,
    );
}

/// Draw one text layer: wrap, then shadow, stroke and fill passes.
fn draw_layer(
    canvas: &mut RgbaImage,
    geometry: &ResolvedGeometry,
    resolved: &ResolvedLayer,
    text: &str,
    style: &LayerStyle,
    painter: &dyn TextPainter,
) {
    let font_px = style.font_size.resolve(geometry.canvas_w);
    let lines = wrap::wrap(text, resolved.width, |s| painter.measure(s, font_px));

    if style.rotation != 0.0 {
        // Rotation pivots around the layer's own bounding-box center.
        // Draw onto a transparent scratch canvas, rotate it, composite.
        let mut scratch =
            RgbaImage::from_pixel(canvas.width(), canvas.height(), Rgba([0, 0, 0, 0]));
        draw_lines(&mut scratch, resolved, &lines, font_px, style, painter);
        let center_x = resolved.x + resolved.width / 2.0;
        let center_y = resolved.y + font_px / 2.0;
        let rotated = rotate_about(&scratch, center_x, center_y, style.rotation);
        imageops::overlay(canvas, &rotated, 0, 0);
    } else {
        draw_lines(canvas, resolved, &lines, font_px, style, painter);
    }
}

fn draw_lines(
    canvas: &mut RgbaImage,
    resolved: &ResolvedLayer,
    lines: &[String],
    font_px: f32,
    style: &LayerStyle,
    painter: &dyn TextPainter,
) {
    if let Some(shadow) = style.shadow {
        if shadow.blur > 0.0 {
            let mut scratch =
                RgbaImage::from_pixel(canvas.width(), canvas.height(), Rgba([0, 0, 0, 0]));
            for (i, line) in lines.iter().enumerate() {
                let line_y = resolved.y + i as f32 * font_px * LINE_HEIGHT;
                draw_line(
                    &mut scratch,
                    resolved,
                    line,
                    line_y,
                    font_px,
                    0.0,
                    shadow.color,
                    style.align,
                    painter,
                );
            }
            let blurred = imageops::blur(&scratch, shadow.blur);
            imageops::overlay(canvas, &blurred, 0, 0);
        }
    }

    let stroke_width = font_px * style.stroke_ratio;
    for (i, line) in lines.iter().enumerate() {
        let line_y = resolved.y + i as f32 * font_px * LINE_HEIGHT;
        if stroke_width > 0.0 {
            // Stroke first so it never occludes the fill.
            draw_line(
                canvas,
                resolved,
                line,
                line_y,
                font_px,
                stroke_width,
                style.stroke,
                style.align,
                painter,
            );
        }
        draw_line(
            canvas,
            resolved,
            line,
            line_y,
            font_px,
            0.0,
            style.fill,
            style.align,
            painter,
        );
    }
}

/// Draw one wrapped line. `stroke_width > 0` stamps the text around a
/// ring of offsets, approximating a centered stroke of that width;
/// `stroke_width == 0` is a plain fill pass.
#[allow(clippy::too_many_arguments)]
fn draw_line(
    canvas: &mut RgbaImage,
    resolved: &ResolvedLayer,
    line: &str,
    line_y: f32,
    font_px: f32,
    stroke_width: f32,
    color: Rgb,
    align: HAlign,
    painter: &dyn TextPainter,
) {
    if line.is_empty() {
        return;
    }

    let natural = painter.measure(line, font_px);
    // Squeeze an overwide line into its box, like canvas fillText's
    // maxWidth argument. Happens only for single unsplittable words.
    let x_scale = if natural > resolved.width && natural > 0.0 {
        resolved.width / natural
    } else {
        1.0
    };
    let drawn_width = natural * x_scale;

    let left = match align {
        HAlign::Left => resolved.x,
        HAlign::Center => resolved.x + (resolved.width - drawn_width) / 2.0,
        HAlign::Right => resolved.x + resolved.width - drawn_width,
    };

    if stroke_width > 0.0 {
        let radius = stroke_width / 2.0;
        for &(steps, r) in &[(16u32, radius), (8u32, radius * 0.5)] {
            for step in 0..steps {
                let angle = step as f32 * std::f32::consts::TAU / steps as f32;
                painter.draw(
                    canvas,
                    line,
                    left + r * angle.cos(),
                    line_y + r * angle.sin(),
                    font_px,
                    x_scale,
                    color,
                );
            }
        }
    } else {
        painter.draw(canvas, line, left, line_y, font_px, x_scale, color);
    }
}

/// Draw the corner watermark: a semi-transparent dark rounded box in the
/// bottom-right, then the watermark text right/bottom anchored. Always
/// the last thing drawn; never rotated or styled per layer.
fn draw_watermark(canvas: &mut RgbaImage, watermark: &Watermark, painter: &dyn TextPainter) {
    let canvas_w = canvas.width() as f32;
    let canvas_h = canvas.height() as f32;

    let font_px = (canvas_w * WATERMARK_SCALE).max(WATERMARK_MIN_PX);
    let text_width = painter.measure(&watermark.text, font_px);
    let box_w = text_width + 16.0;
    let box_h = font_px + 8.0;

    fill_rounded_rect(
        canvas,
        canvas_w - box_w - 8.0,
        canvas_h - box_h - 8.0,
        box_w,
        box_h,
        4.0,
        Rgb(0, 0, 0),
        0.5,
    );

    painter.draw(
        canvas,
        &watermark.text,
        canvas_w - 16.0 - text_width,
        canvas_h - 12.0 - font_px,
        font_px,
        1.0,
        Rgb(255, 255, 255),
    );
}

/// Alpha-blend a rounded rectangle over the canvas.
fn fill_rounded_rect(
    canvas: &mut RgbaImage,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    radius: f32,
    color: Rgb,
    alpha: f32,
) {
    let (canvas_w, canvas_h) = canvas.dimensions();
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + w).ceil() as u32).min(canvas_w);
    let y1 = ((y + h).ceil() as u32).min(canvas_h);
    let Rgb(r, g, b) = color;

    for py in y0..y1 {
        for px in x0..x1 {
            let fx = px as f32 + 0.5;
            let fy = py as f32 + 0.5;
            // Distance to the nearest corner circle center; pixels beyond
            // the radius in a corner region are outside the rounded box.
            let cx = fx.clamp(x + radius, x + w - radius);
            let cy = fy.clamp(y + radius, y + h - radius);
            let dx = fx - cx;
            let dy = fy - cy;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let dst = canvas.get_pixel_mut(px, py);
            let mix = |src: u8, d: u8| -> u8 {
                (src as f32 * alpha + d as f32 * (1.0 - alpha)).round() as u8
            };
            *dst = Rgba([mix(r, dst[0]), mix(g, dst[1]), mix(b, dst[2]), 255]);
        }
    }
}

/// Rotate `src` by `degrees` around `(cx, cy)`, bilinear-sampled into a
/// same-sized transparent canvas.
fn rotate_about(src: &RgbaImage, cx: f32, cy: f32, degrees: f32) -> RgbaImage {
    let (w, h) = src.dimensions();
    let mut out = RgbaImage::from_pixel(w, h, Rgba([0, 0, 0, 0]));
    let theta = -degrees.to_radians();
    let (sin, cos) = theta.sin_cos();

    for y in 0..h {
        for x in 0..w {
            // Inverse-map the destination pixel into source space.
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            let sx = cx + dx * cos - dy * sin - 0.5;
            let sy = cy + dx * sin + dy * cos - 0.5;
            if let Some(pixel) = sample_bilinear(src, sx, sy) {
                out.put_pixel(x, y, pixel);
            }
        }
    }
    out
}

fn sample_bilinear(src: &RgbaImage, x: f32, y: f32) -> Option<Rgba<u8>> {
    let (w, h) = src.dimensions();
    if x < -1.0 || y < -1.0 || x >= w as f32 || y >= h as f32 {
        return None;
    }

    let x0 = x.floor();
    let y0 = y.floor();
    let tx = x - x0;
    let ty = y - y0;

    let fetch = |ix: f32, iy: f32| -> [f32; 4] {
        if ix < 0.0 || iy < 0.0 || ix >= w as f32 || iy >= h as f32 {
            [0.0; 4]
        } else {
            let p = src.get_pixel(ix as u32, iy as u32);
            [p[0] as f32, p[1] as f32, p[2] as f32, p[3] as f32]
        }
    };

    let p00 = fetch(x0, y0);
    let p10 = fetch(x0 + 1.0, y0);
    let p01 = fetch(x0, y0 + 1.0);
    let p11 = fetch(x0 + 1.0, y0 + 1.0);

    let mut result = [0u8; 4];
    for c in 0..4 {
        let top = p00[c] * (1.0 - tx) + p10[c] * tx;
        let bottom = p01[c] * (1.0 - tx) + p11[c] * tx;
        result[c] = (top * (1.0 - ty) + bottom * ty).round().clamp(0.0, 255.0) as u8;
    }
    Some(Rgba(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_zero_is_identity_for_opaque_pixels() {
        let mut src = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 0]));
        src.put_pixel(3, 4, Rgba([200, 100, 50, 255]));
        let out = rotate_about(&src, 5.0, 5.0, 0.0);
        assert_eq!(out.get_pixel(3, 4), &Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn rotate_180_mirrors_through_center() {
        let mut src = RgbaImage::from_pixel(11, 11, Rgba([0, 0, 0, 0]));
        src.put_pixel(2, 5, Rgba([255, 255, 255, 255]));
        let out = rotate_about(&src, 5.5, 5.5, 180.0);
        assert_eq!(out.get_pixel(8, 5)[3], 255);
    }

    #[test]
    fn rounded_rect_skips_far_corners() {
        let mut canvas = RgbaImage::from_pixel(40, 40, Rgba([255, 255, 255, 255]));
        fill_rounded_rect(&mut canvas, 10.0, 10.0, 20.0, 20.0, 5.0, Rgb(0, 0, 0), 1.0);
        // Center of the box is painted
        assert_eq!(canvas.get_pixel(20, 20), &Rgba([0, 0, 0, 255]));
        // The very corner pixel lies outside the corner radius
        assert_eq!(canvas.get_pixel(10, 10), &Rgba([255, 255, 255, 255]));
    }
}
