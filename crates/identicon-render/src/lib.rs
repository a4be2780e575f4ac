//! identicon-render: rasterization and PNG encoding for identicon pixel maps.
//!
//! Takes a fill color and the canvas-space rectangles produced by
//! `identicon-pipeline` and materializes them: rectangles are painted
//! onto a white `tiny-skia` pixmap, converted to an `image::RgbaImage`,
//! and optionally encoded as PNG bytes.
//!
//! Pure functions, no file I/O -- callers decide where the bytes go.

use identicon_pipeline::{CanvasConfig, IconError, Rect, Rgb};
use image::RgbaImage;
use tiny_skia::{Paint, Pixmap, Transform};

/// Errors that can occur while rendering or encoding an identicon.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Canvas configuration is invalid.
    #[error(transparent)]
    InvalidConfig(#[from] IconError),

    /// The pixmap for the canvas could not be allocated.
    #[error("failed to allocate {0}x{0} pixel canvas")]
    CanvasAllocation(u32),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    PngEncode(#[from] image::ImageError),
}

/// Paint the pixel map onto a blank canvas.
///
/// The canvas is `side_length * cell_size` pixels square with a white
/// background. Each rectangle is filled with `color`, covering
/// `top_left` inclusive to `bottom_right` exclusive. Rectangles come
/// from distinct grid cells and never overlap, so paint order is
/// immaterial. An empty pixel map yields an all-background canvas.
///
/// # Errors
///
/// Returns [`RenderError::InvalidConfig`] if `config` is invalid, or
/// [`RenderError::CanvasAllocation`] if the pixmap cannot be created.
pub fn render(color: Rgb, pixel_map: &[Rect], config: &CanvasConfig) -> Result<RgbaImage, RenderError> {
    let extent = config.canvas_extent()?;

    let mut pixmap = Pixmap::new(extent, extent).ok_or(RenderError::CanvasAllocation(extent))?;
    pixmap.fill(tiny_skia::Color::WHITE);

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    // Hard cell edges: anti-aliasing would bleed color across cell
    // boundaries on integer-aligned rectangles.
    paint.anti_alias = false;

    for rect in pixel_map {
        let Some(skia_rect) = to_skia_rect(*rect) else {
            // Degenerate rectangle (zero area) -- nothing to paint.
            continue;
        };
        pixmap.fill_rect(skia_rect, &paint, Transform::identity(), None);
    }

    // Every pixel on the canvas is fully opaque, so tiny-skia's
    // premultiplied RGBA bytes coincide with straight RGBA.
    RgbaImage::from_raw(extent, extent, pixmap.take())
        .ok_or(RenderError::CanvasAllocation(extent))
}

/// Paint the pixel map and encode the canvas as PNG bytes.
///
/// # Errors
///
/// Returns the same errors as [`render`], plus
/// [`RenderError::PngEncode`] if PNG encoding fails.
pub fn render_png(color: Rgb, pixel_map: &[Rect], config: &CanvasConfig) -> Result<Vec<u8>, RenderError> {
    let img = render(color, pixel_map, config)?;

    let mut buf = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut buf);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Convert a pipeline rectangle to tiny-skia coordinates.
///
/// Returns `None` for degenerate rectangles (`from_ltrb` rejects
/// non-positive width or height).
#[allow(clippy::cast_precision_loss)]
fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_ltrb(
        rect.top_left.x as f32,
        rect.top_left.y as f32,
        rect.bottom_right.x as f32,
        rect.bottom_right.y as f32,
    )
}
