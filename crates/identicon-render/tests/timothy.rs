//! Integration test: run the "Timothy" input through the full pipeline and
//! verify the rendered PNG against known digest-derived values.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use identicon_pipeline::{CanvasConfig, Rgb, generate};
use identicon_render::render_png;

#[test]
fn timothy_pipeline_to_png() {
    let config = CanvasConfig::default();
    let filled = generate("Timothy", &config).expect("generation should succeed");

    // MD5("Timothy") starts 82 05 2c.
    assert_eq!(filled.color, Rgb::new(130, 5, 44));

    let png = render_png(filled.color, &filled.pixel_map, &config).expect("render should succeed");
    eprintln!(
        "Rendered {} rectangles into {} PNG bytes",
        filled.pixel_map.len(),
        png.len(),
    );

    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (250, 250));

    let fill = image::Rgba([130, 5, 44, 255]);
    let background = image::Rgba([255, 255, 255, 255]);

    // First grid row is [130, 5, 44, 5, 130]: the corner cells (indices
    // 0 and 4, value 130) are painted, their neighbors (value 5) are not.
    assert_eq!(*decoded.get_pixel(25, 25), fill, "index 0 cell");
    assert_eq!(*decoded.get_pixel(225, 25), fill, "index 4 cell");
    assert_eq!(*decoded.get_pixel(75, 25), background, "index 1 cell");
    assert_eq!(*decoded.get_pixel(175, 25), background, "index 3 cell");

    // Same input again produces byte-identical PNG output.
    let again = generate("Timothy", &config).unwrap();
    let png_again = render_png(again.color, &again.pixel_map, &config).unwrap();
    assert_eq!(png, png_again);
}

#[test]
fn left_right_symmetry_of_rendered_icon() {
    let config = CanvasConfig::default();
    let filled = generate("symmetry", &config).unwrap();
    let png = render_png(filled.color, &filled.pixel_map, &config).unwrap();
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();

    // Sample each cell center: column c must mirror column 4 - c.
    for row in 0..5u32 {
        for col in 0..5u32 {
            let y = row * 50 + 25;
            let x = col * 50 + 25;
            let mirrored_x = (4 - col) * 50 + 25;
            assert_eq!(
                decoded.get_pixel(x, y),
                decoded.get_pixel(mirrored_x, y),
                "cell ({row}, {col}) does not mirror ({row}, {})",
                4 - col,
            );
        }
    }
}
