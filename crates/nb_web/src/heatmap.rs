use std::io::Cursor;
use std::path::Path;

use image::{ImageBuffer, ImageOutputFormat, Rgb, RgbImage};
use nb_core::Result;

/// Map a grayscale intensity onto the "hot" colormap: black through red
/// and yellow to white, three linear channel ramps.
pub fn heat_color(intensity: u8) -> Rgb<u8> {
    let i = intensity as u32 * 3;
    let r = i.min(255) as u8;
    let g = i.saturating_sub(255).min(255) as u8;
    let b = i.saturating_sub(510).min(255) as u8;
    Rgb([r, g, b])
}

/// Load an image file, collapse it to grayscale, recolor every pixel
/// through the hot colormap, and encode the result as PNG.
pub fn render_png(path: &Path) -> Result<Vec<u8>> {
    let gray = image::open(path)
        .map_err(|e| anyhow::anyhow!("failed to open {}: {}", path.display(), e))?
        .to_luma8();

    let mut heat: RgbImage = ImageBuffer::new(gray.width(), gray.height());
    for (x, y, pixel) in gray.enumerate_pixels() {
        heat.put_pixel(x, y, heat_color(pixel[0]));
    }

    let mut bytes = Vec::new();
    heat.write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)
        .map_err(|e| anyhow::anyhow!("failed to encode heatmap: {}", e))?;
    Ok(bytes)
}
