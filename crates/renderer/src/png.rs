//! Raster output: rasterize the chart SVG and encode it as PNG.
//!
//! The SVG document is parsed with usvg and drawn with resvg onto an opaque
//! white tiny-skia pixmap. The pixels are then written as an RGBA PNG
//! (color type 6) with zlib-compressed scanlines.

use std::io::Write;

use heatmap_common::{HeatmapError, HeatmapResult};
use tracing::debug;

use crate::chart::Chart;
use crate::svg::render_svg;

/// Render the chart to PNG bytes.
pub fn render_png(chart: &Chart) -> HeatmapResult<Vec<u8>> {
    let svg = render_svg(chart);
    let (pixels, width, height) = rasterize_svg(&svg)?;
    create_png(&pixels, width, height)
}

/// Rasterize an SVG document at its intrinsic size.
///
/// Returns RGBA pixel data together with its width and height. The canvas is
/// filled white first, so every pixel is opaque.
pub fn rasterize_svg(svg: &str) -> HeatmapResult<(Vec<u8>, usize, usize)> {
    let mut opt = usvg::Options::default();
    opt.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| HeatmapError::RenderError(format!("SVG parse failed: {}", e)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        HeatmapError::RenderError(format!(
            "cannot allocate {}x{} canvas",
            size.width(),
            size.height()
        ))
    })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    debug!(
        width = size.width(),
        height = size.height(),
        "Rasterized chart"
    );

    Ok((
        pixmap.data().to_vec(),
        size.width() as usize,
        size.height() as usize,
    ))
}

/// Create a PNG image from RGBA pixel data (color type 6).
///
/// # Arguments
/// - `pixels`: RGBA pixel data (4 bytes per pixel)
/// - `width`: Image width in pixels
/// - `height`: Image height in pixels
pub fn create_png(pixels: &[u8], width: usize, height: usize) -> HeatmapResult<Vec<u8>> {
    if pixels.len() != width * height * 4 {
        return Err(HeatmapError::RenderError(format!(
            "expected {} bytes of RGBA data for {}x{}, got {}",
            width * height * 4,
            width,
            height,
            pixels.len()
        )));
    }

    let mut png = Vec::new();

    // PNG signature
    png.extend_from_slice(&[137, 80, 78, 71, 13, 10, 26, 10]);

    // IHDR chunk
    let mut ihdr_data = Vec::new();
    ihdr_data.extend_from_slice(&(width as u32).to_be_bytes());
    ihdr_data.extend_from_slice(&(height as u32).to_be_bytes());
    ihdr_data.push(8); // bit depth
    ihdr_data.push(6); // color type (RGBA)
    ihdr_data.push(0); // compression method
    ihdr_data.push(0); // filter method
    ihdr_data.push(0); // interlace method
    write_chunk(&mut png, b"IHDR", &ihdr_data);

    // IDAT chunk (image data)
    let idat_data = deflate_idat_rgba(pixels, width, height)
        .map_err(|e| HeatmapError::RenderError(format!("IDAT compression failed: {}", e)))?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    // IEND chunk
    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Write a PNG chunk
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    // CRC covers chunk type and data, not the length
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Deflate RGBA image data for the IDAT chunk.
fn deflate_idat_rgba(pixels: &[u8], width: usize, height: usize) -> std::io::Result<Vec<u8>> {
    // Filter byte (0 = none) before each scanline
    let row_len = width * 4;
    let mut uncompressed = Vec::with_capacity(height * (1 + row_len));
    for row in pixels.chunks_exact(row_len.max(1)).take(height) {
        uncompressed.push(0);
        uncompressed.extend_from_slice(row);
    }

    let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(&uncompressed)?;
    encoder.finish()
}
