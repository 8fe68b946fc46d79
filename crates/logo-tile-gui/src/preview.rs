//! Rasterizing tiled sheets and logo thumbnails for display

use logo_tile_runtime::RasterImage;

/// Resolution of the sheet preview
pub const PREVIEW_DPI: f32 = 96.0;

/// Edge of the square box the logo thumbnail is fitted into
pub const THUMBNAIL_SIZE: u32 = 100;

// Larger textures are rejected by most GPUs
#[cfg(feature = "pdf-viewer")]
const MAX_PREVIEW_EDGE: i32 = 8192;

#[cfg(feature = "pdf-viewer")]
use pdfium_render::prelude::*;

/// Initialize Pdfium, trying the vendored library first, then falling back to system
#[cfg(feature = "pdf-viewer")]
pub fn init_pdfium() -> Result<Pdfium, PdfiumError> {
    let vendor_path = std::env::current_dir().ok().and_then(|mut p| {
        p.push("vendor/pdfium/lib");
        if p.exists() { Some(p) } else { None }
    });

    if let Some(vendor_path) = vendor_path {
        if let Ok(binding) =
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(&vendor_path))
        {
            return Ok(Pdfium::new(binding));
        }
    }

    Pdfium::bind_to_system_library().map(Pdfium::new)
}

#[cfg(feature = "pdf-viewer")]
fn render_first_page(
    pdf_bytes: &[u8],
    config: &PdfRenderConfig,
) -> Result<RasterImage, PdfiumError> {
    let pdfium = init_pdfium()?;
    let document = pdfium.load_pdf_from_byte_slice(pdf_bytes, None)?;
    let page = document.pages().get(0)?;

    let bitmap = page.render_with_config(config)?;
    Ok(RasterImage {
        width: bitmap.width() as usize,
        height: bitmap.height() as usize,
        rgba_data: bitmap.as_rgba_bytes().to_vec(),
    })
}

/// Render the first page of a PDF at [`PREVIEW_DPI`].
///
/// Returns `None` when no rasterizer is available; the failure is logged.
#[cfg(feature = "pdf-viewer")]
pub fn render_sheet(pdf_bytes: &[u8]) -> Option<RasterImage> {
    let config = PdfRenderConfig::new()
        .scale_page_by_factor(PREVIEW_DPI / 72.0)
        .set_maximum_width(MAX_PREVIEW_EDGE)
        .set_maximum_height(MAX_PREVIEW_EDGE);

    match render_first_page(pdf_bytes, &config) {
        Ok(image) => Some(image),
        Err(e) => {
            log::warn!("Preview rendering unavailable: {}", e);
            None
        }
    }
}

/// Render the first page of a PDF and fit it into a [`THUMBNAIL_SIZE`] square
#[cfg(feature = "pdf-viewer")]
pub fn render_thumbnail(pdf_bytes: &[u8]) -> Option<RasterImage> {
    let edge = (THUMBNAIL_SIZE * 2) as i32;
    let config = PdfRenderConfig::new()
        .set_target_width(edge)
        .set_maximum_height(edge);

    match render_first_page(pdf_bytes, &config) {
        Ok(image) => fit_thumbnail(image),
        Err(e) => {
            log::warn!("Logo thumbnail unavailable: {}", e);
            None
        }
    }
}

#[cfg(not(feature = "pdf-viewer"))]
pub fn render_sheet(_pdf_bytes: &[u8]) -> Option<RasterImage> {
    log::debug!("Built without pdf-viewer, skipping preview raster");
    None
}

#[cfg(not(feature = "pdf-viewer"))]
pub fn render_thumbnail(_pdf_bytes: &[u8]) -> Option<RasterImage> {
    None
}

/// Downscale an RGBA raster so its longer side is [`THUMBNAIL_SIZE`]
#[cfg_attr(not(feature = "pdf-viewer"), allow(dead_code))]
pub fn fit_thumbnail(image: RasterImage) -> Option<RasterImage> {
    let (width, height) = (image.width as u32, image.height as u32);
    let buffer = image::RgbaImage::from_raw(width, height, image.rgba_data)?;
    let (thumb_w, thumb_h) = thumbnail_dimensions(width, height);
    let thumb = image::imageops::thumbnail(&buffer, thumb_w, thumb_h);

    Some(RasterImage {
        width: thumb.width() as usize,
        height: thumb.height() as usize,
        rgba_data: thumb.into_raw(),
    })
}

fn thumbnail_dimensions(width: u32, height: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (1, 1);
    }
    let scale = THUMBNAIL_SIZE as f32 / width.max(height) as f32;
    (
        ((width as f32 * scale).round() as u32).max(1),
        ((height as f32 * scale).round() as u32).max(1),
    )
}
