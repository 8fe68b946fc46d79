//! Logo ingestion
//!
//! The logo is the first page of an uploaded PDF. Ingestion:
//! 1. Strip full-page or white background rectangles
//! 2. Measure the bounding box of the painted content
//! 3. Keep the page and its measurements for tiling and rotation

mod background;
mod bounds;
mod content;
mod rotate;
mod workspace;

pub use background::strip_background;
pub use bounds::content_bounds;
pub use rotate::{rotate_page_cw, rotate_page_cw_times};
pub use workspace::LogoWorkspace;

use crate::layout::LogoMetrics;
use crate::render::page_media_box;
use crate::tile::load_pdf;
use crate::types::*;
use lopdf::{Document, ObjectId};
use std::path::Path;

/// A measured logo page ready to be tiled
#[derive(Debug, Clone)]
pub struct Logo {
    document: Document,
    page_id: ObjectId,
    metrics: LogoMetrics,
    rotation: Rotation,
}

impl Logo {
    /// Prepare the first page of `document` as an upright logo
    pub fn from_document(mut document: Document) -> Result<Self> {
        let page_id = first_page(&document)?;
        strip_background(&mut document, page_id)?;
        Self::measure(document, page_id, Rotation::None)
    }

    fn measure(document: Document, page_id: ObjectId, rotation: Rotation) -> Result<Self> {
        let page_box = page_media_box(&document, page_id);

        let bounds = match content_bounds(&document, page_id)? {
            Some(bounds) if !bounds.is_empty() => bounds,
            _ => {
                log::warn!("Logo page paints nothing measurable, using its MediaBox");
                page_box
            }
        };

        let metrics = LogoMetrics::new(page_box, bounds);
        let (width_cm, height_cm) = metrics.natural_size_cm();
        log::info!(
            "Logo measured at {:.2} x {:.2} cm ({}°)",
            width_cm,
            height_cm,
            rotation.degrees()
        );

        Ok(Self {
            document,
            page_id,
            metrics,
            rotation,
        })
    }

    /// This logo turned a further 90° clockwise
    pub fn rotated_cw(&self) -> Result<Self> {
        let (document, page_id) = rotate_page_cw(&self.document, self.page_id)?;
        Self::measure(document, page_id, self.rotation.next_clockwise())
    }

    /// Rotate clockwise until the logo is at `target`
    pub fn with_rotation(self, target: Rotation) -> Result<Self> {
        let mut logo = self;
        for _ in 0..logo.rotation.turns_to(target) {
            logo = logo.rotated_cw()?;
        }
        Ok(logo)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    pub fn page_id(&self) -> ObjectId {
        self.page_id
    }

    pub fn metrics(&self) -> &LogoMetrics {
        &self.metrics
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Bounding-box size in centimeters
    pub fn natural_size_cm(&self) -> (f32, f32) {
        self.metrics.natural_size_cm()
    }
}

/// The object id of a document's first page
pub fn first_page(doc: &Document) -> Result<ObjectId> {
    doc.get_pages()
        .values()
        .next()
        .copied()
        .ok_or(TileError::NoPages)
}

/// Load a PDF and prepare its first page as a logo
pub async fn load_logo(path: impl AsRef<Path>) -> Result<Logo> {
    let document = load_pdf(path).await?;
    tokio::task::spawn_blocking(move || Logo::from_document(document)).await?
}
