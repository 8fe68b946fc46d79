//! Sheet composition
//!
//! This module orchestrates the tiling process:
//! 1. Turn the logo to the requested rotation
//! 2. Resolve tile size and grid from the options
//! 3. Render the background and every placement onto one page

mod io;

pub use io::{document_to_bytes, load_pdf, save_pdf};

use crate::layout::{TilePlan, plan_tiles, source_rect};
use crate::logo::Logo;
use crate::options::TileOptions;
use crate::render::render_tile_sheet;
use crate::stats::statistics_from_plan;
use crate::types::*;
use lopdf::Document;
use std::borrow::Cow;
use std::path::Path;

/// The output sheet together with its layout
#[derive(Debug, Clone)]
pub struct ComposedSheet {
    pub document: Document,
    pub plan: TilePlan,
    pub statistics: TilingStatistics,
}

/// Main tiling function
pub async fn tile(logo: &Logo, options: &TileOptions) -> Result<ComposedSheet> {
    options.validate()?;

    let logo = logo.clone();
    let options = *options;

    tokio::task::spawn_blocking(move || compose_sheet(&logo, &options)).await?
}

/// Tile and write the sheet to `path`
pub async fn tile_to_file(
    logo: &Logo,
    options: &TileOptions,
    path: impl AsRef<Path>,
) -> Result<TilingStatistics> {
    let sheet = tile(logo, options).await?;
    save_pdf(sheet.document, path.as_ref()).await?;
    log::info!(
        "Saved {} tiles to {}",
        sheet.statistics.placed_tiles,
        path.as_ref().display()
    );
    Ok(sheet.statistics)
}

/// Build the sheet synchronously
pub fn compose_sheet(logo: &Logo, options: &TileOptions) -> Result<ComposedSheet> {
    let logo = if logo.rotation() == options.logo.rotation {
        Cow::Borrowed(logo)
    } else {
        Cow::Owned(logo.clone().with_rotation(options.logo.rotation)?)
    };

    let metrics = logo.metrics();
    let plan = plan_tiles(options, metrics)?;
    let source = source_rect(options.sizing, metrics);

    let background = options
        .layout
        .background_enabled
        .then_some(options.layout.background_color);

    let mut document = Document::with_version("1.7");
    render_tile_sheet(
        &mut document,
        logo.document(),
        logo.page_id(),
        &source,
        &plan,
        background,
    )?;

    let statistics = statistics_from_plan(&plan);

    Ok(ComposedSheet {
        document,
        plan,
        statistics,
    })
}
