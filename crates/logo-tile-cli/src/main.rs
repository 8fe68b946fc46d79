use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use logo_tile::{
    AspectRatio, HexColor, PageSettings, Rotation, SettingsStore, TileOptions, TileSizing,
    TilingStatistics,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ltile", about = "Tile a PDF logo across a sheet", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Repeat a logo across a single output page
    Tile {
        /// Logo PDF (first page is used)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// JSON options file used as the starting point
        #[arg(long)]
        config: Option<PathBuf>,

        /// Five-line page settings file applied over the config
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Page width in cm
        #[arg(long)]
        width: Option<f32>,

        /// Page height in cm (omit for auto-height)
        #[arg(long)]
        height: Option<f32>,

        /// Left margin in cm
        #[arg(long)]
        margin_left: Option<f32>,

        /// Right margin in cm
        #[arg(long)]
        margin_right: Option<f32>,

        /// Top margin in cm
        #[arg(long)]
        margin_top: Option<f32>,

        /// Bottom margin in cm (defaults to the top margin)
        #[arg(long)]
        margin_bottom: Option<f32>,

        /// Logo width in cm (defaults to the measured width)
        #[arg(long)]
        logo_width: Option<f32>,

        /// Logo height in cm (defaults to the measured height)
        #[arg(long)]
        logo_height: Option<f32>,

        /// Horizontal spacing between tiles in cm
        #[arg(long)]
        spacing_x: Option<f32>,

        /// Vertical spacing between tiles in cm
        #[arg(long)]
        spacing_y: Option<f32>,

        /// Number of tiles
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Background colour (#rrggbb); enables the background fill
        #[arg(long)]
        background: Option<HexColor>,

        /// Clockwise quarter turns applied to the logo
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..4))]
        turns: Option<u8>,

        /// How the logo size maps onto each tile
        #[arg(long, value_enum)]
        sizing: Option<SizingArg>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// Print the measured size of a logo
    Measure {
        /// Logo PDF (first page is used)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Rotate the first page of a PDF clockwise
    Rotate {
        /// Input PDF file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long)]
        output: PathBuf,

        /// Number of quarter turns
        #[arg(long, default_value = "1")]
        turns: usize,
    },

    /// Show or update the saved page settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the settings file, creating it with defaults if missing
    Show {
        #[arg(long)]
        file: PathBuf,
    },
    /// Update fields in the settings file
    Save {
        #[arg(long)]
        file: PathBuf,

        /// Page width in cm
        #[arg(long)]
        width: Option<f32>,

        /// Page height in cm
        #[arg(long, conflicts_with = "auto_height")]
        height: Option<f32>,

        /// Clear the page height
        #[arg(long)]
        auto_height: bool,

        /// Left margin in cm
        #[arg(long)]
        margin_left: Option<f32>,

        /// Right margin in cm
        #[arg(long)]
        margin_right: Option<f32>,

        /// Top margin in cm
        #[arg(long)]
        margin_top: Option<f32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SizingArg {
    HostPage,
    LogoBounds,
}

impl From<SizingArg> for TileSizing {
    fn from(arg: SizingArg) -> Self {
        match arg {
            SizingArg::HostPage => Self::HostPage,
            SizingArg::LogoBounds => Self::LogoBounds,
        }
    }
}

fn print_statistics(stats: &TilingStatistics) {
    println!("Tiling Statistics:");
    println!(
        "  Page: {:.2} x {:.2} cm{}",
        stats.page_width_cm,
        stats.page_height_cm,
        if stats.auto_height { " (auto height)" } else { "" }
    );
    println!(
        "  Tile: {:.2} x {:.2} cm",
        stats.tile_width_cm, stats.tile_height_cm
    );
    println!("  Tiles per row: {}", stats.tiles_per_row);
    println!("  Rows: {}", stats.rows);
    println!(
        "  Tiles placed: {} of {}",
        stats.placed_tiles, stats.requested_tiles
    );
    if stats.dropped_tiles() > 0 {
        println!("  Tiles that did not fit: {}", stats.dropped_tiles());
    }
}

fn print_settings(settings: &PageSettings) {
    println!("Page Settings:");
    println!("  Width: {} cm", settings.width_cm);
    match settings.height_cm {
        Some(h) => println!("  Height: {} cm", h),
        None => println!("  Height: auto"),
    }
    println!("  Left margin: {} cm", settings.left_margin_cm);
    println!("  Right margin: {} cm", settings.right_margin_cm);
    println!("  Top margin: {} cm", settings.top_margin_cm);
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tile {
            input,
            output,
            config,
            settings,
            width,
            height,
            margin_left,
            margin_right,
            margin_top,
            margin_bottom,
            logo_width,
            logo_height,
            spacing_x,
            spacing_y,
            count,
            background,
            turns,
            sizing,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => TileOptions::load(path)
                    .await
                    .with_context(|| format!("loading {}", path.display()))?,
                None => TileOptions::default(),
            };

            if let Some(path) = &settings {
                SettingsStore::new(path)
                    .load()
                    .await
                    .apply_to(&mut options.page);
            }

            let page = &mut options.page;
            page.width_cm = width.unwrap_or(page.width_cm);
            page.height_cm = height.or(page.height_cm);
            page.left_margin_cm = margin_left.unwrap_or(page.left_margin_cm);
            page.right_margin_cm = margin_right.unwrap_or(page.right_margin_cm);
            page.top_margin_cm = margin_top.unwrap_or(page.top_margin_cm);
            page.bottom_margin_cm = margin_bottom.or(page.bottom_margin_cm);

            let layout = &mut options.layout;
            layout.spacing_x_cm = spacing_x.unwrap_or(layout.spacing_x_cm);
            layout.spacing_y_cm = spacing_y.unwrap_or(layout.spacing_y_cm);
            layout.count = count.unwrap_or(layout.count);
            if let Some(color) = background {
                layout.background_color = color;
                layout.background_enabled = true;
            }

            if let Some(sizing) = sizing {
                options.sizing = sizing.into();
            }

            let logo = logo_tile::load_logo(&input)
                .await
                .with_context(|| format!("loading logo {}", input.display()))?;

            // Without a config the logo starts at its measured size
            if config.is_none() {
                let (w, h) = logo.natural_size_cm();
                options.logo.apply_natural_size(w, h);
            }

            if let Some(turns) = turns {
                let target = Rotation::from_quarter_turns(turns as usize);
                while options.logo.rotation != target {
                    options.logo.rotate_cw();
                }
            }

            match (logo_width, logo_height) {
                (Some(w), Some(h)) => {
                    options.logo.aspect = AspectRatio::Free;
                    options.logo.width_cm = w;
                    options.logo.height_cm = h;
                }
                (Some(w), None) => options.logo.set_width(w),
                (None, Some(h)) => options.logo.set_height(h),
                (None, None) => {}
            }

            // Calculate and show statistics
            let metrics = *logo.clone().with_rotation(options.logo.rotation)?.metrics();
            let stats = logo_tile::calculate_statistics(&metrics, &options)?;
            print_statistics(&stats);

            if stats_only {
                return Ok(());
            }

            let Some(output) = output else {
                bail!("--output is required unless --stats-only is given");
            };

            logo_tile::tile_to_file(&logo, &options, &output).await?;
            println!("Tiled → {}", output.display());
        }

        Commands::Measure { input } => {
            let logo = logo_tile::load_logo(&input).await?;
            let (w, h) = logo.natural_size_cm();
            let (pw, ph) = logo.metrics().page_size_cm();
            let bounds = logo.metrics().bounds;

            println!("Logo: {:.2} x {:.2} cm", w, h);
            println!("Page: {:.2} x {:.2} cm", pw, ph);
            println!(
                "Bounds: x={:.1} y={:.1} w={:.1} h={:.1} pt",
                bounds.x, bounds.y, bounds.width, bounds.height
            );
        }

        Commands::Rotate {
            input,
            output,
            turns,
        } => {
            let source = logo_tile::load_pdf(&input).await?;
            let page_id = logo_tile::logo::first_page(&source)?;
            let (rotated, _) = tokio::task::spawn_blocking(move || {
                logo_tile::logo::rotate_page_cw_times(source, page_id, turns)
            })
            .await??;
            logo_tile::save_pdf(rotated, &output).await?;
            println!(
                "Rotated {}° → {}",
                (turns % 4) * 90,
                output.display()
            );
        }

        Commands::Settings { action } => match action {
            SettingsAction::Show { file } => {
                let settings = SettingsStore::new(&file).load().await;
                print_settings(&settings);
            }
            SettingsAction::Save {
                file,
                width,
                height,
                auto_height,
                margin_left,
                margin_right,
                margin_top,
            } => {
                let store = SettingsStore::new(&file);
                let mut settings = store.load().await;

                settings.width_cm = width.unwrap_or(settings.width_cm);
                if auto_height {
                    settings.height_cm = None;
                } else if height.is_some() {
                    settings.height_cm = height;
                }
                settings.left_margin_cm = margin_left.unwrap_or(settings.left_margin_cm);
                settings.right_margin_cm = margin_right.unwrap_or(settings.right_margin_cm);
                settings.top_margin_cm = margin_top.unwrap_or(settings.top_margin_cm);

                store.save(&settings).await?;
                print_settings(&settings);
                println!("Saved → {}", file.display());
            }
        },
    }

    Ok(())
}
