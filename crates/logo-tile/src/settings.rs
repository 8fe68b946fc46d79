//! Saved page settings
//!
//! Five newline-separated fields: width, height, left margin, right margin
//! and top margin, all in centimeters. A blank height means auto-height.
//! Reading never fails: missing or damaged data falls back to defaults.

use crate::constants::{DEFAULT_SHEET_MARGIN_CM, DEFAULT_SHEET_WIDTH_CM};
use crate::options::PageSpec;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Number of lines in a settings file
pub const SETTINGS_FIELD_COUNT: usize = 5;

/// Page fields kept between sessions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSettings {
    pub width_cm: f32,
    pub height_cm: Option<f32>,
    pub left_margin_cm: f32,
    pub right_margin_cm: f32,
    pub top_margin_cm: f32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            width_cm: DEFAULT_SHEET_WIDTH_CM,
            height_cm: None,
            left_margin_cm: DEFAULT_SHEET_MARGIN_CM,
            right_margin_cm: DEFAULT_SHEET_MARGIN_CM,
            top_margin_cm: DEFAULT_SHEET_MARGIN_CM,
        }
    }
}

impl PageSettings {
    /// Parse settings text, falling back to defaults field by field.
    ///
    /// Fewer than five lines yields the defaults outright.
    pub fn parse(text: &str) -> Self {
        let defaults = Self::default();
        let lines: Vec<&str> = text.lines().collect();

        if lines.len() < SETTINGS_FIELD_COUNT {
            log::warn!(
                "Settings file has {} of {} fields, using defaults",
                lines.len(),
                SETTINGS_FIELD_COUNT
            );
            return defaults;
        }

        let height_cm = match lines[1].trim() {
            "" => None,
            value => parse_field("height", value).or(defaults.height_cm),
        };

        Self {
            width_cm: parse_field("width", lines[0]).unwrap_or(defaults.width_cm),
            height_cm,
            left_margin_cm: parse_field("left margin", lines[2])
                .unwrap_or(defaults.left_margin_cm),
            right_margin_cm: parse_field("right margin", lines[3])
                .unwrap_or(defaults.right_margin_cm),
            top_margin_cm: parse_field("top margin", lines[4]).unwrap_or(defaults.top_margin_cm),
        }
    }

    /// Render as the five-line file format, one newline after every field
    pub fn to_text(&self) -> String {
        let height = self
            .height_cm
            .map(|h| h.to_string())
            .unwrap_or_else(|| " ".to_string());

        [
            self.width_cm.to_string(),
            height,
            self.left_margin_cm.to_string(),
            self.right_margin_cm.to_string(),
            self.top_margin_cm.to_string(),
        ]
        .iter()
        .map(|field| format!("{}\n", field))
        .collect()
    }

    /// Copy these fields onto a page spec, leaving its bottom margin alone
    pub fn apply_to(&self, page: &mut PageSpec) {
        page.width_cm = self.width_cm;
        page.height_cm = self.height_cm;
        page.left_margin_cm = self.left_margin_cm;
        page.right_margin_cm = self.right_margin_cm;
        page.top_margin_cm = self.top_margin_cm;
    }
}

impl From<&PageSpec> for PageSettings {
    fn from(page: &PageSpec) -> Self {
        Self {
            width_cm: page.width_cm,
            height_cm: page.height_cm,
            left_margin_cm: page.left_margin_cm,
            right_margin_cm: page.right_margin_cm,
            top_margin_cm: page.top_margin_cm,
        }
    }
}

fn parse_field(name: &str, value: &str) -> Option<f32> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log::warn!("Ignoring unreadable {} {:?} in settings", name, value);
            None
        }
    }
}

/// Settings file at a fixed location
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the settings, regenerating the file with defaults if it is absent
    pub async fn load(&self) -> PageSettings {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => PageSettings::parse(&text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let defaults = PageSettings::default();
                log::info!(
                    "No settings at {}, writing defaults",
                    self.path.display()
                );
                if let Err(e) = self.save(&defaults).await {
                    log::warn!("Could not write default settings: {}", e);
                }
                defaults
            }
            Err(e) => {
                log::warn!(
                    "Could not read settings at {}: {}, using defaults",
                    self.path.display(),
                    e
                );
                PageSettings::default()
            }
        }
    }

    pub async fn save(&self, settings: &PageSettings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&self.path, settings.to_text()).await?;
        Ok(())
    }
}
