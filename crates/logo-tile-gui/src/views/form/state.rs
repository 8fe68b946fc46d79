use eframe::egui;
use logo_tile::{
    HexColor, LogoSpec, PageSettings, PageSpec, TileLayout, TileOptions, TileSizing,
    TilingStatistics,
};
use logo_tile_runtime::LogoInfo;
use std::fmt;

/// A form field whose text is not a usable number
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?} is not a valid number", self.field, self.value)
    }
}

impl std::error::Error for FieldError {}

fn parse_cm(field: &'static str, text: &str) -> Result<f32, FieldError> {
    match text.trim().replace(',', ".").parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError {
            field,
            value: text.to_string(),
        }),
    }
}

fn parse_optional_cm(field: &'static str, text: &str) -> Result<Option<f32>, FieldError> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_cm(field, text).map(Some)
    }
}

fn parse_count(field: &'static str, text: &str) -> Result<usize, FieldError> {
    text.trim().parse::<usize>().map_err(|_| FieldError {
        field,
        value: text.to_string(),
    })
}

/// Two decimals without trailing zeros
pub fn format_cm(value: f32) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Text-backed form fields for the tiling controls
pub struct FormState {
    pub page_width: String,
    /// Blank selects auto-height
    pub page_height: String,
    pub margin_left: String,
    pub margin_right: String,
    pub margin_top: String,
    pub count: String,
    pub spacing_x: String,
    pub spacing_y: String,
    pub logo_width: String,
    pub logo_height: String,
    /// Aspect lock, measured size and rotation of the current logo
    pub logo: LogoSpec,
    pub background: [u8; 3],
    pub background_enabled: bool,
    pub sizing: TileSizing,
    pub logo_loaded: bool,
    pub thumbnail: Option<egui::TextureHandle>,
    pub stats: Option<TilingStatistics>,
    pub error: Option<FieldError>,
    pub needs_preview: bool,
}

impl Default for FormState {
    fn default() -> Self {
        let mut state = Self {
            page_width: String::new(),
            page_height: String::new(),
            margin_left: String::new(),
            margin_right: String::new(),
            margin_top: String::new(),
            count: String::new(),
            spacing_x: String::new(),
            spacing_y: String::new(),
            logo_width: String::new(),
            logo_height: String::new(),
            logo: LogoSpec::default(),
            background: HexColor::WHITE.to_array(),
            background_enabled: false,
            sizing: TileSizing::default(),
            logo_loaded: false,
            thumbnail: None,
            stats: None,
            error: None,
            needs_preview: false,
        };
        state.apply_options(&TileOptions::default());
        state
    }
}

impl FormState {
    /// Parse every field into tiling options
    pub fn to_options(&self) -> Result<TileOptions, FieldError> {
        let page = PageSpec {
            width_cm: parse_cm("Page width", &self.page_width)?,
            height_cm: parse_optional_cm("Page height", &self.page_height)?,
            left_margin_cm: parse_cm("Left margin", &self.margin_left)?,
            right_margin_cm: parse_cm("Right margin", &self.margin_right)?,
            top_margin_cm: parse_cm("Top margin", &self.margin_top)?,
            bottom_margin_cm: None,
        };

        let mut logo = self.logo;
        logo.width_cm = parse_cm("Logo width", &self.logo_width)?;
        logo.height_cm = parse_cm("Logo height", &self.logo_height)?;

        let layout = TileLayout {
            spacing_x_cm: parse_cm("Horizontal spacing", &self.spacing_x)?,
            spacing_y_cm: parse_cm("Vertical spacing", &self.spacing_y)?,
            count: parse_count("Logo count", &self.count)?,
            background_color: HexColor::from_array(self.background),
            background_enabled: self.background_enabled,
        };

        Ok(TileOptions {
            page,
            logo,
            layout,
            sizing: self.sizing,
        })
    }

    /// The page fields kept between sessions
    pub fn page_settings(&self) -> Result<PageSettings, FieldError> {
        Ok(PageSettings::from(&self.to_options()?.page))
    }

    pub fn apply_settings(&mut self, settings: &PageSettings) {
        self.page_width = format_cm(settings.width_cm);
        self.page_height = settings.height_cm.map(format_cm).unwrap_or_default();
        self.margin_left = format_cm(settings.left_margin_cm);
        self.margin_right = format_cm(settings.right_margin_cm);
        self.margin_top = format_cm(settings.top_margin_cm);
    }

    /// Replace every field, e.g. after loading a configuration file
    pub fn apply_options(&mut self, options: &TileOptions) {
        self.apply_settings(&PageSettings::from(&options.page));
        self.count = options.layout.count.to_string();
        self.spacing_x = format_cm(options.layout.spacing_x_cm);
        self.spacing_y = format_cm(options.layout.spacing_y_cm);
        self.background = options.layout.background_color.to_array();
        self.background_enabled = options.layout.background_enabled;
        self.sizing = options.sizing;
        self.logo = options.logo;
        self.refresh_logo_fields();
    }

    fn refresh_logo_fields(&mut self) {
        self.logo_width = format_cm(self.logo.width_cm);
        self.logo_height = format_cm(self.logo.height_cm);
    }

    /// Copy whichever logo size fields parse onto `self.logo`
    fn sync_logo_size(&mut self) {
        if let Ok(width) = parse_cm("Logo width", &self.logo_width) {
            self.logo.width_cm = width;
        }
        if let Ok(height) = parse_cm("Logo height", &self.logo_height) {
            self.logo.height_cm = height;
        }
    }

    /// The width text changed; a locked ratio rewrites the height
    pub fn logo_width_edited(&mut self) {
        if let Ok(width) = parse_cm("Logo width", &self.logo_width) {
            self.logo.set_width(width);
            if self.logo.is_locked() {
                self.logo_height = format_cm(self.logo.height_cm);
            }
        }
    }

    /// The height text changed; a locked ratio rewrites the width
    pub fn logo_height_edited(&mut self) {
        if let Ok(height) = parse_cm("Logo height", &self.logo_height) {
            self.logo.set_height(height);
            if self.logo.is_locked() {
                self.logo_width = format_cm(self.logo.width_cm);
            }
        }
    }

    pub fn toggle_lock(&mut self) {
        self.sync_logo_size();
        self.logo.toggle_lock();
        self.refresh_logo_fields();
    }

    /// A new logo replaces the size with its measured one
    pub fn apply_logo(&mut self, info: &LogoInfo) {
        let (width, height) = info.natural_size_cm;
        self.logo.rotation = info.rotation;
        self.logo.apply_natural_size(width, height);
        self.refresh_logo_fields();
        self.logo_loaded = true;
        self.needs_preview = true;
    }

    /// The logo turned a quarter clockwise; width and height trade places
    pub fn apply_rotation(&mut self, info: &LogoInfo) {
        self.sync_logo_size();
        self.logo.rotate_cw();
        self.logo.rotation = info.rotation;
        self.logo.natural_size_cm = Some(info.natural_size_cm);
        self.refresh_logo_fields();
        self.needs_preview = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logo_tile::{AspectRatio, Rotation};

    fn logo_info(width: f32, height: f32, rotation: Rotation) -> LogoInfo {
        LogoInfo {
            natural_size_cm: (width, height),
            rotation,
            thumbnail: None,
        }
    }

    #[test]
    fn test_defaults_parse() {
        let form = FormState::default();
        assert_eq!(form.to_options(), Ok(TileOptions::default()));
    }

    #[test]
    fn test_blank_height_is_auto() {
        let mut form = FormState::default();
        form.page_height = "  ".to_string();
        assert_eq!(form.to_options().unwrap().page.height_cm, None);

        form.page_height = "30".to_string();
        assert_eq!(form.to_options().unwrap().page.height_cm, Some(30.0));
    }

    #[test]
    fn test_bad_field_is_named() {
        let mut form = FormState::default();
        form.margin_right = "abc".to_string();
        let err = form.to_options().unwrap_err();
        assert_eq!(err.field, "Right margin");
        assert!(err.to_string().contains("Right margin"));

        let mut form = FormState::default();
        form.count = "2.5".to_string();
        assert_eq!(form.to_options().unwrap_err().field, "Logo count");
    }

    #[test]
    fn test_comma_decimal_is_accepted() {
        let mut form = FormState::default();
        form.spacing_x = "0,5".to_string();
        assert_eq!(form.to_options().unwrap().layout.spacing_x_cm, 0.5);
    }

    #[test]
    fn test_locked_width_drives_height() {
        let mut form = FormState::default();
        form.apply_logo(&logo_info(4.0, 2.0, Rotation::None));
        assert_eq!(form.logo_width, "4");
        assert_eq!(form.logo_height, "2");

        form.logo_width = "8".to_string();
        form.logo_width_edited();
        assert_eq!(form.logo_height, "4");

        form.logo_height = "1".to_string();
        form.logo_height_edited();
        assert_eq!(form.logo_width, "2");
    }

    #[test]
    fn test_unlocked_fields_are_independent() {
        let mut form = FormState::default();
        form.apply_logo(&logo_info(4.0, 2.0, Rotation::None));
        form.toggle_lock();
        assert_eq!(form.logo.aspect, AspectRatio::Free);

        form.logo_width = "10".to_string();
        form.logo_width_edited();
        assert_eq!(form.logo_height, "2");
    }

    #[test]
    fn test_relock_uses_current_fields() {
        let mut form = FormState::default();
        form.apply_logo(&logo_info(4.0, 2.0, Rotation::None));
        form.toggle_lock();
        form.logo_width = "6".to_string();
        form.logo_height = "3".to_string();
        form.toggle_lock();

        assert_eq!(form.logo.aspect, AspectRatio::Locked(2.0));
        form.logo_width = "9".to_string();
        form.logo_width_edited();
        assert_eq!(form.logo_height, "4.5");
    }

    #[test]
    fn test_rotation_swaps_fields() {
        let mut form = FormState::default();
        form.apply_logo(&logo_info(4.0, 2.0, Rotation::None));
        form.needs_preview = false;

        form.apply_rotation(&logo_info(2.0, 4.0, Rotation::Clockwise90));
        assert_eq!(form.logo_width, "2");
        assert_eq!(form.logo_height, "4");
        assert_eq!(form.logo.rotation, Rotation::Clockwise90);
        assert!(form.needs_preview);
        assert_eq!(form.to_options().unwrap().logo.rotation, Rotation::Clockwise90);
    }

    #[test]
    fn test_settings_round_trip_through_fields() {
        let mut form = FormState::default();
        let settings = PageSettings {
            width_cm: 33.5,
            height_cm: Some(20.0),
            left_margin_cm: 0.25,
            right_margin_cm: 0.0,
            top_margin_cm: 1.0,
        };
        form.apply_settings(&settings);
        assert_eq!(form.page_settings(), Ok(settings));
    }

    #[test]
    fn test_format_cm_trims_zeros() {
        assert_eq!(format_cm(10.0), "10");
        assert_eq!(format_cm(0.1), "0.1");
        assert_eq!(format_cm(2.346), "2.35");
    }
}
