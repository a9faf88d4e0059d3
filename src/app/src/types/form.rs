use serde::{Deserialize, Serialize};
use serde_valid::validation::{Errors, ObjectErrors};
use serde_valid::Validate;
use std::collections::HashMap;
use strum::{EnumIter, IntoEnumIterator};

use super::display::{
    DisplayConfig, DisplayUnits, GpsCoordinateFormat, SelectEnum, SelectOption,
};

/// Field name to human-readable validation message
pub type FieldErrors = HashMap<String, String>;

const NOT_A_NUMBER: &str = "Must be a whole number";

/// Fields of the display config form, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, EnumIter)]
pub enum DisplayField {
    ScreenOnSecs,
    AutoScreenCarouselSecs,
    GpsFormat,
    CompassNorthTop,
    FlipScreen,
    Units,
}

/// Widget used to edit a field
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldKind {
    Number,
    Select,
    Toggle,
}

/// Value exchanged with the widget of a field.
///
/// Number and select widgets report their text, toggles report a boolean.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
}

impl DisplayField {
    /// Key used in error maps and by the shell
    pub fn key(self) -> &'static str {
        match self {
            Self::ScreenOnSecs => "screenOnSecs",
            Self::AutoScreenCarouselSecs => "autoScreenCarouselSecs",
            Self::GpsFormat => "gpsFormat",
            Self::CompassNorthTop => "compassNorthTop",
            Self::FlipScreen => "flipScreen",
            Self::Units => "units",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|field| field.key() == key)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ScreenOnSecs => "Screen Timeout",
            Self::AutoScreenCarouselSecs => "Carousel Delay",
            Self::GpsFormat => "GPS Display Units",
            Self::CompassNorthTop => "Compass North Top",
            Self::FlipScreen => "Flip Screen",
            Self::Units => "Display Units",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::ScreenOnSecs => "Turn off the display after this long",
            Self::AutoScreenCarouselSecs => "How fast to cycle through windows",
            Self::GpsFormat => "Coordinate display format",
            Self::CompassNorthTop => "Fix north to the top of compass",
            Self::FlipScreen => "Flip display 180 degrees",
            Self::Units => "Display metric or imperial units",
        }
    }

    pub fn suffix(self) -> Option<&'static str> {
        match self {
            Self::ScreenOnSecs | Self::AutoScreenCarouselSecs => Some("Seconds"),
            _ => None,
        }
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Self::ScreenOnSecs | Self::AutoScreenCarouselSecs => FieldKind::Number,
            Self::GpsFormat | Self::Units => FieldKind::Select,
            Self::CompassNorthTop | Self::FlipScreen => FieldKind::Toggle,
        }
    }

    /// Choices for select fields, empty for the others
    pub fn options(self) -> Vec<SelectOption> {
        match self {
            Self::GpsFormat => GpsCoordinateFormat::options(),
            Self::Units => DisplayUnits::options(),
            _ => Vec::new(),
        }
    }
}

/// Editable copy of the display config.
///
/// Numbers that failed to parse are kept as `None` and select values are kept
/// raw, so that validation can report them per field.
///
/// Validated fields carry an explicit rename: validation errors are keyed by
/// field-level renames only, and those keys must match [`DisplayField::key`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DisplayFormData {
    #[serde(rename = "screenOnSecs")]
    #[validate(minimum = 0)]
    #[validate(maximum = 4294967295)]
    pub screen_on_secs: Option<i64>,
    #[serde(rename = "autoScreenCarouselSecs")]
    #[validate(minimum = 0)]
    #[validate(maximum = 4294967295)]
    pub auto_screen_carousel_secs: Option<i64>,
    #[serde(rename = "gpsFormat")]
    #[validate(minimum = 0)]
    #[validate(maximum = 5)]
    pub gps_format: i32,
    pub compass_north_top: bool,
    pub flip_screen: bool,
    #[validate(minimum = 0)]
    #[validate(maximum = 1)]
    pub units: i32,
}

impl From<&DisplayConfig> for DisplayFormData {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            screen_on_secs: Some(i64::from(config.screen_on_secs)),
            auto_screen_carousel_secs: Some(i64::from(config.auto_screen_carousel_secs)),
            gps_format: config.gps_format.value(),
            compass_north_top: config.compass_north_top,
            flip_screen: config.flip_screen,
            units: config.units.value(),
        }
    }
}

impl TryFrom<&DisplayFormData> for DisplayConfig {
    type Error = String;

    fn try_from(form: &DisplayFormData) -> Result<Self, Self::Error> {
        Ok(Self {
            screen_on_secs: seconds(DisplayField::ScreenOnSecs, form.screen_on_secs)?,
            auto_screen_carousel_secs: seconds(
                DisplayField::AutoScreenCarouselSecs,
                form.auto_screen_carousel_secs,
            )?,
            gps_format: GpsCoordinateFormat::try_from(form.gps_format)?,
            compass_north_top: form.compass_north_top,
            flip_screen: form.flip_screen,
            units: DisplayUnits::try_from(form.units)?,
        })
    }
}

fn seconds(field: DisplayField, value: Option<i64>) -> Result<u32, String> {
    let value = value.ok_or_else(|| format!("{}: {NOT_A_NUMBER}", field.label()))?;
    u32::try_from(value).map_err(|e| format!("{}: {e}", field.label()))
}

impl DisplayFormData {
    /// Current value of a field as the widget shows it
    pub fn value(&self, field: DisplayField) -> FieldValue {
        let number =
            |n: Option<i64>| FieldValue::Text(n.map(|n| n.to_string()).unwrap_or_default());
        match field {
            DisplayField::ScreenOnSecs => number(self.screen_on_secs),
            DisplayField::AutoScreenCarouselSecs => number(self.auto_screen_carousel_secs),
            DisplayField::GpsFormat => FieldValue::Text(self.gps_format.to_string()),
            DisplayField::Units => FieldValue::Text(self.units.to_string()),
            DisplayField::CompassNorthTop => FieldValue::Bool(self.compass_north_top),
            DisplayField::FlipScreen => FieldValue::Bool(self.flip_screen),
        }
    }

    /// Store widget input in a field, coercing text to the field's type.
    ///
    /// Text that is not a whole number is stored as "no number" in number
    /// fields. Input that does not fit the widget at all is rejected.
    pub fn set(&mut self, field: DisplayField, value: FieldValue) -> Result<(), String> {
        match (field.kind(), value) {
            (FieldKind::Number, FieldValue::Text(text)) => {
                let number = text.trim().parse::<i64>().ok();
                match field {
                    DisplayField::ScreenOnSecs => self.screen_on_secs = number,
                    _ => self.auto_screen_carousel_secs = number,
                }
            }
            (FieldKind::Select, FieldValue::Text(text)) => {
                let selected = text
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("Invalid selection '{text}': {e}"))?;
                match field {
                    DisplayField::GpsFormat => self.gps_format = selected,
                    _ => self.units = selected,
                }
            }
            (FieldKind::Toggle, value) => {
                let checked = match value {
                    FieldValue::Bool(checked) => checked,
                    FieldValue::Text(text) => text
                        .trim()
                        .parse::<bool>()
                        .map_err(|e| format!("Invalid toggle value '{text}': {e}"))?,
                };
                match field {
                    DisplayField::CompassNorthTop => self.compass_north_top = checked,
                    _ => self.flip_screen = checked,
                }
            }
            (kind, value) => return Err(format!("{value:?} does not fit a {kind:?} field")),
        }
        Ok(())
    }
}

/// Validate the whole draft, returning one message per invalid field
pub fn validate_draft(form: &DisplayFormData) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for (field, value) in [
        (DisplayField::ScreenOnSecs, form.screen_on_secs),
        (DisplayField::AutoScreenCarouselSecs, form.auto_screen_carousel_secs),
    ] {
        if value.is_none() {
            errors.insert(field.key().to_string(), NOT_A_NUMBER.to_string());
        }
    }

    match form.validate() {
        Ok(()) => {}
        Err(Errors::Object(tree)) => collect_property_errors(&tree, &mut errors),
        Err(e) => log::error!("Unexpected validation error shape: {e}"),
    }

    errors
}

fn collect_property_errors(tree: &ObjectErrors, errors: &mut FieldErrors) {
    for (key, node) in &tree.properties {
        let Some(field) = DisplayField::from_key(key) else {
            log::warn!("Validation error for unknown field {key}");
            continue;
        };
        let message = match (field.kind(), node) {
            (FieldKind::Select, _) => Some(format!("Unknown {} option", field.label())),
            (_, Errors::NewType(messages)) => messages.first().map(ToString::to_string),
            (_, other) => Some(other.to_string()),
        };
        if let Some(message) = message {
            errors.entry(field.key().to_string()).or_insert(message);
        }
    }
}

/// Draft, last-synced snapshot, and validation state of the form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayForm {
    pub form_data: DisplayFormData,
    pub original_data: DisplayFormData,
    pub errors: FieldErrors,
    /// Set by the first submit attempt; from then on every edit re-validates
    pub revalidate: bool,
}

impl Default for DisplayForm {
    fn default() -> Self {
        Self::new(&DisplayConfig::default())
    }
}

impl DisplayForm {
    pub fn new(config: &DisplayConfig) -> Self {
        let data = DisplayFormData::from(config);
        Self {
            form_data: data.clone(),
            original_data: data,
            errors: FieldErrors::new(),
            revalidate: false,
        }
    }

    /// Replace draft and snapshot with `config`, dropping edits and errors
    pub fn reset_to(&mut self, config: &DisplayConfig) {
        let data = DisplayFormData::from(config);
        self.form_data = data.clone();
        self.original_data = data;
        self.errors.clear();
        self.revalidate = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.form_data != self.original_data
    }

    pub fn error(&self, field: DisplayField) -> Option<&str> {
        self.errors.get(field.key()).map(String::as_str)
    }

    /// Apply one field edit, re-validating once a submit has been attempted
    pub fn edit(&mut self, field: DisplayField, value: FieldValue) -> Result<(), String> {
        self.form_data.set(field, value)?;
        if self.revalidate {
            self.errors = validate_draft(&self.form_data);
        }
        Ok(())
    }

    /// Validate for submission, returning the config to send when valid
    pub fn submission(&mut self) -> Option<DisplayConfig> {
        self.revalidate = true;
        self.errors = validate_draft(&self.form_data);
        if !self.errors.is_empty() {
            return None;
        }
        match DisplayConfig::try_from(&self.form_data) {
            Ok(config) => Some(config),
            Err(e) => {
                log::error!("Validated display form did not convert: {e}");
                None
            }
        }
    }
}
