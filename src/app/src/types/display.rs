use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

/// Coordinate display format, numbered as on the device
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize_repr,
    Deserialize_repr,
    EnumIter,
    IntoStaticStr,
)]
#[repr(i32)]
#[strum(serialize_all = "UPPERCASE")]
pub enum GpsCoordinateFormat {
    #[default]
    Dec = 0,
    Dms = 1,
    Utm = 2,
    Mgrs = 3,
    Olc = 4,
    Osgr = 5,
}

/// Unit system used for distances and temperatures on the display
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize_repr,
    Deserialize_repr,
    EnumIter,
    IntoStaticStr,
)]
#[repr(i32)]
#[strum(serialize_all = "UPPERCASE")]
pub enum DisplayUnits {
    #[default]
    Metric = 0,
    Imperial = 1,
}

/// Display section of the device configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    pub screen_on_secs: u32,
    pub auto_screen_carousel_secs: u32,
    pub gps_format: GpsCoordinateFormat,
    pub compass_north_top: bool,
    pub flip_screen: bool,
    pub units: DisplayUnits,
}

/// A selectable entry of an enumerated field
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub value: i32,
    pub label: String,
}

/// Enumerations that can be offered in a select widget.
///
/// Options are listed in declaration order. The label is the device name of
/// the variant with underscores shown as spaces.
pub trait SelectEnum: IntoEnumIterator + Into<&'static str> + Copy {
    /// Numeric value sent to and received from the device
    fn value(self) -> i32;

    fn from_value(value: i32) -> Option<Self> {
        Self::iter().find(|variant| variant.value() == value)
    }

    fn label(self) -> String {
        let name: &'static str = self.into();
        name.replace('_', " ")
    }

    fn options() -> Vec<SelectOption> {
        Self::iter()
            .map(|variant| SelectOption {
                value: variant.value(),
                label: variant.label(),
            })
            .collect()
    }
}

impl SelectEnum for GpsCoordinateFormat {
    fn value(self) -> i32 {
        self as i32
    }
}

impl SelectEnum for DisplayUnits {
    fn value(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for GpsCoordinateFormat {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Unknown GPS coordinate format: {value}"))
    }
}

impl TryFrom<i32> for DisplayUnits {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or_else(|| format!("Unknown display units: {value}"))
    }
}
