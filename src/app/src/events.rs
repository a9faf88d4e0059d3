use serde::{Deserialize, Serialize};

use crate::types::*;

/// Events that can happen in the app, grouped by domain
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Event {
    // Initialization
    Initialize { settings: FormSettings },

    Device(DeviceEvent),
    Display(DisplayEvent),
    Ui(UiEvent),
}

/// State pushed by the device-state provider
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DeviceEvent {
    /// A new display config was published; it replaces the draft
    ConfigUpdated(DisplayConfig),
    Connected { connection_id: u32 },
    Disconnected,
}

/// User actions on the display config form
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum DisplayEvent {
    Edit {
        field: DisplayField,
        value: FieldValue,
    },
    Reset,
    Submit,

    // Device responses (internal events, skipped from serialization)
    #[serde(skip)]
    SetConfigResponse {
        submitted: DisplayConfig,
        result: Result<(), String>,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ClearError,
    ClearSuccess,
}
