use serde::{Deserialize, Serialize};

use super::display::DisplayConfig;

/// Device configuration message, tagged with the subsystem it applies to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub payload_variant: PayloadVariant,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PayloadVariant {
    Display(DisplayConfig),
}

impl Config {
    pub fn display(config: DisplayConfig) -> Self {
        Self {
            payload_variant: PayloadVariant::Display(config),
        }
    }

    /// Name of the active variant, as the device protocol spells it
    pub fn kind(&self) -> &'static str {
        match self.payload_variant {
            PayloadVariant::Display(_) => "display",
        }
    }
}
