use serde::{Deserialize, Serialize};

use super::display::SelectOption;
use super::form::{DisplayField, FieldKind, FieldValue};

/// Lifecycle of the form as shown to the user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Dirty,
    Invalid,
    Submitting,
}

/// One rendered form field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldView {
    pub field: DisplayField,
    pub key: String,
    pub label: String,
    pub description: String,
    pub suffix: Option<String>,
    pub kind: FieldKind,
    pub value: FieldValue,
    pub error: Option<String>,
    pub options: Vec<SelectOption>,
}

/// Everything the shell needs to render the display config screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ViewModel {
    pub title: String,
    pub breadcrumbs: Vec<String>,
    pub fields: Vec<FieldView>,
    pub status: FormStatus,
    pub loading: bool,
    pub dirty: bool,
    pub can_submit: bool,
    pub can_reset: bool,
    pub connected: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}
