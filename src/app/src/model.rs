use crate::types::*;

/// Application Model - the complete state
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Model {
    // Device state
    /// Latest display config published by the device-state provider
    pub upstream: DisplayConfig,
    /// Incremented on every upstream change notification
    pub config_revision: u64,
    pub connection_id: Option<u32>,

    // Form state
    pub form: DisplayForm,

    // Submission state
    pub in_flight: u32,
    pub queued: Option<DisplayConfig>,

    pub settings: FormSettings,

    // UI state
    pub error_message: Option<String>,
    pub success_message: Option<String>,
}

impl Model {
    pub fn is_submitting(&self) -> bool {
        self.in_flight > 0
    }

    pub fn is_dirty(&self) -> bool {
        self.form.is_dirty()
    }

    /// Discard the draft, and any queued submission of it, in favor of the
    /// last upstream config
    pub fn reset_form(&mut self) {
        self.queued = None;
        self.form.reset_to(&self.upstream);
    }

    /// Replace the upstream config and re-sync the draft from it
    pub fn sync_upstream(&mut self, config: DisplayConfig) {
        self.upstream = config;
        self.config_revision += 1;
        self.reset_form();
    }

    /// Clear notifications so an identical follow-up message is seen as new
    pub fn clear_messages(&mut self) {
        self.success_message = None;
        self.error_message = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn derive_status(&self) -> FormStatus {
        if self.is_submitting() {
            FormStatus::Submitting
        } else if !self.form.errors.is_empty() {
            FormStatus::Invalid
        } else if self.is_dirty() {
            FormStatus::Dirty
        } else {
            FormStatus::Idle
        }
    }
}
