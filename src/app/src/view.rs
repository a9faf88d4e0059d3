use strum::IntoEnumIterator;

use crate::model::Model;
use crate::types::{DisplayField, FieldView, SubmitPolicy, ViewModel};

pub const FORM_TITLE: &str = "Display Config";
pub const BREADCRUMBS: [&str; 2] = ["Config", "Display"];

/// Project the model onto what the shell renders
pub fn view(model: &Model) -> ViewModel {
    let loading = model.is_submitting();
    let dirty = model.is_dirty();
    let accepts_submit = !loading || model.settings.submit_policy != SubmitPolicy::Block;

    ViewModel {
        title: FORM_TITLE.to_string(),
        breadcrumbs: BREADCRUMBS.iter().map(|s| s.to_string()).collect(),
        fields: DisplayField::iter()
            .map(|field| field_view(field, model))
            .collect(),
        status: model.derive_status(),
        loading,
        dirty,
        can_submit: dirty && accepts_submit,
        can_reset: dirty,
        connected: model.connection_id.is_some(),
        error_message: model.error_message.clone(),
        success_message: model.success_message.clone(),
    }
}

fn field_view(field: DisplayField, model: &Model) -> FieldView {
    FieldView {
        field,
        key: field.key().to_string(),
        label: field.label().to_string(),
        description: field.description().to_string(),
        suffix: field.suffix().map(str::to_string),
        kind: field.kind(),
        value: model.form.form_data.value(field),
        error: model.form.error(field).map(str::to_string),
        options: field.options(),
    }
}
