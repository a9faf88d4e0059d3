use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::types::{DisplayField, FieldValue};
use crate::Effect;

/// Handle a single field edit from the form
pub fn handle_edit(
    field: DisplayField,
    value: FieldValue,
    model: &mut Model,
) -> Command<Effect, Event> {
    match model.form.edit(field, value) {
        Ok(()) => crux_core::render::render(),
        Err(e) => {
            log::warn!("Ignoring input for {}: {e}", field.key());
            Command::done()
        }
    }
}

/// Handle form reset - restore the draft to the last upstream config
pub fn handle_reset(model: &mut Model) -> Command<Effect, Event> {
    model.reset_form();
    crux_core::render::render()
}
