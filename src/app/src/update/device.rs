use crux_core::Command;

use crate::events::{DeviceEvent, Event};
use crate::model::Model;
use crate::update_field;
use crate::Effect;

/// Handle state pushed by the device-state provider
pub fn handle(event: DeviceEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DeviceEvent::ConfigUpdated(config) => {
            if model.is_dirty() {
                log::debug!("Display config changed upstream, discarding unsaved edits");
            }
            model.sync_upstream(config);
            crux_core::render::render()
        }
        DeviceEvent::Connected { connection_id } => {
            update_field!(model.connection_id, Some(connection_id))
        }
        DeviceEvent::Disconnected => update_field!(model.connection_id, None),
    }
}
