mod device;
mod display;
mod ui;

pub use display::submit::DISPLAY_CONFIG_SAVED;

use crux_core::Command;

use crate::events::Event;
use crate::model::Model;
use crate::Effect;

/// Main update dispatcher - routes events to domain-specific handlers
pub fn update(event: Event, model: &mut Model) -> Command<Effect, Event> {
    match event {
        // Initialization
        Event::Initialize { settings } => {
            log::debug!("Initializing display form with {settings:?}");
            model.settings = settings;
            model.reset_form();
            crux_core::render::render()
        }

        Event::Device(event) => device::handle(event, model),
        Event::Display(event) => display::handle(event, model),
        Event::Ui(event) => ui::handle(event, model),
    }
}
