pub mod commands;
pub mod events;
pub mod macros;
pub mod model;
pub mod types;
pub mod update;
pub mod view;

#[cfg(target_arch = "wasm32")]
pub mod wasm;


use crux_core::Command;

// Re-export core types
pub use crate::{
    commands::device::{DeviceOperation, DeviceOutput},
    events::{DeviceEvent, DisplayEvent, Event, UiEvent},
    model::Model,
    types::*,
    update::DISPLAY_CONFIG_SAVED,
};

#[crux_macros::effect(typegen)]
pub enum Effect {
    Render(crux_core::render::RenderOperation),
    Device(DeviceOperation),
}

pub type DeviceCmd = crate::commands::device::Device<Effect, Event>;

/// The Core application
#[derive(Default)]
pub struct App;

impl crux_core::App for App {
    type Event = Event;
    type Model = Model;
    type ViewModel = ViewModel;
    type Effect = Effect;

    fn update(&self, event: Self::Event, model: &mut Self::Model) -> Command<Effect, Event> {
        update::update(event, model)
    }

    fn view(&self, model: &Self::Model) -> Self::ViewModel {
        view::view(model)
    }
}
