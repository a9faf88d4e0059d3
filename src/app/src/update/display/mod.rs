pub mod form;
pub mod submit;

pub use form::{handle_edit, handle_reset};
pub use submit::{handle_set_config_response, handle_submit};

use crux_core::Command;

use crate::events::{DisplayEvent, Event};
use crate::model::Model;
use crate::Effect;

/// Handle display config form events
pub fn handle(event: DisplayEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        DisplayEvent::Edit { field, value } => handle_edit(field, value, model),
        DisplayEvent::Reset => handle_reset(model),
        DisplayEvent::Submit => handle_submit(model),
        DisplayEvent::SetConfigResponse { submitted, result } => {
            handle_set_config_response(submitted, result, model)
        }
    }
}

/*
      (upstream change / reset)
                 ↓
               Idle ──edit──→ Dirty
                                ↓ submit
                            Validating
                                ↓
              ┌─────────────────┴───────────────┐
              │                                 │
        errors found                       draft valid
              │                                 │
              ↓                        ┌────────┴────────┐
     Dirty (errors shown,              │                 │
     re-validated on edit)        no connection      connected
                                       │                 │
                                       ↓                 ↓
                                 Dirty (no-op)      Submitting
                                                         ↓
                                              ┌──────────┴──────────┐
                                              │                     │
                                          completed               failed
                                              │                     │
                                              ↓                     ↓
                                  Idle (re-baselined,       Dirty (error shown)
                                   success shown)
*/
