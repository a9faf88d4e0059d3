//! Domain-based type organization
//!
//! - display: the device's display config and its enumerations
//! - form: draft, field binding, and validation
//! - payload: tagged set-config message
//! - settings: shell-provided form settings
//! - view: view model rendered by the shell

pub mod display;
pub mod form;
pub mod payload;
pub mod settings;
pub mod view;

pub use display::*;
pub use form::*;
pub use payload::*;
pub use settings::*;
pub use view::*;
