use anyhow::Result;
use crux_core::typegen::TypeGen;
use display_config_core::{
    events::{DeviceEvent, DisplayEvent, UiEvent},
    types::{DisplayField, FieldKind, FieldValue, FormStatus, PayloadVariant, SubmitPolicy},
    App, DeviceOutput,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<DisplayEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Form enums and device protocol types seen by the shell
    gen.register_type::<DisplayField>()?;
    gen.register_type::<FieldKind>()?;
    gen.register_type::<FieldValue>()?;
    gen.register_type::<FormStatus>()?;
    gen.register_type::<SubmitPolicy>()?;
    gen.register_type::<PayloadVariant>()?;
    gen.register_type::<DeviceOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
