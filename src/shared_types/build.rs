use anyhow::Result;
use crux_core::typegen::TypeGen;
use restart_control_core::{
    events::{DeviceEvent, UiEvent},
    types::Severity,
    App,
};
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<DeviceEvent>()?;
    gen.register_type::<UiEvent>()?;

    gen.register_type::<Severity>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
