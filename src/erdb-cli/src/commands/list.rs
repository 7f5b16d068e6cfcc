use anyhow::Result;

use crate::entity::EntityKind;

/// Handle the list command
pub fn run() -> Result<()> {
    println!(
        "{:<22} {:<28} {:<36} {}",
        "ENTITY", "OUTPUT", "SCHEMA", "ELEMENT"
    );
    for kind in EntityKind::ALL {
        println!(
            "{:<22} {:<28} {:<36} {}",
            kind.to_string(),
            kind.output_file(),
            kind.schema_file(),
            kind.element_name()
        );
    }
    Ok(())
}
