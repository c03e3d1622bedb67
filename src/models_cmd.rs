//! Models command: print the registry.

use anyhow::Result;

use helios_separation::ModelId;

/// List every registered model with its required columns.
pub fn run() -> Result<()> {
    for model in ModelId::ALL {
        let descriptor = model.descriptor();
        let columns: Vec<&str> = descriptor.required.iter().map(|c| c.name()).collect();
        println!(
            "{:<18} {:<42} requires: {}",
            model.name(),
            descriptor.label,
            columns.join(", ")
        );
    }
    Ok(())
}
