//! Evaluate command: run a separation model over a predictor Parquet
//! file and write the kd series.

use anyhow::{Context, Result, anyhow};
use tracing::{info, info_span};

use helios_fit::FitConfig;
use helios_io::{Compression, WriterConfig, read_table, write_kd};
use helios_separation::{ModelId, evaluate_with};

use crate::cli::EvaluateArgs;
use crate::config::HeliosConfig;

/// Run the evaluation pipeline.
pub fn run(args: EvaluateArgs) -> Result<()> {
    let _cmd = info_span!("evaluate").entered();

    let config = match &args.config {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")?
        }
        None => HeliosConfig::default(),
    };

    let model_name = args
        .model
        .or(config.model)
        .ok_or_else(|| anyhow!("no model: pass --model or set `model` in the config file"))?;
    let model: ModelId = model_name.parse()?;

    info!(path = %args.input.display(), "reading predictor table");
    let table = read_table(&args.input)
        .with_context(|| format!("failed to read Parquet: {}", args.input.display()))?;
    info!(rows = table.len(), "predictor table loaded");

    let fit_config = FitConfig::new()
        .with_max_iters(config.fit.max_iters)
        .with_sd_tolerance(config.fit.sd_tolerance);

    let kd = evaluate_with(model, &table, &fit_config)
        .with_context(|| format!("evaluation of '{model}' failed"))?;

    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("kd.parquet"));
    let compression: Compression = config.io.compression.parse()?;
    let writer = WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(config.io.row_group_size);

    write_kd(&output, table.timestamps(), &kd, &writer)
        .with_context(|| format!("failed to write kd output: {}", output.display()))?;
    info!(path = %output.display(), rows = kd.len(), "kd written");

    Ok(())
}
