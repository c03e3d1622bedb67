use serde::Deserialize;

/// Top-level helios configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeliosConfig {
    /// Default model identifier; `--model` overrides it.
    #[serde(default)]
    pub model: Option<String>,

    /// Calibration solver settings.
    #[serde(default)]
    pub fit: FitToml,

    /// Parquet output settings.
    #[serde(default)]
    pub io: IoToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FitToml {
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_sd_tolerance")]
    pub sd_tolerance: f64,
}

impl Default for FitToml {
    fn default() -> Self {
        Self {
            max_iters: default_max_iters(),
            sd_tolerance: default_sd_tolerance(),
        }
    }
}

fn default_max_iters() -> u64 {
    2000
}
fn default_sd_tolerance() -> f64 {
    1e-8
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}
