//! The model registry: identifiers and their static descriptors.

use std::str::FromStr;

use helios_table::Column;

use crate::error::SeparationError;

/// A separation model identifier.
///
/// The registry is closed: every variant carries static metadata (its
/// canonical name, a human label, and the ordered list of required
/// columns) and maps to exactly one evaluation routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelId {
    /// Boland logistic model, calibrated per dataset.
    Boland,
    /// Engerer quasi-universal re-fit.
    Engerer2,
    /// Engerer re-fit with a larger offset.
    Engerer4,
    /// Yang universal model with the hourly-lagged Engerer2 predictor.
    Yang4,
    /// Starke two-branch model fitted in Australia.
    Starke1,
    /// Starke two-branch model fitted in Brazil.
    Starke2,
    /// Starke climate model, tropical.
    Starke3A,
    /// Starke climate model, dry.
    Starke3B,
    /// Starke climate model, mild temperate.
    Starke3C,
    /// Starke climate model, snow.
    Starke3D,
    /// Starke climate model, polar.
    Starke3E,
    /// Abreu power model, tropical.
    AbreuTropical,
    /// Abreu power model, dry.
    AbreuDry,
    /// Abreu power model, mild temperate.
    AbreuMildTemperate,
    /// Abreu power model, snow and polar (high albedo).
    AbreuHighAlbedo,
    /// Every worldwide logistic fit.
    Every1,
    /// Every Köppen-class fit, Am.
    Every2Am,
    /// Every Köppen-class fit, Aw.
    Every2Aw,
    /// Every Köppen-class fit, BSh.
    Every2Bsh,
    /// Every Köppen-class fit, BSk.
    Every2Bsk,
    /// Every Köppen-class fit, BWh.
    Every2Bwh,
    /// Every Köppen-class fit, Cfa.
    Every2Cfa,
    /// Every Köppen-class fit, Cfb.
    Every2Cfb,
    /// Every Köppen-class fit, Csa.
    Every2Csa,
    /// Every Köppen-class fit, Csb.
    Every2Csb,
    /// Every pooled fit for remaining climates.
    Every2Other,
    /// Paulescu piecewise-linear model as published (first hinge only).
    Paulescu,
    /// Paulescu piecewise-linear model with all three hinge terms.
    PaulescuFull,
}

/// Static metadata for one registry entry.
#[derive(Debug, Clone, Copy)]
pub struct ModelDescriptor {
    /// The model identifier.
    pub id: ModelId,
    /// Short human-readable label.
    pub label: &'static str,
    /// Columns the model reads, in formula order.
    pub required: &'static [Column],
}

const SIGMOID_COLUMNS: &[Column] = &[
    Column::ClearnessIndex,
    Column::ApparentSolarTime,
    Column::SolarAltitude,
    Column::DailyClearness,
    Column::Persistence,
];

const BOLAND_COLUMNS: &[Column] = &[
    Column::ClearnessIndex,
    Column::ApparentSolarTime,
    Column::SolarAltitude,
    Column::DailyClearness,
    Column::Persistence,
    Column::DiffuseFraction,
];

const ENGERER_COLUMNS: &[Column] = &[
    Column::ClearnessIndex,
    Column::ApparentSolarTime,
    Column::SolarAltitude,
    Column::ClearSkyDeviation,
    Column::CloudEnhancement,
];

const STARKE_COLUMNS: &[Column] = &[
    Column::ClearnessIndex,
    Column::ApparentSolarTime,
    Column::SolarAltitude,
    Column::DailyClearness,
    Column::Persistence,
    Column::ClearSkyGlobal,
    Column::ClearSkyIndex,
];

const STARKE_CLIMATE_COLUMNS: &[Column] = &[
    Column::ClearnessIndex,
    Column::ApparentSolarTime,
    Column::SolarAltitude,
    Column::DailyClearness,
    Column::Persistence,
    Column::ClearSkyGlobal,
    Column::HourlyClearness,
    Column::ClearSkyIndex,
];

const ABREU_COLUMNS: &[Column] = &[Column::ClearnessIndex];

const PAULESCU_COLUMNS: &[Column] = &[Column::ClearnessIndex, Column::DailyClearness];

impl ModelId {
    /// All registered models, in catalogue order.
    pub const ALL: [ModelId; 28] = [
        ModelId::Boland,
        ModelId::Engerer2,
        ModelId::Engerer4,
        ModelId::Yang4,
        ModelId::Starke1,
        ModelId::Starke2,
        ModelId::Starke3A,
        ModelId::Starke3B,
        ModelId::Starke3C,
        ModelId::Starke3D,
        ModelId::Starke3E,
        ModelId::AbreuTropical,
        ModelId::AbreuDry,
        ModelId::AbreuMildTemperate,
        ModelId::AbreuHighAlbedo,
        ModelId::Every1,
        ModelId::Every2Am,
        ModelId::Every2Aw,
        ModelId::Every2Bsh,
        ModelId::Every2Bsk,
        ModelId::Every2Bwh,
        ModelId::Every2Cfa,
        ModelId::Every2Cfb,
        ModelId::Every2Csa,
        ModelId::Every2Csb,
        ModelId::Every2Other,
        ModelId::Paulescu,
        ModelId::PaulescuFull,
    ];

    /// Canonical identifier string.
    pub fn name(self) -> &'static str {
        match self {
            ModelId::Boland => "boland",
            ModelId::Engerer2 => "engerer2",
            ModelId::Engerer4 => "engerer4",
            ModelId::Yang4 => "yang4",
            ModelId::Starke1 => "starke1",
            ModelId::Starke2 => "starke2",
            ModelId::Starke3A => "starke3_a",
            ModelId::Starke3B => "starke3_b",
            ModelId::Starke3C => "starke3_c",
            ModelId::Starke3D => "starke3_d",
            ModelId::Starke3E => "starke3_e",
            ModelId::AbreuTropical => "abreu_a",
            ModelId::AbreuDry => "abreu_b",
            ModelId::AbreuMildTemperate => "abreu_c",
            ModelId::AbreuHighAlbedo => "abreu_high_albedo",
            ModelId::Every1 => "every1",
            ModelId::Every2Am => "every2_am",
            ModelId::Every2Aw => "every2_aw",
            ModelId::Every2Bsh => "every2_bsh",
            ModelId::Every2Bsk => "every2_bsk",
            ModelId::Every2Bwh => "every2_bwh",
            ModelId::Every2Cfa => "every2_cfa",
            ModelId::Every2Cfb => "every2_cfb",
            ModelId::Every2Csa => "every2_csa",
            ModelId::Every2Csb => "every2_csb",
            ModelId::Every2Other => "every2_other",
            ModelId::Paulescu => "paulescu",
            ModelId::PaulescuFull => "paulescu_full",
        }
    }

    /// Returns this model's static descriptor.
    pub fn descriptor(self) -> ModelDescriptor {
        let (label, required) = match self {
            ModelId::Boland => ("Boland logistic, calibrated per dataset", BOLAND_COLUMNS),
            ModelId::Engerer2 => ("Engerer2 quasi-universal", ENGERER_COLUMNS),
            ModelId::Engerer4 => ("Engerer4 re-fit", ENGERER_COLUMNS),
            ModelId::Yang4 => ("Yang4 with hourly-lagged Engerer2", ENGERER_COLUMNS),
            ModelId::Starke1 => ("Starke two-branch, Australia", STARKE_COLUMNS),
            ModelId::Starke2 => ("Starke two-branch, Brazil", STARKE_COLUMNS),
            ModelId::Starke3A => ("Starke climate, tropical", STARKE_CLIMATE_COLUMNS),
            ModelId::Starke3B => ("Starke climate, dry", STARKE_CLIMATE_COLUMNS),
            ModelId::Starke3C => ("Starke climate, mild temperate", STARKE_CLIMATE_COLUMNS),
            ModelId::Starke3D => ("Starke climate, snow", STARKE_CLIMATE_COLUMNS),
            ModelId::Starke3E => ("Starke climate, polar", STARKE_CLIMATE_COLUMNS),
            ModelId::AbreuTropical => ("Abreu power, tropical", ABREU_COLUMNS),
            ModelId::AbreuDry => ("Abreu power, dry", ABREU_COLUMNS),
            ModelId::AbreuMildTemperate => ("Abreu power, mild temperate", ABREU_COLUMNS),
            ModelId::AbreuHighAlbedo => ("Abreu power, high albedo", ABREU_COLUMNS),
            ModelId::Every1 => ("Every worldwide", SIGMOID_COLUMNS),
            ModelId::Every2Am => ("Every Köppen Am", SIGMOID_COLUMNS),
            ModelId::Every2Aw => ("Every Köppen Aw", SIGMOID_COLUMNS),
            ModelId::Every2Bsh => ("Every Köppen BSh", SIGMOID_COLUMNS),
            ModelId::Every2Bsk => ("Every Köppen BSk", SIGMOID_COLUMNS),
            ModelId::Every2Bwh => ("Every Köppen BWh", SIGMOID_COLUMNS),
            ModelId::Every2Cfa => ("Every Köppen Cfa", SIGMOID_COLUMNS),
            ModelId::Every2Cfb => ("Every Köppen Cfb", SIGMOID_COLUMNS),
            ModelId::Every2Csa => ("Every Köppen Csa", SIGMOID_COLUMNS),
            ModelId::Every2Csb => ("Every Köppen Csb", SIGMOID_COLUMNS),
            ModelId::Every2Other => ("Every pooled climates", SIGMOID_COLUMNS),
            ModelId::Paulescu => ("Paulescu piecewise (as published)", PAULESCU_COLUMNS),
            ModelId::PaulescuFull => ("Paulescu piecewise (all hinges)", PAULESCU_COLUMNS),
        };
        ModelDescriptor {
            id: self,
            label,
            required,
        }
    }

    /// Columns this model reads, in formula order.
    pub fn required_columns(self) -> &'static [Column] {
        self.descriptor().required
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelId {
    type Err = SeparationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelId::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| SeparationError::UnknownModel {
                name: s.to_string(),
            })
    }
}
