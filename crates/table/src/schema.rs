//! The closed set of recognised predictor columns.

/// A recognised predictor (or calibration) column.
///
/// The schema is closed: models declare their requirements as `Column`
/// lists and the table checks them before evaluation, so an absent column
/// fails early with a precise name instead of a late lookup error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    /// Clearness index kt (observed over extraterrestrial irradiance).
    ClearnessIndex,
    /// Daily clearness index.
    DailyClearness,
    /// Apparent solar time.
    ApparentSolarTime,
    /// Solar altitude angle.
    SolarAltitude,
    /// Persistence feature derived from consecutive clearness indices.
    Persistence,
    /// Deviation between the clear-sky clearness index and kt.
    ClearSkyDeviation,
    /// Portion of the diffuse fraction attributable to cloud enhancement.
    CloudEnhancement,
    /// Global clear-sky radiation.
    ClearSkyGlobal,
    /// Clear-sky index ratio (observed over modelled clear-sky irradiance).
    ClearSkyIndex,
    /// Hourly clearness index.
    HourlyClearness,
    /// Observed diffuse fraction, used only to calibrate the fitted model.
    DiffuseFraction,
}

impl Column {
    /// All recognised columns, in canonical order.
    pub const ALL: [Column; 11] = [
        Column::ClearnessIndex,
        Column::DailyClearness,
        Column::ApparentSolarTime,
        Column::SolarAltitude,
        Column::Persistence,
        Column::ClearSkyDeviation,
        Column::CloudEnhancement,
        Column::ClearSkyGlobal,
        Column::ClearSkyIndex,
        Column::HourlyClearness,
        Column::DiffuseFraction,
    ];

    /// Canonical column name, as it appears in input files.
    pub fn name(self) -> &'static str {
        match self {
            Column::ClearnessIndex => "clearness_index",
            Column::DailyClearness => "daily_kt",
            Column::ApparentSolarTime => "ast",
            Column::SolarAltitude => "solar_altitude",
            Column::Persistence => "persistence",
            Column::ClearSkyDeviation => "k_tc",
            Column::CloudEnhancement => "k_de",
            Column::ClearSkyGlobal => "ghi_clear_sky",
            Column::ClearSkyIndex => "k_csi",
            Column::HourlyClearness => "hourly_kt",
            Column::DiffuseFraction => "diffuse_fraction",
        }
    }

    /// Parses a canonical column name. Returns `None` for unknown names.
    pub fn parse(name: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.name() == name)
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for col in Column::ALL {
            assert_eq!(Column::parse(col.name()), Some(col));
        }
    }

    #[test]
    fn names_are_unique() {
        for (i, a) in Column::ALL.iter().enumerate() {
            for b in &Column::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(Column::parse("not_a_column"), None);
        assert_eq!(Column::parse(""), None);
        // Names are case-sensitive.
        assert_eq!(Column::parse("Clearness_Index"), None);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Column::ClearSkyDeviation.to_string(), "k_tc");
        assert_eq!(Column::DiffuseFraction.to_string(), "diffuse_fraction");
    }
}
