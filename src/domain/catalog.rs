//! Rate catalog defaults and validated configuration edits.

use thiserror::Error;

use super::entities::{LabourRate, LabourUnit, MaterialRate, PaintSurface, PresetConfig};

/// Job-level VAT rate in percent. Fixed at the UK standard rate; the preset
/// only controls whether VAT applies at all.
pub const VAT_RATE_PERCENT: f64 = 20.0;

/// Labour task keys priced by room quoting.
pub mod task {
    pub const PAINT_WALLS: &str = "paint_walls";
    pub const PAINT_CEILING: &str = "paint_ceiling";
    pub const PAINT_WOODWORK: &str = "paint_woodwork";
    pub const PAINT_DOOR: &str = "paint_door";
    pub const PAINT_WINDOW: &str = "paint_window";
    pub const STRIP_WALLPAPER: &str = "strip_wallpaper";
    pub const PREP_GENERAL: &str = "prep_general";
    pub const PREP_HEAVY: &str = "prep_heavy";

    /// Every task key the default preset must carry.
    pub const ALL: [&str; 8] = [
        PAINT_WALLS,
        PAINT_CEILING,
        PAINT_WOODWORK,
        PAINT_DOOR,
        PAINT_WINDOW,
        STRIP_WALLPAPER,
        PREP_GENERAL,
        PREP_HEAVY,
    ];
}

/// Misc cost keys priced by room quoting.
pub mod misc {
    /// Per door per coat.
    pub const DOOR_UNIT: &str = "door_unit";
    /// Per window per coat.
    pub const WINDOW_UNIT: &str = "window_unit";
    /// Per m² of wall plus ceiling.
    pub const PREP_GENERAL: &str = "prep_general";
    /// Per m² of wall plus ceiling when heavy prep is flagged.
    pub const PREP_HEAVY: &str = "prep_heavy";
    /// Flat per room.
    pub const SUNDRIES: &str = "sundries";

    /// Every misc key the default preset must carry.
    pub const ALL: [&str; 5] = [DOOR_UNIT, WINDOW_UNIT, PREP_GENERAL, PREP_HEAVY, SUNDRIES];
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("coverage per litre must be greater than zero")]
    NonPositiveCoverage,
    #[error("{0} must not be negative")]
    NegativeValue(&'static str),
    #[error("crew size must be at least one")]
    ZeroCrewSize,
}

impl Default for PresetConfig {
    /// The "Standard Residential" preset. Complete by construction: every
    /// [`PaintSurface`] variant, labour task key and misc cost key quoting can
    /// reference is present, so pricing never falls back to a zero rate.
    fn default() -> Self {
        let mut config = PresetConfig {
            name: "Standard Residential".to_string(),
            materials: Default::default(),
            labour: Default::default(),
            misc_costs: Default::default(),
            markup_percent: 20.0,
            vat_applicable: true,
            material_contingency_percent: 5.0,
            labour_contingency_percent: 10.0,
            default_crew_size: 2,
            hourly_charge_rate: 35.0,
        };

        let materials = [
            (PaintSurface::StandardWalls, 12.0, 15.0),
            (PaintSurface::DurableWalls, 10.0, 19.5),
            (PaintSurface::Ceiling, 11.0, 13.0),
            (PaintSurface::Woodwork, 16.0, 22.0),
            (PaintSurface::DoorFrame, 14.0, 22.0),
            (PaintSurface::WindowFrame, 14.0, 22.0),
            (PaintSurface::Radiator, 9.0, 24.0),
            (PaintSurface::Other, 12.0, 15.0),
        ];
        for (surface, coverage_per_litre, cost_per_litre) in materials {
            config.materials.insert(
                surface,
                MaterialRate {
                    coverage_per_litre,
                    cost_per_litre,
                },
            );
        }

        let labour = [
            (task::PAINT_WALLS, LabourUnit::Area, 0.15),
            (task::PAINT_CEILING, LabourUnit::Area, 0.18),
            (task::PAINT_WOODWORK, LabourUnit::Length, 0.12),
            (task::PAINT_DOOR, LabourUnit::Item, 0.75),
            (task::PAINT_WINDOW, LabourUnit::Item, 0.6),
            (task::STRIP_WALLPAPER, LabourUnit::Area, 0.35),
            (task::PREP_GENERAL, LabourUnit::Area, 0.05),
            (task::PREP_HEAVY, LabourUnit::Area, 0.12),
        ];
        for (key, unit, hours_per_unit_per_coat) in labour {
            config.labour.insert(
                key.to_string(),
                LabourRate {
                    unit,
                    hours_per_unit_per_coat,
                },
            );
        }

        let misc_costs = [
            (misc::DOOR_UNIT, 8.5),
            (misc::WINDOW_UNIT, 6.0),
            (misc::PREP_GENERAL, 0.4),
            (misc::PREP_HEAVY, 1.1),
            (misc::SUNDRIES, 15.0),
        ];
        for (key, rate) in misc_costs {
            config.misc_costs.insert(key.to_string(), rate);
        }

        config
    }
}

impl PresetConfig {
    /// Replace the material rate for a surface. The previous rate stays in
    /// place when the new one is invalid.
    pub fn set_material_rate(
        &mut self,
        surface: PaintSurface,
        rate: MaterialRate,
    ) -> Result<(), ConfigError> {
        if rate.coverage_per_litre <= 0.0 {
            return Err(ConfigError::NonPositiveCoverage);
        }
        if rate.cost_per_litre < 0.0 {
            return Err(ConfigError::NegativeValue("cost per litre"));
        }
        self.materials.insert(surface, rate);
        Ok(())
    }

    /// Replace the labour rate for a task key.
    pub fn set_labour_rate(
        &mut self,
        key: impl Into<String>,
        rate: LabourRate,
    ) -> Result<(), ConfigError> {
        if rate.hours_per_unit_per_coat < 0.0 {
            return Err(ConfigError::NegativeValue("hours per unit per coat"));
        }
        self.labour.insert(key.into(), rate);
        Ok(())
    }

    /// Replace a misc cost rate.
    pub fn set_misc_rate(&mut self, key: impl Into<String>, rate: f64) -> Result<(), ConfigError> {
        if rate < 0.0 {
            return Err(ConfigError::NegativeValue("misc rate"));
        }
        self.misc_costs.insert(key.into(), rate);
        Ok(())
    }

    pub fn set_markup_percent(&mut self, percent: f64) -> Result<(), ConfigError> {
        if percent < 0.0 {
            return Err(ConfigError::NegativeValue("markup percent"));
        }
        self.markup_percent = percent;
        Ok(())
    }

    pub fn set_material_contingency_percent(&mut self, percent: f64) -> Result<(), ConfigError> {
        if percent < 0.0 {
            return Err(ConfigError::NegativeValue("material contingency percent"));
        }
        self.material_contingency_percent = percent;
        Ok(())
    }

    pub fn set_labour_contingency_percent(&mut self, percent: f64) -> Result<(), ConfigError> {
        if percent < 0.0 {
            return Err(ConfigError::NegativeValue("labour contingency percent"));
        }
        self.labour_contingency_percent = percent;
        Ok(())
    }

    pub fn set_hourly_charge_rate(&mut self, rate: f64) -> Result<(), ConfigError> {
        if rate < 0.0 {
            return Err(ConfigError::NegativeValue("hourly charge rate"));
        }
        self.hourly_charge_rate = rate;
        Ok(())
    }

    pub fn set_default_crew_size(&mut self, crew_size: u32) -> Result<(), ConfigError> {
        if crew_size == 0 {
            return Err(ConfigError::ZeroCrewSize);
        }
        self.default_crew_size = crew_size;
        Ok(())
    }

    /// Check a whole preset, e.g. one deserialized from a job file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for rate in self.materials.values() {
            if rate.coverage_per_litre <= 0.0 {
                return Err(ConfigError::NonPositiveCoverage);
            }
            if rate.cost_per_litre < 0.0 {
                return Err(ConfigError::NegativeValue("cost per litre"));
            }
        }
        for rate in self.labour.values() {
            if rate.hours_per_unit_per_coat < 0.0 {
                return Err(ConfigError::NegativeValue("hours per unit per coat"));
            }
        }
        for rate in self.misc_costs.values() {
            if *rate < 0.0 {
                return Err(ConfigError::NegativeValue("misc rate"));
            }
        }
        if self.markup_percent < 0.0 {
            return Err(ConfigError::NegativeValue("markup percent"));
        }
        if self.material_contingency_percent < 0.0 {
            return Err(ConfigError::NegativeValue("material contingency percent"));
        }
        if self.labour_contingency_percent < 0.0 {
            return Err(ConfigError::NegativeValue("labour contingency percent"));
        }
        if self.hourly_charge_rate < 0.0 {
            return Err(ConfigError::NegativeValue("hourly charge rate"));
        }
        if self.default_crew_size == 0 {
            return Err(ConfigError::ZeroCrewSize);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_covers_every_surface_and_key() {
        let config = PresetConfig::default();
        for surface in PaintSurface::ALL {
            assert!(
                config.materials.contains_key(&surface),
                "missing material rate for {surface:?}"
            );
        }
        for key in task::ALL {
            assert!(config.labour.contains_key(key), "missing labour rate {key}");
        }
        for key in misc::ALL {
            assert!(
                config.misc_costs.contains_key(key),
                "missing misc cost {key}"
            );
        }
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejected_material_rate_keeps_previous_value() {
        let mut config = PresetConfig::default();
        let before = config.materials[&PaintSurface::StandardWalls];

        let result = config.set_material_rate(
            PaintSurface::StandardWalls,
            MaterialRate {
                coverage_per_litre: 0.0,
                cost_per_litre: 12.0,
            },
        );

        assert!(matches!(result, Err(ConfigError::NonPositiveCoverage)));
        assert_eq!(config.materials[&PaintSurface::StandardWalls], before);
    }

    #[test]
    fn rejected_percent_keeps_previous_value() {
        let mut config = PresetConfig::default();
        assert!(config.set_markup_percent(-1.0).is_err());
        assert_eq!(config.markup_percent, 20.0);

        assert!(config.set_markup_percent(32.5).is_ok());
        assert_eq!(config.markup_percent, 32.5);
    }

    #[test]
    fn validate_flags_bad_deserialized_preset() {
        let mut config = PresetConfig::default();
        config.labour.insert(
            "glossing".to_string(),
            LabourRate {
                unit: LabourUnit::Area,
                hours_per_unit_per_coat: -0.5,
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn crew_size_must_be_positive() {
        let mut config = PresetConfig::default();
        assert!(matches!(
            config.set_default_crew_size(0),
            Err(ConfigError::ZeroCrewSize)
        ));
        assert_eq!(config.default_crew_size, 2);
    }
}
