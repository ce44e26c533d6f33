use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use shelfpack::io::ext_repr::ExtCutInstance;

/// The packer works in millimeters. One inch of user input becomes this many internal units.
pub const INCH_TO_MM: f32 = 25.4;

/// mm² to ft², for imperial area display.
pub const SQ_MM_TO_SQ_FT: f32 = 1.0 / (INCH_TO_MM * INCH_TO_MM * 144.0);

/// Unit system of an input file. The core is unit-agnostic; conversion happens
/// here, before the packer is invoked, and never inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnitSystem {
    /// Lengths in millimeters
    #[default]
    Metric,
    /// Lengths in inches
    Imperial,
}

impl UnitSystem {
    /// Converts a length in this unit system to the internal unit (mm).
    pub fn to_internal(self, v: f32) -> f32 {
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Imperial => v * INCH_TO_MM,
        }
    }

    /// Converts an internal length (mm) back to this unit system.
    pub fn from_internal(self, v: f32) -> f32 {
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Imperial => v / INCH_TO_MM,
        }
    }

    /// Converts an internal area (mm²) to this system's display area unit (mm² or ft²).
    pub fn area_from_internal(self, v: f32) -> f32 {
        match self {
            UnitSystem::Metric => v,
            UnitSystem::Imperial => v * SQ_MM_TO_SQ_FT,
        }
    }

    /// Label of this system's display area unit.
    pub fn area_unit(self) -> &'static str {
        match self {
            UnitSystem::Metric => "mm²",
            UnitSystem::Imperial => "ft²",
        }
    }
}

/// Converts every length in an external instance to the internal unit.
/// A no-op for metric input.
pub fn instance_to_internal(mut ext_instance: ExtCutInstance, units: UnitSystem) -> ExtCutInstance {
    ext_instance.sheet.width = units.to_internal(ext_instance.sheet.width);
    ext_instance.sheet.height = units.to_internal(ext_instance.sheet.height);
    ext_instance.kerf = units.to_internal(ext_instance.kerf);
    for part in &mut ext_instance.parts {
        part.width = units.to_internal(part.width);
        part.height = units.to_internal(part.height);
    }
    ext_instance
}
