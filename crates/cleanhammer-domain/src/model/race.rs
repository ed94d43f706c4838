//! Race - The lineage of a character
//!
//! Race is a Value Object - two races with the same main race and
//! subrace are equal. It carries no invariants of its own; the
//! friendship rule only reads the main race.

use serde::{Deserialize, Serialize};

/// The four great peoples of the world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MainRaceName {
    Elf,
    Dwarf,
    Mankind,
    /// Orcs, goblins and their kin
    Greenskin,
}

impl MainRaceName {
    pub fn display_name(&self) -> &'static str {
        match self {
            MainRaceName::Elf => "Elf",
            MainRaceName::Dwarf => "Dwarf",
            MainRaceName::Mankind => "Mankind",
            MainRaceName::Greenskin => "Greenskin",
        }
    }

    pub fn is_greenskin(&self) -> bool {
        matches!(self, MainRaceName::Greenskin)
    }

    /// Get all main races (useful for iteration)
    pub fn all() -> &'static [MainRaceName] {
        &[
            MainRaceName::Elf,
            MainRaceName::Dwarf,
            MainRaceName::Mankind,
            MainRaceName::Greenskin,
        ]
    }
}

impl core::str::FromStr for MainRaceName {
    type Err = String;

    /// Case-insensitive, e.g. "greenskin" or "ELF"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MainRaceName::all()
            .iter()
            .find(|r| r.display_name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("unknown race '{}'", s))
    }
}

impl core::fmt::Display for MainRaceName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Race - main race plus a free-form subrace ("Wood", "Orc", "Imperial")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    main_race_name: MainRaceName,
    subrace: String,
}

impl Race {
    pub fn new(main_race_name: MainRaceName, subrace: impl Into<String>) -> Self {
        Self {
            main_race_name,
            subrace: subrace.into(),
        }
    }

    pub fn main_race_name(&self) -> MainRaceName {
        self.main_race_name
    }

    pub fn subrace(&self) -> &str {
        &self.subrace
    }
}

impl core::fmt::Display for Race {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({})", self.main_race_name, self.subrace)
    }
}
