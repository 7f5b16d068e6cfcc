//! Weapon reinforcement curves

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Highest reinforcement level (+25)
pub const MAX_LEVEL: u32 = 25;

/// Most levels a reinforcement curve can have (+0 through +25)
pub const MAX_LEVELS: usize = MAX_LEVEL as usize + 1;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DamageMultiplier {
    pub physical: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    pub stamina: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScalingMultiplier {
    pub strength: f64,
    pub dexterity: f64,
    pub intelligence: f64,
    pub faith: f64,
    pub arcane: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GuardMultiplier {
    pub physical: f64,
    pub magic: f64,
    pub fire: f64,
    pub lightning: f64,
    pub holy: f64,
    pub guard_boost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResistanceMultiplier {
    pub bleed: f64,
    pub frostbite: f64,
    pub poison: f64,
    pub scarlet_rot: f64,
    pub sleep: f64,
    pub madness: f64,
    pub death_blight: f64,
}

impl DamageMultiplier {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("physical", self.physical),
            ("magic", self.magic),
            ("fire", self.fire),
            ("lightning", self.lightning),
            ("holy", self.holy),
            ("stamina", self.stamina),
        ]
    }
}

impl ScalingMultiplier {
    fn named(&self) -> [(&'static str, f64); 5] {
        [
            ("strength", self.strength),
            ("dexterity", self.dexterity),
            ("intelligence", self.intelligence),
            ("faith", self.faith),
            ("arcane", self.arcane),
        ]
    }
}

impl GuardMultiplier {
    fn named(&self) -> [(&'static str, f64); 6] {
        [
            ("physical", self.physical),
            ("magic", self.magic),
            ("fire", self.fire),
            ("lightning", self.lightning),
            ("holy", self.holy),
            ("guard_boost", self.guard_boost),
        ]
    }
}

impl ResistanceMultiplier {
    fn named(&self) -> [(&'static str, f64); 7] {
        [
            ("bleed", self.bleed),
            ("frostbite", self.frostbite),
            ("poison", self.poison),
            ("scarlet_rot", self.scarlet_rot),
            ("sleep", self.sleep),
            ("madness", self.madness),
            ("death_blight", self.death_blight),
        ]
    }
}

/// Multipliers applied at one reinforcement level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReinforcementLevel {
    pub level: u32,
    pub damage: DamageMultiplier,
    pub scaling: ScalingMultiplier,
    pub guard: GuardMultiplier,
    pub resistance: ResistanceMultiplier,
}

impl ReinforcementLevel {
    /// Level must be 0..=25 and every multiplier non-negative
    pub fn validate(&self) -> Result<()> {
        if self.level > MAX_LEVEL {
            return Err(Error::SchemaViolation(format!(
                "reinforcement level {} outside 0..={}",
                self.level, MAX_LEVEL
            )));
        }

        let groups: [(&str, &[(&str, f64)]); 4] = [
            ("damage", &self.damage.named()),
            ("scaling", &self.scaling.named()),
            ("guard", &self.guard.named()),
            ("resistance", &self.resistance.named()),
        ];

        for (group, fields) in groups {
            for (field, value) in fields {
                if value.is_nan() || *value < 0.0 {
                    return Err(Error::SchemaViolation(format!(
                        "reinforcement level {} {}.{} is not a non-negative number: {}",
                        self.level, group, field, value
                    )));
                }
            }
        }

        Ok(())
    }
}

/// A reinforcement curve of 1 to 26 levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ReinforcementLevel>",
    into = "Vec<ReinforcementLevel>"
)]
pub struct Reinforcement(Vec<ReinforcementLevel>);

impl Reinforcement {
    pub fn new(levels: Vec<ReinforcementLevel>) -> Result<Self> {
        if !(1..=MAX_LEVELS).contains(&levels.len()) {
            return Err(Error::SchemaViolation(format!(
                "reinforcement must have between 1 and {} levels, got {}",
                MAX_LEVELS,
                levels.len()
            )));
        }

        for level in &levels {
            level.validate()?;
        }

        Ok(Self(levels))
    }

    pub fn levels(&self) -> &[ReinforcementLevel] {
        &self.0
    }

    pub fn level(&self, level: u32) -> Option<&ReinforcementLevel> {
        self.0.iter().find(|l| l.level == level)
    }

    /// Highest level present in the curve
    pub fn max_level(&self) -> u32 {
        self.0.iter().map(|l| l.level).max().unwrap_or_default()
    }
}

impl TryFrom<Vec<ReinforcementLevel>> for Reinforcement {
    type Error = Error;

    fn try_from(levels: Vec<ReinforcementLevel>) -> Result<Self> {
        Self::new(levels)
    }
}

impl From<Reinforcement> for Vec<ReinforcementLevel> {
    fn from(reinforcement: Reinforcement) -> Self {
        reinforcement.0
    }
}
