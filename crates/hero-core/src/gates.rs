use crate::error::{HeroError, Result};
use crate::types::Circuit;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// A hexagram gate number. Always in 1..=64; anything else is rejected at
/// construction, parsing and deserialization alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Gate(u8);

impl Gate {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 64;

    pub fn new(n: u8) -> Result<Gate> {
        if (Gate::MIN..=Gate::MAX).contains(&n) {
            Ok(Gate(n))
        } else {
            Err(HeroError::InvalidGate(n.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Static lookup row for this gate. Total over the valid range.
    pub fn info(self) -> &'static GateInfo {
        &GATES[(self.0 - 1) as usize]
    }

    /// The gate `steps` positions further around the wheel, wrapping from
    /// 64 back to 1.
    pub fn offset(self, steps: u8) -> Gate {
        Gate((self.0 - 1 + steps) % 64 + 1)
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Gate {
    type Err = HeroError;

    fn from_str(s: &str) -> Result<Gate> {
        let n: u8 = s
            .parse()
            .map_err(|_| HeroError::InvalidGate(s.to_string()))?;
        Gate::new(n)
    }
}

impl<'de> Deserialize<'de> for Gate {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Gate, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let n = u8::deserialize(deserializer)?;
        Gate::new(n).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// GateInfo
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GateInfo {
    pub name: &'static str,
    pub circuit: Circuit,
    pub theme: &'static str,
}

const fn gate(name: &'static str, circuit: Circuit, theme: &'static str) -> GateInfo {
    GateInfo {
        name,
        circuit,
        theme,
    }
}

use Circuit::{Collective, Individual, Tribal};

/// The full wheel, indexed by gate number minus one.
pub static GATES: [GateInfo; 64] = [
    gate("The Creative", Individual, "Self-Expression"),
    gate("The Receptive", Individual, "Direction"),
    gate("Ordering", Individual, "Innovation"),
    gate("Youthful Folly", Individual, "Answers"),
    gate("Waiting", Individual, "Patterns"),
    gate("Conflict", Tribal, "Intimacy"),
    gate("The Army", Collective, "Leadership"),
    gate("Holding Together", Individual, "Contribution"),
    gate("The Taming Power", Collective, "Focus"),
    gate("Treading", Individual, "Behavior"),
    gate("Peace", Collective, "Ideas"),
    gate("Standstill", Individual, "Caution"),
    gate("Fellowship", Collective, "Listening"),
    gate("Great Possession", Individual, "Prosperity"),
    gate("Modesty", Collective, "Extremes"),
    gate("Enthusiasm", Collective, "Skills"),
    gate("Following", Collective, "Opinions"),
    gate("Correction", Collective, "Judgment"),
    gate("Approach", Tribal, "Sensitivity"),
    gate("Contemplation", Individual, "The Now"),
    gate("Biting Through", Tribal, "Control"),
    gate("Grace", Individual, "Openness"),
    gate("Splitting Apart", Individual, "Assimilation"),
    gate("Return", Individual, "Rationalizing"),
    gate("Innocence", Individual, "Spirit"),
    gate("The Taming of Power", Tribal, "Persuasion"),
    gate("Nourishment", Tribal, "Caring"),
    gate("Preponderance", Individual, "Purpose"),
    gate("The Abysmal", Collective, "Perseverance"),
    gate("The Clinging Fire", Collective, "Feelings"),
    gate("Influence", Collective, "Leading"),
    gate("Duration", Tribal, "Continuity"),
    gate("Retreat", Collective, "Privacy"),
    gate("Great Power", Individual, "Momentum"),
    gate("Progress", Collective, "Change"),
    gate("Darkening of Light", Collective, "Crisis"),
    gate("The Family", Tribal, "Friendship"),
    gate("Opposition", Individual, "Struggle"),
    gate("Obstruction", Individual, "Provocation"),
    gate("Deliverance", Tribal, "Resolve"),
    gate("Decrease", Collective, "Imagination"),
    gate("Increase", Collective, "Growth"),
    gate("Breakthrough", Individual, "Insight"),
    gate("Coming to Meet", Tribal, "Alertness"),
    gate("Gathering Together", Tribal, "Dominion"),
    gate("Pushing Upward", Collective, "Serendipity"),
    gate("Oppression", Collective, "Realization"),
    gate("The Well", Collective, "Depth"),
    gate("Revolution", Tribal, "Principles"),
    gate("The Cauldron", Tribal, "Values"),
    gate("The Arousing", Individual, "Shock"),
    gate("Keeping Still", Collective, "Stillness"),
    gate("Development", Collective, "Beginnings"),
    gate("The Marrying Maiden", Tribal, "Ambition"),
    gate("Abundance", Individual, "Emotion"),
    gate("The Wanderer", Collective, "Stimulation"),
    gate("The Gentle", Individual, "Intuition"),
    gate("The Joyous", Collective, "Vitality"),
    gate("Dispersion", Tribal, "Bonding"),
    gate("Limitation", Individual, "Acceptance"),
    gate("Inner Truth", Individual, "Mystery"),
    gate("Small Preponderance", Collective, "Detail"),
    gate("After Completion", Collective, "Doubts"),
    gate("Before Completion", Collective, "Confusion"),
];

// ---------------------------------------------------------------------------
// Shared palettes
// ---------------------------------------------------------------------------

/// Aura colors, picked by `personality_sun % 5`.
pub static AURA_COLORS: [&str; 5] = ["#F49558", "#D35E0E", "#409FA1", "#F6D541", "#244A49"];

/// Hero title pool for identity synthesis.
pub static HERO_TITLES: [&str; 8] = [
    "The Cosmic Architect",
    "The Frequency Master",
    "The Blueprint Keeper",
    "The Pattern Weaver",
    "The Energy Transmitter",
    "The Quantum Navigator",
    "The Stellar Catalyst",
    "The Dimensional Bridge",
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
