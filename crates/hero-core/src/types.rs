use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// Every stage a journey can occupy, across both flows. Which stages are
/// reachable, and in what order, is the flow graph's business (`flow.rs`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    Welcome,
    Input,
    Reveal,
    Mythos,
    Final,
    TypeSelection,
    TypeReveal,
    ProfileSelection,
    ProfileReveal,
    AuthoritySelection,
    AuthorityReveal,
    GateInput,
    FinalReveal,
}

impl Stage {
    pub fn all() -> &'static [Stage] {
        &[
            Stage::Welcome,
            Stage::Input,
            Stage::Reveal,
            Stage::Mythos,
            Stage::Final,
            Stage::TypeSelection,
            Stage::TypeReveal,
            Stage::ProfileSelection,
            Stage::ProfileReveal,
            Stage::AuthoritySelection,
            Stage::AuthorityReveal,
            Stage::GateInput,
            Stage::FinalReveal,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Welcome => "welcome",
            Stage::Input => "input",
            Stage::Reveal => "reveal",
            Stage::Mythos => "mythos",
            Stage::Final => "final",
            Stage::TypeSelection => "typeSelection",
            Stage::TypeReveal => "typeReveal",
            Stage::ProfileSelection => "profileSelection",
            Stage::ProfileReveal => "profileReveal",
            Stage::AuthoritySelection => "authoritySelection",
            Stage::AuthorityReveal => "authorityReveal",
            Stage::GateInput => "gateInput",
            Stage::FinalReveal => "finalReveal",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::Input => "Gate Input",
            Stage::Reveal => "Reveal",
            Stage::Mythos => "Mythos",
            Stage::Final => "Final",
            Stage::TypeSelection => "Type Selection",
            Stage::TypeReveal => "Type Reveal",
            Stage::ProfileSelection => "Profile Selection",
            Stage::ProfileReveal => "Profile Reveal",
            Stage::AuthoritySelection => "Authority Selection",
            Stage::AuthorityReveal => "Authority Reveal",
            Stage::GateInput => "Gate Input",
            Stage::FinalReveal => "Grand Reveal",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = crate::error::HeroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "welcome" => Ok(Stage::Welcome),
            "input" => Ok(Stage::Input),
            "reveal" => Ok(Stage::Reveal),
            "mythos" => Ok(Stage::Mythos),
            "final" => Ok(Stage::Final),
            "typeSelection" => Ok(Stage::TypeSelection),
            "typeReveal" => Ok(Stage::TypeReveal),
            "profileSelection" => Ok(Stage::ProfileSelection),
            "profileReveal" => Ok(Stage::ProfileReveal),
            "authoritySelection" => Ok(Stage::AuthoritySelection),
            "authorityReveal" => Ok(Stage::AuthorityReveal),
            "gateInput" => Ok(Stage::GateInput),
            "finalReveal" => Ok(Stage::FinalReveal),
            _ => Err(crate::error::HeroError::InvalidStage(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// HeroType
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeroType {
    Generator,
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

impl HeroType {
    pub fn all() -> &'static [HeroType] {
        &[
            HeroType::Generator,
            HeroType::ManifestingGenerator,
            HeroType::Projector,
            HeroType::Manifestor,
            HeroType::Reflector,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HeroType::Generator => "generator",
            HeroType::ManifestingGenerator => "manifestingGenerator",
            HeroType::Projector => "projector",
            HeroType::Manifestor => "manifestor",
            HeroType::Reflector => "reflector",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HeroType::Generator => "Generator",
            HeroType::ManifestingGenerator => "Manifesting Generator",
            HeroType::Projector => "Projector",
            HeroType::Manifestor => "Manifestor",
            HeroType::Reflector => "Reflector",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            HeroType::Generator => "Sustained life force that builds when responding",
            HeroType::ManifestingGenerator => "Multi-track builder that moves fast and skips steps",
            HeroType::Projector => "Guide who reads the system and directs its energy",
            HeroType::Manifestor => "Initiator who acts first and informs after",
            HeroType::Reflector => "Lunar mirror sampling the health of the whole",
        }
    }
}

impl fmt::Display for HeroType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HeroType {
    type Err = crate::error::HeroError;

    // Accepts the wire name and a kebab-case alias for terminal input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "generator" => Ok(HeroType::Generator),
            "manifestingGenerator" | "manifesting-generator" => {
                Ok(HeroType::ManifestingGenerator)
            }
            "projector" => Ok(HeroType::Projector),
            "manifestor" => Ok(HeroType::Manifestor),
            "reflector" => Ok(HeroType::Reflector),
            _ => Err(crate::error::HeroError::InvalidHeroType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Authority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Authority {
    Emotional,
    Sacral,
    Splenic,
    Ego,
    SelfProjected,
    MentalProjector,
    Lunar,
}

impl Authority {
    pub fn all() -> &'static [Authority] {
        &[
            Authority::Emotional,
            Authority::Sacral,
            Authority::Splenic,
            Authority::Ego,
            Authority::SelfProjected,
            Authority::MentalProjector,
            Authority::Lunar,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Authority::Emotional => "emotional",
            Authority::Sacral => "sacral",
            Authority::Splenic => "splenic",
            Authority::Ego => "ego",
            Authority::SelfProjected => "selfProjected",
            Authority::MentalProjector => "mentalProjector",
            Authority::Lunar => "lunar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Authority::Emotional => "Emotional",
            Authority::Sacral => "Sacral",
            Authority::Splenic => "Splenic",
            Authority::Ego => "Ego",
            Authority::SelfProjected => "Self-Projected",
            Authority::MentalProjector => "Mental Projector",
            Authority::Lunar => "Lunar",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Authority::Emotional => "Clarity arrives over time, riding out the wave",
            Authority::Sacral => "Gut response in the moment, uh-huh or uh-uh",
            Authority::Splenic => "Quiet instant knowing that never repeats itself",
            Authority::Ego => "Willpower speaks: what do I want, what will I commit to",
            Authority::SelfProjected => "Truth surfaces in your own voice as you talk it out",
            Authority::MentalProjector => "Sounding board counsel from trusted environments",
            Authority::Lunar => "A full lunar cycle before the big decisions",
        }
    }
}

impl fmt::Display for Authority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Authority {
    type Err = crate::error::HeroError;

    // Accepts the wire name and a kebab-case alias for terminal input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "emotional" => Ok(Authority::Emotional),
            "sacral" => Ok(Authority::Sacral),
            "splenic" => Ok(Authority::Splenic),
            "ego" => Ok(Authority::Ego),
            "selfProjected" | "self-projected" => Ok(Authority::SelfProjected),
            "mentalProjector" | "mental-projector" => Ok(Authority::MentalProjector),
            "lunar" => Ok(Authority::Lunar),
            _ => Err(crate::error::HeroError::InvalidAuthority(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Circuit
// ---------------------------------------------------------------------------

/// Circuit family a gate belongs to. Drives the strategy and authority
/// halves of identity synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Circuit {
    Individual,
    Tribal,
    Collective,
}

impl Circuit {
    pub fn as_str(self) -> &'static str {
        match self {
            Circuit::Individual => "Individual",
            Circuit::Tribal => "Tribal",
            Circuit::Collective => "Collective",
        }
    }

    pub fn strategy(self) -> &'static str {
        match self {
            Circuit::Individual => "To Inform",
            Circuit::Tribal => "To Respond",
            Circuit::Collective => "To Wait for Recognition",
        }
    }

    pub fn authority(self) -> Authority {
        match self {
            Circuit::Individual => Authority::Emotional,
            Circuit::Tribal => Authority::Sacral,
            Circuit::Collective => Authority::Splenic,
        }
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
