use crate::derive;
use crate::gates::Gate;
use crate::profile::Profile;
use crate::types::{Authority, HeroType};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Presentation bundle synthesized from the two sun gates. Self-contained
/// strings: a snapshot viewer needs no lookup tables to render one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub title: String,
    #[serde(rename = "type")]
    pub circuit: String,
    pub strategy: String,
    pub profile: String,
    pub authority: String,
    pub theme: String,
    pub aura_color: String,
}

// ---------------------------------------------------------------------------
// Mantras
// ---------------------------------------------------------------------------

/// Exactly four mantra lines. The count is part of the type; wire input
/// with any other count, or with blank lines, is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Mantras([String; 4]);

impl Mantras {
    pub const COUNT: usize = 4;

    pub fn new(lines: [String; 4]) -> Mantras {
        Mantras(lines)
    }

    pub fn lines(&self) -> &[String; 4] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Mantras {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Mantras, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let lines = <[String; 4]>::deserialize(deserializer)?;
        if let Some(i) = lines.iter().position(|l| l.trim().is_empty()) {
            return Err(serde::de::Error::custom(format!("mantra {} is blank", i + 1)));
        }
        Ok(Mantras(lines))
    }
}

// ---------------------------------------------------------------------------
// StoryArc
// ---------------------------------------------------------------------------

/// The seven-part hero's journey. Wire keys are the display headings; a
/// payload missing any part does not deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoryArc {
    #[serde(rename = "Ordinary Matrix")]
    pub ordinary_matrix: String,
    #[serde(rename = "The Glitch")]
    pub the_glitch: String,
    #[serde(rename = "Taking the Pill")]
    pub taking_the_pill: String,
    #[serde(rename = "Blueprint Revealed")]
    pub blueprint_revealed: String,
    #[serde(rename = "Integration Challenges")]
    pub integration_challenges: String,
    #[serde(rename = "Frequency Mastery")]
    pub frequency_mastery: String,
    #[serde(rename = "Transmission Mode")]
    pub transmission_mode: String,
}

impl StoryArc {
    pub const PART_COUNT: usize = 7;

    /// Parts in narrative order, paired with their headings.
    pub fn parts(&self) -> [(&'static str, &str); 7] {
        [
            ("Ordinary Matrix", &self.ordinary_matrix),
            ("The Glitch", &self.the_glitch),
            ("Taking the Pill", &self.taking_the_pill),
            ("Blueprint Revealed", &self.blueprint_revealed),
            ("Integration Challenges", &self.integration_challenges),
            ("Frequency Mastery", &self.frequency_mastery),
            ("Transmission Mode", &self.transmission_mode),
        ]
    }
}

// ---------------------------------------------------------------------------
// HeroData
// ---------------------------------------------------------------------------

/// Everything collected over a journey. Accretes across stage transitions
/// and is only ever reset wholesale by a restart; individual fields are
/// never cleared. Unknown wire fields are tolerated so older or richer
/// snapshots still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_sun: Option<Gate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_sun: Option<Gate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evolution_gate: Option<Gate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose_gate: Option<Gate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub hero_type: Option<HeroType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authority: Option<Authority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mantras: Option<Mantras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<StoryArc>,
}

impl HeroData {
    pub fn is_empty(&self) -> bool {
        *self == HeroData::default()
    }

    /// Both suns plus both derived gates.
    pub fn has_gates(&self) -> bool {
        self.personality_sun.is_some()
            && self.design_sun.is_some()
            && self.evolution_gate.is_some()
            && self.purpose_gate.is_some()
    }

    /// A journey ready to share or export: gates, identity, mantras, story.
    pub fn is_complete(&self) -> bool {
        self.has_gates()
            && self.identity.is_some()
            && self.mantras.is_some()
            && self.story.is_some()
    }

    /// Shallow additive merge. Gate submissions recompute the derived gates
    /// from scratch; nothing here ever clears a field.
    pub fn apply(&mut self, payload: StagePayload) {
        match payload {
            StagePayload::Empty => {}
            StagePayload::Gates {
                personality_sun,
                design_sun,
            } => {
                self.personality_sun = Some(personality_sun);
                self.design_sun = Some(design_sun);
                self.evolution_gate = Some(derive::evolution_gate(personality_sun));
                self.purpose_gate = Some(derive::purpose_gate(design_sun));
            }
            StagePayload::TypeChoice { hero_type } => {
                self.hero_type = Some(hero_type);
            }
            StagePayload::ProfileChoice { profile } => {
                self.profile = Some(profile);
            }
            StagePayload::AuthorityChoice { authority } => {
                self.authority = Some(authority);
            }
            StagePayload::Revelation { identity, mantras } => {
                self.identity = Some(identity);
                self.mantras = Some(mantras);
            }
            StagePayload::Mythos { story } => {
                self.story = Some(story);
            }
            StagePayload::GrandRevelation {
                identity,
                mantras,
                story,
            } => {
                self.identity = Some(identity);
                self.mantras = Some(mantras);
                self.story = Some(story);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// StagePayload
// ---------------------------------------------------------------------------

/// Data carried by a single forward transition. Each variant names exactly
/// the fields it may merge, so a half-formed merge (an identity without its
/// mantras, say) cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum StagePayload {
    Empty,
    Gates {
        personality_sun: Gate,
        design_sun: Gate,
    },
    TypeChoice {
        hero_type: HeroType,
    },
    ProfileChoice {
        profile: Profile,
    },
    AuthorityChoice {
        authority: Authority,
    },
    Revelation {
        identity: Identity,
        mantras: Mantras,
    },
    Mythos {
        story: StoryArc,
    },
    GrandRevelation {
        identity: Identity,
        mantras: Mantras,
        story: StoryArc,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
