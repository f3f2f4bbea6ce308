use hero_core::gates::Gate;
use hero_core::hero::HeroData;
use hero_core::profile::Profile;
use hero_core::types::{Authority, HeroType};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// FrequencySignature
// ---------------------------------------------------------------------------

/// The slice of hero data that content generation works from: the four
/// gates always, plus whatever explicit selections the journey gathered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrequencySignature {
    pub personality_sun: Gate,
    pub design_sun: Gate,
    pub evolution_gate: Gate,
    pub purpose_gate: Gate,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub hero_type: Option<HeroType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<Authority>,
}

impl FrequencySignature {
    /// `None` until the journey has collected its gates.
    pub fn from_hero(data: &HeroData) -> Option<FrequencySignature> {
        Some(FrequencySignature {
            personality_sun: data.personality_sun?,
            design_sun: data.design_sun?,
            evolution_gate: data.evolution_gate?,
            purpose_gate: data.purpose_gate?,
            hero_type: data.hero_type,
            profile: data.profile,
            authority: data.authority,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
