use crate::gates::{Gate, AURA_COLORS, HERO_TITLES};
use crate::hero::Identity;
use crate::profile::Profile;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Programming partner gates
// ---------------------------------------------------------------------------

/// Partner gates sit 88 degrees around the wheel, 22 gate positions on.
pub const PARTNER_OFFSET: u8 = 22;

pub fn evolution_gate(personality_sun: Gate) -> Gate {
    personality_sun.offset(PARTNER_OFFSET)
}

pub fn purpose_gate(design_sun: Gate) -> Gate {
    design_sun.offset(PARTNER_OFFSET)
}

// ---------------------------------------------------------------------------
// Identity synthesis
// ---------------------------------------------------------------------------

pub fn aura_color(personality_sun: Gate) -> &'static str {
    AURA_COLORS[(personality_sun.get() % AURA_COLORS.len() as u8) as usize]
}

/// Pool profile for a gate pair. Distinct from a chosen `Profile`: this is
/// the synthesized one shown on the identity card.
pub fn pool_profile(personality_sun: Gate, design_sun: Gate) -> Profile {
    let pool = Profile::all();
    let index = (personality_sun.get() as usize + design_sun.get() as usize) % pool.len();
    pool[index]
}

/// Title pick seeded from the gate pair, so the same chart always carries
/// the same title across sessions and machines.
pub fn hero_title(personality_sun: Gate, design_sun: Gate) -> &'static str {
    let seed = (personality_sun.get() as u64) << 8 | design_sun.get() as u64;
    let mut rng = StdRng::seed_from_u64(seed);
    HERO_TITLES[rng.gen_range(0..HERO_TITLES.len())]
}

/// Build the full identity card from the two sun gates. Strategy and theme
/// follow the personality gate's table row; authority follows the design
/// gate's circuit.
pub fn synthesize_identity(personality_sun: Gate, design_sun: Gate) -> Identity {
    let personality = personality_sun.info();
    let design = design_sun.info();

    Identity {
        title: hero_title(personality_sun, design_sun).to_string(),
        circuit: personality.circuit.as_str().to_string(),
        strategy: personality.circuit.strategy().to_string(),
        profile: pool_profile(personality_sun, design_sun).as_str().to_string(),
        authority: design.circuit.authority().label().to_string(),
        theme: personality.theme.to_string(),
        aura_color: aura_color(personality_sun).to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
