use crate::types::FrequencySignature;
use crate::Oracle;
use hero_core::hero::{Mantras, StoryArc};

// ---------------------------------------------------------------------------
// Fallback content
// ---------------------------------------------------------------------------

/// Generic mantras used when no oracle can answer. Not personalized, but
/// always available.
pub fn fallback_mantras() -> Mantras {
    Mantras::new([
        "I am aligned with my unique Hero Frequency".to_string(),
        "I embody my authentic power with cosmic purpose".to_string(),
        "I illuminate the path for others through my example".to_string(),
        "I transmit wisdom through aligned action".to_string(),
    ])
}

/// Generic seven-part journey used when no oracle can answer.
pub fn fallback_story() -> StoryArc {
    StoryArc {
        ordinary_matrix: "You lived in a world of expectations, following conventional paths."
            .to_string(),
        the_glitch: "Something shifted when you realized the conventional rules didn't apply to \
                     you."
            .to_string(),
        taking_the_pill: "You chose to dive deep into your authentic self.".to_string(),
        blueprint_revealed: "Your unique gates illuminated your cosmic blueprint.".to_string(),
        integration_challenges: "Learning to trust your inner authority while navigating the \
                                 world."
            .to_string(),
        frequency_mastery: "You learned to embody your gifts fully.".to_string(),
        transmission_mode: "Now you serve as a lighthouse for other heroes.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Degrading wrappers
// ---------------------------------------------------------------------------

/// Ask the oracle for mantras; on any failure hand the error to `on_miss`
/// and return the generic set. A single attempt, no retries.
pub fn mantras_or_fallback(
    oracle: &dyn Oracle,
    signature: &FrequencySignature,
    on_miss: impl FnOnce(&crate::OracleError),
) -> Mantras {
    oracle.mantras(signature).unwrap_or_else(|e| {
        on_miss(&e);
        fallback_mantras()
    })
}

/// Ask the oracle for the journey story; on any failure hand the error to
/// `on_miss` and return the generic arc. A single attempt, no retries.
pub fn mythos_or_fallback(
    oracle: &dyn Oracle,
    signature: &FrequencySignature,
    on_miss: impl FnOnce(&crate::OracleError),
) -> StoryArc {
    oracle.mythos(signature).unwrap_or_else(|e| {
        on_miss(&e);
        fallback_story()
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
