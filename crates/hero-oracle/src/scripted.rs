use crate::types::FrequencySignature;
use crate::{Oracle, Result};
use hero_core::hero::{Mantras, StoryArc};

// ---------------------------------------------------------------------------
// ScriptedOracle
// ---------------------------------------------------------------------------

/// Built-in generator: fixed templates keyed on the gate numbers. Fully
/// deterministic and offline, and therefore also the reference shape for
/// what any remote generator must return.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScriptedOracle;

impl Oracle for ScriptedOracle {
    fn mantras(&self, signature: &FrequencySignature) -> Result<Mantras> {
        Ok(Mantras::new([
            format!(
                "I am the architect of my own cosmic destiny, aligned with gate {}",
                signature.personality_sun
            ),
            "My unique frequency illuminates the path for others to follow".to_string(),
            format!(
                "I embody the wisdom of gate {} in every decision I make",
                signature.design_sun
            ),
            "I transmit my authentic power through purposeful action and divine alignment"
                .to_string(),
        ]))
    }

    fn mythos(&self, signature: &FrequencySignature) -> Result<StoryArc> {
        Ok(StoryArc {
            ordinary_matrix: "You lived in a world of expectations, following paths that others \
                              laid out for you. Deep inside, you felt a calling that you couldn't \
                              quite name, a frequency that was uniquely yours waiting to be \
                              discovered."
                .to_string(),
            the_glitch: "Something shifted when you realized that the conventional rules didn't \
                         apply to your unique design. The matrix of 'normal' began to crack, \
                         revealing glimpses of your true potential."
                .to_string(),
            taking_the_pill: "You chose to dive deep into your authentic self, embracing the \
                              unknown rather than the familiar. This was your moment of saying \
                              yes to your Hero Frequency."
                .to_string(),
            blueprint_revealed: format!(
                "Your gates {} and {} illuminated your cosmic blueprint. You saw clearly how \
                 your unique combination creates a frequency that the world needs.",
                signature.personality_sun, signature.design_sun
            ),
            integration_challenges: "Learning to trust your inner authority while navigating a \
                                     world that doesn't always understand your frequency. The \
                                     challenge was staying true to your design while still \
                                     connecting with others."
                .to_string(),
            frequency_mastery: "You learned to embody your gifts fully, using your unique \
                                combination of gates to create impact. Your frequency became a \
                                beacon for others seeking their own path."
                .to_string(),
            transmission_mode: "Now you serve as a lighthouse for other heroes beginning their \
                                journey. Your mastered frequency helps others discover and trust \
                                their own unique design."
                .to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
