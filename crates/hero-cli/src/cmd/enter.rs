use crate::journey;
use hero_core::gates::Gate;
use hero_core::hero::StagePayload;
use hero_core::types::Stage;
use std::path::Path;

pub fn run(root: &Path, personality: &str, design: &str) -> anyhow::Result<()> {
    let (_config, mut controller) = journey::load(root)?;

    let target = match controller.stage() {
        Stage::Input => Stage::Reveal,
        Stage::GateInput => Stage::FinalReveal,
        other => anyhow::bail!(
            "gates are entered at a gate input stage; you are at {}.\nNext: {}",
            other.label(),
            journey::next_hint(other)
        ),
    };

    let personality_sun: Gate = personality.parse()?;
    let design_sun: Gate = design.parse()?;

    let receipt = controller.advance(
        target,
        StagePayload::Gates {
            personality_sun,
            design_sun,
        },
    )?;
    journey::report_remote(&receipt);

    let data = controller.data();
    println!("Personality Sun: gate {personality_sun} ({})", personality_sun.info().name);
    println!("Design Sun: gate {design_sun} ({})", design_sun.info().name);
    if let Some(g) = data.evolution_gate {
        println!("Evolution: gate {g} ({})", g.info().name);
    }
    if let Some(g) = data.purpose_gate {
        println!("Purpose: gate {g} ({})", g.info().name);
    }
    println!("\nNext: {}", journey::next_hint(target));
    Ok(())
}
