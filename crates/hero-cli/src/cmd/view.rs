use crate::cmd::reveal::{print_identity, print_mantras, print_story};
use crate::output;
use hero_core::share;

/// Render someone else's shared frequency. Needs no journey root: the token
/// carries the whole payload.
pub fn run(token: &str, json: bool) -> anyhow::Result<()> {
    let Ok(snapshot) = share::decode(token) else {
        println!("Journey not found. The link may be incomplete or expired.");
        println!("Begin your own: herofreq begin");
        return Ok(());
    };
    let hero = snapshot.hero();

    if json {
        return output::print_json(hero);
    }

    if let Some(identity) = &hero.identity {
        print_identity(identity);
    }

    let gates = [
        ("Personality Sun", hero.personality_sun),
        ("Design Sun", hero.design_sun),
        ("Evolution", hero.evolution_gate),
        ("Purpose", hero.purpose_gate),
    ];
    if gates.iter().any(|(_, g)| g.is_some()) {
        println!("\nGates:");
        for (label, gate) in gates {
            if let Some(g) = gate {
                println!("  {label}: gate {g} ({})", g.info().name);
            }
        }
    }

    if let Some(mantras) = &hero.mantras {
        print_mantras(mantras);
    }
    if let Some(story) = &hero.story {
        print_story(story);
    }
    Ok(())
}
