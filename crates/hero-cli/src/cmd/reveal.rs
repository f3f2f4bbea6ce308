use crate::journey;
use hero_core::config::Config;
use hero_core::controller::StageController;
use hero_core::derive;
use hero_core::hero::{Identity, Mantras, StagePayload, StoryArc};
use hero_core::types::Stage;
use hero_core::HeroError;
use hero_oracle::{fallback, FrequencySignature, Oracle, OracleError, RemoteOracle, ScriptedOracle};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let (config, mut controller) = journey::load(root)?;

    // An unreachable oracle degrades to generic content, never to a failure.
    let on_miss = |e: &OracleError| {
        eprintln!("warning: {e}; continuing with generic content");
    };

    match controller.stage() {
        Stage::Reveal => {
            let signature = signature_for(&controller)?;
            let identity = identity_for(&controller)?;
            let oracle = open_oracle(&config)?;
            let mantras = fallback::mantras_or_fallback(oracle.as_ref(), &signature, on_miss);

            print_identity(&identity);
            print_mantras(&mantras);

            let receipt =
                controller.advance(Stage::Mythos, StagePayload::Revelation { identity, mantras })?;
            journey::report_remote(&receipt);
            println!("\nNext: {}", journey::next_hint(Stage::Mythos));
        }
        Stage::Mythos => {
            let signature = signature_for(&controller)?;
            let oracle = open_oracle(&config)?;
            let story = fallback::mythos_or_fallback(oracle.as_ref(), &signature, on_miss);

            print_story(&story);

            let receipt = controller.advance(Stage::Final, StagePayload::Mythos { story })?;
            journey::report_remote(&receipt);
            println!("\nYour journey is complete. Share it: herofreq share");
        }
        Stage::FinalReveal => {
            let signature = signature_for(&controller)?;
            let identity = identity_for(&controller)?;
            let oracle = open_oracle(&config)?;
            let mantras = fallback::mantras_or_fallback(oracle.as_ref(), &signature, on_miss);
            let story = fallback::mythos_or_fallback(oracle.as_ref(), &signature, on_miss);

            print_identity(&identity);
            print_mantras(&mantras);
            print_story(&story);

            let receipt = controller.advance(
                Stage::Final,
                StagePayload::GrandRevelation {
                    identity,
                    mantras,
                    story,
                },
            )?;
            journey::report_remote(&receipt);
            println!("\nYour journey is complete. Share it: herofreq share");
        }
        other => anyhow::bail!(
            "nothing to reveal at {}.\nNext: {}",
            other.label(),
            journey::next_hint(other)
        ),
    }
    Ok(())
}

fn signature_for(controller: &StageController) -> anyhow::Result<FrequencySignature> {
    Ok(FrequencySignature::from_hero(controller.data()).ok_or(HeroError::JourneyIncomplete)?)
}

fn identity_for(controller: &StageController) -> anyhow::Result<Identity> {
    let data = controller.data();
    match (data.personality_sun, data.design_sun) {
        (Some(p), Some(d)) => Ok(derive::synthesize_identity(p, d)),
        _ => Err(HeroError::JourneyIncomplete.into()),
    }
}

fn open_oracle(config: &Config) -> anyhow::Result<Box<dyn Oracle>> {
    Ok(match &config.oracle.url {
        Some(url) => Box::new(RemoteOracle::new(url)?),
        None => Box::new(ScriptedOracle),
    })
}

pub(crate) fn print_identity(identity: &Identity) {
    println!("== {} ==", identity.title);
    println!("Type: {}", identity.circuit);
    println!("Strategy: {}", identity.strategy);
    println!("Profile: {}", identity.profile);
    println!("Authority: {}", identity.authority);
    println!("Theme: {}", identity.theme);
    println!("Aura: {}", identity.aura_color);
}

pub(crate) fn print_mantras(mantras: &Mantras) {
    println!("\nPower mantras:");
    for (i, line) in mantras.lines().iter().enumerate() {
        println!("  {}. {line}", i + 1);
    }
}

pub(crate) fn print_story(story: &StoryArc) {
    println!("\nThe Hero's Journey");
    for (heading, text) in story.parts() {
        println!("\n{heading}");
        println!("  {text}");
    }
}
