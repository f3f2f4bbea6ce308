use crate::error::{HeroError, Result};
use crate::gates::Gate;
use crate::hero::HeroData;

// ---------------------------------------------------------------------------
// Dossier rendering
// ---------------------------------------------------------------------------

/// Render the journey as a paginated markdown dossier: identity masthead,
/// the four gates with their wheel rows, the mantras, and (when present)
/// the story arc as its own page. Gates, identity and mantras are
/// required; the story page is optional.
pub fn render(data: &HeroData) -> Result<String> {
    let identity = data.identity.as_ref().ok_or(HeroError::JourneyIncomplete)?;
    let mantras = data.mantras.as_ref().ok_or(HeroError::JourneyIncomplete)?;
    let personality = data.personality_sun.ok_or(HeroError::JourneyIncomplete)?;
    let design = data.design_sun.ok_or(HeroError::JourneyIncomplete)?;
    let evolution = data.evolution_gate.ok_or(HeroError::JourneyIncomplete)?;
    let purpose = data.purpose_gate.ok_or(HeroError::JourneyIncomplete)?;

    let mut out = String::new();
    out.push_str("# Hero Frequency\n\n");
    out.push_str(&format!("## {}\n\n", identity.title));
    out.push_str(&format!("- Type: {}\n", identity.circuit));
    out.push_str(&format!("- Strategy: {}\n", identity.strategy));
    out.push_str(&format!("- Profile: {}\n", identity.profile));
    out.push_str(&format!("- Authority: {}\n", identity.authority));
    out.push_str(&format!("- Theme: {}\n", identity.theme));
    out.push_str(&format!("- Aura: {}\n\n", identity.aura_color));

    out.push_str("## Gates\n\n");
    out.push_str("| Gate | Number | Name | Circuit | Theme |\n");
    out.push_str("|------|--------|------|---------|-------|\n");
    push_gate_row(&mut out, "Personality Sun", personality);
    push_gate_row(&mut out, "Design Sun", design);
    push_gate_row(&mut out, "Evolution", evolution);
    push_gate_row(&mut out, "Purpose", purpose);
    out.push('\n');

    out.push_str("## Mantras\n\n");
    for (i, line) in mantras.lines().iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, line));
    }

    if let Some(story) = &data.story {
        out.push_str("\n---\n\n## The Hero's Journey\n");
        for (heading, text) in story.parts() {
            out.push_str(&format!("\n### {heading}\n\n{text}\n"));
        }
    }

    Ok(out)
}

fn push_gate_row(out: &mut String, role: &str, gate: Gate) {
    let info = gate.info();
    out.push_str(&format!(
        "| {role} | {gate} | {} | {} | {} |\n",
        info.name, info.circuit, info.theme
    ));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
