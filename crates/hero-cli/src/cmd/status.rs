use crate::{journey, output};
use serde_json::json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, controller) = journey::load(root)?;
    let flow = controller.flow();
    let stage = controller.stage();
    let data = controller.data();

    let total = flow.stages().count();
    let position = flow.stages().position(|s| s == stage).map_or(0, |i| i + 1);

    if json {
        return output::print_json(&json!({
            "flow": controller.kind().as_str(),
            "stage": stage.as_str(),
            "label": stage.label(),
            "position": position,
            "total": total,
            "terminal": flow.is_terminal(stage),
            "user": config.user.id,
            "remote": config.remote.url,
            "hero": data,
        }));
    }

    println!("Flow:  {}", controller.kind());
    println!("Stage: {} ({position} of {total})", stage.label());

    let mut lines = Vec::new();
    if let Some(g) = data.personality_sun {
        lines.push(format!("Personality Sun: gate {g} ({})", g.info().name));
    }
    if let Some(g) = data.design_sun {
        lines.push(format!("Design Sun: gate {g} ({})", g.info().name));
    }
    if let Some(g) = data.evolution_gate {
        lines.push(format!("Evolution: gate {g} ({})", g.info().name));
    }
    if let Some(g) = data.purpose_gate {
        lines.push(format!("Purpose: gate {g} ({})", g.info().name));
    }
    if let Some(t) = data.hero_type {
        lines.push(format!("Type: {}", t.label()));
    }
    if let Some(p) = data.profile {
        lines.push(format!("Profile: {p} ({})", p.name()));
    }
    if let Some(a) = data.authority {
        lines.push(format!("Authority: {}", a.label()));
    }
    if let Some(identity) = &data.identity {
        lines.push(format!("Identity: {}", identity.title));
    }
    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("{line}");
        }
    }

    if data.is_complete() {
        println!("\nJourney complete.");
    }
    println!("\nNext: {}", journey::next_hint(stage));
    Ok(())
}
