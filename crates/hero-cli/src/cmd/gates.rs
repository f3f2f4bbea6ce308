use crate::output;
use hero_core::derive;
use hero_core::gates::{Gate, GATES};
use serde_json::json;

pub fn run(number: Option<&str>, json: bool) -> anyhow::Result<()> {
    match number {
        Some(number) => detail(number, json),
        None => wheel(json),
    }
}

fn wheel(json: bool) -> anyhow::Result<()> {
    if json {
        let wheel: Vec<_> = GATES
            .iter()
            .enumerate()
            .map(|(i, info)| {
                json!({
                    "gate": i + 1,
                    "name": info.name,
                    "circuit": info.circuit.as_str(),
                    "theme": info.theme,
                })
            })
            .collect();
        return output::print_json(&wheel);
    }

    let rows = GATES
        .iter()
        .enumerate()
        .map(|(i, info)| {
            vec![
                (i + 1).to_string(),
                info.name.to_string(),
                info.circuit.to_string(),
                info.theme.to_string(),
            ]
        })
        .collect();
    output::print_table(&["GATE", "NAME", "CIRCUIT", "THEME"], rows);
    Ok(())
}

fn detail(number: &str, json: bool) -> anyhow::Result<()> {
    let gate: Gate = number.parse()?;
    let info = gate.info();
    let evolution = derive::evolution_gate(gate);

    if json {
        return output::print_json(&json!({
            "gate": gate.get(),
            "name": info.name,
            "circuit": info.circuit.as_str(),
            "strategy": info.circuit.strategy(),
            "authority": info.circuit.authority().label(),
            "theme": info.theme,
            "auraColor": derive::aura_color(gate),
            "evolutionPartner": evolution.get(),
        }));
    }

    println!("Gate {gate}: {}", info.name);
    println!("Circuit: {}", info.circuit);
    println!("Strategy: {}", info.circuit.strategy());
    println!("Authority: {}", info.circuit.authority().label());
    println!("Theme: {}", info.theme);
    println!("Aura: {}", derive::aura_color(gate));
    println!(
        "Evolution partner: gate {evolution} ({})",
        evolution.info().name
    );
    Ok(())
}
