use crate::{journey, output};
use hero_core::share;
use serde_json::json;
use std::path::Path;

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let (config, controller) = journey::load(root)?;
    let token = share::encode(controller.data())?;
    let url = config
        .remote
        .url
        .as_ref()
        .map(|base| format!("{}/api/shared/{token}", base.trim_end_matches('/')));

    if json {
        return output::print_json(&json!({ "token": token, "url": url }));
    }

    println!("{token}");
    if let Some(url) = url {
        println!("{url}");
    }
    eprintln!("\nAnyone can view this frequency with: herofreq view <TOKEN>");
    Ok(())
}
