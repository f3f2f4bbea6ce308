use crate::journey;
use anyhow::Context;
use hero_core::config::{Config, WarnLevel};
use hero_core::controller::{ResumeOutcome, StageController};
use hero_core::store::HttpRecordStore;
use hero_core::{io, paths};
use std::path::Path;

pub fn run(
    root: &Path,
    flow: Option<&str>,
    user: Option<&str>,
    remote: Option<&str>,
    oracle: Option<&str>,
) -> anyhow::Result<()> {
    println!("Initializing Hero Frequency journey in: {}", root.display());

    // 1. Create .herofreq/
    let hero_dir = paths::hero_dir(root);
    if hero_dir.exists() {
        println!("  exists:  {}", paths::HERO_DIR);
    } else {
        io::ensure_dir(&hero_dir)
            .with_context(|| format!("failed to create {}", hero_dir.display()))?;
        println!("  created: {}", paths::HERO_DIR);
    }

    // 2. Keep session state out of version control
    io::ensure_gitignore_entry(root, ".herofreq/")?;

    // 3. Write (or update) the config
    let config_existed = paths::config_path(root).exists();
    let mut config = if config_existed {
        Config::load(root)?
    } else {
        Config::default()
    };

    let reconfigured = flow.is_some() || user.is_some() || remote.is_some() || oracle.is_some();
    if let Some(flow) = flow {
        config.journey.flow = flow.parse()?;
    }
    if let Some(user) = user {
        paths::validate_user_id(user)?;
        config.user.id = Some(user.to_string());
    }
    if let Some(remote) = remote {
        config.remote.url = Some(remote.to_string());
    }
    if let Some(oracle) = oracle {
        config.oracle.url = Some(oracle.to_string());
    }
    config.save(root)?;

    if !config_existed {
        println!("  created: {}", paths::CONFIG_FILE);
    } else if reconfigured {
        println!("  updated: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    for warning in config.validate() {
        match warning.level {
            WarnLevel::Warning => eprintln!("warning: {}", warning.message),
            WarnLevel::Error => eprintln!("error: {}", warning.message),
        }
    }

    // 4. Rebuild the journey and, when a remote is configured, look for a
    //    session to pick up where it left off
    let mut controller = StageController::bootstrap(root, config.journey.flow)?;
    if let (Some(url), Some(id)) = (&config.remote.url, &config.user.id) {
        controller.connect_remote(Box::new(HttpRecordStore::new(url.clone())?), id.as_str())?;
        match controller.resume()? {
            ResumeOutcome::Resumed { stage } => {
                println!("\nWelcome back, {id}! Resuming at: {}", stage.label());
                let receipt = controller.checkpoint()?;
                journey::report_remote(&receipt);
            }
            ResumeOutcome::Fresh => {}
            ResumeOutcome::RemoteUnavailable { error } => {
                eprintln!(
                    "warning: could not reach the remote session store ({error}); starting locally"
                );
            }
        }
    }

    println!("\nHero Frequency initialized.");
    println!("Next: {}", journey::next_hint(controller.stage()));
    Ok(())
}
