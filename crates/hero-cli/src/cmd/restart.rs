use crate::journey;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let (_config, mut controller) = journey::load(root)?;

    let receipt = controller.restart()?;
    if let Some(reason) = receipt.remote_failure() {
        eprintln!("warning: could not clear the remote session ({reason}); it may resurface on resume");
    }

    println!("Journey restarted at: {}", controller.stage().label());
    println!("Next: {}", journey::next_hint(controller.stage()));
    Ok(())
}
