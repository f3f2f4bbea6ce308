use crate::journey;
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    let (_config, mut controller) = journey::load(root)?;

    let before = controller.stage();
    let stage = controller.retreat();
    if stage == before {
        println!("Already at {}; nothing to go back to.", stage.label());
        return Ok(());
    }

    // Retreat alone lives only in memory; checkpoint so the next invocation
    // starts from the stepped-back stage.
    let receipt = controller.checkpoint()?;
    journey::report_remote(&receipt);

    println!("Stepped back to: {}", stage.label());
    println!("Next: {}", journey::next_hint(stage));
    Ok(())
}
