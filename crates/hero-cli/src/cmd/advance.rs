use crate::journey;
use hero_core::hero::StagePayload;
use hero_core::types::Stage;
use std::path::Path;

// `continue` is a keyword, so the module is named for what the command does.
pub fn run(root: &Path) -> anyhow::Result<()> {
    let (_config, mut controller) = journey::load(root)?;
    let stage = controller.stage();

    // Only stages with nothing to collect move on with a bare `continue`.
    let target = match stage {
        Stage::Welcome | Stage::TypeReveal | Stage::ProfileReveal | Stage::AuthorityReveal => {
            controller.flow().primary_successor(stage)
        }
        other => anyhow::bail!(
            "{} asks for more than a nudge.\nNext: {}",
            other.label(),
            journey::next_hint(other)
        ),
    };
    let Some(target) = target else {
        anyhow::bail!("nothing follows {}", stage.label());
    };

    let receipt = controller.advance(target, StagePayload::Empty)?;
    journey::report_remote(&receipt);

    println!("Moved on to: {}", target.label());
    println!("Next: {}", journey::next_hint(target));
    Ok(())
}
