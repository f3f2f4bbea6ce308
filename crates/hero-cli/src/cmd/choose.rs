use crate::journey;
use clap::Subcommand;
use hero_core::hero::StagePayload;
use hero_core::profile::Profile;
use hero_core::types::{Authority, HeroType, Stage};
use std::path::Path;

#[derive(Subcommand)]
pub enum ChooseSubcommand {
    /// Choose your hero type (generator, projector, ...)
    Type { value: String },

    /// Choose your profile line pair (e.g. 3/5)
    Profile {
        value: String,

        /// Pause at the profile reveal instead of moving straight on
        #[arg(long)]
        reveal: bool,
    },

    /// Choose your decision-making authority (emotional, sacral, ...)
    Authority {
        value: String,

        /// Pause at the authority reveal instead of moving straight on
        #[arg(long)]
        reveal: bool,
    },
}

pub fn run(root: &Path, subcommand: ChooseSubcommand) -> anyhow::Result<()> {
    let (_config, mut controller) = journey::load(root)?;
    let stage = controller.stage();

    let require = |expected: Stage| -> anyhow::Result<()> {
        if stage == expected {
            Ok(())
        } else {
            anyhow::bail!(
                "selections happen at the {} stage; you are at {}.\nNext: {}",
                expected.label(),
                stage.label(),
                journey::next_hint(stage)
            )
        }
    };

    let (target, payload, chosen) = match subcommand {
        ChooseSubcommand::Type { value } => {
            require(Stage::TypeSelection)?;
            let hero_type: HeroType = value.parse()?;
            (
                Stage::TypeReveal,
                StagePayload::TypeChoice { hero_type },
                format!("{}: {}", hero_type.label(), hero_type.description()),
            )
        }
        ChooseSubcommand::Profile { value, reveal } => {
            require(Stage::ProfileSelection)?;
            let profile: Profile = value.parse()?;
            let target = if reveal {
                Stage::ProfileReveal
            } else {
                Stage::AuthoritySelection
            };
            (
                target,
                StagePayload::ProfileChoice { profile },
                format!("Profile {profile}: {}", profile.name()),
            )
        }
        ChooseSubcommand::Authority { value, reveal } => {
            require(Stage::AuthoritySelection)?;
            let authority: Authority = value.parse()?;
            let target = if reveal {
                Stage::AuthorityReveal
            } else {
                Stage::GateInput
            };
            (
                target,
                StagePayload::AuthorityChoice { authority },
                format!("{}: {}", authority.label(), authority.description()),
            )
        }
    };

    let receipt = controller.advance(target, payload)?;
    journey::report_remote(&receipt);

    println!("{chosen}");
    println!("\nStage: {}", target.label());
    println!("Next: {}", journey::next_hint(target));
    Ok(())
}
