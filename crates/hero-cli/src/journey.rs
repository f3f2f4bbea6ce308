//! Shared plumbing for journey commands: config + controller loading and
//! the per-stage "what next" hints.

use hero_core::config::Config;
use hero_core::controller::{PersistReceipt, StageController};
use hero_core::store::HttpRecordStore;
use hero_core::types::Stage;
use std::path::Path;

/// Load the config and rebuild the controller from the saved session.
/// Connects the remote store when both `remote.url` and `user.id` are set.
pub fn load(root: &Path) -> anyhow::Result<(Config, StageController)> {
    let config = Config::load(root)?;
    let mut controller = StageController::bootstrap(root, config.journey.flow)?;
    if let (Some(url), Some(id)) = (&config.remote.url, &config.user.id) {
        controller.connect_remote(Box::new(HttpRecordStore::new(url.clone())?), id.as_str())?;
    }
    Ok((config, controller))
}

/// A failed remote mirror never fails the command; it gets one stderr line.
pub fn report_remote(receipt: &PersistReceipt) {
    if let Some(reason) = receipt.remote_failure() {
        eprintln!("warning: session sync failed ({reason}); the session was saved locally");
    }
}

/// The command that moves the journey forward from `stage`.
pub fn next_hint(stage: Stage) -> &'static str {
    match stage {
        Stage::Welcome | Stage::TypeReveal | Stage::ProfileReveal | Stage::AuthorityReveal => {
            "herofreq continue"
        }
        Stage::Input | Stage::GateInput => "herofreq enter <PERSONALITY> <DESIGN>",
        Stage::TypeSelection => "herofreq choose type <TYPE>",
        Stage::ProfileSelection => "herofreq choose profile <PROFILE>",
        Stage::AuthoritySelection => "herofreq choose authority <AUTHORITY>",
        Stage::Reveal | Stage::Mythos | Stage::FinalReveal => "herofreq reveal",
        Stage::Final => "herofreq share",
    }
}
