use crate::journey;
use hero_core::{export, io};
use std::path::Path;

pub fn run(root: &Path, out: &Path) -> anyhow::Result<()> {
    let (_config, controller) = journey::load(root)?;
    let dossier = export::render(controller.data())?;

    let path = if out.is_absolute() {
        out.to_path_buf()
    } else {
        root.join(out)
    };
    io::atomic_write(&path, dossier.as_bytes())?;

    println!("Dossier written to: {}", path.display());
    Ok(())
}
