//! Copies color channels between two palette files on disk.

use std::path::{Path, PathBuf};

use eyre::eyre;
use log::info;

use palette::PaletteBin;

use crate::utils::constants::PALETTE_EXTENSION;

fn is_palette_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(PALETTE_EXTENSION))
        .unwrap_or(false)
}

/// Loads both palettes, merges `from_size` entries of R/G/B data and
/// overwrites the destination file. The destination is only rewritten
/// when the merge succeeds.
pub fn palette_merge(
    to_path: impl AsRef<Path> + Into<PathBuf>,
    from_path: impl AsRef<Path> + Into<PathBuf>,
    to_start: u32,
    from_start: u32,
    from_size: u32,
) -> eyre::Result<()> {
    let to_path = to_path.into();
    let from_path = from_path.into();

    if !is_palette_file(&to_path) {
        return Err(eyre!("PaletteTo file must be a .bin file"));
    }

    if !is_palette_file(&from_path) {
        return Err(eyre!("PaletteFrom file must be a .bin file"));
    }

    let mut to = PaletteBin::from_file(&to_path)?;
    let from = PaletteBin::from_file(&from_path)?;

    to.merge_from(&from, to_start, from_start, from_size)?;

    to.write_to_file(&to_path)?;

    info!(
        "Merged {} entries from {} into {}",
        from_size,
        from_path.display(),
        to_path.display()
    );

    Ok(())
}
