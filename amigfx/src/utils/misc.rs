use std::path::{Path, PathBuf};

use eyre::eyre;
use walkdir::WalkDir;

const CRC_START: u16 = 0xFFFF;
const CRC_POLY: u16 = 0xA001;
const CRC_BITS: u16 = 8;

/// CRC-16 with the reflected 0xA001 polynomial over the whole slice.
pub fn crc16(data: &[u8]) -> u16 {
    let mut crc = CRC_START;

    for byte in data {
        crc ^= *byte as u16;

        for _ in 0..CRC_BITS {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ CRC_POLY;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

/// Files directly inside `dir` (no recursion) whose extension matches
/// `extension` case-insensitively, sorted by path.
pub fn list_files_with_extension(
    dir: impl AsRef<Path>,
    extension: &str,
) -> eyre::Result<Vec<PathBuf>> {
    if !dir.as_ref().is_dir() {
        return Err(eyre!("{} is not a folder", dir.as_ref().display()));
    }

    let mut files = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .map(|ext| ext.eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect::<Vec<PathBuf>>();

    files.sort();

    Ok(files)
}
