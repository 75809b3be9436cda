use std::{
    ffi::OsStr,
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::error::PaletteError;

/// Bytes per record. Word 0 of a buffer is the count header; every later
/// word packs one `index | r<<8 | g<<16 | b<<24` color entry.
pub const ENTRY_SIZE: usize = 4;

/// Most entries an 8-bit index byte can address.
pub const MAX_COLORS: usize = 256;

/// Raw file image of an indexed hardware palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteBin(pub Vec<u8>);

impl PaletteBin {
    /// Packs a color table into the record format. Index bytes are assigned
    /// sequentially from 0 in input order.
    pub fn from_colors(colors: &[[u8; 3]]) -> Result<Self, PaletteError> {
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors { have: colors.len() });
        }

        let mut writer = ByteWriter::new();

        writer.append_u32(colors.len() as u32);

        for (index, [red, green, blue]) in colors.iter().enumerate() {
            writer.append_u32(
                index as u32 | (*red as u32) << 8 | (*green as u32) << 16 | (*blue as u32) << 24,
            );
        }

        Ok(Self(writer.data))
    }

    /// Accepts a raw buffer, requiring at least the header word and a
    /// whole number of records.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self, PaletteError> {
        let bytes = bytes.into();

        if bytes.len() < ENTRY_SIZE || bytes.len() % ENTRY_SIZE != 0 {
            return Err(PaletteError::MalformedBuffer { have: bytes.len() });
        }

        Ok(Self(bytes))
    }

    pub fn from_file(path: impl AsRef<Path> + AsRef<OsStr>) -> Result<Self, PaletteError> {
        let bytes = std::fs::read(path)?;

        Self::from_bytes(bytes)
    }

    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), PaletteError> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&self.0)?;

        file.flush()?;

        Ok(())
    }

    pub fn get_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Color entries in the buffer, excluding the header word.
    pub fn entry_count(&self) -> usize {
        self.0.len() / ENTRY_SIZE - 1
    }
}
