use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use byte_writer::ByteWriter;

use crate::{error::SpriteError, types::SpriteSheet};

impl SpriteSheet {
    pub fn write_to_file(&self, path: impl AsRef<Path> + Into<PathBuf>) -> Result<(), SpriteError> {
        let bytes = self.write_to_bytes();

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        file.write_all(&bytes)?;

        file.flush()?;

        Ok(())
    }

    pub fn write_to_bytes(&self) -> Vec<u8> {
        let mut writer = ByteWriter::new();

        writer.append_string(&format!(
            "SPRITEDATA:{},{},{}:",
            self.tile_count(),
            self.tile_width,
            self.tile_height
        ));

        for offset in &self.offsets {
            writer.append_u32(*offset);
        }

        writer.append_u8_slice(&self.stream);

        writer.data
    }
}
