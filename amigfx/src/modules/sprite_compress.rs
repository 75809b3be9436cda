//! Converts 8-bit indexed PNG images into the compressed sprite format,
//! writing the palette file and optionally the raw index dump alongside.

use std::path::{Path, PathBuf};

use eyre::eyre;
use log::info;

use palette::PaletteBin;
use spritesheet::SpriteSheet;

use crate::utils::{
    constants::{PALETTE_FILE_NAME, PNG_EXTENSION, RAW_EXTENSION, SPRITE_EXTENSION},
    img_stuffs::read_indexed_png,
    misc::list_files_with_extension,
};

pub struct SpriteCompress {
    png_path: PathBuf,
    tile_width: u32,
    tile_height: u32,
    write_raw: bool,
}

#[derive(Debug)]
pub struct SpriteCompressOutput {
    pub sprite_path: PathBuf,
    pub palette_path: PathBuf,
    pub raw_path: Option<PathBuf>,
    pub tile_count: usize,
}

impl SpriteCompress {
    pub fn new(png_path: impl AsRef<Path> + Into<PathBuf>, tile_width: u32, tile_height: u32) -> Self {
        Self {
            png_path: png_path.into(),
            tile_width,
            tile_height,
            write_raw: true,
        }
    }

    /// Whether to dump the undecoded index buffer next to the sprite file.
    pub fn write_raw(&mut self, write_raw: bool) -> &mut Self {
        self.write_raw = write_raw;
        self
    }

    pub fn run(&self) -> eyre::Result<SpriteCompressOutput> {
        let is_png = self
            .png_path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case(PNG_EXTENSION))
            .unwrap_or(false);

        if !is_png {
            return Err(eyre!("{} is not a .png file", self.png_path.display()));
        }

        info!("Processing: {}", self.png_path.display());

        let image = read_indexed_png(&self.png_path)?;

        // palette first, next to the source image
        let palette_path = self
            .png_path
            .parent()
            .unwrap_or(Path::new("."))
            .join(PALETTE_FILE_NAME);

        PaletteBin::from_colors(&image.palette)?.write_to_file(&palette_path)?;

        let raw_path = if self.write_raw {
            let raw_path = PathBuf::from(format!(
                "{}-{}-{}.{}",
                self.png_path.display(),
                image.width,
                image.height,
                RAW_EXTENSION
            ));

            std::fs::write(&raw_path, &image.data)?;

            Some(raw_path)
        } else {
            None
        };

        let sheet = SpriteSheet::encode(
            &image.data,
            image.width,
            image.height,
            self.tile_width,
            self.tile_height,
        )?;

        let sprite_path = PathBuf::from(format!(
            "{}.{}",
            self.png_path.display(),
            SPRITE_EXTENSION
        ));

        sheet.write_to_file(&sprite_path)?;

        info!(
            "Wrote {} ({} tiles of {}x{})",
            sprite_path.display(),
            sheet.tile_count(),
            self.tile_width,
            self.tile_height
        );

        Ok(SpriteCompressOutput {
            sprite_path,
            palette_path,
            raw_path,
            tile_count: sheet.tile_count(),
        })
    }
}

/// Runs the conversion over every .png directly inside `dir`.
pub fn sprite_compress_folder(
    dir: impl AsRef<Path>,
    tile_width: u32,
    tile_height: u32,
) -> eyre::Result<Vec<SpriteCompressOutput>> {
    let files = list_files_with_extension(dir, PNG_EXTENSION)?;

    files
        .iter()
        .map(|file| SpriteCompress::new(file, tile_width, tile_height).run())
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::img_stuffs::{write_indexed_png, IndexedImage};

    fn checkerboard_image() -> IndexedImage {
        IndexedImage {
            width: 4,
            height: 2,
            data: vec![0, 0, 5, 5, 5, 5, 0, 0],
            palette: vec![[10, 20, 30], [40, 50, 60], [70, 80, 90]],
        }
    }

    #[test]
    fn converts_a_png_into_sprite_palette_and_raw() {
        let dir = std::env::temp_dir().join("amigfx_sprite_compress_test");
        std::fs::create_dir_all(&dir).unwrap();

        let png_path = dir.join("sprite.png");
        write_indexed_png(&checkerboard_image(), &png_path).unwrap();

        let output = SpriteCompress::new(&png_path, 4, 2).run().unwrap();

        assert_eq!(output.tile_count, 1);
        assert_eq!(output.sprite_path, dir.join("sprite.png.SPR"));
        assert_eq!(output.palette_path, dir.join("palette.bin"));
        assert_eq!(output.raw_path, Some(dir.join("sprite.png-4-2.RAW")));

        let sprite = std::fs::read(&output.sprite_path).unwrap();

        let mut expected = b"SPRITEDATA:1,4,2:".to_vec();
        expected.extend(0u32.to_le_bytes());
        expected.extend([2, 2, 5, 5, 201, 0, 2, 5, 5, 201, 255]);
        assert_eq!(sprite, expected);

        let raw = std::fs::read(output.raw_path.unwrap()).unwrap();
        assert_eq!(raw, [0, 0, 5, 5, 5, 5, 0, 0]);

        let palette = std::fs::read(&output.palette_path).unwrap();
        #[rustfmt::skip]
        assert_eq!(
            palette,
            [
                0x03, 0x00, 0x00, 0x00,
                0x00, 10, 20, 30,
                0x01, 40, 50, 60,
                0x02, 70, 80, 90,
            ]
        );
    }

    #[test]
    fn refuses_non_png_paths() {
        let result = SpriteCompress::new("sprite.gif", 4, 2).run();

        assert!(result.is_err());
    }

    #[test]
    fn folder_conversion_visits_every_png() {
        let dir = std::env::temp_dir().join("amigfx_sprite_compress_folder_test");
        std::fs::create_dir_all(&dir).unwrap();

        write_indexed_png(&checkerboard_image(), dir.join("one.png")).unwrap();
        write_indexed_png(&checkerboard_image(), dir.join("two.png")).unwrap();

        let outputs = sprite_compress_folder(&dir, 4, 2).unwrap();

        assert_eq!(outputs.len(), 2);
        assert!(dir.join("one.png.SPR").is_file());
        assert!(dir.join("two.png.SPR").is_file());
    }
}
