use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use eyre::eyre;

/// 8-bit indexed image: one palette index per pixel, row major.
#[derive(Debug, Clone)]
pub struct IndexedImage {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub palette: Vec<[u8; 3]>,
}

pub fn read_indexed_png_from_bytes(bytes: &[u8]) -> eyre::Result<IndexedImage> {
    let mut reader = png::Decoder::new(bytes).read_info()?;

    let info = reader.info();

    if info.color_type != png::ColorType::Indexed || info.bit_depth != png::BitDepth::Eight {
        return Err(eyre!("Image is not 8 bit indexed"));
    }

    let palette_bytes = info
        .palette
        .clone()
        .ok_or_else(|| eyre!("Indexed image has no palette"))?;

    let palette = palette_bytes
        .chunks_exact(3)
        .map(|color| [color[0], color[1], color[2]])
        .collect::<Vec<[u8; 3]>>();

    let mut data = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data)?;

    data.truncate(frame.buffer_size());

    Ok(IndexedImage {
        width: frame.width,
        height: frame.height,
        data,
        palette,
    })
}

pub fn read_indexed_png(path: impl AsRef<Path>) -> eyre::Result<IndexedImage> {
    let bytes = std::fs::read(path)?;

    read_indexed_png_from_bytes(&bytes)
}

/// Cheap preflight check, reads the header only. Any I/O or decode
/// problem counts as "not indexed".
pub fn is_8bit_indexed_png(path: impl AsRef<Path>) -> bool {
    let file = match OpenOptions::new().read(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let reader = match png::Decoder::new(file).read_info() {
        Ok(reader) => reader,
        Err(_) => return false,
    };

    let info = reader.info();

    info.color_type == png::ColorType::Indexed && info.bit_depth == png::BitDepth::Eight
}

pub fn write_indexed_png_to_bytes(image: &IndexedImage) -> eyre::Result<Vec<u8>> {
    let mut bytes: Vec<u8> = Vec::new();

    let mut encoder = png::Encoder::new(&mut bytes, image.width, image.height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(image.palette.as_flattened().to_vec());

    let mut writer = encoder.write_header()?;
    writer.write_image_data(&image.data)?;
    writer.finish()?;

    Ok(bytes)
}

pub fn write_indexed_png(
    image: &IndexedImage,
    path: impl AsRef<Path> + Into<PathBuf>,
) -> eyre::Result<()> {
    let bytes = write_indexed_png_to_bytes(image)?;

    std::fs::write(path.as_ref(), bytes)?;

    Ok(())
}
