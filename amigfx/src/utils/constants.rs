pub const PNG_EXTENSION: &str = "png";
pub const SPRITE_EXTENSION: &str = "SPR";
pub const RAW_EXTENSION: &str = "RAW";

pub const PALETTE_EXTENSION: &str = "bin";
/// One palette file per source image, written next to it.
pub const PALETTE_FILE_NAME: &str = "palette.bin";
