/// Palette index the encoder treats as transparent.
pub const TRANSPARENT_INDEX: u8 = 0;

// Opcode bytes in the tile stream.
//
// 0-199 = count of transparent pixels to skip, followed by a run-length
//         byte and that many raw pixel bytes
// 200   = skip 200 transparent pixels, no pixel data, row continues
// 201   = end of current row
// 255   = end of current tile
pub const OP_SKIP_FULL: u8 = 200;
pub const OP_END_ROW: u8 = 201;
pub const OP_END_TILE: u8 = 255;

/// Longest transparent skip a single opcode can express, in pixels.
pub const MAX_SKIP: usize = OP_SKIP_FULL as usize;

/// An indexed image cut into fixed-size tiles, each tile run-length
/// encoded into one opcode sub-stream.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    pub tile_width: u32,
    pub tile_height: u32,
    /// Byte offset of each tile's first opcode within `stream`, in
    /// tile-scan order. Consumers address tiles by position in this table;
    /// the stream itself is not self-delimiting.
    pub offsets: Vec<u32>,
    /// Opcode sub-streams of every tile, back to back.
    pub stream: Vec<u8>,
}

impl SpriteSheet {
    pub fn tile_count(&self) -> usize {
        self.offsets.len()
    }
}
