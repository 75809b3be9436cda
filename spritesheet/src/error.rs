#[derive(Debug, thiserror::Error)]
pub enum SpriteError {
    #[error("Tile dimensions must be nonzero")]
    EmptyTile,
    #[error("Mismatched grid length. Expect ({expect}). Have ({have})")]
    GridSizeMismatch { expect: usize, have: usize },
    #[error(
        "Image size {width}x{height} is not a multiple of tile size {tile_width}x{tile_height}"
    )]
    NonMultipleTileSize {
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    },
    #[error("Opaque run of {length} pixels does not fit in the run-length byte")]
    RunTooLong { length: usize },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
