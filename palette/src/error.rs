#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    #[error("Too many colors for 8-bit index bytes: {have}")]
    TooManyColors { have: usize },
    #[error("Palette buffer length {have} is not a whole number of 32-bit records")]
    MalformedBuffer { have: usize },
    #[error("Mismatched palette length. To ({to}). From ({from})")]
    MismatchedSize { to: usize, from: usize },
    #[error("Start entry out of range. To ({to_start}). From ({from_start})")]
    StartOutOfRange { to_start: u32, from_start: u32 },
    #[error("Merge size {from_size} exceeds the palette")]
    SizeOutOfRange { from_size: u32 },
    #[error("Merging {from_size} entries at {to_start} <- {from_start} runs past the palette end")]
    RangeOutOfBounds {
        to_start: u32,
        from_start: u32,
        from_size: u32,
    },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
