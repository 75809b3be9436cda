use crate::{
    error::PaletteError,
    types::{PaletteBin, ENTRY_SIZE},
};

impl PaletteBin {
    /// Copies the R/G/B channel bytes of `from_size` entries out of `from`
    /// into this buffer. Destination index bytes are never touched.
    ///
    /// Entry numbers count color entries, not words: entry 0 is the first
    /// record after the count header. The copy is all-or-nothing; when any
    /// precondition fails, the buffer is left untouched.
    pub fn merge_from(
        &mut self,
        from: &PaletteBin,
        to_start: u32,
        from_start: u32,
        from_size: u32,
    ) -> Result<(), PaletteError> {
        let to_len = self.0.len();
        let from_len = from.0.len();

        // skip the count header word, then scale entries to byte offsets
        let to_offset = (to_start as usize + 1) * ENTRY_SIZE;
        let from_offset = (from_start as usize + 1) * ENTRY_SIZE;
        let size = from_size as usize * ENTRY_SIZE;

        if to_len != from_len {
            return Err(PaletteError::MismatchedSize {
                to: to_len,
                from: from_len,
            });
        }

        if to_offset > to_len || from_offset > from_len {
            return Err(PaletteError::StartOutOfRange {
                to_start,
                from_start,
            });
        }

        if size > from_len {
            return Err(PaletteError::SizeOutOfRange { from_size });
        }

        if to_offset + size > to_len || from_offset + size > from_len {
            return Err(PaletteError::RangeOutOfBounds {
                to_start,
                from_start,
                from_size,
            });
        }

        for entry in 0..from_size as usize {
            for channel in 1..ENTRY_SIZE {
                self.0[to_offset + entry * ENTRY_SIZE + channel] =
                    from.0[from_offset + entry * ENTRY_SIZE + channel];
            }
        }

        Ok(())
    }
}
