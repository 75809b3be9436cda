use crate::error::SpriteError;
use crate::types::{SpriteSheet, MAX_SKIP, OP_END_ROW, OP_END_TILE, OP_SKIP_FULL, TRANSPARENT_INDEX};

impl SpriteSheet {
    /// Cuts a row-major index buffer into `tile_width` x `tile_height`
    /// tiles and run-length encodes each one.
    ///
    /// The image dimensions must be exact multiples of the tile dimensions.
    /// A run of opaque pixels longer than 255 cannot be stored in the
    /// run-length byte and fails the encode, which only happens once
    /// `tile_width` exceeds 255.
    pub fn encode(
        grid: &[u8],
        width: u32,
        height: u32,
        tile_width: u32,
        tile_height: u32,
    ) -> Result<SpriteSheet, SpriteError> {
        if tile_width == 0 || tile_height == 0 {
            return Err(SpriteError::EmptyTile);
        }

        if grid.len() != (width as usize) * (height as usize) {
            return Err(SpriteError::GridSizeMismatch {
                expect: (width as usize) * (height as usize),
                have: grid.len(),
            });
        }

        if width % tile_width != 0 || height % tile_height != 0 {
            return Err(SpriteError::NonMultipleTileSize {
                width,
                height,
                tile_width,
                tile_height,
            });
        }

        let (width, height) = (width as usize, height as usize);
        let (tile_w, tile_h) = (tile_width as usize, tile_height as usize);

        let mut offsets = Vec::with_capacity((width / tile_w) * (height / tile_h));
        let mut stream: Vec<u8> = Vec::new();

        for tile_y in (0..height).step_by(tile_h) {
            for tile_x in (0..width).step_by(tile_w) {
                offsets.push(stream.len() as u32);

                for y in 0..tile_h {
                    // start of this tile row within the full image
                    let row = (tile_y + y) * width + tile_x;
                    let mut x = 0;

                    'row: loop {
                        for probe in 0..=MAX_SKIP {
                            // exact end of row wins over an opaque pixel at
                            // the same distance
                            if x + probe == tile_w {
                                stream.push(OP_END_ROW);
                                break 'row;
                            }

                            if grid[row + x + probe] != TRANSPARENT_INDEX {
                                stream.push(probe as u8);
                                x += probe;

                                if probe < MAX_SKIP {
                                    x += Self::push_run(&mut stream, &grid[row..], x, tile_w)?;
                                }

                                continue 'row;
                            }
                        }

                        // nothing opaque within reach and the row continues
                        stream.push(OP_SKIP_FULL);
                        x += MAX_SKIP;
                    }
                }

                stream.push(OP_END_TILE);
            }
        }

        Ok(SpriteSheet {
            tile_width,
            tile_height,
            offsets,
            stream,
        })
    }

    /// Emits the run-length byte and the raw pixels of the opaque run
    /// starting at `x`, returning the run length.
    fn push_run(
        stream: &mut Vec<u8>,
        row: &[u8],
        x: usize,
        tile_w: usize,
    ) -> Result<usize, SpriteError> {
        let mut run = 0;

        while x + run < tile_w && row[x + run] != TRANSPARENT_INDEX {
            run += 1;
        }

        if run > u8::MAX as usize {
            return Err(SpriteError::RunTooLong { length: run });
        }

        stream.push(run as u8);
        stream.extend_from_slice(&row[x..x + run]);

        Ok(run)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tile_with_leading_and_trailing_transparency() {
        // row 1 skips two pixels before its run, row 2 draws immediately
        #[rustfmt::skip]
        let grid = [
            0, 0, 5, 5,
            5, 5, 0, 0,
        ];

        let sheet = SpriteSheet::encode(&grid, 4, 2, 4, 2).unwrap();

        assert_eq!(sheet.offsets, [0]);
        assert_eq!(
            sheet.stream,
            [2, 2, 5, 5, OP_END_ROW, 0, 2, 5, 5, OP_END_ROW, OP_END_TILE]
        );
    }

    #[test]
    fn fully_transparent_wide_tile() {
        // 450 transparent pixels need two full skips before the row ends
        let grid = vec![0u8; 450];

        let sheet = SpriteSheet::encode(&grid, 450, 1, 450, 1).unwrap();

        assert_eq!(
            sheet.stream,
            [OP_SKIP_FULL, OP_SKIP_FULL, OP_END_ROW, OP_END_TILE]
        );
    }

    #[test]
    fn fully_opaque_tile() {
        let grid = vec![7u8; 8];

        let sheet = SpriteSheet::encode(&grid, 4, 2, 4, 2).unwrap();

        assert_eq!(
            sheet.stream,
            [0, 4, 7, 7, 7, 7, OP_END_ROW, 0, 4, 7, 7, 7, 7, OP_END_ROW, OP_END_TILE]
        );
    }

    #[test]
    fn opaque_pixel_exactly_at_skip_limit() {
        // pixel 200 is opaque: the full skip is emitted first, then the run
        let mut grid = vec![0u8; 202];
        grid[200] = 9;
        grid[201] = 9;

        let sheet = SpriteSheet::encode(&grid, 202, 1, 202, 1).unwrap();

        assert_eq!(
            sheet.stream,
            [OP_SKIP_FULL, 0, 2, 9, 9, OP_END_ROW, OP_END_TILE]
        );
    }

    #[test]
    fn offsets_follow_tile_scan_order() {
        #[rustfmt::skip]
        let grid = [
            0, 0, 1, 1,
            0, 0, 1, 1,
            2, 2, 0, 0,
            2, 2, 0, 3,
        ];

        let sheet = SpriteSheet::encode(&grid, 4, 4, 2, 2).unwrap();

        assert_eq!(sheet.tile_count(), 4);
        // each offset is the stream length right before its tile was appended
        assert_eq!(sheet.offsets, [0, 3, 14, 25]);

        // bottom-right tile: blank row, then one pixel after a skip of one
        assert_eq!(
            &sheet.stream[25..],
            [OP_END_ROW, 1, 1, 3, OP_END_ROW, OP_END_TILE]
        );
    }

    #[test]
    fn rejects_empty_tile_dimensions() {
        let result = SpriteSheet::encode(&[0; 4], 2, 2, 0, 2);

        assert!(matches!(result, Err(SpriteError::EmptyTile)));
    }

    #[test]
    fn rejects_mismatched_grid_length() {
        let result = SpriteSheet::encode(&[0; 3], 2, 2, 2, 2);

        assert!(matches!(
            result,
            Err(SpriteError::GridSizeMismatch { expect: 4, have: 3 })
        ));
    }

    #[test]
    fn rejects_non_multiple_dimensions() {
        let result = SpriteSheet::encode(&[0; 10], 5, 2, 2, 2);

        assert!(matches!(
            result,
            Err(SpriteError::NonMultipleTileSize { .. })
        ));
    }

    #[test]
    fn rejects_run_longer_than_a_byte() {
        let grid = vec![1u8; 300];

        let result = SpriteSheet::encode(&grid, 300, 1, 300, 1);

        assert!(matches!(
            result,
            Err(SpriteError::RunTooLong { length: 300 })
        ));
    }
}
