use std::path::PathBuf;

use clap::{Parser, Subcommand};

use amigfx::modules::sprite_compress::SpriteCompress;

use super::{Cli, CliRes};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct CompressCli {
    // This is just dummy command because we are already in the command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compresses an 8-bit indexed PNG into sprite data
    Compress {
        /// Path to .png file
        path: PathBuf,
        /// Sprite tile width in pixels
        tile_width: u32,
        /// Sprite tile height in pixels
        tile_height: u32,
        /// Skip writing the raw index dump
        #[arg(long)]
        no_raw: bool,
    },
}

pub struct Compress;

impl Cli for Compress {
    fn name(&self) -> &'static str {
        "compress"
    }

    fn cli(&self) -> CliRes {
        let cli = CompressCli::parse();

        let Commands::Compress {
            path,
            tile_width,
            tile_height,
            no_raw,
        } = cli.command;

        let mut compress = SpriteCompress::new(path, tile_width, tile_height);

        compress.write_raw(!no_raw);

        match compress.run() {
            Ok(output) => {
                println!("Wrote {}", output.sprite_path.display());
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        // handled by clap
        unreachable!()
    }
}
