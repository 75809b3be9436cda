use amigfx::modules::palette_merge::palette_merge;

use super::{Cli, CliRes};

pub struct Merge;

impl Cli for Merge {
    fn name(&self) -> &'static str {
        "merge"
    }

    // To, From, ToIndex, FromIndex, FromSize
    fn cli(&self) -> CliRes {
        let args: Vec<String> = std::env::args().skip(2).collect();

        if args.len() != 5 {
            self.cli_help();
            return CliRes::Err;
        }

        let entries = (
            args[2].parse::<u32>(),
            args[3].parse::<u32>(),
            args[4].parse::<u32>(),
        );

        let (to_start, from_start, from_size) = match entries {
            (Ok(to_start), Ok(from_start), Ok(from_size)) => (to_start, from_start, from_size),
            _ => {
                println!("Cannot parse entry numbers.");
                self.cli_help();
                return CliRes::Err;
            }
        };

        if let Err(err) = palette_merge(&args[0], &args[1], to_start, from_start, from_size) {
            println!("{}", err);
            return CliRes::Err;
        }

        CliRes::Ok
    }

    fn cli_help(&self) {
        println!(
            "\
Copies R/G/B channels between two palette files, in place

<PaletteTo.bin> <PaletteFrom.bin> <ToIndex> <FromIndex> <FromSize>
"
        )
    }
}
