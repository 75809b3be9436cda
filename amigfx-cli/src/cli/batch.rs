use std::path::Path;

use log::warn;

use amigfx::config::{parse_config, parse_config_from_file, Config};
use amigfx::modules::sprite_compress::sprite_compress_folder;

use super::{Cli, CliRes};

pub struct Batch;

impl Cli for Batch {
    fn name(&self) -> &'static str {
        "batch"
    }

    // Optional: path to a config file
    fn cli(&self) -> CliRes {
        let args: Vec<String> = std::env::args().skip(2).collect();

        let config = match args.len() {
            0 => match parse_config() {
                Ok(config) => config,
                Err(_) => {
                    warn!("No config.toml next to the binary, using defaults");
                    Config::default()
                }
            },
            1 => match parse_config_from_file(Path::new(&args[0])) {
                Ok(config) => config,
                Err(err) => {
                    println!("{}", err);
                    return CliRes::Err;
                }
            },
            _ => {
                self.cli_help();
                return CliRes::Err;
            }
        };

        match sprite_compress_folder(
            &config.input_dir,
            config.sprite_width,
            config.sprite_height,
        ) {
            Ok(outputs) => {
                println!("Converted {} files", outputs.len());
                CliRes::Ok
            }
            Err(err) => {
                println!("{}", err);
                CliRes::Err
            }
        }
    }

    fn cli_help(&self) {
        println!(
            "\
Converts every 8-bit indexed .png in the configured folder

[path to config.toml]
"
        )
    }
}
