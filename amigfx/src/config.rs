//! Parses the batch conversion config file

use std::{
    env,
    fs::OpenOptions,
    io::Read,
    path::{Path, PathBuf},
};

use eyre::eyre;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Folder scanned for .png files, not recursed into.
    pub input_dir: String,
    pub sprite_width: u32,
    pub sprite_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: "./".to_string(),
            sprite_width: 60,
            sprite_height: 60,
        }
    }
}

pub static CONFIG_FILE_NAME: &str = "config.toml";

/// Parse `config.toml` in the same folder as the binary
pub fn parse_config() -> eyre::Result<Config> {
    let path = match env::current_exe() {
        Ok(path) => path.parent().unwrap().join(CONFIG_FILE_NAME),
        Err(_) => PathBuf::from(CONFIG_FILE_NAME),
    };

    parse_config_from_file(path.as_path())
}

pub fn parse_config_from_file(path: &Path) -> eyre::Result<Config> {
    let mut file = OpenOptions::new().read(true).open(path.as_os_str())?;
    let mut buffer = String::new();

    file.read_to_string(&mut buffer)?;

    let config: Config = toml::from_str(&buffer)?;

    if config.sprite_width == 0 || config.sprite_height == 0 {
        return Err(eyre!(
            "Sprite dimensions in {} must be nonzero",
            path.display()
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_a_config_file() {
        let path = std::env::temp_dir().join("amigfx_config_test.toml");

        std::fs::write(
            &path,
            "input_dir = \"./sprites\"\nsprite_width = 64\nsprite_height = 48\n",
        )
        .unwrap();

        let config = parse_config_from_file(&path).unwrap();

        assert_eq!(config.input_dir, "./sprites");
        assert_eq!(config.sprite_width, 64);
        assert_eq!(config.sprite_height, 48);
    }

    #[test]
    fn rejects_zero_sprite_dimensions() {
        let path = std::env::temp_dir().join("amigfx_config_zero_test.toml");

        std::fs::write(
            &path,
            "input_dir = \"./\"\nsprite_width = 0\nsprite_height = 48\n",
        )
        .unwrap();

        assert!(parse_config_from_file(&path).is_err());
    }
}
