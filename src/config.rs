use std::collections::HashMap;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use termion::event::Key;

use crate::cmds::Cmd;

pub type KeyMap = HashMap<Key, Cmd>;

const CONFIG_PATH_ENV_VAR: &str = "ALMANAC_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("almanac").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".almanac.toml"));
    }

    locations
}

/// On-disk representation. Keys and commands are plain strings so the file
/// stays editable; they are resolved into a `KeyMap` when loading.
#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    tick_rate: Option<u64>,
    keys: Option<HashMap<String, String>>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub key_map: KeyMap,
    pub tick_rate: Duration,
}

impl Default for Config {
    fn default() -> Config {
        let mut config = Config {
            key_map: HashMap::new(),
            tick_rate: Duration::from_millis(500),
        };

        config.key_map.insert(Key::Char('l'), Cmd::NextMonth);
        config.key_map.insert(Key::Right, Cmd::NextMonth);
        config.key_map.insert(Key::Char('h'), Cmd::PrevMonth);
        config.key_map.insert(Key::Left, Cmd::PrevMonth);
        config.key_map.insert(Key::Char('t'), Cmd::Today);
        config.key_map.insert(Key::Char('q'), Cmd::Exit);

        config
    }
}

impl Config {
    pub fn load(path: &Path) -> io::Result<Config> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml(&contents)
    }

    /// Load the first config file found in the usual locations, falling back
    /// to the built-in defaults when none exists.
    pub fn load_default() -> io::Result<Config> {
        for location in find_configfile_locations() {
            if location.is_file() {
                log::info!("Loading config from '{}'", location.display());
                return Config::load(&location);
            }
        }

        log::info!("No config file found, using defaults");
        Ok(Config::default())
    }

    fn from_toml(contents: &str) -> io::Result<Config> {
        let file: ConfigFile = toml::from_str(contents)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut config = Config::default();

        if let Some(millis) = file.tick_rate {
            config.tick_rate = Duration::from_millis(millis);
        }

        if let Some(keys) = file.keys {
            for (key_name, cmd_name) in &keys {
                let key = parse_key(key_name).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("unknown key '{}'", key_name),
                    )
                })?;
                let cmd = cmd_name
                    .parse::<Cmd>()
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;
                config.key_map.insert(key, cmd);
            }
        }

        Ok(config)
    }
}

fn parse_key(name: &str) -> Option<Key> {
    match name {
        "left" => Some(Key::Left),
        "right" => Some(Key::Right),
        "up" => Some(Key::Up),
        "down" => Some(Key::Down),
        "esc" => Some(Key::Esc),
        "backspace" => Some(Key::Backspace),
        "pageup" => Some(Key::PageUp),
        "pagedown" => Some(Key::PageDown),
        "home" => Some(Key::Home),
        "end" => Some(Key::End),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(Key::Char(c)),
                _ => None,
            }
        }
    }
}
