use ini::Ini;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "todo";
const CONFIG_FILE: &str = "api_key.ini";
const TODOIST_SECTION: &str = "todoist";

/// Key/value settings read from `api_key.ini`. Only ever read.
pub struct Config {
    ini: Ini,
}

impl Default for Config {
    fn default() -> Self {
        Config { ini: Ini::new() }
    }
}

impl Config {
    pub fn get(&self, section: Option<&str>, key: &str) -> Option<&str> {
        self.ini.get_from(section, key)
    }

    pub fn is_empty(&self) -> bool {
        self.ini.iter().all(|(_, props)| props.iter().next().is_none())
    }

    /// Token saved in the file, if any. Not used for authentication.
    pub fn stored_token(&self) -> Option<&str> {
        self.get(Some(TODOIST_SECTION), "token")
            .or_else(|| self.get(None, "token"))
    }

    /// Base URL override for the task service.
    pub fn api_url(&self) -> Option<&str> {
        self.get(Some(TODOIST_SECTION), "api_url")
            .filter(|url| !url.is_empty())
    }

    /// `color = false` turns off colored output. Unparseable values are ignored.
    pub fn color(&self) -> Option<bool> {
        self.get(Some(TODOIST_SECTION), "color")
            .and_then(|value| value.trim().parse().ok())
    }
}

/// Picks the settings file: an explicit path wins, then `./api_key.ini`,
/// then `<config dir>/todo/api_key.ini`.
pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
    if let Some(raw) = explicit {
        let expanded = shellexpand::full(raw)
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        return PathBuf::from(expanded);
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    match dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)) {
        Some(user) if user.exists() => user,
        _ => local,
    }
}

/// Reads the settings file. A missing, unreadable or malformed file gives
/// an empty `Config`.
pub fn load(path: &Path) -> Config {
    if !path.exists() {
        o_debug!("No config file at {}", path.display());
        return Config::default();
    }

    match Ini::load_from_file(path) {
        Ok(ini) => {
            o_debug!("Loaded config from {}", path.display());
            Config { ini }
        }
        Err(e) => {
            o_debug!("Ignoring config file {}: {}", path.display(), e);
            Config::default()
        }
    }
}
