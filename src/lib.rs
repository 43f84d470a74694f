use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
pub mod command;
pub mod config;
pub mod errors;
pub mod format;
pub mod filesystem;
pub mod navigator;
pub mod session;
pub mod tui;
pub mod viewer;
pub use command::{Command, Direction, Key, ViewerCommand};
pub use config::KeyBindings;
pub use errors::{BrowseError, ErrorKind};
pub use navigator::{Navigator, PasteMode};
pub use session::{dispatch, Flow, Mode, Session};
pub use viewer::Viewer;
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "fbrowse.log";
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    pub home_dir: PathBuf,
    pub listing: ListingConfig,
    pub display: DisplayConfig,
    pub keys: KeyBindings,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub show_hidden: bool,
    pub dirs_first: bool,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Rows below the viewer page kept for the status line.
    pub reserved_rows: u16,
}
impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            home_dir: get_default_home_dir(),
            listing: ListingConfig::default(),
            display: DisplayConfig::default(),
            keys: KeyBindings::default(),
        }
    }
}
impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            show_hidden: true,
            dirs_first: true,
        }
    }
}
impl Default for DisplayConfig {
    fn default() -> Self {
        Self { reserved_rows: 1 }
    }
}
pub fn get_default_home_dir() -> PathBuf {
    if let Ok(home) = std::env::var("FBROWSE_HOME") {
        PathBuf::from(home)
    } else if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".fbrowse")
    } else if let Ok(user) = std::env::var("USERPROFILE") {
        PathBuf::from(user).join(".fbrowse")
    } else {
        std::env::temp_dir().join(".fbrowse")
    }
}
pub fn config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(CONFIG_FILE)
}
pub fn log_path(home_dir: &Path) -> PathBuf {
    home_dir.join("logs").join(LOG_FILE)
}
impl BrowserConfig {
    /// Reads the config at `path`, falling back to defaults when it is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file {:?}", path))?;
        let config: BrowserConfig = serde_json::from_str(&data)
            .with_context(|| format!("invalid config file {:?}", path))?;
        Ok(config)
    }
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("cannot create directory {:?}", parent))?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data).with_context(|| format!("cannot write config file {:?}", path))?;
        info!("Saved configuration to {:?}", path);
        Ok(())
    }
    pub fn listing_fs(&self) -> filesystem::LocalFs {
        filesystem::LocalFs::new(self.listing.show_hidden, self.listing.dirs_first)
    }
}
pub fn setup_directory_structure(home_dir: &Path) -> Result<()> {
    let logs_dir = home_dir.join("logs");
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("cannot create directory {:?}", logs_dir))?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(home_dir)?.permissions();
        perms.set_mode(0o700);
        fs::set_permissions(home_dir, perms)?;
    }
    Ok(())
}
