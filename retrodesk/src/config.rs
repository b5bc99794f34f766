//! Worker configuration, read from `config.toml` in the XDG config
//! directory. Every field has a default, so a partial file is fine and a
//! missing file is written out on first run.

use anyhow::Result;
use retrodesk_core::desktop::{default_icons, DesktopIcon};
use retrodesk_core::models::{Dimensions, Viewport};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use xdg::BaseDirectories;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    /// Viewport width below which the fixed mobile layout applies.
    pub mobile_breakpoint: i32,
    pub min_window_width: i32,
    pub min_window_height: i32,
    /// Milliseconds a closing window lingers before removal.
    pub close_delay_ms: u64,
    /// Viewport assumed until the host reports a real one.
    pub default_viewport_width: i32,
    pub default_viewport_height: i32,
    pub icons: Vec<DesktopIcon>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mobile_breakpoint: 768,
            min_window_width: 200,
            min_window_height: 100,
            close_delay_ms: 50,
            default_viewport_width: 1024,
            default_viewport_height: 768,
            icons: default_icons(),
        }
    }
}

impl retrodesk_core::Config for Config {
    fn mobile_breakpoint(&self) -> i32 {
        self.mobile_breakpoint
    }

    fn min_window_size(&self) -> Dimensions {
        Dimensions::new(self.min_window_width, self.min_window_height)
    }

    fn close_delay(&self) -> Duration {
        Duration::from_millis(self.close_delay_ms)
    }

    fn default_viewport(&self) -> Viewport {
        Viewport::new(self.default_viewport_width, self.default_viewport_height)
    }

    fn create_list_of_icons(&self) -> Vec<DesktopIcon> {
        self.icons.clone()
    }
}

#[must_use]
pub fn load() -> Config {
    load_from_file()
        .map_err(|err| eprintln!("ERROR LOADING CONFIG: {err:?}"))
        .unwrap_or_default()
}

/// # Errors
///
/// Will throw an error if `BaseDirectories` doesn't exist, if the user
/// doesn't have permission to place config.toml, or if config.toml cannot
/// be read (access rights, malformed file, etc.).
/// Can also error from inability to save config.toml on the first run.
fn load_from_file() -> Result<Config> {
    let path = BaseDirectories::with_prefix("retrodesk")?;
    let config_filename = path.place_config_file("config.toml")?;
    if Path::new(&config_filename).exists() {
        let contents = fs::read_to_string(config_filename)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let config = Config::default();
        let toml = toml::to_string(&config)?;
        let mut file = File::create(&config_filename)?;
        file.write_all(toml.as_bytes())?;
        Ok(config)
    }
}
