//! Desktop icon column and its persisted per-icon image preferences.

use crate::errors::Result;
use crate::models::AppKind;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DesktopIcon {
    pub label: String,
    pub kind: AppKind,
    pub image: String,
}

/// The icons the shell shows when no configuration overrides them.
#[must_use]
pub fn default_icons() -> Vec<DesktopIcon> {
    vec![
        DesktopIcon {
            label: "About Me".to_string(),
            kind: AppKind::AboutMe,
            image: "assets/finder.png".to_string(),
        },
        DesktopIcon {
            label: "Blog".to_string(),
            kind: AppKind::Blog,
            image: "assets/blog.png".to_string(),
        },
        DesktopIcon {
            label: "Terminal".to_string(),
            kind: AppKind::Terminal,
            image: "assets/terminal.png".to_string(),
        },
    ]
}

/// User-chosen icon images, keyed by icon label. Loaded once at startup
/// and written through on every change, as a small JSON file in the XDG
/// state directory.
#[derive(Debug, Default)]
pub struct IconPrefs {
    images: HashMap<String, String>,
    path: Option<PathBuf>,
}

impl IconPrefs {
    /// Load the preference file from the XDG state directory. A missing
    /// file is an empty preference set, not an error.
    pub fn load() -> Result<Self> {
        let path = xdg::BaseDirectories::with_prefix("retrodesk")?
            .place_state_file("icons.json")?;
        Self::load_from(path)
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        let images = match std::fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(_) => HashMap::new(),
        };
        Ok(Self {
            images,
            path: Some(path),
        })
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<&str> {
        self.images.get(label).map(String::as_str)
    }

    /// Record a custom image and write the file through.
    pub fn set(&mut self, label: &str, image: &str) -> Result<()> {
        self.images.insert(label.to_string(), image.to_string());
        self.save()
    }

    /// Drop a custom image, falling back to the default, and write through.
    pub fn reset(&mut self, label: &str) -> Result<()> {
        self.images.remove(label);
        self.save()
    }

    /// Overlay the stored preferences onto an icon list.
    pub fn apply(&self, icons: &mut [DesktopIcon]) {
        for icon in icons {
            if let Some(image) = self.get(&icon.label) {
                icon.image = image.to_string();
            }
        }
    }

    fn save(&self) -> Result<()> {
        if let Some(path) = &self.path {
            let json = serde_json::to_string(&self.images)?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}
