use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

use crate::document::Layout;
use crate::error::PageError;

lazy_static! {
    static ref PROJECT_DIRS: Option<ProjectDirs> =
        ProjectDirs::from("org", "PictureElement", "bio-page");
}

/// Optional `config.toml` in the platform config directory
pub(crate) fn default_config_path() -> Option<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Where settings came from; a config file counts only if it exists
pub(crate) fn describe_source(path: Option<&Path>) -> String {
    match path {
        Some(path) if path.exists() => format!("config file: {}", path.display()),
        Some(path) => format!(
            "no config file at {}, defaults and environment only",
            path.display()
        ),
        None => "no config directory".into(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Settings {
    pub line_break: String,
    pub picture_width: u32,
    pub log_level: String,
}

impl Settings {
    /// Defaults, then the config file if present, then `BIOPAGE_*` variables
    pub fn load() -> Result<Self, PageError> {
        Self::load_from(default_config_path().as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> Result<Self, PageError> {
        let mut settings = Config::new();
        settings.set_default("line_break", "<br>")?;
        settings.set_default("picture_width", 100i64)?;
        settings.set_default("log_level", "warn")?;

        if let Some(path) = path {
            settings.merge(File::from(path).required(false))?;
        }
        settings.merge(Environment::with_prefix("BIOPAGE"))?;

        Ok(settings.try_into()?)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            line_break: self.line_break.clone(),
            picture_width: self.picture_width,
        }
    }
}
