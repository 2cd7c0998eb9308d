//! Persisted selections under `<home>/.config/the-themer/`.
//!
//! Three one-line files: `current` (the active theme), `default-dark` and
//! `default-light` (what the `dark` and `light` aliases resolve to).

use crate::error::{ThemerError, ThemerResult};
use crate::fsutil::{self, FILE_MODE};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CURRENT_FILE: &str = "current";

/// Which default a theme is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Dark,
    Light,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Dark => "dark",
            Variant::Light => "light",
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            Variant::Dark => "default-dark",
            Variant::Light => "default-light",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ThemerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Variant::Dark),
            "light" => Ok(Variant::Light),
            other => Err(ThemerError::Usage(format!(
                "invalid variant \"{other}\": expected \"dark\" or \"light\""
            ))),
        }
    }
}

/// Reads and writes the state files.
#[derive(Debug, Clone)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Store rooted at `<home>/.config/the-themer`.
    pub fn new(home: &Path) -> Self {
        Self {
            dir: home.join(".config").join("the-themer"),
        }
    }

    fn read(&self, file: &str) -> ThemerResult<String> {
        let path = self.dir.join(file);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(content.trim().to_string()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(ThemerError::io(path, e)),
        }
    }

    fn write(&self, file: &str, theme: &str) -> ThemerResult<()> {
        fsutil::create_dir_all(&self.dir)?;
        let path = self.dir.join(file);
        fsutil::write_file(&path, format!("{theme}\n").as_bytes(), FILE_MODE)?;
        log::debug!("Recorded '{theme}' in {}", path.display());
        Ok(())
    }

    /// The active theme, or an empty string when none was recorded.
    pub fn read_current(&self) -> ThemerResult<String> {
        self.read(CURRENT_FILE)
    }

    pub fn write_current(&self, theme: &str) -> ThemerResult<()> {
        self.write(CURRENT_FILE, theme)
    }

    /// The default for `variant`, or an empty string when unset.
    pub fn read_default(&self, variant: Variant) -> ThemerResult<String> {
        self.read(variant.file_name())
    }

    pub fn write_default(&self, variant: Variant, theme: &str) -> ThemerResult<()> {
        self.write(variant.file_name(), theme)
    }
}

/// Map the `dark`/`light` aliases to their configured themes; any other
/// argument is already a theme name.
pub fn resolve_theme_name(store: &StateStore, arg: &str) -> ThemerResult<String> {
    let Ok(variant) = arg.parse::<Variant>() else {
        return Ok(arg.to_string());
    };

    let theme = store.read_default(variant)?;
    if theme.is_empty() {
        return Err(ThemerError::Usage(format!(
            "no default {variant} theme set; run: the-themer set {variant} <theme>"
        )));
    }
    log::info!("Resolved '{variant}' to theme '{theme}'");
    Ok(theme)
}
