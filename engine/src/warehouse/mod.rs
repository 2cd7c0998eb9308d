//! The theme warehouse: a directory of themes, each a subdirectory holding a
//! `palette.toml` and one subdirectory per application it supports.

mod generate;

pub use generate::{GeneratedFile, default_output_dir, generate};

use crate::error::{ThemerError, ThemerResult};
use crate::fsutil;
use crate::palette::{self, PaletteModel};
use std::path::{Path, PathBuf};

pub const PALETTE_FILE: &str = "palette.toml";

/// A theme loaded from the warehouse.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    /// Absolute path of the theme directory
    pub dir: PathBuf,
    pub palette: PaletteModel,
}

impl Theme {
    /// The theme's subdirectory for `app`, whether or not it exists.
    pub fn app_dir(&self, app: &str) -> PathBuf {
        self.dir.join(app)
    }

    pub fn has_app(&self, app: &str) -> bool {
        self.app_dir(app).is_dir()
    }
}

fn check_theme_name(name: &str) -> ThemerResult<()> {
    if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\']) {
        return Err(ThemerError::Usage(format!("invalid theme name \"{name}\"")));
    }
    Ok(())
}

/// Load `<root>/<name>/palette.toml` through the full palette pipeline.
pub fn load_theme(root: &Path, name: &str) -> ThemerResult<Theme> {
    check_theme_name(name)?;

    let dir = std::path::absolute(root.join(name)).map_err(|e| ThemerError::io(root, e))?;
    let palette_path = dir.join(PALETTE_FILE);
    if !palette_path.is_file() {
        return Err(ThemerError::Usage(format!(
            "unknown theme \"{name}\": no {PALETTE_FILE} in {}",
            dir.display()
        )));
    }

    let palette = palette::load(&palette_path).map_err(|e| ThemerError::ThemeLoad {
        name: name.to_string(),
        source: Box::new(e),
    })?;

    log::info!("Loaded theme '{name}' from {}", dir.display());
    Ok(Theme {
        name: name.to_string(),
        dir,
        palette,
    })
}

/// Names of every theme under `root`, sorted. A theme is a directory that
/// contains a `palette.toml`.
pub fn list_themes(root: &Path) -> ThemerResult<Vec<String>> {
    let themes = fsutil::subdirectories(root)?
        .into_iter()
        .filter(|name| root.join(name).join(PALETTE_FILE).is_file())
        .collect();
    Ok(themes)
}

/// Sorted application subdirectories of a theme directory.
pub fn app_dirs(theme_dir: &Path) -> ThemerResult<Vec<String>> {
    fsutil::subdirectories(theme_dir)
}
