//! Palette document parsing, default derivation and validation.
//!
//! A palette moves through a fixed pipeline: [`PaletteModel::parse`] →
//! [`PaletteModel::apply_defaults`] → [`PaletteModel::validate`]. [`load`]
//! runs all three stages against a file on disk.

pub mod defaults;
pub mod types;
pub mod validation;

pub use types::{PaletteColors, PaletteModel, SyntaxColors, ThemeMetadata, UiColors};
pub use validation::{HexColorValidator, PaletteFieldError};

use crate::error::{ThemerError, ThemerResult};
use std::path::Path;
use types::PaletteDocument;

impl PaletteModel {
    /// Parse a palette document without defaulting or validating it.
    ///
    /// Unknown keys are ignored and empty strings count as absent slots.
    pub fn parse(source: &str) -> ThemerResult<Self> {
        let document: PaletteDocument =
            toml::from_str(source).map_err(|e| ThemerError::Parse(e.to_string()))?;
        Ok(document.into())
    }

    /// The palette a given adapter should render with.
    ///
    /// Returns `None` when no override exists for `adapter`. Otherwise the
    /// override is combined with this model's metadata and references, then
    /// defaulted and validated on its own. Validation messages are prefixed
    /// with the override's section, `palette.adapters.<name>`.
    pub fn for_adapter(&self, adapter: &str) -> Option<ThemerResult<PaletteModel>> {
        let colors = self.overrides.get(adapter)?;

        let mut model = PaletteModel {
            theme: self.theme.clone(),
            palette: colors.clone(),
            overrides: Default::default(),
            references: self.references.clone(),
        };
        model.apply_defaults();

        Some(
            model
                .validate()
                .map(|()| model)
                .map_err(|errors| errors.prefixed(&format!("palette.adapters.{adapter}")).into()),
        )
    }
}

/// Read, parse, default and validate the palette file at `path`.
///
/// The first failing stage determines the error.
pub fn load(path: impl AsRef<Path>) -> ThemerResult<PaletteModel> {
    let path = path.as_ref();
    log::debug!("Loading palette from {}", path.display());

    let source = std::fs::read_to_string(path).map_err(|e| ThemerError::io(path, e))?;
    let mut model = PaletteModel::parse(&source)?;
    model.apply_defaults();
    model.validate()?;

    log::debug!(
        "Loaded palette '{}' with {} adapter override(s)",
        model.theme.name,
        model.overrides.len()
    );
    Ok(model)
}
