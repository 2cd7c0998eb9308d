use super::types::{PaletteColors, PaletteModel, ThemeMetadata};
use crate::error::ValidationErrors;
use crate::validation::Validator;
use std::fmt;

/// A single palette field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteFieldError {
    Missing { field: String },
    InvalidHex { field: String, value: String },
    InvalidName { name: String, reason: &'static str },
    InvalidVariant { variant: String },
}

impl fmt::Display for PaletteFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteFieldError::Missing { field } => {
                write!(f, "{field} is required but not set")
            }
            PaletteFieldError::InvalidHex { field, value } => {
                write!(
                    f,
                    "{field} has invalid hex format: \"{value}\" (expected #RRGGBB)"
                )
            }
            PaletteFieldError::InvalidName { name, reason } => {
                write!(f, "theme.name \"{name}\" {reason}")
            }
            PaletteFieldError::InvalidVariant { variant } => {
                write!(
                    f,
                    "theme.variant has invalid value: \"{variant}\" (expected \"dark\" or \"light\")"
                )
            }
        }
    }
}

/// Checks `#RRGGBB`. Case is not normalized.
pub struct HexColorValidator;

impl HexColorValidator {
    pub fn is_hex(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 7 && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
    }
}

impl Validator<str> for HexColorValidator {
    type Error = String;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if Self::is_hex(input) {
            Ok(())
        } else {
            Err(input.to_string())
        }
    }
}

/// The theme name becomes a file stem, so it must be a single path component.
pub struct ThemeNameValidator;

impl Validator<str> for ThemeNameValidator {
    type Error = PaletteFieldError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        if input.is_empty() {
            return Err(PaletteFieldError::Missing {
                field: "theme.name".to_string(),
            });
        }

        if input.contains('/') || input.contains('\\') {
            return Err(PaletteFieldError::InvalidName {
                name: input.to_string(),
                reason: "must not contain path separators",
            });
        }

        if input == "." || input == ".." {
            return Err(PaletteFieldError::InvalidName {
                name: input.to_string(),
                reason: "is not a valid file name",
            });
        }

        Ok(())
    }
}

pub struct VariantValidator;

impl Validator<str> for VariantValidator {
    type Error = PaletteFieldError;

    fn validate(&self, input: &str) -> Result<(), Self::Error> {
        match input {
            "" | "dark" | "light" => Ok(()),
            other => Err(PaletteFieldError::InvalidVariant {
                variant: other.to_string(),
            }),
        }
    }
}

fn check_metadata(theme: &ThemeMetadata, errors: &mut ValidationErrors) {
    if let Err(err) = ThemeNameValidator.validate(&theme.name) {
        errors.push(err.to_string());
    }
    if let Err(err) = VariantValidator.validate(&theme.variant) {
        errors.push(err.to_string());
    }
}

fn check_colors(palette: &PaletteColors, errors: &mut ValidationErrors) {
    for (field, value) in palette.required_slots() {
        match value {
            None => errors.push(
                PaletteFieldError::Missing {
                    field: field.to_string(),
                }
                .to_string(),
            ),
            Some(value) => check_hex(field, value, errors),
        }
    }

    for (field, value) in palette.optional_slots() {
        if let Some(value) = value {
            check_hex(field, value, errors);
        }
    }
}

fn check_hex(field: &str, value: &str, errors: &mut ValidationErrors) {
    if let Err(value) = HexColorValidator.validate(value) {
        errors.push(
            PaletteFieldError::InvalidHex {
                field: field.to_string(),
                value,
            }
            .to_string(),
        );
    }
}

impl PaletteModel {
    /// Report every problem with the model in a fixed order: metadata,
    /// required colors, then optional colors.
    ///
    /// Per-adapter overrides are checked when they are synthesized for their
    /// adapter, not here.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_metadata(&self.theme, &mut errors);
        check_colors(&self.palette, &mut errors);
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::test_support::complete_palette;
    use claims::{assert_err, assert_ok};

    #[test]
    fn test_hex_validator_accepts_mixed_case() {
        assert_ok!(HexColorValidator.validate("#A167a5"));
        assert_ok!(HexColorValidator.validate("#000000"));
    }

    #[test]
    fn test_hex_validator_rejects_malformed_values() {
        for bad in ["", "#fff", "050a14", "#050a14f", "#gg0000", "##00000", "#ééé"] {
            assert_err!(HexColorValidator.validate(bad), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_complete_model_is_valid() {
        let model = complete_palette();
        assert_ok!(model.validate());
    }

    #[test]
    fn test_missing_and_invalid_fields_in_order() {
        let mut model = complete_palette();
        model.palette.color2 = None;
        model.palette.color5 = None;
        model.palette.bg = Some("not-a-color".to_string());

        let errors = model.validate().unwrap_err();
        assert_eq!(
            errors.messages(),
            &[
                "palette.bg has invalid hex format: \"not-a-color\" (expected #RRGGBB)"
                    .to_string(),
                "palette.color2 is required but not set".to_string(),
                "palette.color5 is required but not set".to_string(),
            ]
        );
    }

    #[test]
    fn test_optional_slot_must_conform_when_present() {
        let mut model = complete_palette();
        model.palette.syntax.number = Some("#12345".to_string());

        let errors = model.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors.messages()[0].starts_with("palette.syntax.number has invalid hex format"));
    }

    #[test]
    fn test_theme_name_rules() {
        assert_ok!(ThemeNameValidator.validate("bleu"));
        assert_eq!(
            ThemeNameValidator.validate("").unwrap_err().to_string(),
            "theme.name is required but not set"
        );
        assert_err!(ThemeNameValidator.validate("../etc"));
        assert_err!(ThemeNameValidator.validate("a\\b"));
        assert_err!(ThemeNameValidator.validate(".."));
    }

    #[test]
    fn test_variant_rules() {
        assert_ok!(VariantValidator.validate(""));
        assert_ok!(VariantValidator.validate("dark"));
        assert_ok!(VariantValidator.validate("light"));
        assert_err!(VariantValidator.validate("Dark"));
    }

    #[test]
    fn test_metadata_errors_come_first() {
        let mut model = complete_palette();
        model.theme.name.clear();
        model.palette.fg = None;

        let errors = model.validate().unwrap_err();
        assert_eq!(errors.messages()[0], "theme.name is required but not set");
        assert_eq!(errors.messages()[1], "palette.fg is required but not set");
    }
}
