use super::{Adapter, template};
use crate::error::ThemerResult;
use crate::palette::PaletteModel;

/// TextMate plist. Structural scopes use color4, keyword-like scopes the UI
/// accent, literals color5, comments the dimmed color, emphasis color15.
/// Numbers, constants and invalid code use the syntax slots.
const TEMPLATE: &str = include_str!("bat.tmTheme.j2");

/// TextMate `.tmTheme` for bat's syntax highlighting.
pub struct BatAdapter;

impl Adapter for BatAdapter {
    fn name(&self) -> &'static str {
        "bat"
    }

    fn dir_name(&self) -> &'static str {
        "bat"
    }

    fn file_name(&self, theme_name: &str) -> String {
        format!("{theme_name}.tmTheme")
    }

    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
        let syntax = &model.palette.syntax;
        for (field, value) in [
            ("line_highlight", &syntax.line_highlight),
            ("number", &syntax.number),
            ("error", &syntax.error),
        ] {
            if value.is_none() {
                log::warn!(
                    "bat: palette.syntax.{field} is not set for theme '{}', rendering it empty",
                    model.theme.name
                );
            }
        }

        template::render("bat", TEMPLATE, model)
    }
}
