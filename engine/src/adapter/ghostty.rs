use super::{Adapter, template};
use crate::error::ThemerResult;
use crate::palette::PaletteModel;

/// Blank line after the header comes from the newline opening the loop
/// body. The file ends after `0.7` with no trailing newline.
const TEMPLATE: &str = r##"# {{ name }} theme for Ghostty
{% for color in ansi %}
palette = {{ loop.index0 }}={{ color }}{% endfor %}

background = {{ bg }}
foreground = {{ fg }}
cursor-color = {{ cursor }}
cursor-text = {{ fg }}
selection-background = {{ selection_bg }}
selection-foreground = {{ selection_fg }}

# Transparency and blur effects
unfocused-split-opacity = 0.7"##;

/// Ghostty `key = value` theme file.
pub struct GhosttyAdapter;

impl Adapter for GhosttyAdapter {
    fn name(&self) -> &'static str {
        "ghostty"
    }

    fn dir_name(&self) -> &'static str {
        "ghostty"
    }

    fn file_name(&self, theme_name: &str) -> String {
        format!("{theme_name}.ghostty")
    }

    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
        template::render("ghostty", TEMPLATE, model)
    }
}
