use super::{Adapter, template};
use crate::error::ThemerResult;
use crate::palette::PaletteModel;

const TEMPLATE: &str = r##"#!/bin/zsh
# {{ name }} theme for fzf

export FZF_DEFAULT_OPTS=$FZF_DEFAULT_OPTS'
  --color=fg:{{ fg }},bg:{{ bg }},hl:{{ ui.accent }}
  --color=fg+:{{ color15 }},bg+:{{ selection_bg }},hl+:{{ ui.accent }}
  --color=info:{{ ui.info }},prompt:{{ color4 }},pointer:{{ ui.accent }}
  --color=marker:{{ ui.success }},spinner:{{ color4 }},header:{{ ui.dimmed }}
  --color=border:{{ ui.border }},gutter:{{ bg }}
  --color=query:{{ fg }},disabled:{{ ui.dimmed }}
  --color=preview-fg:{{ fg }},preview-bg:{{ ui.border }}
'
"##;

/// zsh snippet appending `--color` flags to `FZF_DEFAULT_OPTS`.
///
/// fzf is the adapter most often given its own palette override, since its
/// list backgrounds read differently from the terminal's.
pub struct FzfAdapter;

impl Adapter for FzfAdapter {
    fn name(&self) -> &'static str {
        "fzf"
    }

    fn dir_name(&self) -> &'static str {
        "fzf"
    }

    fn file_name(&self, theme_name: &str) -> String {
        format!("{theme_name}.zsh")
    }

    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
        template::render("fzf", TEMPLATE, model)
    }
}
