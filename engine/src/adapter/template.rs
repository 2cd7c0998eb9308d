//! Shared template rendering for the built-in adapters.

use crate::error::ThemerResult;
use crate::palette::PaletteModel;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

/// Flat, string-only view of a palette handed to every template.
///
/// Absent optional slots render as the empty string.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub name: &'a str,
    /// Theme name with its first character uppercased
    pub title: String,
    pub light: bool,

    pub bg: &'a str,
    pub fg: &'a str,
    pub cursor: &'a str,
    pub selection_bg: &'a str,
    pub selection_fg: &'a str,

    pub ansi: [&'a str; 16],
    pub color0: &'a str,
    pub color1: &'a str,
    pub color2: &'a str,
    pub color3: &'a str,
    pub color4: &'a str,
    pub color5: &'a str,
    pub color6: &'a str,
    pub color7: &'a str,
    pub color8: &'a str,
    pub color9: &'a str,
    pub color10: &'a str,
    pub color11: &'a str,
    pub color12: &'a str,
    pub color13: &'a str,
    pub color14: &'a str,
    pub color15: &'a str,

    pub ui: UiContext<'a>,
    pub syntax: SyntaxContext<'a>,
}

#[derive(Debug, Serialize)]
pub struct UiContext<'a> {
    pub border: &'a str,
    pub dimmed: &'a str,
    pub accent: &'a str,
    pub success: &'a str,
    pub warning: &'a str,
    pub error: &'a str,
    pub info: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SyntaxContext<'a> {
    pub line_highlight: &'a str,
    pub number: &'a str,
    pub error: &'a str,
}

fn slot(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

/// "bleu" becomes "Bleu".
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl<'a> RenderContext<'a> {
    pub fn new(model: &'a PaletteModel) -> Self {
        let p = &model.palette;
        let ansi = p.ansi().map(Option::unwrap_or_default);

        Self {
            name: &model.theme.name,
            title: title_case(&model.theme.name),
            light: model.theme.is_light(),
            bg: slot(&p.bg),
            fg: slot(&p.fg),
            cursor: slot(&p.cursor),
            selection_bg: slot(&p.selection_bg),
            selection_fg: slot(&p.selection_fg),
            ansi,
            color0: ansi[0],
            color1: ansi[1],
            color2: ansi[2],
            color3: ansi[3],
            color4: ansi[4],
            color5: ansi[5],
            color6: ansi[6],
            color7: ansi[7],
            color8: ansi[8],
            color9: ansi[9],
            color10: ansi[10],
            color11: ansi[11],
            color12: ansi[12],
            color13: ansi[13],
            color14: ansi[14],
            color15: ansi[15],
            ui: UiContext {
                border: slot(&p.ui.border),
                dimmed: slot(&p.ui.dimmed),
                accent: slot(&p.ui.accent),
                success: slot(&p.ui.success),
                warning: slot(&p.ui.warning),
                error: slot(&p.ui.error),
                info: slot(&p.ui.info),
            },
            syntax: SyntaxContext {
                line_highlight: slot(&p.syntax.line_highlight),
                number: slot(&p.syntax.number),
                error: slot(&p.syntax.error),
            },
        }
    }
}

/// Render `source` against `model`.
///
/// Output is taken literally: no escaping, trailing newlines kept, and any
/// reference to an unknown variable is an error.
pub fn render(template_name: &str, source: &str, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_auto_escape_callback(|_| AutoEscape::None);
    env.set_undefined_behavior(UndefinedBehavior::Strict);

    let template = env.template_from_named_str(template_name, source)?;
    let rendered = template.render(RenderContext::new(model))?;
    Ok(rendered.into_bytes())
}
