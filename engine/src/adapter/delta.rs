use super::{Adapter, template};
use crate::error::ThemerResult;
use crate::palette::PaletteModel;

const TEMPLATE: &str = "; {{ name }} theme for delta
; Add to .gitconfig or include via [include] path = <this-file>
[delta \"{{ name }}\"]
\tlight = {% if light %}true{% else %}false{% endif %}
\tsyntax-theme = Nord
\tnavigate = true
\tkeep-plus-minus-markers = true
\tfile-decoration-style = \"none\"
\tfile-style = \"{{ color4 }} bold\"
\tminus-style = \"{{ color1 }}\"
\tminus-emph-style = \"{{ color1 }} bold\"
\tplus-style = \"{{ color2 }}\"
\tplus-emph-style = \"{{ color2 }} bold\"
\thunk-header-style = \"{{ ui.accent }} bold\"
\tline-numbers = true
\tline-numbers-minus-style = \"{{ color1 }}\"
\tline-numbers-plus-style = \"{{ color2 }}\"
\tline-numbers-left-style = \"{{ color8 }}\"
\tline-numbers-right-style = \"{{ color8 }}\"
\tline-numbers-zero-style = \"{{ ui.dimmed }}\"
\tzero-style = \"syntax\"
\twhitespace-error-style = \"reverse {{ color5 }}\"
";

/// Named `[delta "<theme>"]` feature section in gitconfig syntax.
pub struct DeltaAdapter;

impl Adapter for DeltaAdapter {
    fn name(&self) -> &'static str {
        "delta"
    }

    fn dir_name(&self) -> &'static str {
        "delta"
    }

    fn file_name(&self, theme_name: &str) -> String {
        format!("{theme_name}.gitconfig")
    }

    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
        template::render("delta", TEMPLATE, model)
    }
}
