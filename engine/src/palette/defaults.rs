use super::types::{PaletteColors, PaletteModel};

/// Fill `slot` from `source` when the slot is absent.
fn fill(slot: &mut Option<String>, source: &Option<String>) {
    if slot.is_none() {
        slot.clone_from(source);
    }
}

impl PaletteColors {
    /// Derive absent optional slots from the ANSI colors.
    ///
    /// Explicit values are never touched, so applying this twice yields the
    /// same palette as applying it once. Syntax slots are not derived.
    pub fn apply_defaults(&mut self) {
        fill(&mut self.cursor, &self.color4);
        fill(&mut self.selection_bg, &self.color8);
        fill(&mut self.selection_fg, &self.fg);

        fill(&mut self.ui.border, &self.color8);
        fill(&mut self.ui.dimmed, &self.color8);
        fill(&mut self.ui.accent, &self.color6);
        fill(&mut self.ui.success, &self.color2);
        fill(&mut self.ui.warning, &self.color3);
        fill(&mut self.ui.error, &self.color1);
        fill(&mut self.ui.info, &self.color4);
    }
}

impl PaletteModel {
    /// Default the primary palette. Overrides are defaulted when they are
    /// synthesized for their adapter.
    pub fn apply_defaults(&mut self) {
        self.palette.apply_defaults();
    }
}
