use serde::Deserialize;
use std::collections::BTreeMap;

/// Metadata from the `[theme]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeMetadata {
    /// Identifier used as the file stem of every rendered file
    pub name: String,
    pub author: String,
    /// "dark", "light" or empty
    pub variant: String,
}

impl ThemeMetadata {
    pub fn is_light(&self) -> bool {
        self.variant == "light"
    }
}

/// Semantic UI colors from `[palette.ui]`. Absent slots are derived from
/// the ANSI colors when defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiColors {
    pub border: Option<String>,
    pub dimmed: Option<String>,
    pub accent: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
}

/// Syntax-highlighting slots from `[palette.syntax]`. Never derived.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyntaxColors {
    pub line_highlight: Option<String>,
    pub number: Option<String>,
    pub error: Option<String>,
}

/// The color palette from the `[palette]` section.
///
/// Every slot is optional while the palette moves through the pipeline so
/// that validation, not deserialization, reports missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteColors {
    pub bg: Option<String>,
    pub fg: Option<String>,
    pub cursor: Option<String>,
    pub selection_bg: Option<String>,
    pub selection_fg: Option<String>,

    // === Normal ANSI ===
    pub color0: Option<String>,
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub color3: Option<String>,
    pub color4: Option<String>,
    pub color5: Option<String>,
    pub color6: Option<String>,
    pub color7: Option<String>,

    // === Bright ANSI ===
    pub color8: Option<String>,
    pub color9: Option<String>,
    pub color10: Option<String>,
    pub color11: Option<String>,
    pub color12: Option<String>,
    pub color13: Option<String>,
    pub color14: Option<String>,
    pub color15: Option<String>,

    pub ui: UiColors,
    pub syntax: SyntaxColors,
}

impl PaletteColors {
    /// The sixteen ANSI slots in index order.
    pub fn ansi(&self) -> [Option<&str>; 16] {
        [
            self.color0.as_deref(),
            self.color1.as_deref(),
            self.color2.as_deref(),
            self.color3.as_deref(),
            self.color4.as_deref(),
            self.color5.as_deref(),
            self.color6.as_deref(),
            self.color7.as_deref(),
            self.color8.as_deref(),
            self.color9.as_deref(),
            self.color10.as_deref(),
            self.color11.as_deref(),
            self.color12.as_deref(),
            self.color13.as_deref(),
            self.color14.as_deref(),
            self.color15.as_deref(),
        ]
    }

    /// Slots that must be present, in validation order.
    pub fn required_slots(&self) -> [(&'static str, Option<&str>); 18] {
        let ansi = self.ansi();
        [
            ("palette.bg", self.bg.as_deref()),
            ("palette.fg", self.fg.as_deref()),
            ("palette.color0", ansi[0]),
            ("palette.color1", ansi[1]),
            ("palette.color2", ansi[2]),
            ("palette.color3", ansi[3]),
            ("palette.color4", ansi[4]),
            ("palette.color5", ansi[5]),
            ("palette.color6", ansi[6]),
            ("palette.color7", ansi[7]),
            ("palette.color8", ansi[8]),
            ("palette.color9", ansi[9]),
            ("palette.color10", ansi[10]),
            ("palette.color11", ansi[11]),
            ("palette.color12", ansi[12]),
            ("palette.color13", ansi[13]),
            ("palette.color14", ansi[14]),
            ("palette.color15", ansi[15]),
        ]
    }

    /// Slots that may be absent, in validation order.
    pub fn optional_slots(&self) -> [(&'static str, Option<&str>); 13] {
        [
            ("palette.cursor", self.cursor.as_deref()),
            ("palette.selection_bg", self.selection_bg.as_deref()),
            ("palette.selection_fg", self.selection_fg.as_deref()),
            ("palette.ui.border", self.ui.border.as_deref()),
            ("palette.ui.dimmed", self.ui.dimmed.as_deref()),
            ("palette.ui.accent", self.ui.accent.as_deref()),
            ("palette.ui.success", self.ui.success.as_deref()),
            ("palette.ui.warning", self.ui.warning.as_deref()),
            ("palette.ui.error", self.ui.error.as_deref()),
            ("palette.ui.info", self.ui.info.as_deref()),
            (
                "palette.syntax.line_highlight",
                self.syntax.line_highlight.as_deref(),
            ),
            ("palette.syntax.number", self.syntax.number.as_deref()),
            ("palette.syntax.error", self.syntax.error.as_deref()),
        ]
    }

    /// Treat empty strings from the document as absent slots.
    pub(crate) fn clear_empty_slots(&mut self) {
        let slots = [
            &mut self.bg,
            &mut self.fg,
            &mut self.cursor,
            &mut self.selection_bg,
            &mut self.selection_fg,
            &mut self.color0,
            &mut self.color1,
            &mut self.color2,
            &mut self.color3,
            &mut self.color4,
            &mut self.color5,
            &mut self.color6,
            &mut self.color7,
            &mut self.color8,
            &mut self.color9,
            &mut self.color10,
            &mut self.color11,
            &mut self.color12,
            &mut self.color13,
            &mut self.color14,
            &mut self.color15,
            &mut self.ui.border,
            &mut self.ui.dimmed,
            &mut self.ui.accent,
            &mut self.ui.success,
            &mut self.ui.warning,
            &mut self.ui.error,
            &mut self.ui.info,
            &mut self.syntax.line_highlight,
            &mut self.syntax.number,
            &mut self.syntax.error,
        ];
        for slot in slots {
            if slot.as_deref() == Some("") {
                *slot = None;
            }
        }
    }
}

/// The finalized palette: metadata, colors, per-adapter overrides and
/// references to externally managed themes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteModel {
    pub theme: ThemeMetadata,
    pub palette: PaletteColors,
    /// Adapter name to a complete replacement palette for that adapter only
    pub overrides: BTreeMap<String, PaletteColors>,
    /// Application name to a theme identifier owned by that application
    pub references: BTreeMap<String, String>,
}

impl PaletteModel {
    /// The external theme identifier for `app`, if one is set and non-empty.
    pub fn reference(&self, app: &str) -> Option<&str> {
        self.references
            .get(app)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }
}

/// Deserialization target mirroring the on-disk document layout.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PaletteDocument {
    pub theme: ThemeMetadata,
    pub palette: PaletteSection,
    pub references: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct PaletteSection {
    pub adapters: BTreeMap<String, AdapterSection>,
    #[serde(flatten)]
    pub colors: PaletteColors,
}

/// `[palette.adapters.<name>]`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct AdapterSection {
    pub palette: PaletteColors,
}

impl From<PaletteDocument> for PaletteModel {
    fn from(document: PaletteDocument) -> Self {
        let mut palette = document.palette.colors;
        palette.clear_empty_slots();

        let overrides = document
            .palette
            .adapters
            .into_iter()
            .map(|(name, section)| {
                let mut colors = section.palette;
                colors.clear_empty_slots();
                (name, colors)
            })
            .collect();

        Self {
            theme: document.theme,
            palette,
            overrides,
            references: document.references,
        }
    }
}
