use super::{Adapter, template};
use crate::error::ThemerResult;
use crate::palette::PaletteModel;

const TEMPLATE: &str = r##"# {{ name }} theme for eza
colourful: true

filekinds:
  normal: {foreground: "{{ fg }}"}
  directory: {foreground: "{{ color4 }}", is_bold: true}
  symlink: {foreground: "{{ color6 }}"}
  pipe: {foreground: "{{ ui.dimmed }}"}
  block_device: {foreground: "{{ color3 }}"}
  char_device: {foreground: "{{ color3 }}"}
  socket: {foreground: "{{ color5 }}"}
  special: {foreground: "{{ color5 }}"}
  executable: {foreground: "{{ color2 }}", is_bold: true}
  mount_point: {foreground: "{{ color4 }}", is_underline: true}

perms:
  user_read: {foreground: "{{ color3 }}"}
  user_write: {foreground: "{{ color1 }}"}
  user_execute_file: {foreground: "{{ color2 }}", is_bold: true}
  user_execute_other: {foreground: "{{ color2 }}"}
  group_read: {foreground: "{{ color11 }}"}
  group_write: {foreground: "{{ color9 }}"}
  group_execute: {foreground: "{{ color10 }}"}
  other_read: {foreground: "{{ ui.dimmed }}"}
  other_write: {foreground: "{{ ui.dimmed }}"}
  other_execute: {foreground: "{{ ui.dimmed }}"}
  special_user_file: {foreground: "{{ color5 }}"}
  special_other: {foreground: "{{ ui.dimmed }}"}
  attribute: {foreground: "{{ ui.dimmed }}"}

size:
  major: {foreground: "{{ color2 }}"}
  minor: {foreground: "{{ color2 }}"}
  number_byte: {foreground: "{{ fg }}"}
  number_kilo: {foreground: "{{ color6 }}"}
  number_mega: {foreground: "{{ color4 }}"}
  number_giga: {foreground: "{{ color5 }}"}
  number_huge: {foreground: "{{ color1 }}"}
  unit_byte: {foreground: "{{ ui.dimmed }}"}
  unit_kilo: {foreground: "{{ ui.dimmed }}"}
  unit_mega: {foreground: "{{ ui.dimmed }}"}
  unit_giga: {foreground: "{{ ui.dimmed }}"}
  unit_huge: {foreground: "{{ ui.dimmed }}"}

users:
  user_you: {foreground: "{{ color3 }}"}
  user_root: {foreground: "{{ ui.error }}", is_bold: true}
  user_other: {foreground: "{{ ui.dimmed }}"}
  group_yours: {foreground: "{{ color11 }}"}
  group_other: {foreground: "{{ ui.dimmed }}"}
  group_root: {foreground: "{{ ui.error }}"}

links:
  normal: {foreground: "{{ color6 }}"}
  multi_link_file: {foreground: "{{ ui.warning }}", is_bold: true}

git:
  new: {foreground: "{{ ui.success }}"}
  modified: {foreground: "{{ ui.warning }}"}
  deleted: {foreground: "{{ ui.error }}"}
  renamed: {foreground: "{{ ui.info }}"}
  typechange: {foreground: "{{ color5 }}"}
  ignored: {foreground: "{{ ui.dimmed }}"}
  conflicted: {foreground: "{{ ui.error }}", is_bold: true}

git_repo:
  branch_main: {foreground: "{{ ui.success }}"}
  branch_other: {foreground: "{{ ui.accent }}"}
  git_clean: {foreground: "{{ ui.success }}"}
  git_dirty: {foreground: "{{ ui.warning }}"}

punctuation: {foreground: "{{ ui.border }}"}
date: {foreground: "{{ ui.info }}"}
inode: {foreground: "{{ ui.dimmed }}"}
blocks: {foreground: "{{ ui.dimmed }}"}
header: {foreground: "{{ fg }}", is_underline: true}
octal: {foreground: "{{ color5 }}"}
flags: {foreground: "{{ ui.accent }}"}

symlink_path: {foreground: "{{ color6 }}"}
control_char: {foreground: "{{ color1 }}"}
broken_symlink: {foreground: "{{ ui.error }}"}
broken_path_overlay: {foreground: "{{ ui.dimmed }}"}
"##;

/// eza `theme.yml` covering file kinds, permissions, sizes, users, links
/// and git status.
pub struct EzaAdapter;

impl Adapter for EzaAdapter {
    fn name(&self) -> &'static str {
        "eza"
    }

    fn dir_name(&self) -> &'static str {
        "eza"
    }

    fn file_name(&self, theme_name: &str) -> String {
        format!("{theme_name}.yml")
    }

    fn generate(&self, model: &PaletteModel) -> ThemerResult<Vec<u8>> {
        template::render("eza", TEMPLATE, model)
    }
}
