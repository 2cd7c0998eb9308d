use super::{ActivationContext, ActivationOutcome, json_edit};
use crate::error::{ThemerError, ThemerResult};
use crate::fsutil::{self, FILE_MODE};
use crate::warehouse::Theme;
use serde_json::Value;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// `Ok(None)` means the theme has nothing for this application.
type SwitchFn = fn(&Theme, &ActivationContext) -> ThemerResult<Option<String>>;

const HANDLERS: [(&str, SwitchFn); 9] = [
    ("ghostty", switch_ghostty),
    ("bat", switch_bat),
    ("delta", switch_delta),
    ("fzf", switch_fzf),
    ("starship", switch_starship),
    ("eza", switch_eza),
    ("gh-dash", switch_gh_dash),
    ("neovim", switch_neovim),
    ("claude", switch_claude),
];

const NOT_CONFIGURED: &str = "not configured for this theme";

/// The single file a theme ships for `app`, if the directory exists.
fn theme_file(theme: &Theme, app: &str) -> ThemerResult<Option<String>> {
    let dir = theme.app_dir(app);
    if !dir.is_dir() {
        return Ok(None);
    }
    fsutil::first_file(&dir)
}

fn write_pointer(path: &Path, contents: &str) -> ThemerResult<()> {
    fsutil::create_parent(path)?;
    fsutil::write_file(path, contents.as_bytes(), FILE_MODE)
}

/// A file that `install` should already have placed.
fn installed(path: PathBuf, theme: &Theme) -> ThemerResult<PathBuf> {
    if path.is_file() {
        Ok(path)
    } else {
        Err(ThemerError::Usage(format!(
            "{} is not installed; run: the-themer install {}",
            path.display(),
            theme.name
        )))
    }
}

fn switch_ghostty(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let Some(file) = theme_file(theme, "ghostty")? else {
        return Ok(None);
    };

    let pointer = ctx.config_dir().join("ghostty").join("theme.local");
    write_pointer(
        &pointer,
        &format!("# Managed by the-themer, do not edit\ntheme = {file}\n"),
    )?;
    Ok(Some(format!("theme.local -> {file}")))
}

/// Pointer file naming a theme the application resolves itself: the file
/// stem of the shipped file, else the palette's reference for `app`.
fn switch_named_pointer(
    theme: &Theme,
    ctx: &ActivationContext,
    app: &str,
    suffix: &str,
    pointer_name: &str,
) -> ThemerResult<Option<String>> {
    let name = match theme_file(theme, app)? {
        Some(file) => file.strip_suffix(suffix).unwrap_or(&file).to_string(),
        None => match theme.palette.reference(app) {
            Some(reference) => reference.to_string(),
            None => return Ok(None),
        },
    };

    write_pointer(&ctx.config_dir().join(pointer_name), &format!("{name}\n"))?;
    Ok(Some(format!("{pointer_name} -> {name}")))
}

fn switch_bat(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    switch_named_pointer(theme, ctx, "bat", ".tmTheme", "bat-theme.txt")
}

fn switch_delta(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    switch_named_pointer(theme, ctx, "delta", ".gitconfig", "delta-theme.txt")
}

/// Point `link` at the installed copy of the theme's file for `app`.
fn switch_symlink(
    theme: &Theme,
    app: &str,
    installed_dir: PathBuf,
    link: PathBuf,
    label: &str,
) -> ThemerResult<Option<String>> {
    let Some(file) = theme_file(theme, app)? else {
        return Ok(None);
    };

    let target = installed(installed_dir.join(&file), theme)?;
    fsutil::replace_symlink(&target, &link)?;
    log::debug!("{} -> {}", link.display(), target.display());
    Ok(Some(format!("{label} -> {file}")))
}

fn switch_fzf(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let staged = ctx.themer_dir().join("fzf");
    let link = staged.join("current.zsh");
    switch_symlink(theme, "fzf", staged, link, "fzf/current.zsh")
}

fn switch_starship(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    switch_symlink(
        theme,
        "starship",
        ctx.themer_dir().join("starship"),
        ctx.config_dir().join("starship.toml"),
        "starship.toml",
    )
}

fn switch_eza(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let eza = ctx.config_dir().join("eza");
    switch_symlink(
        theme,
        "eza",
        eza.join("themes"),
        eza.join("theme.yml"),
        "eza/theme.yml",
    )
}

fn switch_gh_dash(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let Some(file) = theme_file(theme, "gh-dash")? else {
        return Ok(None);
    };

    let source = installed(ctx.themer_dir().join("gh-dash").join(&file), theme)?;
    let dest = ctx.config_dir().join("gh-dash").join("config.yml");
    fsutil::create_parent(&dest)?;
    fsutil::copy_file(&source, &dest)?;
    Ok(Some(format!("gh-dash/config.yml -> {file}")))
}

fn switch_neovim(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let Some(colorscheme) = theme.palette.reference("neovim") else {
        return Ok(None);
    };
    let Some(nvim) = ctx.tools.locate("nvim") else {
        return Ok(Some("nvim not on PATH, skipped".to_string()));
    };

    let lua = format!(
        "lua pcall(function() require('themery').setThemeByName('{colorscheme}', true) end)"
    );
    let output = ctx
        .tools
        .run(&nvim, &["--headless", "-c", &lua, "-c", "qa"])?;
    if !output.success {
        return Err(ThemerError::external("nvim", &output.combined));
    }
    Ok(Some(format!("neovim -> {colorscheme}")))
}

/// The value "dark" removes the key since dark is Claude's default.
fn switch_claude(theme: &Theme, ctx: &ActivationContext) -> ThemerResult<Option<String>> {
    let Some(value) = theme.palette.reference("claude") else {
        return Ok(None);
    };

    let path = ctx.home.join(".claude.json");
    let (original, mode) = match std::fs::read_to_string(&path) {
        Ok(content) => {
            let mode = std::fs::metadata(&path)
                .map_err(|e| ThemerError::io(&path, e))?
                .permissions()
                .mode()
                & 0o7777;
            (Some(content), mode)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => (None, FILE_MODE),
        Err(e) => return Err(ThemerError::io(&path, e)),
    };

    let edited = if value == "dark" {
        match &original {
            Some(content) => json_edit::remove_member(content, "theme")?,
            None => "{}\n".to_string(),
        }
    } else {
        json_edit::set_member(original.as_deref(), "theme", &Value::String(value.to_string()))?
    };

    if original.as_deref() == Some(edited.as_str()) {
        return Ok(Some(format!("claude.json already set to {value}")));
    }

    fsutil::write_atomic(&path, edited.as_bytes(), mode)?;
    if value == "dark" {
        Ok(Some("claude.json -> removed theme key (dark is default)".to_string()))
    } else {
        Ok(Some(format!("claude.json -> {value}")))
    }
}

/// Activate `theme` for every application, in a fixed order: ghostty, bat,
/// delta, fzf, starship, eza, gh-dash, neovim, claude.
pub fn switch(theme: &Theme, ctx: &ActivationContext) -> Vec<ActivationOutcome> {
    log::info!("Switching to theme '{}'", theme.name);

    HANDLERS
        .iter()
        .map(|&(app, handler)| match handler(theme, ctx) {
            Ok(Some(message)) => ActivationOutcome::done(app, message),
            Ok(None) => ActivationOutcome::skipped(app, NOT_CONFIGURED),
            Err(e) => {
                log::warn!("switch {app} failed: {e}");
                ActivationOutcome::failed(app, String::new(), e)
            }
        })
        .collect()
}
