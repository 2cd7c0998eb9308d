use super::{ActivationContext, ActivationOutcome};
use crate::error::{ThemerError, ThemerResult};
use crate::fsutil;
use crate::warehouse::Theme;
use std::path::{Path, PathBuf};

/// Work done after an application's files are in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PostHook {
    /// `bat cache --build`
    BatCache,
    /// Register every installed file in git's global `include.path`
    GitInclude,
}

struct InstallHandler {
    app: &'static str,
    dest: fn(&ActivationContext) -> PathBuf,
    post_hook: Option<PostHook>,
}

const HANDLERS: [InstallHandler; 7] = [
    InstallHandler {
        app: "ghostty",
        dest: |ctx| ctx.config_dir().join("ghostty").join("themes"),
        post_hook: None,
    },
    InstallHandler {
        app: "bat",
        dest: bat_themes_dir,
        post_hook: Some(PostHook::BatCache),
    },
    InstallHandler {
        app: "delta",
        dest: |ctx| ctx.themer_dir().join("delta"),
        post_hook: Some(PostHook::GitInclude),
    },
    InstallHandler {
        app: "fzf",
        dest: |ctx| ctx.themer_dir().join("fzf"),
        post_hook: None,
    },
    InstallHandler {
        app: "starship",
        dest: |ctx| ctx.themer_dir().join("starship"),
        post_hook: None,
    },
    InstallHandler {
        app: "eza",
        dest: |ctx| ctx.config_dir().join("eza").join("themes"),
        post_hook: None,
    },
    InstallHandler {
        app: "gh-dash",
        dest: |ctx| ctx.themer_dir().join("gh-dash"),
        post_hook: None,
    },
];

/// bat's own themes directory from `bat --config-dir`, falling back to
/// `~/.config/bat/themes` when bat is absent or fails.
fn bat_themes_dir(ctx: &ActivationContext) -> PathBuf {
    if let Some(bat) = ctx.tools.locate("bat") {
        match ctx.tools.run(&bat, &["--config-dir"]) {
            Ok(output) if output.success && !output.stdout.trim().is_empty() => {
                return PathBuf::from(output.stdout.trim()).join("themes");
            }
            Ok(_) => log::warn!("bat --config-dir failed, using default themes directory"),
            Err(e) => log::warn!("bat --config-dir failed: {e}"),
        }
    }
    ctx.config_dir().join("bat").join("themes")
}

/// Names of the files [`copy_dir_contents`] handled, by what it did to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyReport {
    pub installed: Vec<String>,
    pub overwrote: Vec<String>,
    pub unchanged: Vec<String>,
}

impl CopyReport {
    /// Every file now present in the destination.
    pub fn files(&self) -> impl Iterator<Item = &String> {
        self.installed
            .iter()
            .chain(&self.overwrote)
            .chain(&self.unchanged)
    }

    /// `installed A, B, overwrote C to <dest> (unchanged: D)`, or
    /// `unchanged in <dest>` when nothing was written.
    pub fn summary(&self, dest: &Path) -> String {
        if self.installed.is_empty() && self.overwrote.is_empty() {
            return format!("unchanged in {}", dest.display());
        }

        let mut parts = Vec::new();
        if !self.installed.is_empty() {
            parts.push(format!("installed {}", self.installed.join(", ")));
        }
        if !self.overwrote.is_empty() {
            parts.push(format!("overwrote {}", self.overwrote.join(", ")));
        }

        let mut message = format!("{} to {}", parts.join(", "), dest.display());
        if !self.unchanged.is_empty() {
            message.push_str(&format!(" (unchanged: {})", self.unchanged.join(", ")));
        }
        message
    }
}

/// Copy every regular file in `src` into `dest`, creating `dest` as needed.
///
/// Files whose SHA-256 already matches are left alone. Copies keep the
/// source's permission bits. Subdirectories of `src` are ignored.
pub fn copy_dir_contents(src: &Path, dest: &Path) -> ThemerResult<CopyReport> {
    fsutil::create_dir_all(dest)?;

    let mut report = CopyReport::default();
    for (name, src_file) in fsutil::regular_files(src)? {
        let dest_file = dest.join(&name);

        if dest_file.exists() {
            if fsutil::files_equal(&src_file, &dest_file) {
                log::debug!("{} unchanged", dest_file.display());
                report.unchanged.push(name);
                continue;
            }
            fsutil::copy_file(&src_file, &dest_file)?;
            log::debug!("Overwrote {}", dest_file.display());
            report.overwrote.push(name);
        } else {
            fsutil::copy_file(&src_file, &dest_file)?;
            log::debug!("Installed {}", dest_file.display());
            report.installed.push(name);
        }
    }
    Ok(report)
}

fn rebuild_bat_cache(ctx: &ActivationContext) -> ThemerResult<&'static str> {
    let Some(bat) = ctx.tools.locate("bat") else {
        return Ok("bat not on PATH, skipped cache rebuild");
    };

    let output = ctx.tools.run(&bat, &["cache", "--build"])?;
    if !output.success {
        return Err(ThemerError::external("bat cache --build", &output.combined));
    }
    Ok("bat cache rebuilt")
}

/// Make sure each installed file appears exactly once in git's global
/// `include.path` list.
fn register_git_includes(
    ctx: &ActivationContext,
    dest: &Path,
    report: &CopyReport,
) -> ThemerResult<&'static str> {
    let Some(git) = ctx.tools.locate("git") else {
        return Ok("git not on PATH, skipped include.path");
    };

    // Exit status 1 only means no entries exist yet.
    let existing = ctx
        .tools
        .run(&git, &["config", "--global", "--get-all", "include.path"])?;
    let present: Vec<&str> = existing.stdout.lines().map(str::trim).collect();

    for name in report.files() {
        let path = dest.join(name).display().to_string();
        if present.contains(&path.as_str()) {
            log::debug!("include.path already has {path}");
            continue;
        }

        let added = ctx
            .tools
            .run(&git, &["config", "--global", "--add", "include.path", &path])?;
        if !added.success {
            return Err(ThemerError::external("git config", &added.combined));
        }
        log::info!("Added {path} to git include.path");
    }
    Ok("git include.path configured")
}

fn run_handler(handler: &InstallHandler, theme: &Theme, ctx: &ActivationContext) -> ActivationOutcome {
    let src = theme.app_dir(handler.app);
    if !src.is_dir() {
        return ActivationOutcome::skipped(handler.app, "no config in theme");
    }

    let dest = (handler.dest)(ctx);
    let report = match copy_dir_contents(&src, &dest) {
        Ok(report) => report,
        Err(e) => return ActivationOutcome::failed(handler.app, String::new(), e),
    };
    let message = report.summary(&dest);

    let hook_result = match handler.post_hook {
        None => return ActivationOutcome::done(handler.app, message),
        Some(PostHook::BatCache) => rebuild_bat_cache(ctx),
        Some(PostHook::GitInclude) => register_git_includes(ctx, &dest, &report),
    };

    match hook_result {
        Ok(note) => ActivationOutcome::done(handler.app, format!("{message}; {note}")),
        Err(e) => ActivationOutcome::failed(handler.app, message, e),
    }
}

/// Deploy every application directory of `theme`, in a fixed order:
/// ghostty, bat, delta, fzf, starship, eza, gh-dash.
pub fn install(theme: &Theme, ctx: &ActivationContext) -> Vec<ActivationOutcome> {
    log::info!("Installing theme '{}'", theme.name);

    HANDLERS
        .iter()
        .map(|handler| {
            let outcome = run_handler(handler, theme, ctx);
            if let Some(e) = &outcome.error {
                log::warn!("install {} failed: {e}", handler.app);
            }
            outcome
        })
        .collect()
}
