use claims::{assert_none, assert_ok};
use engine::ThemerResult;
use engine::activator::install::copy_dir_contents;
use engine::activator::{
    self, ActivationContext, StateStore, ToolOutput, ToolRunner, Variant, has_errors,
};
use engine::warehouse::{self, Theme};
use proptest::prelude::*;
use sha2::{Digest, Sha256};
use std::cell::RefCell;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Pretends a fixed set of programs is installed and that they all succeed.
#[derive(Default)]
struct StubTools {
    programs: Vec<&'static str>,
    calls: RefCell<Vec<String>>,
}

impl StubTools {
    fn with(programs: &[&'static str]) -> Self {
        Self {
            programs: programs.to_vec(),
            calls: RefCell::default(),
        }
    }
}

impl ToolRunner for StubTools {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        self.programs
            .contains(&program)
            .then(|| PathBuf::from(program))
    }

    fn run(&self, program: &Path, args: &[&str]) -> ThemerResult<ToolOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{} {}", program.display(), args.join(" ")));
        Ok(ToolOutput {
            success: true,
            ..Default::default()
        })
    }
}

struct Fixture {
    home: tempfile::TempDir,
    themes: tempfile::TempDir,
}

impl Fixture {
    fn new() -> Self {
        Self {
            home: tempfile::tempdir().unwrap(),
            themes: tempfile::tempdir().unwrap(),
        }
    }

    fn home(&self) -> &Path {
        self.home.path()
    }

    /// Lay out `<themes>/<name>` with a minimal palette, the given
    /// references and one file per `(app, file)`.
    fn theme(&self, name: &str, references: &[(&str, &str)], files: &[(&str, &str)]) -> Theme {
        let dir = self.themes.path().join(name);
        fs::create_dir_all(&dir).unwrap();

        let mut palette = format!("[theme]\nname = \"{name}\"\n\n[palette]\n");
        palette.push_str("bg = \"#000000\"\nfg = \"#ffffff\"\n");
        for index in 0..16 {
            palette.push_str(&format!("color{index} = \"#{index:02x}{index:02x}{index:02x}\"\n"));
        }
        if !references.is_empty() {
            palette.push_str("\n[references]\n");
            for (app, value) in references {
                palette.push_str(&format!("{app} = \"{value}\"\n"));
            }
        }
        fs::write(dir.join(warehouse::PALETTE_FILE), palette).unwrap();

        for (app, file) in files {
            let app_dir = dir.join(app);
            fs::create_dir_all(&app_dir).unwrap();
            fs::write(app_dir.join(file), format!("{app} config for {name}\n")).unwrap();
        }

        warehouse::load_theme(self.themes.path(), name).unwrap()
    }
}

fn mode(path: &Path) -> u32 {
    fs::metadata(path).unwrap().permissions().mode() & 0o777
}

#[test]
fn test_switch_writes_bat_pointer() {
    let fixture = Fixture::new();
    let theme = fixture.theme("test-theme", &[], &[("bat", "test-theme.tmTheme")]);
    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    let outcomes = activator::switch(&theme, &ctx);
    assert!(!has_errors(&outcomes));

    let pointer = fixture.home().join(".config/bat-theme.txt");
    assert_eq!(fs::read_to_string(pointer).unwrap(), "test-theme\n");
}

#[test]
fn test_switch_claude_light_then_dark_keeps_mode() {
    let fixture = Fixture::new();
    let claude = fixture.home().join(".claude.json");
    fs::write(&claude, r#"{"theme":"light","other":"v"}"#).unwrap();
    fs::set_permissions(&claude, fs::Permissions::from_mode(0o600)).unwrap();

    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    let light = fixture.theme("paper", &[("claude", "light")], &[]);
    assert!(!has_errors(&activator::switch(&light, &ctx)));

    let content = fs::read_to_string(&claude).unwrap();
    assert!(content.contains(r#""theme": "light""#), "{content}");
    assert!(content.contains(r#""other""#));
    assert_eq!(mode(&claude), 0o600);

    let dark = fixture.theme("bleu", &[("claude", "dark")], &[]);
    assert!(!has_errors(&activator::switch(&dark, &ctx)));

    let content = fs::read_to_string(&claude).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_none!(parsed.get("theme"));
    assert_eq!(parsed["other"], "v");
    assert_eq!(mode(&claude), 0o600);
}

#[test]
fn test_install_then_switch_links_fzf() {
    let fixture = Fixture::new();
    let theme = fixture.theme("test-theme", &[], &[("fzf", "test-theme.zsh")]);
    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    assert!(!has_errors(&activator::install(&theme, &ctx)));
    assert!(!has_errors(&activator::switch(&theme, &ctx)));

    let link = fixture.home().join(".config/the-themer/fzf/current.zsh");
    let metadata = fs::symlink_metadata(&link).unwrap();
    assert!(metadata.file_type().is_symlink());
    let target = fs::read_link(&link).unwrap();
    assert!(target.to_string_lossy().ends_with("test-theme.zsh"));
}

#[test]
fn test_install_then_switch_copies_gh_dash_config() {
    let fixture = Fixture::new();
    let theme = fixture.theme("test-theme", &[], &[("gh-dash", "test-theme.yml")]);
    let source = theme.app_dir("gh-dash").join("test-theme.yml");
    fs::set_permissions(&source, fs::Permissions::from_mode(0o600)).unwrap();

    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    assert!(!has_errors(&activator::install(&theme, &ctx)));
    assert!(!has_errors(&activator::switch(&theme, &ctx)));

    let config = fixture.home().join(".config/gh-dash/config.yml");
    assert!(!fs::symlink_metadata(&config).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_to_string(&config).unwrap(),
        "gh-dash config for test-theme\n"
    );
    assert_eq!(mode(&config), 0o600);
}

#[test]
fn test_install_then_switch_links_starship() {
    let fixture = Fixture::new();
    let theme = fixture.theme("test-theme", &[], &[("starship", "test-theme.toml")]);
    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    assert!(!has_errors(&activator::install(&theme, &ctx)));
    assert!(!has_errors(&activator::switch(&theme, &ctx)));

    let link = fixture.home().join(".config/starship.toml");
    assert!(fs::symlink_metadata(&link).unwrap().file_type().is_symlink());
    assert_eq!(
        fs::read_link(&link).unwrap(),
        fixture
            .home()
            .join(".config/the-themer/starship/test-theme.toml")
    );
    assert_eq!(
        fs::read_to_string(&link).unwrap(),
        "starship config for test-theme\n"
    );
}

#[test]
fn test_switch_without_apps_skips_everything() {
    let fixture = Fixture::new();
    let theme = fixture.theme("bare", &[], &[]);
    let tools = StubTools::with(&["nvim", "bat", "git"]);
    let ctx = ActivationContext::new(fixture.home(), &tools);

    let outcomes = activator::switch(&theme, &ctx);
    let apps: Vec<_> = outcomes.iter().map(|o| o.app).collect();
    assert_eq!(
        apps,
        [
            "ghostty", "bat", "delta", "fzf", "starship", "eza", "gh-dash", "neovim", "claude"
        ]
    );
    for outcome in &outcomes {
        assert!(outcome.skipped, "{} was not skipped", outcome.app);
        assert!(outcome.error.is_none());
    }
    assert!(tools.calls.borrow().is_empty());
}

#[test]
fn test_install_runs_post_hooks() {
    let fixture = Fixture::new();
    let theme = fixture.theme(
        "bleu",
        &[],
        &[("bat", "bleu.tmTheme"), ("delta", "bleu.gitconfig")],
    );
    let tools = StubTools::with(&["git"]);
    let ctx = ActivationContext::new(fixture.home(), &tools);

    let outcomes = activator::install(&theme, &ctx);
    assert!(!has_errors(&outcomes));

    let bat = outcomes.iter().find(|o| o.app == "bat").unwrap();
    assert!(bat.message.contains("bat not on PATH"), "{}", bat.message);
    assert!(fixture.home().join(".config/bat/themes/bleu.tmTheme").is_file());

    let delta_file = fixture.home().join(".config/the-themer/delta/bleu.gitconfig");
    assert!(delta_file.is_file());
    let calls = tools.calls.borrow();
    assert!(
        calls
            .iter()
            .any(|call| call.ends_with(&format!("--add include.path {}", delta_file.display())))
    );
}

#[test]
fn test_switch_reports_missing_install_and_continues() {
    let fixture = Fixture::new();
    let theme = fixture.theme("bleu", &[("claude", "light")], &[("fzf", "bleu.zsh")]);
    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    let outcomes = activator::switch(&theme, &ctx);
    assert!(has_errors(&outcomes));

    let fzf = outcomes.iter().find(|o| o.app == "fzf").unwrap();
    let err = fzf.error.as_ref().unwrap();
    assert!(err.to_string().contains("the-themer install bleu"));

    let claude = outcomes.iter().find(|o| o.app == "claude").unwrap();
    assert!(claude.error.is_none());
    assert!(fixture.home().join(".claude.json").is_file());
}

#[test]
fn test_relinking_replaces_previous_target() {
    let fixture = Fixture::new();
    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);

    for name in ["first", "second"] {
        let file = format!("{name}.yml");
        let theme = fixture.theme(name, &[], &[("eza", file.as_str())]);
        assert!(!has_errors(&activator::install(&theme, &ctx)));
        assert!(!has_errors(&activator::switch(&theme, &ctx)));
    }

    let eza = fixture.home().join(".config/eza");
    let links: Vec<_> = fs::read_dir(&eza)
        .unwrap()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().unwrap().is_symlink())
        .collect();
    assert_eq!(links.len(), 1);

    let link = eza.join("theme.yml");
    assert_eq!(
        fs::read_link(&link).unwrap(),
        eza.join("themes").join("second.yml")
    );
    assert_eq!(
        fs::read_to_string(&link).unwrap(),
        "eza config for second\n"
    );
}

#[test]
fn test_claude_edit_without_reference_leaves_file_alone() {
    let fixture = Fixture::new();
    let claude = fixture.home().join(".claude.json");
    fs::write(&claude, "{\"theme\": \"light\"}\n").unwrap();

    let tools = StubTools::default();
    let ctx = ActivationContext::new(fixture.home(), &tools);
    let theme = fixture.theme("bleu", &[], &[]);

    let outcomes = activator::switch(&theme, &ctx);
    assert!(outcomes.iter().all(|o| o.skipped));
    assert_eq!(fs::read_to_string(&claude).unwrap(), "{\"theme\": \"light\"}\n");
}

fn sha256(path: &Path) -> Vec<u8> {
    Sha256::digest(fs::read(path).unwrap()).to_vec()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn test_copy_dir_contents_matches_source(
        files in prop::collection::btree_map("[a-z]{1,8}\\.conf", prop::collection::vec(any::<u8>(), 0..256), 1..6),
        stale in prop::collection::vec(any::<u8>(), 0..64),
    ) {
        let src = tempfile::tempdir().unwrap();
        let dest = tempfile::tempdir().unwrap();
        for (name, content) in &files {
            fs::write(src.path().join(name), content).unwrap();
        }
        let first = files.keys().next().unwrap();
        fs::write(dest.path().join(first), &stale).unwrap();

        let report = copy_dir_contents(src.path(), dest.path()).unwrap();
        prop_assert_eq!(report.files().count(), files.len());

        for name in files.keys() {
            prop_assert_eq!(sha256(&src.path().join(name)), sha256(&dest.path().join(name)));
        }
    }

    #[test]
    fn test_claude_edit_preserves_other_keys_and_mode(
        extra in prop::collection::btree_map("[a-z]{1,6}", "[a-zA-Z0-9 ]{0,12}", 0..5),
        value in prop::sample::select(vec!["light", "dark", "light-daltonized"]),
        file_mode in prop::sample::select(vec![0o600u32, 0o640, 0o644]),
    ) {
        let fixture = Fixture::new();
        let claude = fixture.home().join(".claude.json");

        let mut document = serde_json::Map::new();
        document.insert("theme".to_string(), "light".into());
        for (key, text) in &extra {
            if key != "theme" {
                document.insert(key.clone(), text.as_str().into());
            }
        }
        fs::write(&claude, serde_json::to_string_pretty(&document).unwrap()).unwrap();
        fs::set_permissions(&claude, fs::Permissions::from_mode(file_mode)).unwrap();

        let tools = StubTools::default();
        let ctx = ActivationContext::new(fixture.home(), &tools);
        let theme = fixture.theme("t", &[("claude", value)], &[]);
        prop_assert!(!has_errors(&activator::switch(&theme, &ctx)));

        let edited: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&fs::read_to_string(&claude).unwrap()).unwrap();
        for (key, original) in document.iter().filter(|(key, _)| *key != "theme") {
            prop_assert_eq!(edited.get(key), Some(original));
        }
        if value == "dark" {
            prop_assert!(!edited.contains_key("theme"));
        } else {
            prop_assert_eq!(edited.get("theme"), Some(&serde_json::Value::from(value)));
        }
        prop_assert_eq!(mode(&claude), file_mode);
    }

    #[test]
    fn test_state_round_trip(
        dark in "[a-z][a-z0-9-]{0,15}",
        light in "[a-z][a-z0-9-]{0,15}",
    ) {
        let home = tempfile::tempdir().unwrap();
        let store = StateStore::new(home.path());

        assert_ok!(store.write_default(Variant::Dark, &dark));
        prop_assert_eq!(store.read_default(Variant::Dark).unwrap(), dark.clone());
        prop_assert_eq!(store.read_default(Variant::Light).unwrap(), "");

        assert_ok!(store.write_default(Variant::Light, &light));
        prop_assert_eq!(store.read_default(Variant::Dark).unwrap(), dark);
        prop_assert_eq!(store.read_default(Variant::Light).unwrap(), light);
    }
}
