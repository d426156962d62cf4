// tests/installer_test.rs
use std::fs;

use crucialy::cli::orchestration::run_setup;
use crucialy::config::SetupOptions;
use crucialy::hooks::{HookInstaller, HookKind, HookStatus, LintConfigStatus, LintStagedConfig};
use tempfile::TempDir;

fn options(skip_lint: bool, skip_commit_msg: bool) -> SetupOptions {
    SetupOptions {
        skip_lint,
        skip_commit_msg,
    }
}

#[test]
fn test_fresh_setup_writes_everything() {
    let dir = TempDir::new().unwrap();
    let report = run_setup(&options(false, false), dir.path()).unwrap();

    assert!(report.created_hooks_dir);
    assert!(report.changed());
    assert_eq!(
        report.hooks,
        vec![
            (HookKind::PreCommit, HookStatus::Installed),
            (HookKind::CommitMsg, HookStatus::Installed),
        ]
    );
    assert_eq!(report.lint_config, LintConfigStatus::Installed);

    for hook in HookKind::ALL {
        let content = fs::read_to_string(dir.path().join(".husky").join(hook.name())).unwrap();
        assert_eq!(content, hook.script());
    }

    let lint_config = fs::read_to_string(dir.path().join(".lintstagedrc")).unwrap();
    assert_eq!(lint_config, LintStagedConfig::default().to_json().unwrap());
}

#[test]
fn test_second_setup_is_up_to_date() {
    let dir = TempDir::new().unwrap();
    run_setup(&options(false, false), dir.path()).unwrap();

    let report = run_setup(&options(false, false), dir.path()).unwrap();
    assert!(!report.created_hooks_dir);
    assert!(!report.changed());
    assert!(report
        .hooks
        .iter()
        .all(|(_, status)| *status == HookStatus::UpToDate));
    assert_eq!(report.lint_config, LintConfigStatus::AlreadyExists);
}

#[test]
fn test_modified_hook_is_rewritten() {
    let dir = TempDir::new().unwrap();
    let installer = HookInstaller::new(dir.path());
    installer.ensure_hooks_dir().unwrap();
    fs::write(installer.hook_path(HookKind::CommitMsg), "#!/bin/sh\nexit 0\n").unwrap();

    assert_eq!(
        installer.install_hook(HookKind::CommitMsg).unwrap(),
        HookStatus::Installed
    );
    assert_eq!(
        fs::read_to_string(installer.hook_path(HookKind::CommitMsg)).unwrap(),
        HookKind::CommitMsg.script()
    );
}

#[test]
fn test_user_lint_config_is_never_overwritten() {
    let dir = TempDir::new().unwrap();
    let custom = "{\n  \"*.rs\": [\"rustfmt\"]\n}\n";
    fs::write(dir.path().join(".lintstagedrc"), custom).unwrap();

    let report = run_setup(&options(false, false), dir.path()).unwrap();
    assert_eq!(report.lint_config, LintConfigStatus::AlreadyExists);
    assert_eq!(
        fs::read_to_string(dir.path().join(".lintstagedrc")).unwrap(),
        custom
    );
}

#[test]
fn test_skip_lint_installs_only_commit_msg() {
    let dir = TempDir::new().unwrap();
    let report = run_setup(&options(true, false), dir.path()).unwrap();

    assert_eq!(
        report.hooks,
        vec![(HookKind::CommitMsg, HookStatus::Installed)]
    );
    assert_eq!(report.lint_config, LintConfigStatus::Skipped);
    assert!(!dir.path().join(".husky/pre-commit").exists());
    assert!(!dir.path().join(".lintstagedrc").exists());
}

#[test]
fn test_skip_commit_msg_installs_lint_only() {
    let dir = TempDir::new().unwrap();
    let report = run_setup(&options(false, true), dir.path()).unwrap();

    assert_eq!(
        report.hooks,
        vec![(HookKind::PreCommit, HookStatus::Installed)]
    );
    assert_eq!(report.lint_config, LintConfigStatus::Installed);
    assert!(!dir.path().join(".husky/commit-msg").exists());
}

#[test]
fn test_skip_everything_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let report = run_setup(&options(true, true), dir.path()).unwrap();

    assert!(report.nothing_to_do);
    assert!(!report.changed());
    assert!(!dir.path().join(".husky").exists());
}

#[cfg(unix)]
#[test]
fn test_hooks_are_executable() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    run_setup(&options(false, false), dir.path()).unwrap();

    for hook in HookKind::ALL {
        let mode = fs::metadata(dir.path().join(".husky").join(hook.name()))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o755, "{} should be executable", hook.name());
    }
}
