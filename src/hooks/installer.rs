use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{SetupOptions, HOOKS_DIR, LINT_STAGED_FILE};
use crate::error::{CrucialyError, Result};
use crate::hooks::{HookKind, LintStagedConfig};

/// What happened to a single hook file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    Installed,
    UpToDate,
}

/// What happened to the lint-staged configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintConfigStatus {
    Installed,
    AlreadyExists,
    Skipped,
}

/// Actions taken by a setup run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub options: SetupOptions,
    /// Every hook is disabled, nothing was touched
    pub nothing_to_do: bool,
    pub created_hooks_dir: bool,
    pub hooks: Vec<(HookKind, HookStatus)>,
    pub lint_config: LintConfigStatus,
}

impl SetupReport {
    fn nothing_to_do(options: SetupOptions) -> Self {
        SetupReport {
            options,
            nothing_to_do: true,
            created_hooks_dir: false,
            hooks: Vec::new(),
            lint_config: LintConfigStatus::Skipped,
        }
    }

    /// True when any hook or config file was written
    pub fn changed(&self) -> bool {
        self.hooks
            .iter()
            .any(|(_, status)| *status == HookStatus::Installed)
            || self.lint_config == LintConfigStatus::Installed
    }
}

/// Synchronizes hook scripts and the lint-staged config under a project root.
///
/// Every operation is idempotent: files already holding the expected content
/// are left alone and an existing lint-staged config is never overwritten.
#[derive(Debug, Clone)]
pub struct HookInstaller {
    root: PathBuf,
}

impl HookInstaller {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        HookInstaller { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Install error naming `path` relative to the project root
    fn install_error(&self, path: &Path, source: std::io::Error) -> CrucialyError {
        let shown = path.strip_prefix(&self.root).unwrap_or(path);
        CrucialyError::install(shown, source)
    }

    pub fn hooks_dir(&self) -> PathBuf {
        self.root.join(HOOKS_DIR)
    }

    pub fn hook_path(&self, hook: HookKind) -> PathBuf {
        self.hooks_dir().join(hook.name())
    }

    pub fn lint_config_path(&self) -> PathBuf {
        self.root.join(LINT_STAGED_FILE)
    }

    /// Create the hooks directory. Returns `true` if it did not exist.
    pub fn ensure_hooks_dir(&self) -> Result<bool> {
        let dir = self.hooks_dir();
        if dir.exists() {
            return Ok(false);
        }

        fs::create_dir_all(&dir).map_err(|e| self.install_error(&dir, e))?;
        Ok(true)
    }

    /// Write `hook`'s script unless the file already has the expected content.
    pub fn install_hook(&self, hook: HookKind) -> Result<HookStatus> {
        let target = self.hook_path(hook);
        let expected = hook.script();

        // Unreadable or non-UTF-8 content counts as outdated
        if let Ok(existing) = fs::read_to_string(&target) {
            if existing == expected {
                return Ok(HookStatus::UpToDate);
            }
        }

        fs::write(&target, expected).map_err(|e| self.install_error(&target, e))?;
        make_executable(&target).map_err(|e| self.install_error(&target, e))?;

        Ok(HookStatus::Installed)
    }

    /// Write the default lint-staged config if no config file exists yet.
    pub fn install_lint_config(&self) -> Result<LintConfigStatus> {
        let target = self.lint_config_path();
        if target.exists() {
            return Ok(LintConfigStatus::AlreadyExists);
        }

        let content = LintStagedConfig::default().to_json()?;
        fs::write(&target, content).map_err(|e| self.install_error(&target, e))?;

        Ok(LintConfigStatus::Installed)
    }

    /// Install every enabled hook and, unless lint is skipped, the lint-staged config.
    pub fn run(&self, options: &SetupOptions) -> Result<SetupReport> {
        if options.all_skipped() {
            return Ok(SetupReport::nothing_to_do(*options));
        }

        let created_hooks_dir = self.ensure_hooks_dir()?;

        let hooks = HookKind::enabled(options)
            .into_iter()
            .map(|hook| self.install_hook(hook).map(|status| (hook, status)))
            .collect::<Result<Vec<_>>>()?;

        let lint_config = if options.skip_lint {
            LintConfigStatus::Skipped
        } else {
            self.install_lint_config()?
        };

        Ok(SetupReport {
            options: *options,
            nothing_to_do: false,
            created_hooks_dir,
            hooks,
            lint_config,
        })
    }
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = fs::metadata(path)?.permissions();
    permissions.set_mode(0o755);
    fs::set_permissions(path, permissions)
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
