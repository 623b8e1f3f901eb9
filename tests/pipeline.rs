//! Pipeline tests against in-memory fake ports.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use locklint::context::ServiceContext;
use locklint::error::LintError;
use locklint::pipeline::{run, RunConfig};
use locklint::ports::filesystem::FileSystem;
use locklint::ports::git::{GitStatus, VcsStatus};
use locklint::ports::package_manager::{PackageManager, ToolOutput};
use locklint::report::RunOutcome;
use locklint::verify::Mode;

type SharedFiles = Arc<Mutex<HashMap<PathBuf, String>>>;

struct MemoryFs {
    files: SharedFiles,
}

impl FileSystem for MemoryFs {
    fn read_to_string(
        &self,
        path: &Path,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no such file: {}", path.display()).into())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}

struct StaticGit {
    status: VcsStatus,
}

impl GitStatus for StaticGit {
    fn status(&self, _path: &Path) -> VcsStatus {
        self.status
    }
}

struct PanickingGit;

impl GitStatus for PanickingGit {
    fn status(&self, path: &Path) -> VcsStatus {
        panic!("unexpected git query for {}", path.display());
    }
}

/// Fake package manager: lock-only "regeneration" applies a scripted set of
/// file writes to the shared in-memory tree and records its working directory.
struct ScriptedPkg {
    files: SharedFiles,
    writes: Vec<(PathBuf, String)>,
    cwds: Arc<Mutex<Vec<PathBuf>>>,
}

impl PackageManager for ScriptedPkg {
    fn version(&self) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        Ok("10.9.2".to_string())
    }

    fn lock_only(
        &self,
        cwd: &Path,
    ) -> Result<ToolOutput, Box<dyn std::error::Error + Send + Sync>> {
        self.cwds.lock().unwrap().push(cwd.to_path_buf());
        let mut files = self.files.lock().unwrap();
        for (path, contents) in &self.writes {
            files.insert(path.clone(), contents.clone());
        }
        Ok(ToolOutput { exit_code: 0, stderr: String::new() })
    }
}

struct Fixture {
    files: SharedFiles,
    cwds: Arc<Mutex<Vec<PathBuf>>>,
}

impl Fixture {
    fn new(seed: &[(&str, &str)]) -> Self {
        let map: HashMap<PathBuf, String> =
            seed.iter().map(|(p, c)| (PathBuf::from(p), (*c).to_string())).collect();
        Self { files: Arc::new(Mutex::new(map)), cwds: Arc::new(Mutex::new(Vec::new())) }
    }

    fn context(&self, git: Box<dyn GitStatus>, writes: &[(&str, &str)]) -> ServiceContext {
        let pkg = ScriptedPkg {
            files: Arc::clone(&self.files),
            writes: writes
                .iter()
                .map(|(p, c)| (PathBuf::from(p), (*c).to_string()))
                .collect(),
            cwds: Arc::clone(&self.cwds),
        };
        ServiceContext::with(
            Box::new(MemoryFs { files: Arc::clone(&self.files) }),
            git,
            Box::new(pkg),
        )
    }

    fn file(&self, path: &str) -> String {
        self.files.lock().unwrap()[&PathBuf::from(path)].clone()
    }
}

fn config(start: &str, mode: Mode) -> RunConfig {
    RunConfig { start_dir: PathBuf::from(start), mode, skip_guard: true }
}

fn clean_git() -> Box<dyn GitStatus> {
    Box::new(StaticGit { status: VcsStatus { available: true, clean: true } })
}

const MANIFEST: &str = r#"{"name": "foo", "version": "1.0.0"}"#;
const LOCKFILE: &str = r#"{"name": "foo", "dependencies": {"bar": "^1.0.0"}}"#;

#[test]
fn in_sync_run_is_idempotent() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    // Regeneration rewrites the lockfile with identical content.
    let ctx = fixture.context(clean_git(), &[("/repo/package-lock.json", LOCKFILE)]);

    for _ in 0..2 {
        let outcome = run(&ctx, &config("/repo", Mode::Strict)).unwrap();
        assert_eq!(outcome, RunOutcome::InSync);
        assert_eq!(fixture.file("/repo/package-lock.json"), LOCKFILE);
        assert_eq!(fixture.file("/repo/package.json"), MANIFEST);
    }
}

#[test]
fn manifest_mutation_is_fatal_in_both_modes() {
    for mode in [Mode::Strict, Mode::Warn] {
        let fixture = Fixture::new(&[
            ("/repo/package.json", MANIFEST),
            ("/repo/package-lock.json", LOCKFILE),
        ]);
        let ctx = fixture.context(
            clean_git(),
            &[("/repo/package.json", r#"{"name": "foo", "version": "9.9.9"}"#)],
        );

        let err = run(&ctx, &config("/repo", mode)).unwrap_err();
        assert!(matches!(err, LintError::ManifestMutated(_)));
        assert_eq!(err.exit_code(), 1);
    }
}

#[test]
fn peer_only_changes_report_in_sync() {
    let before = r#"{"packages": {"node_modules/x": {"version": "1.0.0", "peer": true}}}"#;
    let after = r#"{"packages": {"node_modules/x": {"version": "1.0.0"}}}"#;
    for mode in [Mode::Strict, Mode::Warn] {
        let fixture = Fixture::new(&[
            ("/repo/package.json", MANIFEST),
            ("/repo/package-lock.json", before),
        ]);
        let ctx = fixture.context(clean_git(), &[("/repo/package-lock.json", after)]);

        let outcome = run(&ctx, &config("/repo", mode)).unwrap();
        assert_eq!(outcome, RunOutcome::InSync);
    }
}

#[test]
fn drift_raises_in_strict_mode() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let drifted = r#"{"name": "foo", "dependencies": {"bar": "^1.0.1"}}"#;
    let ctx = fixture.context(clean_git(), &[("/repo/package-lock.json", drifted)]);

    let err = run(&ctx, &config("/repo", Mode::Strict)).unwrap_err();
    assert!(matches!(err, LintError::LockfileDrift(_)));
    assert_eq!(err.exit_code(), 2);
    let text = err.to_string();
    assert!(text.contains("^1.0.0"));
    assert!(text.contains("^1.0.1"));
    // The regenerated lockfile stays on disk.
    assert_eq!(fixture.file("/repo/package-lock.json"), drifted);
}

#[test]
fn drift_is_collected_in_warn_mode() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let drifted = r#"{"name": "foo", "dependencies": {"bar": "^1.0.1"}}"#;
    let ctx = fixture.context(clean_git(), &[("/repo/package-lock.json", drifted)]);

    let outcome = run(&ctx, &config("/repo", Mode::Warn)).unwrap();
    assert_eq!(outcome, RunOutcome::IssuesReported);
    assert_eq!(outcome.exit_code(), 2);
    assert_eq!(fixture.file("/repo/package-lock.json"), drifted);
}

#[test]
fn skipped_guard_never_queries_git() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let ctx = fixture
        .context(Box::new(PanickingGit), &[("/repo/package-lock.json", LOCKFILE)]);

    // skip_guard is true in `config`; a git query would panic.
    let outcome = run(&ctx, &config("/repo", Mode::Strict)).unwrap();
    assert_eq!(outcome, RunOutcome::InSync);
}

#[test]
fn dirty_tree_aborts_before_regeneration_in_strict_mode() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let dirty = Box::new(StaticGit { status: VcsStatus { available: true, clean: false } });
    let ctx = fixture.context(dirty, &[("/repo/package-lock.json", LOCKFILE)]);
    let mut cfg = config("/repo", Mode::Strict);
    cfg.skip_guard = false;

    let err = run(&ctx, &cfg).unwrap_err();
    assert!(matches!(err, LintError::UncommittedChanges(_)));
    assert!(fixture.cwds.lock().unwrap().is_empty());
}

#[test]
fn dirty_tree_still_checks_drift_in_warn_mode() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let dirty = Box::new(StaticGit { status: VcsStatus { available: true, clean: false } });
    let ctx = fixture.context(dirty, &[("/repo/package-lock.json", LOCKFILE)]);
    let mut cfg = config("/repo", Mode::Warn);
    cfg.skip_guard = false;

    // Uncommitted-changes issues were collected, so the run reports them
    // even though the lockfile itself regenerated identically.
    let outcome = run(&ctx, &cfg).unwrap();
    assert_eq!(outcome, RunOutcome::IssuesReported);
    assert_eq!(fixture.cwds.lock().unwrap().len(), 1);
}

#[test]
fn workspace_member_regenerates_at_the_workspace_root() {
    let fixture = Fixture::new(&[
        ("/repo/pkgs/foo/package.json", MANIFEST),
        ("/repo/package-lock.json", LOCKFILE),
    ]);
    let ctx = fixture.context(clean_git(), &[("/repo/package-lock.json", LOCKFILE)]);

    let outcome = run(&ctx, &config("/repo/pkgs/foo", Mode::Strict)).unwrap();
    assert_eq!(outcome, RunOutcome::InSync);
    assert_eq!(*fixture.cwds.lock().unwrap(), vec![PathBuf::from("/repo")]);
}

#[test]
fn missing_lockfile_is_fatal() {
    let fixture = Fixture::new(&[("/repo/package.json", MANIFEST)]);
    let ctx = fixture.context(clean_git(), &[]);

    let err = run(&ctx, &config("/repo", Mode::Warn)).unwrap_err();
    assert!(matches!(err, LintError::NotFound(_)));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn malformed_lockfile_is_fatal() {
    let fixture = Fixture::new(&[
        ("/repo/package.json", MANIFEST),
        ("/repo/package-lock.json", "{not json"),
    ]);
    let ctx = fixture.context(clean_git(), &[]);

    let err = run(&ctx, &config("/repo", Mode::Warn)).unwrap_err();
    assert!(matches!(err, LintError::Malformed { .. }));
}
