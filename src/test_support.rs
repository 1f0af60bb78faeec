use log::{LevelFilter, Log, Metadata, Record};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard, Once};
use std::thread::{self, ThreadId};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

// Log records are tagged with the emitting thread so parallel tests only see
// their own lines.
static CAPTURED: LazyLock<Mutex<Vec<(ThreadId, String)>>> = LazyLock::new(|| Mutex::new(Vec::new()));
static INSTALL_LOGGER: Once = Once::new();

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut captured = CAPTURED.lock().unwrap_or_else(|poison| poison.into_inner());
        captured.push((thread::current().id(), record.args().to_string()));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

pub(crate) fn install_capture_logger() {
    INSTALL_LOGGER.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Debug);
    });
}

/// Lines logged so far by the calling thread.
pub(crate) fn captured_logs() -> Vec<String> {
    let me = thread::current().id();
    CAPTURED
        .lock()
        .unwrap_or_else(|poison| poison.into_inner())
        .iter()
        .filter(|(id, _)| *id == me)
        .map(|(_, line)| line.clone())
        .collect()
}

pub(crate) fn create_test_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    // This sets HEAD to an unborn `main` branch before the first commit.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Initial commit"]);

    temp_dir
}

/// An empty bare repository at `<tempdir>/remote.git`.
pub(crate) fn create_bare_remote() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    git(temp_dir.path(), &["init", "--bare", "remote.git"]);
    let bare = temp_dir.path().join("remote.git");
    (temp_dir, bare)
}

/// Run git directly, bypassing the session layer, and return trimmed stdout.
pub(crate) fn git(repo_dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }

    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
