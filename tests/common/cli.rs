use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch working directory plus a scratch home directory.
pub struct GlWorkspace {
    _temp: TempDir,
    pub root: PathBuf,
    pub home: PathBuf,
}

impl GlWorkspace {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("temp dir");
        let root = temp.path().join("work");
        let home = temp.path().join("home");
        fs::create_dir(&root).expect("create work dir");
        fs::create_dir(&home).expect("create home dir");
        Self {
            _temp: temp,
            root,
            home,
        }
    }

    pub fn write_work(&self, body: &str) {
        fs::write(self.root.join(".gltform"), body).expect("write work config");
    }

    pub fn write_home(&self, body: &str) {
        fs::write(self.home.join(".gltform"), body).expect("write home config");
    }

    pub fn read_work(&self) -> String {
        fs::read_to_string(self.root.join(".gltform")).expect("read work config")
    }

    pub fn home_config(&self) -> PathBuf {
        self.home.join(".gltform")
    }

    /// `gltform` running inside `root` with `HOME` pointed at `home`.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_gltform"));
        cmd.current_dir(&self.root)
            .env("HOME", &self.home)
            .env_remove("RUST_LOG");
        cmd
    }
}

pub struct RunOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_gltform<I, S>(workspace: &GlWorkspace, args: I, label: &str) -> RunOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = workspace
        .cmd()
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("{label}: failed to run gltform: {e}"));
    RunOutput {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
